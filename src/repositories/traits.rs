use crate::domain::{ContactId, SearchField};
use crate::error::ContactApiResult;
use crate::models::{Contact, ContactDraft};
use async_trait::async_trait;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage and retrieval,
/// enabling different implementations (API client, mock).
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Retrieve every contact, in server order.
    async fn list(&self) -> ContactApiResult<Vec<Contact>>;

    /// Retrieve a single contact by ID.
    async fn get(&self, id: ContactId) -> ContactApiResult<Contact>;

    /// Search contacts matching `query` on a single field.
    async fn search(&self, field: SearchField, query: &str) -> ContactApiResult<Vec<Contact>>;

    /// Create a new contact. Returns the stored record when the server echoes it.
    async fn create(&self, draft: &ContactDraft) -> ContactApiResult<Option<Contact>>;

    /// Update an existing contact.
    async fn update(&self, id: ContactId, draft: &ContactDraft) -> ContactApiResult<Option<Contact>>;

    /// Delete a contact.
    async fn delete(&self, id: ContactId) -> ContactApiResult<()>;
}
