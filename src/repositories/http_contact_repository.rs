use crate::client::AsyncContactClient;
use crate::domain::{ContactId, SearchField};
use crate::error::ContactApiResult;
use crate::models::{Contact, ContactDraft};
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Contact repository backed by the contact book HTTP API.
///
/// This repository delegates all operations to the AsyncContactClient,
/// providing a clean abstraction layer between the coordinator and the
/// underlying HTTP client.
pub struct HttpContactRepository {
    client: Arc<dyn AsyncContactClient>,
}

impl HttpContactRepository {
    /// Create a new HttpContactRepository with the given client.
    pub fn new(client: Arc<dyn AsyncContactClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContactRepository for HttpContactRepository {
    async fn list(&self) -> ContactApiResult<Vec<Contact>> {
        self.client.list_contacts().await
    }

    async fn get(&self, id: ContactId) -> ContactApiResult<Contact> {
        self.client.get_contact(id).await
    }

    async fn search(&self, field: SearchField, query: &str) -> ContactApiResult<Vec<Contact>> {
        self.client.search_contacts(field, query).await
    }

    async fn create(&self, draft: &ContactDraft) -> ContactApiResult<Option<Contact>> {
        self.client.create_contact(draft).await
    }

    async fn update(&self, id: ContactId, draft: &ContactDraft) -> ContactApiResult<Option<Contact>> {
        self.client.update_contact(id, draft).await
    }

    async fn delete(&self, id: ContactId) -> ContactApiResult<()> {
        self.client.delete_contact(id).await
    }
}
