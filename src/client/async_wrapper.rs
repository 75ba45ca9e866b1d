//! Async wrapper around the synchronous ContactBookClient.
//!
//! Each call runs on tokio's blocking pool via `spawn_blocking`, so the
//! single-threaded event loop is never blocked by HTTP I/O. The response is
//! handed back to the event loop when the blocking call finishes.

use crate::client::ContactBookClient;
use crate::domain::{ContactId, SearchField};
use crate::error::{ContactApiError, ContactApiResult};
use crate::models::{Contact, ContactDraft};
use async_trait::async_trait;
use std::sync::Arc;

/// Async interface to the contact book API.
#[async_trait]
pub trait AsyncContactClient: Send + Sync {
    async fn list_contacts(&self) -> ContactApiResult<Vec<Contact>>;
    async fn get_contact(&self, id: ContactId) -> ContactApiResult<Contact>;
    async fn search_contacts(&self, field: SearchField, value: &str) -> ContactApiResult<Vec<Contact>>;

    async fn create_contact(&self, draft: &ContactDraft) -> ContactApiResult<Option<Contact>>;
    async fn update_contact(
        &self,
        id: ContactId,
        draft: &ContactDraft,
    ) -> ContactApiResult<Option<Contact>>;
    async fn delete_contact(&self, id: ContactId) -> ContactApiResult<()>;
}

/// `spawn_blocking` adapter over [`ContactBookClient`].
#[derive(Clone)]
pub struct AsyncContactClientImpl {
    client: Arc<ContactBookClient>,
}

impl AsyncContactClientImpl {
    pub fn new(client: ContactBookClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Run a blocking client call off the event loop.
    async fn run<T, F>(&self, call: F) -> ContactApiResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&ContactBookClient) -> ContactApiResult<T> + Send + 'static,
    {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || call(&client))
            .await
            .map_err(|e| ContactApiError::HttpError(format!("Task join error: {}", e)))?
    }
}

#[async_trait]
impl AsyncContactClient for AsyncContactClientImpl {
    async fn list_contacts(&self) -> ContactApiResult<Vec<Contact>> {
        self.run(|client| client.list_contacts()).await
    }

    async fn get_contact(&self, id: ContactId) -> ContactApiResult<Contact> {
        self.run(move |client| client.get_contact(id)).await
    }

    async fn search_contacts(&self, field: SearchField, value: &str) -> ContactApiResult<Vec<Contact>> {
        let value = value.to_string();
        self.run(move |client| client.search_contacts(field, &value)).await
    }

    async fn create_contact(&self, draft: &ContactDraft) -> ContactApiResult<Option<Contact>> {
        let draft = draft.clone();
        self.run(move |client| client.create_contact(&draft)).await
    }

    async fn update_contact(
        &self,
        id: ContactId,
        draft: &ContactDraft,
    ) -> ContactApiResult<Option<Contact>> {
        let draft = draft.clone();
        self.run(move |client| client.update_contact(id, &draft)).await
    }

    async fn delete_contact(&self, id: ContactId) -> ContactApiResult<()> {
        self.run(move |client| client.delete_contact(id)).await
    }
}
