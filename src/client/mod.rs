//! HTTP client for the contact book API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles URL building, error mapping
//! (including the API's `{"detail": ...}` error bodies) and metrics.

mod async_wrapper;
pub use async_wrapper::{AsyncContactClient, AsyncContactClientImpl};

use crate::config::Config;
use crate::domain::{ContactId, SearchField};
use crate::error::{ContactApiError, ContactApiResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{Contact, ContactDraft};
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the contact book API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ContactBookClient {
    /// Base URL for the API
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ContactBookClient {
    /// Create a new client from configuration.
    ///
    /// A `request_timeout` of zero disables the timeout.
    pub fn new(config: &Config) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if config.request_timeout > 0 {
            builder = builder.timeout(Duration::from_secs(config.request_timeout));
        }

        Self {
            base_url: config.api_url.clone(),
            agent: Arc::new(builder.build()),
            metrics: Metrics::new(),
        }
    }

    /// Create a client with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Share an existing metrics collector instead of the client's own.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Run a prepared request, timing it and mapping failures.
    fn execute(
        &self,
        method: &str,
        url: &str,
        send: impl FnOnce() -> Result<ureq::Response, ureq::Error>,
    ) -> ContactApiResult<ureq::Response> {
        tracing::debug!("{} {}", method, url);
        let timer = HttpTimer::new(self.metrics.clone());

        match send() {
            Ok(response) => {
                tracing::debug!("{} {} - status {}", method, url, response.status());
                timer.complete();
                Ok(response)
            }
            Err(e) => {
                timer.complete_with_error();
                let err = Self::map_error(e);
                tracing::debug!("{} {} - error: {}", method, url, err);
                Err(err)
            }
        }
    }

    fn get(&self, path: &str) -> ContactApiResult<ureq::Response> {
        let url = self.build_url(path);
        self.execute("GET", &url, || {
            self.agent
                .get(&url)
                .set("Accept", "application/json")
                .call()
        })
    }

    fn post(&self, path: &str, body: &serde_json::Value) -> ContactApiResult<ureq::Response> {
        let url = self.build_url(path);
        self.execute("POST", &url, || {
            self.agent
                .post(&url)
                .set("Content-Type", "application/json")
                .send_json(body)
        })
    }

    fn put(&self, path: &str, body: &serde_json::Value) -> ContactApiResult<ureq::Response> {
        let url = self.build_url(path);
        self.execute("PUT", &url, || {
            self.agent
                .put(&url)
                .set("Content-Type", "application/json")
                .send_json(body)
        })
    }

    fn delete(&self, path: &str) -> ContactApiResult<ureq::Response> {
        let url = self.build_url(path);
        self.execute("DELETE", &url, || self.agent.delete(&url).call())
    }

    /// Map a ureq error to a ContactApiError.
    fn map_error(error: ureq::Error) -> ContactApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let body = response.into_string().unwrap_or_default();
                ContactApiError::from_status(code, body)
            }
            ureq::Error::Transport(transport) => match transport.kind() {
                ureq::ErrorKind::ConnectionFailed => {
                    ContactApiError::HttpError("Connection failed".to_string())
                }
                ureq::ErrorKind::Dns => ContactApiError::HttpError("DNS lookup failed".to_string()),
                ureq::ErrorKind::Io => ContactApiError::Timeout,
                _ => ContactApiError::HttpError(transport.to_string()),
            },
        }
    }

    fn read_body(response: ureq::Response) -> ContactApiResult<String> {
        response
            .into_string()
            .map_err(|e| ContactApiError::HttpError(e.to_string()))
    }

    fn read_contacts(&self, response: ureq::Response) -> ContactApiResult<Vec<Contact>> {
        let body = Self::read_body(response)?;
        let contacts: Vec<Contact> = serde_json::from_str(&body)?;
        self.metrics.record_contacts_fetched(contacts.len());
        Ok(contacts)
    }

    /// Parse a mutation response; any 2xx counts as success even without a record.
    ///
    /// The server has already applied the change once the status arrived, so
    /// an unreadable body is logged and treated as "no record".
    fn read_optional_contact(response: ureq::Response) -> Option<Contact> {
        Self::parse_optional_contact(Self::read_body(response))
    }

    fn parse_optional_contact(body: ContactApiResult<String>) -> Option<Contact> {
        let body = match body {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Mutation succeeded but its body could not be read: {}", e);
                return None;
            }
        };
        if body.trim().is_empty() {
            return None;
        }
        serde_json::from_str::<Contact>(&body).ok()
    }

    // ========================= Contact Operations =========================

    /// List every contact, in server order.
    pub fn list_contacts(&self) -> ContactApiResult<Vec<Contact>> {
        let response = self.get("/contacts")?;
        self.read_contacts(response)
    }

    /// Get a single contact by ID.
    pub fn get_contact(&self, id: ContactId) -> ContactApiResult<Contact> {
        let path = format!("/contacts/{}", id);
        let response = self.get(&path)?;
        let body = Self::read_body(response)?;
        let contact: Contact = serde_json::from_str(&body)?;
        self.metrics.record_contacts_fetched(1);
        Ok(contact)
    }

    /// Search contacts by a single field. The value is sent percent-encoded.
    pub fn search_contacts(&self, field: SearchField, value: &str) -> ContactApiResult<Vec<Contact>> {
        let path = format!(
            "/contacts/search?{}={}",
            field.as_param(),
            urlencoding::encode(value)
        );
        let response = self.get(&path)?;
        self.read_contacts(response)
    }

    /// Create a new contact.
    pub fn create_contact(&self, draft: &ContactDraft) -> ContactApiResult<Option<Contact>> {
        let body = serde_json::to_value(draft)?;
        let response = self.post("/contacts", &body)?;
        let created = Self::read_optional_contact(response);

        if let Some(ref contact) = created {
            tracing::info!("Contact created with id: {}", contact.id);
        }
        Ok(created)
    }

    /// Update an existing contact.
    pub fn update_contact(
        &self,
        id: ContactId,
        draft: &ContactDraft,
    ) -> ContactApiResult<Option<Contact>> {
        let body = serde_json::to_value(draft)?;
        let path = format!("/contacts/{}", id);
        let response = self.put(&path, &body)?;
        Ok(Self::read_optional_contact(response))
    }

    /// Delete a contact.
    pub fn delete_contact(&self, id: ContactId) -> ContactApiResult<()> {
        let path = format!("/contacts/{}", id);
        self.delete(&path)?;
        Ok(())
    }
}
