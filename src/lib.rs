//! Contact Book client - a terminal front end for the Contact Book HTTP API.
//!
//! Lists, searches, creates, edits and deletes contacts on a remote contact
//! book service. Search input is debounced and stale responses are dropped so
//! the list always reflects the latest request.
//!
//! # Architecture
//!
//! - **models**: Contact records and create/update payloads
//! - **domain**: Value objects (contact ids, search fields)
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP client for the contact book API, sync and async
//! - **repositories**: The data access seam used by the coordinator
//! - **coordinator**: Debounced search, reloads, stale-response suppression, entry form state
//! - **formatter**: Pure display formatting
//! - **view**: Presentation trait and the terminal renderer
//! - **app**: Interactive command loop
//! - **metrics**: Request counters

pub mod app;
pub mod client;
pub mod config;
pub mod coordinator;
pub mod domain;
pub mod error;
pub mod formatter;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod view;

pub use client::ContactBookClient;
pub use config::Config;
pub use coordinator::{EditSession, LoadOutcome, RemoveOutcome, RequestCoordinator, SaveOutcome};
pub use domain::{ContactId, SearchField};
pub use error::{ConfigError, ContactApiError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{Contact, ContactDraft};
pub use view::{ConnectionStatus, ContactView, TerminalView};
