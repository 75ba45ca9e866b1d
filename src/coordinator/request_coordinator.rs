//! The request coordinator.

use super::debounce::{DebounceState, Debouncer};
use super::session::EditSession;
use crate::domain::{ContactId, SearchField};
use crate::error::ContactApiError;
use crate::metrics::Metrics;
use crate::models::{Contact, ContactDraft};
use crate::repositories::ContactRepository;
use crate::view::{ConnectionStatus, ContactView, DELETE_PROMPT, UNREACHABLE_MESSAGE};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;
use tracing::{debug, error, info, warn};

const SAVE_FALLBACK: &str = "Could not save entry.";
const DELETE_FALLBACK: &str = "Could not delete entry.";
const LOAD_FALLBACK: &str = "Could not load entry.";
const NETWORK_FALLBACK: &str = "Network error.";

/// Result of a list-affecting request (full load or search).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The view now shows this many records
    Applied(usize),
    /// A newer request was issued before this one completed; the view was left alone
    Stale,
    /// The request failed
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// Saved; the server's copy of the record when it returned one
    Saved(Option<Contact>),
    /// Rejected with the message shown to the user; the form stays open
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The user declined; nothing was sent
    Declined,
    Deleted,
    /// The delete failed with the message shown to the user
    Failed(String),
}

struct CoordinatorState {
    query: String,
    debouncer: Debouncer,
    session: EditSession,
    status: ConnectionStatus,
}

struct Inner {
    repository: Arc<dyn ContactRepository>,
    view: Arc<dyn ContactView>,
    metrics: Metrics,
    /// Last sequence number handed to a list-affecting request
    sequence: AtomicU64,
    state: Mutex<CoordinatorState>,
}

/// Turns UI events into contact book requests and routes the results to the view.
///
/// Cloning is cheap and every clone drives the same state. All operations
/// handle their own failures: they report to the view and return an outcome
/// value, never an error.
///
/// Search input is debounced: only the text present when the quiet period
/// ends is resolved. Every request that can replace the list carries a
/// sequence number, and a response is rendered only if no newer such request
/// was issued in the meantime.
#[derive(Clone)]
pub struct RequestCoordinator {
    inner: Arc<Inner>,
}

impl RequestCoordinator {
    pub fn new(
        repository: Arc<dyn ContactRepository>,
        view: Arc<dyn ContactView>,
        debounce: Duration,
    ) -> Self {
        Self::with_metrics(repository, view, debounce, Metrics::new())
    }

    pub fn with_metrics(
        repository: Arc<dyn ContactRepository>,
        view: Arc<dyn ContactView>,
        debounce: Duration,
        metrics: Metrics,
    ) -> Self {
        let state = CoordinatorState {
            query: String::new(),
            debouncer: Debouncer::new(debounce),
            session: EditSession::Closed,
            status: ConnectionStatus::Unknown,
        };

        Self {
            inner: Arc::new(Inner {
                repository,
                view,
                metrics,
                sequence: AtomicU64::new(0),
                state: Mutex::new(state),
            }),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, CoordinatorState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn next_sequence(&self) -> u64 {
        self.inner.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, seq: u64) -> bool {
        self.inner.sequence.load(Ordering::SeqCst) == seq
    }

    // ========================= Accessors =========================

    pub fn metrics(&self) -> &Metrics {
        &self.inner.metrics
    }

    pub fn status(&self) -> ConnectionStatus {
        self.lock_state().status
    }

    pub fn session(&self) -> EditSession {
        self.lock_state().session
    }

    pub fn debounce_state(&self) -> DebounceState {
        self.lock_state().debouncer.state()
    }

    /// The most recent search input, resolved or not.
    pub fn latest_query(&self) -> String {
        self.lock_state().query.clone()
    }

    // ========================= Search =========================

    /// Record a new search input and (re)start the debounce timer.
    ///
    /// The text is captured now; when the timer fires, exactly this text is
    /// resolved. A later input cancels the timer before it fires. Must be
    /// called from within a tokio runtime.
    pub fn on_search_input(&self, text: &str) {
        let captured = text.to_string();
        let weak: Weak<Inner> = Arc::downgrade(&self.inner);

        let mut state = self.lock_state();
        state.query = captured.clone();
        let generation = state.debouncer.restart(move |generation| async move {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let coordinator = RequestCoordinator { inner };
            if coordinator.take_fired_timer(generation) {
                coordinator.resolve_search(&captured).await;
            }
        });

        debug!(generation, "Search input recorded, debounce restarted");
    }

    /// Move the debouncer to Idle if `generation` is still the live timer.
    fn take_fired_timer(&self, generation: u64) -> bool {
        self.lock_state().debouncer.fire(generation)
    }

    /// Cancel a pending timer and resolve its text right away.
    ///
    /// Returns `None` when no search was pending.
    pub async fn flush_search(&self) -> Option<LoadOutcome> {
        let query = {
            let mut state = self.lock_state();
            if !state.debouncer.cancel() {
                return None;
            }
            state.query.clone()
        };
        Some(self.resolve_search(&query).await)
    }

    /// Turn captured search text into a request.
    ///
    /// The empty string reloads the full list. Otherwise the field is chosen
    /// by [`SearchField::classify`].
    pub async fn resolve_search(&self, text: &str) -> LoadOutcome {
        if text.is_empty() {
            return self.load_all().await;
        }
        self.search_by(SearchField::classify(text), text).await
    }

    /// Search against an explicitly chosen field.
    ///
    /// Failures are logged and otherwise ignored: the current list and the
    /// connectivity status are left as they are.
    pub async fn search_by(&self, field: SearchField, text: &str) -> LoadOutcome {
        let seq = self.next_sequence();
        self.inner.metrics.record_search();
        debug!(seq, %field, query = %text, "Searching contacts");

        match self.inner.repository.search(field, text).await {
            Ok(contacts) => {
                if !self.is_current(seq) {
                    self.discard(seq, "search");
                    return LoadOutcome::Stale;
                }
                self.inner.view.render_contacts(&contacts);
                LoadOutcome::Applied(contacts.len())
            }
            Err(e) => {
                warn!(%field, "Search failed: {}", e);
                LoadOutcome::Failed
            }
        }
    }

    // ========================= Listing =========================

    /// Fetch the full list.
    ///
    /// Success marks the connection online; failure marks it offline and
    /// shows the error placeholder in place of the list.
    pub async fn load_all(&self) -> LoadOutcome {
        let seq = self.next_sequence();
        debug!(seq, "Loading all contacts");

        let result = self.inner.repository.list().await;
        let current = self.is_current(seq);

        match result {
            Ok(contacts) => {
                let outcome = if current {
                    self.inner.view.render_contacts(&contacts);
                    LoadOutcome::Applied(contacts.len())
                } else {
                    self.discard(seq, "list");
                    LoadOutcome::Stale
                };
                self.apply_status(ConnectionStatus::Online);
                outcome
            }
            Err(e) => {
                error!("Failed to load contacts: {}", e);
                let outcome = if current {
                    self.inner.view.render_error(UNREACHABLE_MESSAGE);
                    LoadOutcome::Failed
                } else {
                    self.discard(seq, "list");
                    LoadOutcome::Stale
                };
                self.apply_status(ConnectionStatus::Offline);
                outcome
            }
        }
    }

    /// Every completed list fetch sets the status, superseded or not.
    fn apply_status(&self, status: ConnectionStatus) {
        self.lock_state().status = status;
        self.inner.view.set_status(status);
    }

    fn discard(&self, seq: u64, kind: &str) {
        self.inner.metrics.record_stale_response();
        debug!(seq, kind, "Discarding superseded response");
    }

    // ========================= Entry form =========================

    /// Open the form for a new entry.
    pub fn open_new(&self) {
        self.lock_state().session = EditSession::Creating;
        self.inner.view.show_form(None, &ContactDraft::default());
    }

    /// Open the form for a record already at hand.
    pub fn begin_edit(&self, contact: &Contact) {
        self.lock_state().session = EditSession::Editing(contact.id);
        self.inner.view.show_form(Some(contact.id), &contact.to_draft());
    }

    /// Fetch a record by id and open the form for it.
    ///
    /// On failure the user is notified and the session is left unchanged.
    pub async fn open_edit(&self, id: ContactId) -> Option<Contact> {
        match self.inner.repository.get(id).await {
            Ok(contact) => {
                self.begin_edit(&contact);
                Some(contact)
            }
            Err(e) => {
                warn!(%id, "Failed to load contact for editing: {}", e);
                self.inner.view.notify(&user_message(&e, LOAD_FALLBACK));
                None
            }
        }
    }

    pub fn close_form(&self) {
        self.lock_state().session = EditSession::Closed;
        self.inner.view.hide_form();
    }

    /// Submit the form: update when editing, create otherwise.
    ///
    /// Success closes the session and reloads the full list; any search
    /// filter is dropped. Failure shows the server's detail (or a fallback)
    /// and keeps the session open for a retry.
    pub async fn save(&self, draft: ContactDraft) -> SaveOutcome {
        let session = self.session();

        let result = match session.current_id() {
            Some(id) => {
                debug!(%id, "Updating contact");
                self.inner.repository.update(id, &draft).await
            }
            None => {
                debug!("Creating contact");
                self.inner.repository.create(&draft).await
            }
        };

        match result {
            Ok(saved) => {
                info!("Contact saved");
                self.close_form();
                self.load_all().await;
                SaveOutcome::Saved(saved)
            }
            Err(e) => {
                warn!("Save failed: {}", e);
                let message = user_message(&e, SAVE_FALLBACK);
                self.inner.view.notify(&message);
                SaveOutcome::Rejected(message)
            }
        }
    }

    // ========================= Delete =========================

    /// Delete a contact after the user confirms.
    ///
    /// A confirmed delete is always followed by exactly one full reload,
    /// whatever its outcome. Failures are reported to the user.
    pub async fn remove(&self, id: ContactId) -> RemoveOutcome {
        if !self.inner.view.confirm(DELETE_PROMPT).await {
            debug!(%id, "Delete declined");
            return RemoveOutcome::Declined;
        }

        let outcome = match self.inner.repository.delete(id).await {
            Ok(()) => {
                info!(%id, "Contact deleted");
                if self.session().current_id() == Some(id) {
                    self.close_form();
                }
                RemoveOutcome::Deleted
            }
            Err(e) => {
                warn!(%id, "Delete failed: {}", e);
                let message = user_message(&e, DELETE_FALLBACK);
                self.inner.view.notify(&message);
                RemoveOutcome::Failed(message)
            }
        };

        self.load_all().await;
        outcome
    }
}

/// Message shown to the user for a failed mutation.
fn user_message(error: &ContactApiError, fallback: &str) -> String {
    match error.detail() {
        Some(detail) => detail.to_string(),
        None if error.is_transport() => NETWORK_FALLBACK.to_string(),
        None => fallback.to_string(),
    }
}
