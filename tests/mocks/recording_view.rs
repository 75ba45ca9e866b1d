use async_trait::async_trait;
use contactbook_client::domain::ContactId;
use contactbook_client::models::{Contact, ContactDraft};
use contactbook_client::view::{ConnectionStatus, ContactView};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Everything the coordinator told the view, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    /// Names of the rendered contacts
    Contacts(Vec<String>),
    Error(String),
    Status(ConnectionStatus),
    Notify(String),
    ShowForm(Option<ContactId>, ContactDraft),
    HideForm,
    Confirm(String),
}

/// View that records calls and answers confirmations with a fixed reply.
pub struct RecordingView {
    events: Mutex<Vec<ViewEvent>>,
    confirm_answer: AtomicBool,
}

impl RecordingView {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            confirm_answer: AtomicBool::new(true),
        }
    }

    /// Answer every confirmation with `answer`.
    pub fn answer_confirmations(&self, answer: bool) {
        self.confirm_answer.store(answer, Ordering::SeqCst);
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Names from the most recent list render, if any.
    pub fn last_rendered(&self) -> Option<Vec<String>> {
        self.events().into_iter().rev().find_map(|event| match event {
            ViewEvent::Contacts(names) => Some(names),
            _ => None,
        })
    }

    /// Whatever currently occupies the list area: names or an error placeholder.
    pub fn list_area(&self) -> Option<ViewEvent> {
        self.events()
            .into_iter()
            .rev()
            .find(|event| matches!(event, ViewEvent::Contacts(_) | ViewEvent::Error(_)))
    }

    pub fn notifications(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ViewEvent::Notify(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn statuses(&self) -> Vec<ConnectionStatus> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ViewEvent::Status(status) => Some(status),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ViewEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl Default for RecordingView {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactView for RecordingView {
    fn render_contacts(&self, contacts: &[Contact]) {
        self.push(ViewEvent::Contacts(
            contacts.iter().map(|c| c.name.clone()).collect(),
        ));
    }

    fn render_error(&self, message: &str) {
        self.push(ViewEvent::Error(message.to_string()));
    }

    fn set_status(&self, status: ConnectionStatus) {
        self.push(ViewEvent::Status(status));
    }

    fn notify(&self, message: &str) {
        self.push(ViewEvent::Notify(message.to_string()));
    }

    fn show_form(&self, editing: Option<ContactId>, draft: &ContactDraft) {
        self.push(ViewEvent::ShowForm(editing, draft.clone()));
    }

    fn hide_form(&self) {
        self.push(ViewEvent::HideForm);
    }

    async fn confirm(&self, prompt: &str) -> bool {
        self.push(ViewEvent::Confirm(prompt.to_string()));
        self.confirm_answer.load(Ordering::SeqCst)
    }
}
