//! Presentation seam.
//!
//! The coordinator never prints. It reports list updates, the error
//! placeholder, connectivity, notifications and confirmation requests to a
//! [`ContactView`]; the terminal front end is one implementation, tests use a
//! recording one.

mod terminal;

pub use terminal::{SharedLines, TerminalView};

use crate::domain::ContactId;
use crate::models::{Contact, ContactDraft};
use async_trait::async_trait;

/// Connectivity as derived from list fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    /// No list fetch has completed yet
    #[default]
    Unknown,
    Online,
    Offline,
}

/// Placeholder text shown when the contact list cannot be loaded.
pub const UNREACHABLE_MESSAGE: &str = "Unable to reach your contact book.";

/// Prompt used before a destructive delete.
pub const DELETE_PROMPT: &str = "Remove this entry permanently?";

#[async_trait]
pub trait ContactView: Send + Sync {
    /// Replace the displayed list with `contacts`, in the given order.
    fn render_contacts(&self, contacts: &[Contact]);

    /// Replace the displayed list with an error placeholder.
    fn render_error(&self, message: &str);

    fn set_status(&self, status: ConnectionStatus);

    /// Blocking user notification (the equivalent of an alert).
    fn notify(&self, message: &str);

    /// Show the entry form. `editing` carries the id of the record being edited.
    fn show_form(&self, editing: Option<ContactId>, draft: &ContactDraft);

    fn hide_form(&self);

    /// Ask the user to confirm a destructive action.
    async fn confirm(&self, prompt: &str) -> bool;
}
