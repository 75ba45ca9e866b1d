//! Request coordination: debounced search, list reloads, and the entry form.
//!
//! [`RequestCoordinator`] is the only component with ordering rules. It owns
//! the debounce timer, the edit session and the connectivity status, and it
//! decides which request to send for each UI event.

mod debounce;
mod request_coordinator;
mod session;

pub use debounce::{DebounceState, Debouncer};
pub use request_coordinator::{LoadOutcome, RemoveOutcome, RequestCoordinator, SaveOutcome};
pub use session::EditSession;
