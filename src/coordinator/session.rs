//! Edit-session state for the entry form.

use crate::domain::ContactId;

/// What the entry form is doing.
///
/// `current_id()` is `Some` exactly when `is_editing()` is true; the enum
/// makes any other combination unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditSession {
    /// Form closed
    #[default]
    Closed,
    /// Form open for a new entry
    Creating,
    /// Form open for an existing entry
    Editing(ContactId),
}

impl EditSession {
    pub fn is_open(&self) -> bool {
        !matches!(self, EditSession::Closed)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing(_))
    }

    pub fn current_id(&self) -> Option<ContactId> {
        match self {
            EditSession::Editing(id) => Some(*id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_id_iff_editing() {
        let sessions = [
            EditSession::Closed,
            EditSession::Creating,
            EditSession::Editing(ContactId::new(4)),
        ];

        for session in sessions {
            assert_eq!(session.current_id().is_some(), session.is_editing());
        }
    }

    #[test]
    fn test_open_states() {
        assert!(!EditSession::default().is_open());
        assert!(EditSession::Creating.is_open());
        assert!(!EditSession::Creating.is_editing());
        assert_eq!(
            EditSession::Editing(ContactId::new(4)).current_id(),
            Some(ContactId::new(4))
        );
    }
}
