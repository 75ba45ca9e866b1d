//! ContactId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Server-assigned identifier of a contact.
///
/// The contact book hands out integer primary keys. The client never
/// generates ids and never does arithmetic on them; it only echoes them
/// back in `/contacts/{id}` paths.
///
/// # Example
///
/// ```
/// use contactbook_client::domain::ContactId;
///
/// let id: ContactId = "42".parse().unwrap();
/// assert_eq!(id.value(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(u64);

impl ContactId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw numeric id.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ContactId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for ContactId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        trimmed
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidId(trimmed.to_string()))
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_id_parse() {
        let id: ContactId = " 17 ".parse().unwrap();
        assert_eq!(id, ContactId::new(17));
    }

    #[test]
    fn test_contact_id_rejects_garbage() {
        assert_eq!("".parse::<ContactId>(), Err(ValidationError::EmptyId));
        assert_eq!(
            "abc".parse::<ContactId>(),
            Err(ValidationError::InvalidId("abc".to_string()))
        );
        assert!("-3".parse::<ContactId>().is_err());
    }

    #[test]
    fn test_contact_id_serde_is_transparent() {
        let id = ContactId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");

        let parsed: ContactId = serde_json::from_str("12").unwrap();
        assert_eq!(parsed.value(), 12);
    }
}
