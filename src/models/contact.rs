//! Contact model representing an entry in the contact book.

use crate::domain::ContactId;
use serde::{Deserialize, Deserializer, Serialize};

/// Treat a missing, `null`, or empty email as absent.
fn deserialize_email<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let email: Option<String> = Option::deserialize(deserializer)?;
    Ok(email.filter(|e| !e.is_empty()))
}

/// A contact as returned by the contact book API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    /// Server-assigned identifier
    pub id: ContactId,

    /// Display name
    pub name: String,

    /// Phone number as stored by the server (usually digits only)
    pub phone: String,

    /// Email address, if the contact has one
    #[serde(default, deserialize_with = "deserialize_email")]
    pub email: Option<String>,

    /// When the server created the record (naive ISO 8601 timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Contact {
    /// Create a contact with the required fields.
    pub fn new(id: impl Into<ContactId>, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
            email: None,
            created_at: None,
        }
    }

    /// Builder-style setter for the email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        let email = email.into();
        self.email = if email.is_empty() { None } else { Some(email) };
        self
    }

    /// Turn the record back into an editable draft, e.g. to prefill an edit form.
    pub fn to_draft(&self) -> ContactDraft {
        ContactDraft {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone().unwrap_or_default(),
        }
    }
}

/// Payload for creating or updating a contact.
///
/// `email` is always sent; an empty string means "no email".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl ContactDraft {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: String::new(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }
}
