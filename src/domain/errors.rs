//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// The provided ID is not a non-negative integer.
    InvalidId(String),

    /// The provided search field is not one the API supports.
    UnknownField(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::InvalidId(id) => write!(f, "Invalid contact ID: {}", id),
            Self::UnknownField(field) => {
                write!(f, "Unknown search field: {} (expected name or phone)", field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
