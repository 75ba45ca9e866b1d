//! Search field selection.

use super::errors::ValidationError;
use std::fmt;
use std::str::FromStr;

/// Field a search query is matched against on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Name,
    Phone,
}

impl SearchField {
    /// Pick the field for a free-text query.
    ///
    /// Any ASCII digit makes it a phone search; everything else searches by
    /// name. There is no way to force a name search for a name containing
    /// digits through this path; use an explicit field for that.
    ///
    /// ```
    /// use contactbook_client::domain::SearchField;
    ///
    /// assert_eq!(SearchField::classify("555-1234"), SearchField::Phone);
    /// assert_eq!(SearchField::classify("Anna"), SearchField::Name);
    /// ```
    pub fn classify(query: &str) -> Self {
        if query.chars().any(|c| c.is_ascii_digit()) {
            SearchField::Phone
        } else {
            SearchField::Name
        }
    }

    /// Query-string parameter name understood by `/contacts/search`.
    pub fn as_param(&self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::Phone => "phone",
        }
    }
}

impl FromStr for SearchField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SearchField::Name),
            "phone" => Ok(SearchField::Phone),
            other => Err(ValidationError::UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}
