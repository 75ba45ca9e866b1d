//! Domain value objects and types.
//!
//! Type-safe wrappers for the contact book's identifiers and search
//! vocabulary. Parsing happens once, at the edge, so the rest of the
//! crate never handles a malformed id or an unknown search field.

pub mod contact_id;
pub mod errors;
pub mod search_field;

pub use contact_id::ContactId;
pub use errors::ValidationError;
pub use search_field::SearchField;
