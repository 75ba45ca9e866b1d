//! Data access seam between the coordinator and the contact book API.

mod http_contact_repository;
mod traits;

pub use http_contact_repository::HttpContactRepository;
pub use traits::ContactRepository;
