//! Data models for contact book entities.
//!
//! This module contains the records exchanged with the contact book API.

pub mod contact;

pub use contact::{Contact, ContactDraft};
