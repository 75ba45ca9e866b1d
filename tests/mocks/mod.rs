//! Test doubles shared by the integration tests.

#![allow(dead_code)]

mod mock_contact_repository;
mod recording_view;

pub use mock_contact_repository::{Call, MockContactRepository, Op};
pub use recording_view::{RecordingView, ViewEvent};
