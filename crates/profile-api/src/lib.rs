//! Data model and HTTP client for the event-forms member API.
//!
//! Records are fetched read-only, one per identifier, and carried verbatim
//! into the viewer; nothing here validates or normalizes the remote data.

pub mod client;
pub mod types;

pub use client::{ApiError, ProfileClient};
pub use types::{MemberProfile, Photo, ProfileEnvelope};
