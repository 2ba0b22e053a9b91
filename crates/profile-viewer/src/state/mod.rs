//! State management for the profile viewer.

pub mod app_state;

pub use app_state::*;
