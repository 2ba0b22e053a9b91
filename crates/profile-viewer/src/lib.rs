//! Desktop member profile viewer.
//!
//! This crate provides a Dioxus desktop application that fetches one
//! member record from the event-forms API and renders it as a profile
//! dashboard with contact and share actions.

pub mod actions;
pub mod components;
pub mod config;
pub mod state;
