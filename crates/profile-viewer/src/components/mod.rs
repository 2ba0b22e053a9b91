//! UI components for the profile viewer.

mod app;
mod contact_panel;
mod profile_header;
mod screens;
mod stats_panel;

pub use app::*;
pub use contact_panel::*;
pub use profile_header::*;
pub use screens::*;
pub use stats_panel::*;
