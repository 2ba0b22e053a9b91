//! Shared UI components for the member profile viewer.
//!
//! Provides the theme wrapper, stat cards, contact detail rows, and the
//! display-formatting helpers they share.

pub mod contact_row;
pub mod display;
pub mod stat_card;
pub mod theme;

pub use contact_row::ContactDetailItem;
pub use display::{action_visible, count_display, text_display, PLACEHOLDER};
pub use stat_card::StatCard;
pub use theme::{Theme, ThemedRoot, CURRENT_THEME};

/// Shared CSS containing design tokens, theme definitions, and base styles.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
