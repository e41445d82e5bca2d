//! Default value functions for configuration.
//!
//! Each sub-module groups related `default_*` free functions used as
//! `#[serde(default = "crate::defaults::...")]` attributes on `Config` fields.

mod colors;
mod interaction;
mod window;

// ── Window & tab bar layout ────────────────────────────────────────────────
pub use window::{
    tab_bar_height, tab_max_title_chars, tab_min_width, window_height, window_title, window_width,
};

// ── Interaction tuning ─────────────────────────────────────────────────────
pub use interaction::{drag_threshold, menu_offset, menu_padding, pages, scroll_amount};

// ── Colors ─────────────────────────────────────────────────────────────────
pub use colors::{
    background_color, menu_accent_color, menu_danger_color, tab_active_background,
    tab_active_border, tab_active_icon, tab_active_text, tab_bar_background,
    tab_drop_indicator, tab_inactive_background, tab_inactive_border, tab_inactive_icon,
    tab_inactive_text,
};
