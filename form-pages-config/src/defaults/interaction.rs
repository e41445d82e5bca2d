//! Default values for interaction tuning and the seed page list.

use crate::types::PageSeed;

pub fn scroll_amount() -> f32 {
    120.0 // Pixels scrolled per arrow-button press
}

pub fn drag_threshold() -> f32 {
    8.0 // Pointer travel before a press becomes a drag
}

pub fn menu_offset() -> f32 {
    4.0 // Gap between anchor and context menu
}

pub fn menu_padding() -> f32 {
    8.0 // Minimum distance between context menu and viewport edge
}

pub fn pages() -> Vec<PageSeed> {
    vec![
        PageSeed::new(1, "Info"),
        PageSeed::new(2, "Details"),
        PageSeed::new(3, "Other"),
        PageSeed::new(4, "Ending"),
    ]
}
