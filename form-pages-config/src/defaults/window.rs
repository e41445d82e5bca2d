//! Default values for window and tab bar layout settings.

pub fn window_title() -> String {
    "Form Builder".to_string()
}

pub fn window_width() -> u32 {
    960
}

pub fn window_height() -> u32 {
    600
}

pub fn tab_bar_height() -> f32 {
    56.0 // Matches the 56px max height of the original nav strip
}

pub fn tab_min_width() -> f32 {
    140.0
}

pub fn tab_max_title_chars() -> usize {
    12
}
