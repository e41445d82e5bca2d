//! Default colour values for the tab bar and context menu.

pub fn background_color() -> [u8; 3] {
    [17, 24, 39] // gray-900
}

pub fn tab_bar_background() -> [u8; 3] {
    [255, 255, 255]
}

pub fn tab_active_background() -> [u8; 3] {
    [255, 255, 255]
}

pub fn tab_inactive_background() -> [u8; 3] {
    [255, 255, 255]
}

pub fn tab_active_border() -> [u8; 3] {
    [156, 163, 175] // gray-400
}

pub fn tab_inactive_border() -> [u8; 3] {
    [229, 231, 235] // gray-200
}

pub fn tab_active_text() -> [u8; 3] {
    [17, 24, 39]
}

pub fn tab_inactive_text() -> [u8; 3] {
    [156, 163, 175]
}

pub fn tab_active_icon() -> [u8; 3] {
    [250, 204, 21] // yellow-400
}

pub fn tab_inactive_icon() -> [u8; 3] {
    [209, 213, 219] // gray-300
}

pub fn tab_drop_indicator() -> [u8; 3] {
    [59, 130, 246] // blue-500
}

pub fn menu_accent_color() -> [u8; 3] {
    [37, 99, 235] // blue-600
}

pub fn menu_danger_color() -> [u8; 3] {
    [220, 38, 38] // red-600
}
