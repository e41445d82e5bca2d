//! Named constants for UI layout dimensions.
//!
//! Only layout constants (dimensions, sizes, spacing) belong here. Colours
//! and interaction tuning live in `form_pages_config::Config`.

// ---------------------------------------------------------------------------
// Page tabs  (src/tab_bar_ui/tab_rendering.rs)
// ---------------------------------------------------------------------------

/// Height of a single page tab.
pub const PAGE_TAB_HEIGHT: f32 = 32.0;
/// Corner radius of a page tab.
pub const PAGE_TAB_ROUNDING: f32 = 8.0;
/// Horizontal padding inside a page tab.
pub const PAGE_TAB_PAD_X: f32 = 10.0;
/// Edge length of the page icon square.
pub const PAGE_TAB_ICON_SIZE: f32 = 16.0;
/// Gap between the page icon and the title.
pub const PAGE_TAB_ICON_GAP: f32 = 6.0;
/// Edge length of the "⋮" menu button on the active tab.
pub const PAGE_TAB_MENU_BTN_SIZE: f32 = 18.0;
/// Inset of the menu button from the tab's right edge.
pub const PAGE_TAB_MENU_BTN_MARGIN: f32 = 6.0;
/// Font size of the tab title.
pub const PAGE_TAB_FONT_SIZE: f32 = 14.0;

// ---------------------------------------------------------------------------
// Strip layout  (src/tab_bar_ui/horizontal.rs)
// ---------------------------------------------------------------------------

/// Width of the dotted separator between adjacent tabs.
pub const PAGE_SEPARATOR_WIDTH: f32 = 40.0;
/// Diameter of the hover-revealed "+" on a separator.
pub const PAGE_SEPARATOR_ADD_BTN_SIZE: f32 = 20.0;
/// Dot spacing of the separator track.
pub const PAGE_SEPARATOR_DOT_SPACING: f32 = 5.0;
/// Horizontal padding at both ends of the scrollable strip.
pub const PAGE_STRIP_PAD_X: f32 = 16.0;
/// Width of the trailing "Add page" button.
pub const ADD_PAGE_BTN_WIDTH: f32 = 110.0;
/// Gap before the trailing "Add page" button.
pub const ADD_PAGE_BTN_GAP: f32 = 8.0;
/// Width of the left/right overflow fade gradients.
pub const SCROLL_FADE_WIDTH: f32 = 32.0;
/// Number of bands used to approximate a fade gradient.
pub const SCROLL_FADE_STEPS: usize = 8;
/// Diameter of the round scroll arrow buttons.
pub const SCROLL_ARROW_SIZE: f32 = 28.0;
/// Inset of the scroll arrow buttons from the strip edge.
pub const SCROLL_ARROW_MARGIN: f32 = 4.0;

// ---------------------------------------------------------------------------
// Drag feedback  (src/tab_bar_ui/drag_drop.rs)
// ---------------------------------------------------------------------------

/// Stroke width of the drop position indicator.
pub const PAGE_DROP_INDICATOR_WIDTH: f32 = 3.0;
/// Radius of the dots capping the drop indicator.
pub const PAGE_DROP_DOT_RADIUS: f32 = 3.0;
/// Opacity (0-255) of the tab left behind while it is dragged.
pub const PAGE_DRAG_SOURCE_ALPHA: u8 = 110;

// ---------------------------------------------------------------------------
// Context menu  (src/tab_bar_ui/context_menu.rs)
// ---------------------------------------------------------------------------

/// Minimum width of the page context menu.
pub const PAGE_MENU_MIN_WIDTH: f32 = 220.0;
/// Height of one context menu row.
pub const PAGE_MENU_ITEM_HEIGHT: f32 = 32.0;
/// Size assumed for the menu before it has been laid out once.
pub const PAGE_MENU_ESTIMATED_HEIGHT: f32 = 236.0;
/// Corner radius of the menu frame.
pub const PAGE_MENU_ROUNDING: f32 = 12.0;

// ---------------------------------------------------------------------------
// Rename dialog  (src/rename_dialog.rs)
// ---------------------------------------------------------------------------

/// Width of the rename text field.
pub const RENAME_DIALOG_EDIT_WIDTH: f32 = 240.0;
