//! `PageBarUI` struct definition and constructor.

use crate::context_menu::{ContextMenuController, MenuItem};
use crate::drag_session::DragSession;
use crate::page::PageId;
use crate::ui_constants::{PAGE_MENU_ESTIMATED_HEIGHT, PAGE_MENU_MIN_WIDTH};

use super::FadeVisibility;

/// Page bar UI state
pub struct PageBarUI {
    /// Currently hovered page tab
    pub hovered_page: Option<PageId>,
    /// Drag-to-reorder gesture
    pub(super) drag: DragSession,
    /// Cached title of the page being dragged (for ghost rendering)
    pub(super) dragging_title: String,
    /// Width of the tab being dragged (for ghost rendering)
    pub(super) dragging_tab_width: f32,
    /// Per-frame cache of tab slot rects, in rendered order
    pub(super) tab_rects: Vec<(PageId, egui::Rect)>,
    /// Visible part of the scroll strip on the last frame
    pub(super) strip_viewport: egui::Rect,
    /// Trailing "Add page" button on the last frame
    pub(super) add_button_rect: egui::Rect,
    /// Menu rows as laid out on the last frame the menu was shown
    pub(super) menu_item_rects: Vec<(MenuItem, egui::Rect)>,
    /// Floating page menu
    pub(super) menu: ContextMenuController,
    /// Frame when the context menu was opened (to avoid closing on same frame)
    pub(super) menu_opened_frame: u64,
    /// Menu size measured on the previous frame, used for placement
    pub(super) menu_size: egui::Vec2,
    /// Horizontal scroll offset of the strip (in pixels)
    pub(super) scroll_offset: f32,
    /// Overflow fades as of the last rendered frame
    pub(super) fades: FadeVisibility,
}

impl PageBarUI {
    /// Create a new page bar UI with the given drag activation distance
    pub fn new(drag_threshold: f32) -> Self {
        Self {
            hovered_page: None,
            drag: DragSession::new(drag_threshold),
            dragging_title: String::new(),
            dragging_tab_width: 0.0,
            tab_rects: Vec::new(),
            strip_viewport: egui::Rect::NOTHING,
            add_button_rect: egui::Rect::NOTHING,
            menu_item_rects: Vec::new(),
            menu: ContextMenuController::new(),
            menu_opened_frame: 0,
            menu_size: egui::vec2(PAGE_MENU_MIN_WIDTH, PAGE_MENU_ESTIMATED_HEIGHT),
            scroll_offset: 0.0,
            fades: FadeVisibility::default(),
        }
    }
}

impl Default for PageBarUI {
    fn default() -> Self {
        Self::new(DragSession::default().activation_distance())
    }
}
