//! Page tab bar UI using egui
//!
//! Renders the horizontal strip of page tabs and reports user intents as
//! [`PageBarAction`]s. The page list itself is never mutated here.
//!
//! ## Module layout
//!
//! - [`state`]: `PageBarUI` struct definition and constructor.
//! - [`horizontal`]: Strip layout, separators, scrolling (`render_horizontal`).
//! - [`tab_rendering`]: Individual page tab rendering.
//! - [`drag_drop`]: Drag feedback, ghost tab and drop handling.
//! - [`context_menu`]: The floating page menu.
//! - [`icons`]: Painter-drawn page icons.
//! - [`title_utils`]: Title truncation.

mod context_menu;
mod drag_drop;
mod horizontal;
mod icons;
mod state;
mod tab_rendering;
mod title_utils;

pub use icons::PageIcon;
pub use state::PageBarUI;

use crate::context_menu::{MenuItem, MenuOutcome};
use crate::page::{PageId, PageMessage, PageState};
use form_pages_config::Config;

/// Actions that can be triggered from the page bar
#[derive(Debug, Clone, PartialEq)]
pub enum PageBarAction {
    /// No action
    None,
    /// Make a page active
    Select(PageId),
    /// Insert a new page at this index
    Add(usize),
    /// Move the page at `from` to `to`
    Reorder { from: usize, to: usize },
    /// Ask the user for a new title for this page
    Rename(PageId),
    /// Duplicate a page
    Duplicate(PageId),
    /// Delete a page
    Delete(PageId),
    /// "Set as first page" menu entry
    SetAsFirst(PageId),
    /// "Copy" menu entry
    Copy(PageId),
}

impl PageBarAction {
    /// The page-list message for this action.
    ///
    /// `None` for [`PageBarAction::None`] and for [`PageBarAction::Rename`],
    /// which needs the new title from the user first.
    pub fn to_message(&self) -> Option<PageMessage> {
        match *self {
            PageBarAction::None | PageBarAction::Rename(_) => None,
            PageBarAction::Select(id) => Some(PageMessage::Select(id)),
            PageBarAction::Add(index) => Some(PageMessage::AddPage(index)),
            PageBarAction::Reorder { from, to } => Some(PageMessage::Reorder { from, to }),
            PageBarAction::Duplicate(id) => Some(PageMessage::Duplicate(id)),
            PageBarAction::Delete(id) => Some(PageMessage::Delete(id)),
            PageBarAction::SetAsFirst(id) => Some(PageMessage::SetAsFirst(id)),
            PageBarAction::Copy(id) => Some(PageMessage::Copy(id)),
        }
    }
}

impl From<PageMessage> for PageBarAction {
    fn from(message: PageMessage) -> Self {
        match message {
            PageMessage::Select(id) => PageBarAction::Select(id),
            PageMessage::AddPage(index) => PageBarAction::Add(index),
            PageMessage::Reorder { from, to } => PageBarAction::Reorder { from, to },
            PageMessage::Rename { id, .. } => PageBarAction::Rename(id),
            PageMessage::Duplicate(id) => PageBarAction::Duplicate(id),
            PageMessage::Delete(id) => PageBarAction::Delete(id),
            PageMessage::SetAsFirst(id) => PageBarAction::SetAsFirst(id),
            PageMessage::Copy(id) => PageBarAction::Copy(id),
        }
    }
}

impl From<MenuOutcome> for PageBarAction {
    fn from(outcome: MenuOutcome) -> Self {
        match outcome {
            MenuOutcome::Dispatch(message) => message.into(),
            MenuOutcome::PromptRename(id) => PageBarAction::Rename(id),
        }
    }
}

/// Which overflow fades (and scroll arrows) are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FadeVisibility {
    pub left: bool,
    pub right: bool,
}

/// Fade visibility for a scroll strip at `offset` showing `viewport` pixels
/// of `content` pixels. The one pixel of slack absorbs fractional scaling.
pub fn fade_visibility(offset: f32, viewport: f32, content: f32) -> FadeVisibility {
    FadeVisibility {
        left: offset > 0.0,
        right: offset + viewport < content - 1.0,
    }
}

impl PageBarUI {
    /// Check if a drag operation is in progress
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Check if the context menu is currently open
    pub fn is_context_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Page targeted by the open context menu
    pub fn context_menu_target(&self) -> Option<PageId> {
        self.menu.target()
    }

    /// Screen rect the open context menu is anchored to
    pub fn context_menu_anchor(&self) -> Option<egui::Rect> {
        self.menu.anchor()
    }

    /// Screen rect of a context menu row from the last frame it was shown
    pub fn context_menu_item_rect(&self, item: MenuItem) -> Option<egui::Rect> {
        self.menu_item_rects
            .iter()
            .find(|(row, _)| *row == item)
            .map(|(_, rect)| *rect)
    }

    /// Visible part of the scroll strip on the last frame
    pub fn strip_viewport(&self) -> egui::Rect {
        self.strip_viewport
    }

    /// Trailing "Add page" button on the last frame
    pub fn add_button_rect(&self) -> egui::Rect {
        self.add_button_rect
    }

    /// Overflow fades as of the last rendered frame
    pub fn fades(&self) -> FadeVisibility {
        self.fades
    }

    /// Current horizontal scroll offset of the strip
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Screen rects of the page tabs from the last frame, in rendered order
    pub fn tab_rects(&self) -> &[(PageId, egui::Rect)] {
        &self.tab_rects
    }

    /// Get the page bar height
    pub fn get_height(&self, config: &Config) -> f32 {
        config.tab_bar_height
    }

    /// Render the page bar and return any action triggered
    pub fn render(
        &mut self,
        ctx: &egui::Context,
        pages: &PageState,
        config: &Config,
    ) -> PageBarAction {
        self.render_horizontal(ctx, pages, config)
    }

    /// Open the context menu for a page; used by integration tests.
    pub fn test_open_context_menu(&mut self, id: PageId, anchor: egui::Rect) {
        self.menu.open(anchor, id);
        self.menu_opened_frame = 0;
    }

    /// Close the context menu; used by integration tests.
    pub fn test_close_context_menu(&mut self) {
        self.menu.close();
    }

    /// Start a keyboard reorder directly; used by integration tests.
    pub fn test_start_keyboard_drag(&mut self, id: PageId, index: usize) {
        self.drag.keyboard_start(id, index);
    }

    /// Get the index the dragged page would land at; used by integration tests.
    pub fn test_drop_target_index(&self) -> Option<usize> {
        self.drag.over_index()
    }

    /// Get the id of the page being dragged; used by integration tests.
    pub fn test_dragging_page(&self) -> Option<PageId> {
        self.drag.dragging_id()
    }

    /// Set the scroll offset directly; used by integration tests.
    pub fn test_set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset;
    }
}
