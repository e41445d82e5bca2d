//! Context menu controller for page tabs.
//!
//! Tracks whether the floating page menu is shown, what it is anchored to and
//! which page it targets, translates menu items into [`PageMessage`]s, and
//! computes where the menu sits relative to its anchor.

use crate::page::{PageId, PageMessage};

/// Entries of the page context menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    SetAsFirst,
    Rename,
    Copy,
    Duplicate,
    Delete,
}

impl MenuItem {
    pub const ALL: [MenuItem; 5] = [
        MenuItem::SetAsFirst,
        MenuItem::Rename,
        MenuItem::Copy,
        MenuItem::Duplicate,
        MenuItem::Delete,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::SetAsFirst => "Set as first page",
            MenuItem::Rename => "Rename",
            MenuItem::Copy => "Copy",
            MenuItem::Duplicate => "Duplicate",
            MenuItem::Delete => "Delete",
        }
    }

    /// Whether a separator is drawn above this item.
    pub fn separated(self) -> bool {
        self == MenuItem::Delete
    }
}

/// What the host should do after a menu item was activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Apply this message to the page list
    Dispatch(PageMessage),
    /// Ask the user for a new title for this page, then dispatch a rename
    PromptRename(PageId),
}

/// Menu visibility state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ContextMenuState {
    #[default]
    Hidden,
    Visible {
        /// Screen rect of the tab the menu belongs to
        anchor: egui::Rect,
        target: PageId,
    },
}

/// Two-state controller for the floating page menu. Only one menu exists at a time.
#[derive(Debug, Clone, Default)]
pub struct ContextMenuController {
    state: ContextMenuState,
}

impl ContextMenuController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ContextMenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ContextMenuState::Visible { .. })
    }

    pub fn target(&self) -> Option<PageId> {
        match self.state {
            ContextMenuState::Visible { target, .. } => Some(target),
            ContextMenuState::Hidden => None,
        }
    }

    pub fn anchor(&self) -> Option<egui::Rect> {
        match self.state {
            ContextMenuState::Visible { anchor, .. } => Some(anchor),
            ContextMenuState::Hidden => None,
        }
    }

    /// Show the menu for `target`, replacing any menu already open.
    pub fn open(&mut self, anchor: egui::Rect, target: PageId) {
        log::debug!("Opening context menu for page {}", target);
        self.state = ContextMenuState::Visible { anchor, target };
    }

    /// Keep the menu attached to its tab when the tab moves (scroll, reorder).
    pub fn update_anchor(&mut self, new_anchor: egui::Rect) {
        if let ContextMenuState::Visible { anchor, .. } = &mut self.state {
            *anchor = new_anchor;
        }
    }

    /// Explicit close request.
    pub fn close(&mut self) {
        self.state = ContextMenuState::Hidden;
    }

    /// Interaction outside the menu bounds.
    pub fn dismiss(&mut self) {
        if self.is_open() {
            log::debug!("Context menu dismissed");
        }
        self.close();
    }

    /// Activate `item` for the current target and close the menu.
    ///
    /// Returns `None` if the menu was not open.
    pub fn activate(&mut self, item: MenuItem) -> Option<MenuOutcome> {
        let target = self.target()?;
        self.close();

        let outcome = match item {
            MenuItem::Rename => MenuOutcome::PromptRename(target),
            MenuItem::Duplicate => MenuOutcome::Dispatch(PageMessage::Duplicate(target)),
            MenuItem::Delete => MenuOutcome::Dispatch(PageMessage::Delete(target)),
            MenuItem::SetAsFirst => MenuOutcome::Dispatch(PageMessage::SetAsFirst(target)),
            MenuItem::Copy => MenuOutcome::Dispatch(PageMessage::Copy(target)),
        };
        Some(outcome)
    }
}

/// Side of the anchor the menu ended up on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSide {
    Top,
    Bottom,
}

/// Result of [`place_menu`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuPlacement {
    /// Top-left corner of the menu
    pub pos: egui::Pos2,
    pub side: MenuSide,
}

/// Place a menu of `size` next to `anchor` inside `viewport`.
///
/// Prefers above the anchor, left edges aligned, separated by `offset`. Flips
/// below when the menu overflows the top and overflows the bottom less. Then
/// shifts the menu to keep `padding` between it and every viewport edge; when
/// the viewport is too small the top-left edges win.
pub fn place_menu(
    anchor: egui::Rect,
    size: egui::Vec2,
    viewport: egui::Rect,
    offset: f32,
    padding: f32,
) -> MenuPlacement {
    let above_y = anchor.top() - offset - size.y;
    let below_y = anchor.bottom() + offset;

    let overflow_top = (viewport.top() - above_y).max(0.0);
    let overflow_bottom = (below_y + size.y - viewport.bottom()).max(0.0);

    let (side, y) = if overflow_top > 0.0 && overflow_bottom < overflow_top {
        (MenuSide::Bottom, below_y)
    } else {
        (MenuSide::Top, above_y)
    };

    let x = clamp_axis(
        anchor.left(),
        viewport.left() + padding,
        viewport.right() - padding - size.x,
    );
    let y = clamp_axis(
        y,
        viewport.top() + padding,
        viewport.bottom() - padding - size.y,
    );

    MenuPlacement {
        pos: egui::pos2(x, y),
        side,
    }
}

/// Clamp without panicking when `min > max`; `min` wins.
fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Rect, pos2, vec2};

    fn viewport() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0))
    }

    #[test]
    fn prefers_top_start() {
        let anchor = Rect::from_min_size(pos2(100.0, 540.0), vec2(90.0, 32.0));
        let placement = place_menu(anchor, vec2(220.0, 200.0), viewport(), 4.0, 8.0);
        assert_eq!(placement.side, MenuSide::Top);
        assert_eq!(placement.pos, pos2(100.0, 336.0));
    }

    #[test]
    fn flips_below_when_no_room_above() {
        let anchor = Rect::from_min_size(pos2(100.0, 20.0), vec2(90.0, 32.0));
        let placement = place_menu(anchor, vec2(220.0, 200.0), viewport(), 4.0, 8.0);
        assert_eq!(placement.side, MenuSide::Bottom);
        assert_eq!(placement.pos.y, 56.0);
    }

    #[test]
    fn shifts_left_to_keep_padding() {
        let anchor = Rect::from_min_size(pos2(700.0, 540.0), vec2(90.0, 32.0));
        let placement = place_menu(anchor, vec2(220.0, 200.0), viewport(), 4.0, 8.0);
        assert_eq!(placement.pos.x, 800.0 - 8.0 - 220.0);
    }

    #[test]
    fn shifts_right_to_keep_padding() {
        let anchor = Rect::from_min_size(pos2(-30.0, 540.0), vec2(90.0, 32.0));
        let placement = place_menu(anchor, vec2(220.0, 200.0), viewport(), 4.0, 8.0);
        assert_eq!(placement.pos.x, 8.0);
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let tiny = Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 50.0));
        let anchor = Rect::from_min_size(pos2(10.0, 10.0), vec2(20.0, 20.0));
        let placement = place_menu(anchor, vec2(220.0, 200.0), tiny, 4.0, 8.0);
        assert_eq!(placement.pos, pos2(8.0, 8.0));
    }

    #[test]
    fn activate_closes_and_maps_items() {
        let anchor = Rect::from_min_size(pos2(0.0, 0.0), vec2(10.0, 10.0));
        let mut menu = ContextMenuController::new();

        menu.open(anchor, PageId(2));
        assert_eq!(
            menu.activate(MenuItem::Duplicate),
            Some(MenuOutcome::Dispatch(PageMessage::Duplicate(PageId(2))))
        );
        assert!(!menu.is_open());

        menu.open(anchor, PageId(3));
        assert_eq!(
            menu.activate(MenuItem::Rename),
            Some(MenuOutcome::PromptRename(PageId(3)))
        );
        assert!(!menu.is_open());
    }

    #[test]
    fn activate_when_hidden_does_nothing() {
        let mut menu = ContextMenuController::new();
        assert_eq!(menu.activate(MenuItem::Delete), None);
    }

    #[test]
    fn open_replaces_previous_menu() {
        let mut menu = ContextMenuController::new();
        let a = Rect::from_min_size(pos2(0.0, 0.0), vec2(10.0, 10.0));
        let b = Rect::from_min_size(pos2(50.0, 0.0), vec2(10.0, 10.0));
        menu.open(a, PageId(1));
        menu.open(b, PageId(4));
        assert_eq!(menu.target(), Some(PageId(4)));
        assert_eq!(menu.anchor(), Some(b));
    }
}
