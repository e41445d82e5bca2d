//! Drag-and-drop feedback for the page bar.
//!
//! Contains [`PageBarUI`] methods that feed pointer and keyboard input into
//! the [`crate::drag_session::DragSession`], paint the drop indicator and the
//! floating ghost tab, and turn a completed drag into a reorder action.

use crate::drag_session::{DragInput, DragPhase};
use crate::page::PageState;
use crate::ui_constants::{
    PAGE_DROP_DOT_RADIUS, PAGE_DROP_INDICATOR_WIDTH, PAGE_TAB_FONT_SIZE, PAGE_TAB_HEIGHT,
    PAGE_TAB_ICON_GAP, PAGE_TAB_ICON_SIZE, PAGE_TAB_PAD_X, PAGE_TAB_ROUNDING,
};
use form_pages_config::Config;

use super::PageBarAction;
use super::PageBarUI;
use super::icons::PageIcon;
use super::tab_rendering::{rgb, rgba};
use super::title_utils::display_title;

impl PageBarUI {
    /// Cache what the ghost tab needs once a drag starts.
    pub(super) fn start_drag_visuals(&mut self, title: &str, tab_width: f32) {
        self.dragging_title = title.to_string();
        self.dragging_tab_width = tab_width;
    }

    /// Arrow keys move a keyboard drag, Enter/Space drop it, Escape cancels.
    pub(super) fn handle_keyboard_drag(
        &mut self,
        ctx: &egui::Context,
        page_count: usize,
    ) -> PageBarAction {
        if self.drag.input() != Some(DragInput::Keyboard) {
            return PageBarAction::None;
        }

        let (left, right, drop, cancel) = ctx.input_mut(|i| {
            (
                i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowLeft),
                i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowRight),
                i.consume_key(egui::Modifiers::NONE, egui::Key::Enter)
                    || i.consume_key(egui::Modifiers::NONE, egui::Key::Space),
                i.consume_key(egui::Modifiers::NONE, egui::Key::Escape),
            )
        });

        if cancel {
            self.drag.cancel();
            return PageBarAction::None;
        }
        if left {
            self.drag.keyboard_step(-1, page_count);
        }
        if right {
            self.drag.keyboard_step(1, page_count);
        }
        if drop {
            return self
                .drag
                .release()
                .map_or(PageBarAction::None, PageBarAction::from);
        }
        PageBarAction::None
    }

    /// Render drag feedback and handle drop/cancel for pointer drags.
    ///
    /// Must run after the tabs so `tab_rects` holds this frame's slots.
    pub(super) fn render_drag_feedback(
        &mut self,
        ui: &mut egui::Ui,
        pages: &PageState,
        config: &Config,
    ) -> PageBarAction {
        let mut action = PageBarAction::None;
        let ctx = ui.ctx().clone();

        let pointer_driven = matches!(self.drag.phase(), DragPhase::Pending { .. })
            || self.drag.input() == Some(DragInput::Pointer);

        if pointer_driven {
            // Cancel on Escape
            if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                self.drag.cancel();
                return action;
            }

            let centers: Vec<f32> = self.tab_rects.iter().map(|(_, r)| r.center().x).collect();
            if let Some(pointer_pos) = ctx.input(|i| i.pointer.hover_pos())
                && self.drag.pointer_moved(pointer_pos, &centers)
                && let Some(page) = self.drag.dragging_id().and_then(|id| pages.get(id))
            {
                let title = page.title.clone();
                let width = config.tab_min_width;
                self.start_drag_visuals(&title, width);
                self.menu.close();
            }

            // Handle drop (pointer released)
            if ctx.input(|i| i.pointer.any_released()) {
                if let Some(message) = self.drag.release() {
                    action = PageBarAction::from(message);
                }
                return action;
            }
        }

        if self.drag.is_dragging() {
            if pointer_driven {
                ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
            }
            self.paint_drop_indicator(ui, config);
        }

        action
    }

    /// Vertical indicator line with glow at the preview position.
    fn paint_drop_indicator(&self, ui: &egui::Ui, config: &Config) {
        let (Some(source), Some(over)) = (self.drag.source_index(), self.drag.over_index()) else {
            return;
        };
        let Some((_, slot)) = self.tab_rects.get(over) else {
            return;
        };

        // The preview already shows the page in its new slot; mark the edge
        // it moved towards.
        let x = if over > source {
            slot.right() + PAGE_DROP_INDICATOR_WIDTH
        } else {
            slot.left() - PAGE_DROP_INDICATOR_WIDTH
        };
        let top = slot.top();
        let bottom = slot.bottom();

        let color = rgb(config.tab_drop_indicator);
        let glow = rgba(config.tab_drop_indicator, 50);

        // Glow behind the indicator (wider, semi-transparent)
        ui.painter().rect_filled(
            egui::Rect::from_min_max(egui::pos2(x - 4.0, top), egui::pos2(x + 4.0, bottom)),
            2.0,
            glow,
        );
        ui.painter().line_segment(
            [egui::pos2(x, top), egui::pos2(x, bottom)],
            egui::Stroke::new(PAGE_DROP_INDICATOR_WIDTH, color),
        );
        for y in [top, bottom] {
            ui.painter()
                .circle_filled(egui::pos2(x, y), PAGE_DROP_DOT_RADIUS, color);
        }
    }

    /// Render a floating ghost tab that follows the pointer along the strip.
    pub(super) fn render_ghost_tab(&self, ctx: &egui::Context, config: &Config) {
        if self.drag.input() != Some(DragInput::Pointer) {
            return;
        }
        let Some(pointer_pos) = ctx.input(|i| i.pointer.hover_pos()) else {
            return;
        };
        // Movement is restricted to the horizontal axis: keep the strip's y
        let Some(strip_top) = self.tab_rects.first().map(|(_, r)| r.top()) else {
            return;
        };

        let ghost_width = self.dragging_tab_width;
        let ghost_height = PAGE_TAB_HEIGHT.min(config.tab_bar_height);
        let ghost_pos = egui::pos2(pointer_pos.x - ghost_width / 2.0, strip_top);

        egui::Area::new(egui::Id::new("page_drag_ghost"))
            .fixed_pos(ghost_pos)
            .order(egui::Order::Tooltip)
            .interactable(false)
            .show(ctx, |ui| {
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(ghost_width, ghost_height),
                    egui::Sense::hover(),
                );
                let painter = ui.painter();

                // Shadow
                painter.rect_filled(
                    rect.translate(egui::vec2(2.0, 2.0)),
                    PAGE_TAB_ROUNDING,
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.rect_filled(
                    rect,
                    PAGE_TAB_ROUNDING,
                    rgba(config.tab_active_background, 230),
                );
                painter.rect_stroke(
                    rect,
                    PAGE_TAB_ROUNDING,
                    egui::Stroke::new(1.5, rgb(config.tab_drop_indicator)),
                    egui::StrokeKind::Middle,
                );

                let icon_rect = egui::Rect::from_min_size(
                    egui::pos2(
                        rect.left() + PAGE_TAB_PAD_X,
                        rect.center().y - PAGE_TAB_ICON_SIZE / 2.0,
                    ),
                    egui::vec2(PAGE_TAB_ICON_SIZE, PAGE_TAB_ICON_SIZE),
                );
                PageIcon::for_title(&self.dragging_title).paint(
                    painter,
                    icon_rect,
                    rgb(config.tab_active_icon),
                );

                let text_left = icon_rect.right() + PAGE_TAB_ICON_GAP;
                let font_id = egui::FontId::proportional(PAGE_TAB_FONT_SIZE);
                let shown = display_title(
                    &self.dragging_title,
                    config.tab_max_title_chars,
                    &font_id,
                    (rect.right() - PAGE_TAB_PAD_X - text_left).max(0.0),
                );
                painter.text(
                    egui::pos2(text_left, rect.center().y),
                    egui::Align2::LEFT_CENTER,
                    shown,
                    font_id,
                    rgb(config.tab_active_text),
                );
            });
    }
}
