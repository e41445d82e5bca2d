//! Individual page tab rendering.
//!
//! Contains the [`PageBarUI`] method that draws one tab (background, icon,
//! title, the "⋮" menu button on the active tab) and turns pointer and
//! keyboard input on it into actions or drag-session updates.

use crate::page::PageId;
use crate::ui_constants::{
    PAGE_DRAG_SOURCE_ALPHA, PAGE_TAB_FONT_SIZE, PAGE_TAB_ICON_GAP, PAGE_TAB_ICON_SIZE,
    PAGE_TAB_MENU_BTN_MARGIN, PAGE_TAB_MENU_BTN_SIZE, PAGE_TAB_PAD_X, PAGE_TAB_ROUNDING,
};
use form_pages_config::Config;

use super::PageBarAction;
use super::PageBarUI;
use super::icons::PageIcon;
use super::title_utils::display_title;

/// Opaque colour from a config triple.
pub(super) fn rgb(c: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(c[0], c[1], c[2])
}

/// Colour from a config triple with explicit alpha.
pub(super) fn rgba(c: [u8; 3], alpha: u8) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c[0], c[1], c[2], alpha)
}

/// Per-tab inputs for [`PageBarUI::render_page_tab`].
pub(super) struct TabRenderParams<'a> {
    pub id: PageId,
    /// Position of the page in the committed list (not the drag preview)
    pub index: usize,
    pub title: &'a str,
    pub is_active: bool,
    pub is_being_dragged: bool,
    pub config: &'a Config,
    pub tab_width: f32,
    pub tab_height: f32,
    pub page_count: usize,
}

impl PageBarUI {
    /// Render a single page tab and return any action it triggered.
    pub(super) fn render_page_tab(
        &mut self,
        ui: &mut egui::Ui,
        p: TabRenderParams<'_>,
    ) -> PageBarAction {
        let mut action = PageBarAction::None;
        let config = p.config;

        let (slot_rect, _) = ui.allocate_exact_size(
            egui::vec2(p.tab_width, ui.available_height()),
            egui::Sense::hover(),
        );
        let tab_rect =
            egui::Rect::from_center_size(slot_rect.center(), egui::vec2(p.tab_width, p.tab_height));
        self.tab_rects.push((p.id, tab_rect));

        let opacity = if p.is_being_dragged {
            PAGE_DRAG_SOURCE_ALPHA
        } else {
            255
        };

        let menu_btn_rect = p.is_active.then(|| {
            egui::Rect::from_min_size(
                egui::pos2(
                    tab_rect.right() - PAGE_TAB_MENU_BTN_SIZE - PAGE_TAB_MENU_BTN_MARGIN,
                    tab_rect.center().y - PAGE_TAB_MENU_BTN_SIZE / 2.0,
                ),
                egui::vec2(PAGE_TAB_MENU_BTN_SIZE, PAGE_TAB_MENU_BTN_SIZE),
            )
        });

        // Tab first, menu button second so the button sits on top for clicks
        let tab_response = ui.interact(
            tab_rect,
            egui::Id::new(("page_tab", p.id)),
            egui::Sense::click_and_drag(),
        );
        let menu_btn_response = menu_btn_rect.map(|rect| {
            ui.interact(
                rect,
                egui::Id::new(("page_tab_menu", p.id)),
                egui::Sense::click(),
            )
        });
        let pointer_on_menu_btn = menu_btn_rect
            .zip(ui.ctx().input(|i| i.pointer.hover_pos()))
            .is_some_and(|(rect, pos)| rect.contains(pos));

        if ui.is_rect_visible(tab_rect) {
            let (bg, border, text, icon) = if p.is_active {
                (
                    config.tab_active_background,
                    config.tab_active_border,
                    config.tab_active_text,
                    config.tab_active_icon,
                )
            } else {
                (
                    config.tab_inactive_background,
                    config.tab_inactive_border,
                    config.tab_inactive_text,
                    config.tab_inactive_icon,
                )
            };
            let is_hovered = self.hovered_page == Some(p.id) && !self.drag.is_dragging();
            let border = if is_hovered && !p.is_active {
                config.tab_active_border
            } else {
                border
            };

            let painter = ui.painter();
            painter.rect_filled(tab_rect, PAGE_TAB_ROUNDING, rgba(bg, opacity));
            painter.rect_stroke(
                tab_rect,
                PAGE_TAB_ROUNDING,
                egui::Stroke::new(1.0, rgba(border, opacity)),
                egui::StrokeKind::Inside,
            );
            if tab_response.has_focus() {
                painter.rect_stroke(
                    tab_rect.expand(2.0),
                    PAGE_TAB_ROUNDING + 2.0,
                    egui::Stroke::new(2.0, rgb(config.tab_drop_indicator)),
                    egui::StrokeKind::Outside,
                );
            }

            let icon_rect = egui::Rect::from_min_size(
                egui::pos2(
                    tab_rect.left() + PAGE_TAB_PAD_X,
                    tab_rect.center().y - PAGE_TAB_ICON_SIZE / 2.0,
                ),
                egui::vec2(PAGE_TAB_ICON_SIZE, PAGE_TAB_ICON_SIZE),
            );
            PageIcon::for_title(p.title).paint(painter, icon_rect, rgba(icon, opacity));

            let text_left = icon_rect.right() + PAGE_TAB_ICON_GAP;
            let text_right = menu_btn_rect.map_or(tab_rect.right() - PAGE_TAB_PAD_X, |r| {
                r.left() - PAGE_TAB_ICON_GAP
            });
            let font_id = egui::FontId::proportional(PAGE_TAB_FONT_SIZE);
            let shown = display_title(
                p.title,
                config.tab_max_title_chars,
                &font_id,
                (text_right - text_left).max(0.0),
            );
            painter.text(
                egui::pos2(text_left, tab_rect.center().y),
                egui::Align2::LEFT_CENTER,
                shown,
                font_id,
                rgba(text, opacity),
            );

            if let (Some(rect), Some(btn)) = (menu_btn_rect, &menu_btn_response) {
                if btn.hovered() {
                    painter.rect_filled(rect, 4.0, rgba(config.tab_inactive_border, opacity));
                }
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "⋮",
                    egui::FontId::proportional(PAGE_TAB_FONT_SIZE),
                    rgba(config.tab_inactive_text, opacity),
                );
            }
        }

        // Primary press on the tab body arms a potential drag. Single-page
        // strips have nothing to reorder.
        if p.page_count > 1
            && !pointer_on_menu_btn
            && tab_response.contains_pointer()
            && ui.input(|i| i.pointer.primary_pressed())
            && let Some(origin) = ui.input(|i| i.pointer.press_origin())
        {
            self.drag.press(p.id, p.index, origin);
        }

        // Space on a focused tab starts a keyboard reorder
        if p.page_count > 1
            && tab_response.has_focus()
            && !self.drag.is_active()
            && ui.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Space))
        {
            self.drag.keyboard_start(p.id, p.index);
            self.start_drag_visuals(p.title, p.tab_width);
            self.menu.close();
        }

        // Detect click using clicked_by() to only respond to mouse clicks, not keyboard
        if tab_response.clicked_by(egui::PointerButton::Primary)
            && !pointer_on_menu_btn
            && !self.drag.is_dragging()
        {
            action = PageBarAction::Select(p.id);
        }

        let menu_btn_clicked = menu_btn_response
            .as_ref()
            .is_some_and(|btn| btn.clicked_by(egui::PointerButton::Primary));
        if menu_btn_clicked && self.menu.target() == Some(p.id) {
            self.menu.close();
        } else if menu_btn_clicked || tab_response.secondary_clicked() {
            self.menu.open(tab_rect, p.id);
            // Store frame number to avoid closing on same frame
            self.menu_opened_frame = ui.ctx().cumulative_frame_nr();
        }

        // Update hover state
        if tab_response.contains_pointer() {
            self.hovered_page = Some(p.id);
        } else if self.hovered_page == Some(p.id) {
            self.hovered_page = None;
        }

        action
    }
}
