//! Floating page menu (set as first, rename, copy, duplicate, delete).
//!
//! Contains the [`PageBarUI`] method that draws the menu opened from a tab's
//! "⋮" button or by right-clicking a tab. Placement comes from
//! [`crate::context_menu::place_menu`] using the size measured on the
//! previous frame.

use crate::context_menu::{MenuItem, place_menu};
use crate::ui_constants::{PAGE_MENU_ITEM_HEIGHT, PAGE_MENU_MIN_WIDTH, PAGE_MENU_ROUNDING};
use form_pages_config::Config;

use super::PageBarAction;
use super::PageBarUI;
use super::tab_rendering::rgb;

impl PageBarUI {
    /// Render the context menu for page options.
    pub(super) fn render_context_menu(
        &mut self,
        ctx: &egui::Context,
        config: &Config,
    ) -> PageBarAction {
        let Some(anchor) = self.menu.anchor() else {
            return PageBarAction::None;
        };

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.menu.dismiss();
            return PageBarAction::None;
        }

        let placement = place_menu(
            anchor,
            self.menu_size,
            ctx.content_rect(),
            config.menu_offset,
            config.menu_padding,
        );

        let mut chosen: Option<MenuItem> = None;
        let mut item_rects = Vec::with_capacity(MenuItem::ALL.len());

        let area_response = egui::Area::new(egui::Id::new("page_context_menu"))
            .fixed_pos(placement.pos)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .corner_radius(PAGE_MENU_ROUNDING)
                    .inner_margin(egui::Margin::symmetric(4, 6))
                    .show(ui, |ui| {
                        ui.set_min_width(PAGE_MENU_MIN_WIDTH);
                        ui.style_mut().spacing.item_spacing = egui::vec2(0.0, 0.0);

                        ui.horizontal(|ui| {
                            ui.add_space(8.0);
                            ui.label(egui::RichText::new("Settings").strong());
                        });
                        ui.add_space(4.0);
                        ui.separator();
                        ui.add_space(4.0);

                        // Menu item helper
                        let menu_item =
                            |ui: &mut egui::Ui, label: &str, color: Option<egui::Color32>| -> egui::Response {
                                let mut text = egui::RichText::new(label);
                                if let Some(color) = color {
                                    text = text.color(color);
                                }
                                ui.add_sized(
                                    [ui.available_width(), PAGE_MENU_ITEM_HEIGHT],
                                    egui::Button::new(text)
                                        .frame(false)
                                        .fill(egui::Color32::TRANSPARENT),
                                )
                            };

                        for item in MenuItem::ALL {
                            if item.separated() {
                                ui.add_space(4.0);
                                ui.separator();
                                ui.add_space(4.0);
                            }
                            let color = match item {
                                MenuItem::SetAsFirst => Some(rgb(config.menu_accent_color)),
                                MenuItem::Delete => Some(rgb(config.menu_danger_color)),
                                _ => None,
                            };
                            let response = menu_item(ui, item.label(), color);
                            item_rects.push((item, response.rect));
                            if response.clicked() {
                                chosen = Some(item);
                            }
                        }
                    });
            });

        self.menu_size = area_response.response.rect.size();
        self.menu_item_rects = item_rects;

        if let Some(item) = chosen {
            return self
                .menu
                .activate(item)
                .map_or(PageBarAction::None, PageBarAction::from);
        }

        // Close menu if clicked outside (but not on the same frame it was opened)
        let current_frame = ctx.cumulative_frame_nr();
        if current_frame > self.menu_opened_frame
            && ctx.input(|i| i.pointer.any_click())
            && !area_response.response.hovered()
        {
            self.menu.dismiss();
        }

        PageBarAction::None
    }
}
