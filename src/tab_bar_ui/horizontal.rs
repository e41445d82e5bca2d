//! Horizontal page strip layout rendering.
//!
//! Contains the [`PageBarUI`] `render_horizontal` method and its helpers:
//! the scrollable strip, the dotted "+" separators between tabs, the overflow
//! fades with their scroll arrows, and the trailing "Add page" button.

use crate::page::PageState;
use crate::ui_constants::{
    ADD_PAGE_BTN_GAP, ADD_PAGE_BTN_WIDTH, PAGE_SEPARATOR_ADD_BTN_SIZE, PAGE_SEPARATOR_DOT_SPACING,
    PAGE_SEPARATOR_WIDTH, PAGE_STRIP_PAD_X, PAGE_TAB_HEIGHT, SCROLL_ARROW_MARGIN,
    SCROLL_ARROW_SIZE, SCROLL_FADE_STEPS, SCROLL_FADE_WIDTH,
};
use form_pages_config::{Config, TabBarPosition};

use super::state::PageBarUI;
use super::tab_rendering::{TabRenderParams, rgb};
use super::{PageBarAction, fade_visibility};

/// Edge of the strip a fade or arrow belongs to.
#[derive(Clone, Copy, PartialEq, Eq)]
enum StripEdge {
    Left,
    Right,
}

impl PageBarUI {
    /// Render the page bar in horizontal layout (top or bottom)
    pub(super) fn render_horizontal(
        &mut self,
        ctx: &egui::Context,
        pages: &PageState,
        config: &Config,
    ) -> PageBarAction {
        let mut action = PageBarAction::None;

        // Keyboard reorder keys are consumed before the tabs render so the key
        // that ends a gesture cannot start a new one on the same frame.
        let key_action = self.handle_keyboard_drag(ctx, pages.len());
        if key_action != PageBarAction::None {
            action = key_action;
        }

        // Clear per-frame tab rect cache
        self.tab_rects.clear();

        let order = self.drag.preview_order(pages.pages());
        let page_count = order.len();
        let active_id = pages.active_page_id();
        let dragging_id = self.drag.dragging_id();
        let tab_width = config.tab_min_width;
        let tab_height = PAGE_TAB_HEIGHT.min(config.tab_bar_height);

        let bar_bg = rgb(config.tab_bar_background);
        let frame = egui::Frame::NONE.fill(bar_bg);

        let panel = if config.tab_bar_position == TabBarPosition::Bottom {
            egui::TopBottomPanel::bottom("page_bar").exact_height(config.tab_bar_height)
        } else {
            egui::TopBottomPanel::top("page_bar").exact_height(config.tab_bar_height)
        };

        panel.frame(frame).show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(0.0, 0.0);

                let strip_width = (ui.available_width()
                    - ADD_PAGE_BTN_WIDTH
                    - ADD_PAGE_BTN_GAP
                    - PAGE_STRIP_PAD_X)
                    .max(0.0);

                let scroll_output = egui::ScrollArea::horizontal()
                    .id_salt("page_strip")
                    .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
                    .max_width(strip_width)
                    .horizontal_scroll_offset(self.scroll_offset)
                    .show(ui, |ui| {
                        ui.horizontal_centered(|ui| {
                            ui.spacing_mut().item_spacing = egui::vec2(0.0, 0.0);
                            ui.add_space(PAGE_STRIP_PAD_X);

                            for (slot, page) in order.iter().enumerate() {
                                let index = pages.index_of(page.id).unwrap_or(slot);
                                let tab_action = self.render_page_tab(
                                    ui,
                                    TabRenderParams {
                                        id: page.id,
                                        index,
                                        title: &page.title,
                                        is_active: page.id == active_id,
                                        is_being_dragged: dragging_id == Some(page.id),
                                        config,
                                        tab_width,
                                        tab_height,
                                        page_count,
                                    },
                                );
                                if tab_action != PageBarAction::None {
                                    action = tab_action;
                                }

                                if slot + 1 < page_count {
                                    let sep_action = self.render_separator(ui, slot, config);
                                    if sep_action != PageBarAction::None {
                                        action = sep_action;
                                    }
                                }
                            }

                            ui.add_space(PAGE_STRIP_PAD_X);
                        });
                    });

                // Update scroll offset from scroll area
                self.scroll_offset = scroll_output.state.offset.x;
                let viewport = scroll_output.inner_rect;
                self.strip_viewport = viewport;
                let content_width = scroll_output.content_size.x;
                self.fades = fade_visibility(self.scroll_offset, viewport.width(), content_width);
                self.render_scroll_affordances(ui, viewport, content_width, config);

                // Trailing "Add page" button appends at the end
                ui.add_space(ADD_PAGE_BTN_GAP);
                let add_btn = ui.add(
                    egui::Button::new(
                        egui::RichText::new("+  Add page").color(rgb(config.tab_active_text)),
                    )
                    .min_size(egui::vec2(ADD_PAGE_BTN_WIDTH, tab_height))
                    .corner_radius(tab_height / 4.0)
                    .fill(bar_bg),
                );
                self.add_button_rect = add_btn.rect;
                if add_btn.clicked_by(egui::PointerButton::Primary) && !self.drag.is_dragging() {
                    action = PageBarAction::Add(pages.len());
                }
            });

            // Handle drag feedback and drop detection (outside horizontal layout
            // so we can paint over the strip)
            if self.drag.is_active() {
                let drag_action = self.render_drag_feedback(ui, pages, config);
                if drag_action != PageBarAction::None {
                    action = drag_action;
                }
            }
        });

        // Render floating ghost tab during drag (must be outside the panel)
        if self.drag.is_dragging() {
            self.render_ghost_tab(ctx, config);
        }

        // Keep the menu glued to its tab; close it if the tab is gone
        if let Some(target) = self.menu.target() {
            match self.tab_rects.iter().find(|(id, _)| *id == target) {
                Some((_, rect)) => self.menu.update_anchor(*rect),
                None => self.menu.close(),
            }
        }

        if !self.menu.is_open() {
            self.menu_item_rects.clear();
        }

        if self.menu.is_open() {
            let menu_action = self.render_context_menu(ctx, config);
            if menu_action != PageBarAction::None {
                action = menu_action;
            }
        }

        action
    }

    /// Dotted separator between the tabs in `slot` and `slot + 1`, with a
    /// hover-revealed "+" that inserts a page between them.
    fn render_separator(&mut self, ui: &mut egui::Ui, slot: usize, config: &Config) -> PageBarAction {
        let mut action = PageBarAction::None;

        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(PAGE_SEPARATOR_WIDTH, ui.available_height()),
            egui::Sense::hover(),
        );
        if !ui.is_rect_visible(rect) {
            return action;
        }

        let dot_color = rgb(config.tab_inactive_border);
        let y = rect.center().y;
        let mut x = rect.left() + PAGE_SEPARATOR_DOT_SPACING;
        while x < rect.right() - PAGE_SEPARATOR_DOT_SPACING / 2.0 {
            ui.painter().circle_filled(egui::pos2(x, y), 1.0, dot_color);
            x += PAGE_SEPARATOR_DOT_SPACING;
        }

        // Adding mid-drag would race the preview order
        if self.drag.is_dragging() {
            return action;
        }

        let btn_rect = egui::Rect::from_center_size(
            rect.center(),
            egui::vec2(PAGE_SEPARATOR_ADD_BTN_SIZE, PAGE_SEPARATOR_ADD_BTN_SIZE),
        );
        let btn = ui.interact(
            btn_rect,
            egui::Id::new(("page_separator_add", slot)),
            egui::Sense::click(),
        );

        if response.contains_pointer() || btn.hovered() {
            let radius = PAGE_SEPARATOR_ADD_BTN_SIZE / 2.0;
            let border = if btn.hovered() {
                rgb(config.tab_active_border)
            } else {
                rgb(config.tab_inactive_border)
            };
            ui.painter()
                .circle_filled(btn_rect.center(), radius, rgb(config.tab_active_background));
            ui.painter()
                .circle_stroke(btn_rect.center(), radius, egui::Stroke::new(1.0, border));
            ui.painter().text(
                btn_rect.center(),
                egui::Align2::CENTER_CENTER,
                "+",
                egui::FontId::proportional(14.0),
                rgb(config.tab_active_text),
            );

            if btn.clicked_by(egui::PointerButton::Primary) {
                action = PageBarAction::Add(slot + 1);
            }
        }

        action
    }

    /// Fades and arrow buttons on the edges where the strip overflows.
    fn render_scroll_affordances(
        &mut self,
        ui: &mut egui::Ui,
        viewport: egui::Rect,
        content_width: f32,
        config: &Config,
    ) {
        let max_scroll = (content_width - viewport.width()).max(0.0);

        for (edge, visible) in [
            (StripEdge::Left, self.fades.left),
            (StripEdge::Right, self.fades.right),
        ] {
            if !visible {
                continue;
            }
            paint_fade(ui.painter(), viewport, edge, rgb(config.tab_bar_background));

            let center_x = match edge {
                StripEdge::Left => viewport.left() + SCROLL_ARROW_MARGIN + SCROLL_ARROW_SIZE / 2.0,
                StripEdge::Right => {
                    viewport.right() - SCROLL_ARROW_MARGIN - SCROLL_ARROW_SIZE / 2.0
                }
            };
            let arrow_rect = egui::Rect::from_center_size(
                egui::pos2(center_x, viewport.center().y),
                egui::vec2(SCROLL_ARROW_SIZE, SCROLL_ARROW_SIZE),
            );
            let (id_salt, glyph) = match edge {
                StripEdge::Left => ("page_strip_scroll_left", "‹"),
                StripEdge::Right => ("page_strip_scroll_right", "›"),
            };
            let arrow = ui.interact(arrow_rect, egui::Id::new(id_salt), egui::Sense::click());

            let border = if arrow.hovered() {
                rgb(config.tab_active_border)
            } else {
                rgb(config.tab_inactive_border)
            };
            ui.painter().circle_filled(
                arrow_rect.center(),
                SCROLL_ARROW_SIZE / 2.0,
                rgb(config.tab_active_background),
            );
            ui.painter().circle_stroke(
                arrow_rect.center(),
                SCROLL_ARROW_SIZE / 2.0,
                egui::Stroke::new(1.0, border),
            );
            ui.painter().text(
                arrow_rect.center(),
                egui::Align2::CENTER_CENTER,
                glyph,
                egui::FontId::proportional(18.0),
                rgb(config.tab_active_text),
            );

            if arrow.clicked_by(egui::PointerButton::Primary) {
                self.scroll_offset = match edge {
                    StripEdge::Left => (self.scroll_offset - config.scroll_amount).max(0.0),
                    StripEdge::Right => (self.scroll_offset + config.scroll_amount).min(max_scroll),
                };
                ui.ctx().request_repaint();
            }
        }
    }
}

/// Gradient from `bg` at the strip edge to transparent, drawn as bands.
fn paint_fade(painter: &egui::Painter, viewport: egui::Rect, edge: StripEdge, bg: egui::Color32) {
    let band = SCROLL_FADE_WIDTH / SCROLL_FADE_STEPS as f32;
    for step in 0..SCROLL_FADE_STEPS {
        let alpha = 255 - (255 * step / SCROLL_FADE_STEPS) as u8;
        let offset = band * step as f32;
        let left = match edge {
            StripEdge::Left => viewport.left() + offset,
            StripEdge::Right => viewport.right() - offset - band,
        };
        painter.rect_filled(
            egui::Rect::from_min_size(
                egui::pos2(left, viewport.top()),
                egui::vec2(band, viewport.height()),
            ),
            0.0,
            egui::Color32::from_rgba_unmultiplied(bg.r(), bg.g(), bg.b(), alpha),
        );
    }
}
