//! The form builder screen: page bar, page content and rename prompt.
//!
//! Owns the [`PageCoordinator`] and routes every [`PageBarAction`] and
//! [`RenameDialogAction`] into it, so the page list has a single writer.

use crate::page::{PageCoordinator, PageId};
use crate::rename_dialog::{RenameDialog, RenameDialogAction};
use crate::tab_bar_ui::{PageBarAction, PageBarUI};
use form_pages_config::Config;

/// Hint shown under the header.
pub const CONTEXT_MENU_HINT: &str = "Right-click a page tab to see the menu.";

pub struct FormBuilderView {
    coordinator: PageCoordinator,
    page_bar: PageBarUI,
    rename_dialog: RenameDialog,
}

impl FormBuilderView {
    pub fn new(config: &Config) -> Self {
        Self {
            coordinator: PageCoordinator::from_config(config),
            page_bar: PageBarUI::new(config.drag_threshold),
            rename_dialog: RenameDialog::new(),
        }
    }

    pub fn coordinator(&self) -> &PageCoordinator {
        &self.coordinator
    }

    pub fn page_bar(&self) -> &PageBarUI {
        &self.page_bar
    }

    pub fn page_bar_mut(&mut self) -> &mut PageBarUI {
        &mut self.page_bar
    }

    pub fn rename_dialog(&self) -> &RenameDialog {
        &self.rename_dialog
    }

    pub fn rename_dialog_mut(&mut self) -> &mut RenameDialog {
        &mut self.rename_dialog
    }

    /// Text of the "Selected Page" line.
    pub fn selected_page_label(&self) -> String {
        let title = self
            .coordinator
            .active_page()
            .map_or("", |page| page.title.as_str());
        format!("Selected Page: {}", title)
    }

    /// Apply an action reported by the page bar. Returns true if the page
    /// list changed.
    pub fn handle_page_bar_action(&mut self, action: PageBarAction) -> bool {
        match action {
            PageBarAction::None => false,
            PageBarAction::Rename(id) => {
                self.open_rename(id);
                false
            }
            other => match other.to_message() {
                Some(message) => self.coordinator.dispatch(message),
                None => false,
            },
        }
    }

    /// Apply the rename dialog result. Returns true if the page list changed.
    pub fn handle_rename_action(&mut self, action: RenameDialogAction) -> bool {
        match action.to_message() {
            Some(message) => self.coordinator.dispatch(message),
            None => false,
        }
    }

    fn open_rename(&mut self, id: PageId) {
        match self.coordinator.state().get(id) {
            Some(page) => self.rename_dialog.open(id, &page.title),
            None => log::warn!("Rename requested for unknown page {}", id),
        }
    }

    /// Render the whole screen for one frame. Returns true if the page list changed.
    pub fn show(&mut self, ctx: &egui::Context, config: &Config) -> bool {
        // Panels must be added before the central panel
        let bar_action = self.page_bar.render(ctx, self.coordinator.state(), config);
        let mut changed = self.handle_page_bar_action(bar_action);

        let bg = config.background_color;
        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(egui::Color32::from_rgb(bg[0], bg[1], bg[2]))
                    .inner_margin(egui::Margin::same(24)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() / 3.0);
                    ui.label(
                        egui::RichText::new(&config.window_title)
                            .size(28.0)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new(CONTEXT_MENU_HINT).color(egui::Color32::GRAY));
                    ui.add_space(16.0);
                    ui.label(
                        egui::RichText::new(self.selected_page_label())
                            .size(16.0)
                            .color(egui::Color32::LIGHT_GRAY),
                    );
                });
            });

        let rename_action = self.rename_dialog.show(ctx);
        changed |= self.handle_rename_action(rename_action);

        changed
    }
}
