//! Rename prompt for page tabs.
//!
//! A small centred window with a single-line field prefilled with the current
//! title. Enter or "OK" submits, Escape or "Cancel" abandons. Either way the
//! result becomes a [`PageMessage::Rename`]; an empty or cancelled rename is a
//! no-op in the page list.

use crate::page::{PageId, PageMessage};
use crate::ui_constants::RENAME_DIALOG_EDIT_WIDTH;

/// Action returned by the rename dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameDialogAction {
    /// No action yet (dialog still showing or hidden)
    None,
    /// User confirmed with this text
    Submitted { id: PageId, title: String },
    /// User dismissed the prompt
    Cancelled(PageId),
}

impl RenameDialogAction {
    /// The rename to dispatch, if the dialog closed this frame.
    pub fn to_message(&self) -> Option<PageMessage> {
        match self {
            RenameDialogAction::None => None,
            RenameDialogAction::Submitted { id, title } => Some(PageMessage::Rename {
                id: *id,
                title: Some(title.clone()),
            }),
            RenameDialogAction::Cancelled(id) => Some(PageMessage::Rename {
                id: *id,
                title: None,
            }),
        }
    }
}

/// State for the rename dialog
#[derive(Debug, Default)]
pub struct RenameDialog {
    /// Page being renamed; `Some` while the dialog is visible
    target: Option<PageId>,
    /// Text field contents
    buffer: String,
    /// Whether the text field still needs keyboard focus
    request_focus: bool,
}

impl RenameDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the dialog is currently visible
    pub fn is_visible(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<PageId> {
        self.target
    }

    /// Current text field contents
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Show the prompt for `id`, prefilled with `current_title`.
    pub fn open(&mut self, id: PageId, current_title: &str) {
        log::debug!("Rename prompt opened for page {}", id);
        self.target = Some(id);
        self.buffer = current_title.to_string();
        self.request_focus = true;
    }

    /// Replace the text field contents; used by integration tests.
    pub fn test_set_buffer(&mut self, text: &str) {
        self.buffer = text.to_string();
    }

    /// Confirm with the current buffer.
    pub fn submit(&mut self) -> RenameDialogAction {
        match self.target {
            Some(id) => {
                let title = std::mem::take(&mut self.buffer);
                self.hide();
                RenameDialogAction::Submitted { id, title }
            }
            None => RenameDialogAction::None,
        }
    }

    /// Dismiss without renaming.
    pub fn cancel(&mut self) -> RenameDialogAction {
        match self.target {
            Some(id) => {
                self.hide();
                RenameDialogAction::Cancelled(id)
            }
            None => RenameDialogAction::None,
        }
    }

    fn hide(&mut self) {
        self.target = None;
        self.buffer.clear();
        self.request_focus = false;
    }

    /// Render the dialog and return any action
    pub fn show(&mut self, ctx: &egui::Context) -> RenameDialogAction {
        if !self.is_visible() {
            return RenameDialogAction::None;
        }

        let mut submit = false;
        let mut cancel = false;

        egui::Window::new("Rename page")
            .collapsible(false)
            .resizable(false)
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.label("Enter a new page name:");
                ui.add_space(6.0);

                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.buffer)
                        .desired_width(RENAME_DIALOG_EDIT_WIDTH)
                        .hint_text("Page name"),
                );
                // Auto-focus when first shown
                if self.request_focus {
                    response.request_focus();
                    self.request_focus = false;
                }
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        submit = true;
                    }
                    ui.add_space(8.0);
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
                ui.add_space(4.0);
            });

        // Handle escape key to cancel
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            cancel = true;
        }

        if cancel {
            self.cancel()
        } else if submit {
            self.submit()
        } else {
            RenameDialogAction::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_prefills_current_title() {
        let mut dialog = RenameDialog::new();
        dialog.open(PageId(2), "Details");
        assert!(dialog.is_visible());
        assert_eq!(dialog.target(), Some(PageId(2)));
        assert_eq!(dialog.buffer(), "Details");
    }

    #[test]
    fn submit_returns_buffer_and_hides() {
        let mut dialog = RenameDialog::new();
        dialog.open(PageId(2), "Details");
        dialog.test_set_buffer("Shipping");
        let action = dialog.submit();
        assert_eq!(
            action,
            RenameDialogAction::Submitted {
                id: PageId(2),
                title: "Shipping".to_string()
            }
        );
        assert!(!dialog.is_visible());
        assert_eq!(
            action.to_message(),
            Some(PageMessage::Rename {
                id: PageId(2),
                title: Some("Shipping".to_string())
            })
        );
    }

    #[test]
    fn cancel_maps_to_rename_without_title() {
        let mut dialog = RenameDialog::new();
        dialog.open(PageId(4), "Ending");
        let action = dialog.cancel();
        assert_eq!(action, RenameDialogAction::Cancelled(PageId(4)));
        assert_eq!(
            action.to_message(),
            Some(PageMessage::Rename {
                id: PageId(4),
                title: None
            })
        );
    }

    #[test]
    fn hidden_dialog_does_nothing() {
        let mut dialog = RenameDialog::new();
        assert_eq!(dialog.submit(), RenameDialogAction::None);
        assert_eq!(dialog.cancel(), RenameDialogAction::None);
        assert_eq!(RenameDialogAction::None.to_message(), None);
    }
}
