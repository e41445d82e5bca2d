// Library exports for testing and potential library use
//
// The page list has a single writer: `page::PageCoordinator`. UI modules
// (`tab_bar_ui`, `rename_dialog`) only read `page::PageState` snapshots and
// report intents, which `form_view::FormBuilderView` routes to the
// coordinator. Nothing here is shared across threads.

/// Application version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod debug;

pub mod app;
pub mod cli;
pub mod context_menu;
pub mod drag_session;
pub mod form_view;
pub mod page;
pub mod rename_dialog;
pub mod tab_bar_ui;
pub mod ui_constants;

pub use form_pages_config as config;
