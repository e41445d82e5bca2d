//! Application entry: winit event loop and the single form builder window.
//!
//! ## Module layout
//!
//! - [`page_window`]: `PageWindow`, the window with its own wgpu surface and egui renderer.

mod page_window;

pub use page_window::{PageWindow, PageWindowAction};

use crate::cli::RuntimeOptions;
use anyhow::Result;
use form_pages_config::Config;
use std::sync::Arc;
use tokio::runtime::Runtime;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

/// Main application state
pub struct App {
    config: Config,
    runtime: Arc<Runtime>,
}

impl App {
    /// Create a new application.
    ///
    /// A config file that fails to load or validate is reported and replaced
    /// by the defaults so the window still opens.
    pub fn new(runtime: Arc<Runtime>, options: &RuntimeOptions) -> Self {
        let config = options.load_config().unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {e:#}");
            Config::default()
        });
        crate::debug::set_level(config.log_level.to_level_filter());
        Self { config, runtime }
    }

    /// Run the application until the window is closed
    pub fn run(self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app_state = AppState {
            config: self.config,
            runtime: self.runtime,
            window: None,
            init_error: None,
        };

        event_loop.run_app(&mut app_state)?;

        match app_state.init_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Application state that handles events
struct AppState {
    config: Config,
    runtime: Arc<Runtime>,
    window: Option<PageWindow>,
    /// Window creation failure, reported after the loop exits
    init_error: Option<anyhow::Error>,
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        log::info!("Creating form builder window");
        match self
            .runtime
            .block_on(PageWindow::new(event_loop, self.config.clone()))
        {
            Ok(window) => {
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("Failed to create window: {e:#}");
                self.init_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.as_mut() else {
            return;
        };
        if window.window_id() != window_id {
            return;
        }

        if window.handle_window_event(event) == PageWindowAction::Close {
            log::info!("Window closed, exiting");
            self.window = None;
            event_loop.exit();
        }
    }
}
