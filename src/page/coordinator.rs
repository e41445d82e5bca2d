//! Root coordinator that owns the page list and the active page.

use super::state::{PageMessage, PageState, reduce};
use super::{Page, PageId};

/// Single owner of the page list and active-page id.
///
/// Renderers only ever see `&PageState` snapshots and report intents as
/// [`PageMessage`]s; the coordinator applies them one at a time, in order.
#[derive(Debug, Clone, Default)]
pub struct PageCoordinator {
    state: PageState,
}

impl PageCoordinator {
    pub fn new(state: PageState) -> Self {
        Self { state }
    }

    /// Build from a config seed, falling back to the demo pages if the seed
    /// is empty or has duplicate ids.
    pub fn from_config(config: &form_pages_config::Config) -> Self {
        let pages: Vec<Page> = config.pages.iter().map(Page::from).collect();
        let state = PageState::new(pages).unwrap_or_else(|| {
            log::warn!("Configured page seed is invalid, using demo pages");
            PageState::demo()
        });
        Self::new(state)
    }

    /// Read-only snapshot for the current render cycle.
    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn pages(&self) -> &[Page] {
        self.state.pages()
    }

    pub fn active_page_id(&self) -> PageId {
        self.state.active_page_id()
    }

    pub fn active_page(&self) -> Option<&Page> {
        self.state.active_page()
    }

    /// Apply one intent. Returns true if the state changed.
    pub fn dispatch(&mut self, message: PageMessage) -> bool {
        log::debug!("Dispatching {:?}", message);
        let next = reduce(&self.state, message);
        let changed = next != self.state;
        if changed {
            log::info!(
                "Pages now [{}] (active {})",
                next.pages()
                    .iter()
                    .map(|p| format!("{}:{}", p.id, p.title))
                    .collect::<Vec<_>>()
                    .join(", "),
                next.active_page_id()
            );
        }
        self.state = next;
        changed
    }

    /// Apply intents in arrival order. Returns how many changed the state.
    pub fn dispatch_all(&mut self, messages: impl IntoIterator<Item = PageMessage>) -> usize {
        let mut changed = 0;
        for message in messages {
            if self.dispatch(message) {
                changed += 1;
            }
        }
        changed
    }
}
