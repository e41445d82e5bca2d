//! Page identity and ordering model.
//!
//! ## Module layout
//!
//! - [`reorder`]: the pure array-move used by every reorder path.
//! - [`state`]: [`PageState`], [`PageMessage`] and the [`reduce`] transition function.
//! - [`coordinator`]: [`PageCoordinator`], the single owner of the page list.

pub mod coordinator;
pub mod reorder;
pub mod state;

pub use coordinator::PageCoordinator;
pub use reorder::array_move;
pub use state::{PageMessage, PageState, reduce};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a page.
///
/// Allocated from a monotonic counter and never reused, even after the page
/// it named has been deleted. Serialized as a plain number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub u64);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PageId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A named tab in the form builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub title: String,
}

impl Page {
    pub fn new(id: impl Into<PageId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

impl From<&form_pages_config::PageSeed> for Page {
    fn from(seed: &form_pages_config::PageSeed) -> Self {
        Page::new(seed.id, seed.title.clone())
    }
}
