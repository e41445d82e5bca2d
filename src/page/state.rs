//! Page list state and the pure transition function that updates it.

use super::reorder::array_move;
use super::{Page, PageId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A user intent against the page list.
///
/// Serialized as `{ type, payload }` so intent logs can be replayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum PageMessage {
    /// Make a page the active page
    Select(PageId),
    /// Insert a new default page at an index in `[0, len]`
    AddPage(usize),
    /// Move the page at `from` to `to`
    Reorder { from: usize, to: usize },
    /// Replace a page title; `None` means the prompt was cancelled
    Rename { id: PageId, title: Option<String> },
    /// Insert a copy of a page right after it
    Duplicate(PageId),
    /// Remove a page (refused when it is the last one)
    Delete(PageId),
    /// "Set as first page" menu entry (not wired to any behaviour)
    SetAsFirst(PageId),
    /// "Copy" menu entry (not wired to any behaviour)
    Copy(PageId),
}

/// The page list, the active page and the id allocator.
///
/// Invariants: `pages` is non-empty, ids are unique, and `active_page_id`
/// names a page in `pages`. `next_page_id` only ever grows and stays above
/// every id in `pages`. Deserialization goes through the same checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PageStateRecord")]
pub struct PageState {
    pages: Vec<Page>,
    active_page_id: PageId,
    next_page_id: u64,
}

/// Unchecked serialized form of [`PageState`].
#[derive(Deserialize)]
struct PageStateRecord {
    pages: Vec<Page>,
    active_page_id: PageId,
    #[serde(default)]
    next_page_id: u64,
}

impl TryFrom<PageStateRecord> for PageState {
    type Error = String;

    fn try_from(record: PageStateRecord) -> Result<Self, Self::Error> {
        let mut state = PageState::new(record.pages)
            .ok_or_else(|| "pages must be non-empty with unique ids".to_string())?;
        if !state.contains(record.active_page_id) {
            return Err(format!(
                "active page {} is not in the page list",
                record.active_page_id
            ));
        }
        state.active_page_id = record.active_page_id;
        // A stale counter would hand out ids that are already taken
        state.next_page_id = state.next_page_id.max(record.next_page_id);
        Ok(state)
    }
}

impl PageState {
    /// Build a state from an initial page list; the first page starts active.
    ///
    /// Returns `None` if `pages` is empty or contains duplicate ids.
    pub fn new(pages: Vec<Page>) -> Option<Self> {
        let first = pages.first()?.id;
        let mut seen = HashSet::with_capacity(pages.len());
        if !pages.iter().all(|p| seen.insert(p.id)) {
            return None;
        }
        let next_page_id = pages.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
        Some(Self {
            pages,
            active_page_id: first,
            next_page_id,
        })
    }

    /// The built-in demo pages: Info, Details, Other, Ending.
    pub fn demo() -> Self {
        Self {
            pages: vec![
                Page::new(1, "Info"),
                Page::new(2, "Details"),
                Page::new(3, "Other"),
                Page::new(4, "Ending"),
            ],
            active_page_id: PageId(1),
            next_page_id: 5,
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false for a consistent state; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn active_page_id(&self) -> PageId {
        self.active_page_id
    }

    pub fn active_page(&self) -> Option<&Page> {
        self.get(self.active_page_id)
    }

    /// The id the next created page will receive.
    pub fn next_page_id(&self) -> PageId {
        PageId(self.next_page_id)
    }

    pub fn get(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn index_of(&self, id: PageId) -> Option<usize> {
        self.pages.iter().position(|p| p.id == id)
    }

    pub fn contains(&self, id: PageId) -> bool {
        self.index_of(id).is_some()
    }

    fn allocate_id(&mut self) -> PageId {
        let id = PageId(self.next_page_id);
        self.next_page_id += 1;
        id
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::demo()
    }
}

/// Apply `message` to `state`, returning the resulting state.
///
/// Never fails: unknown ids, a cancelled or empty rename, deleting the last
/// page and the unwired menu entries all return an unchanged copy.
///
/// # Panics
///
/// `Reorder` panics if `from` or `to` is out of range (see [`array_move`]).
pub fn reduce(state: &PageState, message: PageMessage) -> PageState {
    let mut next = state.clone();

    match message {
        PageMessage::Select(id) => {
            if next.contains(id) {
                next.active_page_id = id;
            } else {
                log::debug!("Ignoring select of unknown page {}", id);
            }
        }
        PageMessage::AddPage(index) => {
            let len = next.pages.len();
            let index = index.min(len);
            let id = next.allocate_id();
            let page = Page::new(id, format!("Page {}", len + 1));
            next.pages.insert(index, page);
        }
        PageMessage::Reorder { from, to } => {
            next.pages = array_move(&state.pages, from, to);
        }
        PageMessage::Rename { id, title } => match title {
            Some(title) if !title.is_empty() => {
                if let Some(page) = next.pages.iter_mut().find(|p| p.id == id) {
                    page.title = title;
                }
            }
            _ => log::debug!("Rename of page {} cancelled", id),
        },
        PageMessage::Duplicate(id) => {
            if let Some(index) = next.index_of(id) {
                let title = format!("{} (Copy)", next.pages[index].title);
                let copy_id = next.allocate_id();
                next.pages.insert(index + 1, Page::new(copy_id, title));
            }
        }
        PageMessage::Delete(id) => {
            if next.pages.len() <= 1 {
                log::debug!("Refusing to delete page {}: it is the last page", id);
            } else if let Some(index) = next.index_of(id) {
                next.pages.remove(index);
                if next.active_page_id == id {
                    // Fall back to the first remaining page, not the neighbour
                    next.active_page_id = next.pages[0].id;
                }
            }
        }
        PageMessage::SetAsFirst(id) | PageMessage::Copy(id) => {
            log::debug!("Menu entry for page {} has no handler", id);
        }
    }

    next
}
