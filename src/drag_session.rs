//! Drag-to-reorder session for page tabs.
//!
//! A session runs `press` → (`pointer_moved`)* → `release` | `cancel` for the
//! pointer, or `keyboard_start` → (`keyboard_step`)* → `release` | `cancel`
//! for keyboard reordering. Nothing is committed until `release`, which
//! returns a [`PageMessage::Reorder`] for the coordinator to apply.

use crate::page::{PageId, PageMessage, array_move};

/// Which input drove the drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragInput {
    Pointer,
    Keyboard,
}

/// Current phase of the session.
#[derive(Debug, Clone, PartialEq)]
pub enum DragPhase {
    /// No gesture in progress
    Idle,
    /// Pointer is down on a tab but has not travelled far enough to drag
    Pending {
        id: PageId,
        index: usize,
        origin: egui::Pos2,
    },
    /// A reorder preview is active
    Dragging {
        id: PageId,
        source_index: usize,
        over_index: usize,
        input: DragInput,
    },
}

/// Drag session state machine.
#[derive(Debug, Clone)]
pub struct DragSession {
    phase: DragPhase,
    /// Pointer travel in logical pixels before a press becomes a drag
    activation_distance: f32,
}

impl DragSession {
    pub fn new(activation_distance: f32) -> Self {
        Self {
            phase: DragPhase::Idle,
            activation_distance,
        }
    }

    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    pub fn activation_distance(&self) -> f32 {
        self.activation_distance
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.phase, DragPhase::Idle)
    }

    /// Id of the page being dragged (only once the drag has started).
    pub fn dragging_id(&self) -> Option<PageId> {
        match self.phase {
            DragPhase::Dragging { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn source_index(&self) -> Option<usize> {
        match self.phase {
            DragPhase::Dragging { source_index, .. } => Some(source_index),
            _ => None,
        }
    }

    /// Index the dragged page would land at if released now.
    pub fn over_index(&self) -> Option<usize> {
        match self.phase {
            DragPhase::Dragging { over_index, .. } => Some(over_index),
            _ => None,
        }
    }

    pub fn input(&self) -> Option<DragInput> {
        match self.phase {
            DragPhase::Dragging { input, .. } => Some(input),
            _ => None,
        }
    }

    /// Pointer pressed on the tab at `index`. Ignored while another gesture runs.
    pub fn press(&mut self, id: PageId, index: usize, pos: egui::Pos2) {
        if self.is_active() {
            return;
        }
        self.phase = DragPhase::Pending {
            id,
            index,
            origin: pos,
        };
    }

    /// Pointer moved. `centers` holds the x centre of every tab in list order.
    ///
    /// Promotes a pending press to a drag once the activation distance is
    /// reached, then tracks the tab whose centre is closest to the pointer.
    /// Returns true on the call that started the drag.
    pub fn pointer_moved(&mut self, pos: egui::Pos2, centers: &[f32]) -> bool {
        let mut started = false;

        if let DragPhase::Pending { id, index, origin } = self.phase {
            if origin.distance(pos) < self.activation_distance {
                return false;
            }
            log::debug!("Drag started on page {} at index {}", id, index);
            self.phase = DragPhase::Dragging {
                id,
                source_index: index,
                over_index: index,
                input: DragInput::Pointer,
            };
            started = true;
        }

        if let DragPhase::Dragging {
            over_index,
            input: DragInput::Pointer,
            ..
        } = &mut self.phase
            && let Some(closest) = closest_center_index(centers, pos.x)
        {
            *over_index = closest;
        }

        started
    }

    /// Begin a keyboard reorder of the focused tab at `index`.
    pub fn keyboard_start(&mut self, id: PageId, index: usize) {
        if self.is_active() {
            return;
        }
        log::debug!("Keyboard drag started on page {} at index {}", id, index);
        self.phase = DragPhase::Dragging {
            id,
            source_index: index,
            over_index: index,
            input: DragInput::Keyboard,
        };
    }

    /// Move the keyboard preview by `delta` positions within `[0, len)`.
    pub fn keyboard_step(&mut self, delta: isize, len: usize) {
        if let DragPhase::Dragging {
            over_index,
            input: DragInput::Keyboard,
            ..
        } = &mut self.phase
            && len > 0
        {
            let target = (*over_index as isize + delta).clamp(0, len as isize - 1);
            *over_index = target as usize;
        }
    }

    /// End the gesture. Returns the reorder to commit, if the page moved.
    ///
    /// A pending press that never became a drag returns `None`.
    pub fn release(&mut self) -> Option<PageMessage> {
        let phase = std::mem::replace(&mut self.phase, DragPhase::Idle);
        match phase {
            DragPhase::Dragging {
                id,
                source_index,
                over_index,
                ..
            } if source_index != over_index => {
                log::debug!(
                    "Drag of page {} committed: {} -> {}",
                    id,
                    source_index,
                    over_index
                );
                Some(PageMessage::Reorder {
                    from: source_index,
                    to: over_index,
                })
            }
            _ => None,
        }
    }

    /// Abandon the gesture without changing anything.
    pub fn cancel(&mut self) {
        if self.is_active() {
            log::debug!("Drag cancelled");
        }
        self.phase = DragPhase::Idle;
    }

    /// The order `items` would have if the drag were released now.
    pub fn preview_order<T: Clone>(&self, items: &[T]) -> Vec<T> {
        match self.phase {
            DragPhase::Dragging {
                source_index,
                over_index,
                ..
            } if source_index < items.len() && over_index < items.len() => {
                array_move(items, source_index, over_index)
            }
            _ => items.to_vec(),
        }
    }
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new(8.0)
    }
}

/// Index of the centre closest to `x`, preferring the earlier one on ties.
pub fn closest_center_index(centers: &[f32], x: f32) -> Option<usize> {
    centers
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - x).abs().total_cmp(&(*b - x).abs()))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    const CENTERS: [f32; 4] = [50.0, 150.0, 250.0, 350.0];

    #[test]
    fn closest_center_picks_nearest() {
        assert_eq!(closest_center_index(&CENTERS, 0.0), Some(0));
        assert_eq!(closest_center_index(&CENTERS, 240.0), Some(2));
        assert_eq!(closest_center_index(&CENTERS, 1000.0), Some(3));
        assert_eq!(closest_center_index(&[], 10.0), None);
    }

    #[test]
    fn closest_center_tie_prefers_first() {
        assert_eq!(closest_center_index(&CENTERS, 100.0), Some(0));
    }

    #[test]
    fn small_movement_stays_pending() {
        let mut session = DragSession::new(8.0);
        session.press(PageId(1), 0, pos2(50.0, 10.0));
        assert!(!session.pointer_moved(pos2(55.0, 13.0), &CENTERS));
        assert!(!session.is_dragging());
        assert_eq!(session.release(), None);
        assert!(!session.is_active());
    }

    #[test]
    fn threshold_promotes_to_drag() {
        let mut session = DragSession::new(8.0);
        session.press(PageId(1), 0, pos2(50.0, 10.0));
        assert!(session.pointer_moved(pos2(58.0, 10.0), &CENTERS));
        assert_eq!(session.dragging_id(), Some(PageId(1)));
        assert_eq!(session.input(), Some(DragInput::Pointer));
    }

    #[test]
    fn preview_does_not_commit() {
        let mut session = DragSession::new(8.0);
        session.press(PageId(1), 0, pos2(50.0, 10.0));
        session.pointer_moved(pos2(260.0, 10.0), &CENTERS);
        assert_eq!(session.over_index(), Some(2));
        assert_eq!(session.preview_order(&[1, 2, 3, 4]), vec![2, 3, 1, 4]);
        session.cancel();
        assert_eq!(session.preview_order(&[1, 2, 3, 4]), vec![1, 2, 3, 4]);
    }

    #[test]
    fn release_over_other_tab_commits_reorder() {
        let mut session = DragSession::new(8.0);
        session.press(PageId(1), 0, pos2(50.0, 10.0));
        session.pointer_moved(pos2(340.0, 10.0), &CENTERS);
        assert_eq!(
            session.release(),
            Some(PageMessage::Reorder { from: 0, to: 3 })
        );
        assert!(!session.is_active());
    }

    #[test]
    fn release_over_own_slot_is_noop() {
        let mut session = DragSession::new(8.0);
        session.press(PageId(2), 1, pos2(150.0, 10.0));
        session.pointer_moved(pos2(170.0, 10.0), &CENTERS);
        assert!(session.is_dragging());
        assert_eq!(session.release(), None);
    }

    #[test]
    fn press_ignored_while_dragging() {
        let mut session = DragSession::new(8.0);
        session.keyboard_start(PageId(3), 2);
        session.press(PageId(1), 0, pos2(0.0, 0.0));
        assert_eq!(session.dragging_id(), Some(PageId(3)));
    }

    #[test]
    fn keyboard_steps_clamp_to_bounds() {
        let mut session = DragSession::new(8.0);
        session.keyboard_start(PageId(2), 1);
        session.keyboard_step(-1, 4);
        session.keyboard_step(-1, 4);
        assert_eq!(session.over_index(), Some(0));
        session.keyboard_step(10, 4);
        assert_eq!(session.over_index(), Some(3));
        assert_eq!(
            session.release(),
            Some(PageMessage::Reorder { from: 1, to: 3 })
        );
    }

    #[test]
    fn keyboard_drag_ignores_pointer_motion() {
        let mut session = DragSession::new(8.0);
        session.keyboard_start(PageId(1), 0);
        session.pointer_moved(pos2(350.0, 0.0), &CENTERS);
        assert_eq!(session.over_index(), Some(0));
    }
}
