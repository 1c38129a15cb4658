//! Action-driven document state and undo history.
//!
//! The canvas document is reduced from [`Action`]s. Undo is a stack of
//! full snapshots of the committed items; the stack always keeps its
//! initial empty snapshot, so every transition is total and `Cancel`
//! on a fresh document is a no-op.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{DrawItem, DrawItemKind};

/// A state transition of the canvas document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Action {
    /// Append a finished item to the committed list without snapshotting.
    AddDoneItem(DrawItem),
    /// Remove the committed item at an index. Out of range is a no-op.
    DeleteDoneItem(usize),
    /// Record an undo snapshot of the committed items plus the current
    /// item, if any.
    AddScreenState(Option<DrawItem>),
    /// Undo: drop the newest snapshot and restore the one below it.
    Cancel,
    /// Select the active drawing tool.
    SetDrawingMode(DrawItemKind),
}

/// The reducible document: committed items, undo snapshots and the
/// active tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawState {
    done_items: Vec<DrawItem>,
    screen_states: Vec<Vec<DrawItem>>,
    drawing_mode: DrawItemKind,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            done_items: Vec::new(),
            screen_states: vec![Vec::new()],
            drawing_mode: DrawItemKind::Pen,
        }
    }
}

impl DrawState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a document around a committed item list, e.g. one loaded
    /// from disk. The loaded items sit above the initial empty snapshot,
    /// so a single undo clears them.
    pub fn from_items(items: Vec<DrawItem>, drawing_mode: DrawItemKind) -> Self {
        let screen_states = if items.is_empty() {
            vec![Vec::new()]
        } else {
            vec![Vec::new(), items.clone()]
        };
        Self {
            done_items: items,
            screen_states,
            drawing_mode,
        }
    }

    pub fn done_items(&self) -> &[DrawItem] {
        &self.done_items
    }

    pub fn drawing_mode(&self) -> DrawItemKind {
        self.drawing_mode
    }

    /// True once any snapshot sits above the initial empty one.
    pub fn can_undo(&self) -> bool {
        self.screen_states.len() > 1
    }

    /// Number of snapshots on the undo stack, the initial one included.
    pub fn history_depth(&self) -> usize {
        self.screen_states.len()
    }

    /// Mutable access to a committed item for live style and text edits.
    /// Those edits become undoable once a snapshot action records them.
    pub(crate) fn done_item_mut(&mut self, index: usize) -> Option<&mut DrawItem> {
        self.done_items.get_mut(index)
    }

    /// Removes and returns a committed item without touching the undo
    /// stack. Used when an item is picked up for editing.
    pub(crate) fn take_done_item(&mut self, index: usize) -> Option<DrawItem> {
        if index < self.done_items.len() {
            Some(self.done_items.remove(index))
        } else {
            None
        }
    }

    /// Applies one action. Every action is total: invalid indices and
    /// empty-history undo degrade to no-ops.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::AddDoneItem(item) => {
                self.done_items.push(item);
            }
            Action::DeleteDoneItem(index) => {
                if index < self.done_items.len() {
                    self.done_items.remove(index);
                } else {
                    debug!(index, len = self.done_items.len(), "delete index out of range");
                }
            }
            Action::AddScreenState(current) => {
                let mut snapshot = self.done_items.clone();
                match current {
                    Some(item) if item.is_degenerate_rectangle() => {
                        debug!("skipping snapshot of degenerate rectangle");
                        return;
                    }
                    Some(item) => snapshot.push(item),
                    None => {}
                }
                self.screen_states.push(snapshot);
            }
            Action::Cancel => {
                if self.screen_states.len() > 1 {
                    self.screen_states.pop();
                    self.done_items = self
                        .screen_states
                        .last()
                        .cloned()
                        .unwrap_or_default();
                }
            }
            Action::SetDrawingMode(kind) => {
                self.drawing_mode = kind;
            }
        }
    }
}
