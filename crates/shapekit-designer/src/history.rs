//! Bounded undo history.
//!
//! Each recorded action carries a full snapshot of the affected shape,
//! taken before the action's effect, so undo can restore state without
//! replaying the intervening edits. The ring is bounded; recording past
//! capacity evicts the oldest entry.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use crate::serialization::ShapeDocument;

/// Default bound on the undo ring.
pub const DEFAULT_UNDO_CAPACITY: usize = 50;

/// What an action did to its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Add,
    Remove,
    Modify,
}

/// A recorded, undoable action.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    pub kind: ActionKind,
    /// Live id of the affected shape at the time of recording.
    pub shape_id: String,
    /// The shape as it stood before the action took effect.
    pub snapshot: ShapeDocument,
    pub timestamp: DateTime<Utc>,
}

impl Action {
    pub fn new(kind: ActionKind, shape_id: impl Into<String>, snapshot: ShapeDocument) -> Self {
        Self {
            kind,
            shape_id: shape_id.into(),
            snapshot,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UndoManager {
    stack: VecDeque<Action>,
    capacity: usize,
}

impl UndoManager {
    pub fn new(capacity: usize) -> Self {
        Self {
            stack: VecDeque::with_capacity(capacity.min(DEFAULT_UNDO_CAPACITY)),
            capacity,
        }
    }

    /// Record an action, evicting the oldest entry when full.
    ///
    /// A zero-capacity manager records nothing.
    pub fn push(&mut self, action: Action) {
        if self.capacity == 0 {
            return;
        }
        while self.stack.len() >= self.capacity {
            self.stack.pop_front();
        }
        self.stack.push_back(action);
    }

    /// Remove and return the most recent action.
    pub fn pop(&mut self) -> Option<Action> {
        self.stack.pop_back()
    }

    /// The most recent action, without removing it.
    pub fn peek(&self) -> Option<&Action> {
        self.stack.back()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Recorded actions, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &Action> {
        self.stack.iter()
    }
}

impl Default for UndoManager {
    fn default() -> Self {
        Self::new(DEFAULT_UNDO_CAPACITY)
    }
}
