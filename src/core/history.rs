//! Undo/redo history tracking.
//!
//! Classic two-stack history: `past` holds the states visited before the
//! current one (top = most recent predecessor), `future` holds the states
//! undone from (top = most recently undone).

use super::state::State;
use serde::{Deserialize, Serialize};
use std::mem;

/// Linear undo/redo stacks of visited states.
///
/// The current state is owned by the caller; `undo` and `redo` swap it with
/// the top of the relevant stack.
///
/// # Example
///
/// ```rust
/// use rewind::core::StateHistory;
///
/// let mut current = "draft".to_string();
/// let mut history = StateHistory::new();
///
/// history.record(std::mem::replace(&mut current, "review".to_string()));
///
/// assert!(history.undo(&mut current));
/// assert_eq!(current, "draft");
///
/// assert!(history.redo(&mut current));
/// assert_eq!(current, "review");
/// assert!(!history.redo(&mut current));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    past: Vec<S>,
    future: Vec<S>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
        }
    }

    /// Record a forward move away from `from`.
    ///
    /// Pushes `from` onto the undo stack and invalidates every redo entry.
    pub fn record(&mut self, from: S) {
        self.past.push(from);
        self.future.clear();
    }

    /// Step back one state.
    ///
    /// Returns `false` without touching anything when there is nothing to
    /// undo. Otherwise `current` is pushed onto the redo stack and replaced
    /// by the most recent predecessor.
    pub fn undo(&mut self, current: &mut S) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        self.future.push(mem::replace(current, previous));
        true
    }

    /// Step forward one undone state. Mirror image of [`undo`](Self::undo).
    pub fn redo(&mut self, current: &mut S) -> bool {
        let Some(next) = self.future.pop() else {
            return false;
        };
        self.past.push(mem::replace(current, next));
        true
    }

    /// Empty both stacks.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    /// States available for undo, oldest first.
    pub fn past(&self) -> &[S] {
        &self.past
    }

    /// States available for redo, most recently undone last.
    pub fn future(&self) -> &[S] {
        &self.future
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }
}
