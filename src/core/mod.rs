//! Core building blocks of the state machine.
//!
//! This module contains the pieces the engine is assembled from:
//! - Identifier traits via `State` and `Event`
//! - An insertion-ordered lookup table
//! - Undo/redo history stacks

mod history;
mod state;
mod table;

pub use history::StateHistory;
pub use state::{Event, State};
pub use table::OrderedMap;
