//! The finite state machine engine.
//!
//! [`Fsm`] owns the current state and the undo/redo history, and reads
//! transition rules from a shared, immutable [`Configuration`](crate::config::Configuration).

mod error;
mod fsm;

pub use error::FsmError;
pub use fsm::Fsm;
