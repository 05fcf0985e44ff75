//! Rewind: a minimal configuration-driven finite state machine
//!
//! A machine is described declaratively: an initial state plus, for each
//! state, the events it reacts to and where they lead. The [`Fsm`] engine
//! tracks the current state, applies transitions, and keeps linear
//! undo/redo history of every state change.
//!
//! # Core Concepts
//!
//! - **Configuration**: Immutable, shared description of states and transitions
//! - **Fsm**: Current state plus history and future stacks
//! - **History**: Forward moves push onto history and invalidate redo
//!
//! # Example
//!
//! ```rust
//! use rewind::{Configuration, Fsm, StateDef};
//!
//! fn s(id: &str) -> String {
//!     id.to_string()
//! }
//!
//! let mut config = Configuration::new(s("normal"));
//! config.states.insert(s("normal"), StateDef::new().on(s("study"), s("busy")));
//! config.states.insert(s("busy"), StateDef::new().on(s("get_tired"), s("sleeping")));
//! config.states.insert(s("sleeping"), StateDef::new().on(s("get_up"), s("normal")));
//!
//! let mut fsm: Fsm = Fsm::new(config);
//! fsm.trigger(&s("study")).unwrap();
//! fsm.trigger(&s("get_tired")).unwrap();
//! assert_eq!(fsm.state(), "sleeping");
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.state(), "busy");
//! assert!(fsm.redo());
//! assert_eq!(fsm.state(), "sleeping");
//!
//! assert!(fsm.trigger(&s("study")).is_err());
//! assert_eq!(fsm.states(Some(&s("get_up"))), vec!["sleeping"]);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, ConfigurationBuilder, FsmBuilder};
pub use config::{Configuration, StateDef};
pub use crate::core::{Event, OrderedMap, State, StateHistory};
pub use machine::{Fsm, FsmError};
