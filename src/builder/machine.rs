//! Builder for constructing state machines.

use crate::config::Configuration;
use crate::core::{Event, State};
use crate::machine::{Fsm, FsmError};
use std::sync::Arc;

/// Builder for constructing a [`Fsm`] from a configuration.
pub struct FsmBuilder<S: State = String, E: Event = String> {
    configuration: Option<Arc<Configuration<S, E>>>,
}

impl<S: State, E: Event> FsmBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            configuration: None,
        }
    }

    /// Set the configuration (required).
    ///
    /// Accepts an owned configuration or an `Arc` shared with other machines.
    pub fn configuration(mut self, configuration: impl Into<Arc<Configuration<S, E>>>) -> Self {
        self.configuration = Some(configuration.into());
        self
    }

    /// Build the state machine.
    /// Returns an error if no configuration was supplied.
    pub fn build(self) -> Result<Fsm<S, E>, FsmError> {
        Fsm::try_new(self.configuration)
    }
}

impl<S: State, E: Event> Default for FsmBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
