//! Builder for constructing configurations.

use crate::builder::error::BuildError;
use crate::config::{Configuration, StateDef};
use crate::core::{Event, OrderedMap, State};

/// Builder for constructing configurations with a fluent API.
///
/// States are declared in the order they are first mentioned, either through
/// [`state`](Self::state) or as the source of a [`transition`](Self::transition).
/// Transition targets are not declared implicitly.
pub struct ConfigurationBuilder<S: State = String, E: Event = String> {
    initial: Option<S>,
    states: OrderedMap<S, StateDef<S, E>>,
}

impl<S: State, E: Event> ConfigurationBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: OrderedMap::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Declare a state. Declaring an existing state keeps its transitions.
    pub fn state(mut self, state: S) -> Self {
        if !self.states.contains_key(&state) {
            self.states.insert(state, StateDef::new());
        }
        self
    }

    /// Declare `from --event--> to`, declaring `from` if needed.
    ///
    /// A later transition for the same `(from, event)` pair replaces the
    /// earlier one.
    pub fn transition(mut self, from: S, event: E, to: S) -> Self {
        match self.states.get_mut(&from) {
            Some(def) => {
                def.transitions.insert(event, to);
            }
            None => {
                self.states.insert(from, StateDef::new().on(event, to));
            }
        }
        self
    }

    /// Add a fully formed state definition, replacing any earlier one.
    pub fn state_def(mut self, state: S, def: StateDef<S, E>) -> Self {
        self.states.insert(state, def);
        self
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Configuration<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        Ok(Configuration {
            initial,
            states: self.states,
        })
    }
}

impl<S: State, E: Event> Default for ConfigurationBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
