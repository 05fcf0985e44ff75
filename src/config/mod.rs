//! Declarative machine configuration.
//!
//! A [`Configuration`] names the initial state and, for every state, the
//! events it reacts to and where each one leads. It is supplied once and
//! never mutated by the machine. Nothing here checks that targets are
//! declared states: the configuration is trusted.

use crate::core::{Event, OrderedMap, State};
use serde::{Deserialize, Serialize};

/// Transition table of a single state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateDef<S: State = String, E: Event = String> {
    /// Event -> destination state, in declaration order
    #[serde(default)]
    pub transitions: OrderedMap<E, S>,
}

impl<S: State, E: Event> Default for StateDef<S, E> {
    fn default() -> Self {
        Self {
            transitions: OrderedMap::new(),
        }
    }
}

impl<S: State, E: Event> StateDef<S, E> {
    /// Create a state with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition, returning the updated definition.
    pub fn on(mut self, event: E, target: S) -> Self {
        self.transitions.insert(event, target);
        self
    }

    /// Destination for `event`, if this state declares one.
    pub fn target(&self, event: &E) -> Option<&S> {
        self.transitions.get(event)
    }
}

/// Complete machine description.
///
/// # Example
///
/// ```rust
/// use rewind::config::{Configuration, StateDef};
///
/// let mut config: Configuration = Configuration::new("solid".to_string());
/// config.states.insert(
///     "solid".to_string(),
///     StateDef::new().on("melt".to_string(), "liquid".to_string()),
/// );
/// config.states.insert("liquid".to_string(), StateDef::new());
///
/// assert!(config.contains_state(&"liquid".to_string()));
/// assert_eq!(
///     config.target(&"solid".to_string(), &"melt".to_string()),
///     Some(&"liquid".to_string())
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Configuration<S: State = String, E: Event = String> {
    /// State the machine starts in and returns to on reset
    pub initial: S,

    /// Declared states, in declaration order
    pub states: OrderedMap<S, StateDef<S, E>>,
}

impl<S: State, E: Event> Configuration<S, E> {
    /// Create a configuration with no declared states.
    pub fn new(initial: S) -> Self {
        Self {
            initial,
            states: OrderedMap::new(),
        }
    }

    pub fn contains_state(&self, state: &S) -> bool {
        self.states.contains_key(state)
    }

    pub fn state(&self, state: &S) -> Option<&StateDef<S, E>> {
        self.states.get(state)
    }

    /// Destination of `event` from `state`, if declared.
    pub fn target(&self, state: &S, event: &E) -> Option<&S> {
        self.state(state).and_then(|def| def.target(event))
    }

    /// All declared state identifiers, in declaration order.
    pub fn state_ids(&self) -> Vec<&S> {
        self.states.keys().collect()
    }

    /// States declaring a transition for `event`, in declaration order.
    pub fn states_with_event(&self, event: &E) -> Vec<&S> {
        self.states
            .iter()
            .filter(|(_, def)| def.transitions.contains_key(event))
            .map(|(state, _)| state)
            .collect()
    }
}
