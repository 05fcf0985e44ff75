//! Configuration-driven state machine with linear undo/redo.

use crate::config::Configuration;
use crate::core::{Event, State, StateHistory};
use crate::machine::error::FsmError;
use std::mem;
use std::sync::Arc;
use tracing::debug;

/// Finite state machine over a shared configuration.
///
/// The current state is the configuration's initial state, a declared
/// state reached through `change_state`, or the target of a declared
/// transition. Forward moves (`change_state`, `trigger`) record the state
/// being left and invalidate redo. `reset` and `clear_history` sit outside
/// that discipline: `reset` leaves both stacks alone, `clear_history` leaves
/// the current state alone.
///
/// # Example
///
/// ```rust
/// use rewind::builder::ConfigurationBuilder;
/// use rewind::Fsm;
///
/// let config = ConfigurationBuilder::new()
///     .initial("idle".to_string())
///     .transition("idle".to_string(), "start".to_string(), "running".to_string())
///     .transition("running".to_string(), "stop".to_string(), "idle".to_string())
///     .build()
///     .unwrap();
///
/// let mut fsm: Fsm = Fsm::new(config);
/// fsm.trigger(&"start".to_string()).unwrap();
/// assert_eq!(fsm.state(), "running");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "idle");
/// ```
#[derive(Clone, Debug)]
pub struct Fsm<S: State = String, E: Event = String> {
    config: Arc<Configuration<S, E>>,
    state: S,
    history: StateHistory<S>,
}

impl<S: State, E: Event> Fsm<S, E> {
    /// Create a machine in the configuration's initial state.
    ///
    /// Neither the initial state nor any transition target is checked
    /// against the declared states.
    pub fn new(config: impl Into<Arc<Configuration<S, E>>>) -> Self {
        let config = config.into();
        Self {
            state: config.initial.clone(),
            config,
            history: StateHistory::new(),
        }
    }

    /// Create a machine from a configuration that may be absent.
    pub fn try_new(config: Option<Arc<Configuration<S, E>>>) -> Result<Self, FsmError> {
        config.map(Self::new).ok_or(FsmError::ConfigurationMissing)
    }

    /// Current state (pure)
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Configuration this machine reads from (pure)
    pub fn configuration(&self) -> &Arc<Configuration<S, E>> {
        &self.config
    }

    /// Undo/redo stacks (pure)
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Declared states, optionally narrowed to those reacting to `event`.
    ///
    /// With `None`, or an event with an empty name, every declared state is
    /// returned. Otherwise only states declaring a transition for `event`
    /// are returned, possibly none. Both follow declaration order.
    pub fn states(&self, event: Option<&E>) -> Vec<&S> {
        match event {
            None => self.config.state_ids(),
            Some(event) if event.name().is_empty() => self.config.state_ids(),
            Some(event) => self.config.states_with_event(event),
        }
    }

    /// Jump to `target`, bypassing transition rules.
    ///
    /// Fails with [`FsmError::UnknownState`] if `target` is not declared.
    pub fn change_state(&mut self, target: S) -> Result<(), FsmError> {
        if !self.config.contains_state(&target) {
            debug!(state = target.name(), "rejected jump to undeclared state");
            return Err(FsmError::UnknownState {
                state: target.name().to_string(),
            });
        }
        self.advance(target);
        Ok(())
    }

    /// Follow the current state's transition for `event`.
    ///
    /// Fails with [`FsmError::UnknownEvent`] if the current state declares no
    /// transition for `event`. The destination is taken from the
    /// configuration as is, without a membership check.
    pub fn trigger(&mut self, event: &E) -> Result<(), FsmError> {
        let Some(target) = self.config.target(&self.state, event).cloned() else {
            debug!(
                event = event.name(),
                state = self.state.name(),
                "rejected event with no transition"
            );
            return Err(FsmError::UnknownEvent {
                event: event.name().to_string(),
                state: self.state.name().to_string(),
            });
        };
        debug!(event = event.name(), "event triggered");
        self.advance(target);
        Ok(())
    }

    /// Return to the initial state without touching either history stack.
    pub fn reset(&mut self) {
        self.state = self.config.initial.clone();
        debug!(state = self.state.name(), "machine reset");
    }

    /// Step back to the previous state. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.state);
        if undone {
            debug!(state = self.state.name(), "undo");
        }
        undone
    }

    /// Re-apply the most recently undone state. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.state);
        if redone {
            debug!(state = self.state.name(), "redo");
        }
        redone
    }

    /// Empty both history stacks. The current state is kept.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn advance(&mut self, target: S) {
        let from = mem::replace(&mut self.state, target);
        debug!(from = from.name(), to = self.state.name(), "state changed");
        self.history.record(from);
    }
}
