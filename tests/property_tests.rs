//! Property-based tests for the state machine engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated configurations and operation sequences.

use proptest::prelude::*;
use rewind::{Configuration, Fsm, FsmError, StateDef};

const STATE_POOL: usize = 6;
const EVENT_POOL: usize = 4;

fn state_id(i: usize) -> String {
    format!("s{i}")
}

fn event_id(i: usize) -> String {
    format!("e{i}")
}

prop_compose! {
    /// A configuration declaring a shuffled subset of the state pool, with
    /// transitions whose targets may fall outside the declared set.
    fn arbitrary_config()(
        declared in prop::sample::subsequence((0..STATE_POOL).collect::<Vec<_>>(), 1..=STATE_POOL)
            .prop_shuffle(),
        transitions in prop::collection::vec((0..STATE_POOL, 0..EVENT_POOL, 0..=STATE_POOL), 0..16),
    ) -> Configuration {
        let mut config = Configuration::new(state_id(declared[0]));
        for &i in &declared {
            config.states.insert(state_id(i), StateDef::new());
        }
        for (from, event, to) in transitions {
            if let Some(def) = config.states.get_mut(&state_id(from)) {
                def.transitions.insert(event_id(event), state_id(to));
            }
        }
        config
    }
}

#[derive(Clone, Debug)]
enum Op {
    Change(usize),
    Trigger(usize),
    Undo,
    Redo,
    Reset,
    Clear,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..=STATE_POOL).prop_map(Op::Change),
        (0..EVENT_POOL).prop_map(Op::Trigger),
        Just(Op::Undo),
        Just(Op::Redo),
        Just(Op::Reset),
        Just(Op::Clear),
    ]
}

/// Straight-line reference for the engine's stack discipline.
struct Model {
    state: String,
    history: Vec<String>,
    future: Vec<String>,
}

impl Model {
    fn new(config: &Configuration) -> Self {
        Self {
            state: config.initial.clone(),
            history: Vec::new(),
            future: Vec::new(),
        }
    }

    fn apply(&mut self, config: &Configuration, op: &Op) {
        match op {
            Op::Change(i) => {
                let target = state_id(*i);
                if config.states.contains_key(&target) {
                    self.history.push(std::mem::replace(&mut self.state, target));
                    self.future.clear();
                }
            }
            Op::Trigger(i) => {
                let target = config
                    .states
                    .get(&self.state)
                    .and_then(|def| def.transitions.get(&event_id(*i)))
                    .cloned();
                if let Some(target) = target {
                    self.history.push(std::mem::replace(&mut self.state, target));
                    self.future.clear();
                }
            }
            Op::Undo => {
                if let Some(previous) = self.history.pop() {
                    self.future.push(std::mem::replace(&mut self.state, previous));
                }
            }
            Op::Redo => {
                if let Some(next) = self.future.pop() {
                    self.history.push(std::mem::replace(&mut self.state, next));
                }
            }
            Op::Reset => self.state = config.initial.clone(),
            Op::Clear => {
                self.history.clear();
                self.future.clear();
            }
        }
    }
}

fn apply(fsm: &mut Fsm, op: &Op) {
    match op {
        Op::Change(i) => {
            let _ = fsm.change_state(state_id(*i));
        }
        Op::Trigger(i) => {
            let _ = fsm.trigger(&event_id(*i));
        }
        Op::Undo => {
            fsm.undo();
        }
        Op::Redo => {
            fsm.redo();
        }
        Op::Reset => fsm.reset(),
        Op::Clear => fsm.clear_history(),
    }
}

proptest! {
    #[test]
    fn starts_in_initial_state(config in arbitrary_config()) {
        let fsm: Fsm = Fsm::new(config.clone());
        prop_assert_eq!(fsm.state(), &config.initial);
    }

    #[test]
    fn states_lists_declared_keys_in_order(config in arbitrary_config()) {
        let expected: Vec<&String> = config.states.keys().collect();
        let fsm: Fsm = Fsm::new(config.clone());
        prop_assert_eq!(fsm.states(None), expected);
    }

    #[test]
    fn states_for_event_lists_exactly_reacting_states(
        config in arbitrary_config(),
        event in 0..=EVENT_POOL,
    ) {
        let event = event_id(event);
        let expected: Vec<&String> = config
            .states
            .iter()
            .filter(|(_, def)| def.transitions.contains_key(&event))
            .map(|(state, _)| state)
            .collect();
        let fsm: Fsm = Fsm::new(config.clone());
        prop_assert_eq!(fsm.states(Some(&event)), expected);
    }

    #[test]
    fn rejected_jump_leaves_state(config in arbitrary_config(), target in 0..=STATE_POOL) {
        let target = state_id(target);
        let mut fsm: Fsm = Fsm::new(config.clone());
        let before = fsm.state().clone();

        match fsm.change_state(target.clone()) {
            Ok(()) => {
                prop_assert!(config.contains_state(&target));
                prop_assert_eq!(fsm.state(), &target);
                prop_assert!(fsm.undo());
                prop_assert_eq!(fsm.state(), &before);
            }
            Err(err) => {
                prop_assert!(!config.contains_state(&target));
                prop_assert_eq!(err, FsmError::UnknownState { state: target });
                prop_assert_eq!(fsm.state(), &before);
            }
        }
    }

    #[test]
    fn matches_reference_model(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_op(), 0..40),
    ) {
        let mut fsm: Fsm = Fsm::new(config.clone());
        let mut model = Model::new(&config);

        for op in &ops {
            apply(&mut fsm, op);
            model.apply(&config, op);

            prop_assert_eq!(fsm.state(), &model.state);
            prop_assert_eq!(fsm.history().past(), model.history.as_slice());
            prop_assert_eq!(fsm.history().future(), model.future.as_slice());
        }
    }

    #[test]
    fn undo_then_redo_is_identity(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_op(), 0..20),
    ) {
        let mut fsm: Fsm = Fsm::new(config);
        for op in &ops {
            apply(&mut fsm, op);
        }
        let state = fsm.state().clone();
        let past = fsm.history().past().to_vec();

        if fsm.undo() {
            prop_assert!(fsm.redo());
            prop_assert_eq!(fsm.state(), &state);
            prop_assert_eq!(fsm.history().past(), past.as_slice());
        }
    }

    #[test]
    fn forward_move_invalidates_redo(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        target in 0..STATE_POOL,
    ) {
        let mut fsm: Fsm = Fsm::new(config);
        for op in &ops {
            apply(&mut fsm, op);
        }
        fsm.undo();

        if fsm.change_state(state_id(target)).is_ok() {
            prop_assert!(!fsm.can_redo());
            prop_assert!(!fsm.redo());
        }
    }

    #[test]
    fn reset_preserves_stacks(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_op(), 0..20),
    ) {
        let mut fsm: Fsm = Fsm::new(config.clone());
        for op in &ops {
            apply(&mut fsm, op);
        }
        let before = fsm.history().clone();

        fsm.reset();

        prop_assert_eq!(fsm.state(), &config.initial);
        prop_assert_eq!(fsm.history(), &before);
    }

    #[test]
    fn clear_history_disables_undo_and_redo(
        config in arbitrary_config(),
        ops in prop::collection::vec(arbitrary_op(), 0..20),
    ) {
        let mut fsm: Fsm = Fsm::new(config);
        for op in &ops {
            apply(&mut fsm, op);
        }
        let state = fsm.state().clone();

        fsm.clear_history();

        prop_assert!(!fsm.undo());
        prop_assert!(!fsm.redo());
        prop_assert_eq!(fsm.state(), &state);
    }
}
