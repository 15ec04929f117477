//! The state machine itself.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::{Condition, State, Transition};

/// Drives exactly one active behavior per tick for an actor, using
/// declarative transition tables.
///
/// `K` is a closed state-key type (an enum in practice); `C` is the actor
/// context that states and conditions operate on.
///
/// # Invariants
///
/// - Exactly one state is active at a time once [`set_state`] has been
///   called; before that, [`tick`] is a no-op.
/// - State changes only happen through [`set_state`], which always runs
///   `on_exit` on the old state before `on_enter` on the new one and never
///   re-enters the state that is already active.
/// - At most one state transition occurs per [`tick`] call: the first global
///   edge whose predicate holds wins, otherwise the first matching edge of
///   the current state; scoped edges are not evaluated once a global edge
///   fired, even one that targets the current state.
///
/// [`set_state`]: StateMachine::set_state
/// [`tick`]: StateMachine::tick
pub struct StateMachine<K, C> {
    states: HashMap<K, Box<dyn State<C>>>,
    transitions: HashMap<K, Vec<Transition<K, C>>>,
    any_transitions: Vec<Transition<K, C>>,
    current: Option<K>,
}

impl<K, C> StateMachine<K, C>
where
    K: Copy + Eq + Hash + Debug,
{
    /// Creates an empty machine with no active state.
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            transitions: HashMap::new(),
            any_transitions: Vec::new(),
            current: None,
        }
    }

    /// Registers the concrete state behind a key.
    ///
    /// Each key must be registered exactly once, before any transition
    /// references it.
    ///
    /// # Panics
    ///
    /// Panics if `key` was already registered. Replacing a live state would
    /// discard its accumulated bookkeeping and likely indicates a
    /// programming error.
    pub fn add_state(&mut self, key: K, state: Box<dyn State<C>>) {
        let previous = self.states.insert(key, state);
        assert!(previous.is_none(), "state {key:?} registered twice");
    }

    /// Registers a per-state edge from `from` to `to`.
    ///
    /// No uniqueness constraint: multiple edges from the same state are
    /// allowed and evaluated in registration order.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint has not been registered with
    /// [`add_state`](StateMachine::add_state).
    pub fn add_transition(&mut self, from: K, to: K, condition: Condition<C>) {
        assert!(self.states.contains_key(&from), "unknown source state {from:?}");
        assert!(self.states.contains_key(&to), "unknown destination state {to:?}");
        self.transitions
            .entry(from)
            .or_default()
            .push(Transition::new(to, condition));
    }

    /// Registers a global edge, evaluated before any per-state edge, for
    /// every state.
    ///
    /// # Panics
    ///
    /// Panics if `to` has not been registered.
    pub fn add_any_transition(&mut self, to: K, condition: Condition<C>) {
        assert!(self.states.contains_key(&to), "unknown destination state {to:?}");
        self.any_transitions.push(Transition::new(to, condition));
    }

    /// Switches the active state.
    ///
    /// No-op if `key` is already current. Otherwise runs `on_exit` on the
    /// old state (if any), makes `key` current, then runs its `on_enter`.
    ///
    /// # Panics
    ///
    /// Panics if `key` has not been registered.
    pub fn set_state(&mut self, key: K, ctx: &mut C) {
        if self.current == Some(key) {
            return;
        }
        assert!(self.states.contains_key(&key), "unknown state {key:?}");

        if let Some(current) = self.current
            && let Some(state) = self.states.get_mut(&current)
        {
            state.on_exit(ctx);
        }

        self.current = Some(key);
        if let Some(state) = self.states.get_mut(&key) {
            state.on_enter(ctx);
        }
    }

    /// Advances the machine by one simulation tick.
    ///
    /// Evaluates global transitions in order, then (only if none fired) the
    /// current state's transitions, switches state on the first match, and
    /// finally ticks the (possibly new) current state. A newly entered
    /// state's `on_enter` therefore always runs strictly before its first
    /// `tick` within the same simulation step.
    ///
    /// Calling `tick` before the machine was initialized with
    /// [`set_state`](StateMachine::set_state) is a no-op.
    pub fn tick(&mut self, ctx: &mut C) {
        let Some(current) = self.current else {
            return;
        };

        if let Some(to) = self.pending_transition(current, ctx) {
            self.set_state(to, ctx);
        }

        if let Some(key) = self.current
            && let Some(state) = self.states.get_mut(&key)
        {
            state.tick(ctx);
        }
    }

    /// Key of the currently active state, if the machine was initialized.
    pub fn current(&self) -> Option<K> {
        self.current
    }

    /// Diagnostic name of the currently active state.
    pub fn current_name(&self) -> Option<&'static str> {
        let key = self.current?;
        self.states.get(&key).map(|state| state.name())
    }

    /// Finds the first matching edge this tick: globals first, then the
    /// current state's table (an unregistered table reads as empty).
    fn pending_transition(&self, from: K, ctx: &C) -> Option<K> {
        for transition in &self.any_transitions {
            if transition.is_met(ctx) {
                return Some(transition.to());
            }
        }
        for transition in self.transitions.get(&from).map(Vec::as_slice).unwrap_or(&[]) {
            if transition.is_met(ctx) {
                return Some(transition.to());
            }
        }
        None
    }
}

impl<K, C> Default for StateMachine<K, C>
where
    K: Copy + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
