//! Transition edges.

/// Boxed boolean predicate evaluated against live actor data.
///
/// Conditions must be pure with respect to the context: they read state but
/// never mutate it, so evaluating a condition that does not fire has no
/// observable effect on the simulation.
pub type Condition<C> = Box<dyn Fn(&C) -> bool>;

/// An edge in the state graph: a destination state key and the predicate
/// that fires it.
///
/// Transitions are immutable after registration. Their source scope (a
/// specific state, or "any state") is determined by which table the owning
/// [`StateMachine`](crate::StateMachine) stores them in.
pub struct Transition<K, C> {
    to: K,
    condition: Condition<C>,
}

impl<K: Copy, C> Transition<K, C> {
    /// Creates a new transition toward `to`, fired when `condition` holds.
    pub fn new(to: K, condition: Condition<C>) -> Self {
        Self { to, condition }
    }

    /// Destination state key.
    pub fn to(&self) -> K {
        self.to
    }

    /// Evaluates the predicate against the current context.
    pub fn is_met(&self, ctx: &C) -> bool {
        (self.condition)(ctx)
    }
}
