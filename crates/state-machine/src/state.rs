//! Core state trait.
//!
//! This module defines the [`State`] trait, the fundamental abstraction for
//! all behavior states. The trait is generic over a context type `C`, which
//! carries the live actor data that states read and mutate.

/// A behavior unit driven by a [`StateMachine`](crate::StateMachine).
///
/// Concrete states encapsulate the enter/exit/tick behavior for one mode of
/// an actor. They are constructed once at actor initialization and reused for
/// the actor's lifetime; any per-activation bookkeeping (timers, anchors) is
/// reset in [`on_enter`](State::on_enter).
pub trait State<C> {
    /// Diagnostic name of this state, used for logging and display.
    fn name(&self) -> &'static str;

    /// Called when the machine activates this state.
    ///
    /// Guaranteed to run strictly before the first [`tick`](State::tick) of
    /// this activation, and strictly after the previous state's
    /// [`on_exit`](State::on_exit).
    fn on_enter(&mut self, _ctx: &mut C) {}

    /// Called when the machine deactivates this state.
    ///
    /// Transitioning away is the only cancellation mechanism for periodic
    /// behavior, so states with continuous side effects stop them here.
    fn on_exit(&mut self, _ctx: &mut C) {}

    /// Called once per simulation tick while this state is active.
    fn tick(&mut self, ctx: &mut C);
}
