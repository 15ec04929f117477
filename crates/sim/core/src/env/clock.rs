//! Shared simulation clock.

use std::cell::Cell;
use std::rc::Rc;

/// Monotonic simulation time handle shared between the server loop and
/// every actor it drives.
///
/// Only the server loop advances the clock; actors read it for time-gates
/// and for deterministic random seeds. Cloning is cheap and all clones
/// observe the same value. Single simulation thread, so a `Cell` suffices.
#[derive(Clone, Debug, Default)]
pub struct SharedClock {
    inner: Rc<Cell<f64>>,
}

impl SharedClock {
    pub fn new(start: f64) -> Self {
        Self {
            inner: Rc::new(Cell::new(start)),
        }
    }

    /// Current simulation time in seconds.
    pub fn now(&self) -> f64 {
        self.inner.get()
    }

    /// Advances the clock by `dt` seconds. Called once per server tick.
    pub fn advance(&self, dt: f64) {
        self.inner.set(self.inner.get() + dt);
    }
}
