//! Movement driver contract.

use crate::types::Vec2;

/// Locomotion interface the AI core drives.
///
/// Pathfinding and collision are external concerns. States issue high-level
/// commands (navigate somewhere, stop, change speed) and query position and
/// motion; how the destination is actually reached is up to the
/// implementation. The runtime steps drivers through
/// [`advance`](MovementDriver::advance) once per tick.
pub trait MovementDriver {
    /// Current position of the actor.
    fn position(&self) -> Vec2;

    /// Starts moving toward `destination`, stopping once within
    /// `stopping_distance` of it.
    fn navigate(&mut self, destination: Vec2, stopping_distance: f32);

    /// Cancels the current navigation and stops in place.
    fn reset(&mut self);

    /// Changes the movement speed for subsequent motion.
    fn set_speed(&mut self, speed: f32);

    /// Teleports to `point`, cancelling any navigation.
    fn warp(&mut self, point: Vec2);

    /// Whether the actor is still en route to a destination.
    fn is_moving(&self) -> bool;

    /// Integrates motion over `dt` seconds. Drivers backed by an external
    /// locomotion system can leave this as a no-op.
    fn advance(&mut self, _dt: f64) {}
}
