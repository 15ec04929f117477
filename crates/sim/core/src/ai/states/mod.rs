//! Concrete behavior states.
//!
//! All periodic behavior uses the time-gate idiom: each state keeps an
//! absolute next-allowed timestamp and returns early while the shared clock
//! has not reached it. Transitioning away (the exit hook) is the only
//! cancellation mechanism.

mod attacking;
mod chasing;
mod dead;
mod fleeing;
mod idle;
mod wandering;

pub use attacking::Attacking;
pub use chasing::Chasing;
pub use dead::Dead;
pub use fleeing::Fleeing;
pub use idle::Idle;
pub use wandering::Wandering;

// Roll contexts for per-state random draws. The weapon owns contexts 0-1;
// everything here starts at 2 so draws within one tick never share a seed.
pub(crate) const ROLL_WANDER_CHANCE: u32 = 2;
pub(crate) const ROLL_WANDER_ANGLE: u32 = 3;
pub(crate) const ROLL_WANDER_RADIUS: u32 = 4;
pub(crate) const ROLL_CHASE_JITTER: u32 = 5;
pub(crate) const ROLL_STRAFE_ANGLE: u32 = 6;
pub(crate) const ROLL_STRAFE_RADIUS: u32 = 7;
pub(crate) const ROLL_FLEE_JITTER: u32 = 8;

/// Deterministic point inside the unit disc, from two independent rolls.
/// The square root keeps the distribution uniform over the area.
pub(crate) fn point_in_disc(angle_roll: f32, radius_roll: f32) -> crate::types::Vec2 {
    let angle = angle_roll * std::f32::consts::TAU;
    crate::types::Vec2::from_angle(angle) * radius_roll.sqrt()
}
