//! Transition predicates.
//!
//! Each predicate is a boolean function of live enemy state, evaluated
//! fresh every tick; nothing is cached between evaluations. The functions
//! here just box the corresponding [`Enemy`] accessors for registration
//! with the state machine.

use state_machine::Condition;

use crate::actor::Enemy;

/// Own health is exhausted.
pub fn died() -> Condition<Enemy> {
    Box::new(Enemy::died)
}

/// The target handle no longer resolves to a live actor entry.
pub fn target_disappeared() -> Condition<Enemy> {
    Box::new(Enemy::target_disappeared)
}

/// The target still exists but its health is exhausted.
pub fn target_died() -> Condition<Enemy> {
    Box::new(Enemy::target_died)
}

/// The target's boundary is beyond the follow range; pursuit is abandoned.
pub fn target_too_far_to_follow() -> Condition<Enemy> {
    Box::new(Enemy::target_too_far_to_follow)
}

/// The target's boundary is beyond the engagement distance.
pub fn target_too_far_to_attack() -> Condition<Enemy> {
    Box::new(Enemy::target_too_far_to_attack)
}

/// A live target is held.
pub fn aggro() -> Condition<Enemy> {
    Box::new(Enemy::aggro)
}

/// Own health is at or below the configured low-health fraction.
pub fn low_health() -> Condition<Enemy> {
    Box::new(Enemy::low_health)
}
