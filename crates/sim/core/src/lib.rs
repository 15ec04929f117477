//! Authoritative enemy AI core.
//!
//! This crate contains the simulation-side half of enemy behavior: the
//! enemy aggregate, its behavior states and transition predicates, target
//! acquisition with damping, damage attribution for loot credit, and
//! deterministic ranged-attack scheduling. The generic state machine that
//! drives the states lives in the `state-machine` crate.
//!
//! # Architecture
//!
//! - [`actor`]: the [`Enemy`](actor::Enemy) aggregate, live target views and
//!   the actor registry
//! - [`ai`]: behavior states, transition predicates and the
//!   [`EnemyBrain`](ai::EnemyBrain) that wires the transition tables
//! - [`combat`]: health, damage attribution and the burst-fire ranged weapon
//! - [`env`]: boundary contracts with external subsystems (movement driver,
//!   shared clock, deterministic RNG)
//!
//! # Determinism
//!
//! The whole crate is single-threaded by design: one simulation thread
//! advances a shared monotonic clock and ticks each actor in a stable order.
//! All randomness flows through a stateless seeded RNG so that the same
//! clock value always reproduces the same decision, which lets a client
//! reconstruct projectile fans without receiving each projectile's angle.

pub mod actor;
pub mod ai;
pub mod combat;
pub mod config;
pub mod env;
pub mod types;

#[cfg(test)]
pub(crate) mod test_util;

pub use actor::{ActorRegistry, Enemy, EnemyEvent, TargetState};
pub use ai::{EnemyBrain, EnemyStateId};
pub use combat::{Health, RangedWeapon, Volley};
pub use config::EnemyConfig;
pub use env::{MovementDriver, SharedClock};
pub use types::{EntityId, Vec2};
