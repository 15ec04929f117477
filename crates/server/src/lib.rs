//! Simulation runtime: a fixed-timestep loop around the AI core.
//!
//! The runtime owns the shared clock, the actor registry and the enemy
//! brains. Each step advances the clock, raises aggro for candidates inside
//! each enemy's notice radius, ticks every brain in stable id order, and
//! drains the resulting events (volleys to the projectile layer, deaths to
//! loot resolution and despawn).
//!
//! Enemy tuning comes from RON template files; see [`content`].

pub mod content;
pub mod movement;
pub mod world;

pub use content::{ContentError, EnemyCatalog, EnemyTemplate, WeaponTemplate};
pub use movement::KinematicDriver;
pub use world::SimWorld;
