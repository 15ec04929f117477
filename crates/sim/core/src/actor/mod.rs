//! Actors: live target views, the actor registry, and the enemy aggregate.

pub mod enemy;
pub mod registry;
pub mod target;

pub use enemy::{Enemy, EnemyEvent};
pub use registry::ActorRegistry;
pub use target::{SharedTarget, TargetHandle, TargetState};
