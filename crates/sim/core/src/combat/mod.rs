//! Combat primitives: health, damage attribution, ranged weapon scheduling.

pub mod attribution;
pub mod health;
pub mod weapon;

pub use attribution::DamageTracker;
pub use health::Health;
pub use weapon::{
    MAX_SHOOT_MODES, ProjectileShot, ProjectileSpec, RangedWeapon, ShootMode, ShootPattern, Volley,
};
