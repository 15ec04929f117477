//! Burst-fire ranged weapon scheduling.
//!
//! A weapon steps through a fixed sequence of shoot modes. Each mode fires
//! `repeat` volleys on the attack-speed cooldown, then waits the mode's own
//! cooldown before the next mode begins; the sequence wraps around. Every
//! volley's angular deviation and damage are derived from the shared clock
//! through the seeded RNG, so independent evaluations with the same clock
//! value produce bit-identical projectile fans.
//!
//! All angles are radians.

use arrayvec::ArrayVec;

use crate::env::rng::{RngOracle, compute_seed, seed_from_time};
use crate::types::{EntityId, Vec2};

/// Maximum number of shoot modes in one weapon's burst sequence.
pub const MAX_SHOOT_MODES: usize = 4;

/// Interval used when the configured attack speed is unusable.
const FALLBACK_SHOOT_INTERVAL: f64 = 1.0;

/// Physical parameters of the projectiles a weapon fires.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectileSpec {
    pub min_damage: u32,
    pub max_damage: u32,
    /// Maximum travel distance; also the basis for the engagement range.
    pub move_range: f32,
    pub move_speed: f32,
    pub radius: f32,
}

/// Shape of one volley: how many projectiles, fanned over what arc.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShootPattern {
    /// Fixed offset added to the aim direction.
    pub main_angle: f32,
    /// Total arc the projectiles are spread over.
    pub spread_angle: f32,
    pub projectile_count: u32,
    /// Magnitude of the random rotation applied to the whole fan.
    pub angle_deviation: f32,
    /// Multiplier on the weapon's base attack speed while this pattern is
    /// active.
    pub attack_speed_bonus: f32,
}

/// One step of a weapon's burst sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShootMode {
    pub pattern: ShootPattern,
    /// Number of volleys fired before moving on to the next mode.
    pub repeat: u32,
    /// Pause after the last volley of this mode.
    pub cooldown: f64,
}

/// A single projectile of a fired volley.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectileShot {
    pub angle: f32,
    pub damage: u32,
}

/// Everything the projectile layer needs to simulate one fired volley.
#[derive(Clone, Debug, PartialEq)]
pub struct Volley {
    pub shooter: EntityId,
    pub origin: Vec2,
    pub time: f64,
    pub spec: ProjectileSpec,
    pub projectiles: Vec<ProjectileShot>,
}

/// Time-gated burst-fire weapon.
pub struct RangedWeapon {
    base_attack_speed: f32,
    projectile: ProjectileSpec,
    modes: ArrayVec<ShootMode, MAX_SHOOT_MODES>,
    mode_index: usize,
    volleys_left: u32,
    next_allowed_time: f64,
}

impl RangedWeapon {
    /// Builds a weapon from its burst sequence.
    ///
    /// # Panics
    ///
    /// Panics if `modes` is empty, longer than [`MAX_SHOOT_MODES`], or
    /// contains a mode with a zero repeat count.
    pub fn new(base_attack_speed: f32, projectile: ProjectileSpec, modes: &[ShootMode]) -> Self {
        assert!(!modes.is_empty(), "weapon needs at least one shoot mode");
        assert!(
            modes.len() <= MAX_SHOOT_MODES,
            "weapon has {} shoot modes, maximum is {MAX_SHOOT_MODES}",
            modes.len()
        );
        assert!(
            modes.iter().all(|mode| mode.repeat >= 1),
            "shoot mode repeat count must be at least 1"
        );

        let volleys_left = modes[0].repeat;
        Self {
            base_attack_speed,
            projectile,
            modes: modes.iter().copied().collect(),
            mode_index: 0,
            volleys_left,
            next_allowed_time: 0.0,
        }
    }

    pub fn projectile(&self) -> &ProjectileSpec {
        &self.projectile
    }

    /// Engagement distance guaranteeing projectile reach: a fraction of the
    /// projectile's travel range.
    pub fn attack_range(&self, range_ratio: f32) -> f32 {
        self.projectile.move_range * range_ratio
    }

    /// Fires the next volley if the time-gate has passed.
    ///
    /// `aim_angle` is the direction toward the target; the active pattern's
    /// offsets and the seeded deviation are applied on top of it. Advances
    /// the burst bookkeeping on every shot.
    pub fn try_fire(
        &mut self,
        shooter: EntityId,
        origin: Vec2,
        aim_angle: f32,
        now: f64,
        rng: &impl RngOracle,
    ) -> Option<Volley> {
        if now < self.next_allowed_time {
            return None;
        }

        let mode = self.modes[self.mode_index];
        let pattern = mode.pattern;

        // One deviation draw and one damage draw per volley, shared by all
        // of its projectiles. Seeded from the clock so any party holding the
        // same time value reproduces the identical fan.
        let base_seed = seed_from_time(now);
        let deviation = rng.symmetric_f32(
            compute_seed(base_seed, shooter.0, 0),
            pattern.angle_deviation,
        );
        let damage = rng.range_u32(
            compute_seed(base_seed, shooter.0, 1),
            self.projectile.min_damage,
            self.projectile.max_damage,
        );

        let count = pattern.projectile_count.max(1);
        let angle_difference = pattern.spread_angle / count as f32;
        let start_angle = aim_angle + pattern.main_angle + 0.5 * pattern.spread_angle;

        let projectiles = (0..count)
            .map(|i| ProjectileShot {
                angle: start_angle - (i as f32 + 0.5) * angle_difference + deviation,
                damage,
            })
            .collect();

        self.volleys_left = self.volleys_left.saturating_sub(1);
        if self.volleys_left == 0 {
            // Burst finished: rest for the mode cooldown, then start the
            // next mode in the sequence.
            self.next_allowed_time = now + mode.cooldown;
            self.mode_index = (self.mode_index + 1) % self.modes.len();
            self.volleys_left = self.modes[self.mode_index].repeat;
        } else {
            self.next_allowed_time = now + self.shoot_interval(&pattern);
        }

        Some(Volley {
            shooter,
            origin,
            time: now,
            spec: self.projectile,
            projectiles,
        })
    }

    /// Rewinds the burst sequence to its first mode, ready to fire
    /// immediately.
    pub fn reset(&mut self) {
        self.mode_index = 0;
        self.volleys_left = self.modes[0].repeat;
        self.next_allowed_time = 0.0;
    }

    /// Abandons the in-progress burst; the current mode starts fresh the
    /// next time firing resumes.
    pub fn stop(&mut self) {
        self.volleys_left = self.modes[self.mode_index].repeat;
    }

    /// Seconds between volleys within a burst.
    ///
    /// A non-positive effective attack speed is a content error: it is
    /// logged and the weapon falls back to a fixed interval instead of
    /// dividing by zero.
    fn shoot_interval(&self, pattern: &ShootPattern) -> f64 {
        let attack_speed = self.base_attack_speed * pattern.attack_speed_bonus;
        if attack_speed > 0.0 {
            1.0 / attack_speed as f64
        } else {
            tracing::error!(
                attack_speed,
                "attack speed is not positive, falling back to {FALLBACK_SHOOT_INTERVAL}s interval"
            );
            FALLBACK_SHOOT_INTERVAL
        }
    }
}
