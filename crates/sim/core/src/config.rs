//! Enemy tuning parameters.

/// Per-enemy behavior tuning, normally loaded from a content template.
///
/// Distances are in world units, intervals in seconds of simulation time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyConfig {
    /// Radius around the home position used for wander destinations.
    pub roam_distance: f32,
    /// Max distance to the target's boundary before pursuit is abandoned.
    pub follow_distance: f32,
    /// Radius around which enemies notice candidates and raise aggro.
    pub aggro_radius: f32,
    /// Chance per wander check to actually pick a new destination.
    pub move_probability: f32,
    /// Fraction of projectile reach used as the engagement distance, so a
    /// fired projectile is guaranteed to cover the gap.
    pub attack_to_move_range_ratio: f32,

    pub wander_speed: f32,
    pub chase_speed: f32,
    pub flee_speed: f32,

    /// How far a single chase re-plan moves the enemy toward the target.
    pub chase_move_distance: f32,
    /// Strafe radius around the anchor point while attacking.
    pub attack_move_distance: f32,
    /// How far a single flee re-plan moves the enemy away from the target.
    pub flee_move_distance: f32,

    pub wander_interval: f64,
    pub chase_replan_interval: f64,
    pub attack_replan_interval: f64,
    pub flee_replan_interval: f64,

    /// Health fraction at or below which the enemy breaks off and flees.
    pub low_health_fraction: f32,
    /// Damage fraction of max health an attacker must exceed to earn
    /// soulbound loot credit.
    pub drop_threshold: f32,
    /// Whether drops are attributed to contributing attackers at all.
    pub soulbound_drops: bool,
}

impl EnemyConfig {
    /// A new aggro candidate must be closer than this fraction of the
    /// current target's distance to steal the target slot.
    pub const AGGRO_SWITCH_RATIO: f32 = 0.8;

    pub const DEFAULT_ROAM_DISTANCE: f32 = 2.0;
    pub const DEFAULT_FOLLOW_DISTANCE: f32 = 6.5;
    pub const DEFAULT_AGGRO_RADIUS: f32 = 5.0;
    pub const DEFAULT_MOVE_PROBABILITY: f32 = 0.1;
    pub const DEFAULT_ATTACK_TO_MOVE_RANGE_RATIO: f32 = 0.8;
    pub const DEFAULT_LOW_HEALTH_FRACTION: f32 = 0.2;
    pub const DEFAULT_DROP_THRESHOLD: f32 = 0.2;

    pub fn new() -> Self {
        Self {
            roam_distance: Self::DEFAULT_ROAM_DISTANCE,
            follow_distance: Self::DEFAULT_FOLLOW_DISTANCE,
            aggro_radius: Self::DEFAULT_AGGRO_RADIUS,
            move_probability: Self::DEFAULT_MOVE_PROBABILITY,
            attack_to_move_range_ratio: Self::DEFAULT_ATTACK_TO_MOVE_RANGE_RATIO,
            wander_speed: 1.5,
            chase_speed: 3.0,
            flee_speed: 3.5,
            chase_move_distance: 2.0,
            attack_move_distance: 1.5,
            flee_move_distance: 3.0,
            wander_interval: 1.0,
            chase_replan_interval: 1.0,
            attack_replan_interval: 2.0,
            flee_replan_interval: 1.0,
            low_health_fraction: Self::DEFAULT_LOW_HEALTH_FRACTION,
            drop_threshold: Self::DEFAULT_DROP_THRESHOLD,
            soulbound_drops: true,
        }
    }
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self::new()
    }
}
