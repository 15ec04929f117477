//! Shared fixtures for unit tests.

use crate::actor::Enemy;
use crate::combat::{Health, ProjectileSpec, RangedWeapon, ShootMode, ShootPattern};
use crate::config::EnemyConfig;
use crate::env::{MovementDriver, SharedClock};
use crate::types::{EntityId, Vec2};

/// Minimal movement driver: accepts commands, never actually moves.
pub(crate) struct StubDriver {
    pub position: Vec2,
    pub moving: bool,
}

impl StubDriver {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            moving: false,
        }
    }
}

impl MovementDriver for StubDriver {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn navigate(&mut self, _destination: Vec2, _stopping_distance: f32) {
        self.moving = true;
    }

    fn reset(&mut self) {
        self.moving = false;
    }

    fn set_speed(&mut self, _speed: f32) {}

    fn warp(&mut self, point: Vec2) {
        self.position = point;
        self.moving = false;
    }

    fn is_moving(&self) -> bool {
        self.moving
    }
}

/// Single-mode weapon: 1 shot per volley, 1 volley per second, 10.0 reach
/// (so the default engagement distance is 8.0).
pub(crate) fn test_weapon() -> RangedWeapon {
    RangedWeapon::new(
        1.0,
        ProjectileSpec {
            min_damage: 1,
            max_damage: 3,
            move_range: 10.0,
            move_speed: 10.0,
            radius: 0.1,
        },
        &[ShootMode {
            pattern: ShootPattern {
                main_angle: 0.0,
                spread_angle: 0.0,
                projectile_count: 1,
                angle_deviation: 0.0,
                attack_speed_bonus: 1.0,
            },
            repeat: 1,
            cooldown: 1.0,
        }],
    )
}

/// Enemy with 50 max HP at the origin, driven by a [`StubDriver`].
pub(crate) fn test_enemy(config: EnemyConfig, clock: SharedClock) -> Enemy {
    Enemy::new(
        EntityId(100),
        config,
        Health::new(50),
        test_weapon(),
        Box::new(StubDriver::at(Vec2::ZERO)),
        clock,
    )
}
