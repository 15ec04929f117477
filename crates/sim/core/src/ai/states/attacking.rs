use state_machine::State;

use super::{ROLL_STRAFE_ANGLE, ROLL_STRAFE_RADIUS, point_in_disc};
use crate::actor::Enemy;
use crate::types::Vec2;

/// Engagement: fire at the target while strafing around an anchor point.
///
/// The anchor is the position the enemy held when it entered the state;
/// periodic strafe moves pick random points around it so the enemy keeps
/// shifting without drifting out of range. Firing itself is gated inside
/// the weapon, so calling shoot every tick is free.
pub struct Attacking {
    anchor: Vec2,
    next_move_time: f64,
}

impl Attacking {
    pub fn new() -> Self {
        Self {
            anchor: Vec2::ZERO,
            next_move_time: 0.0,
        }
    }
}

impl Default for Attacking {
    fn default() -> Self {
        Self::new()
    }
}

impl State<Enemy> for Attacking {
    fn name(&self) -> &'static str {
        "ATTACKING"
    }

    fn on_enter(&mut self, ctx: &mut Enemy) {
        ctx.reset_movement();
        self.anchor = ctx.position();
        self.next_move_time = ctx.now() + ctx.config().attack_replan_interval;
    }

    fn tick(&mut self, ctx: &mut Enemy) {
        ctx.shoot();

        let now = ctx.now();
        if now < self.next_move_time {
            return;
        }
        self.next_move_time = now + ctx.config().attack_replan_interval;

        let offset = point_in_disc(
            ctx.roll_unit(ROLL_STRAFE_ANGLE),
            ctx.roll_unit(ROLL_STRAFE_RADIUS),
        ) * ctx.config().attack_move_distance;
        let destination = self.anchor + offset;
        ctx.navigate(destination, 0.1);
    }

    fn on_exit(&mut self, ctx: &mut Enemy) {
        // Leaving combat abandons the in-progress burst.
        ctx.stop_shooting();
    }
}
