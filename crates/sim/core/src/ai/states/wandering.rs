use state_machine::State;

use super::{ROLL_WANDER_ANGLE, ROLL_WANDER_CHANCE, ROLL_WANDER_RADIUS, point_in_disc};
use crate::actor::Enemy;

/// Default peacetime behavior: drift around the home position.
///
/// Entering also rewinds the weapon's burst sequence and drops the target,
/// so the next engagement starts from a clean slate.
pub struct Wandering {
    next_move_time: f64,
}

impl Wandering {
    pub fn new() -> Self {
        Self { next_move_time: 0.0 }
    }
}

impl Default for Wandering {
    fn default() -> Self {
        Self::new()
    }
}

impl State<Enemy> for Wandering {
    fn name(&self) -> &'static str {
        "WANDERING"
    }

    fn on_enter(&mut self, ctx: &mut Enemy) {
        ctx.clear_target();
        ctx.reset_weapon();
        ctx.reset_movement();
        ctx.set_move_speed(ctx.config().wander_speed);
        let home = ctx.home();
        ctx.navigate(home, 0.1);
        self.next_move_time = ctx.now() + ctx.config().wander_interval;
    }

    fn tick(&mut self, ctx: &mut Enemy) {
        let now = ctx.now();
        if now < self.next_move_time {
            return;
        }
        self.next_move_time = now + ctx.config().wander_interval;

        if ctx.is_moving() {
            return;
        }
        // Most checks pass without moving; the probability keeps the drift
        // lazy instead of constant.
        if ctx.roll_unit(ROLL_WANDER_CHANCE) >= ctx.config().move_probability {
            return;
        }

        let offset = point_in_disc(
            ctx.roll_unit(ROLL_WANDER_ANGLE),
            ctx.roll_unit(ROLL_WANDER_RADIUS),
        ) * ctx.config().roam_distance;
        let destination = ctx.home() + offset;
        ctx.navigate(destination, 0.1);
    }
}
