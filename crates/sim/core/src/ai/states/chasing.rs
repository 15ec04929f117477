use std::f32::consts::FRAC_PI_4;

use state_machine::State;

use super::ROLL_CHASE_JITTER;
use crate::actor::Enemy;

/// Pursuit: close the gap to the target until it is inside the engagement
/// distance.
///
/// Each re-plan hops a bounded step toward the target with up to 45
/// degrees of angular jitter, so pursuit lines curve instead of running
/// perfectly straight while still always closing the gap.
pub struct Chasing {
    next_replan_time: f64,
}

impl Chasing {
    pub fn new() -> Self {
        Self {
            next_replan_time: 0.0,
        }
    }
}

impl Default for Chasing {
    fn default() -> Self {
        Self::new()
    }
}

impl State<Enemy> for Chasing {
    fn name(&self) -> &'static str {
        "CHASING"
    }

    fn on_enter(&mut self, ctx: &mut Enemy) {
        ctx.reset_movement();
        ctx.set_move_speed(ctx.config().chase_speed);
        // Re-plan on the first tick.
        self.next_replan_time = 0.0;
    }

    fn tick(&mut self, ctx: &mut Enemy) {
        let now = ctx.now();
        if now < self.next_replan_time {
            return;
        }
        let Some(target) = ctx.target() else {
            return;
        };
        self.next_replan_time = now + ctx.config().chase_replan_interval;

        let position = ctx.position();
        let toward = (target.borrow().position - position).normalized();
        let jitter = ctx.roll_symmetric(ROLL_CHASE_JITTER, FRAC_PI_4);
        let destination = position + toward.rotated(jitter) * ctx.config().chase_move_distance;
        ctx.navigate(destination, 0.1);
    }
}
