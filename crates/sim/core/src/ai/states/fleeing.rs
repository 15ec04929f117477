use std::f32::consts::FRAC_PI_2;

use state_machine::State;

use super::ROLL_FLEE_JITTER;
use crate::actor::Enemy;

/// Retreat: move away from the target in jittered bounded steps.
pub struct Fleeing {
    next_replan_time: f64,
}

impl Fleeing {
    pub fn new() -> Self {
        Self {
            next_replan_time: 0.0,
        }
    }
}

impl Default for Fleeing {
    fn default() -> Self {
        Self::new()
    }
}

impl State<Enemy> for Fleeing {
    fn name(&self) -> &'static str {
        "FLEEING"
    }

    fn on_enter(&mut self, ctx: &mut Enemy) {
        ctx.reset_movement();
        ctx.set_move_speed(ctx.config().flee_speed);
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
        self.next_replan_time = now + ctx.config().flee_replan_interval;

        let position = ctx.position();
        let away = (position - target.borrow().position).normalized();
        let jitter = ctx.roll_symmetric(ROLL_FLEE_JITTER, FRAC_PI_2);
        let destination = position + away.rotated(jitter) * ctx.config().flee_move_distance;
        ctx.navigate(destination, 0.1);
    }
}
