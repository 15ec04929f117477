use state_machine::State;

use crate::actor::Enemy;

/// Parked state: no target, no movement, no behavior.
///
/// Enemies do not normally rest here (spawning starts them in Wandering);
/// it exists as the safe fallback when behavior is externally suspended.
pub struct Idle;

impl State<Enemy> for Idle {
    fn name(&self) -> &'static str {
        "IDLE"
    }

    fn on_enter(&mut self, ctx: &mut Enemy) {
        ctx.clear_target();
        ctx.reset_movement();
    }

    fn tick(&mut self, _ctx: &mut Enemy) {}
}
