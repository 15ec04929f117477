use state_machine::State;

use crate::actor::Enemy;

/// Terminal state.
///
/// The death handler runs in the enter hook; the machine's no-re-enter rule
/// guarantees it fires exactly once per life. Nothing happens afterwards,
/// and no transitions lead out.
pub struct Dead;

impl State<Enemy> for Dead {
    fn name(&self) -> &'static str {
        "DEAD"
    }

    fn on_enter(&mut self, ctx: &mut Enemy) {
        ctx.reset_movement();
        ctx.stop_shooting();
        ctx.clear_target();
        ctx.on_death();
    }

    fn tick(&mut self, _ctx: &mut Enemy) {}
}
