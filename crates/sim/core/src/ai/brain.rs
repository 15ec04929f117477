//! Transition-table wiring for one enemy.

use state_machine::StateMachine;

use crate::actor::Enemy;
use crate::ai::EnemyStateId;
use crate::ai::conditions;
use crate::ai::states;

/// An enemy together with the state machine that drives it.
///
/// Construction registers the canonical transition tables; [`start`] drops
/// the enemy into Wandering and [`tick`] advances it by one simulation
/// step. Transition priority lives entirely in registration order here.
///
/// [`start`]: EnemyBrain::start
/// [`tick`]: EnemyBrain::tick
pub struct EnemyBrain {
    machine: StateMachine<EnemyStateId, Enemy>,
    enemy: Enemy,
}

impl EnemyBrain {
    pub fn new(enemy: Enemy) -> Self {
        use EnemyStateId::*;

        let mut machine = StateMachine::new();
        machine.add_state(Idle, Box::new(states::Idle));
        machine.add_state(Wandering, Box::new(states::Wandering::new()));
        machine.add_state(Chasing, Box::new(states::Chasing::new()));
        machine.add_state(Attacking, Box::new(states::Attacking::new()));
        machine.add_state(Fleeing, Box::new(states::Fleeing::new()));
        machine.add_state(Dead, Box::new(states::Dead));

        // Global policy, highest priority first. Death preempts everything;
        // losing the target in any way falls back to Wandering; low health
        // breaks off into Fleeing.
        machine.add_any_transition(Dead, conditions::died());
        machine.add_any_transition(Wandering, conditions::target_died());
        machine.add_any_transition(Wandering, conditions::target_disappeared());
        machine.add_any_transition(Wandering, conditions::target_too_far_to_follow());
        machine.add_any_transition(Fleeing, conditions::low_health());

        // Scoped edges. The too-far-to-attack edge is registered before the
        // aggro edge everywhere, so a live target outside engagement range
        // always wins pursuit over opening fire; for Chasing that edge is a
        // self-loop, which keeps the chase going and masks the aggro edge
        // until the gap is closed.
        machine.add_transition(Wandering, Chasing, conditions::target_too_far_to_attack());
        machine.add_transition(Wandering, Attacking, conditions::aggro());
        machine.add_transition(Chasing, Chasing, conditions::target_too_far_to_attack());
        machine.add_transition(Chasing, Attacking, conditions::aggro());
        machine.add_transition(Attacking, Chasing, conditions::target_too_far_to_attack());

        Self { machine, enemy }
    }

    /// Activates the brain; spawned enemies begin in Wandering.
    pub fn start(&mut self) {
        self.machine
            .set_state(EnemyStateId::Wandering, &mut self.enemy);
    }

    /// Advances the brain by one simulation tick.
    pub fn tick(&mut self) {
        let before = self.machine.current();
        self.machine.tick(&mut self.enemy);
        let after = self.machine.current();
        if before != after
            && let (Some(from), Some(to)) = (before, after)
        {
            tracing::debug!(enemy = %self.enemy.id(), %from, %to, "state change");
        }
    }

    pub fn state(&self) -> Option<EnemyStateId> {
        self.machine.current()
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn enemy_mut(&mut self) -> &mut Enemy {
        &mut self.enemy
    }
}
