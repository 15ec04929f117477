//! Fixed-timestep simulation world.

use std::collections::BTreeMap;

use sim_core::actor::SharedTarget;
use sim_core::combat::Health;
use sim_core::{
    ActorRegistry, Enemy, EnemyBrain, EnemyEvent, EnemyStateId, EntityId, SharedClock, TargetState,
    Vec2,
};

use crate::content::EnemyTemplate;
use crate::movement::KinematicDriver;

/// The authoritative simulation: shared clock, actor registry, and enemy
/// brains, advanced one fixed timestep at a time.
///
/// Players (and anything else enemies may target) live in the registry;
/// enemies live here as brains and are not themselves targetable. Brains
/// are keyed and ticked in ascending id order, so two worlds built from the
/// same inputs stay step-for-step identical.
pub struct SimWorld {
    clock: SharedClock,
    timestep: f64,
    registry: ActorRegistry,
    brains: BTreeMap<EntityId, EnemyBrain>,
}

impl SimWorld {
    pub fn new(timestep: f64) -> Self {
        Self {
            clock: SharedClock::new(0.0),
            timestep,
            registry: ActorRegistry::new(),
            brains: BTreeMap::new(),
        }
    }

    pub fn time(&self) -> f64 {
        self.clock.now()
    }

    pub fn registry(&self) -> &ActorRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ActorRegistry {
        &mut self.registry
    }

    /// Registers a targetable actor (a player, in practice).
    pub fn spawn_player(
        &mut self,
        id: EntityId,
        position: Vec2,
        radius: f32,
        max_health: u32,
    ) -> SharedTarget {
        tracing::info!(player = %id, ?position, "player spawned");
        self.registry
            .insert(TargetState::new(id, position, radius, Health::new(max_health)))
    }

    /// Spawns an enemy from a template at `position` and starts its brain.
    pub fn spawn_enemy(&mut self, id: EntityId, position: Vec2, template: &EnemyTemplate) {
        let driver = KinematicDriver::new(position, template.config.wander_speed);
        let enemy = Enemy::new(
            id,
            template.config.clone(),
            Health::new(template.max_health),
            template.weapon.build(),
            Box::new(driver),
            self.clock.clone(),
        );
        let mut brain = EnemyBrain::new(enemy);
        brain.start();
        tracing::info!(enemy = %id, template = %template.name, ?position, "enemy spawned");
        self.brains.insert(id, brain);
    }

    pub fn enemy_state(&self, id: EntityId) -> Option<EnemyStateId> {
        self.brains.get(&id).and_then(EnemyBrain::state)
    }

    pub fn enemy(&self, id: EntityId) -> Option<&Enemy> {
        self.brains.get(&id).map(EnemyBrain::enemy)
    }

    pub fn contains_enemy(&self, id: EntityId) -> bool {
        self.brains.contains_key(&id)
    }

    /// Routes damage from the external combat layer to an enemy.
    pub fn damage_enemy(&mut self, id: EntityId, attacker: EntityId, amount: u32) {
        if let Some(brain) = self.brains.get_mut(&id) {
            brain.enemy_mut().apply_damage(attacker, amount);
        }
    }

    /// Advances the simulation by one timestep.
    ///
    /// Order within a step: clock, aggro scan, brain ticks, movement
    /// integration, event drain. Dead enemies are despawned after their
    /// death event is drained, so each death is reported exactly once.
    pub fn step(&mut self) -> Vec<(EntityId, EnemyEvent)> {
        self.clock.advance(self.timestep);

        self.raise_aggro();

        for brain in self.brains.values_mut() {
            brain.tick();
            brain.enemy_mut().advance_movement(self.timestep);
        }

        let mut events = Vec::new();
        let mut despawned = Vec::new();
        for (&id, brain) in self.brains.iter_mut() {
            for event in brain.enemy_mut().drain_events() {
                match &event {
                    EnemyEvent::Volley(volley) => {
                        tracing::debug!(
                            enemy = %id,
                            projectiles = volley.projectiles.len(),
                            "volley handed to projectile layer"
                        );
                    }
                    EnemyEvent::Died { credited } => {
                        Self::resolve_loot(id, credited);
                        despawned.push(id);
                    }
                }
                events.push((id, event));
            }
        }

        for id in despawned {
            self.brains.remove(&id);
            tracing::info!(enemy = %id, "enemy despawned");
        }

        events
    }

    /// Synchronous detection pass: every live registry actor inside an
    /// enemy's aggro radius is offered as a target candidate. Acquisition
    /// damping lives in the enemy itself.
    fn raise_aggro(&mut self) {
        for brain in self.brains.values_mut() {
            let enemy = brain.enemy_mut();
            let position = enemy.position();
            let radius = enemy.config().aggro_radius;
            // Registry iteration is id-ordered, keeping candidate order
            // deterministic.
            let candidates: Vec<SharedTarget> = self
                .registry
                .iter()
                .filter(|(_, actor)| {
                    let view = actor.borrow();
                    !view.is_dead() && view.boundary_distance_to(position) <= radius
                })
                .map(|(_, actor)| actor.clone())
                .collect();
            for candidate in &candidates {
                enemy.on_aggro(candidate);
            }
        }
    }

    /// Drop-table resolution stays external; the world only attributes the
    /// kill.
    fn resolve_loot(enemy: EntityId, credited: &[EntityId]) {
        if credited.is_empty() {
            tracing::info!(%enemy, "drop is unattributed");
        } else {
            for player in credited {
                tracing::info!(%enemy, %player, "soulbound drop credited");
            }
        }
    }
}
