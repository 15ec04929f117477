//! The enemy aggregate.

use std::rc::Rc;

use crate::actor::target::{SharedTarget, TargetHandle};
use crate::combat::{DamageTracker, Health, RangedWeapon, Volley};
use crate::config::EnemyConfig;
use crate::env::rng::{PcgRng, RngOracle, compute_seed, seed_from_time};
use crate::env::{MovementDriver, SharedClock};
use crate::types::{EntityId, Vec2};

/// Outbound event produced by enemy logic, drained by the server loop.
///
/// The AI core never applies projectile damage or resolves drop tables
/// itself; it announces what happened and the runtime reacts.
#[derive(Clone, Debug, PartialEq)]
pub enum EnemyEvent {
    /// A volley was fired; the projectile layer takes it from here.
    Volley(Volley),
    /// The enemy died. `credited` lists the attackers who earned soulbound
    /// loot, in ascending id order; empty when drops are unattributed.
    Died { credited: Vec<EntityId> },
}

/// One enemy actor: its identity, tuning, health, weapon, locomotion and
/// targeting state.
///
/// This is the context type the behavior states and transition predicates
/// operate on. Each enemy owns its collaborators exclusively; the only
/// shared pieces are the clock (read-only here) and the weak target handle.
pub struct Enemy {
    id: EntityId,
    home: Vec2,
    config: EnemyConfig,
    health: Health,
    weapon: RangedWeapon,
    movement: Box<dyn MovementDriver>,
    clock: SharedClock,
    rng: PcgRng,
    target: Option<TargetHandle>,
    damage: DamageTracker,
    events: Vec<EnemyEvent>,
}

impl Enemy {
    /// Builds an enemy at its spawn point; the current position of
    /// `movement` becomes the home position wander destinations center on.
    pub fn new(
        id: EntityId,
        config: EnemyConfig,
        health: Health,
        weapon: RangedWeapon,
        movement: Box<dyn MovementDriver>,
        clock: SharedClock,
    ) -> Self {
        let home = movement.position();
        Self {
            id,
            home,
            config,
            health,
            weapon,
            movement,
            clock,
            rng: PcgRng,
            target: None,
            damage: DamageTracker::new(),
            events: Vec::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn config(&self) -> &EnemyConfig {
        &self.config
    }

    pub fn health(&self) -> Health {
        self.health
    }

    pub fn home(&self) -> Vec2 {
        self.home
    }

    pub fn position(&self) -> Vec2 {
        self.movement.position()
    }

    /// Current simulation time.
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    // ===== movement commands (delegated to the external driver) =====

    pub fn navigate(&mut self, destination: Vec2, stopping_distance: f32) {
        self.movement.navigate(destination, stopping_distance);
    }

    pub fn reset_movement(&mut self) {
        self.movement.reset();
    }

    pub fn set_move_speed(&mut self, speed: f32) {
        self.movement.set_speed(speed);
    }

    pub fn is_moving(&self) -> bool {
        self.movement.is_moving()
    }

    /// Integrates locomotion; called once per tick by the runtime.
    pub fn advance_movement(&mut self, dt: f64) {
        self.movement.advance(dt);
    }

    // ===== targeting =====

    /// Upgraded view of the current target, if it still exists.
    pub fn target(&self) -> Option<SharedTarget> {
        self.target.as_ref()?.upgrade()
    }

    pub fn clear_target(&mut self) {
        self.target = None;
    }

    /// Distance to the target's nearest boundary point.
    pub fn distance_to_target(&self) -> Option<f32> {
        let target = self.target()?;
        let distance = target.borrow().boundary_distance_to(self.position());
        Some(distance)
    }

    /// Engagement distance: a fraction of projectile reach, so a fired
    /// projectile is guaranteed to cover the gap.
    pub fn attack_range(&self) -> f32 {
        self.weapon.attack_range(self.config.attack_to_move_range_ratio)
    }

    /// Target-acquisition event raised when `candidate` is noticed.
    ///
    /// A candidate only replaces an existing live target when it is closer
    /// than [`EnemyConfig::AGGRO_SWITCH_RATIO`] times the current target's
    /// distance. The damping keeps the enemy from oscillating between two
    /// similarly-distant threats.
    pub fn on_aggro(&mut self, candidate: &SharedTarget) {
        if self.died() {
            return;
        }
        let (candidate_id, candidate_distance) = {
            let view = candidate.borrow();
            if view.id == self.id || view.is_dead() {
                return;
            }
            (view.id, view.boundary_distance_to(self.position()))
        };

        if let Some(current) = self.target() {
            let view = current.borrow();
            if !view.is_dead() {
                let current_distance = view.boundary_distance_to(self.position());
                if candidate_distance >= current_distance * EnemyConfig::AGGRO_SWITCH_RATIO {
                    return;
                }
                tracing::debug!(
                    enemy = %self.id,
                    from = %view.id,
                    to = %candidate_id,
                    "switching target to a significantly closer threat"
                );
            }
        }

        self.target = Some(Rc::downgrade(candidate));
    }

    // ===== transition predicates =====

    pub fn died(&self) -> bool {
        self.health.is_dead()
    }

    pub fn target_disappeared(&self) -> bool {
        match &self.target {
            None => true,
            Some(handle) => handle.upgrade().is_none(),
        }
    }

    pub fn target_died(&self) -> bool {
        self.target().is_some_and(|target| target.borrow().is_dead())
    }

    pub fn target_too_far_to_follow(&self) -> bool {
        self.distance_to_target()
            .is_some_and(|distance| distance > self.config.follow_distance)
    }

    pub fn target_too_far_to_attack(&self) -> bool {
        self.distance_to_target()
            .is_some_and(|distance| distance > self.attack_range())
    }

    pub fn aggro(&self) -> bool {
        self.target().is_some_and(|target| !target.borrow().is_dead())
    }

    pub fn low_health(&self) -> bool {
        self.health.fraction() <= self.config.low_health_fraction
    }

    // ===== combat =====

    /// Records and applies incoming damage for later loot attribution.
    pub fn apply_damage(&mut self, attacker: EntityId, amount: u32) {
        self.damage.record(attacker, amount);
        self.health.apply_damage(amount);
        tracing::debug!(
            enemy = %self.id,
            %attacker,
            amount,
            remaining = self.health.current,
            "damage applied"
        );
    }

    /// Fires at the current target if the weapon's time-gate has passed.
    pub fn shoot(&mut self) {
        let Some(target) = self.target() else {
            return;
        };
        let origin = self.position();
        let aim_angle = (target.borrow().position - origin).angle();
        let now = self.now();
        if let Some(volley) = self
            .weapon
            .try_fire(self.id, origin, aim_angle, now, &self.rng)
        {
            tracing::trace!(
                enemy = %self.id,
                projectiles = volley.projectiles.len(),
                "volley fired"
            );
            self.events.push(EnemyEvent::Volley(volley));
        }
    }

    /// Abandons any in-progress burst.
    pub fn stop_shooting(&mut self) {
        self.weapon.stop();
    }

    /// Rewinds the weapon's burst sequence to the beginning.
    pub fn reset_weapon(&mut self) {
        self.weapon.reset();
    }

    /// Death handler: resolves loot credit and announces the death.
    ///
    /// Called once from the Dead state's enter hook; the state machine's
    /// no-re-enter rule guarantees exactly one invocation per life.
    pub fn on_death(&mut self) {
        let credited = if self.config.soulbound_drops {
            self.damage
                .kill_credit(self.health.max, self.config.drop_threshold)
        } else {
            Vec::new()
        };
        tracing::info!(enemy = %self.id, credited = credited.len(), "enemy died");
        self.events.push(EnemyEvent::Died { credited });
        self.damage.reset();
    }

    /// Takes all events produced since the last drain.
    pub fn drain_events(&mut self) -> Vec<EnemyEvent> {
        std::mem::take(&mut self.events)
    }

    // ===== deterministic rolls for behavior states =====

    /// Seeded roll in `[0, 1)` for the current clock value. Distinct
    /// `context` values give independent draws within the same tick.
    pub fn roll_unit(&self, context: u32) -> f32 {
        self.rng
            .unit_f32(compute_seed(seed_from_time(self.now()), self.id.0, context))
    }

    /// Seeded roll in `[-magnitude, magnitude)` for the current clock value.
    pub fn roll_symmetric(&self, context: u32, magnitude: f32) -> f32 {
        self.rng.symmetric_f32(
            compute_seed(seed_from_time(self.now()), self.id.0, context),
            magnitude,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::registry::ActorRegistry;
    use crate::actor::target::TargetState;
    use crate::test_util::test_enemy;

    fn enemy_at_origin() -> Enemy {
        test_enemy(EnemyConfig::default(), SharedClock::new(0.0))
    }

    fn point_target(registry: &mut ActorRegistry, id: u32, x: f32) -> SharedTarget {
        registry.insert(TargetState::new(
            EntityId(id),
            Vec2::new(x, 0.0),
            0.0,
            Health::new(100),
        ))
    }

    #[test]
    fn aggro_damping_keeps_similarly_distant_target() {
        let mut registry = ActorRegistry::new();
        let current = point_target(&mut registry, 1, 10.0);
        let near_miss = point_target(&mut registry, 2, 8.5);
        let clear_winner = point_target(&mut registry, 3, 7.9);

        let mut enemy = enemy_at_origin();
        enemy.on_aggro(&current);
        assert_eq!(enemy.target().unwrap().borrow().id, EntityId(1));

        // 8.5 is not better than 80% of 10.0, so no switch.
        enemy.on_aggro(&near_miss);
        assert_eq!(enemy.target().unwrap().borrow().id, EntityId(1));

        // 7.9 beats the 8.0 cutoff.
        enemy.on_aggro(&clear_winner);
        assert_eq!(enemy.target().unwrap().borrow().id, EntityId(3));
    }

    #[test]
    fn dead_candidate_is_ignored() {
        let mut registry = ActorRegistry::new();
        let corpse = point_target(&mut registry, 1, 2.0);
        corpse.borrow_mut().health.apply_damage(1000);

        let mut enemy = enemy_at_origin();
        enemy.on_aggro(&corpse);
        assert!(enemy.target().is_none());
    }

    #[test]
    fn dead_target_is_replaced_without_damping() {
        let mut registry = ActorRegistry::new();
        let first = point_target(&mut registry, 1, 3.0);
        let second = point_target(&mut registry, 2, 9.0);

        let mut enemy = enemy_at_origin();
        enemy.on_aggro(&first);
        first.borrow_mut().health.apply_damage(1000);

        // The damping only protects live targets.
        enemy.on_aggro(&second);
        assert_eq!(enemy.target().unwrap().borrow().id, EntityId(2));
    }

    #[test]
    fn despawn_reads_as_disappeared() {
        let mut registry = ActorRegistry::new();
        let target = point_target(&mut registry, 1, 2.0);

        let mut enemy = enemy_at_origin();
        enemy.on_aggro(&target);
        assert!(!enemy.target_disappeared());

        drop(target);
        drop(registry.remove(EntityId(1)));
        assert!(enemy.target_disappeared());
        assert!(!enemy.target_died());
        assert!(!enemy.aggro());
    }

    #[test]
    fn range_predicates_follow_boundary_distance() {
        let mut registry = ActorRegistry::new();
        // Attack range is 10.0 * 0.8 = 8.0, follow range 6.5. At 7.0 the
        // target is beyond follow range but within attack range.
        let target = point_target(&mut registry, 1, 7.0);

        let mut enemy = enemy_at_origin();
        enemy.on_aggro(&target);

        assert!(enemy.target_too_far_to_follow());
        assert!(!enemy.target_too_far_to_attack());

        target.borrow_mut().position = Vec2::new(8.5, 0.0);
        assert!(enemy.target_too_far_to_attack());
    }

    #[test]
    fn damage_accumulates_into_kill_credit() {
        let mut enemy = enemy_at_origin();
        // 50 max HP, 20% threshold: credit needs more than 10 damage.
        enemy.apply_damage(EntityId(1), 10);
        enemy.apply_damage(EntityId(2), 40);
        assert!(enemy.died());

        enemy.on_death();
        let events = enemy.drain_events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            EnemyEvent::Died { credited } => assert_eq!(credited, &vec![EntityId(2)]),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn shoot_without_target_is_noop() {
        let mut enemy = enemy_at_origin();
        enemy.shoot();
        assert!(enemy.drain_events().is_empty());
    }

    #[test]
    fn shoot_at_target_emits_volley() {
        let mut registry = ActorRegistry::new();
        let target = point_target(&mut registry, 1, 4.0);

        let mut enemy = enemy_at_origin();
        enemy.on_aggro(&target);
        enemy.shoot();

        let events = enemy.drain_events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            EnemyEvent::Volley(volley) => {
                assert_eq!(volley.shooter, EntityId(100));
                assert_eq!(volley.projectiles.len(), 1);
                // Aim straight along +x.
                assert!(volley.projectiles[0].angle.abs() < 1e-6);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
}
