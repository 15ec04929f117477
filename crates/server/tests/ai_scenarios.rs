//! End-to-end behavior scenarios driven through the world loop.

use sim_core::combat::{ProjectileSpec, ShootMode, ShootPattern};
use sim_core::{EnemyConfig, EnemyEvent, EnemyStateId, EntityId, Vec2};
use sim_server::{EnemyTemplate, SimWorld, WeaponTemplate};

const TIMESTEP: f64 = 0.05;

const ENEMY: EntityId = EntityId(1);
const PLAYER: EntityId = EntityId(1000);

fn archer_template() -> EnemyTemplate {
    EnemyTemplate {
        name: "archer".to_string(),
        max_health: 60,
        config: EnemyConfig::default(),
        weapon: WeaponTemplate {
            base_attack_speed: 1.0,
            projectile: ProjectileSpec {
                min_damage: 2,
                max_damage: 5,
                // Engagement range 10.0 * 0.8 = 8.0.
                move_range: 10.0,
                move_speed: 12.0,
                radius: 0.1,
            },
            modes: vec![ShootMode {
                pattern: ShootPattern {
                    main_angle: 0.0,
                    spread_angle: 0.4,
                    projectile_count: 2,
                    angle_deviation: 0.1,
                    attack_speed_bonus: 1.0,
                },
                repeat: 2,
                cooldown: 2.0,
            }],
        },
    }
}

fn engaged_world() -> (SimWorld, sim_core::actor::SharedTarget, Vec<(EntityId, EnemyEvent)>) {
    let mut world = SimWorld::new(TIMESTEP);
    world.spawn_enemy(ENEMY, Vec2::ZERO, &archer_template());
    // Inside the 5.0 aggro radius and the 8.0 engagement range.
    let player = world.spawn_player(PLAYER, Vec2::new(4.0, 0.0), 0.0, 100);
    let events = world.step();
    (world, player, events)
}

#[test]
fn player_in_aggro_range_is_engaged_within_one_step() {
    let (world, _player, events) = engaged_world();

    assert_eq!(world.enemy_state(ENEMY), Some(EnemyStateId::Attacking));
    assert!(
        events
            .iter()
            .any(|(id, event)| *id == ENEMY && matches!(event, EnemyEvent::Volley(_))),
        "the opening volley fires in the same step as the engagement"
    );
}

#[test]
fn player_death_sends_enemy_back_to_wandering() {
    let (mut world, player, _) = engaged_world();

    player.borrow_mut().health.apply_damage(1000);
    world.step();

    assert_eq!(world.enemy_state(ENEMY), Some(EnemyStateId::Wandering));
    assert!(world.enemy(ENEMY).unwrap().target().is_none());
}

#[test]
fn player_despawn_sends_enemy_back_to_wandering() {
    let (mut world, player, _) = engaged_world();

    drop(player);
    drop(world.registry_mut().remove(PLAYER));
    world.step();

    assert_eq!(world.enemy_state(ENEMY), Some(EnemyStateId::Wandering));
}

#[test]
fn low_health_breaks_off_into_fleeing() {
    let (mut world, _player, _) = engaged_world();

    // 48 of 60 leaves exactly the 20% threshold.
    world.damage_enemy(ENEMY, PLAYER, 48);
    world.step();

    assert_eq!(world.enemy_state(ENEMY), Some(EnemyStateId::Fleeing));
}

#[test]
fn killing_blow_resolves_credit_and_despawns() {
    let (mut world, _player, _) = engaged_world();

    world.damage_enemy(ENEMY, PLAYER, 60);
    let events = world.step();

    let died = events
        .iter()
        .find_map(|(id, event)| match event {
            EnemyEvent::Died { credited } if *id == ENEMY => Some(credited.clone()),
            _ => None,
        })
        .expect("death event must be reported");
    // 60 damage on 60 max HP is far above the 20% credit threshold.
    assert_eq!(died, vec![PLAYER]);
    assert!(!world.contains_enemy(ENEMY));

    // Despawned enemies produce nothing further.
    assert!(world.step().is_empty());
    assert!(world.step().is_empty());
}

#[test]
fn distant_target_is_chased_until_in_range() {
    let mut template = archer_template();
    template.config.aggro_radius = 12.0;
    template.config.follow_distance = 15.0;

    let mut world = SimWorld::new(TIMESTEP);
    world.spawn_enemy(ENEMY, Vec2::ZERO, &template);
    // Beyond the 8.0 engagement range, inside aggro and follow ranges.
    world.spawn_player(PLAYER, Vec2::new(10.0, 0.0), 0.0, 100);

    world.step();
    assert_eq!(world.enemy_state(ENEMY), Some(EnemyStateId::Chasing));

    // The kinematic driver closes the gap over subsequent steps.
    let mut reached_attacking = false;
    for _ in 0..400 {
        world.step();
        if world.enemy_state(ENEMY) == Some(EnemyStateId::Attacking) {
            reached_attacking = true;
            break;
        }
    }
    assert!(reached_attacking, "chase must converge into engagement");
}

#[test]
fn target_beyond_follow_range_is_abandoned() {
    let (mut world, player, _) = engaged_world();

    player.borrow_mut().position = Vec2::new(50.0, 0.0);
    world.step();

    assert_eq!(world.enemy_state(ENEMY), Some(EnemyStateId::Wandering));
}
