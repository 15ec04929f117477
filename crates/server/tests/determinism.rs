//! Two worlds built from the same inputs must stay step-for-step identical.

use sim_core::combat::{ProjectileSpec, ShootMode, ShootPattern};
use sim_core::{EnemyConfig, EnemyEvent, EnemyStateId, EntityId, Vec2};
use sim_server::{EnemyTemplate, SimWorld, WeaponTemplate};

const TIMESTEP: f64 = 0.05;

fn template() -> EnemyTemplate {
    EnemyTemplate {
        name: "archer".to_string(),
        max_health: 80,
        config: EnemyConfig::default(),
        weapon: WeaponTemplate {
            base_attack_speed: 1.2,
            projectile: ProjectileSpec {
                min_damage: 2,
                max_damage: 6,
                move_range: 10.0,
                move_speed: 12.0,
                radius: 0.1,
            },
            modes: vec![
                ShootMode {
                    pattern: ShootPattern {
                        main_angle: 0.0,
                        spread_angle: 0.6,
                        projectile_count: 3,
                        angle_deviation: 0.15,
                        attack_speed_bonus: 1.0,
                    },
                    repeat: 2,
                    cooldown: 1.5,
                },
                ShootMode {
                    pattern: ShootPattern {
                        main_angle: 0.1,
                        spread_angle: 1.0,
                        projectile_count: 5,
                        angle_deviation: 0.05,
                        attack_speed_bonus: 0.7,
                    },
                    repeat: 1,
                    cooldown: 2.5,
                },
            ],
        },
    }
}

fn build_world() -> SimWorld {
    let mut world = SimWorld::new(TIMESTEP);
    world.spawn_enemy(EntityId(1), Vec2::ZERO, &template());
    world.spawn_enemy(EntityId(2), Vec2::new(3.0, 3.0), &template());
    world.spawn_player(EntityId(1000), Vec2::new(4.0, 0.0), 0.3, 100);
    world
}

/// Identical scripted inputs applied to both worlds each step.
fn script(world: &mut SimWorld, step: usize) {
    if let Some(player) = world.registry().get(EntityId(1000)) {
        let mut view = player.borrow_mut();
        view.position.x = 4.0 + (step as f32 * 0.01).sin();
    }
    if step == 100 {
        world.damage_enemy(EntityId(1), EntityId(1000), 30);
    }
    if step == 200 {
        // Killing blow for the 80 HP archer.
        world.damage_enemy(EntityId(2), EntityId(1000), 100);
    }
}

#[test]
fn identical_worlds_stay_identical() {
    let mut a = build_world();
    let mut b = build_world();

    for step in 0..500 {
        script(&mut a, step);
        script(&mut b, step);

        let events_a = a.step();
        let events_b = b.step();

        assert_eq!(events_a, events_b, "event streams diverged at step {step}");
        for id in [EntityId(1), EntityId(2)] {
            assert_eq!(
                a.enemy_state(id),
                b.enemy_state(id),
                "state diverged for enemy {id} at step {step}"
            );
            assert_eq!(
                a.enemy(id).map(|enemy| enemy.position()),
                b.enemy(id).map(|enemy| enemy.position()),
                "position diverged for enemy {id} at step {step}"
            );
        }
    }
}

#[test]
fn volleys_are_bit_identical_across_worlds() {
    let mut a = build_world();
    let mut b = build_world();

    let mut volleys_a = Vec::new();
    let mut volleys_b = Vec::new();
    for _ in 0..300 {
        volleys_a.extend(a.step().into_iter().filter_map(|(_, event)| match event {
            EnemyEvent::Volley(volley) => Some(volley),
            _ => None,
        }));
        volleys_b.extend(b.step().into_iter().filter_map(|(_, event)| match event {
            EnemyEvent::Volley(volley) => Some(volley),
            _ => None,
        }));
    }

    assert!(!volleys_a.is_empty(), "the scenario must produce volleys");
    assert_eq!(volleys_a, volleys_b);
}

#[test]
fn killed_enemy_despawns_in_both_worlds() {
    let mut a = build_world();
    let mut b = build_world();

    for step in 0..260 {
        script(&mut a, step);
        script(&mut b, step);
        a.step();
        b.step();
    }

    assert!(!a.contains_enemy(EntityId(2)));
    assert!(!b.contains_enemy(EntityId(2)));
    assert_eq!(
        a.enemy_state(EntityId(1)),
        b.enemy_state(EntityId(1)),
        "surviving enemy must be in the same state in both worlds"
    );
}
