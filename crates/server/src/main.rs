//! Demo server entry point.
//!
//! Runs a small scripted encounter: one enemy spawned from the template
//! catalog, one player that walks into aggro range and trades damage.
//! Useful for watching the state transitions and volley scheduling in the
//! logs (`RUST_LOG=debug`).

use std::path::PathBuf;

use anyhow::{Context, Result};

use sim_core::{EntityId, Vec2};
use sim_server::{EnemyCatalog, SimWorld};

const TIMESTEP: f64 = 0.05;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let catalog_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data/enemies.ron")));

    let catalog = EnemyCatalog::load_from_file(&catalog_path)
        .with_context(|| format!("loading enemy catalog from {}", catalog_path.display()))?;
    let template = catalog.get("skeleton-archer")?.clone();

    let mut world = SimWorld::new(TIMESTEP);

    let enemy_id = EntityId(1);
    let player_id = EntityId(1000);
    world.spawn_enemy(enemy_id, Vec2::new(0.0, 0.0), &template);
    let player = world.spawn_player(player_id, Vec2::new(12.0, 0.0), 0.4, 100);

    let mut volleys = 0usize;
    for step in 0..1200 {
        // Scripted player: close in to 4 units, then poke the enemy once a
        // second until it dies.
        {
            let mut view = player.borrow_mut();
            if view.position.x > 4.0 {
                view.position.x -= 2.0 * TIMESTEP as f32;
            }
        }
        if step % 20 == 19 && world.contains_enemy(enemy_id) {
            world.damage_enemy(enemy_id, player_id, 5);
        }

        for (id, event) in world.step() {
            match event {
                sim_core::EnemyEvent::Volley(volley) => {
                    volleys += 1;
                    tracing::info!(
                        enemy = %id,
                        projectiles = volley.projectiles.len(),
                        time = volley.time,
                        "volley"
                    );
                }
                sim_core::EnemyEvent::Died { credited } => {
                    tracing::info!(enemy = %id, ?credited, "death resolved");
                }
            }
        }

        if !world.contains_enemy(enemy_id) {
            break;
        }
    }

    tracing::info!(volleys, time = world.time(), "encounter finished");
    Ok(())
}
