//! RON-loaded enemy templates.
//!
//! Templates carry everything tunable about an enemy archetype: behavior
//! distances and intervals, health, and the weapon's burst sequence. The
//! catalog validates structural errors at load time so weapon construction
//! can assume well-formed mode lists; merely questionable values (a
//! non-positive attack speed) are logged and left to the runtime fallbacks.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use sim_core::combat::{MAX_SHOOT_MODES, ProjectileSpec, ShootMode};
use sim_core::{EnemyConfig, RangedWeapon};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse content file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("unknown enemy template {0:?}")]
    UnknownTemplate(String),
    #[error("enemy template {0:?} has no shoot modes")]
    NoShootModes(String),
    #[error("enemy template {0:?} has {1} shoot modes, maximum is {MAX_SHOOT_MODES}")]
    TooManyShootModes(String, usize),
    #[error("enemy template {0:?} has a shoot mode with repeat count 0")]
    ZeroRepeat(String),
}

/// Weapon half of a template.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WeaponTemplate {
    pub base_attack_speed: f32,
    pub projectile: ProjectileSpec,
    pub modes: Vec<ShootMode>,
}

impl WeaponTemplate {
    /// Instantiates a weapon for one spawned enemy.
    pub fn build(&self) -> RangedWeapon {
        RangedWeapon::new(self.base_attack_speed, self.projectile, &self.modes)
    }
}

/// One enemy archetype.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnemyTemplate {
    pub name: String,
    pub max_health: u32,
    pub config: EnemyConfig,
    pub weapon: WeaponTemplate,
}

/// All enemy archetypes known to this server.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EnemyCatalog {
    pub enemies: Vec<EnemyTemplate>,
}

impl EnemyCatalog {
    /// Loads and validates a catalog from a RON file.
    pub fn load_from_file(path: &Path) -> Result<Self, ContentError> {
        let content = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog: Self = ron::from_str(&content).map_err(|source| ContentError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Looks an archetype up by name.
    pub fn get(&self, name: &str) -> Result<&EnemyTemplate, ContentError> {
        self.enemies
            .iter()
            .find(|template| template.name == name)
            .ok_or_else(|| ContentError::UnknownTemplate(name.to_string()))
    }

    /// Structural validation; anything that would make weapon construction
    /// panic is rejected here instead.
    fn validate(&self) -> Result<(), ContentError> {
        for template in &self.enemies {
            let modes = &template.weapon.modes;
            if modes.is_empty() {
                return Err(ContentError::NoShootModes(template.name.clone()));
            }
            if modes.len() > MAX_SHOOT_MODES {
                return Err(ContentError::TooManyShootModes(
                    template.name.clone(),
                    modes.len(),
                ));
            }
            if modes.iter().any(|mode| mode.repeat == 0) {
                return Err(ContentError::ZeroRepeat(template.name.clone()));
            }
            // Recoverable at fire time, but worth flagging at load.
            if template.weapon.base_attack_speed <= 0.0 {
                tracing::warn!(
                    template = %template.name,
                    base_attack_speed = template.weapon.base_attack_speed,
                    "non-positive base attack speed, volleys will use the fallback interval"
                );
            }
        }
        Ok(())
    }
}
