//! Damage attribution for loot credit.

use std::collections::HashMap;

use crate::types::EntityId;

/// Cumulative damage dealt to one enemy, by attacker.
///
/// Owned by the enemy instance, reset on respawn, and consumed at death to
/// decide which attackers earned soulbound loot.
#[derive(Clone, Debug, Default)]
pub struct DamageTracker {
    by_attacker: HashMap<EntityId, u32>,
}

impl DamageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `amount` damage from `attacker`.
    pub fn record(&mut self, attacker: EntityId, amount: u32) {
        *self.by_attacker.entry(attacker).or_insert(0) += amount;
    }

    /// Total damage attributed to `attacker` so far.
    pub fn total(&self, attacker: EntityId) -> u32 {
        self.by_attacker.get(&attacker).copied().unwrap_or(0)
    }

    /// Forgets all recorded damage.
    pub fn reset(&mut self) {
        self.by_attacker.clear();
    }

    /// Attackers whose contribution exceeds `threshold` as a fraction of
    /// `max_health`, sorted by id for deterministic iteration.
    pub fn kill_credit(&self, max_health: u32, threshold: f32) -> Vec<EntityId> {
        let cutoff = max_health as f32 * threshold;
        let mut credited: Vec<EntityId> = self
            .by_attacker
            .iter()
            .filter(|&(_, &damage)| damage as f32 > cutoff)
            .map(|(&id, _)| id)
            .collect();
        credited.sort_unstable();
        credited
    }
}
