//! Live view of a potential victim.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::combat::Health;
use crate::types::{EntityId, Vec2};

/// The slice of another actor an enemy needs to see: where it is, how big
/// its collider is, and whether it is still alive.
///
/// The owning registry updates position and health; enemies only read.
#[derive(Clone, Debug)]
pub struct TargetState {
    pub id: EntityId,
    pub position: Vec2,
    /// Collider radius, used for boundary-point distance.
    pub radius: f32,
    pub health: Health,
}

impl TargetState {
    pub fn new(id: EntityId, position: Vec2, radius: f32, health: Health) -> Self {
        Self {
            id,
            position,
            radius,
            health,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_dead()
    }

    /// Distance from `point` to this actor's nearest boundary point, never
    /// negative even when `point` is inside the collider.
    pub fn boundary_distance_to(&self, point: Vec2) -> f32 {
        (self.position.distance(point) - self.radius).max(0.0)
    }
}

/// Strong handle held by the registry that owns the actor entry.
pub type SharedTarget = Rc<RefCell<TargetState>>;

/// Weak handle held by enemies.
///
/// Upgrade failure means the actor was despawned; predicates read that as
/// "target disappeared" without any explicit notification.
pub type TargetHandle = Weak<RefCell<TargetState>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_distance_subtracts_radius() {
        let target = TargetState::new(EntityId(1), Vec2::new(10.0, 0.0), 0.5, Health::new(10));
        assert_eq!(target.boundary_distance_to(Vec2::ZERO), 9.5);
    }

    #[test]
    fn boundary_distance_clamps_inside_collider() {
        let target = TargetState::new(EntityId(1), Vec2::new(0.1, 0.0), 2.0, Health::new(10));
        assert_eq!(target.boundary_distance_to(Vec2::ZERO), 0.0);
    }
}
