//! Straight-line movement driver.

use sim_core::{MovementDriver, Vec2};

/// Reference [`MovementDriver`]: moves in a straight line toward the
/// destination at the configured speed, stopping once within the stopping
/// distance. No pathfinding, no collision; production deployments plug in
/// their own navigation system behind the same trait.
#[derive(Clone, Debug)]
pub struct KinematicDriver {
    position: Vec2,
    speed: f32,
    destination: Option<(Vec2, f32)>,
}

impl KinematicDriver {
    pub fn new(position: Vec2, speed: f32) -> Self {
        Self {
            position,
            speed,
            destination: None,
        }
    }
}

impl MovementDriver for KinematicDriver {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn navigate(&mut self, destination: Vec2, stopping_distance: f32) {
        if self.position.distance(destination) <= stopping_distance {
            self.destination = None;
            return;
        }
        self.destination = Some((destination, stopping_distance));
    }

    fn reset(&mut self) {
        self.destination = None;
    }

    fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    fn warp(&mut self, point: Vec2) {
        self.position = point;
        self.destination = None;
    }

    fn is_moving(&self) -> bool {
        self.destination.is_some()
    }

    fn advance(&mut self, dt: f64) {
        let Some((destination, stopping_distance)) = self.destination else {
            return;
        };

        let gap = self.position.distance(destination) - stopping_distance;
        let step = self.speed * dt as f32;
        if step >= gap {
            // Arrive exactly at the stopping boundary.
            let direction = (destination - self.position).normalized();
            self.position = self.position + direction * gap.max(0.0);
            self.destination = None;
        } else {
            let direction = (destination - self.position).normalized();
            self.position = self.position + direction * step;
        }
    }
}
