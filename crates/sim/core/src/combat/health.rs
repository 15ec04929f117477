//! Health pool.

/// Current/max hit points of an actor.
///
/// The AI core only ever subtracts; healing and regeneration belong to the
/// external combat layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_dead(&self) -> bool {
        self.current == 0
    }

    /// Current health as a fraction of max, in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        if self.max == 0 {
            0.0
        } else {
            self.current as f32 / self.max as f32
        }
    }

    /// Subtracts `amount`, saturating at zero.
    pub fn apply_damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_saturates_at_zero() {
        let mut health = Health::new(10);
        health.apply_damage(25);
        assert_eq!(health.current, 0);
        assert!(health.is_dead());
    }

    #[test]
    fn fraction_of_zero_max_is_zero() {
        let health = Health { current: 0, max: 0 };
        assert_eq!(health.fraction(), 0.0);
    }
}
