//! Enemy behavior: state identities, transition predicates, concrete
//! states and the brain that wires them together.

pub mod brain;
pub mod conditions;
pub mod states;

pub use brain::EnemyBrain;

/// Closed set of enemy behavior states.
///
/// Dispatch is by enum key, never by name; the display form exists for
/// diagnostics only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum EnemyStateId {
    Idle,
    Wandering,
    Chasing,
    Attacking,
    Fleeing,
    Dead,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_uppercase() {
        assert_eq!(EnemyStateId::Wandering.to_string(), "WANDERING");
        assert_eq!(EnemyStateId::Dead.to_string(), "DEAD");
    }
}
