//! Boundary contracts with external subsystems.
//!
//! The AI core does not implement pathfinding, wall-clock time or a
//! cryptographic RNG. It consumes these through the small interfaces in this
//! module so that the runtime (or a test) can plug in whatever it wants.

pub mod clock;
pub mod movement;
pub mod rng;

pub use clock::SharedClock;
pub use movement::MovementDriver;
pub use rng::{PcgRng, RngOracle, compute_seed, seed_from_time};
