//! Deterministic finite state machine engine for actor AI.
//!
//! This library provides a minimal, deterministic FSM implementation designed
//! for server-authoritative simulations that advance in discrete ticks.
//!
//! - **Declarative transition tables**: per-state edges plus global
//!   ("any-state") edges, evaluated in registration order
//! - **One transition per tick**: no chained transitions within a single
//!   simulation step, so a tick's outcome is easy to reason about
//! - **Strict hook ordering**: `on_exit` of the old state always runs before
//!   `on_enter` of the new one, and `on_enter` always runs before the new
//!   state's first `tick`
//! - **Zero dependencies**: pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`State`]: trait implemented by concrete behavior states
//! - [`Transition`]: an edge with a destination key and a boolean predicate
//! - [`StateMachine`]: holds the states and transition tables and drives
//!   exactly one active state per tick

pub mod machine;
pub mod state;
pub mod transition;

// Re-export core types for ergonomic API
pub use machine::StateMachine;
pub use state::State;
pub use transition::{Condition, Transition};
