//! GAUNTLET Core - data model and rules boundary
//!
//! This crate provides the game-aware half of the harness:
//! - Shared types (sides, moves, round outcomes)
//! - The `Rules` contract the match runner drives a game through
//! - `StandardChess`, the contract implementation backed by the `chess` crate

pub mod rules;
pub mod standard;
pub mod types;

// Re-exports for convenient access
pub use rules::Rules;
pub use standard::StandardChess;
pub use types::{Move, RoundResult, Side};
