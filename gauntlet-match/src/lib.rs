//! GAUNTLET Match - the match-running core
//!
//! This crate drives one round at a time:
//! - Protocol codec for the line exchange with agents
//! - Agent process adapter (one subprocess per turn)
//! - Match runner producing one `RoundResult` per round
//! - Tally accumulator across rounds

pub mod agent;
pub mod protocol;
pub mod runner;
pub mod tally;

pub use agent::{Agent, AgentError, ProcessAgent};
pub use protocol::{decode_move, encode_turn, ProtocolError};
pub use runner::run_round;
pub use tally::Tally;
