//! Tally - run-scoped accumulation of round results

use std::fmt;

use gauntlet_core::RoundResult;
use serde::Serialize;

/// Occurrence counts per round outcome.
///
/// Created once at the start of a run, incremented as rounds complete and
/// never reset. Rendering it never mutates it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub white_wins: u32,
    pub black_wins: u32,
    pub stalemates: u32,
    pub white_illegal: u32,
    pub black_illegal: u32,
    pub white_crashes: u32,
    pub black_crashes: u32,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one completed round into the counts.
    pub fn record(&mut self, result: RoundResult) {
        match result {
            RoundResult::WhiteWin => self.white_wins += 1,
            RoundResult::BlackWin => self.black_wins += 1,
            RoundResult::Stalemate => self.stalemates += 1,
            RoundResult::WhiteIllegalMove => self.white_illegal += 1,
            RoundResult::BlackIllegalMove => self.black_illegal += 1,
            RoundResult::WhiteCrash => self.white_crashes += 1,
            RoundResult::BlackCrash => self.black_crashes += 1,
        }
    }

    /// Rounds recorded so far.
    pub fn total(&self) -> u32 {
        self.white_wins
            + self.black_wins
            + self.stalemates
            + self.white_illegal
            + self.black_illegal
            + self.white_crashes
            + self.black_crashes
    }

    pub fn count(&self, result: RoundResult) -> u32 {
        match result {
            RoundResult::WhiteWin => self.white_wins,
            RoundResult::BlackWin => self.black_wins,
            RoundResult::Stalemate => self.stalemates,
            RoundResult::WhiteIllegalMove => self.white_illegal,
            RoundResult::BlackIllegalMove => self.black_illegal,
            RoundResult::WhiteCrash => self.white_crashes,
            RoundResult::BlackCrash => self.black_crashes,
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Results ===")?;
        writeln!(f, "White win: {}", self.white_wins)?;
        writeln!(f, "Black win: {}", self.black_wins)?;
        writeln!(f, "Stalemate: {}", self.stalemates)?;
        writeln!(f)?;
        writeln!(f, "White Illegal: {}", self.white_illegal)?;
        writeln!(f, "Black Illegal: {}", self.black_illegal)?;
        writeln!(f, "White Crash: {}", self.white_crashes)?;
        writeln!(f, "Black Crash: {}", self.black_crashes)
    }
}
