//! Shared data model: sides, moves and round outcomes

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two alternating turn-takers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// The other side
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Token used on the wire ("white" / "black")
    pub fn token(self) -> &'static str {
        match self {
            Side::White => "white",
            Side::Black => "black",
        }
    }

    /// Inverse of [`Side::token`]
    pub fn from_token(token: &str) -> Option<Side> {
        match token {
            "white" => Some(Side::White),
            "black" => Some(Side::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A move as an agent reports it: source and destination square indices.
///
/// The fields are plain integers rather than square types: they arrive as
/// untrusted text, and a pair that maps to no square (negative, or past the
/// board) is an ordinary illegal move, not a malformed response. Two moves
/// are equal iff both fields match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub src: i32,
    pub dst: i32,
}

impl Move {
    pub fn new(src: i32, dst: i32) -> Self {
        Self { src, dst }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.src, self.dst)
    }
}

/// Terminal classification of one round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    WhiteWin,
    BlackWin,
    Stalemate,
    WhiteIllegalMove,
    BlackIllegalMove,
    WhiteCrash,
    BlackCrash,
}

impl RoundResult {
    /// Win for the given side
    pub fn win_for(side: Side) -> RoundResult {
        match side {
            Side::White => RoundResult::WhiteWin,
            Side::Black => RoundResult::BlackWin,
        }
    }

    /// Illegal-move outcome, charged to the side that played the move
    pub fn illegal_move_by(side: Side) -> RoundResult {
        match side {
            Side::White => RoundResult::WhiteIllegalMove,
            Side::Black => RoundResult::BlackIllegalMove,
        }
    }

    /// Crash outcome, charged to the side whose agent failed
    pub fn crash_of(side: Side) -> RoundResult {
        match side {
            Side::White => RoundResult::WhiteCrash,
            Side::Black => RoundResult::BlackCrash,
        }
    }
}
