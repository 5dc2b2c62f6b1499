//! The rules contract consumed by the match runner
//!
//! The harness never implements game rules itself. Everything it needs from
//! a game lives behind this trait: `StandardChess` is the production
//! implementation, and the runner's unit tests drive a scripted stub.

use crate::types::{Move, Side};

pub trait Rules {
    /// Board state snapshot. Applying a move yields a new value; states are
    /// never mutated in place.
    type State: Clone;

    /// The canonical starting position.
    fn new_game(&self) -> Self::State;

    /// All moves available to `side`. An empty vector is a valid answer and
    /// means `side` has nothing to play.
    fn legal_moves(&self, state: &Self::State, side: Side) -> Vec<Move>;

    /// Produce the successor state for a move. Callers must only pass moves
    /// obtained from [`Rules::legal_moves`] for the side to move.
    fn apply(&self, state: &Self::State, mv: Move) -> Self::State;

    /// Canonical text form of the state, round-trippable by agents.
    fn serialize(&self, state: &Self::State) -> String;

    /// Diagnostic rendering for humans; never used on the wire.
    fn render_human(&self, state: &Self::State) -> String;

    fn is_checkmated(&self, state: &Self::State, side: Side) -> bool;

    fn is_stalemated(&self, state: &Self::State, side: Side) -> bool;
}
