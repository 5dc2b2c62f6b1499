//! Match runner - one round from the starting position to a terminal result

use gauntlet_core::{RoundResult, Rules, Side};

use crate::agent::Agent;
use crate::protocol::encode_turn;

/// Play one complete round between two agents.
///
/// The loop owns the single current board state, alternates sides starting
/// with white, and resolves every agent failure or rules violation locally
/// into a [`RoundResult`]. Nothing propagates out of a round; the caller
/// always gets exactly one result.
pub fn run_round<R: Rules>(
    rules: &R,
    white: &mut dyn Agent,
    black: &mut dyn Agent,
) -> RoundResult {
    let mut state = rules.new_game();
    let mut side = Side::White;

    loop {
        // The legal set is fixed before the agent runs; its move is judged
        // against this snapshot and nothing later.
        let legal = rules.legal_moves(&state, side);

        let agent = match side {
            Side::White => &mut *white,
            Side::Black => &mut *black,
        };

        let input = encode_turn(side, &rules.serialize(&state));
        let mv = match agent.play_turn(&input) {
            Ok(mv) => mv,
            Err(err) => {
                tracing::warn!("{} agent failed: {}", side, err);
                return RoundResult::crash_of(side);
            }
        };
        tracing::debug!("{} plays {}", side, mv);

        if !legal.contains(&mv) {
            tracing::warn!("{} played illegal move {}", side, mv);
            return RoundResult::illegal_move_by(side);
        }

        state = rules.apply(&state, mv);
        tracing::trace!("position after {}:\n{}", side, rules.render_human(&state));

        let opponent = side.opponent();
        if rules.is_checkmated(&state, opponent) {
            return RoundResult::win_for(side);
        }
        if rules.is_stalemated(&state, opponent) {
            return RoundResult::Stalemate;
        }

        side = opponent;
    }
}
