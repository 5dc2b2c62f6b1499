//! Standard chess behind the rules contract, backed by the `chess` crate
//!
//! Board state is `chess::Board`; the canonical serialization is FEN. Moves
//! cross the contract as (source, destination) square indices in the crate's
//! 0..64 encoding (a1 = 0, b1 = 1, .. h8 = 63).

use chess::{Board, BoardStatus, ChessMove, Color, MoveGen, Piece, ALL_SQUARES};
use std::str::FromStr;

use crate::rules::Rules;
use crate::types::{Move, Side};

/// Stateless handle; all game state lives in the `chess::Board` values.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardChess;

impl StandardChess {
    /// Parse a board produced by `serialize` (or any legal FEN).
    pub fn parse(&self, text: &str) -> Option<Board> {
        Board::from_str(text.trim()).ok()
    }

    /// Find the legal `chess::ChessMove` matching a (src, dst) pair, if any.
    /// The four promotion variants collapse onto one pair; queen is chosen.
    fn resolve(&self, board: &Board, mv: Move) -> Option<ChessMove> {
        let mut under_promotion = None;
        for candidate in MoveGen::new_legal(board) {
            if candidate.get_source().to_index() as i32 == mv.src
                && candidate.get_dest().to_index() as i32 == mv.dst
            {
                match candidate.get_promotion() {
                    None | Some(Piece::Queen) => return Some(candidate),
                    Some(_) => under_promotion = Some(candidate),
                }
            }
        }
        under_promotion
    }
}

fn to_color(side: Side) -> Color {
    match side {
        Side::White => Color::White,
        Side::Black => Color::Black,
    }
}

fn piece_glyph(piece: Piece, color: Color) -> char {
    let glyph = match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    };
    match color {
        Color::White => glyph.to_ascii_uppercase(),
        Color::Black => glyph,
    }
}

impl Rules for StandardChess {
    type State = Board;

    fn new_game(&self) -> Board {
        Board::default()
    }

    fn legal_moves(&self, state: &Board, side: Side) -> Vec<Move> {
        // Move generation only exists for the side to move; the other side
        // has nothing to play by definition.
        if state.side_to_move() != to_color(side) {
            return Vec::new();
        }
        let mut moves: Vec<Move> = Vec::new();
        for m in MoveGen::new_legal(state) {
            let mv = Move::new(
                m.get_source().to_index() as i32,
                m.get_dest().to_index() as i32,
            );
            if !moves.contains(&mv) {
                moves.push(mv);
            }
        }
        moves
    }

    fn apply(&self, state: &Board, mv: Move) -> Board {
        match self.resolve(state, mv) {
            Some(m) => state.make_move_new(m),
            None => panic!("apply called with illegal move {mv}"),
        }
    }

    fn serialize(&self, state: &Board) -> String {
        state.to_string()
    }

    fn render_human(&self, state: &Board) -> String {
        let mut out = String::new();
        for rank in (0..8usize).rev() {
            out.push(char::from(b'1' + rank as u8));
            for file in 0..8usize {
                let square = ALL_SQUARES[rank * 8 + file];
                let glyph = match (state.piece_on(square), state.color_on(square)) {
                    (Some(piece), Some(color)) => piece_glyph(piece, color),
                    _ => '.',
                };
                out.push(' ');
                out.push(glyph);
            }
            out.push('\n');
        }
        out.push_str("  a b c d e f g h\n");
        out
    }

    fn is_checkmated(&self, state: &Board, side: Side) -> bool {
        state.side_to_move() == to_color(side) && state.status() == BoardStatus::Checkmate
    }

    fn is_stalemated(&self, state: &Board, side: Side) -> bool {
        state.side_to_move() == to_color(side) && state.status() == BoardStatus::Stalemate
    }
}
