//! Protocol codec - the text exchanged over agent standard streams
//!
//! Outbound: a single line, `"<side-token> <serialized-board>\n"`. This is
//! the entire input an agent receives for its turn.
//!
//! Inbound: two whitespace-separated integers, read positionally as
//! (source, destination). Surrounding whitespace and trailing content are
//! ignored; a missing or unparseable integer is a protocol error, which the
//! adapter folds into the crash category. Whether the decoded pair names a
//! playable move is the runner's judgement, not the codec's.

use gauntlet_core::{Move, Side};
use thiserror::Error;

/// Failure to extract a move from agent output
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("expected two move integers, found {found}")]
    MissingField { found: usize },
    #[error("unparseable move integer {token:?}")]
    BadInteger { token: String },
}

/// Encode the turn message delivered on an agent's standard input.
pub fn encode_turn(side: Side, board: &str) -> String {
    format!("{} {}\n", side.token(), board)
}

/// Decode (source, destination) from raw agent output.
pub fn decode_move(text: &str) -> Result<Move, ProtocolError> {
    let mut tokens = text.split_whitespace();
    let src = next_integer(&mut tokens, 0)?;
    let dst = next_integer(&mut tokens, 1)?;
    Ok(Move::new(src, dst))
}

fn next_integer<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    found: usize,
) -> Result<i32, ProtocolError> {
    let token = tokens.next().ok_or(ProtocolError::MissingField { found })?;
    token.parse().map_err(|_| ProtocolError::BadInteger {
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_turn_is_one_line() {
        let line = encode_turn(Side::White, "8/8/8/8/8/8/8/8 w - - 0 1");
        assert_eq!(line, "white 8/8/8/8/8/8/8/8 w - - 0 1\n");
        let line = encode_turn(Side::Black, "board");
        assert!(line.starts_with("black "));
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn test_decode_plain_pair() {
        assert_eq!(decode_move("12 28"), Ok(Move::new(12, 28)));
    }

    #[test]
    fn test_decode_is_lenient_about_whitespace_and_trailing_content() {
        assert_eq!(decode_move("  12\n\t 28  \n"), Ok(Move::new(12, 28)));
        assert_eq!(decode_move("12 28 extra tokens here"), Ok(Move::new(12, 28)));
    }

    #[test]
    fn test_decode_keeps_out_of_range_integers() {
        // Not the codec's business; the runner will find no legal match.
        assert_eq!(decode_move("-3 900"), Ok(Move::new(-3, 900)));
    }

    #[test]
    fn test_decode_rejects_missing_fields() {
        assert_eq!(decode_move(""), Err(ProtocolError::MissingField { found: 0 }));
        assert_eq!(decode_move("12"), Err(ProtocolError::MissingField { found: 1 }));
    }

    #[test]
    fn test_decode_rejects_non_integers() {
        assert_eq!(
            decode_move("e2 e4"),
            Err(ProtocolError::BadInteger {
                token: "e2".to_string()
            })
        );
        assert_eq!(
            decode_move("12 e4"),
            Err(ProtocolError::BadInteger {
                token: "e4".to_string()
            })
        );
    }
}
