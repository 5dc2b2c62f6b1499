//! Reference agent: plays a uniformly random legal move
//!
//! Reads the turn message (`"<side> <FEN>"`) from standard input, writes
//! `"<source> <destination>"` to standard output and exits. Useful as a
//! sparring partner and as the integration-test workhorse.

use std::io::Read;

use anyhow::{Context, Result};
use rand::seq::SliceRandom;

use gauntlet_core::{Rules, Side, StandardChess};

fn main() -> Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading turn message")?;

    let (side, board_text) = split_turn(&input)?;
    let side = Side::from_token(side).with_context(|| format!("unknown side token {side:?}"))?;

    let rules = StandardChess;
    let board = rules
        .parse(board_text)
        .with_context(|| format!("unparseable board {board_text:?}"))?;

    let moves = rules.legal_moves(&board, side);
    let mv = moves
        .choose(&mut rand::thread_rng())
        .with_context(|| format!("no legal moves for {side}"))?;

    println!("{} {}", mv.src, mv.dst);
    Ok(())
}

fn split_turn(input: &str) -> Result<(&str, &str)> {
    input
        .trim()
        .split_once(' ')
        .context("expected \"<side> <board>\" on stdin")
}
