//! Integration tests: real subprocess agents against the real rules engine
//!
//! The `random-agent` binary from this crate is the well-behaved agent;
//! misbehaving ones are small shell scripts written into a temp directory.

#![cfg(unix)]

use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use gauntlet_core::{RoundResult, Rules, Side, StandardChess};
use gauntlet_match::{encode_turn, run_round, Agent, ProcessAgent, Tally};

const RANDOM_AGENT: &str = env!("CARGO_BIN_EXE_random-agent");

fn script_agent(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Script that replays a fixed move per invocation, counting its turns in a
/// state file (each turn is a fresh process, so the script has no memory of
/// its own).
fn sequenced_agent(dir: &tempfile::TempDir, name: &str, first: &str, then: &str) -> PathBuf {
    let turns = dir.path().join(format!("{name}-turns"));
    let body = format!(
        "n=$(cat \"{turns}\" 2>/dev/null || echo 0)\n\
         echo $((n+1)) > \"{turns}\"\n\
         case \"$n\" in\n\
         0) echo {first};;\n\
         *) echo {then};;\n\
         esac",
        turns = turns.display(),
    );
    script_agent(dir, name, &body)
}

#[test]
fn test_random_agent_plays_a_legal_opening_move() {
    let rules = StandardChess;
    let start = rules.new_game();
    let legal = rules.legal_moves(&start, Side::White);

    let mut agent = ProcessAgent::new(RANDOM_AGENT);
    let input = encode_turn(Side::White, &rules.serialize(&start));
    let mv = agent.play_turn(&input).unwrap();

    assert!(legal.contains(&mv), "{mv} is not in the opening legal set");
}

#[test]
fn test_fools_mate_between_subprocess_agents() {
    let dir = tempfile::tempdir().unwrap();
    // 1. f3 e5 2. g4 Qh4#
    let white = sequenced_agent(&dir, "white", "13 21", "14 30");
    let black = sequenced_agent(&dir, "black", "52 36", "59 31");

    let rules = StandardChess;
    let mut white = ProcessAgent::new(white);
    let mut black = ProcessAgent::new(black);

    assert_eq!(run_round(&rules, &mut white, &mut black), RoundResult::BlackWin);
}

#[test]
fn test_crashing_black_agent_scores_black_crash() {
    let dir = tempfile::tempdir().unwrap();
    let crasher = script_agent(&dir, "crasher", "exit 1");

    let rules = StandardChess;
    let mut white = ProcessAgent::new(RANDOM_AGENT);
    let mut black = ProcessAgent::new(crasher);

    let mut tally = Tally::new();
    assert_eq!(tally.black_crashes, 0);

    let result = run_round(&rules, &mut white, &mut black);
    assert_eq!(result, RoundResult::BlackCrash);

    tally.record(result);
    assert_eq!(tally.black_crashes, 1);
    assert_eq!(tally.total(), 1);
}

#[test]
fn test_illegal_first_move_scores_white_illegal() {
    let dir = tempfile::tempdir().unwrap();
    let cheat = script_agent(&dir, "cheat", "echo 0 0");

    let rules = StandardChess;
    let mut white = ProcessAgent::new(cheat);
    let mut black = ProcessAgent::new(RANDOM_AGENT);

    assert_eq!(
        run_round(&rules, &mut white, &mut black),
        RoundResult::WhiteIllegalMove
    );
}

#[test]
fn test_hung_agent_is_scored_as_a_crash() {
    let dir = tempfile::tempdir().unwrap();
    let sleeper = script_agent(&dir, "sleeper", "sleep 30\necho 12 28");

    let rules = StandardChess;
    let mut white = ProcessAgent::new(sleeper).with_move_timeout(Duration::from_millis(200));
    let mut black = ProcessAgent::new(RANDOM_AGENT);

    let started = Instant::now();
    assert_eq!(run_round(&rules, &mut white, &mut black), RoundResult::WhiteCrash);
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[test]
fn test_tally_total_matches_rounds_played() {
    let dir = tempfile::tempdir().unwrap();
    let cheat = script_agent(&dir, "cheat", "echo 63 0");

    let rules = StandardChess;
    let mut white = ProcessAgent::new(cheat);
    let mut black = ProcessAgent::new(RANDOM_AGENT);

    let mut tally = Tally::new();
    for _ in 0..3 {
        tally.record(run_round(&rules, &mut white, &mut black));
    }

    assert_eq!(tally.total(), 3);
    assert_eq!(tally.white_illegal, 3);
}

#[test]
fn test_random_agent_rejects_garbage_input() {
    let mut child = Command::new(RANDOM_AGENT)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"not a turn message\n")
        .unwrap();
    let status = child.wait().unwrap();
    assert!(!status.success());
}

#[test]
fn test_random_agent_reports_positions_with_no_moves() {
    // Final position of 1. f3 e5 2. g4 Qh4# - white has nothing to play
    let input = "white rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3\n";
    let mut child = Command::new(RANDOM_AGENT)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input.as_bytes()).unwrap();
    let status = child.wait().unwrap();
    assert!(!status.success());
}
