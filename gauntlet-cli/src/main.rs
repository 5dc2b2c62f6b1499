//! GAUNTLET CLI - run agent-vs-agent chess matches
//!
//! Pits two agent executables against each other for a configured number of
//! rounds, printing the cumulative tally after every round.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use gauntlet_core::StandardChess;
use gauntlet_match::{run_round, ProcessAgent, Tally};

#[derive(Parser)]
#[command(name = "gauntlet")]
#[command(about = "Agent-vs-agent chess match harness")]
struct Cli {
    /// Path to the white agent executable
    #[arg(long, value_name = "FILE")]
    white: PathBuf,

    /// Path to the black agent executable
    #[arg(long, value_name = "FILE")]
    black: PathBuf,

    /// How many games to run
    #[arg(long, default_value = "1")]
    games: u32,

    /// Kill an agent and score the game as its crash when a single turn
    /// exceeds this many milliseconds
    #[arg(long, value_name = "MS")]
    move_timeout_ms: Option<u64>,

    /// Print the final tally as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    println!("white: {}", cli.white.display());
    println!("black: {}", cli.black.display());

    let rules = StandardChess;
    let mut white = agent(&cli.white, cli.move_timeout_ms);
    let mut black = agent(&cli.black, cli.move_timeout_ms);
    let mut tally = Tally::new();

    for game in 1..=cli.games {
        println!("game #{game}");
        let result = run_round(&rules, &mut white, &mut black);
        tracing::info!("game #{}: {:?}", game, result);
        tally.record(result);
        println!("{tally}");
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    }

    Ok(())
}

fn agent(path: &Path, timeout_ms: Option<u64>) -> ProcessAgent {
    let mut agent = ProcessAgent::new(path);
    if let Some(ms) = timeout_ms {
        agent = agent.with_move_timeout(Duration::from_millis(ms));
    }
    agent
}
