//! Agent process adapter - one subprocess per turn
//!
//! Agents are untrusted executables. Each turn spawns a fresh process,
//! delivers the encoded turn message on its standard input, reads a move
//! from its standard output and waits for it to exit. Nothing survives
//! between turns, so a misbehaving agent can only ever poison its own turn.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use gauntlet_core::Move;
use thiserror::Error;

use crate::protocol::{decode_move, ProtocolError};

/// A source of moves for one side.
///
/// `ProcessAgent` is the production implementation; the runner's tests
/// script their own. Any error carries crash semantics for the acting side.
pub trait Agent {
    fn play_turn(&mut self, input: &str) -> Result<Move, AgentError>;
}

/// Ways one agent turn can fail. All variants map to the crash category;
/// they are distinguished only for diagnostics.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("failed to launch {}: {}", .path.display(), .source)]
    Launch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("i/o with agent failed: {0}")]
    Io(#[from] io::Error),
    #[error("malformed move response: {0}")]
    Malformed(#[from] ProtocolError),
    #[error("agent exited with {status}")]
    Exited { status: ExitStatus },
    #[error("agent exceeded its {limit:?} move budget")]
    TimedOut { limit: Duration },
}

/// Runs an external executable for exactly one turn per call.
///
/// The child's stderr is inherited so agent diagnostics land on the
/// harness's own error stream. With a move timeout configured, both the
/// output read and the exit wait are bounded and an overrunning child is
/// killed; without one, both block until the child is done.
pub struct ProcessAgent {
    path: PathBuf,
    move_timeout: Option<Duration>,
}

impl ProcessAgent {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            move_timeout: None,
        }
    }

    /// Bound each turn, process start to process exit.
    pub fn with_move_timeout(mut self, limit: Duration) -> Self {
        self.move_timeout = Some(limit);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn spawn(&self) -> Result<Child, AgentError> {
        // stdout is piped at spawn time, before the child can produce
        // anything, so writing input below cannot deadlock against a child
        // that talks first.
        Command::new(&self.path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| AgentError::Launch {
                path: self.path.clone(),
                source,
            })
    }

    fn read_output(
        &self,
        child: &mut Child,
        budget: Option<(Duration, Instant)>,
    ) -> Result<String, AgentError> {
        let mut stdout = match child.stdout.take() {
            Some(stdout) => stdout,
            None => return Ok(String::new()),
        };

        match budget {
            None => {
                let mut output = String::new();
                if let Err(err) = stdout.read_to_string(&mut output) {
                    reap(child);
                    return Err(err.into());
                }
                Ok(output)
            }
            Some((limit, started)) => {
                let (sender, receiver) = mpsc::channel();
                thread::spawn(move || {
                    let mut output = String::new();
                    let outcome = stdout.read_to_string(&mut output).map(|_| output);
                    let _ = sender.send(outcome);
                });
                let remaining = limit.saturating_sub(started.elapsed());
                match receiver.recv_timeout(remaining) {
                    Ok(Ok(output)) => Ok(output),
                    Ok(Err(err)) => {
                        reap(child);
                        Err(err.into())
                    }
                    Err(_) => {
                        reap(child);
                        Err(AgentError::TimedOut { limit })
                    }
                }
            }
        }
    }

    fn wait_for_exit(
        &self,
        child: &mut Child,
        budget: Option<(Duration, Instant)>,
    ) -> Result<ExitStatus, AgentError> {
        match budget {
            None => Ok(child.wait()?),
            Some((limit, started)) => loop {
                if let Some(status) = child.try_wait()? {
                    return Ok(status);
                }
                if started.elapsed() >= limit {
                    reap(child);
                    return Err(AgentError::TimedOut { limit });
                }
                thread::sleep(Duration::from_millis(5));
            },
        }
    }
}

impl Agent for ProcessAgent {
    fn play_turn(&mut self, input: &str) -> Result<Move, AgentError> {
        let started = Instant::now();
        let budget = self.move_timeout.map(|limit| (limit, started));

        let mut child = self.spawn()?;

        // The message is one short line, well under the pipe buffer, so the
        // write cannot block. A closed read end just means the agent moved
        // without looking at the board; its output still decides the turn.
        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(input.as_bytes()) {
                Ok(()) => {}
                Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {}
                Err(err) => {
                    reap(&mut child);
                    return Err(err.into());
                }
            }
        }
        // stdin drops here, closing the write end

        let output = self.read_output(&mut child, budget)?;
        let status = self.wait_for_exit(&mut child, budget)?;

        // A non-zero exit is a crash even when a well-formed move was
        // already written.
        if !status.success() {
            return Err(AgentError::Exited { status });
        }
        Ok(decode_move(&output)?)
    }
}

fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}
