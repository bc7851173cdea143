//! Bounded execution of external commands.
//!
//! All adb invocations go through [`run_with_timeout`], which:
//!
//! - spawns the command in its own process group
//! - lists its process group in [`InFlight::global`] so an interrupt can stop it
//! - kills the process group once the time budget is spent
//!
//! A non-zero exit is not an error at this level; callers decide with
//! [`CommandOutput::ensure_success`].

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::error::{FossifyError, Result};
use crate::process_guard::{self, CommandProcessGroup, InFlight};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Output from a finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Human-readable command line, for logs and errors
    pub command: String,
    pub stdout: String,
    pub stderr: String,
    /// Exit code (None if terminated by signal)
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Turn a non-zero exit into [`FossifyError::CommandFailed`]
    pub fn ensure_success(self) -> Result<Self> {
        if self.success() {
            Ok(self)
        } else {
            Err(FossifyError::command_failed(
                self.command,
                self.exit_code.unwrap_or(-1),
                self.stderr.trim(),
            ))
        }
    }
}

/// Render a program and its arguments as one line
pub fn display_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run `program` with `args`, waiting at most `timeout` for it to exit.
pub fn run_with_timeout(program: &str, args: &[String], timeout: Duration) -> Result<CommandOutput> {
    let command = display_command(program, args);
    tracing::debug!(%command, ?timeout, "running command");

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .in_new_process_group()
        .spawn()
        .map_err(|source| FossifyError::CommandSpawn {
            command: command.clone(),
            source,
        })?;

    let pid = child.id();
    if let Ok(mut in_flight) = InFlight::global().lock() {
        in_flight.insert(pid);
    }

    let result = wait_bounded(&mut child, &command, timeout);

    if let Ok(mut in_flight) = InFlight::global().lock() {
        in_flight.remove(pid);
    }

    result
}

fn wait_bounded(child: &mut Child, command: &str, timeout: Duration) -> Result<CommandOutput> {
    // Drain pipes on helper threads so a chatty child never blocks on write
    let stdout = child.stdout.take().map(drain);
    let stderr = child.stderr.take().map(drain);

    let start = Instant::now();
    let status = loop {
        match child.try_wait()? {
            Some(status) => break status,
            None if start.elapsed() >= timeout => {
                tracing::warn!(%command, ?timeout, "command timed out, killing it");
                process_guard::kill_group(child.id());
                let _ = child.kill();
                let _ = child.wait();
                collect(stdout);
                collect(stderr);
                return Err(FossifyError::CommandTimeout {
                    command: command.to_string(),
                    timeout,
                });
            }
            None => thread::sleep(POLL_INTERVAL),
        }
    };

    let output = CommandOutput {
        command: command.to_string(),
        stdout: collect(stdout),
        stderr: collect(stderr),
        exit_code: status.code(),
    };
    tracing::debug!(%command, exit_code = ?output.exit_code, "command finished");
    Ok(output)
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    })
}

fn collect(handle: Option<JoinHandle<String>>) -> String {
    handle
        .and_then(|handle| handle.join().ok())
        .unwrap_or_default()
}
