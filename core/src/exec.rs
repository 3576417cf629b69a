//! # External Command Execution
//!
//! Every piece of host discovery is answered by an OS tool (`ip`, `route`,
//! `arp`, `ipconfig`, `ping`). [`CommandRunner`] is the seam between the
//! parsing logic and the process that produced the text, which keeps the
//! parsers testable with canned output.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use netkit_common::DiscoveryError;
use tokio::process::Command;
use tracing::trace;

/// Budget for the route and neighbor listing commands.
pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(5);

/// What a finished process left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs `program` to completion and captures its output.
    ///
    /// A non-zero exit is not an error at this level.
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, DiscoveryError>;

    /// Like [`CommandRunner::run`], but a non-zero exit becomes
    /// [`DiscoveryError::NonZeroExit`]. Returns stdout.
    async fn run_checked(&self, program: &str, args: &[&str]) -> Result<String, DiscoveryError> {
        let output = self.run(program, args).await?;
        if !output.success() {
            return Err(DiscoveryError::NonZeroExit {
                program: program.to_string(),
                code: output.code,
            });
        }
        Ok(output.stdout)
    }
}

/// Spawns real processes through `tokio::process`. The default runner
/// waits for as long as the child takes.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    timeout: Option<Duration>,
}

impl SystemRunner {
    /// A runner that kills the child once `timeout` elapses.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, DiscoveryError> {
        trace!("running {program} {}", args.join(" "));

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let spawn_err = |source| DiscoveryError::Spawn {
            program: program.to_string(),
            source,
        };

        let output = match self.timeout {
            Some(after) => tokio::time::timeout(after, command.output())
                .await
                .map_err(|_| DiscoveryError::Timeout {
                    program: program.to_string(),
                    after,
                })?
                .map_err(spawn_err)?,
            None => command.output().await.map_err(spawn_err)?,
        };

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
