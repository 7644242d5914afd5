//! Shell command execution.
//!
//! Commands from menu entries are run as one shell invocation each, with
//! command echoing enabled so the user sees what a friendly prompt label
//! actually ran. The executor is a seam: tests substitute a recording fake
//! and nothing in here reads the environment; the shell is injected.

use std::process::{Command, Stdio};

use log::{debug, info};

use crate::error::{Error, Result};

/// Default shell to use for command execution
pub const DEFAULT_SHELL: &str = "/bin/bash";

/// Marker printed in front of quoted commands in dry-run mode
const DRY_RUN_MARKER: &str = "WOULD RUN";

/// Capability to turn script text into an exit outcome.
pub trait Executor {
    /// Executes one script.
    ///
    /// # Errors
    ///
    /// Returns an error when the script could not be started or waited on.
    /// A script that starts and exits unsuccessfully is not an error.
    fn execute(&self, script: &str) -> Result<()>;
}

/// Runs scripts through a shell with tracing (`-x`) and inherited stdio.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    shell: String,
}

impl ShellExecutor {
    #[must_use]
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Executor for ShellExecutor {
    fn execute(&self, script: &str) -> Result<()> {
        debug!("spawning `{} -xc` with script: {script}", self.shell);

        let status = Command::new(&self.shell)
            .args(["-xc", script])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(Error::SubProcess)?
            .wait()
            .map_err(Error::SubProcess)?;

        if !status.success() {
            // The menu loop carries on regardless of the child's outcome;
            // the status is only worth a log line.
            info!("command exited with {status}");
        }

        Ok(())
    }
}

/// Executes menu commands, honoring the ambient dry-run mode.
pub struct CommandRunner<E> {
    executor: E,
    dry_run: bool,
}

impl<E: Executor> CommandRunner<E> {
    #[must_use]
    pub fn new(executor: E, dry_run: bool) -> Self {
        Self { executor, dry_run }
    }

    #[must_use]
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Runs `cmd`, preceded by `precmd` when given. `dry_run` overrides the
    /// ambient mode for this call only. In dry-run mode both commands are
    /// shell-quoted and printed instead of executed.
    ///
    /// # Errors
    ///
    /// Returns an error when a command cannot be spawned, or when a command
    /// cannot be quoted for dry-run display.
    pub fn run(&self, cmd: &str, precmd: Option<&str>, dry_run: Option<bool>) -> Result<()> {
        let dry_run = dry_run.unwrap_or(self.dry_run);

        if dry_run {
            if let Some(precmd) = precmd {
                println!("{DRY_RUN_MARKER}: {}", shlex::try_quote(precmd)?);
            }
            println!("{DRY_RUN_MARKER}: {}", shlex::try_quote(cmd)?);
            return Ok(());
        }

        if let Some(precmd) = precmd {
            self.executor.execute(precmd)?;
        }
        self.executor.execute(cmd)
    }
}
