use std::fmt;
use std::path::Path;
use std::process::Command;

use super::error::PublishError;

/// A program plus its arguments, spawned without a shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// `git <args>`
    pub fn git<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cmd = Self::new("git");
        cmd.args.extend(args.into_iter().map(Into::into));
        cmd
    }

    /// Split a command string on whitespace. `None` for a blank string.
    ///
    /// Arguments are passed as-is, so `*` reaches the program unexpanded.
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// How a finished command exited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// `None` when the process was killed by a signal
    pub code: Option<i32>,
}

impl CommandStatus {
    #[cfg(test)]
    pub fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external commands for the publish pipeline
pub trait CommandRunner {
    /// Run `command` in `cwd` and wait for it to exit.
    ///
    /// `Err` only when the command could not be started; a non-zero exit is
    /// reported through the returned status.
    fn run(&self, command: &CommandLine, cwd: &Path) -> Result<CommandStatus, PublishError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, command: &CommandLine, cwd: &Path) -> Result<CommandStatus, PublishError> {
        (**self).run(command, cwd)
    }
}

/// Spawns real processes, inheriting stdout and stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &CommandLine, cwd: &Path) -> Result<CommandStatus, PublishError> {
        tracing::debug!(command = %command, cwd = %cwd.display(), "running");

        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(cwd)
            .status()
            .map_err(|source| PublishError::Spawn {
                command: command.to_string(),
                source,
            })?;

        Ok(CommandStatus {
            code: status.code(),
        })
    }
}
