//! External Process Runner
//!
//! Executes an external command to completion with a working directory and
//! environment overrides, discarding its output streams: a run is judged
//! solely by exit status. Non-zero exit and launch failure are both fatal
//! and indistinguishable by policy; a benchmark run with a broken leg
//! produces a misleading comparison, so any failure invalidates the whole
//! matrix. There are no retries and no timeout; a hung tool hangs the run.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;

/// Fatal invocation failures.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The command could not be launched at all.
    #[error("Failed to launch `{command}`: {source}")]
    Launch {
        /// Rendered command line.
        command: String,
        /// Underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// The command ran and exited with a non-zero status.
    #[error("Command `{command}` failed with {status}")]
    Failed {
        /// Rendered command line.
        command: String,
        /// The reported exit status.
        status: ExitStatus,
    },
}

/// One external invocation: program, arguments, working directory, and
/// environment overrides merged over the ambient environment.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// Program to execute.
    pub program: String,
    /// Arguments in order.
    pub args: Vec<String>,
    /// Working directory for the child.
    pub cwd: PathBuf,
    /// Environment overrides, applied on top of the inherited environment.
    pub envs: Vec<(String, String)>,
}

impl CommandSpec {
    /// Create a spec with no arguments or environment overrides.
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
            envs: Vec::new(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Add an environment override.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// The command line as displayed in diagnostics.
    pub fn rendered(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Run a command to completion.
///
/// Stdout and stderr are discarded. Returns `Err` on launch failure or
/// non-zero exit; process termination is left to the outermost entry point.
pub fn run_command(spec: &CommandSpec) -> Result<(), ProcessError> {
    tracing::debug!(command = %spec.rendered(), cwd = %spec.cwd.display(), "running external command");

    let status = Command::new(&spec.program)
        .args(&spec.args)
        .current_dir(&spec.cwd)
        .envs(spec.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|source| ProcessError::Launch {
            command: spec.rendered(),
            source,
        })?;

    if !status.success() {
        return Err(ProcessError::Failed {
            command: spec.rendered(),
            status,
        });
    }
    Ok(())
}

/// Build a spec from a configured tool command (program plus leading
/// arguments). An empty vector falls back to running `npx`.
pub fn spec_from_tool(tool: &[String], cwd: &Path) -> CommandSpec {
    match tool.split_first() {
        Some((program, rest)) => CommandSpec::new(program.as_str(), cwd).args(rest.iter().cloned()),
        None => CommandSpec::new("npx", cwd),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cwd() -> PathBuf {
        std::env::temp_dir()
    }

    #[test]
    fn successful_command_returns_ok() {
        let spec = CommandSpec::new("sh", cwd()).args(["-c", "exit 0"]);
        run_command(&spec).unwrap();
    }

    #[test]
    fn nonzero_exit_is_fatal() {
        let spec = CommandSpec::new("sh", cwd()).args(["-c", "exit 3"]);
        let err = run_command(&spec).unwrap_err();
        match err {
            ProcessError::Failed { command, status } => {
                assert!(command.starts_with("sh -c"));
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn launch_failure_is_fatal() {
        let spec = CommandSpec::new("bundlebench-no-such-binary", cwd());
        let err = run_command(&spec).unwrap_err();
        assert!(matches!(err, ProcessError::Launch { .. }));
    }

    #[test]
    fn env_overrides_merge_over_ambient_environment() {
        let spec = CommandSpec::new("sh", cwd())
            .args(["-c", "test \"$BUNDLEBENCH_TEST_FLAG\" = on"])
            .env("BUNDLEBENCH_TEST_FLAG", "on");
        run_command(&spec).unwrap();

        let without = CommandSpec::new("sh", cwd())
            .args(["-c", "test \"$BUNDLEBENCH_TEST_FLAG\" = on"]);
        assert!(run_command(&without).is_err());
    }

    #[test]
    fn spec_from_tool_splits_program_and_args() {
        let tool = vec!["npx".to_string(), "react-native".to_string()];
        let spec = spec_from_tool(&tool, &cwd());
        assert_eq!(spec.program, "npx");
        assert_eq!(spec.args, vec!["react-native"]);

        let empty = spec_from_tool(&[], &cwd());
        assert_eq!(empty.program, "npx");
        assert!(empty.args.is_empty());
    }

    #[test]
    fn rendered_joins_program_and_args() {
        let spec = CommandSpec::new("hermesc", cwd()).args(["in.bundle", "-O"]);
        assert_eq!(spec.rendered(), "hermesc in.bundle -O");
    }
}
