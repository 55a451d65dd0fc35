use std::io::ErrorKind;
use std::process::{Command, ExitStatus};

use anyhow::Context;
use envs_core::Assignment;

use crate::errors::CliError;

/// Build the child command with its environment.
///
/// Without `include_env` the child starts from an empty environment.
/// Assignments are applied in order, so the last occurrence of a key wins.
pub fn build_command(
    program: &str,
    args: &[String],
    assignments: &[Assignment],
    include_env: bool,
) -> Command {
    let mut cmd = Command::new(program);
    cmd.args(args);
    if !include_env {
        cmd.env_clear();
    }
    for assignment in assignments {
        cmd.env(&assignment.key, &assignment.value);
    }
    cmd
}

/// Run `program` with inherited stdio and return the exit code to forward.
pub fn run_command(
    program: &str,
    args: &[String],
    assignments: &[Assignment],
    include_env: bool,
) -> anyhow::Result<i32> {
    tracing::debug!(
        program,
        vars = assignments.len(),
        include_env,
        "running command"
    );

    let status = match build_command(program, args, assignments, include_env).status() {
        Ok(status) => status,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(CliError::not_found(
                format!("Command not found: {}", program),
                "Hint: Without -i the command runs with only the loaded variables, so PATH may be unset.",
            )
            .into());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("unexpected error while executing {}", program));
        }
    };

    Ok(exit_code(status))
}

/// Exit code to forward for a finished child.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return crate::constants::exit_codes::SIGNAL_BASE + signal;
        }
    }
    1
}
