use std::process::Command;

use anyhow::Context;
use tracing::debug;

use crate::ports::outbound::command_runner::CommandRunner;

/// Runs commands as real OS subprocesses and captures their stdout.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> anyhow::Result<Vec<String>> {
        let mut parts = command.split_whitespace();
        let program = parts.next().context("empty command")?;

        debug!("spawning `{command}`");
        let output = Command::new(program)
            .args(parts)
            .output()
            .with_context(|| format!("failed to run `{command}`"))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.lines().map(str::to_owned).collect())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_captures_stdout_lines() {
        let lines = ShellRunner.run("echo hello").unwrap();
        assert_eq!(lines, vec!["hello".to_string()]);
    }

    #[test]
    fn test_run_rejects_empty_command() {
        assert!(ShellRunner.run("").is_err());
    }

    #[test]
    fn test_run_fails_for_missing_program() {
        assert!(ShellRunner.run("definitely-not-a-real-program-xyz").is_err());
    }
}
