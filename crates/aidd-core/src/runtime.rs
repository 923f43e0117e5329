//! Package runner detection and external command invocation
//!
//! Scaffold, dev-tooling and add-on commands all go through [`run_shell`]:
//! stdio is inherited so the underlying tool talks to the user directly,
//! and only the exit status is observed.

use anyhow::{Context, Result};
use std::path::Path;
use tokio::process::Command as TokioCommand;

/// JavaScript package runners in order of preference
const RUNNERS: &[PackageRunner] = &[
    PackageRunner {
        name: "bun",
        install_dev: "bun add -d",
        exec: "bunx",
    },
    PackageRunner {
        name: "npm",
        install_dev: "npm install -D",
        exec: "npx",
    },
];

/// A package runner and its command prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageRunner {
    pub name: &'static str,
    install_dev: &'static str,
    exec: &'static str,
}

impl PackageRunner {
    /// Detect the available runner: try the fast one first, fall back to
    /// the default if nothing responds to `--version`.
    pub fn detect() -> &'static PackageRunner {
        for runner in RUNNERS {
            if std::process::Command::new(runner.name)
                .arg("--version")
                .output()
                .is_ok_and(|o| o.status.success())
            {
                return runner;
            }
        }
        // Nothing detected: default to npm, which will fail with its own
        // error message if genuinely absent
        &RUNNERS[RUNNERS.len() - 1]
    }

    /// Command installing the given packages as dev dependencies
    pub fn install_dev_command(&self, packages: &[&str]) -> String {
        format!("{} {}", self.install_dev, packages.join(" "))
    }

    /// Command executing a package binary (e.g. `husky init`)
    pub fn exec_command(&self, command: &str) -> String {
        format!("{} {}", self.exec, command)
    }
}

/// Run a shell command in `cwd`, inheriting stdio. Returns whether the
/// command exited successfully; spawn failures are real errors.
pub async fn run_shell(command: &str, cwd: &Path) -> Result<bool> {
    let status = TokioCommand::new("sh")
        .arg("-c")
        .arg(command)
        .current_dir(cwd)
        .status()
        .await
        .with_context(|| format!("Failed to run: {command}"))?;

    Ok(status.success())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_returns_known_runner() {
        let runner = PackageRunner::detect();
        assert!(RUNNERS.iter().any(|r| r.name == runner.name));
    }

    #[test]
    fn test_install_dev_command_lists_packages() {
        let npm = &RUNNERS[1];
        let cmd = npm.install_dev_command(&["eslint", "prettier"]);
        assert_eq!(cmd, "npm install -D eslint prettier");
    }

    #[test]
    fn test_exec_command_uses_runner_prefix() {
        let bun = &RUNNERS[0];
        assert_eq!(bun.exec_command("husky init"), "bunx husky init");
    }

    #[tokio::test]
    async fn test_run_shell_reports_exit_status() {
        let cwd = std::env::temp_dir();
        assert!(run_shell("true", &cwd).await.unwrap());
        assert!(!run_shell("false", &cwd).await.unwrap());
    }
}
