use anyhow::Context;
use std::path::Path;
use std::process::{Command, Stdio};

/// Commit message used by `--commit`, kept within git's 50 character summary
pub const COMMIT_MESSAGE: &str = "Sort import statements with simp";

#[derive(Debug)]
pub struct Git {
    path: Box<Path>,
}

impl Git {
    pub fn new(path: Box<Path>) -> Self {
        Git { path }
    }

    fn command(&self, args: &[&str]) -> Command {
        tracing::debug!(?args, "running git");
        let mut cmd = Command::new("git");
        cmd.current_dir(&self.path).args(args);
        cmd
    }

    /// Whether the working tree has no changes against `HEAD`.
    ///
    /// Outside a repository, or before the first commit, this reports `false`.
    pub fn is_clean(&self) -> anyhow::Result<bool> {
        let status = self
            .command(&["diff-index", "--quiet", "HEAD", "--"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .context("Unable to run git diff-index")?;

        Ok(status.success())
    }

    /// Commits every tracked change and returns what git printed.
    pub fn commit_all(&self, message: &str) -> anyhow::Result<String> {
        let output = self
            .command(&["commit", "-am", message])
            .output()
            .context("Unable to run git commit")?;

        if !output.status.success() {
            anyhow::bail!(
                "git commit failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
