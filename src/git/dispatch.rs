use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};

/// The operations the toolbar control can trigger.
///
/// The affordance selector only names which trigger applies; the host binds
/// an activated descriptor to one of these. Completion is observed through a
/// later snapshot, never awaited here.
pub trait Dispatcher {
    fn request_push(&self) -> Result<()>;
    fn request_pull(&self) -> Result<()>;
    fn request_fetch(&self) -> Result<()>;
}

/// Dispatcher that shells out to the `git` binary in the working copy.
pub struct GitCommandDispatcher {
    repo_path: PathBuf,
}

impl GitCommandDispatcher {
    pub fn new(repo_path: impl AsRef<Path>) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<()> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .with_context(|| format!("Failed to execute git {}", args.join(" ")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("git {} failed: {}", args[0], stderr.trim());
        }

        Ok(())
    }
}

impl Dispatcher for GitCommandDispatcher {
    fn request_push(&self) -> Result<()> {
        tracing::info!("Pushing {}", self.repo_path.display());
        self.run(&["push"])
    }

    fn request_pull(&self) -> Result<()> {
        tracing::info!("Pulling {}", self.repo_path.display());
        self.run(&["pull"])
    }

    fn request_fetch(&self) -> Result<()> {
        tracing::info!("Fetching {}", self.repo_path.display());
        self.run(&["fetch", "--all", "--prune"])
    }
}
