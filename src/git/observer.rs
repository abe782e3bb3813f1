use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use git2::{BranchType, Repository, RepositoryState};

use crate::git::remote::is_github_url;
use crate::git::snapshot::{AheadBehind, SyncSnapshot, TipState};

/// Produces sync snapshots from a working copy.
///
/// The progress and network-activity fields are always empty here; the app
/// overlays them while a dispatched operation runs.
pub struct StatusObserver {
    repo_path: PathBuf,
    rebase_pull_capability: bool,
}

impl StatusObserver {
    pub fn new(repo_path: impl AsRef<Path>, rebase_pull_capability: bool) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
            rebase_pull_capability,
        }
    }

    /// Take a fresh snapshot of the working copy.
    pub fn snapshot(&self) -> Result<SyncSnapshot> {
        let repo = Repository::open(&self.repo_path).context("Failed to open repository")?;

        let rebase_in_progress = matches!(
            repo.state(),
            RepositoryState::Rebase
                | RepositoryState::RebaseInteractive
                | RepositoryState::RebaseMerge
        );

        let remote = primary_remote(&repo);
        let github_hosted = remote
            .as_ref()
            .and_then(|(_, url)| url.as_deref())
            .map(is_github_url)
            .unwrap_or(false);

        let snapshot = SyncSnapshot {
            ahead_behind: ahead_behind(&repo)?,
            remote_name: remote.map(|(name, _)| name),
            tip: tip_state(&repo),
            rebase_in_progress,
            pull_with_rebase: pull_with_rebase(&repo),
            rebase_pull_capability: self.rebase_pull_capability,
            network_action_in_progress: false,
            last_fetched: last_fetched(&repo),
            progress: None,
            github_hosted,
        };

        tracing::debug!(
            "Snapshot of {}: tip {:?}, remote {:?}, divergence {:?}",
            self.repo_path.display(),
            snapshot.tip,
            snapshot.remote_name,
            snapshot.ahead_behind
        );

        Ok(snapshot)
    }
}

fn tip_state(repo: &Repository) -> TipState {
    if repo.head_detached().unwrap_or(false) {
        return TipState::Detached;
    }
    // Any failure to resolve HEAD on a non-detached repo means the branch
    // has no commits yet.
    match repo.head() {
        Ok(_) => TipState::Valid,
        Err(_) => TipState::Unborn,
    }
}

fn primary_remote(repo: &Repository) -> Option<(String, Option<String>)> {
    if let Ok(remote) = repo.find_remote("origin") {
        return Some(("origin".to_string(), remote.url().map(String::from)));
    }

    let names = repo.remotes().ok()?;
    let name = names.get(0)?;
    let url = repo
        .find_remote(name)
        .ok()
        .and_then(|remote| remote.url().map(String::from));
    Some((name.to_string(), url))
}

fn ahead_behind(repo: &Repository) -> Result<Option<AheadBehind>> {
    let head = match repo.head() {
        Ok(head) => head,
        Err(_) => return Ok(None),
    };

    if !head.is_branch() {
        return Ok(None);
    }

    let branch_name = match head.shorthand() {
        Some(name) => name,
        None => return Ok(None),
    };

    let branch = repo.find_branch(branch_name, BranchType::Local)?;
    let upstream = match branch.upstream() {
        Ok(upstream) => upstream,
        Err(_) => return Ok(None), // No upstream configured
    };

    let local_oid = head.target().context("Failed to get local OID")?;
    let upstream_oid = upstream
        .get()
        .target()
        .context("Failed to get upstream OID")?;

    let (ahead, behind) = repo.graph_ahead_behind(local_oid, upstream_oid)?;

    Ok(Some(AheadBehind::new(ahead as u32, behind as u32)))
}

fn pull_with_rebase(repo: &Repository) -> Option<bool> {
    let config = repo.config().ok()?;
    config.get_bool("pull.rebase").ok()
}

fn last_fetched(repo: &Repository) -> Option<DateTime<Utc>> {
    let fetch_head = repo.path().join("FETCH_HEAD");
    let modified = std::fs::metadata(fetch_head).ok()?.modified().ok()?;
    Some(DateTime::<Utc>::from(modified))
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Signature;
    use tempfile::TempDir;

    fn init_repo() -> (TempDir, Repository) {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        (dir, repo)
    }

    fn commit(repo: &Repository, message: &str) -> git2::Oid {
        let sig = Signature::now("tester", "tester@example.com").unwrap();
        let tree_id = {
            let mut index = repo.index().unwrap();
            index.write_tree().unwrap()
        };
        let tree = repo.find_tree(tree_id).unwrap();
        let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
        match parent {
            Some(parent) => repo
                .commit(Some("HEAD"), &sig, &sig, message, &tree, &[&parent])
                .unwrap(),
            None => repo
                .commit(Some("HEAD"), &sig, &sig, message, &tree, &[])
                .unwrap(),
        }
    }

    #[test]
    fn test_unborn_repository() {
        let (dir, _repo) = init_repo();
        let snapshot = StatusObserver::new(dir.path(), true).snapshot().unwrap();
        assert_eq!(snapshot.tip, TipState::Unborn);
        assert!(snapshot.remote_name.is_none());
        assert!(snapshot.ahead_behind.is_none());
        assert!(snapshot.last_fetched.is_none());
        assert!(snapshot.progress.is_none());
    }

    #[test]
    fn test_valid_tip_after_first_commit() {
        let (dir, repo) = init_repo();
        commit(&repo, "initial");
        let snapshot = StatusObserver::new(dir.path(), true).snapshot().unwrap();
        assert_eq!(snapshot.tip, TipState::Valid);
        // No upstream configured, so divergence is unknown
        assert!(snapshot.ahead_behind.is_none());
    }

    #[test]
    fn test_detached_head() {
        let (dir, repo) = init_repo();
        let oid = commit(&repo, "initial");
        repo.set_head_detached(oid).unwrap();
        let snapshot = StatusObserver::new(dir.path(), true).snapshot().unwrap();
        assert_eq!(snapshot.tip, TipState::Detached);
    }

    #[test]
    fn test_github_remote_identity() {
        let (dir, repo) = init_repo();
        repo.remote("origin", "git@github.com:octo/widgets.git")
            .unwrap();
        let snapshot = StatusObserver::new(dir.path(), true).snapshot().unwrap();
        assert_eq!(snapshot.remote_name, Some("origin".to_string()));
        assert!(snapshot.github_hosted);
    }

    #[test]
    fn test_non_github_remote() {
        let (dir, repo) = init_repo();
        repo.remote("origin", "https://gitlab.com/octo/widgets.git")
            .unwrap();
        let snapshot = StatusObserver::new(dir.path(), true).snapshot().unwrap();
        assert_eq!(snapshot.remote_name, Some("origin".to_string()));
        assert!(!snapshot.github_hosted);
    }

    #[test]
    fn test_pull_rebase_preference() {
        let (dir, repo) = init_repo();
        repo.config().unwrap().set_bool("pull.rebase", true).unwrap();
        let snapshot = StatusObserver::new(dir.path(), false).snapshot().unwrap();
        assert_eq!(snapshot.pull_with_rebase, Some(true));
        assert!(!snapshot.rebase_pull_capability);
    }

    #[test]
    fn test_ahead_of_upstream() {
        let (dir, repo) = init_repo();
        commit(&repo, "initial");

        // Mark the upstream position with a local branch, then advance HEAD
        {
            let head_commit = repo.head().unwrap().peel_to_commit().unwrap();
            repo.branch("upstream-marker", &head_commit, false).unwrap();
        }
        commit(&repo, "second");
        {
            let name = repo.head().unwrap().shorthand().unwrap().to_string();
            let mut branch = repo.find_branch(&name, BranchType::Local).unwrap();
            branch.set_upstream(Some("upstream-marker")).unwrap();
        }

        let snapshot = StatusObserver::new(dir.path(), true).snapshot().unwrap();
        assert_eq!(snapshot.ahead_behind, Some(AheadBehind::new(1, 0)));
    }
}
