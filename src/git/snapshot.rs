use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where HEAD currently points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TipState {
    /// HEAD is on a branch with at least one commit.
    #[default]
    Valid,
    /// The branch reference exists but has no commits yet.
    Unborn,
    /// HEAD points directly at a commit rather than a branch.
    Detached,
}

/// Commit counts relative to the upstream tracking branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AheadBehind {
    /// Commits ahead of the upstream branch
    pub ahead: u32,
    /// Commits behind the upstream branch
    pub behind: u32,
}

impl AheadBehind {
    pub fn new(ahead: u32, behind: u32) -> Self {
        Self { ahead, behind }
    }

    pub fn is_in_sync(&self) -> bool {
        self.ahead == 0 && self.behind == 0
    }

    pub fn format_short(&self) -> String {
        format!("↑{} ↓{}", self.ahead, self.behind)
    }
}

/// A long-running operation the host is currently executing against the
/// remote. While one of these is present it preempts every other state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// Operation headline, shown verbatim
    pub title: String,
    /// Optional detail line, shown verbatim
    pub description: Option<String>,
    /// Completion fraction in [0, 1]
    pub value: f32,
}

/// The sync state of a working copy relative to its remote, captured at a
/// single point in time.
///
/// A snapshot is supplied fresh on every status change; nothing in here is
/// mutated after capture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncSnapshot {
    /// Divergence from the upstream branch, `None` when no upstream is
    /// configured
    pub ahead_behind: Option<AheadBehind>,
    /// Name of the remote, `None` when the repository has never been
    /// published
    pub remote_name: Option<String>,
    /// Where HEAD points
    pub tip: TipState,
    /// Whether a rebase is underway in the working copy
    pub rebase_in_progress: bool,
    /// The user's `pull.rebase` preference, when one is set
    pub pull_with_rebase: Option<bool>,
    /// Whether the host allows pull to honor the rebase preference
    pub rebase_pull_capability: bool,
    /// Whether a network operation is currently running
    pub network_action_in_progress: bool,
    /// When the remote was last fetched
    pub last_fetched: Option<DateTime<Utc>>,
    /// In-flight operation, if any
    pub progress: Option<Progress>,
    /// Whether the remote lives on GitHub (wording only, never control flow)
    pub github_hosted: bool,
}

impl SyncSnapshot {
    /// Snapshot for a working copy that has a remote but nothing else known
    /// about it yet.
    pub fn with_remote(remote_name: &str) -> Self {
        Self {
            remote_name: Some(remote_name.to_string()),
            ..Self::default()
        }
    }
}
