use crate::affordance::descriptor::{ActionTag, AffordanceKind, Badge, Descriptor, Icon};
use crate::git::{Progress, SyncSnapshot, TipState};
use crate::util::format_last_fetched;

/// Classify a status snapshot into the single toolbar control to show.
///
/// The checks are ordered and short-circuiting; each arm assumes every
/// earlier condition failed. Total over all inputs, no side effects.
pub fn select(snapshot: &SyncSnapshot) -> Descriptor {
    if let Some(progress) = &snapshot.progress {
        return in_progress(progress, snapshot.network_action_in_progress);
    }

    let remote = match &snapshot.remote_name {
        Some(name) => name.as_str(),
        None => return publish_repo(),
    };

    match snapshot.tip {
        TipState::Unborn => return unborn_branch(),
        TipState::Detached => return detached_head(snapshot.rebase_in_progress),
        TipState::Valid => {}
    }

    let counts = match snapshot.ahead_behind {
        Some(counts) => counts,
        None => return publish_branch(snapshot.github_hosted),
    };

    if counts.is_in_sync() {
        return fetch(remote, snapshot);
    }

    // A branch that is both ahead and behind must pull first; push only
    // remains once behind is ruled out.
    if counts.behind > 0 {
        pull(remote, snapshot)
    } else {
        push(remote, snapshot)
    }
}

fn in_progress(progress: &Progress, network_active: bool) -> Descriptor {
    let mut descriptor = Descriptor::inert(
        AffordanceKind::InProgress,
        progress.title.clone(),
        progress.description.clone().unwrap_or_default(),
        Icon::Refresh,
    );
    descriptor.icon_spins = network_active;
    descriptor.progress_value = Some(progress.value.clamp(0.0, 1.0));
    descriptor
}

fn publish_repo() -> Descriptor {
    Descriptor::interactive(
        AffordanceKind::PublishRepo,
        "Publish repository".to_string(),
        "Publish this repository to a remote host".to_string(),
        Icon::CloudUpload,
        ActionTag::Push,
    )
}

fn unborn_branch() -> Descriptor {
    Descriptor::inert(
        AffordanceKind::PublishBranchDisabled,
        "Publish branch".to_string(),
        "There are no commits to publish yet".to_string(),
        Icon::CloudUpload,
    )
}

fn detached_head(rebase_in_progress: bool) -> Descriptor {
    let description = if rebase_in_progress {
        "A rebase is in progress, complete it before publishing"
    } else {
        "HEAD is detached, check out a branch to publish"
    };
    Descriptor::inert(
        AffordanceKind::PublishBranchDisabled,
        "Publish branch".to_string(),
        description.to_string(),
        Icon::CloudUpload,
    )
}

fn publish_branch(github_hosted: bool) -> Descriptor {
    let description = if github_hosted {
        "Publish this branch to GitHub"
    } else {
        "Publish this branch to the remote"
    };
    Descriptor::interactive(
        AffordanceKind::PublishBranch,
        "Publish branch".to_string(),
        description.to_string(),
        Icon::CloudUpload,
        ActionTag::Push,
    )
}

fn fetch(remote: &str, snapshot: &SyncSnapshot) -> Descriptor {
    Descriptor::interactive(
        AffordanceKind::Fetch,
        format!("Fetch {}", remote),
        format_last_fetched(snapshot.last_fetched),
        Icon::Refresh,
        ActionTag::Fetch,
    )
}

fn pull(remote: &str, snapshot: &SyncSnapshot) -> Descriptor {
    let rebase = snapshot.rebase_pull_capability && snapshot.pull_with_rebase == Some(true);
    let title = if rebase {
        format!("Pull {} with rebase", remote)
    } else {
        format!("Pull {}", remote)
    };
    Descriptor::interactive(
        AffordanceKind::Pull,
        title,
        format_last_fetched(snapshot.last_fetched),
        Icon::ArrowDown,
        ActionTag::Pull,
    )
    .with_badge(Badge::from_counts(snapshot.ahead_behind, false))
}

fn push(remote: &str, snapshot: &SyncSnapshot) -> Descriptor {
    Descriptor::interactive(
        AffordanceKind::Push,
        format!("Push {}", remote),
        format_last_fetched(snapshot.last_fetched),
        Icon::ArrowUp,
        ActionTag::Push,
    )
    .with_badge(Badge::from_counts(snapshot.ahead_behind, false))
}
