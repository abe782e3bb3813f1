use chrono::{DateTime, Utc};

use crate::affordance::{select, ActionTag, Descriptor};
use crate::git::{Progress, SyncSnapshot};

/// Transient footer message.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    pub shown_at: DateTime<Utc>,
}

/// Mutable state backing the TUI.
///
/// The descriptor is never stored: it is derived from the current snapshot
/// on every render, so the toolbar can never drift out of sync with it.
pub struct AppState {
    pub repo_path: String,
    pub snapshot: SyncSnapshot,
    pub in_flight: Option<ActionTag>,
    pub status_message: Option<StatusMessage>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(repo_path: String) -> Self {
        Self {
            repo_path,
            snapshot: SyncSnapshot::default(),
            in_flight: None,
            status_message: None,
            should_quit: false,
        }
    }

    /// The toolbar control for the current snapshot.
    pub fn descriptor(&self) -> Descriptor {
        select(&self.snapshot)
    }

    /// Replace the snapshot with a freshly observed one. While an operation
    /// is in flight its progress overlay survives the refresh.
    pub fn apply_snapshot(&mut self, mut snapshot: SyncSnapshot) {
        if self.in_flight.is_some() {
            snapshot.progress = self.snapshot.progress.clone();
            snapshot.network_action_in_progress = true;
        }
        self.snapshot = snapshot;
    }

    /// Overlay the snapshot with an in-flight operation.
    pub fn begin_operation(&mut self, tag: ActionTag, title: String) {
        tracing::info!("Starting {} for {}", tag.display_name(), self.repo_path);
        self.in_flight = Some(tag);
        self.snapshot.progress = Some(Progress {
            title,
            description: None,
            value: 0.0,
        });
        self.snapshot.network_action_in_progress = true;
    }

    /// Clear the operation overlay and report the outcome in the footer.
    pub fn finish_operation(&mut self, tag: ActionTag, success: bool, message: Option<String>) {
        self.in_flight = None;
        self.snapshot.progress = None;
        self.snapshot.network_action_in_progress = false;

        let text = message.unwrap_or_else(|| {
            if success {
                format!("{} complete", tag.display_name())
            } else {
                format!("{} failed", tag.display_name())
            }
        });
        if success {
            tracing::info!("{} finished: {}", tag.display_name(), text);
        } else {
            tracing::warn!("{} failed: {}", tag.display_name(), text);
        }
        self.set_message(text, !success);
    }

    pub fn set_message(&mut self, text: String, is_error: bool) {
        self.status_message = Some(StatusMessage {
            text,
            is_error,
            shown_at: Utc::now(),
        });
    }

    /// Drop the footer message once it has been up long enough to read.
    pub fn clear_expired_message(&mut self, ttl_secs: i64) {
        if let Some(message) = &self.status_message {
            let age = Utc::now().signed_duration_since(message.shown_at);
            if age.num_seconds() >= ttl_secs {
                self.status_message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::affordance::AffordanceKind;
    use crate::git::AheadBehind;

    fn state() -> AppState {
        AppState::new("/tmp/repo".to_string())
    }

    #[test]
    fn test_descriptor_tracks_snapshot() {
        let mut state = state();
        assert_eq!(state.descriptor().kind, AffordanceKind::PublishRepo);

        state.apply_snapshot(SyncSnapshot::with_remote("origin"));
        assert_eq!(state.descriptor().kind, AffordanceKind::PublishBranch);
    }

    #[test]
    fn test_begin_operation_overlays_progress() {
        let mut state = state();
        state.apply_snapshot(SyncSnapshot::with_remote("origin"));
        state.begin_operation(ActionTag::Push, "Pushing to origin".to_string());

        let descriptor = state.descriptor();
        assert_eq!(descriptor.kind, AffordanceKind::InProgress);
        assert_eq!(descriptor.title, "Pushing to origin");
        assert!(descriptor.icon_spins);
    }

    #[test]
    fn test_refresh_during_operation_keeps_overlay() {
        let mut state = state();
        state.begin_operation(ActionTag::Fetch, "Fetching origin".to_string());

        // A background refresh lands while the fetch is still running
        let mut fresh = SyncSnapshot::with_remote("origin");
        fresh.ahead_behind = Some(AheadBehind::new(1, 0));
        state.apply_snapshot(fresh);

        assert_eq!(state.descriptor().kind, AffordanceKind::InProgress);
        assert_eq!(state.snapshot.ahead_behind, Some(AheadBehind::new(1, 0)));
    }

    #[test]
    fn test_finish_operation_clears_overlay() {
        let mut state = state();
        state.apply_snapshot(SyncSnapshot::with_remote("origin"));
        state.begin_operation(ActionTag::Push, "Pushing to origin".to_string());
        state.finish_operation(ActionTag::Push, true, None);

        assert!(state.in_flight.is_none());
        assert_ne!(state.descriptor().kind, AffordanceKind::InProgress);
        let message = state.status_message.unwrap();
        assert_eq!(message.text, "push complete");
        assert!(!message.is_error);
    }

    #[test]
    fn test_failed_operation_reports_error() {
        let mut state = state();
        state.begin_operation(ActionTag::Pull, "Pulling origin".to_string());
        state.finish_operation(ActionTag::Pull, false, Some("merge conflict".to_string()));

        let message = state.status_message.unwrap();
        assert_eq!(message.text, "merge conflict");
        assert!(message.is_error);
    }

    #[test]
    fn test_message_expiry() {
        let mut state = state();
        state.set_message("done".to_string(), false);
        state.clear_expired_message(0);
        assert!(state.status_message.is_none());
    }
}
