use crate::affordance::ActionTag;
use crate::git::SyncSnapshot;

/// Events flowing through the app channel.
#[derive(Debug, Clone)]
pub enum Action {
    /// User activated the toolbar control
    Activate,
    /// Force a snapshot refresh
    Refresh,
    SnapshotLoaded(SyncSnapshot),
    SnapshotError {
        message: String,
    },
    OperationFinished {
        tag: ActionTag,
        success: bool,
        message: Option<String>,
    },
    Quit,
}
