pub mod dispatch;
pub mod observer;
pub mod remote;
pub mod snapshot;

pub use dispatch::{Dispatcher, GitCommandDispatcher};
pub use observer::StatusObserver;
pub use remote::{host_from_url, is_github_host, is_github_url};
pub use snapshot::{AheadBehind, Progress, SyncSnapshot, TipState};
