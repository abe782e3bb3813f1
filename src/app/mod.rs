pub mod action;
pub mod config;
pub mod state;

pub use action::Action;
pub use config::Config;
pub use state::{AppState, StatusMessage};
