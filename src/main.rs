use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, poll, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use gitpulse::affordance::ActionTag;
use gitpulse::app::{Action, AppState, Config};
use gitpulse::git::{Dispatcher, GitCommandDispatcher, StatusObserver};
use gitpulse::ui::AppWidget;

const MESSAGE_TTL_SECS: i64 = 5;

#[tokio::main]
async fn main() -> Result<()> {
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/gitpulse.log")
        .ok();

    if let Some(file) = log_file {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive("gitpulse=debug".parse().unwrap()),
            )
            .with_writer(std::sync::Arc::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive("gitpulse=info".parse().unwrap()),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    tracing::info!("=== gitpulse starting ===");

    // Repository path from args or current directory
    let repo_path = std::env::args().nth(1).unwrap_or_else(|| {
        std::env::current_dir()
            .unwrap()
            .to_string_lossy()
            .to_string()
    });

    if !std::path::Path::new(&repo_path).join(".git").exists() {
        anyhow::bail!(
            "Not a git repository: {}. Please run gitpulse from a git repository.",
            repo_path
        );
    }

    let config = Config::load().unwrap_or_default();

    let observer = Arc::new(StatusObserver::new(
        &repo_path,
        config.rebase_pull_capability,
    ));
    let dispatcher = Arc::new(GitCommandDispatcher::new(&repo_path));

    let mut state = AppState::new(repo_path.clone());
    match observer.snapshot() {
        Ok(snapshot) => state.apply_snapshot(snapshot),
        Err(err) => state.set_message(format!("Status error: {}", err), true),
    }

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    // Background snapshot refresh
    {
        let observer = Arc::clone(&observer);
        let action_tx = action_tx.clone();
        let refresh_secs = config.refresh_secs.max(1);
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_secs(refresh_secs)).await;
                let observer = Arc::clone(&observer);
                let action = match tokio::task::spawn_blocking(move || observer.snapshot()).await {
                    Ok(Ok(snapshot)) => Action::SnapshotLoaded(snapshot),
                    Ok(Err(err)) => Action::SnapshotError {
                        message: err.to_string(),
                    },
                    Err(err) => Action::SnapshotError {
                        message: err.to_string(),
                    },
                };
                if action_tx.send(action).is_err() {
                    break;
                }
            }
        });
    }

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let poll_timeout = Duration::from_millis(50);
    let mut tick: u64 = 0;

    loop {
        terminal.draw(|frame| {
            AppWidget::new(&state).with_tick(tick).render(frame);
        })?;

        while let Ok(action) = action_rx.try_recv() {
            handle_action(&mut state, action, &observer, &dispatcher, &action_tx);
        }

        if poll(poll_timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(action) = action_for_key(key.code) {
                        handle_action(&mut state, action, &observer, &dispatcher, &action_tx);
                    }
                }
            }
        }

        tick = tick.wrapping_add(1);
        state.clear_expired_message(MESSAGE_TTL_SECS);

        if state.should_quit {
            break;
        }
    }

    // Terminal teardown
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("=== gitpulse exiting ===");
    Ok(())
}

fn action_for_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

fn handle_action(
    state: &mut AppState,
    action: Action,
    observer: &Arc<StatusObserver>,
    dispatcher: &Arc<GitCommandDispatcher>,
    action_tx: &mpsc::UnboundedSender<Action>,
) {
    match action {
        Action::Activate => {
            let descriptor = state.descriptor();
            if !descriptor.enabled {
                return;
            }
            if let Some(tag) = descriptor.action {
                spawn_operation(state, tag, dispatcher, action_tx);
            }
        }
        Action::Refresh => request_snapshot(observer, action_tx),
        Action::SnapshotLoaded(snapshot) => state.apply_snapshot(snapshot),
        Action::SnapshotError { message } => {
            state.set_message(format!("Status error: {}", message), true);
        }
        Action::OperationFinished {
            tag,
            success,
            message,
        } => {
            state.finish_operation(tag, success, message);
            request_snapshot(observer, action_tx);
        }
        Action::Quit => state.should_quit = true,
    }
}

fn request_snapshot(observer: &Arc<StatusObserver>, action_tx: &mpsc::UnboundedSender<Action>) {
    let observer = Arc::clone(observer);
    let action_tx = action_tx.clone();
    tokio::task::spawn_blocking(move || {
        let action = match observer.snapshot() {
            Ok(snapshot) => Action::SnapshotLoaded(snapshot),
            Err(err) => Action::SnapshotError {
                message: err.to_string(),
            },
        };
        let _ = action_tx.send(action);
    });
}

fn spawn_operation(
    state: &mut AppState,
    tag: ActionTag,
    dispatcher: &Arc<GitCommandDispatcher>,
    action_tx: &mpsc::UnboundedSender<Action>,
) {
    if state.in_flight.is_some() {
        return;
    }

    let remote = state
        .snapshot
        .remote_name
        .clone()
        .unwrap_or_else(|| "origin".to_string());
    let title = match tag {
        ActionTag::Push => format!("Pushing to {}", remote),
        ActionTag::Pull => format!("Pulling {}", remote),
        ActionTag::Fetch => format!("Fetching {}", remote),
    };
    state.begin_operation(tag, title);

    let dispatcher = Arc::clone(dispatcher);
    let action_tx = action_tx.clone();
    tokio::task::spawn_blocking(move || {
        let result = match tag {
            ActionTag::Push => dispatcher.request_push(),
            ActionTag::Pull => dispatcher.request_pull(),
            ActionTag::Fetch => dispatcher.request_fetch(),
        };
        let (success, message) = match result {
            Ok(()) => (true, None),
            Err(err) => (false, Some(err.to_string())),
        };
        let _ = action_tx.send(Action::OperationFinished {
            tag,
            success,
            message,
        });
    });
}
