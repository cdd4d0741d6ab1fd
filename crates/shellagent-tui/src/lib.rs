//! Shellagent TUI - terminal rendering of the dashboard
//!
//! Draws a [`DashboardEngine`] snapshot every frame and maps hotkeys onto
//! engine operations. The wallet connect flow runs on its own task so the
//! frame loop keeps drawing while the provider waits for approval.

pub mod view;

use std::time::Duration;

use chrono::Utc;
use crossterm::event::{self, Event as CEvent, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use shellagent_engine::{DashboardEngine, EngineError};
use shellagent_wallet::ConnectOutcome;
use thiserror::Error;
use tokio::task::JoinHandle;

pub use view::draw_ui;

const POLL_INTERVAL: Duration = Duration::from_millis(150);

#[derive(Debug, Error)]
pub enum TuiError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

/// What a key press asks the loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    DismissWelcome,
    ToggleAutonomous,
    ToggleScanning,
    ConnectWallet,
    Quit,
}

impl Action {
    /// `Esc` closes the welcome overlay first and quits only once it is gone.
    pub fn from_key(code: KeyCode, welcome_open: bool) -> Option<Self> {
        match code {
            KeyCode::Enter => Some(Self::DismissWelcome),
            KeyCode::Esc if welcome_open => Some(Self::DismissWelcome),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Self::Quit),
            KeyCode::Char('a') | KeyCode::Char('A') => Some(Self::ToggleAutonomous),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(Self::ToggleScanning),
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Self::ConnectWallet),
            _ => None,
        }
    }
}

struct TuiState {
    status_line: String,
    pending_connect: Option<JoinHandle<ConnectOutcome>>,
}

pub fn connect_status(outcome: &ConnectOutcome) -> String {
    match outcome {
        ConnectOutcome::Connected(address) => format!("wallet connected: {}", address.short()),
        ConnectOutcome::NotFound => "phantom not found, install page opened".to_string(),
        ConnectOutcome::Failed { .. } => "wallet connection failed".to_string(),
    }
}

/// Mount the engine, run the frame loop until quit, then unmount.
pub async fn run_dashboard_tui(engine: DashboardEngine) -> Result<(), TuiError> {
    engine.mount().await?;

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = TuiState {
        status_line: "dashboard mounted".to_string(),
        pending_connect: None,
    };

    let result = frame_loop(&mut terminal, &engine, &mut state).await;

    if let Some(handle) = state.pending_connect.take() {
        handle.abort();
    }
    if engine.is_mounted() {
        engine.unmount().await?;
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

async fn frame_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    engine: &DashboardEngine,
    state: &mut TuiState,
) -> Result<(), TuiError> {
    loop {
        if state.pending_connect.as_ref().is_some_and(|h| h.is_finished()) {
            if let Some(handle) = state.pending_connect.take() {
                state.status_line = match handle.await {
                    Ok(outcome) => connect_status(&outcome),
                    Err(e) => format!("connect task failed: {e}"),
                };
            }
        }

        let snapshot = engine.snapshot().await;
        terminal.draw(|frame| view::draw_ui(frame, &snapshot, Utc::now(), &state.status_line))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let CEvent::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match Action::from_key(key.code, snapshot.show_welcome) {
            Some(Action::Quit) => return Ok(()),
            Some(Action::DismissWelcome) => {
                engine.dismiss_welcome().await;
            }
            Some(Action::ToggleAutonomous) => {
                engine.toggle_autonomous().await;
            }
            Some(Action::ToggleScanning) => {
                engine.toggle_scanning().await;
                state.status_line =
                    format!("scanning {}", if snapshot.scanning { "paused" } else { "resumed" });
            }
            Some(Action::ConnectWallet) => {
                if state.pending_connect.is_some() {
                    state.status_line = "connect already pending".to_string();
                } else {
                    let engine = engine.clone();
                    state.pending_connect =
                        Some(tokio::spawn(async move { engine.connect_wallet().await }));
                    state.status_line = "awaiting wallet approval...".to_string();
                    tracing::debug!("wallet connect requested");
                }
            }
            None => {}
        }
    }
}
