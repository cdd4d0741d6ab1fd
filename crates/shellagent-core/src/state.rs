//! Dashboard view state and its transitions

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use shellagent_types::{seed_tokens, LogEntry, LogKind, TokenRow, WalletAddress, LOG_CAPACITY};

use crate::buffer::LogBuffer;
use crate::scan::{next_scan_message, BOOT_MESSAGES};
use crate::ticker::jitter_tokens;

/// Install page opened when no wallet provider is injected.
pub const PHANTOM_INSTALL_URL: &str = "https://phantom.app/";

pub const WALLET_NOT_FOUND_MESSAGE: &str = "Phantom wallet not found. Please install the extension.";
pub const WALLET_FAILED_MESSAGE: &str = "Connection to Phantom failed.";

/// Settings for a fresh dashboard state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    pub log_capacity: usize,
    /// Seed for the simulators; `None` draws one from the OS.
    pub seed: Option<u64>,
    pub scanning: bool,
    pub show_welcome: bool,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            log_capacity: LOG_CAPACITY,
            seed: None,
            scanning: true,
            show_welcome: true,
        }
    }
}

/// A discrete change to the dashboard
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    /// Ticker timer fired
    TokenTick,
    /// Log timer fired
    ScanTick,
    ToggleAutonomous,
    ToggleScanning,
    DismissWelcome,
    WalletConnected { public_key: String },
    WalletNotFound,
    WalletFailed { reason: String },
}

/// What a transition did, for callers that need to react
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    TokensUpdated,
    Logged,
    FlagChanged,
    /// The view should open this URL in a new browsing context.
    OpenLink(String),
}

/// Everything the dashboard view owns
#[derive(Debug)]
pub struct DashboardState {
    tokens: Vec<TokenRow>,
    logs: LogBuffer,
    wallet: Option<WalletAddress>,
    autonomous: bool,
    scanning: bool,
    show_welcome: bool,
    mounted_at: DateTime<Utc>,
    rng: StdRng,
}

impl DashboardState {
    /// Mount a new dashboard: seed market, boot log lines, toggles.
    pub fn new(config: StateConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut logs = LogBuffer::new(config.log_capacity);
        for message in BOOT_MESSAGES {
            logs.push(message, LogKind::Info);
        }

        Self {
            tokens: seed_tokens(),
            logs,
            wallet: None,
            autonomous: false,
            scanning: config.scanning,
            show_welcome: config.show_welcome,
            mounted_at: Utc::now(),
            rng,
        }
    }

    /// Apply one event.
    pub fn apply(&mut self, event: DashboardEvent) -> Outcome {
        match event {
            DashboardEvent::TokenTick => {
                self.tokens = jitter_tokens(&mut self.rng, &self.tokens);
                Outcome::TokensUpdated
            }
            DashboardEvent::ScanTick => {
                if !self.scanning {
                    return Outcome::Unchanged;
                }
                let message = next_scan_message(&mut self.rng);
                self.logs.push(message, LogKind::Scan);
                Outcome::Logged
            }
            DashboardEvent::ToggleAutonomous => {
                self.autonomous = !self.autonomous;
                tracing::debug!(autonomous = self.autonomous, "autonomous mode toggled");
                Outcome::FlagChanged
            }
            DashboardEvent::ToggleScanning => {
                self.scanning = !self.scanning;
                tracing::debug!(scanning = self.scanning, "scanning toggled");
                Outcome::FlagChanged
            }
            DashboardEvent::DismissWelcome => {
                if !self.show_welcome {
                    return Outcome::Unchanged;
                }
                self.show_welcome = false;
                Outcome::FlagChanged
            }
            DashboardEvent::WalletConnected { public_key } => {
                let address = WalletAddress::new(public_key);
                self.logs.push(
                    format!("Phantom wallet connected: {}", address.short()),
                    LogKind::Success,
                );
                self.wallet = Some(address);
                Outcome::Logged
            }
            DashboardEvent::WalletNotFound => {
                self.logs.push(WALLET_NOT_FOUND_MESSAGE, LogKind::Error);
                Outcome::OpenLink(PHANTOM_INSTALL_URL.to_string())
            }
            DashboardEvent::WalletFailed { reason } => {
                tracing::error!(%reason, "wallet connection failed");
                self.logs.push(WALLET_FAILED_MESSAGE, LogKind::Error);
                Outcome::Logged
            }
        }
    }

    pub fn tokens(&self) -> &[TokenRow] {
        &self.tokens
    }

    pub fn logs(&self) -> &LogBuffer {
        &self.logs
    }

    pub fn wallet(&self) -> Option<&WalletAddress> {
        self.wallet.as_ref()
    }

    pub fn is_autonomous(&self) -> bool {
        self.autonomous
    }

    pub fn is_scanning(&self) -> bool {
        self.scanning
    }

    pub fn show_welcome(&self) -> bool {
        self.show_welcome
    }

    /// Owned copy of what the view needs to draw one frame.
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            tokens: self.tokens.clone(),
            logs: self.logs.to_vec(),
            wallet: self.wallet.clone(),
            autonomous: self.autonomous,
            scanning: self.scanning,
            show_welcome: self.show_welcome,
            mounted_at: self.mounted_at,
        }
    }
}

/// Frozen copy of the dashboard state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub tokens: Vec<TokenRow>,
    pub logs: Vec<LogEntry>,
    pub wallet: Option<WalletAddress>,
    pub autonomous: bool,
    pub scanning: bool,
    pub show_welcome: bool,
    pub mounted_at: DateTime<Utc>,
}

impl DashboardSnapshot {
    /// Elapsed time since mount as `HHH:MM:SS`.
    pub fn uptime(&self, now: DateTime<Utc>) -> String {
        let secs = (now - self.mounted_at).num_seconds().max(0);
        format!("{:03}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
    }

    pub fn status_label(&self) -> &'static str {
        if self.autonomous {
            "Autonomous Mode Active"
        } else {
            "Manual / Training Mode"
        }
    }
}
