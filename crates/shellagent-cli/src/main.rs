//! Shellagent CLI - terminal dashboard for the Crab-01 trading agent
//!
//! ```bash
//! # Live dashboard (default command)
//! shellagent
//!
//! # No wallet injected: connect logs an error and opens the install page
//! SHELLAGENT_WALLET=none shellagent dashboard
//!
//! # One thought from the model
//! GEMINI_API_KEY=... shellagent thought --context "whale wallets rotating into PUNCH"
//!
//! # Replay a minute of simulator activity without waiting
//! shellagent snapshot --seconds 60 --seed 7
//! ```

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use shellagent_core::StateConfig;
use shellagent_engine::{DashboardEngine, EngineConfig};
use shellagent_llm::ThoughtGenerator;
use shellagent_types::LOG_CAPACITY;
use shellagent_wallet::{InjectedWallet, SystemLinkOpener, WalletKind};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod display;

/// Shellagent - autonomous intelligence dashboard for Solana meme coins
#[derive(Parser)]
#[command(name = "shellagent")]
#[command(version)]
#[command(about = "Simulated market scanner, activity log and Phantom connect in your terminal", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(flatten)]
    dashboard: DashboardArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Debug, Clone)]
struct DashboardArgs {
    /// Injected wallet: phantom, reject or none
    #[arg(
        long,
        global = true,
        env = "SHELLAGENT_WALLET",
        default_value = "phantom",
        value_parser = parse_wallet_kind
    )]
    wallet: WalletKind,

    /// Label the simulated Phantom derives its key from
    #[arg(long, global = true, env = "SHELLAGENT_WALLET_LABEL", default_value = "crab-01")]
    wallet_label: String,

    /// How long the simulated Phantom waits before answering (ms)
    #[arg(long, global = true, env = "SHELLAGENT_APPROVAL_MS", default_value_t = 1200)]
    approval_ms: u64,

    /// Token ticker period (ms)
    #[arg(
        long,
        global = true,
        env = "SHELLAGENT_TICKER_MS",
        default_value_t = 3000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    ticker_ms: u64,

    /// Activity log period (ms)
    #[arg(
        long,
        global = true,
        env = "SHELLAGENT_LOG_MS",
        default_value_t = 4000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    log_ms: u64,

    /// Entries kept in the activity log
    #[arg(long, global = true, env = "SHELLAGENT_LOG_CAPACITY", default_value_t = LOG_CAPACITY)]
    log_capacity: usize,

    /// Seed for reproducible simulator runs
    #[arg(long, global = true, env = "SHELLAGENT_SEED")]
    seed: Option<u64>,

    /// Where diagnostics go while the dashboard owns the terminal
    #[arg(long, global = true, env = "SHELLAGENT_LOG_FILE", default_value = "shellagent.log")]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the terminal dashboard
    Dashboard,

    /// Ask the model for one Crab-01 thought
    Thought {
        /// Market context embedded in the prompt
        #[arg(short, long)]
        context: String,

        /// Model to ask instead of the provider default
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Replay simulator timers headlessly and print the result
    Snapshot {
        /// Simulated seconds since mount
        #[arg(short, long, default_value_t = 12)]
        seconds: u64,

        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_wallet_kind(s: &str) -> Result<WalletKind, String> {
    WalletKind::from_str(s)
        .ok_or_else(|| format!("unknown wallet '{s}' (expected phantom, reject or none)"))
}

impl DashboardArgs {
    fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            ticker_period: Duration::from_millis(self.ticker_ms),
            log_period: Duration::from_millis(self.log_ms),
            state: StateConfig {
                log_capacity: self.log_capacity,
                seed: self.seed,
                ..StateConfig::default()
            },
        }
    }

    fn injected_wallet(&self) -> InjectedWallet {
        InjectedWallet::from_kind(
            self.wallet,
            &self.wallet_label,
            Duration::from_millis(self.approval_ms),
        )
    }

    fn engine(&self) -> DashboardEngine {
        DashboardEngine::new(
            self.engine_config(),
            self.injected_wallet(),
            Arc::new(SystemLinkOpener),
        )
    }
}

/// Install the global subscriber. With a file, output goes there without colour.
fn init_logging(file: Option<&Path>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    match file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None => {
            registry
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    let args = cli.dashboard;

    match cli.command.unwrap_or(Commands::Dashboard) {
        Commands::Dashboard => {
            init_logging(Some(&args.log_file))?;
            tracing::info!(wallet = %args.wallet, seed = ?args.seed, "starting dashboard");
            shellagent_tui::run_dashboard_tui(args.engine()).await?;
            tracing::info!("dashboard closed");
        }
        Commands::Thought { context, model } => {
            init_logging(None)?;
            let thought = ThoughtGenerator::from_env()
                .with_model(model)
                .generate(&context)
                .await;
            println!("{thought}");
        }
        Commands::Snapshot { seconds, json } => {
            init_logging(None)?;
            let engine = args.engine();
            let fired = engine.fast_forward(Duration::from_secs(seconds)).await;
            let snapshot = engine.snapshot().await;

            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                display::section(&format!(
                    "Market Scanner after {seconds}s ({fired} timer events)"
                ));
                display::tokens(&snapshot.tokens);
                display::section("System Log");
                display::logs(&snapshot.logs);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_timers() {
        let cli = Cli::try_parse_from(["shellagent"]).unwrap();
        assert!(cli.command.is_none());
        let config = cli.dashboard.engine_config();
        assert_eq!(config.ticker_period, Duration::from_secs(3));
        assert_eq!(config.log_period, Duration::from_secs(4));
        assert_eq!(config.state.log_capacity, LOG_CAPACITY);
    }

    #[test]
    fn wallet_flag_selects_provider() {
        let cli = Cli::try_parse_from(["shellagent", "--wallet", "none", "dashboard"]).unwrap();
        assert_eq!(cli.dashboard.wallet, WalletKind::None);
        assert!(cli.dashboard.injected_wallet().phantom().is_none());

        assert!(Cli::try_parse_from(["shellagent", "--wallet", "metamask"]).is_err());
    }

    #[test]
    fn zero_timer_periods_are_rejected() {
        assert!(Cli::try_parse_from(["shellagent", "--ticker-ms", "0"]).is_err());
        assert!(Cli::try_parse_from(["shellagent", "snapshot", "--log-ms", "0"]).is_err());

        let cli =
            Cli::try_parse_from(["shellagent", "--ticker-ms", "1", "--log-ms", "250"]).unwrap();
        let config = cli.dashboard.engine_config();
        assert_eq!(config.ticker_period, Duration::from_millis(1));
        assert_eq!(config.log_period, Duration::from_millis(250));
    }

    #[test]
    fn thought_accepts_model_override() {
        let cli = Cli::try_parse_from([
            "shellagent",
            "thought",
            "-c",
            "idle market",
            "-m",
            "gemini-x",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Thought { context, model }) => {
                assert_eq!(context, "idle market");
                assert_eq!(model.as_deref(), Some("gemini-x"));
            }
            _ => panic!("expected thought command"),
        }
    }

    #[test]
    fn snapshot_flags_parse() {
        let cli = Cli::try_parse_from([
            "shellagent", "snapshot", "--seconds", "60", "--json", "--seed", "7",
        ])
        .unwrap();
        assert_eq!(cli.dashboard.seed, Some(7));
        match cli.command {
            Some(Commands::Snapshot { seconds, json }) => {
                assert_eq!(seconds, 60);
                assert!(json);
            }
            _ => panic!("expected snapshot command"),
        }
    }
}
