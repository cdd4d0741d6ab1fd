//! Shellagent Engine - the dashboard view controller
//!
//! Owns the [`DashboardState`] behind one async mutex, runs the ticker and log
//! simulators as cancellable interval tasks between [`DashboardEngine::mount`]
//! and [`DashboardEngine::unmount`], and bridges the wallet connect flow.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use shellagent_core::{DashboardEvent, DashboardSnapshot, DashboardState, Outcome, StateConfig};
use shellagent_wallet::{connect_phantom, ConnectOutcome, InjectedWallet, LinkOpener};
use thiserror::Error;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

pub const DEFAULT_TICKER_PERIOD: Duration = Duration::from_secs(3);
pub const DEFAULT_LOG_PERIOD: Duration = Duration::from_secs(4);

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("dashboard is already mounted")]
    AlreadyMounted,
    #[error("dashboard is not mounted")]
    NotMounted,
    #[error("{timer} period must be non-zero")]
    InvalidPeriod { timer: &'static str },
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub ticker_period: Duration,
    pub log_period: Duration,
    pub state: StateConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ticker_period: DEFAULT_TICKER_PERIOD,
            log_period: DEFAULT_LOG_PERIOD,
            state: StateConfig::default(),
        }
    }
}

/// Timer tasks of one mount. Dropping the set aborts whatever is still running.
#[derive(Default)]
struct TimerSet {
    handles: Vec<JoinHandle<()>>,
}

impl Drop for TimerSet {
    fn drop(&mut self) {
        for handle in &self.handles {
            handle.abort();
        }
    }
}

/// State plus the side-effect sinks; the part timer tasks hold on to.
struct Shared {
    state: Mutex<DashboardState>,
    opener: Arc<dyn LinkOpener>,
    revision: watch::Sender<u64>,
}

impl Shared {
    async fn dispatch(&self, event: DashboardEvent) -> Outcome {
        let outcome = self.state.lock().await.apply(event);

        if let Outcome::OpenLink(url) = &outcome {
            if let Err(e) = self.opener.open(url) {
                tracing::warn!(error = %e, "could not open link");
            }
        }
        if outcome != Outcome::Unchanged {
            self.revision.send_modify(|rev| *rev += 1);
        }
        outcome
    }
}

/// Owns the dashboard state and the two simulator timers.
#[derive(Clone)]
pub struct DashboardEngine {
    shared: Arc<Shared>,
    config: EngineConfig,
    wallet: InjectedWallet,
    mounted: Arc<AtomicBool>,
    timers: Arc<Mutex<TimerSet>>,
    stop_tx: Arc<Mutex<Option<watch::Sender<bool>>>>,
}

impl DashboardEngine {
    pub fn new(config: EngineConfig, wallet: InjectedWallet, opener: Arc<dyn LinkOpener>) -> Self {
        let state = DashboardState::new(config.state.clone());
        let (revision, _) = watch::channel(0);
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(state),
                opener,
                revision,
            }),
            config,
            wallet,
            mounted: Arc::new(AtomicBool::new(false)),
            timers: Arc::new(Mutex::new(TimerSet::default())),
            stop_tx: Arc::new(Mutex::new(None)),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Relaxed)
    }

    /// Receiver that changes every time the state does.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.shared.revision.subscribe()
    }

    /// Start the ticker and log timers.
    pub async fn mount(&self) -> Result<(), EngineError> {
        if self.is_mounted() {
            return Err(EngineError::AlreadyMounted);
        }
        if self.config.ticker_period.is_zero() {
            return Err(EngineError::InvalidPeriod { timer: "ticker" });
        }
        if self.config.log_period.is_zero() {
            return Err(EngineError::InvalidPeriod { timer: "log" });
        }

        let (stop_tx, stop_rx) = watch::channel(false);
        *self.stop_tx.lock().await = Some(stop_tx);
        self.mounted.store(true, Ordering::Relaxed);

        let ticker = self.spawn_timer(
            "ticker",
            self.config.ticker_period,
            DashboardEvent::TokenTick,
            stop_rx.clone(),
        );
        let log = self.spawn_timer(
            "log",
            self.config.log_period,
            DashboardEvent::ScanTick,
            stop_rx,
        );
        self.timers.lock().await.handles = vec![ticker, log];

        tracing::info!(
            ticker_ms = self.config.ticker_period.as_millis() as u64,
            log_ms = self.config.log_period.as_millis() as u64,
            "dashboard mounted"
        );
        Ok(())
    }

    /// Cancel both timers and wait for them to exit.
    pub async fn unmount(&self) -> Result<(), EngineError> {
        if !self.is_mounted() {
            return Err(EngineError::NotMounted);
        }

        if let Some(stop_tx) = self.stop_tx.lock().await.take() {
            let _ = stop_tx.send(true);
        }
        let handles = std::mem::take(&mut self.timers.lock().await.handles);
        for handle in handles {
            let _ = handle.await;
        }

        self.mounted.store(false, Ordering::Relaxed);
        tracing::info!("dashboard unmounted");
        Ok(())
    }

    fn spawn_timer(
        &self,
        name: &'static str,
        period: Duration,
        event: DashboardEvent,
        mut stop_rx: watch::Receiver<bool>,
    ) -> JoinHandle<()> {
        let shared = self.shared.clone();
        tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = stop_rx.changed() => break,
                    _ = interval.tick() => {
                        shared.dispatch(event.clone()).await;
                    }
                }
            }
            tracing::debug!(timer = name, "timer stopped");
        })
    }

    /// Apply one event and perform the side effect it asks for.
    pub async fn dispatch(&self, event: DashboardEvent) -> Outcome {
        self.shared.dispatch(event).await
    }

    pub async fn toggle_autonomous(&self) -> Outcome {
        self.dispatch(DashboardEvent::ToggleAutonomous).await
    }

    pub async fn toggle_scanning(&self) -> Outcome {
        self.dispatch(DashboardEvent::ToggleScanning).await
    }

    pub async fn dismiss_welcome(&self) -> Outcome {
        self.dispatch(DashboardEvent::DismissWelcome).await
    }

    /// Run the Phantom connect flow and record its result.
    ///
    /// The state lock is not held while the provider waits for approval.
    pub async fn connect_wallet(&self) -> ConnectOutcome {
        let outcome = connect_phantom(&self.wallet).await;
        let event = match &outcome {
            ConnectOutcome::Connected(address) => DashboardEvent::WalletConnected {
                public_key: address.as_str().to_string(),
            },
            ConnectOutcome::NotFound => DashboardEvent::WalletNotFound,
            ConnectOutcome::Failed { reason } => DashboardEvent::WalletFailed {
                reason: reason.clone(),
            },
        };
        self.dispatch(event).await;
        outcome
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        self.shared.state.lock().await.snapshot()
    }

    /// Replay `elapsed` of timer activity without waiting for it.
    pub async fn fast_forward(&self, elapsed: Duration) -> usize {
        let events = timeline(elapsed, self.config.ticker_period, self.config.log_period);
        let fired = events.len();
        for event in events {
            self.dispatch(event).await;
        }
        fired
    }
}

/// Timer events that would fire within `elapsed`, in firing order.
///
/// When both timers fire at the same instant the ticker goes first. A zero
/// period never fires.
pub fn timeline(elapsed: Duration, ticker: Duration, log: Duration) -> Vec<DashboardEvent> {
    let due = |next: Option<Duration>| next.filter(|at| *at <= elapsed);
    let mut next_tick = Some(ticker).filter(|p| !p.is_zero());
    let mut next_log = Some(log).filter(|p| !p.is_zero());
    let mut out = Vec::new();

    loop {
        match (due(next_tick), due(next_log)) {
            (Some(t), Some(l)) if t <= l => {
                out.push(DashboardEvent::TokenTick);
                next_tick = Some(t + ticker);
            }
            (_, Some(l)) => {
                out.push(DashboardEvent::ScanTick);
                next_log = Some(l + log);
            }
            (Some(t), None) => {
                out.push(DashboardEvent::TokenTick);
                next_tick = Some(t + ticker);
            }
            (None, None) => break,
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_orders_both_timers() {
        let events = timeline(
            Duration::from_secs(12),
            DEFAULT_TICKER_PERIOD,
            DEFAULT_LOG_PERIOD,
        );
        use DashboardEvent::{ScanTick as L, TokenTick as T};
        // 3 4 6 8 9 12(T) 12(L)
        assert_eq!(events, vec![T, L, T, L, T, T, L]);
    }

    #[test]
    fn timeline_is_empty_before_first_period() {
        let early = timeline(Duration::from_secs(2), DEFAULT_TICKER_PERIOD, DEFAULT_LOG_PERIOD);
        assert!(early.is_empty());
        assert!(timeline(Duration::from_secs(60), Duration::ZERO, Duration::ZERO).is_empty());
    }

    #[test]
    fn zero_period_silences_only_its_own_timer() {
        let scans = timeline(Duration::from_secs(12), Duration::ZERO, DEFAULT_LOG_PERIOD);
        assert_eq!(scans, vec![DashboardEvent::ScanTick; 3]);

        let ticks = timeline(Duration::from_secs(9), DEFAULT_TICKER_PERIOD, Duration::ZERO);
        assert_eq!(ticks, vec![DashboardEvent::TokenTick; 3]);
    }
}
