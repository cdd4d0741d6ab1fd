use shellagent_core::{DashboardEvent, DashboardState, Outcome, StateConfig, PHANTOM_INSTALL_URL};
use shellagent_types::{seed_tokens, LogKind};

fn state(seed: u64) -> DashboardState {
    DashboardState::new(StateConfig {
        seed: Some(seed),
        ..StateConfig::default()
    })
}

/// One simulated hour: 1200 ticker steps and 900 scan steps.
fn run_hour(state: &mut DashboardState) {
    for second in 1..=3600u32 {
        if second % 3 == 0 {
            state.apply(DashboardEvent::TokenTick);
        }
        if second % 4 == 0 {
            state.apply(DashboardEvent::ScanTick);
        }
    }
}

#[test]
fn hour_long_session_keeps_invariants() {
    let mut state = state(2026);
    run_hour(&mut state);

    let logs = state.logs().to_vec();
    assert_eq!(logs.len(), 50);
    assert!(logs.iter().all(|e| e.kind == LogKind::Scan));
    assert!(logs.windows(2).all(|w| w[0].id < w[1].id));

    let seeded = seed_tokens();
    assert_eq!(state.tokens().len(), seeded.len());
    for (now, start) in state.tokens().iter().zip(&seeded) {
        assert_eq!(now.id, start.id);
        assert_eq!(now.ticker, start.ticker);
        assert!(now.price > 0.0);
        assert!(now.txns >= start.txns);
        assert_eq!(now.volume, start.volume);
        assert_eq!(now.mcap, start.mcap);
    }
}

#[test]
fn same_seed_same_session() {
    let mut a = state(7);
    let mut b = state(7);
    run_hour(&mut a);
    run_hour(&mut b);

    assert_eq!(a.tokens(), b.tokens());
    let messages = |s: &DashboardState| {
        s.logs()
            .iter()
            .map(|e| e.message.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(messages(&a), messages(&b));
}

#[test]
fn failed_connects_leave_session_usable() {
    let mut state = state(1);
    assert_eq!(
        state.apply(DashboardEvent::WalletNotFound),
        Outcome::OpenLink(PHANTOM_INSTALL_URL.to_string())
    );
    state.apply(DashboardEvent::WalletFailed {
        reason: "User rejected the request".into(),
    });
    assert!(state.wallet().is_none());

    state.apply(DashboardEvent::WalletConnected {
        public_key: "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM".into(),
    });
    assert_eq!(state.wallet().map(|w| w.short()).as_deref(), Some("9WzDXwBb..."));
    assert_eq!(state.apply(DashboardEvent::TokenTick), Outcome::TokensUpdated);
}
