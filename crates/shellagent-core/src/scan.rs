//! Canned scanner activity

use rand::seq::SliceRandom;
use rand::Rng;

/// Messages the log simulator picks from while scanning.
pub const SCAN_MESSAGES: [&str; 6] = [
    "Scanning Raydium pool: PUNCH/SOL...",
    "Analyzing whale movement in $pippin...",
    "Detecting liquidity injection in new pair: $Shellagent...",
    "Cross-referencing Twitter sentiment for $AUTISM...",
    "Calculating risk parameters for sideways market...",
    "Learning from $Lobstar transaction patterns...",
];

/// Log lines written when the dashboard is mounted.
pub const BOOT_MESSAGES: [&str; 3] = [
    "Shellagent Intelligence System v1.0.0 initialized.",
    "Awaiting neural network activation...",
    "Ready to scan Solana Mainnet.",
];

/// Pick one scanner message uniformly at random.
pub fn next_scan_message<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SCAN_MESSAGES.choose(rng).copied().unwrap_or(SCAN_MESSAGES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn every_message_is_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<&str> = (0..600).map(|_| next_scan_message(&mut rng)).collect();
        assert_eq!(seen.len(), SCAN_MESSAGES.len());
    }

    #[test]
    fn boot_banner_mentions_version() {
        assert!(BOOT_MESSAGES[0].contains(shellagent_types::SHELLAGENT_VERSION));
    }
}
