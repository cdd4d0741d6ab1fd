//! Token ticker simulator
//!
//! Each tick produces a new token collection where every row has been nudged
//! by a small random amount:
//!
//! - price scaled by a factor in `[0.995, 1.005]`
//! - 5-minute change shifted by a value in `[-0.25, +0.25]`
//! - transaction counter increased by `0..=4`

use rand::Rng;
use shellagent_types::TokenRow;

/// Half-width of the relative price move per tick.
pub const PRICE_JITTER: f64 = 0.005;

/// Half-width of the 5-minute change drift per tick.
pub const CHANGE_5M_JITTER: f64 = 0.25;

/// Exclusive upper bound of the per-tick transaction increment.
pub const TXNS_STEP_BOUND: u64 = 5;

/// Prices are never allowed to fall below this value.
pub const MIN_PRICE: f64 = 1e-12;

/// Apply one tick of jitter to every token and return the new collection.
pub fn jitter_tokens<R: Rng + ?Sized>(rng: &mut R, tokens: &[TokenRow]) -> Vec<TokenRow> {
    tokens.iter().map(|token| jitter_token(rng, token)).collect()
}

/// Apply one tick of jitter to a single row.
pub fn jitter_token<R: Rng + ?Sized>(rng: &mut R, token: &TokenRow) -> TokenRow {
    let change = (rng.gen::<f64>() - 0.5) * (PRICE_JITTER * 2.0);
    let drift = (rng.gen::<f64>() - 0.5) * (CHANGE_5M_JITTER * 2.0);
    let step = rng.gen_range(0..TXNS_STEP_BOUND);

    TokenRow {
        price: (token.price * (1.0 + change)).max(MIN_PRICE),
        change_5m: token.change_5m + drift,
        txns: token.txns.saturating_add(step),
        ..token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shellagent_types::seed_tokens;

    #[test]
    fn price_moves_within_half_percent() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut tokens = seed_tokens();
        for _ in 0..500 {
            let next = jitter_tokens(&mut rng, &tokens);
            for (old, new) in tokens.iter().zip(&next) {
                let factor = new.price / old.price;
                assert!(
                    (1.0 - PRICE_JITTER - 1e-12..=1.0 + PRICE_JITTER + 1e-12).contains(&factor),
                    "factor {factor} out of range"
                );
                assert!(new.txns >= old.txns);
                assert!(new.txns - old.txns < TXNS_STEP_BOUND);
                assert!((new.change_5m - old.change_5m).abs() <= CHANGE_5M_JITTER + 1e-9);
            }
            tokens = next;
        }
    }

    #[test]
    fn static_fields_are_untouched() {
        let mut rng = StdRng::seed_from_u64(1);
        let tokens = seed_tokens();
        let next = jitter_tokens(&mut rng, &tokens);
        assert_eq!(next.len(), tokens.len());
        for (old, new) in tokens.iter().zip(&next) {
            assert_eq!(old.id, new.id);
            assert_eq!(old.name, new.name);
            assert_eq!(old.volume, new.volume);
            assert_eq!(old.mcap, new.mcap);
            assert_eq!(old.change_24h, new.change_24h);
        }
    }

    #[test]
    fn price_is_floored() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut token = seed_tokens().remove(0);
        token.price = MIN_PRICE;
        for _ in 0..100 {
            token = jitter_token(&mut rng, &token);
            assert!(token.price >= MIN_PRICE);
        }
    }
}
