//! Token rows shown in the market scanner

use serde::{Deserialize, Serialize};

const ICON_BASE: &str = "https://cdn.dexscreener.com/cms/images/";
const ICON_QUERY: &str = "?width=128&height=128&fit=crop&quality=95&format=auto";

/// One row of the market scanner table.
///
/// Display-only metrics (`volume`, `liquidity`, `mcap`, `age`) are kept as
/// pre-formatted strings; only `price`, `change_5m` and `txns` move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRow {
    pub id: u32,
    pub name: String,
    pub ticker: String,
    pub price: f64,
    pub age: String,
    pub txns: u64,
    pub volume: String,
    pub makers: u64,
    pub change_5m: f64,
    pub change_1h: f64,
    pub change_6h: f64,
    pub change_24h: f64,
    pub liquidity: String,
    pub mcap: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl TokenRow {
    /// Price with 8 decimals below 0.001, otherwise 4.
    pub fn display_price(&self) -> String {
        if self.price < 0.001 {
            format!("${:.8}", self.price)
        } else {
            format!("${:.4}", self.price)
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn row(
    id: u32,
    name: &str,
    ticker: &str,
    price: f64,
    age: &str,
    txns: u64,
    volume: &str,
    makers: u64,
    changes: [f64; 4],
    liquidity: &str,
    mcap: &str,
    icon: &str,
) -> TokenRow {
    TokenRow {
        id,
        name: name.to_string(),
        ticker: ticker.to_string(),
        price,
        age: age.to_string(),
        txns,
        volume: volume.to_string(),
        makers,
        change_5m: changes[0],
        change_1h: changes[1],
        change_6h: changes[2],
        change_24h: changes[3],
        liquidity: liquidity.to_string(),
        mcap: mcap.to_string(),
        icon: Some(format!("{ICON_BASE}{icon}{ICON_QUERY}")),
    }
}

/// The fixed market the dashboard starts from.
#[rustfmt::skip]
pub fn seed_tokens() -> Vec<TokenRow> {
    vec![
        row(1, "Punch", "PUNCH", 0.02340, "19d", 42658, "9.1M", 6699,
            [-1.33, -16.58, -2.56, -31.75], "674K", "23.4M",
            "91da26a8f6bb6493c28e76be1d9f1b952fc00a3ff9f20c0f20d42a85bbb166f1"),
        row(2, "Autism Coin", "AUTISM", 0.001262, "15h", 152090, "3.0M", 44588,
            [3.69, 19.19, 178.0, 3601.0], "93K", "1.2M", "2j1F8Jkhj7eq8bak"),
        row(3, "NoLimitGains", "NoLimit", 0.0008859, "1d", 53718, "4.5M", 9005,
            [-5.51, -0.14, 17.89, -27.76], "87K", "885K", "5bwrjcsUj89JVxoA"),
        row(4, "Lobstar", "Lobstar", 0.009431, "4d", 47829, "8.0M", 6647,
            [2.83, 12.45, 9.60, -21.90], "405K", "9.4M", "AeVl4qS8tQ58VClG"),
        row(5, "CLUDE", "Clude", 0.001539, "10h", 52424, "4.9M", 7201,
            [2.02, -10.98, -34.11, 4035.0], "104K", "1.5M", "u3KkWN5ED0uAmCb2"),
        row(6, "Moss Y. Gravel", "MOSS", 0.001235, "15h", 81270, "10.2M", 8852,
            [-5.66, -7.48, 28.91, 3141.0], "102K", "1.2M", "_J_Pyhrq4yzoLrga"),
        row(7, "Dog saved by Grok", "LIA", 0.0001568, "17h", 91200, "7.1M", 10920,
            [-8.34, -0.01, -9.62, 387.0], "38K", "156K", "1gx_jMxTUd7twmcX"),
        row(8, "Claw Mode", "CLAW", 0.0001304, "1d", 28941, "723K", 19766,
            [-5.53, -22.54, -31.54, -34.67], "27K", "130K", "Q-Fjf4IKJwiiysMV"),
        row(9, "Pippkin The Horse", "Pippkin", 0.001350, "5d", 18877, "914K", 9635,
            [-2.30, 11.36, 26.91, 267.0], "95K", "1.3M", "VAnXFqywHy8wAFqm"),
        row(10, "Grokius Maximus", "GROKIUS", 0.003257, "5d", 19693, "1.7M", 4355,
            [-0.84, 25.40, 70.38, 146.0], "176K", "3.2M", "kxqL1VXzBxrotfrV"),
        row(11, "Pippin", "pippin", 0.7688, "1y", 64846, "28.7M", 1468,
            [-0.66, 7.31, 2.94, 7.42], "16.9M", "768.8M",
            "d237de55618e54fd7d66593ff2adf3ad8c092398f9049a31f1dcb1b23ad1dff8"),
        row(12, "ONE PIECE UNIVERSE", "ONE", 0.004042, "8h", 28512, "8.3M", 3542,
            [-3.18, 0.53, -15.27, -25.31], "214K", "4.0M", "SQayz8jGC8MXnuwA"),
        row(13, "NotInEmploymentEducationTraining", "neet", 0.02051, "9mo", 7364, "2.3M", 1278,
            [-0.25, 0.95, 1.01, -16.12], "1.0M", "20.5M",
            "d5d7bfff13c5cc762c020b4414e4493a8eb19d4bdcfb51957da58e9c471d43dd"),
        row(14, "Scrapling", "Scrapling", 0.0001220, "1d", 33173, "2.5M", 4745,
            [0.65, 14.88, 9.52, 586.0], "29K", "122K",
            "eac4af8656148eb230ac19b54c134a0f02348dd4062b31019711128f1e2f4961"),
        row(15, "level941", "Pigeon", 0.002166, "18d", 9458, "822K", 1419,
            [0.94, -7.12, -6.84, 119.0], "172K", "2.1M",
            "eac4af8656148eb230ac19b54c134a0f02348dd4062b31019711128f1e2f4961"),
        row(16, "Zoe", "Zoe", 0.0008405, "8h", 29333, "1.5M", 4539,
            [-12.55, -18.25, -35.62, 161.0], "23K", "84K", "oemlzJvNke7jlU4c"),
        row(17, "Xingxing", "Xingxing", 0.0001301, "2d", 9033, "488K", 2267,
            [-8.28, -26.03, -12.41, -61.11], "32K", "128K", "P31JqbOpYb9Qvblt"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_market_has_seventeen_unique_rows() {
        let tokens = seed_tokens();
        assert_eq!(tokens.len(), 17);
        let ids: HashSet<u32> = tokens.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 17);
        let tickers: HashSet<&str> = tokens.iter().map(|t| t.ticker.as_str()).collect();
        assert_eq!(tickers.len(), 17);
        assert!(tokens.iter().all(|t| t.price > 0.0));
    }

    #[test]
    fn small_prices_use_eight_decimals() {
        let tokens = seed_tokens();
        let lia = tokens.iter().find(|t| t.ticker == "LIA").unwrap();
        assert_eq!(lia.display_price(), "$0.00015680");

        let pippin = tokens.iter().find(|t| t.ticker == "pippin").unwrap();
        assert_eq!(pippin.display_price(), "$0.7688");
    }

    #[test]
    fn icons_point_at_cdn() {
        for token in seed_tokens() {
            let icon = token.icon.expect("seed rows carry icons");
            assert!(icon.starts_with(ICON_BASE));
            assert!(icon.ends_with(ICON_QUERY));
        }
    }
}
