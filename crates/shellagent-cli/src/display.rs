//! Plain terminal output for the headless commands

use colored::*;
use shellagent_types::{LogEntry, LogKind, TokenRow};

pub fn section(title: &str) {
    println!();
    println!("{}", "━".repeat(72).bright_black());
    println!(" {}", title.bright_white().bold());
    println!("{}", "━".repeat(72).bright_black());
}

pub fn tokens(rows: &[TokenRow]) {
    println!(
        "  {:>3}  {:<24} {:<10} {:>12} {:>8} {:>8} {:>7}",
        "#".bright_black(),
        "TOKEN".bright_black(),
        "TICKER".bright_black(),
        "PRICE".bright_black(),
        "VOLUME".bright_black(),
        "MCAP".bright_black(),
        "5M %".bright_black(),
    );
    for (idx, row) in rows.iter().enumerate() {
        let change = format!("{:+.2}", row.change_5m);
        let change = if row.change_5m >= 0.0 {
            change.green()
        } else {
            change.red()
        };
        println!(
            "  {:>3}  {:<24} {:<10} {:>12} {:>8} {:>8} {:>7}",
            idx + 1,
            truncate(&row.name, 24).bold(),
            row.ticker,
            row.display_price().bright_cyan(),
            format!("${}", row.volume),
            format!("${}", row.mcap),
            change,
        );
    }
}

pub fn logs(entries: &[LogEntry]) {
    for entry in entries {
        let message = match entry.kind {
            LogKind::Success => entry.message.bright_green().bold(),
            LogKind::Error => entry.message.bright_red(),
            LogKind::Warning => entry.message.yellow(),
            LogKind::Scan => entry.message.bright_black(),
            LogKind::Info => entry.message.green(),
        };
        println!("  {} {}", format!("[{}]", entry.clock()).bright_black(), message);
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max - 3).collect();
        format!("{head}...")
    } else {
        s.to_string()
    }
}
