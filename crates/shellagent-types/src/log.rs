//! Activity log entries

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequence number of a log entry.
///
/// Issued by the log buffer in strictly increasing order, so comparing two
/// ids tells which entry was appended first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LogId(pub u64);

impl fmt::Display for LogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "log_{}", self.0)
    }
}

/// Kind of a log entry, used for colouring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
    Scan,
}

impl LogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Scan => "scan",
        }
    }
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single line of the system log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: LogId,
    pub timestamp: DateTime<Utc>,
    pub message: String,
    pub kind: LogKind,
}

impl LogEntry {
    /// Wall-clock time of the entry as `HH:MM:SS` in the local timezone.
    pub fn clock(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format("%H:%M:%S")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_lowercase() {
        let json = serde_json::to_string(&LogKind::Scan).unwrap();
        assert_eq!(json, "\"scan\"");
        let kind: LogKind = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(kind, LogKind::Warning);
    }

    #[test]
    fn ids_order_by_sequence() {
        assert!(LogId(3) < LogId(4));
        assert_eq!(LogId(7).to_string(), "log_7");
    }

    #[test]
    fn clock_is_eight_chars() {
        let entry = LogEntry {
            id: LogId(1),
            timestamp: Utc::now(),
            message: "boot".to_string(),
            kind: LogKind::Info,
        };
        let clock = entry.clock();
        assert_eq!(clock.len(), 8);
        assert_eq!(clock.matches(':').count(), 2);
    }
}
