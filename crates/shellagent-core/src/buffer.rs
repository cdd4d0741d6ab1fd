//! Bounded activity log

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use shellagent_types::{LogEntry, LogId, LogKind, LOG_CAPACITY};

/// FIFO log that keeps only the most recent `capacity` entries.
#[derive(Debug, Clone)]
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    next_id: u64,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    /// Append an entry stamped with the current time.
    pub fn push(&mut self, message: impl Into<String>, kind: LogKind) -> LogId {
        self.push_at(Utc::now(), message, kind)
    }

    /// Append an entry with an explicit timestamp, evicting the oldest
    /// entries once the buffer is full.
    pub fn push_at(
        &mut self,
        timestamp: DateTime<Utc>,
        message: impl Into<String>,
        kind: LogKind,
    ) -> LogId {
        let id = LogId(self.next_id);
        self.next_id += 1;

        self.entries.push_back(LogEntry {
            id,
            timestamp,
            message: message.into(),
            kind,
        });
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    /// Last `n` entries, oldest first.
    pub fn tail(&self, n: usize) -> Vec<LogEntry> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip).cloned().collect()
    }

    pub fn to_vec(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new(LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_appends_keep_last_fifty_in_order() {
        let mut buffer = LogBuffer::default();
        for i in 0..60 {
            buffer.push(format!("msg {i}"), LogKind::Scan);
        }

        assert_eq!(buffer.len(), 50);
        let messages: Vec<String> = buffer.iter().map(|e| e.message.clone()).collect();
        let expected: Vec<String> = (10..60).map(|i| format!("msg {i}")).collect();
        assert_eq!(messages, expected);

        let ids: Vec<LogId> = buffer.iter().map(|e| e.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ids.first(), Some(&LogId(11)));
    }

    #[test]
    fn never_exceeds_capacity() {
        let mut buffer = LogBuffer::new(5);
        for i in 0..23 {
            buffer.push(i.to_string(), LogKind::Info);
            assert!(buffer.len() <= 5);
        }
        assert_eq!(buffer.last().map(|e| e.message.as_str()), Some("22"));
    }

    #[test]
    fn tail_returns_newest_oldest_first() {
        let mut buffer = LogBuffer::new(10);
        for i in 0..4 {
            buffer.push(i.to_string(), LogKind::Info);
        }
        let tail: Vec<String> = buffer.tail(2).into_iter().map(|e| e.message).collect();
        assert_eq!(tail, vec!["2", "3"]);
        assert_eq!(buffer.tail(99).len(), 4);
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut buffer = LogBuffer::new(0);
        buffer.push("a", LogKind::Info);
        buffer.push("b", LogKind::Info);
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.to_vec()[0].message, "b");
    }
}
