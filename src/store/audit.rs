use chrono::{DateTime, Utc};
use log::debug;

use crate::model::{AuditAction, AuditLogEntry};

/// Append-only record of every successful mutating operation.
///
/// Entries are kept in insertion order, which is also timestamp order: a
/// timestamp that would go backwards (clock adjustment) is clamped to the
/// previous entry's.
#[derive(Debug, Default)]
pub struct AuditLog {
    entries: Vec<AuditLogEntry>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return it.
    pub fn record(
        &mut self,
        at: DateTime<Utc>,
        action: AuditAction,
        details: impl Into<String>,
    ) -> &AuditLogEntry {
        let timestamp = match self.entries.last() {
            Some(last) if last.timestamp > at => last.timestamp,
            _ => at,
        };
        let entry = AuditLogEntry {
            id: self.entries.len() as u64 + 1,
            timestamp,
            action,
            details: details.into(),
        };
        debug!("audit #{} {}: {}", entry.id, entry.action, entry.details);
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[AuditLogEntry] {
        &self.entries
    }

    /// The most recent `limit` entries, oldest first. A `limit` of zero means all entries.
    pub fn latest(&self, limit: usize) -> &[AuditLogEntry] {
        if limit == 0 || limit >= self.entries.len() {
            &self.entries
        } else {
            &self.entries[self.entries.len() - limit..]
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn entries_are_sequenced_in_order() {
        let mut log = AuditLog::new();
        let now = Utc::now();
        log.record(now, AuditAction::Setup, "first");
        log.record(now, AuditAction::AddCandidate, "second");
        log.record(now, AuditAction::RegisterVoter, "third");

        let ids = log.entries().iter().map(|e| e.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3]);
        let details = log.entries().iter().map(|e| e.details.as_str()).collect::<Vec<_>>();
        assert_eq!(details, vec!["first", "second", "third"]);
    }

    #[test]
    fn timestamps_never_go_backwards() {
        let mut log = AuditLog::new();
        let now = Utc::now();
        log.record(now, AuditAction::Setup, "now");
        let clamped = log
            .record(now - Duration::seconds(10), AuditAction::Setup, "earlier")
            .timestamp;
        assert_eq!(clamped, now);
        let later = now + Duration::seconds(1);
        assert_eq!(log.record(later, AuditAction::Setup, "later").timestamp, later);
    }

    #[test]
    fn latest_keeps_chronological_order() {
        let mut log = AuditLog::new();
        for i in 0..5 {
            log.record(Utc::now(), AuditAction::Setup, format!("entry {i}"));
        }
        let latest = log.latest(2);
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[0].details, "entry 3");
        assert_eq!(latest[1].details, "entry 4");

        assert_eq!(log.latest(0).len(), 5);
        assert_eq!(log.latest(50).len(), 5);
    }
}
