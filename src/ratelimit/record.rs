//! Per-client admission state.

use std::collections::VecDeque;

use serde::Serialize;

/// State tracked for a single client key.
///
/// `requests` holds the epoch-millisecond timestamps of admitted requests,
/// oldest first. Insertion order is monotonically non-decreasing because
/// timestamps are only ever appended with the current time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientRecord {
    /// Timestamps of admitted requests inside the current or a recent window
    pub requests: VecDeque<u64>,
    /// Windows in which this client exceeded its quota since the last reset
    pub violations: u32,
    /// Whether the client is currently banned
    pub banned: bool,
    /// When the ban lifts (epoch milliseconds); meaningful only while banned
    pub banned_until: u64,
}

impl ClientRecord {
    /// Drop every timestamp at or before the start of the current window.
    ///
    /// Removes exactly the timestamps `t` with `t <= now - window`, preserving
    /// the relative order of survivors. O(expired) per call since timestamps
    /// are stored oldest-first.
    pub fn prune(&mut self, now_ms: u64, window_ms: u64) {
        let Some(cutoff) = now_ms.checked_sub(window_ms) else {
            return;
        };
        while let Some(&ts) = self.requests.front() {
            if ts <= cutoff {
                self.requests.pop_front();
            } else {
                break;
            }
        }
    }

    /// An idle record carries no useful state and is safe to evict: the
    /// engine recreates an identical fresh record on the client's next
    /// request.
    pub fn is_idle(&self) -> bool {
        !self.banned && self.violations == 0 && self.requests.is_empty()
    }
}

/// Read-only view of a client record, for status and admin reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientSnapshot {
    /// Admitted requests still inside the window as of the last prune
    pub active_requests: u64,
    pub violations: u32,
    pub banned: bool,
    /// Epoch milliseconds; meaningful only while `banned` is true
    pub banned_until_ms: u64,
}

impl From<&ClientRecord> for ClientSnapshot {
    fn from(record: &ClientRecord) -> Self {
        Self {
            active_requests: record.requests.len() as u64,
            violations: record.violations,
            banned: record.banned,
            banned_until_ms: record.banned_until,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_removes_expired() {
        let mut record = ClientRecord::default();
        record.requests.extend([1_000, 2_000, 3_000, 4_000]);

        // window of 2s at t=5s: cutoff is 3000, inclusive
        record.prune(5_000, 2_000);
        assert_eq!(record.requests, VecDeque::from([4_000]));
    }

    #[test]
    fn test_prune_boundary_is_inclusive() {
        let mut record = ClientRecord::default();
        record.requests.push_back(3_000);

        // t == now - window is exactly one window old and must go
        record.prune(4_000, 1_000);
        assert!(record.requests.is_empty());
    }

    #[test]
    fn test_prune_keeps_order() {
        let mut record = ClientRecord::default();
        record.requests.extend([10, 20, 5_000, 5_001, 5_002]);

        record.prune(6_000, 2_000);
        assert_eq!(record.requests, VecDeque::from([5_000, 5_001, 5_002]));
    }

    #[test]
    fn test_prune_before_first_window_elapses() {
        let mut record = ClientRecord::default();
        record.requests.extend([0, 100, 200]);

        // now < window: no timestamp can be a full window old yet
        record.prune(30_000, 60_000);
        assert_eq!(record.requests.len(), 3);
    }

    #[test]
    fn test_idle_detection() {
        let mut record = ClientRecord::default();
        assert!(record.is_idle());

        record.requests.push_back(1);
        assert!(!record.is_idle());

        record.requests.clear();
        record.violations = 1;
        assert!(!record.is_idle());

        record.violations = 0;
        record.banned = true;
        record.banned_until = 100;
        assert!(!record.is_idle());
    }

    #[test]
    fn test_snapshot_reflects_record() {
        let mut record = ClientRecord::default();
        record.requests.extend([1, 2, 3]);
        record.violations = 2;

        let snapshot = ClientSnapshot::from(&record);
        assert_eq!(snapshot.active_requests, 3);
        assert_eq!(snapshot.violations, 2);
        assert!(!snapshot.banned);
    }
}
