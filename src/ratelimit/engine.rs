//! Core admission engine implementation.

use std::collections::HashMap;

use dashmap::DashMap;
use serde::Serialize;
use tracing::{debug, trace};

use crate::config::LimitConfig;
use crate::error::{GatekeeperError, Result};

use super::record::{ClientRecord, ClientSnapshot};

/// Outcome category of an admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Request may proceed
    Allowed,
    /// Quota for the current window is exhausted
    RateLimited,
    /// Client is serving a ban
    Banned,
}

/// The result of evaluating one request against a client's record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub allowed: bool,
    pub verdict: Verdict,
    /// Requests left in the current window; 0 when denied
    pub remaining: u32,
    /// Whole seconds until the window frees up or the ban lifts
    pub reset_in_seconds: u64,
    /// Accumulated violation count, reported on rate-limited denials
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<u32>,
}

impl Decision {
    fn allowed(remaining: u32, reset_in_seconds: u64) -> Self {
        Self {
            allowed: true,
            verdict: Verdict::Allowed,
            remaining,
            reset_in_seconds,
            violations: None,
        }
    }

    fn rate_limited(reset_in_seconds: u64, violations: u32) -> Self {
        Self {
            allowed: false,
            verdict: Verdict::RateLimited,
            remaining: 0,
            reset_in_seconds,
            violations: Some(violations),
        }
    }

    fn banned(reset_in_seconds: u64) -> Self {
        Self {
            allowed: false,
            verdict: Verdict::Banned,
            remaining: 0,
            reset_in_seconds,
            violations: None,
        }
    }
}

/// The admission engine: a store of per-client records plus the decision
/// logic that mutates them.
///
/// The store is sharded (`DashMap`), so concurrent decisions for different
/// clients proceed in parallel while every read-modify-write on a single
/// client's record happens under that record's entry lock. All state is
/// process-lifetime only.
pub struct AdmissionEngine {
    /// Client records indexed by the caller-supplied client key
    clients: DashMap<String, ClientRecord>,
    /// Limits fixed at construction
    limits: LimitConfig,
}

impl AdmissionEngine {
    /// Create a new engine with the given limits.
    pub fn new(limits: LimitConfig) -> Self {
        Self {
            clients: DashMap::new(),
            limits,
        }
    }

    /// The limits this engine enforces.
    pub fn limits(&self) -> &LimitConfig {
        &self.limits
    }

    /// Decide whether a request from `client_key` at instant `now_ms` may
    /// proceed, updating the client's record in place.
    ///
    /// This call is total: it always returns a decision. The record is held
    /// exclusively for the duration of the call, so two concurrent requests
    /// from the same client cannot both observe a pre-increment violation
    /// count.
    pub fn evaluate(&self, client_key: &str, now_ms: u64) -> Decision {
        trace!(client = %client_key, now_ms, "Evaluating admission");

        let mut entry = self.clients.entry(client_key.to_string()).or_default();
        let record = entry.value_mut();

        if record.banned {
            if now_ms < record.banned_until {
                return Decision::banned(ceil_secs(record.banned_until - now_ms));
            }
            // Ban served: the client starts over with a clean slate.
            debug!(client = %client_key, "Ban expired, reinitializing record");
            *record = ClientRecord::default();
        }

        record.prune(now_ms, self.limits.window_ms);

        if record.requests.len() as u32 >= self.limits.max_requests {
            record.violations = record.violations.saturating_add(1);

            if record.violations >= self.limits.ban_threshold {
                record.banned = true;
                record.banned_until = now_ms + self.limits.ban_duration_ms;
                debug!(
                    client = %client_key,
                    violations = record.violations,
                    banned_until = record.banned_until,
                    "Violation threshold reached, banning client"
                );
                return Decision::banned(ceil_secs(self.limits.ban_duration_ms));
            }

            debug!(
                client = %client_key,
                violations = record.violations,
                "Quota exhausted for window"
            );
            let oldest = record.requests.front().copied().unwrap_or(now_ms);
            return Decision::rate_limited(
                self.reset_in_secs(oldest, now_ms),
                record.violations,
            );
        }

        record.requests.push_back(now_ms);
        let remaining = self
            .limits
            .max_requests
            .saturating_sub(record.requests.len() as u32);
        let oldest = record.requests.front().copied().unwrap_or(now_ms);
        Decision::allowed(remaining, self.reset_in_secs(oldest, now_ms))
    }

    /// Seconds until the oldest in-window timestamp ages out.
    fn reset_in_secs(&self, oldest_ms: u64, now_ms: u64) -> u64 {
        ceil_secs((oldest_ms + self.limits.window_ms).saturating_sub(now_ms))
    }

    /// Lift a client's ban and clear its accumulated state. The record stays
    /// in the store as a fresh empty record, exactly as if the client's ban
    /// had expired naturally.
    pub fn unban(&self, client_key: &str) -> Result<()> {
        match self.clients.get_mut(client_key) {
            Some(mut record) => {
                *record = ClientRecord::default();
                debug!(client = %client_key, "Client unbanned by operator");
                Ok(())
            }
            None => Err(GatekeeperError::NotFound(client_key.to_string())),
        }
    }

    /// Remove all trace of a client. Its next request recreates it fresh.
    pub fn reset(&self, client_key: &str) -> Result<()> {
        match self.clients.remove(client_key) {
            Some(_) => {
                debug!(client = %client_key, "Client record deleted by operator");
                Ok(())
            }
            None => Err(GatekeeperError::NotFound(client_key.to_string())),
        }
    }

    /// Remove every tracked client, returning the number removed.
    pub fn reset_all(&self) -> usize {
        let mut removed = 0;
        self.clients.retain(|_, _| {
            removed += 1;
            false
        });
        debug!(removed, "All client records deleted by operator");
        removed
    }

    /// Evict expired bans and idle records, returning the eviction count.
    ///
    /// Each record is handled under its shard lock only for the instant it
    /// takes to prune and test it, so a scan of a large store never blocks
    /// decision calls for its whole duration. Evicting a record a concurrent
    /// decision is about to touch is safe: only idle records are evicted,
    /// and an idle record is semantically identical to no record.
    pub fn sweep(&self, now_ms: u64) -> usize {
        let mut evicted = 0;
        self.clients.retain(|key, record| {
            if record.banned && now_ms >= record.banned_until {
                trace!(client = %key, "Evicting record with expired ban");
                evicted += 1;
                return false;
            }
            // Records serving a ban are pruned too, so reporting never shows
            // request counts from before the ban; they are never idle.
            record.prune(now_ms, self.limits.window_ms);
            if record.is_idle() {
                trace!(client = %key, "Evicting idle record");
                evicted += 1;
                false
            } else {
                true
            }
        });
        evicted
    }

    /// Read-only view of every tracked client.
    pub fn snapshot(&self) -> HashMap<String, ClientSnapshot> {
        self.clients
            .iter()
            .map(|entry| (entry.key().clone(), ClientSnapshot::from(entry.value())))
            .collect()
    }

    /// Number of tracked clients.
    pub fn client_count(&self) -> usize {
        self.clients.len()
    }
}

/// Milliseconds to whole seconds, rounding up.
fn ceil_secs(ms: u64) -> u64 {
    ms.div_ceil(1000)
}
