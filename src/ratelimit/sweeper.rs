//! Periodic maintenance task that reclaims memory for stale clients.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use super::clock;
use super::engine::AdmissionEngine;

/// Runs `sweep` on a fixed interval, independent of request traffic.
///
/// The task is cancellation-safe: the process layer aborts it on shutdown,
/// and since every eviction is a single atomic removal no record is ever
/// left half-deleted.
pub struct Sweeper {
    engine: Arc<AdmissionEngine>,
    interval: Duration,
}

impl Sweeper {
    /// Create a sweeper over the given engine.
    pub fn new(engine: Arc<AdmissionEngine>, interval: Duration) -> Self {
        Self { engine, interval }
    }

    /// Run the sweep loop forever. Intended to be spawned as a task and
    /// aborted on shutdown.
    pub async fn run(self) {
        info!(interval_secs = self.interval.as_secs(), "Sweeper started");

        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let evicted = self.engine.sweep(clock::now_millis());
            if evicted > 0 {
                debug!(
                    evicted,
                    remaining = self.engine.client_count(),
                    "Sweep reclaimed stale client records"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LimitConfig;

    fn test_limits() -> LimitConfig {
        LimitConfig {
            window_ms: 60_000,
            max_requests: 10,
            ban_threshold: 3,
            ban_duration_ms: 300_000,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_evicts_idle_records() {
        let engine = Arc::new(AdmissionEngine::new(test_limits()));

        // A record whose lone timestamp is ancient relative to the wall
        // clock the sweeper reads, so the first sweep finds it idle.
        engine.evaluate("stale", 1_000);
        assert_eq!(engine.client_count(), 1);

        let sweeper = Sweeper::new(Arc::clone(&engine), Duration::from_millis(50));
        let handle = tokio::spawn(sweeper.run());

        // Paused time auto-advances while we sleep, letting the interval fire
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(engine.client_count(), 0);
        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_keeps_active_bans() {
        let engine = Arc::new(AdmissionEngine::new(test_limits()));

        // Ban a client far into the future so no sweep evicts it
        let now = clock::now_millis();
        for i in 0..10 {
            engine.evaluate("hot", now + i);
        }
        engine.evaluate("hot", now + 10);
        engine.evaluate("hot", now + 11);
        engine.evaluate("hot", now + 12);
        assert!(engine.snapshot()["hot"].banned);

        let sweeper = Sweeper::new(Arc::clone(&engine), Duration::from_millis(50));
        let handle = tokio::spawn(sweeper.run());

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(engine.client_count(), 1);
        handle.abort();
    }
}
