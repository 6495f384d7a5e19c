//! Process clock for the serving layer.
//!
//! The engine never reads the clock itself; callers stamp `now` once per
//! operation so tests can drive time explicitly and a single decision sees a
//! single consistent instant.

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in epoch milliseconds.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_millis_is_recent() {
        // 2020-01-01 in epoch milliseconds
        assert!(now_millis() > 1_577_836_800_000);
    }
}
