//! Backend trait for abstracting the admission engine from its callers.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::Result;

use super::engine::{AdmissionEngine, Decision};
use super::record::ClientSnapshot;

/// The engine surface the serving layer programs against.
///
/// The in-process `AdmissionEngine` is purely computation-bound, but the
/// trait is async so alternative backends can await without changing the
/// gRPC service.
#[async_trait]
pub trait AdmissionBackend: Send + Sync {
    /// Decide whether a request from `client_key` at `now_ms` may proceed.
    async fn evaluate(&self, client_key: &str, now_ms: u64) -> Decision;

    /// Lift a client's ban and clear its accumulated state.
    async fn unban(&self, client_key: &str) -> Result<()>;

    /// Remove all trace of a client.
    async fn reset(&self, client_key: &str) -> Result<()>;

    /// Remove every tracked client, returning the number removed.
    async fn reset_all(&self) -> usize;

    /// Read-only view of every tracked client.
    async fn snapshot(&self) -> HashMap<String, ClientSnapshot>;
}

#[async_trait]
impl AdmissionBackend for AdmissionEngine {
    async fn evaluate(&self, client_key: &str, now_ms: u64) -> Decision {
        AdmissionEngine::evaluate(self, client_key, now_ms)
    }

    async fn unban(&self, client_key: &str) -> Result<()> {
        AdmissionEngine::unban(self, client_key)
    }

    async fn reset(&self, client_key: &str) -> Result<()> {
        AdmissionEngine::reset(self, client_key)
    }

    async fn reset_all(&self) -> usize {
        AdmissionEngine::reset_all(self)
    }

    async fn snapshot(&self) -> HashMap<String, ClientSnapshot> {
        AdmissionEngine::snapshot(self)
    }
}
