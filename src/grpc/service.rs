//! Admission service implementation.

use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::{debug, instrument, warn};

use super::proto::gatekeeper::v1::{
    check_response,
    gatekeeper_server::Gatekeeper,
    CheckRequest, CheckResponse, ClientState, ResetAllRequest, ResetAllResponse, ResetRequest,
    ResetResponse, SnapshotRequest, SnapshotResponse, UnbanRequest, UnbanResponse,
};

use crate::error::GatekeeperError;
use crate::ratelimit::{clock, AdmissionBackend, Verdict};

/// Implementation of the Gatekeeper gRPC interface.
pub struct AdmissionServiceImpl<B: AdmissionBackend> {
    /// The admission backend
    backend: Arc<B>,
}

impl<B: AdmissionBackend> AdmissionServiceImpl<B> {
    /// Create a new AdmissionServiceImpl over the given backend.
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }
}

fn status_code(verdict: Verdict) -> check_response::Status {
    match verdict {
        Verdict::Allowed => check_response::Status::Allowed,
        Verdict::RateLimited => check_response::Status::RateLimited,
        Verdict::Banned => check_response::Status::Banned,
    }
}

fn map_admin_error(err: GatekeeperError) -> Status {
    match err {
        GatekeeperError::NotFound(key) => {
            Status::not_found(format!("unknown client key: {key}"))
        }
        other => Status::internal(other.to_string()),
    }
}

#[tonic::async_trait]
impl<B: AdmissionBackend + 'static> Gatekeeper for AdmissionServiceImpl<B> {
    /// Decide whether a request from the given client may proceed.
    #[instrument(
        skip(self, request),
        fields(client_key = %request.get_ref().client_key)
    )]
    async fn check(
        &self,
        request: Request<CheckRequest>,
    ) -> Result<Response<CheckResponse>, Status> {
        let req = request.into_inner();

        if req.client_key.is_empty() {
            warn!("Received admission check with empty client key");
            return Err(Status::invalid_argument("client_key is required"));
        }

        let decision = self
            .backend
            .evaluate(&req.client_key, clock::now_millis())
            .await;

        debug!(
            client = %req.client_key,
            verdict = ?decision.verdict,
            remaining = decision.remaining,
            "Admission decision made"
        );

        Ok(Response::new(CheckResponse {
            status: status_code(decision.verdict).into(),
            allowed: decision.allowed,
            remaining: decision.remaining,
            reset_in_seconds: decision.reset_in_seconds,
            violations: decision.violations,
        }))
    }

    /// Lift a client's ban and clear its accumulated state.
    async fn unban(
        &self,
        request: Request<UnbanRequest>,
    ) -> Result<Response<UnbanResponse>, Status> {
        let req = request.into_inner();

        if req.client_key.is_empty() {
            return Err(Status::invalid_argument("client_key is required"));
        }

        self.backend
            .unban(&req.client_key)
            .await
            .map_err(map_admin_error)?;

        debug!(client = %req.client_key, "Client unbanned");
        Ok(Response::new(UnbanResponse {}))
    }

    /// Remove all trace of a single client.
    async fn reset(
        &self,
        request: Request<ResetRequest>,
    ) -> Result<Response<ResetResponse>, Status> {
        let req = request.into_inner();

        if req.client_key.is_empty() {
            return Err(Status::invalid_argument("client_key is required"));
        }

        self.backend
            .reset(&req.client_key)
            .await
            .map_err(map_admin_error)?;

        debug!(client = %req.client_key, "Client record reset");
        Ok(Response::new(ResetResponse {}))
    }

    /// Remove every tracked client.
    async fn reset_all(
        &self,
        _request: Request<ResetAllRequest>,
    ) -> Result<Response<ResetAllResponse>, Status> {
        let removed = self.backend.reset_all().await;
        debug!(removed, "All client records reset");
        Ok(Response::new(ResetAllResponse {
            removed: removed as u64,
        }))
    }

    /// Read-only view of all tracked clients.
    async fn snapshot(
        &self,
        _request: Request<SnapshotRequest>,
    ) -> Result<Response<SnapshotResponse>, Status> {
        let clients = self
            .backend
            .snapshot()
            .await
            .into_iter()
            .map(|(key, state)| {
                (
                    key,
                    ClientState {
                        active_requests: state.active_requests,
                        violations: state.violations,
                        banned: state.banned,
                        banned_until_ms: state.banned_until_ms,
                    },
                )
            })
            .collect();

        Ok(Response::new(SnapshotResponse { clients }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LimitConfig;
    use crate::ratelimit::AdmissionEngine;

    fn test_service() -> AdmissionServiceImpl<AdmissionEngine> {
        let limits = LimitConfig {
            window_ms: 60_000,
            max_requests: 5,
            ban_threshold: 3,
            ban_duration_ms: 300_000,
        };
        AdmissionServiceImpl::new(Arc::new(AdmissionEngine::new(limits)))
    }

    #[tokio::test]
    async fn test_empty_client_key_rejected() {
        let service = test_service();

        let result = service
            .check(Request::new(CheckRequest {
                client_key: String::new(),
            }))
            .await;

        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code(), tonic::Code::InvalidArgument);
    }

    #[tokio::test]
    async fn test_check_allows_within_quota() {
        let service = test_service();

        let response = service
            .check(Request::new(CheckRequest {
                client_key: "10.0.0.1".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();

        assert!(response.allowed);
        assert_eq!(response.status(), check_response::Status::Allowed);
        assert_eq!(response.remaining, 4);
        assert_eq!(response.violations, None);
    }

    #[tokio::test]
    async fn test_check_rate_limits_over_quota() {
        let service = test_service();

        for _ in 0..5 {
            let response = service
                .check(Request::new(CheckRequest {
                    client_key: "10.0.0.1".to_string(),
                }))
                .await
                .unwrap()
                .into_inner();
            assert!(response.allowed);
        }

        let response = service
            .check(Request::new(CheckRequest {
                client_key: "10.0.0.1".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();

        assert!(!response.allowed);
        assert_eq!(response.status(), check_response::Status::RateLimited);
        assert_eq!(response.remaining, 0);
        assert_eq!(response.violations, Some(1));
    }

    #[tokio::test]
    async fn test_unban_unknown_key_is_not_found() {
        let service = test_service();

        let result = service
            .unban(Request::new(UnbanRequest {
                client_key: "ghost".to_string(),
            }))
            .await;

        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code(), tonic::Code::NotFound);
    }

    #[tokio::test]
    async fn test_reset_then_reset_all() {
        let service = test_service();

        for key in ["a", "b", "c"] {
            service
                .check(Request::new(CheckRequest {
                    client_key: key.to_string(),
                }))
                .await
                .unwrap();
        }

        service
            .reset(Request::new(ResetRequest {
                client_key: "a".to_string(),
            }))
            .await
            .unwrap();

        let response = service
            .reset_all(Request::new(ResetAllRequest {}))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(response.removed, 2);

        let response = service
            .reset_all(Request::new(ResetAllRequest {}))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(response.removed, 0);
    }

    #[tokio::test]
    async fn test_snapshot_lists_tracked_clients() {
        let service = test_service();

        service
            .check(Request::new(CheckRequest {
                client_key: "10.0.0.1".to_string(),
            }))
            .await
            .unwrap();

        let response = service
            .snapshot(Request::new(SnapshotRequest {}))
            .await
            .unwrap()
            .into_inner();

        let state = response.clients.get("10.0.0.1").unwrap();
        assert_eq!(state.active_requests, 1);
        assert_eq!(state.violations, 0);
        assert!(!state.banned);
    }
}
