//! gRPC server implementation.

use std::net::SocketAddr;
use std::sync::Arc;
use tonic::transport::Server;
use tracing::{error, info};

use super::proto::gatekeeper::v1::gatekeeper_server::GatekeeperServer;
use super::service::AdmissionServiceImpl;
use crate::error::{GatekeeperError, Result};
use crate::ratelimit::{AdmissionBackend, AdmissionEngine};

/// gRPC server for the admission service.
pub struct GrpcServer<B: AdmissionBackend + 'static> {
    /// Address to bind to
    addr: SocketAddr,
    /// The admission backend
    backend: Arc<B>,
}

impl GrpcServer<AdmissionEngine> {
    /// Create a new gRPC server over an in-process admission engine.
    pub fn new(addr: SocketAddr, engine: Arc<AdmissionEngine>) -> Self {
        Self {
            addr,
            backend: engine,
        }
    }
}

impl<B: AdmissionBackend + 'static> GrpcServer<B> {
    /// Start the gRPC server.
    ///
    /// This method will block until the server is shut down.
    pub async fn serve(self) -> Result<()> {
        let service = AdmissionServiceImpl::new(self.backend);

        info!(addr = %self.addr, "Starting gRPC server for Gatekeeper service");

        Server::builder()
            .add_service(GatekeeperServer::new(service))
            .serve(self.addr)
            .await
            .map_err(|e| {
                error!(error = %e, "gRPC server failed");
                GatekeeperError::Grpc(e)
            })
    }

    /// Start the gRPC server with graceful shutdown.
    ///
    /// The server will shut down when the provided signal resolves.
    pub async fn serve_with_shutdown<F>(self, signal: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send,
    {
        let service = AdmissionServiceImpl::new(self.backend);

        info!(
            addr = %self.addr,
            "Starting gRPC server for Gatekeeper service with graceful shutdown"
        );

        Server::builder()
            .add_service(GatekeeperServer::new(service))
            .serve_with_shutdown(self.addr, signal)
            .await
            .map_err(|e| {
                error!(error = %e, "gRPC server failed");
                GatekeeperError::Grpc(e)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LimitConfig;

    #[test]
    fn test_server_creation() {
        let addr: SocketAddr = "127.0.0.1:8081".parse().unwrap();
        let engine = Arc::new(AdmissionEngine::new(LimitConfig::default()));
        let _server = GrpcServer::new(addr, engine);
    }
}
