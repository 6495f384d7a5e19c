//! gRPC server module for the Gatekeeper admission service.

mod server;
mod service;

pub use server::GrpcServer;
pub use service::AdmissionServiceImpl;

// Include the generated protobuf code
pub mod proto {
    pub mod gatekeeper {
        pub mod v1 {
            tonic::include_proto!("gatekeeper.v1");
        }
    }
}

// Re-export commonly used types
pub use proto::gatekeeper::v1::{
    gatekeeper_server::GatekeeperServer,
    CheckRequest, CheckResponse,
};
