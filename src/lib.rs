//! Gatekeeper - Admission Control Service
//!
//! This crate implements a per-client admission control service: a sliding
//! time window bounds how many requests each client may make, repeat
//! offenders accumulate violations, and clients that keep exceeding their
//! quota receive temporary bans. A background sweeper reclaims memory for
//! expired bans and idle clients.

pub mod grpc;
pub mod ratelimit;
pub mod config;
pub mod error;
