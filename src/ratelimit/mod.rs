//! Admission control logic and state management.

mod backend;
pub mod clock;
mod engine;
mod record;
mod sweeper;

pub use backend::AdmissionBackend;
pub use engine::{AdmissionEngine, Decision, Verdict};
pub use record::{ClientRecord, ClientSnapshot};
pub use sweeper::Sweeper;
