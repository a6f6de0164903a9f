//! forest-maps-util - test support for forest-maps
//!
//! Reproducible random workloads for exercising the maps against reference
//! models.

pub mod fuzzer;
pub mod workload;

// Re-exports for convenience
pub use fuzzer::Fuzzer;
pub use workload::{MapOp, Workload};
