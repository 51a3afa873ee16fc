//! Domain model of the cluster monitor: records produced from scheduler
//! output, the coercion outcome shared by all parsers and the service seams.

pub mod exception;
#[cfg(feature = "mock")]
pub mod mock;
pub mod model;
pub mod service;
