//! Contains a wrapper around external process execution for unit tests
//! This provides a uniform interface for the rest of crane
//! to drive the container runtime's command line

#[allow(clippy::module_inception)]
pub mod executor;
pub mod process;

pub use executor::{create_executor, Executor, ExecutorType};
