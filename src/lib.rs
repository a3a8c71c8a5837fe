//! # Crane
//! Lifts groups of containers by translating a declarative description into
//! invocations of a container runtime CLI such as `docker`.

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

pub mod config;
pub mod container;
pub mod error;
pub mod executor;
pub mod group;
pub mod logger;
pub mod runtime;
pub mod utils;
