//! Container management
//!
//! A [`Container`] is the declarative description loaded from the
//! configuration. Its lifecycle operations query the runtime first so that
//! every operation can be repeated safely.

#[allow(clippy::module_inception)]
mod container;
mod container_delete;
mod container_kill;
mod container_provision;
mod container_run;
mod container_start;
mod container_stop;
pub mod inspect;
pub mod params;
pub mod run_args;
mod state;
pub mod volume;

pub use container::Container;
pub use params::{Command, RunParameters};
pub use state::ContainerStatus;
pub use volume::Mount;
