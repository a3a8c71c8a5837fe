//! Applies container operations across a group
//!
//! Containers are processed one at a time in the order they were declared,
//! later containers may link to or mount volumes of earlier ones. The first
//! error aborts the whole operation.
use std::io::Write;

use tabwriter::TabWriter;

use crate::container::Container;
use crate::error::Result;
use crate::runtime::Runtime;

const STATUS_HEADER: &str = "NAME\tRUNNING\tID\tIP\tPORTS";

/// An ordered selection of containers driven together
#[derive(Debug, Clone, Default)]
pub struct Group {
    containers: Vec<Container>,
}

impl Group {
    pub fn new(containers: Vec<Container>) -> Self {
        Self { containers }
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    fn each<F>(&self, op: F) -> Result<()>
    where
        F: Fn(&Container) -> Result<()>,
    {
        self.containers.iter().try_for_each(op)
    }

    /// Provisions every image, then runs every container.
    pub fn lift(&self, runtime: &Runtime, force: bool, kill: bool) -> Result<()> {
        self.provision(runtime, force)?;
        self.run(runtime, force, kill)
    }

    pub fn provision(&self, runtime: &Runtime, force: bool) -> Result<()> {
        self.each(|container| container.provision(runtime, force))
    }

    pub fn pull(&self, runtime: &Runtime, force: bool) -> Result<()> {
        self.each(|container| container.pull(runtime, force))
    }

    /// Runs every container. With `force` existing containers are removed
    /// first so that they are recreated from the current configuration.
    pub fn run(&self, runtime: &Runtime, force: bool, kill: bool) -> Result<()> {
        if force {
            self.rm(runtime, force, kill)?;
        }
        self.each(|container| container.run(runtime))
    }

    /// Removes every container. With `force` running containers are
    /// stopped first, or killed when `kill` is set as well.
    pub fn rm(&self, runtime: &Runtime, force: bool, kill: bool) -> Result<()> {
        if force {
            if kill {
                self.kill(runtime)?;
            } else {
                self.stop(runtime)?;
            }
        }
        self.each(|container| container.rm(runtime))
    }

    pub fn kill(&self, runtime: &Runtime) -> Result<()> {
        self.each(|container| container.kill(runtime))
    }

    pub fn start(&self, runtime: &Runtime) -> Result<()> {
        self.each(|container| container.start(runtime))
    }

    pub fn stop(&self, runtime: &Runtime) -> Result<()> {
        self.each(|container| container.stop(runtime))
    }

    /// Writes one aligned row per container. A container the runtime cannot
    /// inspect gets an error row, the remaining rows are still written.
    pub fn status<W: Write>(&self, runtime: &Runtime, out: W) -> Result<()> {
        let mut tab_writer = TabWriter::new(out);
        writeln!(&mut tab_writer, "{}", STATUS_HEADER)?;
        for container in &self.containers {
            writeln!(&mut tab_writer, "{}", container.status_row(runtime))?;
        }
        tab_writer.flush()?;
        Ok(())
    }
}
