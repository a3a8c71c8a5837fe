use super::Container;
use crate::error::{CraneError, Result};
use crate::runtime::{to_args, Runtime};

impl Container {
    /// Removes a stopped container. A running container has to be stopped
    /// or killed first.
    pub fn rm(&self, runtime: &Runtime) -> Result<()> {
        let status = self.status(runtime);
        log::debug!("rm {}: container is {}", self.name(), status);
        if !status.exists() {
            return Ok(());
        }
        if !status.can_delete() {
            return Err(CraneError::ContainerRunning(self.name().to_owned()));
        }

        println!("Removing container {} ...", self.name());
        runtime.execute(&to_args(&["rm", self.name()]))
    }
}
