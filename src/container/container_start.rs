use super::Container;
use crate::error::{CraneError, Result};
use crate::runtime::{to_args, Runtime};

impl Container {
    /// Starts a stopped container. Starting a running container does
    /// nothing, starting one the runtime does not know is an error.
    pub fn start(&self, runtime: &Runtime) -> Result<()> {
        if self.skipped(runtime) {
            return Ok(());
        }

        let status = self.status(runtime);
        if !status.exists() {
            return Err(CraneError::ContainerNotFound(self.name().to_owned()));
        }
        if status.can_start() {
            println!("Starting container {} ...", self.name());
            runtime.execute(&to_args(&["start", self.name()]))?;
        }
        Ok(())
    }
}
