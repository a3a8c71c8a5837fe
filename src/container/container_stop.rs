use super::Container;
use crate::error::Result;
use crate::runtime::{to_args, Runtime};

impl Container {
    /// Stops the container gracefully if it is running
    pub fn stop(&self, runtime: &Runtime) -> Result<()> {
        if self.status(runtime).can_stop() {
            println!("Stopping container {} ...", self.name());
            runtime.execute(&to_args(&["stop", self.name()]))?;
        }
        Ok(())
    }
}
