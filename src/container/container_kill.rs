use super::Container;
use crate::error::Result;
use crate::runtime::{to_args, Runtime};

impl Container {
    /// Kills the container if it is running. Unlike stop there is no grace
    /// period for the container process.
    pub fn kill(&self, runtime: &Runtime) -> Result<()> {
        let status = self.status(runtime);
        if status.can_kill() {
            println!("Killing container {} ...", self.name());
            runtime.execute(&to_args(&["kill", self.name()]))?;
        } else {
            log::debug!("{} is {}, nothing to kill", self.name(), status);
        }
        Ok(())
    }
}
