use super::Container;
use crate::error::Result;
use crate::runtime::Runtime;

impl Container {
    /// Creates and starts the container. An existing container is never
    /// recreated: a stopped one is started, a running one is left alone.
    pub fn run(&self, runtime: &Runtime) -> Result<()> {
        if self.skipped(runtime) {
            return Ok(());
        }

        let status = self.status(runtime);
        log::debug!("run {}: container is {}", self.name(), status);
        if status.exists() {
            println!(
                "Container {} does already exist. Use --force to recreate.",
                self.name()
            );
            if status.can_start() {
                self.start(runtime)?;
            }
            return Ok(());
        }

        // compile first so that a bad configuration aborts before any output
        let args = self.run_args(runtime)?;
        println!("Running container {} ...", self.name());
        runtime.execute(&args)
    }
}
