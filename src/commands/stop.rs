use anyhow::{Context, Result};
use clap::Parser;

use crate::commands::{load_group, GlobalOpts};

/// Stop the running containers
#[derive(Parser, Debug)]
pub struct Stop {
    /// group, container, or comma separated list of containers
    pub target: Option<String>,
}

impl Stop {
    pub fn exec(&self, global: &GlobalOpts) -> Result<()> {
        let (group, runtime) = load_group(global, self.target.as_deref())?;
        group.stop(&runtime).context("failed to stop containers")
    }
}
