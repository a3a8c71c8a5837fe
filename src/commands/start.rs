//! Starts previously created containers

use anyhow::{Context, Result};
use clap::Parser;

use crate::commands::{load_group, GlobalOpts};

/// Start the stopped containers
#[derive(Parser, Debug)]
pub struct Start {
    /// group, container, or comma separated list of containers
    pub target: Option<String>,
}

impl Start {
    pub fn exec(&self, global: &GlobalOpts) -> Result<()> {
        let (group, runtime) = load_group(global, self.target.as_deref())?;
        group.start(&runtime).context("failed to start containers")
    }
}
