//! Contains functionality of the status command
use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use crate::commands::{load_group, GlobalOpts};

/// Display the status of the containers
#[derive(Parser, Debug)]
pub struct Status {
    /// group, container, or comma separated list of containers
    pub target: Option<String>,
}

impl Status {
    /// Prints one row per container with its running state, id, address and ports
    pub fn exec(&self, global: &GlobalOpts) -> Result<()> {
        let (group, runtime) = load_group(global, self.target.as_deref())?;
        group
            .status(&runtime, io::stdout())
            .context("failed to write status")
    }
}
