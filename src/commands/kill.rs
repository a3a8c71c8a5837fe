//! Contains functionality of the kill command
use anyhow::{Context, Result};
use clap::Parser;

use crate::commands::{load_group, GlobalOpts};

/// Kill the running containers
#[derive(Parser, Debug)]
pub struct Kill {
    /// group, container, or comma separated list of containers
    pub target: Option<String>,
}

impl Kill {
    pub fn exec(&self, global: &GlobalOpts) -> Result<()> {
        let (group, runtime) = load_group(global, self.target.as_deref())?;
        group.kill(&runtime).context("failed to kill containers")
    }
}
