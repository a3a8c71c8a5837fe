//! Contains functionality of the run command
use anyhow::{Context, Result};
use clap::Parser;

use crate::commands::{load_group, GlobalOpts};

/// Run the containers, starting those which already exist
#[derive(Parser, Debug)]
pub struct Run {
    /// group, container, or comma separated list of containers
    pub target: Option<String>,
    /// remove existing containers first so they are recreated
    #[clap(short, long)]
    pub force: bool,
    /// kill containers instead of stopping them before removal
    #[clap(short, long)]
    pub kill: bool,
}

impl Run {
    pub fn exec(&self, global: &GlobalOpts) -> Result<()> {
        let (group, runtime) = load_group(global, self.target.as_deref())?;
        group
            .run(&runtime, self.force, self.kill)
            .context("failed to run containers")
    }
}
