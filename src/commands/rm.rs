//! Contains functionality of the rm command
use anyhow::{Context, Result};
use clap::Parser;

use crate::commands::{load_group, GlobalOpts};

/// Remove the containers
#[derive(Parser, Debug)]
pub struct Rm {
    /// group, container, or comma separated list of containers
    pub target: Option<String>,
    /// stop running containers before removing them
    #[clap(short, long)]
    pub force: bool,
    /// with --force, kill running containers instead of stopping them
    #[clap(short, long)]
    pub kill: bool,
}

impl Rm {
    pub fn exec(&self, global: &GlobalOpts) -> Result<()> {
        let (group, runtime) = load_group(global, self.target.as_deref())?;
        group
            .rm(&runtime, self.force, self.kill)
            .context("failed to remove containers")
    }
}
