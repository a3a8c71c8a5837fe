use anyhow::{Context, Result};
use clap::Parser;

use crate::commands::{load_group, GlobalOpts};

/// Pull images from the registry, ignoring any Dockerfile
#[derive(Parser, Debug)]
pub struct Pull {
    /// group, container, or comma separated list of containers
    pub target: Option<String>,
    /// pull images even if they already exist
    #[clap(short, long)]
    pub force: bool,
}

impl Pull {
    pub fn exec(&self, global: &GlobalOpts) -> Result<()> {
        let (group, runtime) = load_group(global, self.target.as_deref())?;
        group
            .pull(&runtime, self.force)
            .context("failed to pull images")
    }
}
