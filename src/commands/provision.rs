//! Contains functionality of the provision command
use anyhow::{Context, Result};
use clap::Parser;

use crate::commands::{load_group, GlobalOpts};

/// Build images from their Dockerfile, or pull them when there is none
#[derive(Parser, Debug)]
pub struct Provision {
    /// group, container, or comma separated list of containers
    pub target: Option<String>,
    /// build or pull images even if they already exist
    #[clap(short, long)]
    pub force: bool,
}

impl Provision {
    pub fn exec(&self, global: &GlobalOpts) -> Result<()> {
        let (group, runtime) = load_group(global, self.target.as_deref())?;
        group
            .provision(&runtime, self.force)
            .context("failed to provision images")
    }
}
