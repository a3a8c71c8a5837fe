//! Contains functionality of the lift command
use anyhow::{Context, Result};
use clap::Parser;

use crate::commands::{load_group, GlobalOpts};

/// Build or pull images, then run or start the containers
#[derive(Parser, Debug)]
pub struct Lift {
    /// group, container, or comma separated list of containers
    pub target: Option<String>,
    /// rebuild images and recreate containers that already exist
    #[clap(short, long)]
    pub force: bool,
    /// kill containers instead of stopping them before recreating
    #[clap(short, long)]
    pub kill: bool,
}

impl Lift {
    pub fn exec(&self, global: &GlobalOpts) -> Result<()> {
        let (group, runtime) = load_group(global, self.target.as_deref())?;
        group
            .lift(&runtime, self.force, self.kill)
            .context("failed to lift containers")
    }
}
