//! Subcommands of the crane binary
//!
//! Every subcommand loads the configuration, selects its target group and
//! hands the group to the library. Errors are wrapped with context here and
//! rendered once in `main`.
use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crane::config::Config;
use crane::executor::create_executor;
use crane::group::Group;
use crane::runtime::{Runtime, DEFAULT_BINARY};

pub mod kill;
pub mod lift;
pub mod provision;
pub mod pull;
pub mod rm;
pub mod run;
pub mod start;
pub mod status;
pub mod stop;

/// Options accepted by every subcommand
#[derive(Parser, Debug)]
pub struct GlobalOpts {
    /// configuration as inline JSON, takes precedence over --config-file
    #[clap(short, long, global = true)]
    pub config: Option<String>,
    /// configuration file (default: crane.json or Cranefile in the working directory)
    #[clap(short = 'y', long, global = true)]
    pub config_file: Option<PathBuf>,
    /// print every runtime invocation before it runs
    #[clap(short, long, global = true)]
    pub verbose: bool,
    /// container runtime binary to drive
    #[clap(long, global = true, env = "CRANE_RUNTIME", default_value = DEFAULT_BINARY)]
    pub runtime: String,
    /// set the log file to write crane logs to (default is '/dev/stderr')
    #[clap(short, long, global = true)]
    pub log: Option<PathBuf>,
    /// set the log format ('text' (default), or 'json')
    #[clap(long, global = true)]
    pub log_format: Option<String>,
    /// change log level to debug, CRANE_LOG_LEVEL takes precedence
    #[clap(long, global = true)]
    pub debug: bool,
}

/// Loads the configuration and prepares the runtime for the containers
/// selected by `target`.
fn load_group(global: &GlobalOpts, target: Option<&str>) -> Result<(Group, Runtime)> {
    let cwd = env::current_dir().context("failed to determine the working directory")?;
    let config = Config::resolve(
        global.config.as_deref(),
        global.config_file.as_deref(),
        &cwd,
    )
    .context("failed to load configuration")?;
    let (group, manual_targeting) = config
        .select(target)
        .with_context(|| format!("failed to select {}", target.unwrap_or("containers")))?;

    let runtime = Runtime::new(create_executor(global.verbose))
        .with_binary(&global.runtime)
        .with_manual_targeting(manual_targeting);
    Ok((group, runtime))
}
