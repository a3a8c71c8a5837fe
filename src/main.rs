//! # Crane
//! Lift containers with ease. Reads a group of container definitions and
//! drives the container runtime to build, run, start, stop and remove them.
mod commands;

use std::process;

use clap::{crate_version, Parser};

use crate::commands::GlobalOpts;

#[derive(Parser, Debug)]
#[clap(version = crate_version!(), author = env!("CARGO_PKG_AUTHORS"))]
struct Opts {
    #[clap(flatten)]
    global: GlobalOpts,

    #[clap(subcommand)]
    subcmd: SubCommand,
}

#[derive(Parser, Debug)]
enum SubCommand {
    Lift(commands::lift::Lift),
    Provision(commands::provision::Provision),
    Pull(commands::pull::Pull),
    Run(commands::run::Run),
    Rm(commands::rm::Rm),
    Kill(commands::kill::Kill),
    Start(commands::start::Start),
    Stop(commands::stop::Stop),
    Status(commands::status::Status),
}

fn run(opts: Opts) -> anyhow::Result<()> {
    log::debug!("started with {:?}", std::env::args_os());
    let global = &opts.global;
    match &opts.subcmd {
        SubCommand::Lift(lift) => lift.exec(global),
        SubCommand::Provision(provision) => provision.exec(global),
        SubCommand::Pull(pull) => pull.exec(global),
        SubCommand::Run(run) => run.exec(global),
        SubCommand::Rm(rm) => rm.exec(global),
        SubCommand::Kill(kill) => kill.exec(global),
        SubCommand::Start(start) => start.exec(global),
        SubCommand::Stop(stop) => stop.exec(global),
        SubCommand::Status(status) => status.exec(global),
    }
}

/// Entry point of crane. Every error ends up here and is printed once,
/// together with its chain of causes.
fn main() {
    let opts = Opts::parse();

    if let Err(e) = crane::logger::init(
        opts.global.debug,
        opts.global.log.clone(),
        opts.global.log_format.clone(),
    ) {
        eprintln!("log init failed: {:?}", e);
    }

    if let Err(e) = run(opts) {
        log::error!("{:?}", e);
        eprintln!("ERROR: {:#}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Opts::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommand_with_flags() {
        let opts = Opts::try_parse_from(["crane", "lift", "backend", "-f", "-k", "-v"]).unwrap();
        assert!(opts.global.verbose);
        match opts.subcmd {
            SubCommand::Lift(lift) => {
                assert_eq!(lift.target.as_deref(), Some("backend"));
                assert!(lift.force && lift.kill);
            }
            other => panic!("unexpected subcommand {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_options() {
        let opts = Opts::try_parse_from([
            "crane",
            "-y",
            "ops/crane.json",
            "--runtime",
            "podman",
            "status",
        ])
        .unwrap();
        assert_eq!(
            opts.global.config_file.as_deref(),
            Some(std::path::Path::new("ops/crane.json"))
        );
        assert_eq!(opts.global.runtime, "podman");
        assert!(matches!(opts.subcmd, SubCommand::Status(_)));
    }

    #[test]
    fn test_stop_has_no_force() {
        assert!(Opts::try_parse_from(["crane", "stop", "-f"]).is_err());
    }
}
