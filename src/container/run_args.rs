//! Translates run parameters into the arguments of the runtime's `run`
//!
//! Flags come first, followed by `--name`, the image and the command, in
//! that order, as the runtime CLI expects the image and command last.
use std::env;
use std::path::Path;

use super::params::DEFAULT_NET;
use super::volume::resolve_source;
use super::Container;
use crate::error::{CraneError, Result};
use crate::runtime::Runtime;
use crate::utils::{expand_all, expand_env};

fn push_flag(args: &mut Vec<String>, flag: &str, enabled: bool) {
    if enabled {
        args.push(flag.to_owned());
    }
}

fn push_value(args: &mut Vec<String>, flag: &str, value: &str) {
    if !value.is_empty() {
        args.push(flag.to_owned());
        args.push(expand_env(value));
    }
}

fn push_each(args: &mut Vec<String>, flag: &str, values: &[String]) {
    for value in expand_all(values) {
        args.push(flag.to_owned());
        args.push(value);
    }
}

/// Makes the host part of an expanded `host:container[:mode]` volume absolute
/// by prefixing it with `cwd`. Everything after the host part is kept as is.
pub fn absolute_volume(volume: &str, cwd: &Path) -> String {
    match volume.split_once(':') {
        Some((host, rest)) if !Path::new(host).is_absolute() => {
            format!("{}/{}:{}", cwd.display(), host, rest)
        }
        None if !Path::new(volume).is_absolute() => format!("{}/{}", cwd.display(), volume),
        _ => volume.to_owned(),
    }
}

impl Container {
    /// Compiles the arguments of the runtime's `run` subcommand. Volumes of
    /// other containers named in `mapped-volumes-from` are resolved through
    /// `runtime`, which is the only reason this needs the runtime at all.
    pub fn run_args(&self, runtime: &Runtime) -> Result<Vec<String>> {
        let params = &self.run;
        let mut args = vec!["run".to_owned()];

        push_each(&mut args, "--add-host", &params.add_host);
        let net = params.net();
        if net != DEFAULT_NET {
            args.push("--net".to_owned());
            args.push(net);
        }
        args.extend(expand_all(&params.other));
        push_value(&mut args, "--cidfile", &params.cidfile);
        if params.cpu_shares > 0 {
            args.push("--cpu-shares".to_owned());
            args.push(params.cpu_shares.to_string());
        }
        push_flag(&mut args, "--detach", params.detach);
        push_each(&mut args, "--dns", &params.dns);
        push_value(&mut args, "--entrypoint", &params.entrypoint);
        push_each(&mut args, "--env", &params.env);
        push_each(&mut args, "--expose", &params.expose);
        push_value(&mut args, "--hostname", &params.hostname);
        push_flag(&mut args, "--interactive", params.interactive);
        push_each(&mut args, "--link", &params.link);
        push_each(&mut args, "--lxc-conf", &params.lxc_conf);
        for mapped in &params.mapped_volumes_from {
            args.push("--volume".to_owned());
            args.push(self.mapped_volume(runtime, &expand_env(mapped))?);
        }
        push_value(&mut args, "--memory", &params.memory);
        push_flag(&mut args, "--privileged", params.privileged);
        push_each(&mut args, "--publish", &params.publish);
        push_flag(&mut args, "--publish-all", params.publish_all);
        push_flag(&mut args, "--rm", params.rm);
        push_flag(&mut args, "--tty", params.tty);
        push_value(&mut args, "--user", &params.user);
        if !params.volume.is_empty() {
            let cwd = env::current_dir()?;
            for volume in expand_all(&params.volume) {
                args.push("--volume".to_owned());
                args.push(absolute_volume(&volume, &cwd));
            }
        }
        push_each(&mut args, "--volumes-from", &params.volumes_from);
        push_value(&mut args, "--workdir", &params.workdir);

        args.push("--name".to_owned());
        args.push(self.name().to_owned());
        args.push(self.image().to_owned());
        if let Some(command) = &params.command {
            args.extend(command.args());
        }

        Ok(args)
    }

    /// Turns `container:volume:destination[:mode]` into a bind of the path
    /// backing `volume` in `container` onto `destination`.
    fn mapped_volume(&self, runtime: &Runtime, mapped: &str) -> Result<String> {
        let parts: Vec<&str> = mapped.split(':').collect();
        if parts.len() < 3 || parts[..3].iter().any(|p| p.is_empty()) {
            return Err(CraneError::InvalidConfig(format!(
                "mapped-volumes-from entry {:?} of container {} must look like container:volume:destination",
                mapped,
                self.name()
            )));
        }
        let source = resolve_source(runtime, parts[0], parts[1])?;
        let mut bind = vec![source.as_str()];
        bind.extend_from_slice(&parts[2..]);
        Ok(bind.join(":"))
    }
}
