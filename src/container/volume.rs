//! Resolves which path backs a volume of another container
//!
//! Older runtimes print a container's volumes under `.Volumes` as a
//! display-formatted map, newer ones dropped that key in favour of the
//! structured `.Mounts` list. Both formats are parsed by dedicated
//! functions and [`resolve_source`] tries the legacy one first.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::error::{CraneError, Result};
use crate::runtime::{to_args, Runtime};

/// What the runtime prints for a template key without a value
pub const NO_VALUE: &str = "<no value>";

static VOLUME_MAP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"map\[(.*)\]$").expect("volume map pattern is valid"));

/// One entry of the structured mount list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Mount {
    #[serde(default)]
    pub source: String,
    pub destination: String,
    #[serde(default)]
    pub mode: String,
    #[serde(rename = "RW", default)]
    pub rw: bool,
}

/// Returns the path backing `volume` inside container `from`.
pub fn resolve_source(runtime: &Runtime, from: &str, volume: &str) -> Result<String> {
    let args = to_args(&["inspect", "--format={{.Volumes}}", from]);
    match runtime.output(&args) {
        Ok(output) if output != NO_VALUE => match source_from_volume_map(from, &output, volume) {
            Err(CraneError::MalformedInspect { .. }) => {
                log::debug!("volumes of {} are not a map, reading mounts", from);
                source_from_mounts(runtime, from, volume)
            }
            resolved => resolved,
        },
        Ok(_) => source_from_mounts(runtime, from, volume),
        Err(err) => {
            log::debug!("no legacy volumes for {}: {}", from, err);
            source_from_mounts(runtime, from, volume)
        }
    }
}

fn source_from_mounts(runtime: &Runtime, from: &str, volume: &str) -> Result<String> {
    let args = to_args(&["inspect", "--format={{json .Mounts}}", from]);
    let output = runtime.output(&args)?;
    source_from_mount_list(from, &output, volume)
}

/// Parses the legacy `map[/container/path:/host/path ...]` output.
pub fn source_from_volume_map(from: &str, output: &str, volume: &str) -> Result<String> {
    let inner = VOLUME_MAP
        .captures(output)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| CraneError::MalformedInspect {
            container: from.to_owned(),
            what: "volumes",
            output: output.to_owned(),
        })?;

    for pair in inner.as_str().split(' ') {
        let mut parts = pair.split(':');
        if let (Some(container_path), Some(host_path)) = (parts.next(), parts.next()) {
            if container_path == volume {
                return Ok(host_path.to_owned());
            }
        }
    }

    Err(CraneError::VolumeNotFound {
        container: from.to_owned(),
        volume: volume.to_owned(),
        output: output.to_owned(),
    })
}

/// Parses the JSON encoded `.Mounts` output.
pub fn source_from_mount_list(from: &str, output: &str, volume: &str) -> Result<String> {
    let mounts: Vec<Mount> =
        serde_json::from_str(output).map_err(|_| CraneError::MalformedInspect {
            container: from.to_owned(),
            what: "mounts",
            output: output.to_owned(),
        })?;

    mounts
        .into_iter()
        .find(|mount| mount.destination == volume)
        .map(|mount| mount.source)
        .ok_or_else(|| CraneError::VolumeNotFound {
            container: from.to_owned(),
            volume: volume.to_owned(),
            output: output.to_owned(),
        })
}
