//! Run parameters of a container, named after the runtime flags they become
use std::convert::TryFrom;

use serde::Deserialize;
use serde_json::Value;

use crate::utils::expand_env;

/// Network mode the runtime uses when none is given
pub const DEFAULT_NET: &str = "bridge";

/// Flags passed to the runtime when the container is created. String
/// values may hold `$VAR` placeholders, they are expanded when the run
/// arguments are compiled rather than when the configuration is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RunParameters {
    pub add_host: Vec<String>,
    pub cidfile: String,
    pub cpu_shares: u64,
    pub detach: bool,
    pub dns: Vec<String>,
    pub entrypoint: String,
    pub env: Vec<String>,
    pub expose: Vec<String>,
    pub hostname: String,
    pub interactive: bool,
    pub link: Vec<String>,
    pub lxc_conf: Vec<String>,
    /// `container:volume:destination` triples, resolved to bind mounts
    pub mapped_volumes_from: Vec<String>,
    pub memory: String,
    pub net: String,
    /// Passed through verbatim, for flags crane has no field for
    pub other: Vec<String>,
    pub privileged: bool,
    pub publish: Vec<String>,
    pub publish_all: bool,
    pub rm: bool,
    pub tty: bool,
    pub user: String,
    pub volume: Vec<String>,
    pub volumes_from: Vec<String>,
    pub workdir: String,
    #[serde(rename = "cmd")]
    pub command: Option<Command>,
}

impl RunParameters {
    /// Expanded network mode, `bridge` when unset
    pub fn net(&self) -> String {
        if self.net.is_empty() {
            DEFAULT_NET.to_owned()
        } else {
            expand_env(&self.net)
        }
    }
}

/// Command run in the container instead of the image's default
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub enum Command {
    Single(String),
    Sequence(Vec<String>),
}

impl Command {
    /// Trailing arguments of the run invocation
    pub fn args(&self) -> Vec<String> {
        match self {
            Command::Single(command) if command.is_empty() => vec![],
            Command::Single(command) => vec![command.clone()],
            Command::Sequence(commands) => commands.clone(),
        }
    }
}

impl TryFrom<Value> for Command {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(command) => Ok(Command::Single(command)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    other => Err(format!("cmd array must only hold strings, found {}", other)),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Command::Sequence),
            other => Err(format!(
                "cmd must be a string or an array of strings, found {}",
                other
            )),
        }
    }
}
