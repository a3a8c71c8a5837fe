//! Loading, validating and selecting from the container configuration
//!
//! A configuration is a JSON document of the form
//!
//! ```json
//! {
//!   "containers": [{ "name": "db", "image": "postgres", "run": { "detach": true } }],
//!   "groups": { "backend": ["db"] }
//! }
//! ```
//!
//! Containers keep their declared order, which is the order every group
//! operation processes them in.
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::container::Container;
use crate::error::{CraneError, Result};
use crate::group::Group;

/// Files looked up in the working directory when no configuration is given
pub const CONFIG_FILES: &[&str] = &["crane.json", "Cranefile"];

#[derive(Deserialize)]
struct RawConfig {
    containers: Vec<Value>,
    #[serde(default)]
    groups: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    containers: Vec<Container>,
    groups: BTreeMap<String, Vec<String>>,
}

impl Config {
    /// Parses and validates a configuration document. Errors name the
    /// offending container where there is one.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(text)?;

        let containers = raw
            .containers
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                let name = value
                    .get("name")
                    .and_then(Value::as_str)
                    .map(str::to_owned)
                    .unwrap_or_else(|| format!("#{}", index + 1));
                Container::deserialize(value).map_err(|err| {
                    CraneError::InvalidConfig(format!("container {}: {}", name, err))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let config = Self {
            containers,
            groups: raw.groups,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| {
            CraneError::InvalidConfig(format!("cannot read {}: {}", path.display(), err))
        })?;
        log::debug!("load configuration from {}", path.display());
        Self::from_json(&text)
    }

    /// Loads the first of the well-known configuration files found in `dir`.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Self> {
        match find_config_file(dir.as_ref()) {
            Some(path) => Self::load(path),
            None => Err(CraneError::InvalidConfig(format!(
                "no configuration given and none of {} found in {}",
                CONFIG_FILES.join(", "),
                dir.as_ref().display()
            ))),
        }
    }

    /// Inline JSON wins over a file, a file wins over discovery in `dir`.
    pub fn resolve(inline: Option<&str>, file: Option<&Path>, dir: &Path) -> Result<Self> {
        match (inline, file) {
            (Some(json), _) => Self::from_json(json),
            (None, Some(path)) => Self::load(path),
            (None, None) => Self::discover(dir),
        }
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn groups(&self) -> &BTreeMap<String, Vec<String>> {
        &self.groups
    }

    fn container(&self, name: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.name() == name)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for container in &self.containers {
            if container.name().is_empty() {
                return Err(CraneError::InvalidConfig(
                    "every container needs a name".to_owned(),
                ));
            }
            if !seen.insert(container.name()) {
                return Err(CraneError::InvalidConfig(format!(
                    "container {} is declared more than once",
                    container.name()
                )));
            }
            if container.image().is_empty() {
                return Err(CraneError::InvalidConfig(format!(
                    "container {} has no image",
                    container.name()
                )));
            }
        }

        for (group, members) in &self.groups {
            if let Some(unknown) = members.iter().find(|m| !seen.contains(m.as_str())) {
                return Err(CraneError::InvalidConfig(format!(
                    "group {} refers to undeclared container {}",
                    group, unknown
                )));
            }
        }
        Ok(())
    }

    /// Picks the containers a command applies to. Without a target every
    /// declared container is selected. A target names a group, a container,
    /// or a comma separated list of those. The second value tells whether
    /// the selection was explicit, which makes manual containers eligible.
    pub fn select(&self, target: Option<&str>) -> Result<(Group, bool)> {
        let target = match target {
            None => return Ok((Group::new(self.containers.clone()), false)),
            Some(target) => target,
        };

        let mut selected: Vec<Container> = vec![];
        for name in target.split(',').map(str::trim) {
            let names: Vec<&str> = match (self.groups.get(name), self.container(name)) {
                (Some(members), _) => members.iter().map(String::as_str).collect(),
                (None, Some(_)) => vec![name],
                (None, None) => {
                    return Err(CraneError::InvalidConfig(format!(
                        "{:?} is neither a group nor a container",
                        name
                    )))
                }
            };
            for name in names {
                if selected.iter().any(|c| c.name() == name) {
                    continue;
                }
                if let Some(container) = self.container(name) {
                    selected.push(container.clone());
                }
            }
        }

        log::debug!(
            "target {} selects {:?}",
            target,
            selected.iter().map(Container::name).collect::<Vec<_>>()
        );
        Ok((Group::new(selected), true))
    }
}

fn find_config_file(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}
