//! Queries the runtime about a container
//!
//! The boolean checks here never fail: anything that goes wrong while asking the
//! runtime is logged and reported as "no".
use super::{Container, ContainerStatus};
use crate::container::volume::NO_VALUE;
use crate::error::{CraneError, Result};
use crate::runtime::{to_args, Match, Runtime};

const LIST_ALL: &[&str] = &["ps", "--quiet", "--all", "--no-trunc"];
const LIST_RUNNING: &[&str] = &["ps", "--quiet", "--no-trunc"];
const LIST_IMAGES: &[&str] = &["images", "--no-trunc", "--format={{.Repository}}:{{.Tag}}"];

/// Restricts inspect to containers, an image of the same name is never reported
pub const CONTAINER_TYPE: &str = "--type=container";

/// One inspect query yielding the running flag, id, address and ports
pub const STATUS_FORMAT: &str = "--format={{.State.Running}}\t{{.Id}}\t{{if .NetworkSettings.IPAddress}}{{.NetworkSettings.IPAddress}}{{else}}-{{end}}\t{{range $k,$v := $.NetworkSettings.Ports}}{{$k}},{{end}}";

/// Whether a failed inspection only says the object does not exist
fn is_absent(err: &CraneError) -> bool {
    match err {
        CraneError::InspectionFailed { output, .. } => {
            output.to_lowercase().contains("no such")
        }
        _ => false,
    }
}

/// Spells `image` the way the image listing prints it, with an explicit
/// tag. A colon before the last `/` belongs to a registry port.
pub fn image_reference(image: &str) -> String {
    let name = image.rsplit('/').next().unwrap_or(image);
    if name.contains(':') || name.contains('@') {
        image.to_owned()
    } else {
        format!("{}:latest", image)
    }
}

/// Whether the listing produced by `list_args` holds `token`. Only a
/// failing runtime is an error.
fn listing_contains(
    runtime: &Runtime,
    list_args: &[&str],
    token: &str,
    mode: Match,
) -> Result<bool> {
    let output = runtime.filtered(list_args, token, mode)?;
    Ok(!output.trim().is_empty())
}

/// Like [`listing_contains`], reading a failing runtime as "no"
fn listed(runtime: &Runtime, list_args: &[&str], token: &str, mode: Match) -> bool {
    match listing_contains(runtime, list_args, token, mode) {
        Ok(true) => true,
        Ok(false) => {
            log::debug!("{} not found in {:?}", token, list_args);
            false
        }
        Err(err) => {
            log::warn!(
                "could not list {:?}, treating {} as absent: {}",
                list_args,
                token,
                err
            );
            false
        }
    }
}

/// Whether the runtime has `image` locally. An untagged image means `:latest`.
pub fn image_exists(runtime: &Runtime, image: &str) -> bool {
    listed(runtime, LIST_IMAGES, &image_reference(image), Match::Line)
}

impl Container {
    /// Returns the runtime id of the container, or an empty string when the
    /// runtime does not know it. Only a failing runtime is an error.
    pub fn resolve_id(&self, runtime: &Runtime) -> Result<String> {
        if let Some(id) = self.cached_id() {
            return Ok(id.clone());
        }

        let args = to_args(&["inspect", CONTAINER_TYPE, "--format={{.Id}}", self.name()]);
        let output = match runtime.output(&args) {
            Ok(output) => output,
            Err(err) if is_absent(&err) => return Ok(String::new()),
            Err(err) => return Err(err),
        };

        match output
            .split('|')
            .map(str::trim)
            .find(|candidate| !candidate.is_empty() && *candidate != NO_VALUE)
        {
            Some(id) => {
                self.cache_id(id);
                Ok(id.to_owned())
            }
            None => Ok(String::new()),
        }
    }

    fn listed_by(&self, runtime: &Runtime, list_args: &[&str]) -> bool {
        match self.resolve_id(runtime) {
            Ok(id) if id.is_empty() => false,
            Ok(id) => listed(runtime, list_args, &id, Match::Word),
            Err(err) => {
                log::warn!(
                    "could not inspect container {}, treating it as absent: {}",
                    self.name(),
                    err
                );
                false
            }
        }
    }

    /// Whether the runtime lists the container at all
    pub fn exists(&self, runtime: &Runtime) -> bool {
        self.listed_by(runtime, LIST_ALL)
    }

    /// Whether the runtime lists the container as running
    pub fn is_running(&self, runtime: &Runtime) -> bool {
        self.listed_by(runtime, LIST_RUNNING)
    }

    pub fn image_exists(&self, runtime: &Runtime) -> bool {
        image_exists(runtime, self.image())
    }

    pub fn status(&self, runtime: &Runtime) -> ContainerStatus {
        if !self.exists(runtime) {
            ContainerStatus::Absent
        } else if self.is_running(runtime) {
            ContainerStatus::Running
        } else {
            ContainerStatus::Stopped
        }
    }

    /// Tab separated status row, starting with the container name. An
    /// inspection failure is reported in the row itself.
    pub fn status_row(&self, runtime: &Runtime) -> String {
        let args = to_args(&["inspect", CONTAINER_TYPE, STATUS_FORMAT, self.name()]);
        match runtime.output(&args) {
            Ok(output) => format!("{}\t{}", self.name(), output),
            // the failed command holds the tab separated format
            Err(err) => format!(
                "{}\tError: {}",
                self.name(),
                err.to_string().replace('\t', " ")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::test::TestHelperExecutor;
    use anyhow::Result;

    fn runtime() -> Runtime {
        Runtime::new(Box::<TestHelperExecutor>::default())
    }

    fn helper(runtime: &Runtime) -> &TestHelperExecutor {
        runtime
            .executor()
            .as_any()
            .downcast_ref::<TestHelperExecutor>()
            .unwrap()
    }

    #[test]
    fn test_resolve_id_is_cached() -> Result<()> {
        let runtime = runtime();
        let id = helper(&runtime).add_container("db", "postgres", true);
        let container = Container::new("db", "postgres");

        assert_eq!(container.resolve_id(&runtime)?, id);
        assert_eq!(container.resolve_id(&runtime)?, id);
        assert_eq!(helper(&runtime).get_inspected_args().len(), 1);
        Ok(())
    }

    #[test]
    fn test_resolve_id_of_absent_container() -> Result<()> {
        let runtime = runtime();
        let container = Container::new("db", "postgres");
        assert_eq!(container.resolve_id(&runtime)?, "");
        assert!(container.cached_id().is_none());
        Ok(())
    }

    #[test]
    fn test_resolve_id_propagates_runtime_failure() {
        let runtime = runtime();
        helper(&runtime).set_inspection_down(true);
        let container = Container::new("db", "postgres");
        assert!(container.resolve_id(&runtime).is_err());
    }

    #[test]
    fn test_status_follows_runtime() {
        let runtime = runtime();
        helper(&runtime).add_container("up", "nginx", true);
        helper(&runtime).add_container("down", "nginx", false);

        assert_eq!(Container::new("up", "nginx").status(&runtime), ContainerStatus::Running);
        assert_eq!(Container::new("down", "nginx").status(&runtime), ContainerStatus::Stopped);
        assert_eq!(Container::new("gone", "nginx").status(&runtime), ContainerStatus::Absent);
    }

    #[test]
    fn test_checks_degrade_to_false() {
        let runtime = runtime();
        helper(&runtime).add_container("up", "nginx", true);
        helper(&runtime).add_image("nginx");
        helper(&runtime).set_inspection_down(true);

        let container = Container::new("up", "nginx");
        assert!(!container.exists(&runtime));
        assert!(!container.is_running(&runtime));
        assert!(!container.image_exists(&runtime));
    }

    #[test]
    fn test_listing_matches_whole_ids_only() {
        let runtime = runtime();
        helper(&runtime).add_container("real", "nginx", true);
        let container = Container::new("prefix", "nginx");
        // an id that is only a prefix of a listed id must not match
        let listed_id = helper(&runtime).container("real").unwrap().id;
        container.cache_id(&listed_id[..12]);
        assert!(!container.exists(&runtime));
    }

    #[test]
    fn test_image_exists() {
        let runtime = runtime();
        helper(&runtime).add_image("nginx:1.25");
        helper(&runtime).add_image("redis");

        assert!(image_exists(&runtime, "nginx:1.25"));
        assert!(image_exists(&runtime, "redis"));
        assert!(image_exists(&runtime, "redis:latest"));
        assert!(!image_exists(&runtime, "nginx"));
        assert!(!image_exists(&runtime, "nginx:1.24"));
        assert!(!image_exists(&runtime, "postgres"));
    }

    #[test]
    fn test_image_exists_matches_whole_references() {
        let runtime = runtime();
        helper(&runtime).add_image("nginx:1.25-alpine");
        helper(&runtime).add_image("mirror.local/nginx:1.25");
        helper(&runtime).add_image("localhost:5000/redis");

        assert!(!image_exists(&runtime, "nginx:1.25"));
        assert!(!image_exists(&runtime, "nginx"));
        assert!(!image_exists(&runtime, "alpine"));
        assert!(image_exists(&runtime, "mirror.local/nginx:1.25"));
        assert!(image_exists(&runtime, "localhost:5000/redis"));
        assert!(!image_exists(&runtime, "redis"));
    }

    #[test]
    fn test_image_reference() {
        assert_eq!(image_reference("nginx"), "nginx:latest");
        assert_eq!(image_reference("nginx:1.25"), "nginx:1.25");
        assert_eq!(image_reference("localhost:5000/nginx"), "localhost:5000/nginx:latest");
        assert_eq!(image_reference("localhost:5000/nginx:1.25"), "localhost:5000/nginx:1.25");
        assert_eq!(image_reference("nginx@sha256:abc"), "nginx@sha256:abc");
    }

    #[test]
    fn test_unreachable_runtime_is_not_an_empty_listing() -> Result<()> {
        let runtime = runtime();
        assert!(!listing_contains(&runtime, LIST_IMAGES, "nginx:latest", Match::Line)?);

        helper(&runtime).set_inspection_down(true);
        assert!(listing_contains(&runtime, LIST_IMAGES, "nginx:latest", Match::Line).is_err());
        assert!(!image_exists(&runtime, "nginx"));
        Ok(())
    }

    #[test]
    fn test_resolve_id_ignores_image_of_same_name() -> Result<()> {
        let runtime = runtime();
        helper(&runtime).add_image("redis");
        let container = Container::new("redis", "redis");

        assert_eq!(container.resolve_id(&runtime)?, "");
        assert!(container.cached_id().is_none());
        assert!(helper(&runtime).get_inspected_args()[0].contains(&CONTAINER_TYPE.to_owned()));
        Ok(())
    }

    #[test]
    fn test_status_row() {
        let runtime = runtime();
        let id = helper(&runtime).add_container("web", "nginx", true);
        helper(&runtime).set_network("web", "172.17.0.2", &["80/tcp"]);

        assert_eq!(
            Container::new("web", "nginx").status_row(&runtime),
            format!("web\ttrue\t{}\t172.17.0.2\t80/tcp,", id)
        );
        let row = Container::new("ghost", "nginx").status_row(&runtime);
        assert!(row.starts_with("ghost\tError: "));
    }
}
