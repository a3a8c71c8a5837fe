use once_cell::unsync::OnceCell;
use serde::Deserialize;

use crate::container::RunParameters;
use crate::runtime::Runtime;

/// Structure representing one declared container
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Container {
    // Id assigned by the runtime, resolved on first use and never invalidated
    #[serde(skip)]
    id: OnceCell<String>,
    // Name of the container, unique within its configuration
    pub name: String,
    // Build context to build the image from, the image is pulled when empty
    #[serde(default)]
    pub dockerfile: String,
    // Image reference
    pub image: String,
    // Manual containers are left alone unless they were targeted explicitly
    #[serde(default)]
    pub manual: bool,
    // Parameters translated into the runtime's run flags
    #[serde(default)]
    pub run: RunParameters,
}

impl Container {
    pub fn new<N: Into<String>, I: Into<String>>(name: N, image: I) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            ..Default::default()
        }
    }

    pub fn with_dockerfile<S: Into<String>>(mut self, dockerfile: S) -> Self {
        self.dockerfile = dockerfile.into();
        self
    }

    pub fn with_manual(mut self, manual: bool) -> Self {
        self.manual = manual;
        self
    }

    pub fn with_run(mut self, run: RunParameters) -> Self {
        self.run = run;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    /// Whether the image is built locally rather than pulled
    pub fn builds_image(&self) -> bool {
        !self.dockerfile.is_empty()
    }

    pub(super) fn cached_id(&self) -> Option<&String> {
        self.id.get()
    }

    pub(super) fn cache_id(&self, id: &str) {
        // a second resolution can only find the same id again
        let _ = self.id.set(id.to_owned());
    }

    /// Manual containers are skipped by run and start unless targeted.
    pub(super) fn skipped(&self, runtime: &Runtime) -> bool {
        if self.manual && !runtime.manual_targeting() {
            log::debug!("skip manual container {}", self.name);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Command;

    #[test]
    fn test_deserialize_container() -> anyhow::Result<()> {
        let container: Container = serde_json::from_str(
            r#"{
                "name": "web",
                "image": "nginx:1.25",
                "manual": true,
                "run": {
                    "publish": ["80:80"],
                    "publish-all": true,
                    "cmd": ["nginx", "-g", "daemon off;"]
                }
            }"#,
        )?;

        assert_eq!(container.name(), "web");
        assert_eq!(container.image(), "nginx:1.25");
        assert!(container.manual);
        assert!(!container.builds_image());
        assert!(container.cached_id().is_none());
        assert_eq!(container.run.publish, vec!["80:80".to_owned()]);
        assert!(container.run.publish_all);
        assert_eq!(
            container.run.command,
            Some(Command::Sequence(vec![
                "nginx".to_owned(),
                "-g".to_owned(),
                "daemon off;".to_owned()
            ]))
        );
        Ok(())
    }

    #[test]
    fn test_id_is_cached_once() {
        let container = Container::new("db", "postgres");
        container.cache_id("first");
        container.cache_id("second");
        assert_eq!(container.cached_id().map(String::as_str), Some("first"));
    }

    #[test]
    fn test_dockerfile_means_build() {
        let container = Container::new("app", "acme/app").with_dockerfile("./app");
        assert!(container.builds_image());
    }
}
