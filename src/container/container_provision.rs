use super::Container;
use crate::error::Result;
use crate::runtime::{to_args, Runtime};
use crate::utils::expand_env;

impl Container {
    /// Builds the image when a build context is configured, pulls it
    /// otherwise. An image the runtime already has is left alone unless
    /// `force` is set.
    pub fn provision(&self, runtime: &Runtime, force: bool) -> Result<()> {
        if !force && self.image_exists(runtime) {
            println!(
                "Image {} does already exist. Use --force to recreate.",
                self.image()
            );
            return Ok(());
        }
        if self.builds_image() {
            self.build_image(runtime)
        } else {
            self.pull_image(runtime)
        }
    }

    /// Like provision, but always pulls even if a build context is configured.
    pub fn pull(&self, runtime: &Runtime, force: bool) -> Result<()> {
        if !force && self.image_exists(runtime) {
            println!(
                "Image {} does already exist. Use --force to re-pull.",
                self.image()
            );
            return Ok(());
        }
        self.pull_image(runtime)
    }

    pub fn pull_image(&self, runtime: &Runtime) -> Result<()> {
        println!("Pulling image {} ...", self.image());
        runtime.execute(&to_args(&["pull", self.image()]))
    }

    pub fn build_image(&self, runtime: &Runtime) -> Result<()> {
        println!("Building image {} ...", self.image());
        let args = vec![
            "build".to_owned(),
            "--rm".to_owned(),
            format!("--tag={}", self.image()),
            expand_env(&self.dockerfile),
        ];
        runtime.execute(&args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::test::TestHelperExecutor;
    use anyhow::Result;
    use serial_test::serial;

    fn helper(runtime: &Runtime) -> &TestHelperExecutor {
        runtime
            .executor()
            .as_any()
            .downcast_ref::<TestHelperExecutor>()
            .unwrap()
    }

    #[test]
    fn test_provision_pulls_missing_image() -> Result<()> {
        let runtime = Runtime::new(Box::<TestHelperExecutor>::default());
        let container = Container::new("db", "postgres:15");

        container.provision(&runtime, false)?;
        container.provision(&runtime, false)?;

        assert_eq!(
            helper(&runtime).get_executed_args(),
            vec![to_args(&["docker", "pull", "postgres:15"])]
        );
        Ok(())
    }

    #[test]
    fn test_provision_force_pulls_again() -> Result<()> {
        let runtime = Runtime::new(Box::<TestHelperExecutor>::default());
        helper(&runtime).add_image("postgres:15");

        Container::new("db", "postgres:15").provision(&runtime, true)?;

        assert_eq!(helper(&runtime).get_executed_subcommand("pull").len(), 1);
        Ok(())
    }

    #[test]
    #[serial]
    fn test_provision_builds_with_dockerfile() -> Result<()> {
        std::env::set_var("CRANE_TEST_BUILD_DIR", "/src/app");
        let runtime = Runtime::new(Box::<TestHelperExecutor>::default());
        let container = Container::new("app", "acme/app").with_dockerfile("$CRANE_TEST_BUILD_DIR");

        container.provision(&runtime, false)?;
        std::env::remove_var("CRANE_TEST_BUILD_DIR");

        assert_eq!(
            helper(&runtime).get_executed_args(),
            vec![to_args(&["docker", "build", "--rm", "--tag=acme/app", "/src/app"])]
        );
        assert!(helper(&runtime).has_image("acme/app"));
        Ok(())
    }

    #[test]
    fn test_pull_ignores_dockerfile() -> Result<()> {
        let runtime = Runtime::new(Box::<TestHelperExecutor>::default());
        let container = Container::new("app", "acme/app").with_dockerfile("./app");

        container.pull(&runtime, false)?;

        assert_eq!(
            helper(&runtime).get_executed_args(),
            vec![to_args(&["docker", "pull", "acme/app"])]
        );
        Ok(())
    }
}
