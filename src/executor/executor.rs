//! An interface trait so that the rest of crane can invoke
//! the container runtime without having to worry about how
//! the processes are actually spawned
use std::any::Any;

use crate::error::Result;
use crate::executor::process::ProcessExecutor;
use crate::executor::test::TestHelperExecutor;

/// Runs external commands on behalf of the inspector and the lifecycle
pub trait Executor {
    fn as_any(&self) -> &dyn Any;
    /// Runs a command with inherited stdio, failing on a non-zero exit.
    fn execute(&self, program: &str, args: &[String]) -> Result<()>;
    /// Runs a command and returns its trimmed, combined stdout and stderr.
    fn output(&self, program: &str, args: &[String]) -> Result<String>;
    /// Pipes the stdout of `first` into `second` and returns the stdout of `second`.
    /// Both slices hold the program followed by its arguments.
    fn piped_output(&self, first: &[String], second: &[String]) -> Result<String>;
}

#[derive(Clone, Copy)]
pub enum ExecutorType {
    Process,
    Test,
}

impl Default for ExecutorType {
    fn default() -> Self {
        if cfg!(test) {
            ExecutorType::Test
        } else {
            ExecutorType::Process
        }
    }
}

impl ExecutorType {
    pub fn create_executor(&self, verbose: bool) -> Box<dyn Executor> {
        match self {
            ExecutorType::Process => Box::new(ProcessExecutor::new(verbose)),
            ExecutorType::Test => Box::<TestHelperExecutor>::default(),
        }
    }
}

pub fn create_executor(verbose: bool) -> Box<dyn Executor> {
    ExecutorType::default().create_executor(verbose)
}
