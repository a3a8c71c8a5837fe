//! Executes runtime commands as real child processes
use std::any::Any;
use std::io;
use std::process::{Command, Stdio};

use super::Executor;
use crate::error::{CraneError, Result};

/// Exit status of a filter that selected no line
const NO_MATCH: i32 = 1;

/// Spawns the runtime through `std::process::Command`
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor {
    /// echo every state-changing command before running it
    verbose: bool,
}

impl ProcessExecutor {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

fn display_command(program: &str, args: &[String]) -> String {
    if args.is_empty() {
        program.to_owned()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

fn split_program(command: &[String]) -> Result<(&String, &[String])> {
    command.split_first().ok_or_else(|| {
        CraneError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            "cannot run an empty command",
        ))
    })
}

impl Executor for ProcessExecutor {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn execute(&self, program: &str, args: &[String]) -> Result<()> {
        let command = display_command(program, args);
        if self.verbose {
            println!("\n--> {}", command);
        }
        log::debug!("execute {}", command);

        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        if !status.success() {
            return Err(CraneError::ExecutionFailed {
                command,
                status: status.to_string(),
            });
        }
        Ok(())
    }

    fn output(&self, program: &str, args: &[String]) -> Result<String> {
        let command = display_command(program, args);
        log::debug!("inspect {}", command);

        let output = Command::new(program).args(args).output()?;
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        let combined = combined.trim().to_owned();

        if !output.status.success() {
            return Err(CraneError::InspectionFailed {
                command,
                output: combined,
            });
        }
        Ok(combined)
    }

    fn piped_output(&self, first: &[String], second: &[String]) -> Result<String> {
        let (first_program, first_args) = split_program(first)?;
        let (second_program, second_args) = split_program(second)?;
        let command = format!(
            "{} | {}",
            display_command(first_program, first_args),
            display_command(second_program, second_args)
        );
        log::debug!("inspect {}", command);

        let mut upstream = Command::new(first_program)
            .args(first_args)
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;
        let upstream_stdout = upstream.stdout.take().ok_or_else(|| {
            CraneError::Io(io::Error::new(
                io::ErrorKind::BrokenPipe,
                format!("no stdout captured for {}", first_program),
            ))
        })?;

        let downstream = Command::new(second_program)
            .args(second_args)
            .stdin(Stdio::from(upstream_stdout))
            .output()?;
        let upstream_status = upstream.wait()?;
        // an empty listing from a failed upstream must not read as "no match"
        if !upstream_status.success() {
            return Err(CraneError::InspectionFailed {
                command: display_command(first_program, first_args),
                output: format!("listing exited unsuccessfully ({})", upstream_status),
            });
        }

        match downstream.status.code() {
            Some(0) => Ok(String::from_utf8_lossy(&downstream.stdout).into_owned()),
            Some(NO_MATCH) => Ok(String::new()),
            _ => Err(CraneError::InspectionFailed {
                command,
                output: String::from_utf8_lossy(&downstream.stderr).trim().to_owned(),
            }),
        }
    }
}
