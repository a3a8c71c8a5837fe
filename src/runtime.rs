//! Handle on the external container runtime for one crane invocation

use std::fmt;

use crate::error::Result;
use crate::executor::Executor;

pub const DEFAULT_BINARY: &str = "docker";

/// How [`Runtime::filtered`] matches a token against the listed lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match {
    /// the token appears bounded by non-word characters
    Word,
    /// the token is the whole line
    Line,
}

impl Match {
    fn grep_flags(self) -> &'static str {
        match self {
            Match::Word => "-wF",
            Match::Line => "-xF",
        }
    }
}

/// Runtime bundles what used to be process-wide state: the executor used
/// to reach the runtime, the runtime binary, and whether containers were
/// targeted explicitly. A Runtime and the containers it drives must not
/// be shared by two concurrent group runs.
pub struct Runtime {
    executor: Box<dyn Executor>,
    binary: String,
    manual_targeting: bool,
}

impl fmt::Debug for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("binary", &self.binary)
            .field("manual_targeting", &self.manual_targeting)
            .finish_non_exhaustive()
    }
}

impl Runtime {
    pub fn new(executor: Box<dyn Executor>) -> Self {
        Self {
            executor,
            binary: DEFAULT_BINARY.to_owned(),
            manual_targeting: false,
        }
    }

    pub fn with_binary<S: Into<String>>(mut self, binary: S) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn with_manual_targeting(mut self, manual_targeting: bool) -> Self {
        self.manual_targeting = manual_targeting;
        self
    }

    pub fn executor(&self) -> &dyn Executor {
        self.executor.as_ref()
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// Containers flagged `manual` only take part in run and start when set.
    pub fn manual_targeting(&self) -> bool {
        self.manual_targeting
    }

    /// Runs a state-changing subcommand with inherited stdio.
    pub fn execute(&self, args: &[String]) -> Result<()> {
        self.executor.execute(&self.binary, args)
    }

    /// Runs a read-only subcommand and captures its output.
    pub fn output(&self, args: &[String]) -> Result<String> {
        self.executor.output(&self.binary, args)
    }

    /// Lists with `list_args` and keeps the lines matching `token`. No
    /// matching line is an empty output, not an error.
    pub fn filtered(&self, list_args: &[&str], token: &str, mode: Match) -> Result<String> {
        let mut listing = vec![self.binary.clone()];
        listing.extend(list_args.iter().map(|a| a.to_string()));
        let grep = vec![
            "grep".to_owned(),
            mode.grep_flags().to_owned(),
            "-e".to_owned(),
            token.to_owned(),
        ];
        self.executor.piped_output(&listing, &grep)
    }
}

/// Collects string-ish arguments into the owned form the executor takes.
pub fn to_args<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    args.iter().map(|a| a.as_ref().to_owned()).collect()
}
