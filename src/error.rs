//! Errors raised while translating a container group into runtime invocations

/// CraneError covers every way a crane operation can fail. Inspection
/// failures are usually swallowed by the existence checks; everything else
/// aborts the current top-level command.
#[derive(Debug, thiserror::Error)]
pub enum CraneError {
    #[error("inspection `{command}` failed: {output}")]
    InspectionFailed { command: String, output: String },
    #[error("`{command}` exited unsuccessfully ({status})")]
    ExecutionFailed { command: String, status: String },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot find volume {volume} in container {container} (inspect output: {output})")]
    VolumeNotFound {
        container: String,
        volume: String,
        output: String,
    },
    #[error("cannot parse {what} of container {container}: {output}")]
    MalformedInspect {
        container: String,
        what: &'static str,
        output: String,
    },
    #[error("container {0} does not exist")]
    ContainerNotFound(String),
    #[error("container {0} is running and cannot be removed")]
    ContainerRunning(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CraneError>;
