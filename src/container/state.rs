//! Information about the observed status of a container
use std::fmt::Display;

/// Indicates status of the container as reported by the runtime. Nothing
/// is stored: the status is queried again every time it is needed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ContainerStatus {
    // The runtime does not know the container
    Absent,
    // The container exists but its process is not running
    Stopped,
    // The container process is running
    Running,
}

impl ContainerStatus {
    pub fn exists(&self) -> bool {
        !matches!(self, ContainerStatus::Absent)
    }

    pub fn can_start(&self) -> bool {
        matches!(self, ContainerStatus::Stopped)
    }

    pub fn can_stop(&self) -> bool {
        matches!(self, ContainerStatus::Running)
    }

    pub fn can_kill(&self) -> bool {
        matches!(self, ContainerStatus::Running)
    }

    pub fn can_delete(&self) -> bool {
        matches!(self, ContainerStatus::Stopped)
    }
}

impl Display for ContainerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let print = match *self {
            Self::Absent => "Absent",
            Self::Stopped => "Stopped",
            Self::Running => "Running",
        };

        write!(f, "{}", print)
    }
}
