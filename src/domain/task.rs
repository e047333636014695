//! Task entity and its status.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientId, TaskId, TaskTitle, TypeConstraintError};

/// Progress of a task. Any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Open,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Returns the canonical storage and wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = TypeConstraintError;

    /// Accepts the canonical names as well as the labels used by the
    /// Portuguese front-end (`ABERTO`, `ANDAMENTO`, `CONCLUIDO`).
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "open" | "aberto" => Ok(Self::Open),
            "in-progress" | "in_progress" | "andamento" | "em_andamento" => Ok(Self::InProgress),
            "done" | "concluido" => Ok(Self::Done),
            "" => Err(TypeConstraintError::EmptyString),
            _ => Err(TypeConstraintError::InvalidValue(format!(
                "unknown task status `{}`",
                value.trim()
            ))),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub title: TaskTitle,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: Option<i32>,
    /// Owning client. Rows written through the API always carry one; older
    /// rows may not.
    pub client_id: Option<ClientId>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewTask {
    pub title: TaskTitle,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: i32,
    pub client_id: ClientId,
}

/// Full replacement of the mutable task fields, including the owning client.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateTask {
    pub title: TaskTitle,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: i32,
    pub client_id: ClientId,
}
