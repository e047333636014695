//! Wire representation of a task with its client embedded.
//!
//! Reads embed the owning client's current row. Writes only use the embedded
//! client's `id` to resolve the owner; the rest of the embedded payload never
//! updates the client.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use crate::domain::client::Client;
use crate::domain::task::{NewTask, Task, TaskStatus, UpdateTask};
use crate::domain::types::{ClientId, TaskTitle, TypeConstraintError, non_blank};
use crate::dto::client::ClientDto;

/// Failure to render a stored task as a [`TaskDto`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskMappingError {
    #[error("task has no associated client")]
    MissingClient,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct TaskDto {
    /// Ignored on create and update.
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default, alias = "titulo")]
    #[validate(required(message = "title is required"))]
    pub title: Option<String>,
    #[serde(default, alias = "descricao")]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(required(message = "status is required"))]
    pub status: Option<String>,
    #[serde(default, alias = "prioridade")]
    #[validate(required(message = "priority is required"))]
    pub priority: Option<i32>,
    #[serde(default, alias = "cliente")]
    #[validate(required(message = "client is required"))]
    pub client: Option<ClientDto>,
}

/// Typed task fields read from a payload, before the client is resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskFields {
    pub title: TaskTitle,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: i32,
    pub client_id: ClientId,
}

impl TaskFields {
    pub fn into_new_task(self) -> NewTask {
        NewTask {
            title: self.title,
            description: self.description,
            status: self.status,
            priority: self.priority,
            client_id: self.client_id,
        }
    }

    pub fn into_update_task(self) -> UpdateTask {
        UpdateTask {
            title: self.title,
            description: self.description,
            status: self.status,
            priority: self.priority,
            client_id: self.client_id,
        }
    }
}

impl TaskDto {
    /// Renders a task together with its owning client.
    ///
    /// The client must be the row the task's `client_id` points to.
    pub fn from_entity(task: &Task, client: Option<&Client>) -> Result<Self, TaskMappingError> {
        let client = client.ok_or(TaskMappingError::MissingClient)?;
        Ok(Self {
            id: Some(task.id.get()),
            title: Some(task.title.to_string()),
            description: task.description.clone(),
            status: Some(task.status.as_str().to_string()),
            priority: task.priority,
            client: Some(ClientDto::from(client)),
        })
    }
}

impl TryFrom<TaskDto> for TaskFields {
    type Error = TypeConstraintError;

    fn try_from(dto: TaskDto) -> Result<Self, Self::Error> {
        let title = dto
            .title
            .ok_or(TypeConstraintError::Missing)
            .and_then(TaskTitle::new)
            .map_err(|e| e.in_field("title"))?;
        let status = dto
            .status
            .ok_or(TypeConstraintError::Missing)
            .and_then(|status| TaskStatus::try_from(status.as_str()))
            .map_err(|e| e.in_field("status"))?;
        let priority = dto
            .priority
            .ok_or_else(|| TypeConstraintError::Missing.in_field("priority"))?;
        let client = dto
            .client
            .ok_or_else(|| TypeConstraintError::Missing.in_field("client"))?;

        Ok(Self {
            title,
            description: non_blank(dto.description),
            status,
            priority,
            client_id: client.client_id()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::types::{ClientAddress, ClientName, ClientPhone, TaskId};

    fn client() -> Client {
        Client {
            id: ClientId::new(5).unwrap(),
            name: ClientName::new("Acme").unwrap(),
            phone: ClientPhone::new("555-0100").unwrap(),
            address: ClientAddress::new("1 Main St").unwrap(),
            email: None,
            notes: None,
        }
    }

    fn task(client_id: Option<i32>) -> Task {
        Task {
            id: TaskId::new(1).unwrap(),
            title: TaskTitle::new("Follow up").unwrap(),
            description: None,
            status: TaskStatus::Open,
            priority: Some(2),
            client_id: client_id.map(|id| ClientId::new(id).unwrap()),
        }
    }

    fn payload() -> TaskDto {
        TaskDto {
            id: None,
            title: Some("Follow up".to_string()),
            description: Some("  ".to_string()),
            status: Some("open".to_string()),
            priority: Some(2),
            client: Some(ClientDto {
                id: Some(5),
                ..ClientDto::default()
            }),
        }
    }

    #[test]
    fn from_entity_embeds_client() {
        let client = client();
        let dto = TaskDto::from_entity(&task(Some(5)), Some(&client)).unwrap();

        assert_eq!(dto.id, Some(1));
        assert_eq!(dto.status.as_deref(), Some("open"));
        let embedded = dto.client.unwrap();
        assert_eq!(embedded.id, Some(5));
        assert_eq!(embedded.name.as_deref(), Some("Acme"));
        assert_eq!(embedded.phone.as_deref(), Some("555-0100"));
        assert_eq!(embedded.address.as_deref(), Some("1 Main St"));
    }

    #[test]
    fn from_entity_without_client_is_an_error() {
        assert_eq!(
            TaskDto::from_entity(&task(None), None),
            Err(TaskMappingError::MissingClient)
        );
        assert_eq!(
            TaskMappingError::MissingClient.to_string(),
            "task has no associated client"
        );
    }

    #[test]
    fn validation_reports_every_missing_field() {
        let errors = TaskDto::default().validate().unwrap_err();
        let fields = errors.field_errors();
        for field in ["title", "status", "priority", "client"] {
            assert!(fields.contains_key(field), "{field} should be required");
        }
        assert!(!fields.contains_key("description"));
    }

    #[test]
    fn payload_converts_into_fields() {
        let fields = TaskFields::try_from(payload()).unwrap();
        assert_eq!(fields.title.as_str(), "Follow up");
        assert_eq!(fields.description, None);
        assert_eq!(fields.status, TaskStatus::Open);
        assert_eq!(fields.priority, 2);
        assert_eq!(fields.client_id.get(), 5);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let dto = TaskDto {
            status: Some("someday".to_string()),
            ..payload()
        };
        let err = TaskFields::try_from(dto).unwrap_err();
        assert!(matches!(
            &err,
            TypeConstraintError::Field { field: "status", reason }
                if matches!(**reason, TypeConstraintError::InvalidValue(_))
        ));
        assert!(err.to_string().starts_with("status: "));
    }

    #[test]
    fn blank_title_error_names_the_field() {
        let dto = TaskDto {
            title: Some("  ".to_string()),
            ..payload()
        };
        assert_eq!(
            TaskFields::try_from(dto),
            Err(TypeConstraintError::EmptyString.in_field("title"))
        );
    }

    #[test]
    fn embedded_client_without_id_is_rejected() {
        let dto = TaskDto {
            client: Some(ClientDto::default()),
            ..payload()
        };
        assert!(TaskFields::try_from(dto).is_err());
    }

    #[test]
    fn fields_keep_the_referenced_client_id() {
        let new_task = TaskFields::try_from(payload()).unwrap().into_new_task();
        assert_eq!(new_task.client_id, client().id);
    }

    #[test]
    fn accepts_portuguese_payload() {
        let dto: TaskDto = serde_json::from_value(json!({
            "titulo": "Visita",
            "descricao": "levar contrato",
            "status": "ANDAMENTO",
            "prioridade": 1,
            "cliente": { "id": 5, "nome": "Acme" }
        }))
        .unwrap();
        let fields = TaskFields::try_from(dto).unwrap();
        assert_eq!(fields.status, TaskStatus::InProgress);
        assert_eq!(fields.description.as_deref(), Some("levar contrato"));
        assert_eq!(fields.client_id.get(), 5);
    }
}
