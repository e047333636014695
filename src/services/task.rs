use validator::Validate;

use crate::domain::types::TaskId;
use crate::dto::task::{TaskDto, TaskFields};
use crate::repository::{TaskReader, TaskWriter};
use crate::services::{ServiceError, ServiceResult};

fn parse_task_id(id: i32) -> ServiceResult<TaskId> {
    TaskId::new(id).map_err(|_| ServiceError::NotFound)
}

/// Validates the payload and extracts typed fields without touching storage.
fn read_payload(payload: TaskDto) -> ServiceResult<TaskFields> {
    payload.validate()?;
    Ok(TaskFields::try_from(payload)?)
}

/// Returns every task rendered with its client.
pub fn list_tasks<R>(repo: &R) -> ServiceResult<Vec<TaskDto>>
where
    R: TaskReader + ?Sized,
{
    repo.list_tasks()?
        .iter()
        .map(|(task, client)| {
            TaskDto::from_entity(task, client.as_ref()).map_err(|err| {
                log::error!("Task {} cannot be rendered: {err}", task.id);
                ServiceError::from(err)
            })
        })
        .collect()
}

/// Fetches a task by its identifier.
pub fn get_task<R>(repo: &R, task_id: i32) -> ServiceResult<TaskDto>
where
    R: TaskReader + ?Sized,
{
    let task_id = parse_task_id(task_id)?;
    let (task, client) = repo
        .get_task_by_id(task_id)?
        .ok_or(ServiceError::NotFound)?;

    Ok(TaskDto::from_entity(&task, client.as_ref())?)
}

/// Creates a task owned by the client referenced in the payload.
pub fn create_task<R>(repo: &R, payload: TaskDto) -> ServiceResult<TaskDto>
where
    R: TaskWriter + ?Sized,
{
    let fields = read_payload(payload)?;

    let (task, client) = repo.create_task(&fields.into_new_task())?;
    log::info!("Created task {} for client {}", task.id, client.id);

    Ok(TaskDto::from_entity(&task, Some(&client))?)
}

/// Overwrites title, description, status and priority of a task and
/// re-resolves its client.
pub fn update_task<R>(repo: &R, task_id: i32, payload: TaskDto) -> ServiceResult<TaskDto>
where
    R: TaskReader + TaskWriter + ?Sized,
{
    let fields = read_payload(payload)?;

    let task_id = parse_task_id(task_id)?;
    if repo.get_task_by_id(task_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    let (task, client) = repo.update_task(task_id, &fields.into_update_task())?;

    Ok(TaskDto::from_entity(&task, Some(&client))?)
}

/// Deletes a task.
pub fn delete_task<R>(repo: &R, task_id: i32) -> ServiceResult<()>
where
    R: TaskReader + TaskWriter + ?Sized,
{
    let task_id = parse_task_id(task_id)?;
    if repo.get_task_by_id(task_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    repo.delete_task(task_id)?;
    log::info!("Deleted task {task_id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::client::Client;
    use crate::domain::task::{Task, TaskStatus};
    use crate::domain::types::{ClientAddress, ClientId, ClientName, ClientPhone, TaskTitle};
    use crate::dto::client::ClientDto;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn stored_client(id: i32) -> Client {
        Client {
            id: ClientId::new(id).unwrap(),
            name: ClientName::new("Acme").unwrap(),
            phone: ClientPhone::new("555-0100").unwrap(),
            address: ClientAddress::new("1 Main St").unwrap(),
            email: None,
            notes: None,
        }
    }

    fn stored_task(id: i32, client_id: Option<i32>, status: TaskStatus) -> Task {
        Task {
            id: TaskId::new(id).unwrap(),
            title: TaskTitle::new("Follow up").unwrap(),
            description: None,
            status,
            priority: Some(2),
            client_id: client_id.map(|id| ClientId::new(id).unwrap()),
        }
    }

    fn payload(client_id: i32, status: &str) -> TaskDto {
        TaskDto {
            id: None,
            title: Some("Follow up".to_string()),
            description: None,
            status: Some(status.to_string()),
            priority: Some(2),
            client: Some(ClientDto {
                id: Some(client_id),
                ..ClientDto::default()
            }),
        }
    }

    #[test]
    fn get_missing_task_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_task_by_id().returning(|_| Ok(None));

        assert!(matches!(get_task(&repo, 42), Err(ServiceError::NotFound)));
    }

    #[test]
    fn get_task_without_client_is_an_explicit_error() {
        let mut repo = MockRepository::new();
        repo.expect_get_task_by_id()
            .returning(|id| Ok(Some((stored_task(id.get(), None, TaskStatus::Open), None))));

        assert!(matches!(
            get_task(&repo, 1),
            Err(ServiceError::MissingClient)
        ));
    }

    #[test]
    fn create_with_unknown_client_is_client_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_create_task()
            .withf(|new_task| new_task.client_id == ClientId::new(7).unwrap())
            .returning(|_| Err(RepositoryError::RelationNotFound("client 7".into())));

        let result = create_task(&repo, payload(7, "open"));

        assert!(matches!(result, Err(ServiceError::ClientNotFound)));
    }

    #[test]
    fn create_validates_before_any_lookup() {
        let repo = MockRepository::new();
        let payload = TaskDto {
            priority: None,
            ..payload(1, "open")
        };

        let result = create_task(&repo, payload);

        assert!(matches!(result, Err(ServiceError::Validation(msg)) if msg.contains("priority")));
    }

    #[test]
    fn create_returns_dto_with_embedded_client() {
        let mut repo = MockRepository::new();
        repo.expect_create_task()
            .withf(|new_task| new_task.client_id.get() == 1 && new_task.priority == 2)
            .returning(|new_task| {
                let task = Task {
                    id: TaskId::new(10).unwrap(),
                    title: new_task.title.clone(),
                    description: new_task.description.clone(),
                    status: new_task.status,
                    priority: Some(new_task.priority),
                    client_id: Some(new_task.client_id),
                };
                Ok((task, stored_client(new_task.client_id.get())))
            });

        let dto = create_task(&repo, payload(1, "open")).unwrap();

        assert_eq!(dto.id, Some(10));
        assert_eq!(dto.client.and_then(|c| c.name), Some("Acme".to_string()));
    }

    #[test]
    fn update_missing_task_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_task_by_id().returning(|_| Ok(None));
        repo.expect_update_task().never();

        let result = update_task(&repo, 5, payload(1, "done"));

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn update_with_unknown_client_does_not_keep_old_relation() {
        let mut repo = MockRepository::new();
        repo.expect_get_task_by_id().returning(|id| {
            Ok(Some((
                stored_task(id.get(), Some(1), TaskStatus::Open),
                Some(stored_client(1)),
            )))
        });
        repo.expect_update_task()
            .withf(|_, updates| updates.client_id.get() == 2)
            .returning(|_, _| Err(RepositoryError::RelationNotFound("client 2".into())));

        let result = update_task(&repo, 5, payload(2, "done"));

        assert!(matches!(result, Err(ServiceError::ClientNotFound)));
    }

    #[test]
    fn update_overwrites_status() {
        let mut repo = MockRepository::new();
        repo.expect_get_task_by_id().returning(|id| {
            Ok(Some((
                stored_task(id.get(), Some(1), TaskStatus::Open),
                Some(stored_client(1)),
            )))
        });
        repo.expect_update_task()
            .withf(|task_id, updates| task_id.get() == 5 && updates.status == TaskStatus::Done)
            .returning(|task_id, _| {
                Ok((
                    stored_task(task_id.get(), Some(1), TaskStatus::Done),
                    stored_client(1),
                ))
            });

        let dto = update_task(&repo, 5, payload(1, "done")).unwrap();

        assert_eq!(dto.status.as_deref(), Some("done"));
    }

    #[test]
    fn list_fails_when_a_task_has_no_client() {
        let mut repo = MockRepository::new();
        repo.expect_list_tasks().returning(|| {
            Ok(vec![
                (
                    stored_task(1, Some(1), TaskStatus::Open),
                    Some(stored_client(1)),
                ),
                (stored_task(2, None, TaskStatus::Done), None),
            ])
        });

        assert!(matches!(list_tasks(&repo), Err(ServiceError::MissingClient)));
    }

    #[test]
    fn delete_missing_task_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_task_by_id().returning(|_| Ok(None));
        repo.expect_delete_task().never();

        assert!(matches!(delete_task(&repo, 3), Err(ServiceError::NotFound)));
    }
}
