//! Diesel models for task rows.

use diesel::prelude::*;

use crate::domain::task::{
    NewTask as DomainNewTask, Task as DomainTask, TaskStatus, UpdateTask as DomainUpdateTask,
};
use crate::domain::types::{ClientId, TaskId, TaskTitle, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::tarefas)]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: Option<i32>,
    pub client_id: Option<i32>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::tarefas)]
pub struct NewTask<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub status: &'a str,
    pub priority: Option<i32>,
    pub client_id: Option<i32>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::tarefas)]
#[diesel(treat_none_as_null = true)]
pub struct UpdateTask<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub status: &'a str,
    pub priority: Option<i32>,
    pub client_id: Option<i32>,
}

impl TryFrom<Task> for DomainTask {
    type Error = TypeConstraintError;

    fn try_from(task: Task) -> Result<Self, Self::Error> {
        Ok(Self {
            id: TaskId::new(task.id)?,
            title: TaskTitle::new(task.title)?,
            description: task.description,
            status: TaskStatus::try_from(task.status.as_str())?,
            priority: task.priority,
            client_id: task.client_id.map(ClientId::new).transpose()?,
        })
    }
}

impl<'a> From<&'a DomainNewTask> for NewTask<'a> {
    fn from(task: &'a DomainNewTask) -> Self {
        Self {
            title: task.title.as_str(),
            description: task.description.as_deref(),
            status: task.status.as_str(),
            priority: Some(task.priority),
            client_id: Some(task.client_id.get()),
        }
    }
}

impl<'a> From<&'a DomainUpdateTask> for UpdateTask<'a> {
    fn from(task: &'a DomainUpdateTask) -> Self {
        Self {
            title: task.title.as_str(),
            description: task.description.as_deref(),
            status: task.status.as_str(),
            priority: Some(task.priority),
            client_id: Some(task.client_id.get()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db_task(status: &str, client_id: Option<i32>) -> Task {
        Task {
            id: 3,
            title: "Follow up".to_string(),
            description: None,
            status: status.to_string(),
            priority: Some(2),
            client_id,
        }
    }

    #[test]
    fn task_into_domain() {
        let domain = DomainTask::try_from(db_task("open", Some(1))).unwrap();
        assert_eq!(domain.id.get(), 3);
        assert_eq!(domain.title.as_str(), "Follow up");
        assert_eq!(domain.status, TaskStatus::Open);
        assert_eq!(domain.priority, Some(2));
        assert_eq!(domain.client_id.map(ClientId::get), Some(1));
    }

    #[test]
    fn legacy_status_rows_are_read() {
        let domain = DomainTask::try_from(db_task("CONCLUIDO", None)).unwrap();
        assert_eq!(domain.status, TaskStatus::Done);
        assert!(domain.client_id.is_none());
    }

    #[test]
    fn unknown_status_rows_are_rejected() {
        assert!(DomainTask::try_from(db_task("archived", Some(1))).is_err());
    }

    #[test]
    fn from_domain_new_writes_canonical_status() {
        let domain = DomainNewTask {
            title: TaskTitle::new("Call back").unwrap(),
            description: Some("after lunch".to_string()),
            status: TaskStatus::InProgress,
            priority: 1,
            client_id: ClientId::new(9).unwrap(),
        };
        let new: NewTask = (&domain).into();
        assert_eq!(new.status, "in-progress");
        assert_eq!(new.description, Some("after lunch"));
        assert_eq!(new.priority, Some(1));
        assert_eq!(new.client_id, Some(9));
    }

    #[test]
    fn from_domain_update_clears_description() {
        let domain = DomainUpdateTask {
            title: TaskTitle::new("Call back").unwrap(),
            description: None,
            status: TaskStatus::Done,
            priority: 3,
            client_id: ClientId::new(2).unwrap(),
        };
        let update: UpdateTask = (&domain).into();
        assert_eq!(update.description, None);
        assert_eq!(update.status, "done");
        assert_eq!(update.client_id, Some(2));
    }
}
