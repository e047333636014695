use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        client::{Client, NewClient, UpdateClient},
        task::{NewTask, Task, UpdateTask},
        types::{ClientId, TaskId},
    },
    repository::errors::RepositoryResult,
};

pub mod client;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod task;

/// Diesel-backed repository shared by every request through the pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait ClientReader {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
    fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
}

pub trait ClientWriter {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    fn update_client(&self, client_id: ClientId, updates: &UpdateClient)
    -> RepositoryResult<Client>;
    /// Removes the client together with every task it owns.
    fn delete_client(&self, client_id: ClientId) -> RepositoryResult<()>;
}

pub trait TaskReader {
    /// Loads the task with its owning client, if the relation resolves.
    fn get_task_by_id(&self, id: TaskId) -> RepositoryResult<Option<(Task, Option<Client>)>>;
    fn list_tasks(&self) -> RepositoryResult<Vec<(Task, Option<Client>)>>;
    fn list_tasks_by_client(&self, client_id: ClientId) -> RepositoryResult<Vec<Task>>;
}

/// Task writes resolve the owning client and write the row in one
/// transaction. An unknown client yields [`RepositoryError::RelationNotFound`].
///
/// [`RepositoryError::RelationNotFound`]: errors::RepositoryError::RelationNotFound
pub trait TaskWriter {
    fn create_task(&self, new_task: &NewTask) -> RepositoryResult<(Task, Client)>;
    fn update_task(
        &self,
        task_id: TaskId,
        updates: &UpdateTask,
    ) -> RepositoryResult<(Task, Client)>;
    fn delete_task(&self, task_id: TaskId) -> RepositoryResult<()>;
}
