//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::task::{NewTask, Task, UpdateTask};
use crate::domain::types::{ClientId, TaskId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientReader, ClientWriter, TaskReader, TaskWriter};

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
        fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
    }

    impl ClientWriter for Repository {
        fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
        fn update_client(
            &self,
            client_id: ClientId,
            updates: &UpdateClient,
        ) -> RepositoryResult<Client>;
        fn delete_client(&self, client_id: ClientId) -> RepositoryResult<()>;
    }

    impl TaskReader for Repository {
        fn get_task_by_id(&self, id: TaskId) -> RepositoryResult<Option<(Task, Option<Client>)>>;
        fn list_tasks(&self) -> RepositoryResult<Vec<(Task, Option<Client>)>>;
        fn list_tasks_by_client(&self, client_id: ClientId) -> RepositoryResult<Vec<Task>>;
    }

    impl TaskWriter for Repository {
        fn create_task(&self, new_task: &NewTask) -> RepositoryResult<(Task, Client)>;
        fn update_task(
            &self,
            task_id: TaskId,
            updates: &UpdateTask,
        ) -> RepositoryResult<(Task, Client)>;
        fn delete_task(&self, task_id: TaskId) -> RepositoryResult<()>;
    }
}
