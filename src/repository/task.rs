//! Repository implementation for tasks.
//!
//! Reads left-join the owning client so callers always see the client's
//! current row, or `None` when the task has no client. Writes check the
//! owning client and write the row under one write lock.

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::{
        client::Client,
        task::{NewTask, Task, UpdateTask},
        types::{ClientId, TaskId},
    },
    models::{
        client::Client as DbClient,
        task::{NewTask as DbNewTask, Task as DbTask, UpdateTask as DbUpdateTask},
    },
    repository::{
        DieselRepository, TaskReader, TaskWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

fn into_written((task, client): (DbTask, DbClient)) -> RepositoryResult<(Task, Client)> {
    Ok((
        Task::try_from(task).map_err(RepositoryError::from)?,
        Client::try_from(client).map_err(RepositoryError::from)?,
    ))
}

fn into_domain(row: (DbTask, Option<DbClient>)) -> RepositoryResult<(Task, Option<Client>)> {
    let (db_task, db_client) = row;
    let task = Task::try_from(db_task).map_err(RepositoryError::from)?;
    let client = db_client
        .map(Client::try_from)
        .transpose()
        .map_err(RepositoryError::from)?;
    Ok((task, client))
}

/// List reads drop rows whose stored values no longer parse (for example a
/// free-text status outside the known labels) instead of failing the page.
fn skip_unreadable<T>(task_id: i32, converted: RepositoryResult<T>) -> Option<T> {
    match converted {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("Skipping unreadable task {task_id}: {err}");
            None
        }
    }
}

impl TaskReader for DieselRepository {
    fn get_task_by_id(&self, id: TaskId) -> RepositoryResult<Option<(Task, Option<Client>)>> {
        use crate::schema::{clientes, tarefas};

        let mut conn = self.conn()?;
        let row = tarefas::table
            .left_join(clientes::table)
            .filter(tarefas::id.eq(id.get()))
            .first::<(DbTask, Option<DbClient>)>(&mut conn)
            .optional()?;

        row.map(into_domain).transpose()
    }

    fn list_tasks(&self) -> RepositoryResult<Vec<(Task, Option<Client>)>> {
        use crate::schema::{clientes, tarefas};

        let mut conn = self.conn()?;
        Ok(tarefas::table
            .left_join(clientes::table)
            .order(tarefas::id.asc())
            .load::<(DbTask, Option<DbClient>)>(&mut conn)?
            .into_iter()
            .filter_map(|row| {
                let task_id = row.0.id;
                skip_unreadable(task_id, into_domain(row))
            })
            .collect())
    }

    fn list_tasks_by_client(&self, client_id: ClientId) -> RepositoryResult<Vec<Task>> {
        use crate::schema::tarefas;

        let mut conn = self.conn()?;
        Ok(tarefas::table
            .filter(tarefas::client_id.eq(client_id.get()))
            .order(tarefas::id.asc())
            .load::<DbTask>(&mut conn)?
            .into_iter()
            .filter_map(|task| {
                let task_id = task.id;
                skip_unreadable(task_id, Task::try_from(task).map_err(RepositoryError::from))
            })
            .collect())
    }
}

/// Loads the client a task write refers to, inside the caller's transaction.
fn find_owner(conn: &mut SqliteConnection, client_id: ClientId) -> RepositoryResult<DbClient> {
    use crate::schema::clientes;

    clientes::table
        .find(client_id.get())
        .first::<DbClient>(conn)
        .optional()?
        .ok_or_else(|| RepositoryError::RelationNotFound(format!("client {client_id}")))
}

impl TaskWriter for DieselRepository {
    fn create_task(&self, new_task: &NewTask) -> RepositoryResult<(Task, Client)> {
        use crate::schema::tarefas;

        let mut conn = self.conn()?;
        let insertable: DbNewTask = new_task.into();

        // IMMEDIATE takes the write lock before the owner lookup.
        let row = conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            let client = find_owner(conn, new_task.client_id)?;
            let task = diesel::insert_into(tarefas::table)
                .values(&insertable)
                .get_result::<DbTask>(conn)?;
            Ok((task, client))
        })?;

        into_written(row)
    }

    fn update_task(
        &self,
        task_id: TaskId,
        updates: &UpdateTask,
    ) -> RepositoryResult<(Task, Client)> {
        use crate::schema::tarefas;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateTask = updates.into();

        let row = conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            let client = find_owner(conn, updates.client_id)?;
            let task = diesel::update(tarefas::table.find(task_id.get()))
                .set(&db_updates)
                .get_result::<DbTask>(conn)?;
            Ok((task, client))
        })?;

        into_written(row)
    }

    fn delete_task(&self, task_id: TaskId) -> RepositoryResult<()> {
        use crate::schema::tarefas;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(tarefas::table.find(task_id.get())).execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
