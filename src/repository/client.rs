use diesel::prelude::*;

use crate::{
    domain::{
        client::{Client, NewClient, UpdateClient},
        types::ClientId,
    },
    models::client::{
        Client as DbClient, NewClient as DbNewClient, UpdateClient as DbUpdateClient,
    },
    repository::{
        ClientReader, ClientWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl ClientReader for DieselRepository {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        use crate::schema::clientes;

        let mut conn = self.conn()?;
        let client = clientes::table
            .find(id.get())
            .first::<DbClient>(&mut conn)
            .optional()?;

        match client {
            Some(client) => Ok(Some(
                Client::try_from(client).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn list_clients(&self) -> RepositoryResult<Vec<Client>> {
        use crate::schema::clientes;

        let mut conn = self.conn()?;
        clientes::table
            .order(clientes::id.asc())
            .load::<DbClient>(&mut conn)?
            .into_iter()
            .map(|client| Client::try_from(client).map_err(RepositoryError::from))
            .collect()
    }
}

impl ClientWriter for DieselRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        use crate::schema::clientes;

        let mut conn = self.conn()?;
        let insertable: DbNewClient = new_client.into();
        let created = diesel::insert_into(clientes::table)
            .values(&insertable)
            .get_result::<DbClient>(&mut conn)?;

        Client::try_from(created).map_err(RepositoryError::from)
    }

    fn update_client(
        &self,
        client_id: ClientId,
        updates: &UpdateClient,
    ) -> RepositoryResult<Client> {
        use crate::schema::clientes;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateClient = updates.into();

        let updated = diesel::update(clientes::table.find(client_id.get()))
            .set(&db_updates)
            .get_result::<DbClient>(&mut conn)?;

        Client::try_from(updated).map_err(RepositoryError::from)
    }

    fn delete_client(&self, client_id: ClientId) -> RepositoryResult<()> {
        use crate::schema::{clientes, tarefas};

        let mut conn = self.conn()?;

        // ON DELETE CASCADE only fires with `PRAGMA foreign_keys = ON`.
        let deleted = conn.transaction::<usize, diesel::result::Error, _>(|conn| {
            diesel::delete(tarefas::table.filter(tarefas::client_id.eq(client_id.get())))
                .execute(conn)?;
            diesel::delete(clientes::table.find(client_id.get())).execute(conn)
        })?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
