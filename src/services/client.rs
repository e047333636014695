use validator::Validate;

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::types::ClientId;
use crate::dto::client::ClientDto;
use crate::dto::task::TaskDto;
use crate::repository::{ClientReader, ClientWriter, TaskReader};
use crate::services::{ServiceError, ServiceResult};

/// Path ids that cannot exist are reported as absent rather than invalid.
pub(crate) fn parse_client_id(id: i32) -> ServiceResult<ClientId> {
    ClientId::new(id).map_err(|_| ServiceError::NotFound)
}

/// Returns every stored client.
pub fn list_clients<R>(repo: &R) -> ServiceResult<Vec<Client>>
where
    R: ClientReader + ?Sized,
{
    repo.list_clients().map_err(ServiceError::from)
}

/// Fetches a client by its identifier.
pub fn get_client<R>(repo: &R, client_id: i32) -> ServiceResult<Client>
where
    R: ClientReader + ?Sized,
{
    let client_id = parse_client_id(client_id)?;
    repo.get_client_by_id(client_id)?
        .ok_or(ServiceError::NotFound)
}

/// Validates the payload and persists a new client. Any `id` in the payload
/// is ignored.
pub fn create_client<R>(repo: &R, payload: ClientDto) -> ServiceResult<Client>
where
    R: ClientWriter + ?Sized,
{
    payload.validate()?;
    let new_client = NewClient::try_from(payload)?;

    let client = repo.create_client(&new_client)?;
    log::info!("Created client {}", client.id);
    Ok(client)
}

/// Overwrites name, phone, address, email and notes of an existing client.
pub fn update_client<R>(repo: &R, client_id: i32, payload: ClientDto) -> ServiceResult<Client>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    payload.validate()?;
    let updates = UpdateClient::try_from(payload)?;

    let client_id = parse_client_id(client_id)?;
    if repo.get_client_by_id(client_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    repo.update_client(client_id, &updates)
        .map_err(ServiceError::from)
}

/// Deletes a client and, with it, every task it owns.
pub fn delete_client<R>(repo: &R, client_id: i32) -> ServiceResult<()>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    let client_id = parse_client_id(client_id)?;
    if repo.get_client_by_id(client_id)?.is_none() {
        return Err(ServiceError::NotFound);
    }

    repo.delete_client(client_id)?;
    log::info!("Deleted client {client_id} and its tasks");
    Ok(())
}

/// Lists the tasks owned by a client, rendered with the client embedded.
pub fn list_client_tasks<R>(repo: &R, client_id: i32) -> ServiceResult<Vec<TaskDto>>
where
    R: ClientReader + TaskReader + ?Sized,
{
    let client = get_client(repo, client_id)?;

    repo.list_tasks_by_client(client.id)?
        .iter()
        .map(|task| TaskDto::from_entity(task, Some(&client)).map_err(ServiceError::from))
        .collect()
}
