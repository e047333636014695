use serde::{Deserialize, Serialize};

use crate::domain::types::{
    ClientAddress, ClientEmail, ClientId, ClientName, ClientNotes, ClientPhone,
};

/// Customer record owning zero or more tasks.
///
/// Tasks are not held here; they reference their client by id and are
/// listed through [`crate::repository::TaskReader::list_tasks_by_client`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub name: ClientName,
    pub phone: ClientPhone,
    pub address: ClientAddress,
    pub email: Option<ClientEmail>,
    pub notes: Option<ClientNotes>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewClient {
    pub name: ClientName,
    pub phone: ClientPhone,
    pub address: ClientAddress,
    pub email: Option<ClientEmail>,
    pub notes: Option<ClientNotes>,
}

impl NewClient {
    #[must_use]
    pub fn new(
        name: ClientName,
        phone: ClientPhone,
        address: ClientAddress,
        email: Option<ClientEmail>,
        notes: Option<ClientNotes>,
    ) -> Self {
        Self {
            name,
            phone,
            address,
            email,
            notes,
        }
    }
}

/// Full replacement of the mutable client fields.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateClient {
    pub name: ClientName,
    pub phone: ClientPhone,
    pub address: ClientAddress,
    pub email: Option<ClientEmail>,
    pub notes: Option<ClientNotes>,
}

impl UpdateClient {
    #[must_use]
    pub fn new(
        name: ClientName,
        phone: ClientPhone,
        address: ClientAddress,
        email: Option<ClientEmail>,
        notes: Option<ClientNotes>,
    ) -> Self {
        Self {
            name,
            phone,
            address,
            email,
            notes,
        }
    }
}
