//! Wire representation of a client.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::types::{
    ClientAddress, ClientEmail, ClientId, ClientName, ClientNotes, ClientPhone, MAX_NOTES_LENGTH,
    TypeConstraintError, non_blank,
};

/// Client payload accepted by the client endpoints and embedded in task DTOs.
///
/// Field aliases accept the Portuguese names used by the legacy front-end.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct ClientDto {
    /// Ignored on create and update; the path or storage decides the id.
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default, alias = "nome")]
    #[validate(required(message = "name is required"))]
    pub name: Option<String>,
    #[serde(default, alias = "telefone")]
    #[validate(required(message = "phone is required"))]
    pub phone: Option<String>,
    #[serde(default, alias = "endereco")]
    #[validate(required(message = "address is required"))]
    pub address: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "notas")]
    #[validate(length(max = MAX_NOTES_LENGTH, message = "notes are too long"))]
    pub notes: Option<String>,
}

/// Typed fields shared by [`NewClient`] and [`UpdateClient`].
type ClientFields = (
    ClientName,
    ClientPhone,
    ClientAddress,
    Option<ClientEmail>,
    Option<ClientNotes>,
);

fn required(value: Option<String>) -> Result<String, TypeConstraintError> {
    value.ok_or(TypeConstraintError::Missing)
}

impl ClientDto {
    fn into_fields(self) -> Result<ClientFields, TypeConstraintError> {
        Ok((
            required(self.name)
                .and_then(ClientName::new)
                .map_err(|e| e.in_field("name"))?,
            required(self.phone)
                .and_then(ClientPhone::new)
                .map_err(|e| e.in_field("phone"))?,
            required(self.address)
                .and_then(ClientAddress::new)
                .map_err(|e| e.in_field("address"))?,
            non_blank(self.email)
                .map(ClientEmail::new)
                .transpose()
                .map_err(|e| e.in_field("email"))?,
            non_blank(self.notes)
                .map(ClientNotes::new)
                .transpose()
                .map_err(|e| e.in_field("notes"))?,
        ))
    }

    /// Id of the embedded client, used to resolve a task's owner.
    pub fn client_id(&self) -> Result<ClientId, TypeConstraintError> {
        self.id
            .ok_or(TypeConstraintError::Missing)
            .and_then(ClientId::new)
            .map_err(|e| e.in_field("client.id"))
    }
}

impl From<&Client> for ClientDto {
    fn from(client: &Client) -> Self {
        Self {
            id: Some(client.id.get()),
            name: Some(client.name.to_string()),
            phone: Some(client.phone.to_string()),
            address: Some(client.address.to_string()),
            email: client.email.as_ref().map(ToString::to_string),
            notes: client.notes.as_ref().map(ToString::to_string),
        }
    }
}

impl TryFrom<ClientDto> for NewClient {
    type Error = TypeConstraintError;

    fn try_from(dto: ClientDto) -> Result<Self, Self::Error> {
        let (name, phone, address, email, notes) = dto.into_fields()?;
        Ok(NewClient::new(name, phone, address, email, notes))
    }
}

impl TryFrom<ClientDto> for UpdateClient {
    type Error = TypeConstraintError;

    fn try_from(dto: ClientDto) -> Result<Self, Self::Error> {
        let (name, phone, address, email, notes) = dto.into_fields()?;
        Ok(UpdateClient::new(name, phone, address, email, notes))
    }
}
