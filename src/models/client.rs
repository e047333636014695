use diesel::prelude::*;

use crate::domain::client::{
    Client as DomainClient, NewClient as DomainNewClient, UpdateClient as DomainUpdateClient,
};
use crate::domain::types::{
    ClientAddress, ClientEmail, ClientId, ClientName, ClientNotes, ClientPhone,
    TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::clientes)]
/// Diesel model for [`crate::domain::client::Client`].
pub struct Client {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub email: Option<String>,
    pub notes: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clientes)]
/// Insertable form of [`Client`].
pub struct NewClient<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub address: &'a str,
    pub email: Option<&'a str>,
    pub notes: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::clientes)]
#[diesel(treat_none_as_null = true)]
/// Data used when overwriting a [`Client`] record.
pub struct UpdateClient<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub address: &'a str,
    pub email: Option<&'a str>,
    pub notes: Option<&'a str>,
}

impl TryFrom<Client> for DomainClient {
    type Error = TypeConstraintError;

    fn try_from(client: Client) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ClientId::new(client.id)?,
            name: ClientName::new(client.name)?,
            phone: ClientPhone::new(client.phone)?,
            address: ClientAddress::new(client.address)?,
            email: client.email.map(ClientEmail::new).transpose()?,
            notes: client.notes.map(ClientNotes::new).transpose()?,
        })
    }
}

impl<'a> From<&'a DomainNewClient> for NewClient<'a> {
    fn from(client: &'a DomainNewClient) -> Self {
        Self {
            name: client.name.as_str(),
            phone: client.phone.as_str(),
            address: client.address.as_str(),
            email: client.email.as_ref().map(ClientEmail::as_str),
            notes: client.notes.as_ref().map(ClientNotes::as_str),
        }
    }
}

impl<'a> From<&'a DomainUpdateClient> for UpdateClient<'a> {
    fn from(client: &'a DomainUpdateClient) -> Self {
        Self {
            name: client.name.as_str(),
            phone: client.phone.as_str(),
            address: client.address.as_str(),
            email: client.email.as_ref().map(ClientEmail::as_str),
            notes: client.notes.as_ref().map(ClientNotes::as_str),
        }
    }
}
