//! Client business logic - Handles all client-related store operations.
//!
//! Clients are identified by name. There is no uniqueness constraint, so
//! deleting by name removes every row carrying that name, and an order keeps
//! pointing at a name even after the client is gone.

use crate::{
    entities::{Client, client},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;

/// A client that has passed validation (or came from an import) but is not stored yet.
///
/// The aliases let the CSV importer accept capitalized and Russian headers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct NewClient {
    /// Client name
    #[serde(default, alias = "Name", alias = "Имя")]
    pub name: String,
    /// E-mail address
    #[serde(default, alias = "Email", alias = "E-mail")]
    pub email: String,
    /// Phone number
    #[serde(default, alias = "Phone", alias = "Телефон")]
    pub phone: String,
    /// Delivery address
    #[serde(default, alias = "Address", alias = "Адрес")]
    pub address: String,
}

impl From<&client::Model> for NewClient {
    fn from(model: &client::Model) -> Self {
        Self {
            name: model.name.clone(),
            email: model.email.clone(),
            phone: model.phone.clone(),
            address: model.address.clone(),
        }
    }
}

/// Stores a new client.
pub async fn save_client(db: &DatabaseConnection, new_client: NewClient) -> Result<client::Model> {
    let client = client::ActiveModel {
        name: Set(new_client.name),
        email: Set(new_client.email),
        phone: Set(new_client.phone),
        address: Set(new_client.address),
        ..Default::default()
    };
    let saved = client.insert(db).await?;
    tracing::info!(id = saved.id, name = %saved.name, "Client saved");
    Ok(saved)
}

/// Stores a batch of imported clients, returning how many were written.
pub async fn import_clients(db: &DatabaseConnection, clients: Vec<NewClient>) -> Result<usize> {
    let mut imported = 0;
    for new_client in clients {
        save_client(db, new_client).await?;
        imported += 1;
    }
    tracing::info!(imported, "Client import finished");
    Ok(imported)
}

/// Retrieves all clients in creation order.
pub async fn load_clients(db: &DatabaseConnection) -> Result<Vec<client::Model>> {
    Client::find()
        .order_by_asc(client::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds the first client with exactly this name.
pub async fn get_client_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<client::Model>> {
    Client::find()
        .filter(client::Column::Name.eq(name))
        .order_by_asc(client::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Deletes every client with exactly this name, returning the number removed.
pub async fn delete_client_by_name(db: &DatabaseConnection, name: &str) -> Result<u64> {
    tracing::debug!(name, "Deleting client");
    let result = Client::delete_many()
        .filter(client::Column::Name.eq(name))
        .exec(db)
        .await?;
    tracing::info!(name, removed = result.rows_affected, "Client delete finished");
    Ok(result.rows_affected)
}

/// Case-insensitive substring search across name, e-mail, phone and address.
///
/// An empty query matches every client.
#[must_use]
pub fn filter_clients<'a>(clients: &'a [client::Model], query: &str) -> Vec<&'a client::Model> {
    let query = query.trim().to_lowercase();
    clients
        .iter()
        .filter(|client| {
            [&client.name, &client.email, &client.phone, &client.address]
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_save_and_load_clients() -> Result<()> {
        let db = setup_test_db().await?;

        let alice = create_test_client(&db, "Alice").await?;
        let bob = create_test_client(&db, "Bob").await?;

        assert_eq!(alice.email, "alice@example.com");
        assert_eq!(load_clients(&db).await?, vec![alice, bob]);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_client_by_name() -> Result<()> {
        let db = setup_test_db().await?;
        let alice = create_test_client(&db, "Alice").await?;

        assert_eq!(get_client_by_name(&db, "Alice").await?, Some(alice));
        assert_eq!(get_client_by_name(&db, "alice").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_client_by_name_removes_all_matches() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_client(&db, "Alice").await?;
        create_test_client(&db, "Alice").await?;
        let bob = create_test_client(&db, "Bob").await?;

        assert_eq!(delete_client_by_name(&db, "Alice").await?, 2);
        assert_eq!(load_clients(&db).await?, vec![bob]);

        // Unknown names are not an error
        assert_eq!(delete_client_by_name(&db, "Carol").await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_import_clients() -> Result<()> {
        let db = setup_test_db().await?;
        let batch = vec![
            NewClient {
                name: "Alice".to_string(),
                ..NewClient::default()
            },
            NewClient {
                name: "Bob".to_string(),
                email: "bob@example.com".to_string(),
                ..NewClient::default()
            },
        ];

        assert_eq!(import_clients(&db, batch).await?, 2);
        let clients = load_clients(&db).await?;
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[1].email, "bob@example.com");
        Ok(())
    }

    #[tokio::test]
    async fn test_filter_clients() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_client(&db, "Alice").await?;
        create_test_client(&db, "Bob").await?;
        let clients = load_clients(&db).await?;

        let by_name = filter_clients(&clients, "ALI");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Alice");

        // Every test client lives on Main Street
        assert_eq!(filter_clients(&clients, "main street").len(), 2);
        assert_eq!(filter_clients(&clients, "").len(), 2);
        assert!(filter_clients(&clients, "zzz").is_empty());
        Ok(())
    }

    #[test]
    fn test_new_client_from_model() {
        let model = client::Model {
            id: 3,
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
            phone: "9876543210".to_string(),
            address: "Nowhere".to_string(),
        };
        let new_client = NewClient::from(&model);
        assert_eq!(new_client.name, "Bob");
        assert_eq!(new_client.address, "Nowhere");
    }
}
