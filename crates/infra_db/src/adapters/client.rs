//! PostgreSQL Client Store

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{ClientId, DomainPort, HealthCheckResult, HealthCheckable, PortError};
use domain_client::{Client, ClientStore, NewClient};

use crate::repositories::client::{ClientRepository, ClientRow};

/// PostgreSQL-backed implementation of the ClientStore port
#[derive(Debug, Clone)]
pub struct PostgresClientStore {
    repository: ClientRepository,
    pool: PgPool,
}

impl PostgresClientStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClientRepository::new(pool.clone()),
            pool,
        }
    }
}

impl DomainPort for PostgresClientStore {}

#[async_trait]
impl HealthCheckable for PostgresClientStore {
    async fn health_check(&self) -> HealthCheckResult {
        super::ping(&self.pool, "postgres-client-store").await
    }
}

#[async_trait]
impl ClientStore for PostgresClientStore {
    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Client>, PortError> {
        let rows = self.repository.find_all().await?;
        debug!(count = rows.len(), "Fetched clients");
        Ok(rows.into_iter().map(row_to_client).collect())
    }

    #[instrument(skip(self), fields(client_id = %id))]
    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, PortError> {
        let row = self.repository.find_by_id(id.value()).await?;
        Ok(row.map(row_to_client))
    }

    #[instrument(skip(self, client))]
    async fn insert(&self, client: NewClient) -> Result<Client, PortError> {
        let id = self.repository.insert(&client).await?;
        debug!(client_id = id, "Inserted client");
        Ok(client.with_id(ClientId::new(id)))
    }

    #[instrument(skip(self, client), fields(client_id = %client.id))]
    async fn save(&self, client: Client) -> Result<Client, PortError> {
        self.repository.update(&client).await?;
        Ok(client)
    }

    #[instrument(skip(self, client), fields(client_id = %client.id))]
    async fn delete(&self, client: &Client) -> Result<(), PortError> {
        self.repository.delete(client.id.value()).await?;
        Ok(())
    }
}

/// Converts a database row to a domain Client
pub(crate) fn row_to_client(row: ClientRow) -> Client {
    Client {
        id: ClientId::new(row.client_id),
        name: row.name,
        date_of_birth: row.date_of_birth,
        address: row.address,
        contact_information: row.contact_information,
    }
}
