//! Client Store Port
//!
//! The `ClientStore` trait is everything the client slice needs from
//! persistence. It is implemented by the in-memory and PostgreSQL adapters in
//! `infra_db`; the policy slice also consumes it to resolve a policy's owner.
//!
//! # Cascade
//!
//! Deleting a client must remove every policy it owns and, transitively,
//! every claim filed against those policies. Adapters own that guarantee.

use async_trait::async_trait;

use core_kernel::{ClientId, DomainPort, HealthCheckable, PortError};

use crate::client::{Client, NewClient};

/// Persistence port for clients
#[async_trait]
pub trait ClientStore: DomainPort + HealthCheckable {
    /// Returns every client in the store's natural order
    async fn find_all(&self) -> Result<Vec<Client>, PortError>;

    /// Looks up a client by identity
    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, PortError>;

    /// Persists a new client, assigning its identity
    async fn insert(&self, client: NewClient) -> Result<Client, PortError>;

    /// Overwrites the editable fields of an existing client
    ///
    /// Returns `PortError::NotFound` if the row no longer exists.
    async fn save(&self, client: Client) -> Result<Client, PortError>;

    /// Deletes a client together with its policies and their claims
    async fn delete(&self, client: &Client) -> Result<(), PortError>;
}

/// Mock implementation of ClientStore for testing
///
/// Stores clients in memory with sequential identities starting at 1. It does
/// not know about policies, so `delete` removes only the client row.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use core_kernel::{EntityKind, HealthCheckResult};

    /// In-memory mock implementation of ClientStore
    #[derive(Debug, Default)]
    pub struct MockClientStore {
        clients: Arc<RwLock<BTreeMap<ClientId, Client>>>,
        last_id: AtomicI64,
    }

    impl MockClientStore {
        /// Creates a new empty mock store
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates with clients, keeping their identities
        pub async fn with_clients(clients: Vec<Client>) -> Self {
            let store = Self::new();
            for client in clients {
                store.last_id.fetch_max(client.id.value(), Ordering::SeqCst);
                store.clients.write().await.insert(client.id, client);
            }
            store
        }

        /// Number of stored clients
        pub async fn len(&self) -> usize {
            self.clients.read().await.len()
        }
    }

    impl DomainPort for MockClientStore {}

    #[async_trait]
    impl HealthCheckable for MockClientStore {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy("mock-client-store", 0)
        }
    }

    #[async_trait]
    impl ClientStore for MockClientStore {
        async fn find_all(&self) -> Result<Vec<Client>, PortError> {
            Ok(self.clients.read().await.values().cloned().collect())
        }

        async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, PortError> {
            Ok(self.clients.read().await.get(&id).cloned())
        }

        async fn insert(&self, client: NewClient) -> Result<Client, PortError> {
            let id = ClientId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
            let client = client.with_id(id);
            self.clients.write().await.insert(id, client.clone());
            Ok(client)
        }

        async fn save(&self, client: Client) -> Result<Client, PortError> {
            let mut clients = self.clients.write().await;
            let slot = clients
                .get_mut(&client.id)
                .ok_or_else(|| PortError::not_found(EntityKind::Client, client.id))?;
            *slot = client.clone();
            Ok(client)
        }

        async fn delete(&self, client: &Client) -> Result<(), PortError> {
            self.clients
                .write()
                .await
                .remove(&client.id)
                .map(|_| ())
                .ok_or_else(|| PortError::not_found(EntityKind::Client, client.id))
        }
    }
}
