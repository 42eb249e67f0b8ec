//! Client operations
//!
//! `ClientService` orchestrates lookup, translation and persistence for
//! clients and is the only place a missing client raises `NotFound`.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use core_kernel::{ClientId, CoreError, EntityKind};

use crate::client::Client;
use crate::dto::ClientDto;
use crate::mapper::ClientMapper;
use crate::ports::ClientStore;

/// Lifecycle operations for clients
///
/// The service holds no state of its own; every call goes to the injected
/// store, so a single instance can be shared across request tasks.
pub struct ClientService {
    store: Arc<dyn ClientStore>,
    mapper: ClientMapper,
}

impl ClientService {
    /// Creates a new client service
    ///
    /// # Arguments
    ///
    /// * `store` - The client persistence port
    /// * `mapper` - The client translator
    pub fn new(store: Arc<dyn ClientStore>, mapper: ClientMapper) -> Self {
        Self { store, mapper }
    }

    /// Returns every client, in the store's natural order
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<ClientDto>, CoreError> {
        let clients = self.store.find_all().await?;
        debug!(count = clients.len(), "Listed clients");
        Ok(clients.iter().map(|c| self.mapper.to_dto(c)).collect())
    }

    /// Returns a single client
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` if no client has the given id
    #[instrument(skip(self), fields(client_id = %id))]
    pub async fn get_by_id(&self, id: ClientId) -> Result<ClientDto, CoreError> {
        let client = self.find_existing(id).await?;
        Ok(self.mapper.to_dto(&client))
    }

    /// Creates a client; any `id` in the request is ignored
    #[instrument(skip(self, dto))]
    pub async fn create(&self, dto: ClientDto) -> Result<ClientDto, CoreError> {
        let new_client = self.mapper.to_domain(dto);
        let client = self.store.insert(new_client).await?;
        info!(client_id = %client.id, "Client created");
        Ok(self.mapper.to_dto(&client))
    }

    /// Replaces the editable fields of an existing client
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` if no client has the given id; the store is
    /// left unchanged.
    #[instrument(skip(self, dto), fields(client_id = %id))]
    pub async fn update(&self, id: ClientId, dto: ClientDto) -> Result<ClientDto, CoreError> {
        let mut client = self.find_existing(id).await?;

        client.name = dto.name;
        client.date_of_birth = dto.date_of_birth;
        client.address = dto.address;
        client.contact_information = dto.contact_information;

        let saved = self.store.save(client).await?;
        info!("Client updated");
        Ok(self.mapper.to_dto(&saved))
    }

    /// Deletes a client and, through the store, all of its policies and claims
    #[instrument(skip(self), fields(client_id = %id))]
    pub async fn delete(&self, id: ClientId) -> Result<(), CoreError> {
        let client = self.find_existing(id).await?;
        self.store.delete(&client).await?;
        info!("Client deleted");
        Ok(())
    }

    async fn find_existing(&self, id: ClientId) -> Result<Client, CoreError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found(EntityKind::Client, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::mock::MockClientStore;
    use chrono::NaiveDate;

    fn john_doe() -> ClientDto {
        ClientDto {
            id: None,
            name: "John Doe".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            address: "123 Main St".to_string(),
            contact_information: "9876543210".to_string(),
        }
    }

    fn service() -> (ClientService, Arc<MockClientStore>) {
        let store = Arc::new(MockClientStore::new());
        (ClientService::new(store.clone(), ClientMapper), store)
    }

    #[tokio::test]
    async fn test_list_all_empty() {
        let (service, _) = service();
        assert!(service.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_assigns_identity_and_ignores_input_id() {
        let (service, _) = service();
        let mut dto = john_doe();
        dto.id = Some(ClientId::new(500));

        let created = service.create(dto).await.unwrap();

        assert_eq!(created.id, Some(ClientId::new(1)));
        assert_eq!(created.name, "John Doe");
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let (service, _) = service();
        let created = service.create(john_doe()).await.unwrap();
        let id = created.id.unwrap();

        let fetched = service.get_by_id(id).await.unwrap();

        assert_eq!(fetched, ClientDto { id: Some(id), ..john_doe() });
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let (service, _) = service();
        let err = service.get_by_id(ClientId::new(1)).await.unwrap_err();
        assert_eq!(err.missing(), Some((EntityKind::Client, "1")));
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let (service, _) = service();
        let id = service.create(john_doe()).await.unwrap().id.unwrap();

        let changes = ClientDto {
            name: "Jane Doe".to_string(),
            address: "9 Elm St".to_string(),
            ..john_doe()
        };
        let updated = service.update(id, changes).await.unwrap();

        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.name, "Jane Doe");
        assert_eq!(service.get_by_id(id).await.unwrap().address, "9 Elm St");
    }

    #[tokio::test]
    async fn test_update_missing_leaves_store_unchanged() {
        let (service, store) = service();
        service.create(john_doe()).await.unwrap();
        let before = service.list_all().await.unwrap();

        let err = service.update(ClientId::new(42), john_doe()).await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(service.list_all().await.unwrap(), before);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found_after_first() {
        let (service, _) = service();
        let id = service.create(john_doe()).await.unwrap().id.unwrap();

        service.delete(id).await.unwrap();

        assert!(service.delete(id).await.unwrap_err().is_not_found());
        assert!(service.delete(id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_identities_are_not_reused() {
        let (service, _) = service();
        let first = service.create(john_doe()).await.unwrap().id.unwrap();
        service.delete(first).await.unwrap();

        let second = service.create(john_doe()).await.unwrap().id.unwrap();

        assert_ne!(first, second);
    }
}
