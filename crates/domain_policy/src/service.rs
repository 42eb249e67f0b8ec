//! Policy operations

use std::sync::Arc;

use tracing::{debug, info, instrument};

use core_kernel::{CoreError, EntityKind, PolicyId};

use crate::dto::PolicyDto;
use crate::mapper::PolicyMapper;
use crate::policy::Policy;
use crate::ports::PolicyStore;

/// Lifecycle operations for policies
pub struct PolicyService {
    store: Arc<dyn PolicyStore>,
    mapper: PolicyMapper,
}

impl PolicyService {
    /// Creates a new policy service
    pub fn new(store: Arc<dyn PolicyStore>, mapper: PolicyMapper) -> Self {
        Self { store, mapper }
    }

    /// Returns every policy, in the store's natural order
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<PolicyDto>, CoreError> {
        let policies = self.store.find_all().await?;
        debug!(count = policies.len(), "Listed policies");
        Ok(policies.iter().map(|p| self.mapper.to_dto(p)).collect())
    }

    /// Returns a single policy
    #[instrument(skip(self), fields(policy_id = %id))]
    pub async fn get_by_id(&self, id: PolicyId) -> Result<PolicyDto, CoreError> {
        let policy = self.find_existing(id).await?;
        Ok(self.mapper.to_dto(&policy))
    }

    /// Creates a policy for an existing client
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` for the client if `client_id` does not resolve;
    /// nothing is written.
    #[instrument(skip(self, dto), fields(client_id = %dto.client_id))]
    pub async fn create(&self, dto: PolicyDto) -> Result<PolicyDto, CoreError> {
        let new_policy = self.mapper.to_domain(dto).await?;
        let policy = self.store.insert(new_policy).await?;
        info!(policy_id = %policy.id, "Policy created");
        Ok(self.mapper.to_dto(&policy))
    }

    /// Replaces the scalar fields of an existing policy
    ///
    /// The owning client is kept; a different `client_id` in `dto` is ignored.
    #[instrument(skip(self, dto), fields(policy_id = %id))]
    pub async fn update(&self, id: PolicyId, dto: PolicyDto) -> Result<PolicyDto, CoreError> {
        let mut policy = self.find_existing(id).await?;

        if dto.client_id != policy.client.id {
            debug!(
                requested = %dto.client_id,
                current = %policy.client.id,
                "Ignoring client reassignment on policy update"
            );
        }

        policy.policy_number = dto.policy_number;
        policy.policy_type = dto.policy_type;
        policy.coverage_amount = dto.coverage_amount;
        policy.premium = dto.premium;
        policy.start_date = dto.start_date;
        policy.end_date = dto.end_date;

        let saved = self.store.save(policy).await?;
        info!("Policy updated");
        Ok(self.mapper.to_dto(&saved))
    }

    /// Deletes a policy and, through the store, its claims
    #[instrument(skip(self), fields(policy_id = %id))]
    pub async fn delete(&self, id: PolicyId) -> Result<(), CoreError> {
        let policy = self.find_existing(id).await?;
        self.store.delete(&policy).await?;
        info!("Policy deleted");
        Ok(())
    }

    async fn find_existing(&self, id: PolicyId) -> Result<Policy, CoreError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found(EntityKind::Policy, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::mock::MockPolicyStore;
    use chrono::NaiveDate;
    use core_kernel::ClientId;
    use domain_client::{Client, MockClientStore};
    use rust_decimal_macros::dec;

    fn john_doe() -> Client {
        Client {
            id: ClientId::new(1),
            name: "John Doe".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            address: "123 Main St".to_string(),
            contact_information: "9876543210".to_string(),
        }
    }

    fn health_policy(client_id: ClientId) -> PolicyDto {
        PolicyDto {
            id: None,
            policy_number: "POL123".to_string(),
            policy_type: "Health".to_string(),
            coverage_amount: dec!(50000.00),
            premium: dec!(500.00),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            client_id,
        }
    }

    async fn service() -> (PolicyService, Arc<MockPolicyStore>) {
        let clients = Arc::new(MockClientStore::with_clients(vec![john_doe()]).await);
        let store = Arc::new(MockPolicyStore::new());
        let service = PolicyService::new(store.clone(), PolicyMapper::new(clients));
        (service, store)
    }

    #[tokio::test]
    async fn test_create_resolves_client() {
        let (service, _) = service().await;

        let created = service.create(health_policy(ClientId::new(1))).await.unwrap();

        assert_eq!(created.id, Some(PolicyId::new(1)));
        assert_eq!(created.client_id, ClientId::new(1));
        assert_eq!(created.coverage_amount, dec!(50000.00));
    }

    #[tokio::test]
    async fn test_create_with_unknown_client_writes_nothing() {
        let (service, store) = service().await;

        let err = service.create(health_policy(ClientId::new(99))).await.unwrap_err();

        assert_eq!(err.missing(), Some((EntityKind::Client, "99")));
        assert_eq!(err.to_string(), "Client not found with id: 99");
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let (service, _) = service().await;
        let err = service.get_by_id(PolicyId::new(7)).await.unwrap_err();
        assert_eq!(err.missing(), Some((EntityKind::Policy, "7")));
    }

    #[tokio::test]
    async fn test_update_ignores_client_reassignment() {
        let (service, _) = service().await;
        let id = service.create(health_policy(ClientId::new(1))).await.unwrap().id.unwrap();

        let changes = PolicyDto {
            premium: dec!(750.00),
            ..health_policy(ClientId::new(99))
        };
        let updated = service.update(id, changes).await.unwrap();

        assert_eq!(updated.premium, dec!(750.00));
        assert_eq!(updated.client_id, ClientId::new(1));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let (service, store) = service().await;
        let err = service
            .update(PolicyId::new(3), health_policy(ClientId::new(1)))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let (service, _) = service().await;
        let id = service.create(health_policy(ClientId::new(1))).await.unwrap().id.unwrap();

        service.delete(id).await.unwrap();

        assert!(service.get_by_id(id).await.unwrap_err().is_not_found());
        assert!(service.list_all().await.unwrap().is_empty());
    }
}
