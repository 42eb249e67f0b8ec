//! Claim operations

use std::sync::Arc;

use tracing::{debug, info, instrument};

use core_kernel::{ClaimId, CoreError, EntityKind};

use crate::claim::Claim;
use crate::dto::ClaimDto;
use crate::mapper::ClaimMapper;
use crate::ports::ClaimStore;

/// Lifecycle operations for claims
pub struct ClaimService {
    store: Arc<dyn ClaimStore>,
    mapper: ClaimMapper,
}

impl ClaimService {
    pub fn new(store: Arc<dyn ClaimStore>, mapper: ClaimMapper) -> Self {
        Self { store, mapper }
    }

    /// Returns every claim, in the store's natural order
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<ClaimDto>, CoreError> {
        let claims = self.store.find_all().await?;
        debug!(count = claims.len(), "Listed claims");
        Ok(claims.iter().map(|c| self.mapper.to_dto(c)).collect())
    }

    #[instrument(skip(self), fields(claim_id = %id))]
    pub async fn get_by_id(&self, id: ClaimId) -> Result<ClaimDto, CoreError> {
        let claim = self.find_existing(id).await?;
        Ok(self.mapper.to_dto(&claim))
    }

    /// Files a claim against an existing policy
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` for the policy if `policy_id` does not resolve.
    #[instrument(skip(self, dto), fields(policy_id = %dto.policy_id))]
    pub async fn create(&self, dto: ClaimDto) -> Result<ClaimDto, CoreError> {
        let new_claim = self.mapper.to_domain(dto).await?;
        let claim = self.store.insert(new_claim).await?;
        info!(claim_id = %claim.id, "Claim created");
        Ok(self.mapper.to_dto(&claim))
    }

    /// Replaces the scalar fields of an existing claim
    ///
    /// The covering policy is kept; a different `policy_id` in `dto` is ignored.
    #[instrument(skip(self, dto), fields(claim_id = %id))]
    pub async fn update(&self, id: ClaimId, dto: ClaimDto) -> Result<ClaimDto, CoreError> {
        let mut claim = self.find_existing(id).await?;

        if dto.policy_id != claim.policy.id {
            debug!(
                requested = %dto.policy_id,
                current = %claim.policy.id,
                "Ignoring policy reassignment on claim update"
            );
        }

        claim.claim_number = dto.claim_number;
        claim.description = dto.description;
        claim.claim_date = dto.claim_date;
        claim.status = dto.status;

        let saved = self.store.save(claim).await?;
        info!("Claim updated");
        Ok(self.mapper.to_dto(&saved))
    }

    #[instrument(skip(self), fields(claim_id = %id))]
    pub async fn delete(&self, id: ClaimId) -> Result<(), CoreError> {
        let claim = self.find_existing(id).await?;
        self.store.delete(&claim).await?;
        info!("Claim deleted");
        Ok(())
    }

    async fn find_existing(&self, id: ClaimId) -> Result<Claim, CoreError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found(EntityKind::Claim, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::mock::MockClaimStore;
    use chrono::NaiveDate;
    use core_kernel::{ClientId, PolicyId};
    use domain_client::Client;
    use domain_policy::{MockPolicyStore, NewPolicy, PolicyStore};
    use rust_decimal_macros::dec;

    fn accident_claim(policy_id: i64) -> ClaimDto {
        ClaimDto {
            id: None,
            claim_number: "CLM001".to_string(),
            description: "Accident".to_string(),
            claim_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            status: Some("Pending".to_string()),
            policy_id: PolicyId::new(policy_id),
        }
    }

    async fn service() -> (ClaimService, Arc<MockClaimStore>) {
        let policies = Arc::new(MockPolicyStore::new());
        policies
            .insert(NewPolicy {
                policy_number: "POL123".to_string(),
                policy_type: "Health".to_string(),
                coverage_amount: dec!(50000.00),
                premium: dec!(500.00),
                start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                client: Client {
                    id: ClientId::new(1),
                    name: "John Doe".to_string(),
                    date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
                    address: "123 Main St".to_string(),
                    contact_information: "9876543210".to_string(),
                },
            })
            .await
            .unwrap();

        let store = Arc::new(MockClaimStore::new());
        (ClaimService::new(store.clone(), ClaimMapper::new(policies)), store)
    }

    #[tokio::test]
    async fn test_create_against_existing_policy() {
        let (service, _) = service().await;

        let created = service.create(accident_claim(1)).await.unwrap();

        assert_eq!(created.id, Some(ClaimId::new(1)));
        assert_eq!(created.policy_id, PolicyId::new(1));
        assert_eq!(created.status.as_deref(), Some("Pending"));
    }

    #[tokio::test]
    async fn test_create_against_unknown_policy() {
        let (service, store) = service().await;

        let err = service.create(accident_claim(9)).await.unwrap_err();

        assert_eq!(err.to_string(), "Policy not found with id: 9");
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_status_may_be_absent() {
        let (service, _) = service().await;
        let dto = ClaimDto { status: None, ..accident_claim(1) };

        let created = service.create(dto).await.unwrap();

        assert_eq!(created.status, None);
    }

    #[tokio::test]
    async fn test_update_keeps_policy() {
        let (service, _) = service().await;
        let id = service.create(accident_claim(1)).await.unwrap().id.unwrap();

        let changes = ClaimDto {
            status: Some("Approved".to_string()),
            ..accident_claim(9)
        };
        let updated = service.update(id, changes).await.unwrap();

        assert_eq!(updated.status.as_deref(), Some("Approved"));
        assert_eq!(updated.policy_id, PolicyId::new(1));
    }

    #[tokio::test]
    async fn test_get_and_delete_missing() {
        let (service, _) = service().await;

        let err = service.get_by_id(ClaimId::new(4)).await.unwrap_err();
        assert_eq!(err.missing(), Some((EntityKind::Claim, "4")));
        assert!(service.delete(ClaimId::new(4)).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_removes_claim() {
        let (service, store) = service().await;
        let id = service.create(accident_claim(1)).await.unwrap().id.unwrap();

        service.delete(id).await.unwrap();

        assert_eq!(store.len().await, 0);
        assert!(service.list_all().await.unwrap().is_empty());
    }
}
