//! Claim translation

use std::sync::Arc;

use core_kernel::{CoreError, EntityKind};
use domain_policy::PolicyStore;

use crate::claim::{Claim, NewClaim};
use crate::dto::ClaimDto;

/// Translates between [`ClaimDto`] and the claim domain records
#[derive(Clone)]
pub struct ClaimMapper {
    policies: Arc<dyn PolicyStore>,
}

impl ClaimMapper {
    /// Creates a mapper that resolves policies through `policies`
    pub fn new(policies: Arc<dyn PolicyStore>) -> Self {
        Self { policies }
    }

    /// Converts a transfer record into an unsaved claim
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` for `EntityKind::Policy` if `policy_id` does not
    /// resolve.
    pub async fn to_domain(&self, dto: ClaimDto) -> Result<NewClaim, CoreError> {
        let policy = self
            .policies
            .find_by_id(dto.policy_id)
            .await?
            .ok_or_else(|| CoreError::not_found(EntityKind::Policy, dto.policy_id))?;

        Ok(NewClaim {
            claim_number: dto.claim_number,
            description: dto.description,
            claim_date: dto.claim_date,
            status: dto.status,
            policy,
        })
    }

    pub fn to_dto(&self, claim: &Claim) -> ClaimDto {
        ClaimDto {
            id: Some(claim.id),
            claim_number: claim.claim_number.clone(),
            description: claim.description.clone(),
            claim_date: claim.claim_date,
            status: claim.status.clone(),
            policy_id: claim.policy.id,
        }
    }
}
