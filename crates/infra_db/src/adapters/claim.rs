//! PostgreSQL Claim Store

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{ClaimId, DomainPort, EntityKind, HealthCheckResult, HealthCheckable, PortError};
use domain_claims::{Claim, ClaimStore, NewClaim};

use crate::adapters::policy::row_to_policy;
use crate::repositories::claim::{ClaimRepository, ClaimRow};

/// PostgreSQL-backed implementation of the ClaimStore port
#[derive(Debug, Clone)]
pub struct PostgresClaimStore {
    repository: ClaimRepository,
    pool: PgPool,
}

impl PostgresClaimStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClaimRepository::new(pool.clone()),
            pool,
        }
    }
}

impl DomainPort for PostgresClaimStore {}

#[async_trait]
impl HealthCheckable for PostgresClaimStore {
    async fn health_check(&self) -> HealthCheckResult {
        super::ping(&self.pool, "postgres-claim-store").await
    }
}

#[async_trait]
impl ClaimStore for PostgresClaimStore {
    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Claim>, PortError> {
        let rows = self.repository.find_all().await?;
        debug!(count = rows.len(), "Fetched claims");
        Ok(rows.into_iter().map(row_to_claim).collect())
    }

    #[instrument(skip(self), fields(claim_id = %id))]
    async fn find_by_id(&self, id: ClaimId) -> Result<Option<Claim>, PortError> {
        let row = self.repository.find_by_id(id.value()).await?;
        Ok(row.map(row_to_claim))
    }

    #[instrument(skip(self, claim), fields(policy_id = %claim.policy.id))]
    async fn insert(&self, claim: NewClaim) -> Result<Claim, PortError> {
        let id = self
            .repository
            .insert(&claim)
            .await
            .map_err(|e| e.into_port_error_for_parent(EntityKind::Policy, claim.policy.id))?;
        debug!(claim_id = id, "Inserted claim");
        Ok(claim.with_id(ClaimId::new(id)))
    }

    #[instrument(skip(self, claim), fields(claim_id = %claim.id))]
    async fn save(&self, claim: Claim) -> Result<Claim, PortError> {
        self.repository.update(&claim).await?;
        Ok(claim)
    }

    #[instrument(skip(self, claim), fields(claim_id = %claim.id))]
    async fn delete(&self, claim: &Claim) -> Result<(), PortError> {
        self.repository.delete(claim.id.value()).await?;
        Ok(())
    }
}

fn row_to_claim(row: ClaimRow) -> Claim {
    Claim {
        id: ClaimId::new(row.claim_id),
        claim_number: row.claim_number,
        description: row.description,
        claim_date: row.claim_date,
        status: row.status,
        policy: row_to_policy(row.policy),
    }
}
