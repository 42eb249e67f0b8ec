//! PostgreSQL Policy Store

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{DomainPort, EntityKind, HealthCheckResult, HealthCheckable, PolicyId, PortError};
use domain_policy::{NewPolicy, Policy, PolicyStore};

use crate::adapters::client::row_to_client;
use crate::repositories::policy::{PolicyRepository, PolicyRow};

/// PostgreSQL-backed implementation of the PolicyStore port
///
/// Inserting a policy whose client row has been deleted fails with
/// `PortError::NotFound` for the client.
#[derive(Debug, Clone)]
pub struct PostgresPolicyStore {
    repository: PolicyRepository,
    pool: PgPool,
}

impl PostgresPolicyStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PolicyRepository::new(pool.clone()),
            pool,
        }
    }
}

impl DomainPort for PostgresPolicyStore {}

#[async_trait]
impl HealthCheckable for PostgresPolicyStore {
    async fn health_check(&self) -> HealthCheckResult {
        super::ping(&self.pool, "postgres-policy-store").await
    }
}

#[async_trait]
impl PolicyStore for PostgresPolicyStore {
    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Policy>, PortError> {
        let rows = self.repository.find_all().await?;
        debug!(count = rows.len(), "Fetched policies");
        Ok(rows.into_iter().map(row_to_policy).collect())
    }

    #[instrument(skip(self), fields(policy_id = %id))]
    async fn find_by_id(&self, id: PolicyId) -> Result<Option<Policy>, PortError> {
        let row = self.repository.find_by_id(id.value()).await?;
        Ok(row.map(row_to_policy))
    }

    #[instrument(skip(self, policy), fields(client_id = %policy.client.id))]
    async fn insert(&self, policy: NewPolicy) -> Result<Policy, PortError> {
        let id = self
            .repository
            .insert(&policy)
            .await
            .map_err(|e| e.into_port_error_for_parent(EntityKind::Client, policy.client.id))?;
        debug!(policy_id = id, "Inserted policy");
        Ok(policy.with_id(PolicyId::new(id)))
    }

    #[instrument(skip(self, policy), fields(policy_id = %policy.id))]
    async fn save(&self, policy: Policy) -> Result<Policy, PortError> {
        self.repository.update(&policy).await?;
        Ok(policy)
    }

    #[instrument(skip(self, policy), fields(policy_id = %policy.id))]
    async fn delete(&self, policy: &Policy) -> Result<(), PortError> {
        self.repository.delete(policy.id.value()).await?;
        Ok(())
    }
}

pub(crate) fn row_to_policy(row: PolicyRow) -> Policy {
    Policy {
        id: PolicyId::new(row.policy_id),
        policy_number: row.policy_number,
        policy_type: row.policy_type,
        coverage_amount: row.coverage_amount,
        premium: row.premium,
        start_date: row.start_date,
        end_date: row.end_date,
        client: row_to_client(row.client),
    }
}
