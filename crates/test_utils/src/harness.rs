//! In-memory Test Harness
//!
//! Wires the three operations components onto one fresh
//! [`InMemoryDatabase`], the same way the API server does.

use std::sync::Arc;

use core_kernel::{ClaimId, ClientId, CoreError, PolicyId};
use domain_claims::{ClaimMapper, ClaimService};
use domain_client::{ClientMapper, ClientService};
use domain_policy::{PolicyMapper, PolicyService};
use infra_db::InMemoryDatabase;

use crate::fixtures::{ClaimFixtures, ClientFixtures, PolicyFixtures};

/// Services over a shared in-memory store
pub struct TestHarness {
    pub db: Arc<InMemoryDatabase>,
    pub clients: ClientService,
    pub policies: PolicyService,
    pub claims: ClaimService,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHarness {
    pub fn new() -> Self {
        let db = Arc::new(InMemoryDatabase::new());
        Self {
            clients: ClientService::new(db.clone(), ClientMapper),
            policies: PolicyService::new(db.clone(), PolicyMapper::new(db.clone())),
            claims: ClaimService::new(db.clone(), ClaimMapper::new(db.clone())),
            db,
        }
    }

    /// Creates John Doe, POL123 and CLM123 and returns their identities
    pub async fn seed_worked_example(&self) -> Result<(ClientId, PolicyId, ClaimId), CoreError> {
        seed_worked_example(&self.clients, &self.policies, &self.claims).await
    }
}

pub(crate) async fn seed_worked_example(
    clients: &ClientService,
    policies: &PolicyService,
    claims: &ClaimService,
) -> Result<(ClientId, PolicyId, ClaimId), CoreError> {
    let client = clients.create(ClientFixtures::john_doe()).await?;
    let client_id = client.id.ok_or_else(|| missing_id("client"))?;

    let policy = policies.create(PolicyFixtures::pol123(client_id)).await?;
    let policy_id = policy.id.ok_or_else(|| missing_id("policy"))?;

    let claim = claims.create(ClaimFixtures::clm123(policy_id)).await?;
    let claim_id = claim.id.ok_or_else(|| missing_id("claim"))?;

    Ok((client_id, policy_id, claim_id))
}

fn missing_id(kind: &str) -> CoreError {
    CoreError::Storage(core_kernel::PortError::internal(format!("created {kind} has no id")))
}
