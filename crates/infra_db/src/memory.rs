//! In-memory store
//!
//! [`InMemoryDatabase`] keeps flat rows in three ordered tables guarded by a
//! single lock and implements every store port. Rows reference their parent
//! by identity only; reads hydrate them into domain records by joining the
//! parent tables, so a client update is visible through its policies at once.
//!
//! Sequences start at 1, grow monotonically per table and are never reused.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use core_kernel::{
    ClaimId, ClientId, DomainPort, EntityKind, HealthCheckResult, HealthCheckable, PolicyId,
    PortError,
};
use domain_claims::{Claim, ClaimStore, NewClaim};
use domain_client::{Client, ClientStore, NewClient};
use domain_policy::{NewPolicy, Policy, PolicyStore};

#[derive(Debug, Clone)]
struct ClientEntry {
    name: String,
    date_of_birth: NaiveDate,
    address: String,
    contact_information: String,
}

#[derive(Debug, Clone)]
struct PolicyEntry {
    policy_number: String,
    policy_type: String,
    coverage_amount: Decimal,
    premium: Decimal,
    start_date: NaiveDate,
    end_date: NaiveDate,
    client_id: ClientId,
}

#[derive(Debug, Clone)]
struct ClaimEntry {
    claim_number: String,
    description: String,
    claim_date: NaiveDate,
    status: Option<String>,
    policy_id: PolicyId,
}

#[derive(Debug, Default)]
struct Tables {
    clients: BTreeMap<ClientId, ClientEntry>,
    policies: BTreeMap<PolicyId, PolicyEntry>,
    claims: BTreeMap<ClaimId, ClaimEntry>,
    client_seq: i64,
    policy_seq: i64,
    claim_seq: i64,
}

impl Tables {
    fn client(&self, id: ClientId) -> Option<Client> {
        self.clients.get(&id).map(|row| Client {
            id,
            name: row.name.clone(),
            date_of_birth: row.date_of_birth,
            address: row.address.clone(),
            contact_information: row.contact_information.clone(),
        })
    }

    fn policy(&self, id: PolicyId) -> Option<Policy> {
        let row = self.policies.get(&id)?;
        let client = self.client(row.client_id)?;
        Some(Policy {
            id,
            policy_number: row.policy_number.clone(),
            policy_type: row.policy_type.clone(),
            coverage_amount: row.coverage_amount,
            premium: row.premium,
            start_date: row.start_date,
            end_date: row.end_date,
            client,
        })
    }

    fn claim(&self, id: ClaimId) -> Option<Claim> {
        let row = self.claims.get(&id)?;
        let policy = self.policy(row.policy_id)?;
        Some(Claim {
            id,
            claim_number: row.claim_number.clone(),
            description: row.description.clone(),
            claim_date: row.claim_date,
            status: row.status.clone(),
            policy,
        })
    }

    /// Removes a policy and every claim filed against it
    fn remove_policy(&mut self, id: PolicyId) -> usize {
        let before = self.claims.len();
        self.claims.retain(|_, claim| claim.policy_id != id);
        self.policies.remove(&id);
        before - self.claims.len()
    }
}

/// Ordered, lock-guarded tables implementing all three store ports
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use infra_db::InMemoryDatabase;
///
/// let db = Arc::new(InMemoryDatabase::new());
/// let clients: Arc<dyn ClientStore> = db.clone();
/// let policies: Arc<dyn PolicyStore> = db.clone();
/// ```
#[derive(Debug, Default)]
pub struct InMemoryDatabase {
    tables: RwLock<Tables>,
}

impl InMemoryDatabase {
    /// Creates an empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// Row counts as `(clients, policies, claims)`
    pub async fn counts(&self) -> (usize, usize, usize) {
        let tables = self.tables.read().await;
        (tables.clients.len(), tables.policies.len(), tables.claims.len())
    }
}

impl DomainPort for InMemoryDatabase {}

#[async_trait]
impl HealthCheckable for InMemoryDatabase {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult::healthy("in-memory-store", 0)
    }
}

#[async_trait]
impl ClientStore for InMemoryDatabase {
    async fn find_all(&self) -> Result<Vec<Client>, PortError> {
        let tables = self.tables.read().await;
        Ok(tables.clients.keys().filter_map(|id| tables.client(*id)).collect())
    }

    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, PortError> {
        Ok(self.tables.read().await.client(id))
    }

    #[instrument(skip(self, client))]
    async fn insert(&self, client: NewClient) -> Result<Client, PortError> {
        let mut tables = self.tables.write().await;
        tables.client_seq += 1;
        let id = ClientId::new(tables.client_seq);

        tables.clients.insert(
            id,
            ClientEntry {
                name: client.name.clone(),
                date_of_birth: client.date_of_birth,
                address: client.address.clone(),
                contact_information: client.contact_information.clone(),
            },
        );

        debug!(client_id = %id, "Inserted client");
        Ok(client.with_id(id))
    }

    #[instrument(skip(self, client), fields(client_id = %client.id))]
    async fn save(&self, client: Client) -> Result<Client, PortError> {
        let mut tables = self.tables.write().await;
        let row = tables
            .clients
            .get_mut(&client.id)
            .ok_or_else(|| PortError::not_found(EntityKind::Client, client.id))?;

        row.name = client.name.clone();
        row.date_of_birth = client.date_of_birth;
        row.address = client.address.clone();
        row.contact_information = client.contact_information.clone();
        Ok(client)
    }

    #[instrument(skip(self, client), fields(client_id = %client.id))]
    async fn delete(&self, client: &Client) -> Result<(), PortError> {
        let mut tables = self.tables.write().await;
        if !tables.clients.contains_key(&client.id) {
            return Err(PortError::not_found(EntityKind::Client, client.id));
        }

        let owned: Vec<PolicyId> = tables
            .policies
            .iter()
            .filter(|(_, policy)| policy.client_id == client.id)
            .map(|(id, _)| *id)
            .collect();

        let mut claims_removed = 0;
        for policy_id in &owned {
            claims_removed += tables.remove_policy(*policy_id);
        }
        tables.clients.remove(&client.id);

        debug!(policies = owned.len(), claims = claims_removed, "Cascaded client delete");
        Ok(())
    }
}

#[async_trait]
impl PolicyStore for InMemoryDatabase {
    async fn find_all(&self) -> Result<Vec<Policy>, PortError> {
        let tables = self.tables.read().await;
        Ok(tables.policies.keys().filter_map(|id| tables.policy(*id)).collect())
    }

    async fn find_by_id(&self, id: PolicyId) -> Result<Option<Policy>, PortError> {
        Ok(self.tables.read().await.policy(id))
    }

    #[instrument(skip(self, policy), fields(client_id = %policy.client.id))]
    async fn insert(&self, policy: NewPolicy) -> Result<Policy, PortError> {
        let mut tables = self.tables.write().await;
        if !tables.clients.contains_key(&policy.client.id) {
            return Err(PortError::not_found(EntityKind::Client, policy.client.id));
        }

        tables.policy_seq += 1;
        let id = PolicyId::new(tables.policy_seq);

        tables.policies.insert(
            id,
            PolicyEntry {
                policy_number: policy.policy_number.clone(),
                policy_type: policy.policy_type.clone(),
                coverage_amount: policy.coverage_amount,
                premium: policy.premium,
                start_date: policy.start_date,
                end_date: policy.end_date,
                client_id: policy.client.id,
            },
        );

        debug!(policy_id = %id, "Inserted policy");
        Ok(policy.with_id(id))
    }

    #[instrument(skip(self, policy), fields(policy_id = %policy.id))]
    async fn save(&self, policy: Policy) -> Result<Policy, PortError> {
        let mut tables = self.tables.write().await;
        let row = tables
            .policies
            .get_mut(&policy.id)
            .ok_or_else(|| PortError::not_found(EntityKind::Policy, policy.id))?;

        row.policy_number = policy.policy_number.clone();
        row.policy_type = policy.policy_type.clone();
        row.coverage_amount = policy.coverage_amount;
        row.premium = policy.premium;
        row.start_date = policy.start_date;
        row.end_date = policy.end_date;
        Ok(policy)
    }

    #[instrument(skip(self, policy), fields(policy_id = %policy.id))]
    async fn delete(&self, policy: &Policy) -> Result<(), PortError> {
        let mut tables = self.tables.write().await;
        if !tables.policies.contains_key(&policy.id) {
            return Err(PortError::not_found(EntityKind::Policy, policy.id));
        }

        let claims_removed = tables.remove_policy(policy.id);
        debug!(claims = claims_removed, "Cascaded policy delete");
        Ok(())
    }
}

#[async_trait]
impl ClaimStore for InMemoryDatabase {
    async fn find_all(&self) -> Result<Vec<Claim>, PortError> {
        let tables = self.tables.read().await;
        Ok(tables.claims.keys().filter_map(|id| tables.claim(*id)).collect())
    }

    async fn find_by_id(&self, id: ClaimId) -> Result<Option<Claim>, PortError> {
        Ok(self.tables.read().await.claim(id))
    }

    #[instrument(skip(self, claim), fields(policy_id = %claim.policy.id))]
    async fn insert(&self, claim: NewClaim) -> Result<Claim, PortError> {
        let mut tables = self.tables.write().await;
        if !tables.policies.contains_key(&claim.policy.id) {
            return Err(PortError::not_found(EntityKind::Policy, claim.policy.id));
        }

        tables.claim_seq += 1;
        let id = ClaimId::new(tables.claim_seq);

        tables.claims.insert(
            id,
            ClaimEntry {
                claim_number: claim.claim_number.clone(),
                description: claim.description.clone(),
                claim_date: claim.claim_date,
                status: claim.status.clone(),
                policy_id: claim.policy.id,
            },
        );

        debug!(claim_id = %id, "Inserted claim");
        Ok(claim.with_id(id))
    }

    #[instrument(skip(self, claim), fields(claim_id = %claim.id))]
    async fn save(&self, claim: Claim) -> Result<Claim, PortError> {
        let mut tables = self.tables.write().await;
        let row = tables
            .claims
            .get_mut(&claim.id)
            .ok_or_else(|| PortError::not_found(EntityKind::Claim, claim.id))?;

        row.claim_number = claim.claim_number.clone();
        row.description = claim.description.clone();
        row.claim_date = claim.claim_date;
        row.status = claim.status.clone();
        Ok(claim)
    }

    #[instrument(skip(self, claim), fields(claim_id = %claim.id))]
    async fn delete(&self, claim: &Claim) -> Result<(), PortError> {
        self.tables
            .write()
            .await
            .claims
            .remove(&claim.id)
            .map(|_| ())
            .ok_or_else(|| PortError::not_found(EntityKind::Claim, claim.id))
    }
}
