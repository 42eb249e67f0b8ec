//! Policy Store Port
//!
//! Implemented by the adapters in `infra_db`. The claim slice consumes it to
//! resolve the policy a claim is filed against.

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, PolicyId, PortError};

use crate::policy::{NewPolicy, Policy};

/// Persistence port for policies
#[async_trait]
pub trait PolicyStore: DomainPort + HealthCheckable {
    /// Returns every policy in the store's natural order
    async fn find_all(&self) -> Result<Vec<Policy>, PortError>;

    /// Looks up a policy by identity, with its client resolved
    async fn find_by_id(&self, id: PolicyId) -> Result<Option<Policy>, PortError>;

    /// Persists a new policy, assigning its identity
    ///
    /// The owning client is checked again at write time; if it vanished since
    /// translation the adapter returns `PortError::NotFound` for the client.
    async fn insert(&self, policy: NewPolicy) -> Result<Policy, PortError>;

    /// Overwrites the scalar fields of an existing policy
    ///
    /// The owning client is never changed.
    async fn save(&self, policy: Policy) -> Result<Policy, PortError>;

    /// Deletes a policy together with its claims
    async fn delete(&self, policy: &Policy) -> Result<(), PortError>;
}

/// Mock implementation of PolicyStore for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use core_kernel::{EntityKind, HealthCheckResult};

    /// In-memory mock implementation of PolicyStore
    ///
    /// Keeps a snapshot of the owning client inside each policy and performs
    /// no write-time parent check.
    #[derive(Debug, Default)]
    pub struct MockPolicyStore {
        policies: Arc<RwLock<BTreeMap<PolicyId, Policy>>>,
        last_id: AtomicI64,
    }

    impl MockPolicyStore {
        /// Creates a new empty mock store
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of stored policies
        pub async fn len(&self) -> usize {
            self.policies.read().await.len()
        }
    }

    impl DomainPort for MockPolicyStore {}

    #[async_trait]
    impl HealthCheckable for MockPolicyStore {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy("mock-policy-store", 0)
        }
    }

    #[async_trait]
    impl PolicyStore for MockPolicyStore {
        async fn find_all(&self) -> Result<Vec<Policy>, PortError> {
            Ok(self.policies.read().await.values().cloned().collect())
        }

        async fn find_by_id(&self, id: PolicyId) -> Result<Option<Policy>, PortError> {
            Ok(self.policies.read().await.get(&id).cloned())
        }

        async fn insert(&self, policy: NewPolicy) -> Result<Policy, PortError> {
            let id = PolicyId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
            let policy = policy.with_id(id);
            self.policies.write().await.insert(id, policy.clone());
            Ok(policy)
        }

        async fn save(&self, policy: Policy) -> Result<Policy, PortError> {
            let mut policies = self.policies.write().await;
            let slot = policies
                .get_mut(&policy.id)
                .ok_or_else(|| PortError::not_found(EntityKind::Policy, policy.id))?;
            *slot = policy.clone();
            Ok(policy)
        }

        async fn delete(&self, policy: &Policy) -> Result<(), PortError> {
            self.policies
                .write()
                .await
                .remove(&policy.id)
                .map(|_| ())
                .ok_or_else(|| PortError::not_found(EntityKind::Policy, policy.id))
        }
    }
}
