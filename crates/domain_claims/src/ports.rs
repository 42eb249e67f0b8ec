//! Claim Store Port

use async_trait::async_trait;

use core_kernel::{ClaimId, DomainPort, HealthCheckable, PortError};

use crate::claim::{Claim, NewClaim};

/// Persistence port for claims
///
/// Claims are leaves: deleting one never touches any other record.
#[async_trait]
pub trait ClaimStore: DomainPort + HealthCheckable {
    /// Returns every claim in the store's natural order
    async fn find_all(&self) -> Result<Vec<Claim>, PortError>;

    /// Looks up a claim by identity, with its policy and client resolved
    async fn find_by_id(&self, id: ClaimId) -> Result<Option<Claim>, PortError>;

    /// Persists a new claim, assigning its identity
    ///
    /// Returns `PortError::NotFound` for the policy if it vanished since
    /// translation.
    async fn insert(&self, claim: NewClaim) -> Result<Claim, PortError>;

    /// Overwrites the scalar fields of an existing claim
    async fn save(&self, claim: Claim) -> Result<Claim, PortError>;

    /// Deletes a single claim
    async fn delete(&self, claim: &Claim) -> Result<(), PortError>;
}

/// Mock implementation of ClaimStore for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use core_kernel::{EntityKind, HealthCheckResult};

    /// In-memory mock implementation of ClaimStore
    #[derive(Debug, Default)]
    pub struct MockClaimStore {
        claims: Arc<RwLock<BTreeMap<ClaimId, Claim>>>,
        last_id: AtomicI64,
    }

    impl MockClaimStore {
        /// Creates a new empty mock store
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of stored claims
        pub async fn len(&self) -> usize {
            self.claims.read().await.len()
        }
    }

    impl DomainPort for MockClaimStore {}

    #[async_trait]
    impl HealthCheckable for MockClaimStore {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult::healthy("mock-claim-store", 0)
        }
    }

    #[async_trait]
    impl ClaimStore for MockClaimStore {
        async fn find_all(&self) -> Result<Vec<Claim>, PortError> {
            Ok(self.claims.read().await.values().cloned().collect())
        }

        async fn find_by_id(&self, id: ClaimId) -> Result<Option<Claim>, PortError> {
            Ok(self.claims.read().await.get(&id).cloned())
        }

        async fn insert(&self, claim: NewClaim) -> Result<Claim, PortError> {
            let id = ClaimId::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
            let claim = claim.with_id(id);
            self.claims.write().await.insert(id, claim.clone());
            Ok(claim)
        }

        async fn save(&self, claim: Claim) -> Result<Claim, PortError> {
            let mut claims = self.claims.write().await;
            let slot = claims
                .get_mut(&claim.id)
                .ok_or_else(|| PortError::not_found(EntityKind::Claim, claim.id))?;
            *slot = claim.clone();
            Ok(claim)
        }

        async fn delete(&self, claim: &Claim) -> Result<(), PortError> {
            self.claims
                .write()
                .await
                .remove(&claim.id)
                .map(|_| ())
                .ok_or_else(|| PortError::not_found(EntityKind::Claim, claim.id))
        }
    }
}
