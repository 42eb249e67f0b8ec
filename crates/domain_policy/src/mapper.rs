//! Policy translation
//!
//! `to_domain` resolves the owning client through the client store and fails
//! fast when it does not exist. `to_dto` reads only the client's identity.

use std::sync::Arc;

use tracing::debug;

use core_kernel::{CoreError, EntityKind};
use domain_client::ClientStore;

use crate::dto::PolicyDto;
use crate::policy::{NewPolicy, Policy};

/// Translates between [`PolicyDto`] and the policy domain records
#[derive(Clone)]
pub struct PolicyMapper {
    clients: Arc<dyn ClientStore>,
}

impl PolicyMapper {
    /// Creates a mapper that resolves owners through `clients`
    pub fn new(clients: Arc<dyn ClientStore>) -> Self {
        Self { clients }
    }

    /// Converts a transfer record into an unsaved policy
    ///
    /// Any `id` on the transfer record is dropped.
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` for `EntityKind::Client` if `client_id` does not
    /// resolve; nothing is returned in that case.
    pub async fn to_domain(&self, dto: PolicyDto) -> Result<NewPolicy, CoreError> {
        let client = self
            .clients
            .find_by_id(dto.client_id)
            .await?
            .ok_or_else(|| CoreError::not_found(EntityKind::Client, dto.client_id))?;

        debug!(client_id = %client.id, "Resolved policy owner");

        Ok(NewPolicy {
            policy_number: dto.policy_number,
            policy_type: dto.policy_type,
            coverage_amount: dto.coverage_amount,
            premium: dto.premium,
            start_date: dto.start_date,
            end_date: dto.end_date,
            client,
        })
    }

    /// Converts a persisted policy into its transfer record
    pub fn to_dto(&self, policy: &Policy) -> PolicyDto {
        PolicyDto {
            id: Some(policy.id),
            policy_number: policy.policy_number.clone(),
            policy_type: policy.policy_type.clone(),
            coverage_amount: policy.coverage_amount,
            premium: policy.premium,
            start_date: policy.start_date,
            end_date: policy.end_date,
            client_id: policy.client.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::{ClientId, PolicyId};
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

    fn dto(client_id: i64) -> PolicyDto {
        PolicyDto {
            id: Some(PolicyId::new(40)),
            policy_number: "POL123".to_string(),
            policy_type: "Health".to_string(),
            coverage_amount: dec!(50000.00),
            premium: dec!(500.00),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            client_id: ClientId::new(client_id),
        }
    }

    async fn mapper() -> PolicyMapper {
        PolicyMapper::new(Arc::new(MockClientStore::with_clients(vec![john_doe()]).await))
    }

    #[tokio::test]
    async fn test_to_domain_resolves_client() {
        let new_policy = mapper().await.to_domain(dto(1)).await.unwrap();
        assert_eq!(new_policy.client, john_doe());
        assert_eq!(new_policy.policy_number, "POL123");
    }

    #[tokio::test]
    async fn test_to_domain_unknown_client() {
        let err = mapper().await.to_domain(dto(2)).await.unwrap_err();
        assert_eq!(err.missing(), Some((EntityKind::Client, "2")));
    }

    #[tokio::test]
    async fn test_to_dto_reports_client_id() {
        let mapper = mapper().await;
        let policy = mapper.to_domain(dto(1)).await.unwrap().with_id(PolicyId::new(5));

        let out = mapper.to_dto(&policy);

        assert_eq!(out.id, Some(PolicyId::new(5)));
        assert_eq!(out.client_id, ClientId::new(1));
    }
}
