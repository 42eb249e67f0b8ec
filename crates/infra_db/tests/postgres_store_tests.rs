//! PostgreSQL store tests
//!
//! Each test starts its own container, so these are ignored by default.
//! Run them with Docker available:
//!
//! ```bash
//! cargo test -p infra_db --test postgres_store_tests -- --ignored
//! ```

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{ClaimId, ClientId, EntityKind, PolicyId};
use domain_claims::{ClaimStore, NewClaim};
use domain_client::{Client, ClientStore, NewClient};
use domain_policy::{NewPolicy, PolicyDto, PolicyStore};
use infra_db::{PostgresClaimStore, PostgresClientStore, PostgresPolicyStore};
use test_utils::{assert_not_found, ClaimFixtures, ClientFixtures, PolicyFixtures, TestDatabase};

async fn database() -> TestDatabase {
    TestDatabase::new().await.expect("Failed to start test database")
}

fn new_client() -> NewClient {
    NewClient {
        name: "John Doe".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        address: "123 Main St".to_string(),
        contact_information: "9876543210".to_string(),
    }
}

fn new_policy(client: Client) -> NewPolicy {
    NewPolicy {
        policy_number: "POL123".to_string(),
        policy_type: "Health".to_string(),
        coverage_amount: dec!(50000.00),
        premium: dec!(500.00),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        client,
    }
}

// ============================================================================
// Worked Example
// ============================================================================

mod worked_example_tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_create_chain_then_delete_client() {
        let db = database().await;
        let s = db.harness();

        let (client_id, policy_id, claim_id) = s.seed_worked_example().await.unwrap();
        assert_eq!(client_id, ClientId::new(1));
        assert_eq!(policy_id, PolicyId::new(1));
        assert_eq!(claim_id, ClaimId::new(1));

        let claim = s.claims.get_by_id(claim_id).await.unwrap();
        assert_eq!(claim.claim_number, "CLM123");
        assert_eq!(claim.status.as_deref(), Some("Pending"));
        assert_eq!(claim.policy_id, policy_id);

        let policy = s.policies.get_by_id(policy_id).await.unwrap();
        assert_eq!(policy.policy_number, "POL123");
        assert_eq!(policy.coverage_amount, dec!(50000.00));
        assert_eq!(policy.client_id, client_id);

        s.clients.delete(client_id).await.unwrap();

        assert!(s.clients.list_all().await.unwrap().is_empty());
        assert!(s.policies.list_all().await.unwrap().is_empty());
        assert!(s.claims.list_all().await.unwrap().is_empty());
        assert_eq!(db.counts().await.unwrap(), (0, 0, 0));
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_delete_policy_keeps_client() {
        let db = database().await;
        let s = db.harness();
        let (client_id, policy_id, _) = s.seed_worked_example().await.unwrap();

        s.policies.delete(policy_id).await.unwrap();

        assert_eq!(db.counts().await.unwrap(), (1, 0, 0));
        assert!(s.clients.get_by_id(client_id).await.is_ok());
    }
}

// ============================================================================
// Referential Integrity
// ============================================================================

mod integrity_tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_policy_for_unknown_client() {
        let db = database().await;
        let s = db.harness();

        let result = s.policies.create(PolicyFixtures::pol123(ClientId::new(99))).await;

        assert_not_found(result, EntityKind::Client, 99);
        assert_eq!(db.counts().await.unwrap(), (0, 0, 0));
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_claim_for_unknown_policy() {
        let db = database().await;
        let s = db.harness();
        s.clients.create(ClientFixtures::john_doe()).await.unwrap();

        let result = s.claims.create(ClaimFixtures::clm123(PolicyId::new(42))).await;

        assert_not_found(result, EntityKind::Policy, 42);
        assert_eq!(db.counts().await.unwrap(), (1, 0, 0));
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_update_does_not_move_policy() {
        let db = database().await;
        let s = db.harness();
        let (first, policy_id, _) = s.seed_worked_example().await.unwrap();
        let second = s.clients.create(ClientFixtures::jane_roe()).await.unwrap().id.unwrap();

        let changes = PolicyDto {
            policy_type: "Life".to_string(),
            ..PolicyFixtures::pol123(second)
        };
        let updated = s.policies.update(policy_id, changes).await.unwrap();

        assert_eq!(updated.client_id, first);
        assert_eq!(updated.policy_type, "Life");
        assert_eq!(s.policies.get_by_id(policy_id).await.unwrap().client_id, first);
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_insert_for_vanished_parent_is_not_found() {
        let db = database().await;
        let clients = PostgresClientStore::new(db.pool().clone());
        let policies = PostgresPolicyStore::new(db.pool().clone());
        let claims = PostgresClaimStore::new(db.pool().clone());

        let client = clients.insert(new_client()).await.unwrap();
        let policy = policies.insert(new_policy(client.clone())).await.unwrap();
        ClientStore::delete(&clients, &client).await.unwrap();

        let err = policies.insert(new_policy(client.clone())).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("Client"));

        let err = claims
            .insert(NewClaim {
                claim_number: "CLM123".to_string(),
                description: "Accident".to_string(),
                claim_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                status: None,
                policy,
            })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("Policy"));
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_save_and_delete_vanished_row_are_not_found() {
        let db = database().await;
        let clients = PostgresClientStore::new(db.pool().clone());
        let ghost = new_client().with_id(ClientId::new(8));

        assert!(clients.save(ghost.clone()).await.unwrap_err().is_not_found());
        assert!(ClientStore::delete(&clients, &ghost).await.unwrap_err().is_not_found());
    }
}

// ============================================================================
// Row Hydration
// ============================================================================

mod hydration_tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_claim_carries_policy_and_client() {
        let db = database().await;
        let s = db.harness();
        let (client_id, policy_id, claim_id) = s.seed_worked_example().await.unwrap();
        let claims = PostgresClaimStore::new(db.pool().clone());

        let claim = ClaimStore::find_by_id(&claims, claim_id).await.unwrap().unwrap();

        assert_eq!(claim.id, claim_id);
        assert_eq!(claim.policy.id, policy_id);
        assert_eq!(claim.policy.premium, dec!(500.00));
        assert_eq!(claim.policy.client.id, client_id);
        assert_eq!(claim.policy.client.name, "John Doe");
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_lists_are_ordered_by_identity() {
        let db = database().await;
        let s = db.harness();
        s.clients.create(ClientFixtures::john_doe()).await.unwrap();
        s.clients.create(ClientFixtures::jane_roe()).await.unwrap();

        let ids: Vec<_> = s
            .clients
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|c| c.id)
            .collect();

        assert_eq!(ids, vec![ClientId::new(1), ClientId::new(2)]);
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_clear_data_restarts_identities() {
        let db = database().await;
        let s = db.harness();
        s.seed_worked_example().await.unwrap();

        db.clear_data().await.unwrap();
        let (client_id, _, _) = s.seed_worked_example().await.unwrap();

        assert_eq!(client_id, ClientId::new(1));
    }
}
