//! Property tests for the record lifecycle over the in-memory store

use proptest::prelude::*;
use validator::Validate;

use core_kernel::{ClientId, EntityKind, PolicyId};
use test_utils::{
    assert_not_found, assert_store_counts, claim_dto_strategy, client_dto_strategy,
    policy_dto_strategy, ClientFixtures, TestHarness,
};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

// ============================================================================
// Generator Tests
// ============================================================================

mod generator_tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_clients_pass_validation(dto in client_dto_strategy()) {
            prop_assert!(dto.validate().is_ok());
        }

        #[test]
        fn generated_policies_pass_validation(dto in policy_dto_strategy(ClientId::new(1))) {
            prop_assert!(dto.validate().is_ok());
        }

        #[test]
        fn generated_claims_pass_validation(dto in claim_dto_strategy(PolicyId::new(1))) {
            prop_assert!(dto.validate().is_ok());
        }
    }
}

// ============================================================================
// Lifecycle Properties
// ============================================================================

mod lifecycle_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn create_then_get_returns_same_client(dto in client_dto_strategy()) {
            let harness = TestHarness::new();
            let (created, fetched) = runtime().block_on(async {
                let created = harness.clients.create(dto.clone()).await.unwrap();
                let fetched = harness.clients.get_by_id(created.id.unwrap()).await.unwrap();
                (created, fetched)
            });

            prop_assert!(created.id.is_some());
            prop_assert_eq!(&fetched, &created);
            prop_assert_eq!(fetched.name, dto.name);
            prop_assert_eq!(fetched.date_of_birth, dto.date_of_birth);
            prop_assert_eq!(fetched.address, dto.address);
            prop_assert_eq!(fetched.contact_information, dto.contact_information);
        }

        #[test]
        fn policy_with_unknown_client_persists_nothing(
            dto in policy_dto_strategy(ClientId::new(2)),
        ) {
            let harness = TestHarness::new();
            runtime().block_on(async {
                harness.clients.create(ClientFixtures::john_doe()).await.unwrap();
                let result = harness.policies.create(dto).await;
                assert_not_found(result, EntityKind::Client, 2);
                assert_store_counts(&harness.db, (1, 0, 0)).await;
            });
        }

        #[test]
        fn claims_follow_their_client_on_delete(
            claims in proptest::collection::vec(claim_dto_strategy(PolicyId::new(1)), 0..8),
        ) {
            let harness = TestHarness::new();
            runtime().block_on(async {
                let (client_id, _, _) = harness.seed_worked_example().await.unwrap();
                for claim in claims {
                    harness.claims.create(claim).await.unwrap();
                }

                harness.clients.delete(client_id).await.unwrap();

                assert_store_counts(&harness.db, (0, 0, 0)).await;
            });
        }
    }
}

// ============================================================================
// Worked Example
// ============================================================================

mod worked_example_tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_assigns_first_identities() {
        let harness = TestHarness::new();

        let (client_id, policy_id, claim_id) = harness.seed_worked_example().await.unwrap();

        assert_eq!(client_id.value(), 1);
        assert_eq!(policy_id.value(), 1);
        assert_eq!(claim_id.value(), 1);
        assert_store_counts(&harness.db, (1, 1, 1)).await;
    }

    #[tokio::test]
    async fn test_random_clients_are_accepted() {
        let harness = TestHarness::new();

        for _ in 0..5 {
            let dto = ClientFixtures::random_client();
            assert!(dto.validate().is_ok(), "invalid generated client: {dto:?}");
            harness.clients.create(dto).await.unwrap();
        }

        assert_store_counts(&harness.db, (5, 0, 0)).await;
    }
}
