//! Custom Test Assertions

use core_kernel::{CoreError, EntityKind};
use infra_db::InMemoryDatabase;

/// Asserts that `result` failed with `NotFound` for the given entity and id
///
/// # Panics
///
/// Panics if `result` is `Ok` or fails with any other error
pub fn assert_not_found<T: std::fmt::Debug>(
    result: Result<T, CoreError>,
    entity: EntityKind,
    id: impl std::fmt::Display,
) {
    let id = id.to_string();
    match result {
        Err(CoreError::NotFound { entity: actual, id: actual_id }) => {
            assert_eq!(actual, entity, "NotFound for the wrong entity kind");
            assert_eq!(actual_id, id, "NotFound for the wrong id");
        }
        other => panic!("Expected {} not found with id {}, got {:?}", entity, id, other),
    }
}

/// Asserts the row counts of the in-memory store as `(clients, policies, claims)`
pub async fn assert_store_counts(db: &InMemoryDatabase, expected: (usize, usize, usize)) {
    let actual = db.counts().await;
    assert_eq!(
        actual, expected,
        "Store counts (clients, policies, claims) differ: actual={:?}, expected={:?}",
        actual, expected
    );
}
