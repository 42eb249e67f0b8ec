//! Store Adapters
//!
//! PostgreSQL implementations of the `ClientStore`, `PolicyStore` and
//! `ClaimStore` ports. Each adapter wraps one repository, converts rows into
//! hydrated domain records and translates `DatabaseError` into `PortError`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_client::ClientStore;
//! use infra_db::adapters::PostgresClientStore;
//!
//! let store: Arc<dyn ClientStore> = Arc::new(PostgresClientStore::new(pool));
//! let client = store.find_by_id(client_id).await?;
//! ```

pub mod client;
pub mod policy;
pub mod claim;

pub use client::PostgresClientStore;
pub use policy::PostgresPolicyStore;
pub use claim::PostgresClaimStore;

use std::time::Instant;

use sqlx::PgPool;

use core_kernel::HealthCheckResult;

/// Runs `SELECT 1` against the pool and reports the outcome for `adapter_id`
pub(crate) async fn ping(pool: &PgPool, adapter_id: &str) -> HealthCheckResult {
    let start = Instant::now();

    let result = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await;

    let latency_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(_) => HealthCheckResult::healthy(adapter_id, latency_ms),
        Err(e) => HealthCheckResult::unhealthy(adapter_id, latency_ms, format!("Database error: {}", e)),
    }
}
