//! Infrastructure Database Layer
//!
//! Store adapters for the client, policy and claim ports.
//!
//! - [`memory::InMemoryDatabase`] keeps three ordered tables behind one lock
//!   and implements all three ports. It is the default backend and the one
//!   the test harness uses.
//! - [`adapters`] holds the PostgreSQL stores, built on the row-level
//!   [`repositories`] and the schema under `migrations/`.
//!
//! # Cascade
//!
//! Deleting a client removes its policies and their claims; deleting a policy
//! removes its claims. The in-memory store does this explicitly, PostgreSQL
//! through `ON DELETE CASCADE`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig};
//! use infra_db::adapters::PostgresClientStore;
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/insurance")).await?;
//! run_migrations(&pool).await?;
//! let clients = PostgresClientStore::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod memory;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, create_pool, run_migrations, DatabaseConfig};
pub use error::DatabaseError;
pub use memory::InMemoryDatabase;
pub use adapters::{PostgresClientStore, PostgresPolicyStore, PostgresClaimStore};
