//! Repository implementations
//!
//! Row-level data access on PostgreSQL. Each repository owns the SQL for one
//! table; reads join the parent tables so a row carries everything needed to
//! build the hydrated domain record.
//!
//! Column aliases are shared across the three repositories: `client_id`,
//! `policy_id` and `claim_id` name the primary keys, and the row structs
//! nest through `#[sqlx(flatten)]`.

pub mod client;
pub mod policy;
pub mod claim;

pub use client::{ClientRepository, ClientRow};
pub use policy::{PolicyRepository, PolicyRow};
pub use claim::{ClaimRepository, ClaimRow};
