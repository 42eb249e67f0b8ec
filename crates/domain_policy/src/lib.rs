//! Policy Records Domain
//!
//! A policy belongs to exactly one client and owns zero or more claims.
//!
//! # Referential Integrity
//!
//! Translating a [`PolicyDto`] into a domain record resolves its `clientId`
//! through the injected [`ClientStore`](domain_client::ClientStore). An
//! unknown client fails the translation with `NotFound(Client, id)` before
//! anything is written.
//!
//! ```text
//! PolicyDto { clientId } --PolicyMapper--> NewPolicy { client: Client }
//!                                               |
//!                                        PolicyStore::insert
//!                                               v
//! PolicyDto { id, clientId } <--PolicyMapper-- Policy { id, client }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_policy::{PolicyMapper, PolicyService};
//!
//! let mapper = PolicyMapper::new(client_store.clone());
//! let service = PolicyService::new(policy_store, mapper);
//! let created = service.create(dto).await?;
//! ```

pub mod policy;
pub mod dto;
pub mod mapper;
pub mod ports;
pub mod service;

pub use policy::{Policy, NewPolicy};
pub use dto::PolicyDto;
pub use mapper::PolicyMapper;
pub use ports::PolicyStore;
pub use service::PolicyService;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockPolicyStore;
