//! Claim Records Domain
//!
//! A claim is filed against exactly one policy. Translation resolves the
//! `policyId` of a [`ClaimDto`] through the injected
//! [`PolicyStore`](domain_policy::PolicyStore) and fails with
//! `NotFound(Policy, id)` when it does not exist.
//!
//! # Claim Lifecycle
//!
//! ```text
//! create -> (update)* -> delete
//!                          ^
//!        policy delete ----+  (cascade)
//! ```
//!
//! `status` is free text; no transitions are enforced.

pub mod claim;
pub mod dto;
pub mod mapper;
pub mod ports;
pub mod service;

pub use claim::{Claim, NewClaim};
pub use dto::ClaimDto;
pub use mapper::ClaimMapper;
pub use ports::ClaimStore;
pub use service::ClaimService;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockClaimStore;
