//! Core Kernel - Foundational types for the insurance record system
//!
//! This crate provides the building blocks shared by the client, policy and
//! claim slices:
//! - Strongly-typed, store-assigned identifiers
//! - The `CoreError` raised by translators and operations components
//! - Port abstractions implemented by store adapters
//! - Field validators shared by the transfer records

pub mod identifiers;
pub mod error;
pub mod ports;
pub mod validation;

pub use identifiers::{ClientId, PolicyId, ClaimId};
pub use error::{CoreError, EntityKind};
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
};
