//! Ports and Adapters Infrastructure
//!
//! Each record slice defines a store port trait (`ClientStore`,
//! `PolicyStore`, `ClaimStore`) that extends the marker traits here. Adapters
//! in `infra_db` implement them, either in memory or on PostgreSQL.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │        Operations components (services)       │
//! └──────────────────────────────────────────────┘
//!                       │
//!                       ▼
//! ┌──────────────────────────────────────────────┐
//! │   Store ports (ClientStore, PolicyStore, …)   │
//! └──────────────────────────────────────────────┘
//!             ▲                        ▲
//!   ┌─────────┴────────┐     ┌─────────┴────────┐
//!   │  In-memory store │     │  PostgreSQL store │
//!   └──────────────────┘     └───────────────────┘
//! ```

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::EntityKind;

/// Error type for port operations
///
/// All store adapters report failures through this type so that the
/// operations components handle in-memory and database stores uniformly.
#[derive(Debug, Error)]
pub enum PortError {
    /// The row (or the parent row it references) no longer exists
    #[error("Not found: {entity} with id {id}")]
    NotFound {
        entity: EntityKind,
        id: String,
    },

    /// The operation conflicts with existing data
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    /// Connection to the underlying system failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity: EntityKind, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates a transient failure that may succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(self, PortError::Connection { .. })
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

/// Marker trait for all domain ports
///
/// Ports are shared across request tasks behind an `Arc`, so they must be
/// thread-safe.
pub trait DomainPort: Send + Sync + 'static {}

/// Health status for an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    /// Adapter is healthy and operational
    Healthy,
    /// Adapter is degraded but operational
    Degraded,
    /// Adapter is unhealthy and not operational
    Unhealthy,
}

/// Health check result for an adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Adapter identifier
    pub adapter_id: String,
    /// Current health status
    pub status: AdapterHealth,
    /// Latency of the health check in milliseconds
    pub latency_ms: u64,
    /// Optional message with additional details
    pub message: Option<String>,
    /// Timestamp of the health check
    pub checked_at: DateTime<Utc>,
}

impl HealthCheckResult {
    /// Creates a healthy result with no message
    pub fn healthy(adapter_id: impl Into<String>, latency_ms: u64) -> Self {
        Self {
            adapter_id: adapter_id.into(),
            status: AdapterHealth::Healthy,
            latency_ms,
            message: None,
            checked_at: Utc::now(),
        }
    }

    /// Creates an unhealthy result carrying the failure message
    pub fn unhealthy(adapter_id: impl Into<String>, latency_ms: u64, message: impl Into<String>) -> Self {
        Self {
            adapter_id: adapter_id.into(),
            status: AdapterHealth::Unhealthy,
            latency_ms,
            message: Some(message.into()),
            checked_at: Utc::now(),
        }
    }

    /// Returns true if the adapter can serve requests
    pub fn is_operational(&self) -> bool {
        matches!(self.status, AdapterHealth::Healthy | AdapterHealth::Degraded)
    }
}

/// Trait for adapters that support health checks
#[async_trait::async_trait]
pub trait HealthCheckable: Send + Sync {
    /// Performs a health check on the adapter
    async fn health_check(&self) -> HealthCheckResult;
}
