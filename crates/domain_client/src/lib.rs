//! Client Records Domain
//!
//! Clients are the root of the record hierarchy: they own policies and are
//! never owned themselves. This crate defines the client slice:
//!
//! - [`ClientDto`]: the flat transfer record exchanged with callers
//! - [`Client`] / [`NewClient`]: the domain record, with and without identity
//! - [`ClientMapper`]: transfer ↔ domain translation
//! - [`ClientStore`]: the persistence port
//! - [`ClientService`]: list, get, create, update, delete
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_client::{ClientMapper, ClientService};
//!
//! let service = ClientService::new(Arc::new(store), ClientMapper);
//! let created = service.create(dto).await?;
//! assert!(created.id.is_some());
//! ```

pub mod client;
pub mod dto;
pub mod mapper;
pub mod ports;
pub mod service;

pub use client::{Client, NewClient};
pub use dto::ClientDto;
pub use mapper::ClientMapper;
pub use ports::ClientStore;
pub use service::ClientService;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockClientStore;
