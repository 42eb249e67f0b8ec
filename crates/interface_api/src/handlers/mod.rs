//! Request handlers
//!
//! Transfer records are validated here, before they reach an operations
//! component.

pub mod clients;
pub mod policies;
pub mod claims;
pub mod health;
