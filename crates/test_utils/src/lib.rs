//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! insurance records test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built transfer records, including the John Doe example
//! - `builders`: Builder patterns for transfer records
//! - `harness`: Operations components wired onto a fresh in-memory store
//! - `database`: Throwaway PostgreSQL containers for store integration tests
//! - `assertions`: Assertion helpers for core errors and store contents
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod harness;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use harness::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
