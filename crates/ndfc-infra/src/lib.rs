//! Nexus Dashboard infra endpoint request models.
//!
//! Provides typed request models for the ND infra AAA service. These
//! endpoints live under `/api/v1/infra` on the Nexus Dashboard itself,
//! outside the NDFC application root.

#![deny(missing_docs)]

pub mod aaa;

pub use aaa::{LocalUsersDelete, LocalUsersGet, LocalUsersPost, LocalUsersPut};

/// Convenient result alias that reuses the shared core error type.
pub type Result<T> = ndfc_core::Result<T>;
