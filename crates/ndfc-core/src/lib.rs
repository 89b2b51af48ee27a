//! # ndfc-core
//!
//! Core types and utilities for constructing NDFC and Nexus Dashboard REST requests.
//!
//! This crate provides the foundational pieces shared by the per-API request
//! crates: error handling, field validation, base-path construction, and the
//! query-parameter composition engine. It performs no network I/O of its own;
//! it only produces validated paths, verbs, and query strings for an HTTP
//! client to send.
//!
//! ## Modules
//!
//! - [`error`] - Error types and error-code mapping
//! - [`ident`] - Validated identifier field fragments (fabric name, switch serial, etc.)
//! - [`paths`] - API base-path constants and segment joining
//! - [`query`] - Query-parameter models, serialization, and composition
//! - [`request`] - The endpoint request contract and URL assembly
//! - [`types`] - Wire-level enums (HTTP verbs, boolean strings)
//! - [`validate`] - Process-wide validation strategy selection

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod ident;
pub mod paths;
pub mod query;
pub mod request;
pub mod types;
pub mod validate;

// Re-export commonly used types
pub use error::{Error, Result};
pub use request::EndpointRequest;
pub use types::{BooleanString, Verb};
