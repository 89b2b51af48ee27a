//! OneManage endpoint request models for NDFC multi-cluster fabrics.
//!
//! Provides typed request models for fabric, network, VRF, and link
//! operations in OneManage environments. Each model binds its path
//! parameters, carries endpoint-specific query parameters, and exposes the
//! `(path, verb)` pair through [`ndfc_core::EndpointRequest`].

#![deny(missing_docs)]

pub mod fabric;
pub mod link;
pub mod network;
pub mod params;
pub mod vrf;

pub use params::{
    FabricConfigDeployQueryParams, FabricConfigPreviewQueryParams, LinkQueryParams,
    NetworkNamesQueryParams, VrfNamesQueryParams,
};

/// Convenient result alias that reuses the shared core error type.
pub type Result<T> = ndfc_core::Result<T>;
