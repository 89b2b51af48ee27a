//! Network endpoint request models.
//!
//! Top-down network operations for OneManage fabrics. Creation and update
//! payloads travel in the request body; bulk deletion selects its targets
//! through the `network-names` query parameter.

use ndfc_core::ident::{FabricName, NetworkName};
use ndfc_core::paths::BasePath;
use ndfc_core::query::with_query;
use ndfc_core::types::Verb;
use ndfc_core::{EndpointRequest, Result};

use crate::params::NetworkNamesQueryParams;

/// Create a network in a fabric.
///
/// `POST /appcenter/cisco/ndfc/api/v1/onemanage/top-down/fabrics/{fabricName}/networks`
#[derive(Debug, Default, Clone)]
pub struct NetworkCreate {
    /// Target fabric (mandatory).
    pub fabric_name: FabricName,
}

impl NetworkCreate {
    /// Creates a request with the fabric unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EndpointRequest for NetworkCreate {
    fn path(&self) -> Result<String> {
        Ok(BasePath::onemanage_top_down_fabrics(&[
            self.fabric_name.require()?,
            "networks",
        ]))
    }

    fn verb(&self) -> Verb {
        Verb::Post
    }
}

/// Update a network in a fabric.
///
/// `PUT /appcenter/cisco/ndfc/api/v1/onemanage/top-down/fabrics/{fabricName}/networks/{networkName}`
#[derive(Debug, Default, Clone)]
pub struct NetworkUpdate {
    /// Target fabric (mandatory).
    pub fabric_name: FabricName,
    /// Network to update (mandatory).
    pub network_name: NetworkName,
}

impl NetworkUpdate {
    /// Creates a request with all fields unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EndpointRequest for NetworkUpdate {
    fn path(&self) -> Result<String> {
        Ok(BasePath::onemanage_top_down_fabrics(&[
            self.fabric_name.require()?,
            "networks",
            self.network_name.require()?,
        ]))
    }

    fn verb(&self) -> Verb {
        Verb::Put
    }
}

/// Delete networks from a fabric in bulk.
///
/// `DELETE /appcenter/cisco/ndfc/api/v1/onemanage/top-down/fabrics/{fabricName}/bulk-delete/networks`
#[derive(Debug, Default, Clone)]
pub struct NetworksDelete {
    /// Target fabric (mandatory).
    pub fabric_name: FabricName,
    /// Comma-separated list of networks to delete.
    pub query_params: NetworkNamesQueryParams,
}

impl NetworksDelete {
    /// Creates a request with all fields unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EndpointRequest for NetworksDelete {
    fn path(&self) -> Result<String> {
        let base_path = BasePath::onemanage_top_down_fabrics(&[
            self.fabric_name.require()?,
            "bulk-delete",
            "networks",
        ]);
        Ok(with_query(base_path, &self.query_params))
    }

    fn verb(&self) -> Verb {
        Verb::Delete
    }
}

/// Retrieve the networks of a fabric.
///
/// `GET /appcenter/cisco/ndfc/api/v1/onemanage/top-down/fabrics/{fabricName}/networks`
#[derive(Debug, Default, Clone)]
pub struct NetworksGet {
    /// Target fabric (mandatory).
    pub fabric_name: FabricName,
}

impl NetworksGet {
    /// Creates a request with the fabric unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EndpointRequest for NetworksGet {
    fn path(&self) -> Result<String> {
        Ok(BasePath::onemanage_top_down_fabrics(&[
            self.fabric_name.require()?,
            "networks",
        ]))
    }

    fn verb(&self) -> Verb {
        Verb::Get
    }
}
