//! VRF endpoint request models.
//!
//! Top-down VRF operations for OneManage fabrics, mirroring the network
//! endpoints: body-carried create/update, query-selected bulk delete.

use ndfc_core::ident::{FabricName, VrfName};
use ndfc_core::paths::BasePath;
use ndfc_core::query::with_query;
use ndfc_core::types::Verb;
use ndfc_core::{EndpointRequest, Result};

use crate::params::VrfNamesQueryParams;

/// Create a VRF in a fabric.
///
/// `POST /appcenter/cisco/ndfc/api/v1/onemanage/top-down/fabrics/{fabricName}/vrfs`
#[derive(Debug, Default, Clone)]
pub struct VrfCreate {
    /// Target fabric (mandatory).
    pub fabric_name: FabricName,
}

impl VrfCreate {
    /// Creates a request with the fabric unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EndpointRequest for VrfCreate {
    fn path(&self) -> Result<String> {
        Ok(BasePath::onemanage_top_down_fabrics(&[
            self.fabric_name.require()?,
            "vrfs",
        ]))
    }

    fn verb(&self) -> Verb {
        Verb::Post
    }
}

/// Update a VRF in a fabric.
///
/// `PUT /appcenter/cisco/ndfc/api/v1/onemanage/top-down/fabrics/{fabricName}/vrfs/{vrfName}`
#[derive(Debug, Default, Clone)]
pub struct VrfUpdate {
    /// Target fabric (mandatory).
    pub fabric_name: FabricName,
    /// VRF to update (mandatory).
    pub vrf_name: VrfName,
}

impl VrfUpdate {
    /// Creates a request with all fields unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EndpointRequest for VrfUpdate {
    fn path(&self) -> Result<String> {
        Ok(BasePath::onemanage_top_down_fabrics(&[
            self.fabric_name.require()?,
            "vrfs",
            self.vrf_name.require()?,
        ]))
    }

    fn verb(&self) -> Verb {
        Verb::Put
    }
}

/// Delete VRFs from a fabric in bulk.
///
/// `DELETE /appcenter/cisco/ndfc/api/v1/onemanage/top-down/fabrics/{fabricName}/bulk-delete/vrfs`
#[derive(Debug, Default, Clone)]
pub struct VrfsDelete {
    /// Target fabric (mandatory).
    pub fabric_name: FabricName,
    /// Comma-separated list of VRFs to delete.
    pub query_params: VrfNamesQueryParams,
}

impl VrfsDelete {
    /// Creates a request with all fields unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EndpointRequest for VrfsDelete {
    fn path(&self) -> Result<String> {
        let base_path = BasePath::onemanage_top_down_fabrics(&[
            self.fabric_name.require()?,
            "bulk-delete",
            "vrfs",
        ]);
        Ok(with_query(base_path, &self.query_params))
    }

    fn verb(&self) -> Verb {
        Verb::Delete
    }
}

/// Retrieve the VRFs of a fabric.
///
/// `GET /appcenter/cisco/ndfc/api/v1/onemanage/top-down/fabrics/{fabricName}/vrfs`
#[derive(Debug, Default, Clone)]
pub struct VrfsGet {
    /// Target fabric (mandatory).
    pub fabric_name: FabricName,
}

impl VrfsGet {
    /// Creates a request with the fabric unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EndpointRequest for VrfsGet {
    fn path(&self) -> Result<String> {
        Ok(BasePath::onemanage_top_down_fabrics(&[
            self.fabric_name.require()?,
            "vrfs",
        ]))
    }

    fn verb(&self) -> Verb {
        Verb::Get
    }
}
