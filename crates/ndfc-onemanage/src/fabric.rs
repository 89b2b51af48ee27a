//! Fabric endpoint request models.
//!
//! Covers OneManage multi-cluster fabric lifecycle and configuration
//! operations: create, update, delete, details, group membership, and the
//! config save/preview/deploy workflow.

use ndfc_core::ident::{FabricName, SwitchSerial};
use ndfc_core::paths::BasePath;
use ndfc_core::query::with_query;
use ndfc_core::types::Verb;
use ndfc_core::{EndpointRequest, Result};

use crate::params::{FabricConfigDeployQueryParams, FabricConfigPreviewQueryParams};

/// Deploy the configuration for a multi-cluster fabric.
///
/// `POST /appcenter/cisco/ndfc/api/v1/onemanage/fabrics/{fabricName}/config-deploy`
#[derive(Debug, Default, Clone)]
pub struct FabricConfigDeploy {
    /// Target fabric (mandatory).
    pub fabric_name: FabricName,
    /// Deploy behavior flags, always present on the wire.
    pub query_params: FabricConfigDeployQueryParams,
}

impl FabricConfigDeploy {
    /// Creates a request with all fields unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EndpointRequest for FabricConfigDeploy {
    fn path(&self) -> Result<String> {
        let base_path =
            BasePath::onemanage_fabrics(&[self.fabric_name.require()?, "config-deploy"]);
        Ok(with_query(base_path, &self.query_params))
    }

    fn verb(&self) -> Verb {
        Verb::Post
    }
}

/// Deploy the configuration for one switch in a multi-cluster fabric.
///
/// `POST /appcenter/cisco/ndfc/api/v1/onemanage/fabrics/{fabricName}/config-deploy/{switchSN}`
#[derive(Debug, Default, Clone)]
pub struct FabricConfigDeploySwitch {
    /// Target fabric (mandatory).
    pub fabric_name: FabricName,
    /// Target switch serial number (mandatory).
    pub switch_sn: SwitchSerial,
    /// Deploy behavior flags, always present on the wire.
    pub query_params: FabricConfigDeployQueryParams,
}

impl FabricConfigDeploySwitch {
    /// Creates a request with all fields unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EndpointRequest for FabricConfigDeploySwitch {
    fn path(&self) -> Result<String> {
        let base_path = BasePath::onemanage_fabrics(&[
            self.fabric_name.require()?,
            "config-deploy",
            self.switch_sn.require()?,
        ]);
        Ok(with_query(base_path, &self.query_params))
    }

    fn verb(&self) -> Verb {
        Verb::Post
    }
}

/// Preview the configuration for a multi-cluster fabric.
///
/// `GET /appcenter/cisco/ndfc/api/v1/onemanage/fabrics/{fabricName}/config-preview`
#[derive(Debug, Default, Clone)]
pub struct FabricConfigPreview {
    /// Target fabric (mandatory).
    pub fabric_name: FabricName,
    /// Preview behavior flags, always present on the wire.
    pub query_params: FabricConfigPreviewQueryParams,
}

impl FabricConfigPreview {
    /// Creates a request with all fields unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EndpointRequest for FabricConfigPreview {
    fn path(&self) -> Result<String> {
        let base_path =
            BasePath::onemanage_fabrics(&[self.fabric_name.require()?, "config-preview"]);
        Ok(with_query(base_path, &self.query_params))
    }

    fn verb(&self) -> Verb {
        Verb::Get
    }
}

/// Preview the configuration for one switch in a multi-cluster fabric.
///
/// `GET /appcenter/cisco/ndfc/api/v1/onemanage/fabrics/{fabricName}/config-preview/{switchSN}`
#[derive(Debug, Default, Clone)]
pub struct FabricConfigPreviewSwitch {
    /// Target fabric (mandatory).
    pub fabric_name: FabricName,
    /// Target switch serial number (mandatory).
    pub switch_sn: SwitchSerial,
    /// Preview behavior flags, always present on the wire.
    pub query_params: FabricConfigPreviewQueryParams,
}

impl FabricConfigPreviewSwitch {
    /// Creates a request with all fields unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EndpointRequest for FabricConfigPreviewSwitch {
    fn path(&self) -> Result<String> {
        let base_path = BasePath::onemanage_fabrics(&[
            self.fabric_name.require()?,
            "config-preview",
            self.switch_sn.require()?,
        ]);
        Ok(with_query(base_path, &self.query_params))
    }

    fn verb(&self) -> Verb {
        Verb::Get
    }
}

/// Save the configuration for a multi-cluster fabric.
///
/// `POST /appcenter/cisco/ndfc/api/v1/onemanage/fabrics/{fabricName}/config-save`
#[derive(Debug, Default, Clone)]
pub struct FabricConfigSave {
    /// Target fabric (mandatory).
    pub fabric_name: FabricName,
}

impl FabricConfigSave {
    /// Creates a request with the fabric unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EndpointRequest for FabricConfigSave {
    fn path(&self) -> Result<String> {
        Ok(BasePath::onemanage_fabrics(&[
            self.fabric_name.require()?,
            "config-save",
        ]))
    }

    fn verb(&self) -> Verb {
        Verb::Post
    }
}

/// Create a multi-cluster fabric.
///
/// `POST /appcenter/cisco/ndfc/api/v1/onemanage/fabrics`
///
/// The fabric definition travels in the request body.
#[derive(Debug, Default, Clone)]
pub struct FabricCreate;

impl FabricCreate {
    /// Creates the request.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EndpointRequest for FabricCreate {
    fn path(&self) -> Result<String> {
        Ok(BasePath::onemanage_fabrics(&[]))
    }

    fn verb(&self) -> Verb {
        Verb::Post
    }
}

/// Delete a multi-cluster fabric.
///
/// `DELETE /appcenter/cisco/ndfc/api/v1/onemanage/fabrics/{fabricName}`
#[derive(Debug, Default, Clone)]
pub struct FabricDelete {
    /// Target fabric (mandatory).
    pub fabric_name: FabricName,
}

impl FabricDelete {
    /// Creates a request with the fabric unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EndpointRequest for FabricDelete {
    fn path(&self) -> Result<String> {
        Ok(BasePath::onemanage_fabrics(&[self.fabric_name.require()?]))
    }

    fn verb(&self) -> Verb {
        Verb::Delete
    }
}

/// Query details for a multi-cluster fabric.
///
/// `GET /appcenter/cisco/ndfc/api/v1/onemanage/fabrics/{fabricName}`
#[derive(Debug, Default, Clone)]
pub struct FabricDetails {
    /// Target fabric (mandatory).
    pub fabric_name: FabricName,
}

impl FabricDetails {
    /// Creates a request with the fabric unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EndpointRequest for FabricDetails {
    fn path(&self) -> Result<String> {
        Ok(BasePath::onemanage_fabrics(&[self.fabric_name.require()?]))
    }

    fn verb(&self) -> Verb {
        Verb::Get
    }
}

/// Retrieve the members of a multi-cluster fabric group.
///
/// `GET /appcenter/cisco/ndfc/api/v1/onemanage/fabrics/{fabricName}/members`
#[derive(Debug, Default, Clone)]
pub struct FabricGroupMembersGet {
    /// Target fabric group (mandatory).
    pub fabric_name: FabricName,
}

impl FabricGroupMembersGet {
    /// Creates a request with the fabric unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EndpointRequest for FabricGroupMembersGet {
    fn path(&self) -> Result<String> {
        Ok(BasePath::onemanage_fabrics(&[
            self.fabric_name.require()?,
            "members",
        ]))
    }

    fn verb(&self) -> Verb {
        Verb::Get
    }
}

/// Add or remove members of a multi-cluster fabric group.
///
/// `PUT /appcenter/cisco/ndfc/api/v1/onemanage/fabrics/{fabricName}/members`
///
/// The membership operation (`add`/`remove`, cluster and fabric names)
/// travels in the request body.
#[derive(Debug, Default, Clone)]
pub struct FabricGroupMembersUpdate {
    /// Target fabric group (mandatory).
    pub fabric_name: FabricName,
}

impl FabricGroupMembersUpdate {
    /// Creates a request with the fabric unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EndpointRequest for FabricGroupMembersUpdate {
    fn path(&self) -> Result<String> {
        Ok(BasePath::onemanage_fabrics(&[
            self.fabric_name.require()?,
            "members",
        ]))
    }

    fn verb(&self) -> Verb {
        Verb::Put
    }
}

/// Update a multi-cluster fabric group.
///
/// `PUT /appcenter/cisco/ndfc/api/v1/onemanage/fabrics/{fabricName}`
///
/// The fabric settings (`fabricType`, `nvPairs`, ...) travel in the
/// request body.
#[derive(Debug, Default, Clone)]
pub struct FabricGroupUpdate {
    /// Target fabric group (mandatory).
    pub fabric_name: FabricName,
}

impl FabricGroupUpdate {
    /// Creates a request with the fabric unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EndpointRequest for FabricGroupUpdate {
    fn path(&self) -> Result<String> {
        Ok(BasePath::onemanage_fabrics(&[self.fabric_name.require()?]))
    }

    fn verb(&self) -> Verb {
        Verb::Put
    }
}

/// Retrieve all multi-cluster fabrics.
///
/// `GET /appcenter/cisco/ndfc/api/v1/onemanage/fabrics`
#[derive(Debug, Default, Clone)]
pub struct FabricsGet;

impl FabricsGet {
    /// Creates the request.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EndpointRequest for FabricsGet {
    fn path(&self) -> Result<String> {
        Ok(BasePath::onemanage_fabrics(&[]))
    }

    fn verb(&self) -> Verb {
        Verb::Get
    }
}
