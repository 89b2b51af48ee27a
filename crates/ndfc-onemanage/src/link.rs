//! Inter-cluster link endpoint request models.
//!
//! Links connect fabrics across OneManage clusters. Lookup and update
//! address a link by UUID and can scope the operation with source and
//! destination cluster names; bulk deletion carries its targets in the
//! request body and is bound to PUT on the collection path.

use ndfc_core::ident::{FabricName, LinkUuid};
use ndfc_core::paths::BasePath;
use ndfc_core::query::with_query;
use ndfc_core::types::Verb;
use ndfc_core::{EndpointRequest, Result};

use crate::params::LinkQueryParams;

/// Create a link between fabrics.
///
/// `POST /appcenter/cisco/ndfc/api/v1/onemanage/links`
///
/// The link definition (clusters, fabrics, devices, interfaces, template,
/// `nvPairs`) travels in the request body.
#[derive(Debug, Default, Clone)]
pub struct LinkCreate;

impl LinkCreate {
    /// Creates the request.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EndpointRequest for LinkCreate {
    fn path(&self) -> Result<String> {
        Ok(BasePath::onemanage_links(&[]))
    }

    fn verb(&self) -> Verb {
        Verb::Post
    }
}

/// Retrieve a link by UUID.
///
/// `GET /appcenter/cisco/ndfc/api/v1/onemanage/links/{linkUUID}`
#[derive(Debug, Default, Clone)]
pub struct LinkGetByUuid {
    /// Link UUID (mandatory).
    pub link_uuid: LinkUuid,
    /// Optional source/destination cluster scoping.
    pub query_params: LinkQueryParams,
}

impl LinkGetByUuid {
    /// Creates a request with all fields unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EndpointRequest for LinkGetByUuid {
    fn path(&self) -> Result<String> {
        let base_path = BasePath::onemanage_links(&[self.link_uuid.require()?]);
        Ok(with_query(base_path, &self.query_params))
    }

    fn verb(&self) -> Verb {
        Verb::Get
    }
}

/// Update a link by UUID.
///
/// `PUT /appcenter/cisco/ndfc/api/v1/onemanage/links/{linkUUID}`
#[derive(Debug, Default, Clone)]
pub struct LinkUpdate {
    /// Link UUID (mandatory).
    pub link_uuid: LinkUuid,
    /// Optional source/destination cluster scoping.
    pub query_params: LinkQueryParams,
}

impl LinkUpdate {
    /// Creates a request with all fields unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EndpointRequest for LinkUpdate {
    fn path(&self) -> Result<String> {
        let base_path = BasePath::onemanage_links(&[self.link_uuid.require()?]);
        Ok(with_query(base_path, &self.query_params))
    }

    fn verb(&self) -> Verb {
        Verb::Put
    }
}

/// Delete links.
///
/// `PUT /appcenter/cisco/ndfc/api/v1/onemanage/links`
///
/// The link UUIDs and cluster names travel in the request body.
#[derive(Debug, Default, Clone)]
pub struct LinksDelete;

impl LinksDelete {
    /// Creates the request.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EndpointRequest for LinksDelete {
    fn path(&self) -> Result<String> {
        Ok(BasePath::onemanage_links(&[]))
    }

    fn verb(&self) -> Verb {
        Verb::Put
    }
}

/// Retrieve the links of a fabric.
///
/// `GET /appcenter/cisco/ndfc/api/v1/onemanage/links/fabrics/{fabricName}`
#[derive(Debug, Default, Clone)]
pub struct LinksGetByFabric {
    /// Target fabric (mandatory).
    pub fabric_name: FabricName,
}

impl LinksGetByFabric {
    /// Creates a request with the fabric unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EndpointRequest for LinksGetByFabric {
    fn path(&self) -> Result<String> {
        Ok(BasePath::onemanage_links_fabrics(&[
            self.fabric_name.require()?,
        ]))
    }

    fn verb(&self) -> Verb {
        Verb::Get
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndfc_core::Error;

    const LINK_UUID: &str = "63505f61-ce7b-40a6-a38c-ae9a355b2116";

    #[test]
    fn link_create_collection_path() {
        let request = LinkCreate::new();
        assert_eq!(
            request.path().unwrap(),
            "/appcenter/cisco/ndfc/api/v1/onemanage/links"
        );
        assert_eq!(request.verb(), Verb::Post);
    }

    #[test]
    fn link_get_by_uuid_without_scoping() {
        let mut request = LinkGetByUuid::new();
        request.link_uuid.set(LINK_UUID).unwrap();

        assert_eq!(
            request.path().unwrap(),
            format!("/appcenter/cisco/ndfc/api/v1/onemanage/links/{LINK_UUID}")
        );
        assert_eq!(request.verb(), Verb::Get);
    }

    #[test]
    fn link_get_by_uuid_with_cluster_scoping() {
        let mut request = LinkGetByUuid::new();
        request.link_uuid.set(LINK_UUID).unwrap();
        request
            .query_params
            .set_source_cluster_name("nd-cluster-1")
            .unwrap();
        request
            .query_params
            .set_destination_cluster_name("nd-cluster-2")
            .unwrap();

        assert_eq!(
            request.path().unwrap(),
            format!(
                "/appcenter/cisco/ndfc/api/v1/onemanage/links/{LINK_UUID}\
                 ?sourceClusterName=nd-cluster-1&destinationClusterName=nd-cluster-2"
            )
        );
    }

    #[test]
    fn link_get_missing_uuid() {
        let request = LinkGetByUuid::new();
        let err = request.path().unwrap_err();
        assert_eq!(err, Error::MissingParameter("link_uuid"));
    }

    #[test]
    fn link_update_path_and_verb() {
        let mut request = LinkUpdate::new();
        request.link_uuid.set(LINK_UUID).unwrap();

        assert_eq!(
            request.path().unwrap(),
            format!("/appcenter/cisco/ndfc/api/v1/onemanage/links/{LINK_UUID}")
        );
        assert_eq!(request.verb(), Verb::Put);
    }

    #[test]
    fn links_delete_uses_put_on_collection() {
        let request = LinksDelete::new();
        assert_eq!(
            request.path().unwrap(),
            "/appcenter/cisco/ndfc/api/v1/onemanage/links"
        );
        assert_eq!(request.verb(), Verb::Put);
    }

    #[test]
    fn links_get_by_fabric() {
        let mut request = LinksGetByFabric::new();
        request.fabric_name.set("MyFabric").unwrap();

        assert_eq!(
            request.path().unwrap(),
            "/appcenter/cisco/ndfc/api/v1/onemanage/links/fabrics/MyFabric"
        );
        assert_eq!(request.verb(), Verb::Get);
    }
}
