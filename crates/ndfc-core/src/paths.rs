//! API base-path constants and segment joining.
//!
//! NDFC endpoint paths all hang off a small number of fixed roots. This
//! module centralizes those roots and provides helpers that join them with
//! path segments using `/` separators. Segments are assumed to be URL-safe
//! identifiers already; no validation or escaping is performed here.

/// Base-path construction for NDFC and Nexus Dashboard APIs.
pub struct BasePath;

impl BasePath {
    /// Root of the NDFC application API.
    pub const NDFC_API: &'static str = "/appcenter/cisco/ndfc/api";

    /// OneManage path segment.
    pub const ONEMANAGE: &'static str = "/onemanage";

    /// Nexus Dashboard login path.
    pub const LOGIN: &'static str = "/login";

    /// Root of the Nexus Dashboard infra AAA API.
    pub const ND_INFRA_AAA: &'static str = "/api/v1/infra/aaa";

    fn join(root: &str, segments: &[&str]) -> String {
        let mut path = String::from(root);
        for segment in segments {
            path.push('/');
            path.push_str(segment);
        }
        path
    }

    /// Path under the NDFC API root.
    #[must_use]
    pub fn api(segments: &[&str]) -> String {
        Self::join(Self::NDFC_API, segments)
    }

    /// Path under the v1 API root.
    #[must_use]
    pub fn v1(segments: &[&str]) -> String {
        Self::join(&format!("{}/v1", Self::NDFC_API), segments)
    }

    /// Path under the lan-fabric API.
    #[must_use]
    pub fn lan_fabric(segments: &[&str]) -> String {
        Self::join(&Self::v1(&["lan-fabric"]), segments)
    }

    /// Path under the lan-fabric control/fabrics API.
    #[must_use]
    pub fn control_fabrics(segments: &[&str]) -> String {
        Self::join(&Self::lan_fabric(&["rest", "control", "fabrics"]), segments)
    }

    /// Path under the OneManage API.
    #[must_use]
    pub fn onemanage(segments: &[&str]) -> String {
        Self::join(&Self::v1(&["onemanage"]), segments)
    }

    /// Path under the OneManage fabrics API.
    #[must_use]
    pub fn onemanage_fabrics(segments: &[&str]) -> String {
        Self::join(&Self::onemanage(&["fabrics"]), segments)
    }

    /// Path under the OneManage links API.
    #[must_use]
    pub fn onemanage_links(segments: &[&str]) -> String {
        Self::join(&Self::onemanage(&["links"]), segments)
    }

    /// Path under the OneManage links/fabrics API.
    #[must_use]
    pub fn onemanage_links_fabrics(segments: &[&str]) -> String {
        Self::join(&Self::onemanage(&["links", "fabrics"]), segments)
    }

    /// Path under the OneManage top-down API.
    #[must_use]
    pub fn onemanage_top_down(segments: &[&str]) -> String {
        Self::join(&Self::onemanage(&["top-down"]), segments)
    }

    /// Path under the OneManage top-down fabrics API.
    #[must_use]
    pub fn onemanage_top_down_fabrics(segments: &[&str]) -> String {
        Self::join(&Self::onemanage(&["top-down", "fabrics"]), segments)
    }

    /// Path under the Nexus Dashboard infra AAA API.
    #[must_use]
    pub fn nd_infra_aaa(segments: &[&str]) -> String {
        Self::join(Self::ND_INFRA_AAA, segments)
    }
}
