//! Endpoint-specific query parameter models.
//!
//! Each model declares its wire keys explicitly. Several diverge from the
//! generic snake_case to camelCase fallback on purpose (`network-names`,
//! `vrf-names` are hyphenated on the wire); the declared keys are
//! authoritative and are not unified with the fallback rule.

use validator::Validate;

use ndfc_core::query::QueryParamSet;
use ndfc_core::types::BooleanString;
use ndfc_core::validate;
use ndfc_core::Result;

/// Query parameters for fabric config-deploy endpoints.
///
/// The controller expects both flags on every deploy request, so they are
/// serialized even when left at their `"false"` defaults and the model is
/// never considered empty.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FabricConfigDeployQueryParams {
    /// Fetch the latest running config from the device instead of the
    /// cached copy.
    pub force_show_run: BooleanString,
    /// For MSD fabrics, also deploy pending changes on all child fabric
    /// switches.
    pub incl_all_msd_switches: BooleanString,
}

impl FabricConfigDeployQueryParams {
    /// Creates the parameter group with both flags at `"false"`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl QueryParamSet for FabricConfigDeployQueryParams {
    fn is_empty(&self) -> bool {
        false
    }

    fn to_query_string(&self, _url_encode: bool) -> String {
        format!(
            "forceShowRun={}&inclAllMSDSwitches={}",
            self.force_show_run, self.incl_all_msd_switches
        )
    }
}

/// Query parameters for fabric config-preview endpoints.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FabricConfigPreviewQueryParams {
    /// Fetch the latest running config from the device instead of the
    /// cached copy.
    pub force_show_run: BooleanString,
    /// Return the brief form of the preview output.
    pub show_brief: BooleanString,
}

impl FabricConfigPreviewQueryParams {
    /// Creates the parameter group with both flags at `"false"`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl QueryParamSet for FabricConfigPreviewQueryParams {
    fn is_empty(&self) -> bool {
        false
    }

    fn to_query_string(&self, _url_encode: bool) -> String {
        format!(
            "forceShowRun={}&showBrief={}",
            self.force_show_run, self.show_brief
        )
    }
}

/// Query parameters for link-by-UUID endpoints.
#[derive(Debug, Default, Clone, PartialEq, Eq, Validate)]
pub struct LinkQueryParams {
    #[validate(length(min = 1, message = "length must be >= 1"))]
    source_cluster_name: Option<String>,
    #[validate(length(min = 1, message = "length must be >= 1"))]
    destination_cluster_name: Option<String>,
}

impl LinkQueryParams {
    /// Creates the parameter group with both cluster names unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the source cluster name, if set.
    #[must_use]
    pub fn source_cluster_name(&self) -> Option<&str> {
        self.source_cluster_name.as_deref()
    }

    /// Returns the destination cluster name, if set.
    #[must_use]
    pub fn destination_cluster_name(&self) -> Option<&str> {
        self.destination_cluster_name.as_deref()
    }

    /// Sets the source cluster name (e.g. `nd-cluster-1`).
    ///
    /// # Errors
    ///
    /// Returns a validation error when the name is empty.
    pub fn set_source_cluster_name(&mut self, name: impl Into<String>) -> Result<()> {
        let previous = self.source_cluster_name.replace(name.into());
        if let Err(err) = validate::check(self) {
            self.source_cluster_name = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Sets the destination cluster name (e.g. `nd-cluster-2`).
    ///
    /// # Errors
    ///
    /// Returns a validation error when the name is empty.
    pub fn set_destination_cluster_name(&mut self, name: impl Into<String>) -> Result<()> {
        let previous = self.destination_cluster_name.replace(name.into());
        if let Err(err) = validate::check(self) {
            self.destination_cluster_name = previous;
            return Err(err);
        }
        Ok(())
    }
}

impl QueryParamSet for LinkQueryParams {
    fn is_empty(&self) -> bool {
        self.source_cluster_name.is_none() && self.destination_cluster_name.is_none()
    }

    fn to_query_string(&self, _url_encode: bool) -> String {
        let mut pairs: Vec<String> = Vec::new();
        if let Some(source) = &self.source_cluster_name {
            pairs.push(format!("sourceClusterName={source}"));
        }
        if let Some(destination) = &self.destination_cluster_name {
            pairs.push(format!("destinationClusterName={destination}"));
        }
        pairs.join("&")
    }
}

/// Query parameters for network bulk-delete endpoints.
///
/// The wire key is hyphenated (`network-names`), not camelCase.
#[derive(Debug, Default, Clone, PartialEq, Eq, Validate)]
pub struct NetworkNamesQueryParams {
    #[validate(length(min = 1, message = "length must be >= 1"))]
    network_names: Option<String>,
}

impl NetworkNamesQueryParams {
    /// Creates the parameter group with no networks selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the comma-separated network names, if set.
    #[must_use]
    pub fn network_names(&self) -> Option<&str> {
        self.network_names.as_deref()
    }

    /// Sets the comma-separated network names, e.g. `Net1,Net2,Net3`.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the list is empty.
    pub fn set_network_names(&mut self, names: impl Into<String>) -> Result<()> {
        let previous = self.network_names.replace(names.into());
        if let Err(err) = validate::check(self) {
            self.network_names = previous;
            return Err(err);
        }
        Ok(())
    }
}

impl QueryParamSet for NetworkNamesQueryParams {
    fn is_empty(&self) -> bool {
        self.network_names.is_none()
    }

    fn to_query_string(&self, _url_encode: bool) -> String {
        match &self.network_names {
            Some(names) => format!("network-names={names}"),
            None => String::new(),
        }
    }
}

/// Query parameters for VRF bulk-delete endpoints.
///
/// The wire key is hyphenated (`vrf-names`), not camelCase.
#[derive(Debug, Default, Clone, PartialEq, Eq, Validate)]
pub struct VrfNamesQueryParams {
    #[validate(length(min = 1, message = "length must be >= 1"))]
    vrf_names: Option<String>,
}

impl VrfNamesQueryParams {
    /// Creates the parameter group with no VRFs selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the comma-separated VRF names, if set.
    #[must_use]
    pub fn vrf_names(&self) -> Option<&str> {
        self.vrf_names.as_deref()
    }

    /// Sets the comma-separated VRF names, e.g. `VRF1,VRF2,VRF3`.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the list is empty.
    pub fn set_vrf_names(&mut self, names: impl Into<String>) -> Result<()> {
        let previous = self.vrf_names.replace(names.into());
        if let Err(err) = validate::check(self) {
            self.vrf_names = previous;
            return Err(err);
        }
        Ok(())
    }
}

impl QueryParamSet for VrfNamesQueryParams {
    fn is_empty(&self) -> bool {
        self.vrf_names.is_none()
    }

    fn to_query_string(&self, _url_encode: bool) -> String {
        match &self.vrf_names {
            Some(names) => format!("vrf-names={names}"),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndfc_core::Error;

    #[test]
    fn deploy_params_always_emit_both_flags() {
        let params = FabricConfigDeployQueryParams::new();
        assert!(!params.is_empty());
        assert_eq!(
            params.to_query_string(true),
            "forceShowRun=false&inclAllMSDSwitches=false"
        );
    }

    #[test]
    fn deploy_params_emit_assigned_values() {
        let params = FabricConfigDeployQueryParams {
            force_show_run: BooleanString::True,
            incl_all_msd_switches: BooleanString::False,
        };
        assert_eq!(
            params.to_query_string(false),
            "forceShowRun=true&inclAllMSDSwitches=false"
        );
    }

    #[test]
    fn preview_params_always_emit_both_flags() {
        let params = FabricConfigPreviewQueryParams::new();
        assert!(!params.is_empty());
        assert_eq!(
            params.to_query_string(true),
            "forceShowRun=false&showBrief=false"
        );
    }

    #[test]
    fn link_params_empty_until_assigned() {
        let params = LinkQueryParams::new();
        assert!(params.is_empty());
        assert_eq!(params.to_query_string(true), "");
    }

    #[test]
    fn link_params_declared_wire_keys() {
        let mut params = LinkQueryParams::new();
        params.set_source_cluster_name("nd-cluster-1").unwrap();
        params.set_destination_cluster_name("nd-cluster-2").unwrap();

        assert_eq!(
            params.to_query_string(true),
            "sourceClusterName=nd-cluster-1&destinationClusterName=nd-cluster-2"
        );
    }

    #[test]
    fn link_params_single_field() {
        let mut params = LinkQueryParams::new();
        params.set_source_cluster_name("nd-cluster-1").unwrap();
        assert_eq!(params.to_query_string(true), "sourceClusterName=nd-cluster-1");
    }

    #[test]
    fn link_params_reject_empty_name() {
        let mut params = LinkQueryParams::new();
        let err = params.set_source_cluster_name("").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(params.is_empty());
    }

    #[test]
    fn network_names_hyphenated_key() {
        let mut params = NetworkNamesQueryParams::new();
        params.set_network_names("Net1,Net2,Net3").unwrap();
        assert_eq!(params.to_query_string(true), "network-names=Net1,Net2,Net3");
    }

    #[test]
    fn network_names_empty_rejected() {
        let mut params = NetworkNamesQueryParams::new();
        assert!(params.set_network_names("").is_err());
        assert!(params.is_empty());
    }

    #[test]
    fn vrf_names_hyphenated_key() {
        let mut params = VrfNamesQueryParams::new();
        params.set_vrf_names("VRF1,VRF2").unwrap();
        assert_eq!(params.to_query_string(true), "vrf-names=VRF1,VRF2");
    }

    #[test]
    fn vrf_names_empty_until_assigned() {
        let params = VrfNamesQueryParams::new();
        assert!(params.is_empty());
        assert_eq!(params.to_query_string(false), "");
    }
}
