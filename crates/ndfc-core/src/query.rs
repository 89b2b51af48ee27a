//! Query-parameter models, serialization, and composition.
//!
//! Endpoints combine endpoint-specific flags with optional search, filter,
//! and paging parameters. Each concern is modeled as its own parameter
//! group; a [`CompositeQueryParams`] joins the non-empty groups into a
//! single query string while preserving registration order.
//!
//! Duplicate keys across composed groups are passed through as-is: the
//! composite performs no de-duplication, so avoiding collisions is the
//! caller's responsibility. Likewise, filter expressions are opaque free
//! text to this layer; their embedded mini-language is never parsed.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;
use validator::{Validate, ValidationError};

use crate::error::Result;
use crate::validate;

/// Characters left intact when percent-encoding query values: the RFC 3986
/// unreserved set. Spaces become `%20`, never `+`.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a query value using application/x-www-form-urlencoded
/// rules with `%20` for spaces.
#[must_use]
pub fn encode_value(value: &str) -> String {
    utf8_percent_encode(value, UNRESERVED).to_string()
}

/// Convert a snake_case field name to the camelCase wire form.
///
/// This is the fallback for ad hoc fields only; fixed endpoint models
/// declare their wire keys explicitly and several of those keys
/// intentionally diverge from this rule.
#[must_use]
pub fn snake_to_camel(name: &str) -> String {
    let mut wire_key = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            wire_key.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            wire_key.push(ch);
        }
    }
    wire_key
}

fn render_pair(key: &str, value: &str, url_encode: bool) -> String {
    if url_encode {
        format!("{key}={}", encode_value(value))
    } else {
        format!("{key}={value}")
    }
}

/// Behavior shared by every query-parameter group.
pub trait QueryParamSet: fmt::Debug {
    /// True when serialization would contribute nothing to a request.
    ///
    /// Fields that are serialized unconditionally (because the controller
    /// requires them even at their defaults) are exempt from this check; a
    /// group declaring such fields is never empty.
    fn is_empty(&self) -> bool;

    /// Render the group as a `key=value&key=value` fragment.
    ///
    /// No leading `?`, no trailing separator; the empty string means "no
    /// query parameters". Groups whose values are free text honor
    /// `url_encode`; groups whose values are wire enums or validated
    /// identifiers emit them verbatim.
    fn to_query_string(&self, url_encode: bool) -> String;
}

/// Append a group's query string to a base path when the group is non-empty.
#[must_use]
pub fn with_query(base_path: String, params: &dyn QueryParamSet) -> String {
    if params.is_empty() {
        return base_path;
    }
    let query_string = params.to_query_string(true);
    if query_string.is_empty() {
        base_path
    } else {
        format!("{base_path}?{query_string}")
    }
}

fn validate_sort_directive(value: &str) -> std::result::Result<(), ValidationError> {
    if value.contains(':') {
        let direction = value.rsplit(':').next().unwrap_or_default();
        if direction.eq_ignore_ascii_case("asc") || direction.eq_ignore_ascii_case("desc") {
            return Ok(());
        }
    }
    let mut err = ValidationError::new("sort_direction");
    err.message = Some("Sort direction must be asc or desc".into());
    Err(err)
}

/// Lucene-style search parameters shared by list and search endpoints.
///
/// All fields are optional; an unset field is omitted from the query
/// string. The filter expression (AND/OR/NOT, wildcards, range brackets)
/// is carried verbatim and only percent-encoded on request.
#[derive(Debug, Default, Clone, PartialEq, Eq, Validate)]
pub struct LuceneQueryParams {
    #[validate(length(min = 1, message = "length must be >= 1"))]
    filter: Option<String>,
    #[validate(range(min = 1, max = 10000, message = "must be between 1 and 10000"))]
    max: Option<u32>,
    offset: Option<u32>,
    #[validate(custom(function = validate_sort_directive))]
    sort: Option<String>,
    #[validate(length(min = 1, message = "length must be >= 1"))]
    fields: Option<String>,
}

impl LuceneQueryParams {
    /// Creates a group with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the filter expression, if set.
    #[must_use]
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Returns the maximum result count, if set.
    #[must_use]
    pub fn max(&self) -> Option<u32> {
        self.max
    }

    /// Returns the pagination offset, if set.
    #[must_use]
    pub fn offset(&self) -> Option<u32> {
        self.offset
    }

    /// Returns the sort directive, if set.
    #[must_use]
    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    /// Returns the field-selection list, if set.
    #[must_use]
    pub fn fields(&self) -> Option<&str> {
        self.fields.as_deref()
    }

    /// Sets the Lucene filter expression.
    ///
    /// The expression is opaque to this layer; only a non-empty length is
    /// enforced.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the expression is empty.
    pub fn set_filter(&mut self, filter: impl Into<String>) -> Result<()> {
        let previous = self.filter.replace(filter.into());
        if let Err(err) = validate::check(self) {
            self.filter = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Sets the maximum number of results, between 1 and 10000 inclusive.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the value is out of range.
    pub fn set_max(&mut self, max: u32) -> Result<()> {
        let previous = self.max.replace(max);
        if let Err(err) = validate::check(self) {
            self.max = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Sets the pagination offset.
    ///
    /// # Errors
    ///
    /// Returns a validation error when constraints are violated.
    pub fn set_offset(&mut self, offset: u32) -> Result<()> {
        let previous = self.offset.replace(offset);
        if let Err(err) = validate::check(self) {
            self.offset = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Sets the sort directive in `<field>:<direction>` form.
    ///
    /// # Errors
    ///
    /// Returns a validation error unless the direction is `asc` or `desc`
    /// (case-insensitive).
    pub fn set_sort(&mut self, sort: impl Into<String>) -> Result<()> {
        let previous = self.sort.replace(sort.into());
        if let Err(err) = validate::check(self) {
            self.sort = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Sets the comma-separated field-selection list.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the list is empty.
    pub fn set_fields(&mut self, fields: impl Into<String>) -> Result<()> {
        let previous = self.fields.replace(fields.into());
        if let Err(err) = validate::check(self) {
            self.fields = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Builder-style [`set_filter`](Self::set_filter).
    ///
    /// # Errors
    ///
    /// Propagates the setter's validation error.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Result<Self> {
        self.set_filter(filter)?;
        Ok(self)
    }

    /// Builder-style [`set_max`](Self::set_max).
    ///
    /// # Errors
    ///
    /// Propagates the setter's validation error.
    pub fn with_max(mut self, max: u32) -> Result<Self> {
        self.set_max(max)?;
        Ok(self)
    }

    /// Builder-style [`set_offset`](Self::set_offset).
    ///
    /// # Errors
    ///
    /// Propagates the setter's validation error.
    pub fn with_offset(mut self, offset: u32) -> Result<Self> {
        self.set_offset(offset)?;
        Ok(self)
    }

    /// Builder-style [`set_sort`](Self::set_sort).
    ///
    /// # Errors
    ///
    /// Propagates the setter's validation error.
    pub fn with_sort(mut self, sort: impl Into<String>) -> Result<Self> {
        self.set_sort(sort)?;
        Ok(self)
    }

    /// Builder-style [`set_fields`](Self::set_fields).
    ///
    /// # Errors
    ///
    /// Propagates the setter's validation error.
    pub fn with_fields(mut self, fields: impl Into<String>) -> Result<Self> {
        self.set_fields(fields)?;
        Ok(self)
    }
}

impl QueryParamSet for LuceneQueryParams {
    fn is_empty(&self) -> bool {
        self.filter.is_none()
            && self.max.is_none()
            && self.offset.is_none()
            && self.sort.is_none()
            && self.fields.is_none()
    }

    fn to_query_string(&self, url_encode: bool) -> String {
        let mut pairs: Vec<String> = Vec::new();
        if let Some(filter) = &self.filter {
            pairs.push(render_pair("filter", filter, url_encode));
        }
        if let Some(max) = self.max {
            pairs.push(render_pair("max", &max.to_string(), url_encode));
        }
        if let Some(offset) = self.offset {
            pairs.push(render_pair("offset", &offset.to_string(), url_encode));
        }
        if let Some(sort) = &self.sort {
            pairs.push(render_pair("sort", sort, url_encode));
        }
        if let Some(fields) = &self.fields {
            pairs.push(render_pair("fields", fields, url_encode));
        }
        pairs.join("&")
    }
}

/// Ordered ad hoc query parameters for fields outside any fixed endpoint
/// model.
///
/// Keys are given in snake_case and converted to camelCase at serialization
/// time via [`snake_to_camel`]. Pairs are emitted in push order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AdHocQueryParams {
    pairs: Vec<(String, String)>,
}

impl AdHocQueryParams {
    /// Creates a new, empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a key/value pair.
    pub fn push<T>(&mut self, key: impl Into<String>, value: T)
    where
        T: fmt::Display,
    {
        self.pairs.push((key.into(), value.to_string()));
    }

    /// Appends a key/value pair when the value is present.
    pub fn push_opt<T>(&mut self, key: impl Into<String>, value: Option<T>)
    where
        T: fmt::Display,
    {
        if let Some(value) = value {
            self.push(key, value);
        }
    }
}

impl QueryParamSet for AdHocQueryParams {
    fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn to_query_string(&self, url_encode: bool) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| render_pair(&snake_to_camel(key), value, url_encode))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Ordered collection of heterogeneous query-parameter groups.
///
/// Groups serialize in registration order; empty groups are skipped. A
/// single `url_encode` decision applies across the whole collection and is
/// passed through to groups that support per-call encoding.
#[derive(Debug, Default)]
pub struct CompositeQueryParams {
    groups: Vec<Box<dyn QueryParamSet>>,
}

impl CompositeQueryParams {
    /// Creates an empty composite.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter group, returning the composite for chaining.
    pub fn add(&mut self, group: impl QueryParamSet + 'static) -> &mut Self {
        self.groups.push(Box::new(group));
        self
    }

    /// Removes every registered group.
    pub fn clear(&mut self) {
        self.groups.clear();
    }

    /// True when no registered group would contribute to the query string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|group| group.is_empty())
    }

    /// Join the non-empty groups' fragments with `&`, in registration
    /// order. Returns the empty string when nothing was collected.
    #[must_use]
    pub fn to_query_string(&self, url_encode: bool) -> String {
        let fragments: Vec<String> = self
            .groups
            .iter()
            .filter(|group| !group.is_empty())
            .map(|group| group.to_query_string(url_encode))
            .filter(|fragment| !fragment.is_empty())
            .collect();
        tracing::debug!(
            groups = self.groups.len(),
            fragments = fragments.len(),
            "composed query string"
        );
        fragments.join("&")
    }
}

impl QueryParamSet for CompositeQueryParams {
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    fn to_query_string(&self, url_encode: bool) -> String {
        Self::to_query_string(self, url_encode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lucene_fresh_is_empty() {
        let params = LuceneQueryParams::new();
        assert!(params.is_empty());
        assert_eq!(params.to_query_string(true), "");
        assert_eq!(params.to_query_string(false), "");
    }

    #[test]
    fn lucene_filter_round_trip() {
        let params = LuceneQueryParams::new()
            .with_filter("name:Spine* AND role:spine")
            .unwrap();

        let encoded = params.to_query_string(true);
        assert!(encoded.contains("%3A"));
        assert!(encoded.contains("%20"));
        assert!(encoded.contains("%2A"));
        assert!(!encoded.contains('+'));

        let value = encoded.strip_prefix("filter=").unwrap();
        let decoded = percent_encoding::percent_decode_str(value)
            .decode_utf8()
            .unwrap();
        assert_eq!(decoded, "name:Spine* AND role:spine");

        let raw = params.to_query_string(false);
        assert_eq!(raw, "filter=name:Spine* AND role:spine");
        assert!(!raw.contains('%'));
    }

    #[test]
    fn lucene_declaration_order() {
        let params = LuceneQueryParams::new()
            .with_filter("status:active")
            .unwrap()
            .with_max(50)
            .unwrap()
            .with_offset(10)
            .unwrap()
            .with_sort("name:desc")
            .unwrap()
            .with_fields("name,id,status")
            .unwrap();

        assert_eq!(
            params.to_query_string(false),
            "filter=status:active&max=50&offset=10&sort=name:desc&fields=name,id,status"
        );
    }

    #[test]
    fn lucene_max_bounds() {
        assert!(LuceneQueryParams::new().with_max(1).is_ok());
        assert!(LuceneQueryParams::new().with_max(10000).is_ok());

        let err = LuceneQueryParams::new().with_max(0).unwrap_err();
        assert!(err.to_string().contains("must be between 1 and 10000"));
        assert!(LuceneQueryParams::new().with_max(10001).is_err());
    }

    #[test]
    fn lucene_offset_accepts_zero() {
        let params = LuceneQueryParams::new().with_offset(0).unwrap();
        assert_eq!(params.offset(), Some(0));
        assert_eq!(params.to_query_string(false), "offset=0");
    }

    #[test]
    fn lucene_sort_directions() {
        assert!(LuceneQueryParams::new().with_sort("name:asc").is_ok());
        assert!(LuceneQueryParams::new().with_sort("created:desc").is_ok());
        assert!(LuceneQueryParams::new().with_sort("role:ASC").is_ok());
        assert!(LuceneQueryParams::new().with_sort("name:DESC").is_ok());

        let err = LuceneQueryParams::new().with_sort("name:up").unwrap_err();
        assert!(err.to_string().contains("Sort direction must be asc or desc"));
        assert!(LuceneQueryParams::new().with_sort("name").is_err());
    }

    #[test]
    fn lucene_sort_preserved_verbatim() {
        let params = LuceneQueryParams::new().with_sort("role:ASC").unwrap();
        assert_eq!(params.sort(), Some("role:ASC"));
    }

    #[test]
    fn lucene_multi_key_sort_accepted() {
        let params = LuceneQueryParams::new()
            .with_sort("role:asc,name:asc")
            .unwrap();
        assert_eq!(params.to_query_string(false), "sort=role:asc,name:asc");
    }

    #[test]
    fn lucene_failed_set_keeps_previous() {
        let mut params = LuceneQueryParams::new().with_max(100).unwrap();
        assert!(params.set_max(20000).is_err());
        assert_eq!(params.max(), Some(100));
    }

    #[test]
    fn lucene_complex_filters_opaque() {
        for filter in [
            "fabricName:MyFabric AND role:spine AND status:active",
            "role:spine OR role:leaf",
            "NOT status:deleted",
            "name:Spine-* OR ipAddress:10.1.*",
            "deployedDate:[2024-01-01 TO 2024-12-31]",
            "(role:spine OR role:leaf) AND status:active AND NOT ipAddress:192.168.*",
        ] {
            let params = LuceneQueryParams::new().with_filter(filter).unwrap();
            assert_eq!(params.to_query_string(false), format!("filter={filter}"));
        }
    }

    #[test]
    fn snake_to_camel_conversion() {
        assert_eq!(snake_to_camel("test_field"), "testField");
        assert_eq!(snake_to_camel("force_show_run"), "forceShowRun");
        assert_eq!(snake_to_camel("already"), "already");
        assert_eq!(snake_to_camel("show_brief"), "showBrief");
    }

    #[test]
    fn encode_value_space_uses_percent20() {
        assert_eq!(encode_value("a b"), "a%20b");
        assert_eq!(encode_value("name:Spine*"), "name%3ASpine%2A");
        assert_eq!(encode_value("[1 TO 2]"), "%5B1%20TO%202%5D");
        assert_eq!(encode_value("(x)"), "%28x%29");
        assert_eq!(encode_value("safe-chars_only.here~"), "safe-chars_only.here~");
    }

    #[test]
    fn ad_hoc_params_camel_case_keys() {
        let mut params = AdHocQueryParams::new();
        params.push("ticket_id", "CHG0012345");
        params.push("dry_run", "true");

        assert!(!QueryParamSet::is_empty(&params));
        assert_eq!(
            params.to_query_string(false),
            "ticketId=CHG0012345&dryRun=true"
        );
    }

    #[test]
    fn ad_hoc_params_push_opt_skips_none() {
        let mut params = AdHocQueryParams::new();
        params.push_opt("ticket_id", Option::<String>::None);
        assert!(QueryParamSet::is_empty(&params));
        assert_eq!(params.to_query_string(true), "");

        params.push_opt("limit", Some(5u32));
        assert_eq!(params.to_query_string(true), "limit=5");
    }

    #[test]
    fn composite_starts_empty() {
        let composite = CompositeQueryParams::new();
        assert!(composite.is_empty());
        assert_eq!(composite.to_query_string(true), "");
    }

    #[test]
    fn composite_add_chains() {
        let mut composite = CompositeQueryParams::new();
        composite
            .add(LuceneQueryParams::new().with_filter("test1:value1").unwrap())
            .add(LuceneQueryParams::new().with_max(50).unwrap());

        let query_string = composite.to_query_string(false);
        assert!(query_string.contains("filter=test1:value1"));
        assert!(query_string.contains("max=50"));
        assert!(query_string.contains('&'));
    }

    #[test]
    fn composite_skips_empty_groups() {
        let mut composite = CompositeQueryParams::new();
        composite
            .add(LuceneQueryParams::new())
            .add(LuceneQueryParams::new().with_max(100).unwrap());

        assert_eq!(composite.to_query_string(true), "max=100");
    }

    #[test]
    fn composite_is_empty_with_all_empty_groups() {
        let mut composite = CompositeQueryParams::new();
        composite
            .add(LuceneQueryParams::new())
            .add(LuceneQueryParams::new());
        assert!(composite.is_empty());
    }

    #[test]
    fn composite_not_empty_with_one_populated_group() {
        let mut composite = CompositeQueryParams::new();
        composite
            .add(LuceneQueryParams::new())
            .add(LuceneQueryParams::new().with_max(10).unwrap());
        assert!(!composite.is_empty());
    }

    #[test]
    fn composite_clear() {
        let mut composite = CompositeQueryParams::new();
        composite.add(LuceneQueryParams::new().with_max(100).unwrap());
        assert!(!composite.is_empty());

        composite.clear();
        assert!(composite.is_empty());
        assert_eq!(composite.to_query_string(true), "");
    }

    #[test]
    fn composite_propagates_encoding() {
        let mut composite = CompositeQueryParams::new();
        composite.add(
            LuceneQueryParams::new()
                .with_filter("name:Spine* AND role:spine")
                .unwrap(),
        );

        assert!(composite.to_query_string(true).contains("%3A"));
        assert!(!composite.to_query_string(false).contains("%3A"));
    }

    #[test]
    fn composite_preserves_registration_order() {
        let mut composite = CompositeQueryParams::new();
        composite
            .add(LuceneQueryParams::new().with_filter("first:value").unwrap())
            .add(LuceneQueryParams::new().with_max(50).unwrap())
            .add(LuceneQueryParams::new().with_offset(10).unwrap());

        let query_string = composite.to_query_string(false);
        let filter_pos = query_string.find("filter=").unwrap();
        let max_pos = query_string.find("max=").unwrap();
        let offset_pos = query_string.find("offset=").unwrap();
        assert!(filter_pos < max_pos);
        assert!(max_pos < offset_pos);
    }

    #[test]
    fn composite_keeps_duplicate_keys() {
        let mut composite = CompositeQueryParams::new();
        composite
            .add(LuceneQueryParams::new().with_max(10).unwrap())
            .add(LuceneQueryParams::new().with_max(20).unwrap());

        assert_eq!(composite.to_query_string(false), "max=10&max=20");
    }

    #[test]
    fn composite_nests_as_group() {
        let mut inner = CompositeQueryParams::new();
        inner.add(LuceneQueryParams::new().with_max(5).unwrap());

        let mut outer = CompositeQueryParams::new();
        outer.add(inner);
        assert_eq!(outer.to_query_string(false), "max=5");
    }

    #[test]
    fn with_query_appends_only_when_non_empty() {
        let empty = LuceneQueryParams::new();
        assert_eq!(with_query("/base".to_string(), &empty), "/base");

        let populated = LuceneQueryParams::new().with_max(5).unwrap();
        assert_eq!(with_query("/base".to_string(), &populated), "/base?max=5");
    }
}
