//! Endpoint request contract and URL assembly.
//!
//! Request models bind path-template variables to concrete values and
//! expose the resulting `(path, verb)` pair. Sending the request is the
//! HTTP client's job; nothing here performs I/O.

use url::Url;

use crate::error::Result;
use crate::types::Verb;

/// Contract exposed by every endpoint request model.
pub trait EndpointRequest {
    /// Resource path, including the query string when one is present.
    ///
    /// The path is recomputed on every call: the underlying fields are
    /// mutable between accesses and no invalidation tracking exists.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingParameter`] when a mandatory path
    /// parameter has not been assigned.
    fn path(&self) -> Result<String>;

    /// HTTP verb bound to the endpoint.
    fn verb(&self) -> Verb;
}

/// Join a controller base URL with a request's computed path.
///
/// # Errors
///
/// Propagates the request's path failure, or returns
/// [`crate::Error::InvalidEndpoint`] when the join fails.
pub fn endpoint_url(base: &Url, request: &impl EndpointRequest) -> Result<Url> {
    let path = request.path()?;
    Ok(base.join(&path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[derive(Debug)]
    struct FixedRequest {
        ready: bool,
    }

    impl EndpointRequest for FixedRequest {
        fn path(&self) -> Result<String> {
            if self.ready {
                Ok("/appcenter/cisco/ndfc/api/v1/onemanage/fabrics?max=5".to_string())
            } else {
                Err(Error::MissingParameter("fabric_name"))
            }
        }

        fn verb(&self) -> Verb {
            Verb::Get
        }
    }

    #[test]
    fn test_endpoint_url_joins_base_and_path() {
        let base = Url::parse("https://nd.example.com").unwrap();
        let request = FixedRequest { ready: true };

        let url = endpoint_url(&base, &request).unwrap();
        assert_eq!(
            url.as_str(),
            "https://nd.example.com/appcenter/cisco/ndfc/api/v1/onemanage/fabrics?max=5"
        );
    }

    #[test]
    fn test_endpoint_url_propagates_missing_parameter() {
        let base = Url::parse("https://nd.example.com").unwrap();
        let request = FixedRequest { ready: false };

        let err = endpoint_url(&base, &request).unwrap_err();
        assert_eq!(err, Error::MissingParameter("fabric_name"));
    }
}
