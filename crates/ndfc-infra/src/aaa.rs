//! AAA local-user endpoint request models.
//!
//! CRUD operations on `/api/v1/infra/aaa/localUsers`. Listing and creation
//! address the collection; update and deletion address one user and require
//! `login_id` before the path can be computed.

use ndfc_core::ident::LoginId;
use ndfc_core::paths::BasePath;
use ndfc_core::types::Verb;
use ndfc_core::{EndpointRequest, Result};

/// Retrieve local users, or one local user when `login_id` is set.
///
/// `GET /api/v1/infra/aaa/localUsers`
/// `GET /api/v1/infra/aaa/localUsers/{login_id}`
#[derive(Debug, Default, Clone)]
pub struct LocalUsersGet {
    /// Optional login ID selecting a single user.
    pub login_id: LoginId,
}

impl LocalUsersGet {
    /// Creates a request addressing the whole collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EndpointRequest for LocalUsersGet {
    fn path(&self) -> Result<String> {
        Ok(match self.login_id.get() {
            Some(login_id) => BasePath::nd_infra_aaa(&["localUsers", login_id]),
            None => BasePath::nd_infra_aaa(&["localUsers"]),
        })
    }

    fn verb(&self) -> Verb {
        Verb::Get
    }
}

/// Create a local user.
///
/// `POST /api/v1/infra/aaa/localUsers`
///
/// The user definition travels in the request body.
#[derive(Debug, Default, Clone)]
pub struct LocalUsersPost;

impl LocalUsersPost {
    /// Creates the request.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl EndpointRequest for LocalUsersPost {
    fn path(&self) -> Result<String> {
        Ok(BasePath::nd_infra_aaa(&["localUsers"]))
    }

    fn verb(&self) -> Verb {
        Verb::Post
    }
}

/// Update a local user.
///
/// `PUT /api/v1/infra/aaa/localUsers/{login_id}`
#[derive(Debug, Default, Clone)]
pub struct LocalUsersPut {
    /// Login ID of the user to update (mandatory).
    pub login_id: LoginId,
}

impl LocalUsersPut {
    /// Creates a request with the login ID unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EndpointRequest for LocalUsersPut {
    fn path(&self) -> Result<String> {
        Ok(BasePath::nd_infra_aaa(&[
            "localUsers",
            self.login_id.require()?,
        ]))
    }

    fn verb(&self) -> Verb {
        Verb::Put
    }
}

/// Delete a local user.
///
/// `DELETE /api/v1/infra/aaa/localUsers/{login_id}`
#[derive(Debug, Default, Clone)]
pub struct LocalUsersDelete {
    /// Login ID of the user to delete (mandatory).
    pub login_id: LoginId,
}

impl LocalUsersDelete {
    /// Creates a request with the login ID unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EndpointRequest for LocalUsersDelete {
    fn path(&self) -> Result<String> {
        Ok(BasePath::nd_infra_aaa(&[
            "localUsers",
            self.login_id.require()?,
        ]))
    }

    fn verb(&self) -> Verb {
        Verb::Delete
    }
}
