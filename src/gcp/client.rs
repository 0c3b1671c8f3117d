//! Compute Client
//!
//! One client per API version, combining authentication and HTTP
//! functionality with Compute Engine URL construction.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;

use super::auth::GcpCredentials;
use super::http::GcpHttpClient;
use crate::version::ApiVersion;
use crate::{Error, Result};

pub const DEFAULT_ENDPOINT: &str = "https://compute.googleapis.com";

/// Where a collection lives under `projects/{project}/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// `global/{path}`
    Global,
    /// `regions/{region}/{path}`
    Region,
    /// `zones/{zone}/{path}`
    Zone,
}

impl Location {
    fn scope_params(self) -> usize {
        match self {
            Location::Global => 0,
            Location::Region | Location::Zone => 1,
        }
    }
}

/// A REST collection of one record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collection {
    /// Plural record name, e.g. `InstanceGroupManagers`
    pub plural: &'static str,
    /// Path segment, e.g. `instanceGroupManagers`
    pub path: &'static str,
    pub location: Location,
}

impl Collection {
    /// Relative path of the collection for the given scope values.
    pub fn collection_path(&self, scope: &[&str]) -> Result<String> {
        if scope.len() != self.location.scope_params() {
            return Err(Error::Config(format!(
                "{} expects {} scope parameter(s), got {}",
                self.plural,
                self.location.scope_params(),
                scope.len()
            )));
        }
        if scope.iter().any(|s| s.is_empty()) {
            return Err(Error::Config(format!("{}: empty scope parameter", self.plural)));
        }
        Ok(match self.location {
            Location::Global => format!("global/{}", self.path),
            Location::Region => format!("regions/{}/{}", urlencoding::encode(scope[0]), self.path),
            Location::Zone => format!("zones/{}/{}", urlencoding::encode(scope[0]), self.path),
        })
    }
}

pub const GLOBAL_OPERATIONS: Collection = Collection {
    plural: "GlobalOperations",
    path: "operations",
    location: Location::Global,
};

pub const REGION_OPERATIONS: Collection = Collection {
    plural: "RegionOperations",
    path: "operations",
    location: Location::Region,
};

pub const ZONE_OPERATIONS: Collection = Collection {
    plural: "ZoneOperations",
    path: "operations",
    location: Location::Zone,
};

/// Compute Engine client bound to one API version
#[derive(Clone)]
pub struct ComputeClient {
    pub credentials: GcpCredentials,
    pub http: GcpHttpClient,
    endpoint: String,
    version: ApiVersion,
}

impl ComputeClient {
    pub fn new(credentials: GcpCredentials, endpoint: &str, version: ApiVersion) -> Result<Self> {
        let endpoint = url::Url::parse(endpoint)
            .map_err(|e| Error::Config(format!("invalid endpoint '{}': {}", endpoint, e)))?;

        Ok(Self {
            credentials,
            http: GcpHttpClient::new()?,
            endpoint: endpoint.as_str().trim_end_matches('/').to_string(),
            version,
        })
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build Compute Engine API URL
    pub fn compute_url(&self, project: &str, path: &str) -> String {
        format!(
            "{}/compute/{}/projects/{}/{}",
            self.endpoint,
            self.version.path_segment(),
            urlencoding::encode(project),
            path
        )
    }

    /// `{collection_url}/{name}`, with `path` as returned by [`Collection::collection_path`].
    fn item_url(&self, project: &str, path: &str, name: &str) -> String {
        format!(
            "{}/{}",
            self.compute_url(project, path),
            urlencoding::encode(name)
        )
    }

    /// Fresh `requestId` so the backend can deduplicate a replayed mutation.
    fn with_request_id(url: String) -> String {
        format!("{}?requestId={}", url, uuid::Uuid::new_v4())
    }

    /// Run `call` with the current token. A 401 means the cached token went
    /// stale, so the call is made once more with a refreshed one.
    async fn authorized<R, F, Fut>(&self, mut call: F) -> Result<R>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = Result<R>>,
    {
        let token = self.credentials.get_token().await?;
        match call(token).await {
            Err(Error::Api { status: 401, .. }) => {
                tracing::debug!("Token rejected, refreshing");
                let token = self.credentials.refresh_token().await?;
                call(token).await
            }
            other => other,
        }
    }

    pub async fn insert<B, R>(&self, project: &str, path: &str, resource: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = &Self::with_request_id(self.compute_url(project, path));
        self.authorized(move |token| async move { self.http.post(url, &token, resource).await })
            .await
    }

    pub async fn get<R: DeserializeOwned>(
        &self,
        project: &str,
        path: &str,
        name: &str,
    ) -> Result<R> {
        let url = &self.item_url(project, path, name);
        self.authorized(move |token| async move { self.http.get(url, &token).await })
            .await
    }

    pub async fn delete<R: DeserializeOwned>(
        &self,
        project: &str,
        path: &str,
        name: &str,
    ) -> Result<R> {
        let url = &Self::with_request_id(self.item_url(project, path, name));
        self.authorized(move |token| async move { self.http.delete(url, &token).await })
            .await
    }

    /// Full replacement of a record (`PUT`).
    pub async fn update<B, R>(
        &self,
        project: &str,
        path: &str,
        name: &str,
        resource: &B,
    ) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = &Self::with_request_id(self.item_url(project, path, name));
        self.authorized(move |token| async move { self.http.put(url, &token, resource).await })
            .await
    }
}
