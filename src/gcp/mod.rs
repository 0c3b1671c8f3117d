//! GCP API interaction module
//!
//! # Module Structure
//!
//! - [`auth`] - Application Default Credentials and gcloud defaults
//! - [`client`] - per-version Compute client and collection URLs
//! - [`http`] - HTTP utilities for REST API calls
//!
//! # Example
//!
//! ```ignore
//! use gce_multiversion::gcp::auth::GcpCredentials;
//! use gce_multiversion::gcp::client::{ComputeClient, ZONE_OPERATIONS, DEFAULT_ENDPOINT};
//! use gce_multiversion::version::ApiVersion;
//!
//! async fn example() -> gce_multiversion::Result<()> {
//!     let creds = GcpCredentials::new().await?;
//!     let client = ComputeClient::new(creds, DEFAULT_ENDPOINT, ApiVersion::V1)?;
//!     let path = ZONE_OPERATIONS.collection_path(&["us-central1-a"])?;
//!     let op: gce_multiversion::compute::v1::Operation =
//!         client.get("my-project", &path, "operation-123").await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod http;
