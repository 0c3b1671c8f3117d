//! Multiversion compute dispatcher
//!
//! [`ComputeMultiversionService`] holds one client per configured API version
//! and exposes canonical-typed CRUD methods per resource (generated, see
//! `generated.rs`), plus the scoped operation wait and the instance group
//! manager delete path.

#[rustfmt::skip]
mod generated;
pub mod operation;
pub mod table;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use generated::*;
pub use operation::{
    DeletePolicy, DeleteRetryPolicy, OperationStatus, OperationWaiter, WaitPolicy, WaitState,
};
pub use table::{DispatchTable, Verb};

use crate::codegen::registry;
use crate::compute::v1;
use crate::config::Config;
use crate::convert::convert_to;
use crate::gcp::auth::GcpCredentials;
use crate::gcp::client::{
    Collection, ComputeClient, GLOBAL_OPERATIONS, REGION_OPERATIONS, ZONE_OPERATIONS,
};
use crate::shared;
use crate::version::ApiVersion;
use crate::{Error, Result};

/// One client per version. `v1` is always present.
#[derive(Clone)]
pub struct ClientSet {
    pub v1: ComputeClient,
    pub beta: Option<ComputeClient>,
}

impl ClientSet {
    pub fn new(credentials: GcpCredentials, endpoint: &str, enable_beta: bool) -> Result<Self> {
        let v1 = ComputeClient::new(credentials.clone(), endpoint, ApiVersion::V1)?;
        let beta = if enable_beta {
            Some(ComputeClient::new(credentials, endpoint, ApiVersion::V0Beta)?)
        } else {
            None
        };
        Ok(Self { v1, beta })
    }

    /// Clients for the configured endpoint and credentials.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let credentials = match config.effective_access_token() {
            Some(token) => GcpCredentials::from_access_token(token),
            None => GcpCredentials::new().await?,
        };
        Self::new(credentials, &config.effective_endpoint(), config.enable_beta)
    }

    pub fn client(&self, version: ApiVersion) -> Option<&ComputeClient> {
        match version {
            ApiVersion::V1 => Some(&self.v1),
            ApiVersion::V0Beta => self.beta.as_ref(),
        }
    }
}

/// Which operations collection an operation lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeType {
    Global,
    Region,
    Zone,
}

impl fmt::Display for ScopeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScopeType::Global => "global",
            ScopeType::Region => "region",
            ScopeType::Zone => "zone",
        };
        f.write_str(name)
    }
}

impl ScopeType {
    /// Operations collection and scope values for this scope. Global ignores
    /// the qualifier; region and zone need a non-empty one.
    pub fn operations<'q>(self, qualifier: Option<&'q str>) -> Result<(Collection, Vec<&'q str>)> {
        match (self, qualifier.filter(|q| !q.is_empty())) {
            (ScopeType::Global, _) => Ok((GLOBAL_OPERATIONS, vec![])),
            (ScopeType::Region, Some(region)) => Ok((REGION_OPERATIONS, vec![region])),
            (ScopeType::Zone, Some(zone)) => Ok((ZONE_OPERATIONS, vec![zone])),
            (scope, None) => Err(Error::UnknownScope {
                scope,
                qualifier: qualifier.map(str::to_string),
            }),
        }
    }
}

/// Canonical-typed entry point for every supported resource.
#[derive(Clone)]
pub struct ComputeMultiversionService {
    clients: ClientSet,
    table: DispatchTable,
}

impl ComputeMultiversionService {
    /// Dispatcher over the embedded resource descriptors.
    pub fn new(clients: ClientSet) -> Self {
        Self::with_table(clients, DispatchTable::from_descriptors(registry::descriptors()))
    }

    pub fn with_table(clients: ClientSet, table: DispatchTable) -> Self {
        Self { clients, table }
    }

    pub fn table(&self) -> &DispatchTable {
        &self.table
    }

    pub fn clients(&self) -> &ClientSet {
        &self.clients
    }

    /// Whether a call would be dispatched, without making it.
    pub fn supports(&self, resource: &str, verb: Verb, version: ApiVersion) -> bool {
        self.table.supports(resource, verb, version) && self.clients.client(version).is_some()
    }

    /// Client serving `verb` on `resource` at `version`.
    pub fn client_for(
        &self,
        resource: &str,
        verb: Verb,
        version: ApiVersion,
    ) -> Result<&ComputeClient> {
        if !self.table.supports(resource, verb, version) {
            return Err(Error::unknown_version(resource, version));
        }
        let client = self.clients.client(version).ok_or_else(|| {
            tracing::warn!("{} {} requested on {} but no client is configured", verb, resource, version);
            Error::unknown_version(resource, version)
        })?;
        tracing::info!("{} {} on {}", verb, resource, version);
        Ok(client)
    }

    /// Fetch the current state of an operation from its scoped endpoint.
    pub async fn wait_operation(
        &self,
        project: &str,
        name: &str,
        scope: ScopeType,
        qualifier: Option<&str>,
    ) -> Result<shared::Operation> {
        let (collection, scope_values) = scope.operations(qualifier)?;
        let path = collection.collection_path(&scope_values)?;
        let op: v1::Operation = self.clients.v1.get(project, &path, name).await?;
        Ok(convert_to(&op))
    }

    /// Current number of instances in a zonal instance group.
    pub async fn get_instance_group_size(&self, project: &str, zone: &str, name: &str) -> Result<i64> {
        let group = self
            .get_instance_group(project, zone, name, ApiVersion::V1)
            .await?;
        Ok(group.size)
    }

    /// Delete an instance group manager and wait until it is gone.
    ///
    /// The delete call is retried per `policy.retry`; a wait timeout is
    /// tolerated as long as the group of the same name keeps shrinking from
    /// `target_size`.
    pub async fn delete_instance_group_manager_and_wait(
        &self,
        project: &str,
        zone: &str,
        name: &str,
        target_size: i64,
        version: ApiVersion,
        policy: &DeletePolicy,
    ) -> Result<()> {
        self.client_for("InstanceGroupManager", Verb::Delete, version)?;

        let op = operation::retry_delete(&policy.retry, move |attempt| {
            tracing::debug!("deleting instance group manager {} (attempt {})", name, attempt);
            self.delete_instance_group_manager(project, zone, name, version)
        })
        .await?;

        let waiter = OperationWaiter::new(self, policy.wait);
        let waiter = &waiter;
        let activity = "Deleting InstanceGroupManager";
        operation::wait_while_shrinking(
            name,
            target_size,
            move || {
                let op = op.clone();
                async move {
                    waiter
                        .wait(project, op, ScopeType::Zone, Some(zone), activity)
                        .await
                        .map(|_| ())
                }
            },
            move || self.get_instance_group_size(project, zone, name),
        )
        .await
    }
}
