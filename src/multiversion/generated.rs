//! This is a generated file, please do not edit manually. Changes can be
//! made in the schemas under `src/schemas/` and regenerated with `gce-mv`.

use super::{ComputeMultiversionService, Verb};
use crate::compute::{beta, v1};
use crate::convert::convert_to;
use crate::gcp::client::{Collection, Location};
use crate::shared;
use crate::version::ApiVersion;
use crate::{Error, Result};

pub const ADDRESSES: Collection = Collection {
    plural: "Addresses",
    path: "addresses",
    location: Location::Region,
};

impl ComputeMultiversionService {
    pub async fn insert_address(
        &self,
        project: &str,
        region: &str,
        resource: &shared::Address,
        version: ApiVersion,
    ) -> Result<shared::Operation> {
        let client = self.client_for("Address", Verb::Insert, version)?;
        let path = ADDRESSES.collection_path(&[region])?;
        match version {
            ApiVersion::V0Beta => {
                let body: beta::Address = convert_to(resource);
                let op: beta::Operation = client.insert(project, &path, &body).await?;
                Ok(convert_to(&op))
            }
            ApiVersion::V1 => {
                let body: v1::Address = convert_to(resource);
                let op: v1::Operation = client.insert(project, &path, &body).await?;
                Ok(convert_to(&op))
            }
        }
    }

    pub async fn get_address(
        &self,
        project: &str,
        region: &str,
        name: &str,
        version: ApiVersion,
    ) -> Result<shared::Address> {
        let client = self.client_for("Address", Verb::Get, version)?;
        let path = ADDRESSES.collection_path(&[region])?;
        match version {
            ApiVersion::V0Beta => {
                let wire: beta::Address = client.get(project, &path, name).await?;
                Ok(convert_to(&wire))
            }
            ApiVersion::V1 => {
                let wire: v1::Address = client.get(project, &path, name).await?;
                Ok(convert_to(&wire))
            }
        }
    }

    pub async fn delete_address(
        &self,
        project: &str,
        region: &str,
        name: &str,
        version: ApiVersion,
    ) -> Result<shared::Operation> {
        let client = self.client_for("Address", Verb::Delete, version)?;
        let path = ADDRESSES.collection_path(&[region])?;
        match version {
            ApiVersion::V0Beta => {
                let op: beta::Operation = client.delete(project, &path, name).await?;
                Ok(convert_to(&op))
            }
            ApiVersion::V1 => {
                let op: v1::Operation = client.delete(project, &path, name).await?;
                Ok(convert_to(&op))
            }
        }
    }
}

pub const GLOBAL_ADDRESSES: Collection = Collection {
    plural: "GlobalAddresses",
    path: "addresses",
    location: Location::Global,
};

impl ComputeMultiversionService {
    pub async fn insert_global_address(
        &self,
        project: &str,
        resource: &shared::Address,
        version: ApiVersion,
    ) -> Result<shared::Operation> {
        let client = self.client_for("GlobalAddress", Verb::Insert, version)?;
        let path = GLOBAL_ADDRESSES.collection_path(&[])?;
        match version {
            ApiVersion::V0Beta => {
                let body: beta::Address = convert_to(resource);
                let op: beta::Operation = client.insert(project, &path, &body).await?;
                Ok(convert_to(&op))
            }
            ApiVersion::V1 => {
                let body: v1::Address = convert_to(resource);
                let op: v1::Operation = client.insert(project, &path, &body).await?;
                Ok(convert_to(&op))
            }
        }
    }

    pub async fn get_global_address(
        &self,
        project: &str,
        name: &str,
        version: ApiVersion,
    ) -> Result<shared::Address> {
        let client = self.client_for("GlobalAddress", Verb::Get, version)?;
        let path = GLOBAL_ADDRESSES.collection_path(&[])?;
        match version {
            ApiVersion::V0Beta => {
                let wire: beta::Address = client.get(project, &path, name).await?;
                Ok(convert_to(&wire))
            }
            ApiVersion::V1 => {
                let wire: v1::Address = client.get(project, &path, name).await?;
                Ok(convert_to(&wire))
            }
        }
    }

    pub async fn delete_global_address(
        &self,
        project: &str,
        name: &str,
        version: ApiVersion,
    ) -> Result<shared::Operation> {
        let client = self.client_for("GlobalAddress", Verb::Delete, version)?;
        let path = GLOBAL_ADDRESSES.collection_path(&[])?;
        match version {
            ApiVersion::V0Beta => {
                let op: beta::Operation = client.delete(project, &path, name).await?;
                Ok(convert_to(&op))
            }
            ApiVersion::V1 => {
                let op: v1::Operation = client.delete(project, &path, name).await?;
                Ok(convert_to(&op))
            }
        }
    }
}

pub const INSTANCE_GROUPS: Collection = Collection {
    plural: "InstanceGroups",
    path: "instanceGroups",
    location: Location::Zone,
};

impl ComputeMultiversionService {
    pub async fn insert_instance_group(
        &self,
        project: &str,
        zone: &str,
        resource: &shared::InstanceGroup,
        version: ApiVersion,
    ) -> Result<shared::Operation> {
        let client = self.client_for("InstanceGroup", Verb::Insert, version)?;
        let path = INSTANCE_GROUPS.collection_path(&[zone])?;
        match version {
            ApiVersion::V0Beta => {
                let body: beta::InstanceGroup = convert_to(resource);
                let op: beta::Operation = client.insert(project, &path, &body).await?;
                Ok(convert_to(&op))
            }
            ApiVersion::V1 => {
                let body: v1::InstanceGroup = convert_to(resource);
                let op: v1::Operation = client.insert(project, &path, &body).await?;
                Ok(convert_to(&op))
            }
        }
    }

    pub async fn get_instance_group(
        &self,
        project: &str,
        zone: &str,
        name: &str,
        version: ApiVersion,
    ) -> Result<shared::InstanceGroup> {
        let client = self.client_for("InstanceGroup", Verb::Get, version)?;
        let path = INSTANCE_GROUPS.collection_path(&[zone])?;
        match version {
            ApiVersion::V0Beta => {
                let wire: beta::InstanceGroup = client.get(project, &path, name).await?;
                Ok(convert_to(&wire))
            }
            ApiVersion::V1 => {
                let wire: v1::InstanceGroup = client.get(project, &path, name).await?;
                Ok(convert_to(&wire))
            }
        }
    }

    pub async fn delete_instance_group(
        &self,
        project: &str,
        zone: &str,
        name: &str,
        version: ApiVersion,
    ) -> Result<shared::Operation> {
        let client = self.client_for("InstanceGroup", Verb::Delete, version)?;
        let path = INSTANCE_GROUPS.collection_path(&[zone])?;
        match version {
            ApiVersion::V0Beta => {
                let op: beta::Operation = client.delete(project, &path, name).await?;
                Ok(convert_to(&op))
            }
            ApiVersion::V1 => {
                let op: v1::Operation = client.delete(project, &path, name).await?;
                Ok(convert_to(&op))
            }
        }
    }
}

pub const INSTANCE_GROUP_MANAGERS: Collection = Collection {
    plural: "InstanceGroupManagers",
    path: "instanceGroupManagers",
    location: Location::Zone,
};

impl ComputeMultiversionService {
    pub async fn insert_instance_group_manager(
        &self,
        project: &str,
        zone: &str,
        resource: &shared::InstanceGroupManager,
        version: ApiVersion,
    ) -> Result<shared::Operation> {
        let client = self.client_for("InstanceGroupManager", Verb::Insert, version)?;
        let path = INSTANCE_GROUP_MANAGERS.collection_path(&[zone])?;
        match version {
            ApiVersion::V0Beta => {
                let body: beta::InstanceGroupManager = convert_to(resource);
                let op: beta::Operation = client.insert(project, &path, &body).await?;
                Ok(convert_to(&op))
            }
            ApiVersion::V1 => {
                let body: v1::InstanceGroupManager = convert_to(resource);
                let op: v1::Operation = client.insert(project, &path, &body).await?;
                Ok(convert_to(&op))
            }
        }
    }

    pub async fn get_instance_group_manager(
        &self,
        project: &str,
        zone: &str,
        name: &str,
        version: ApiVersion,
    ) -> Result<shared::InstanceGroupManager> {
        let client = self.client_for("InstanceGroupManager", Verb::Get, version)?;
        let path = INSTANCE_GROUP_MANAGERS.collection_path(&[zone])?;
        match version {
            ApiVersion::V0Beta => {
                let wire: beta::InstanceGroupManager = client.get(project, &path, name).await?;
                Ok(convert_to(&wire))
            }
            ApiVersion::V1 => {
                let wire: v1::InstanceGroupManager = client.get(project, &path, name).await?;
                Ok(convert_to(&wire))
            }
        }
    }

    pub async fn delete_instance_group_manager(
        &self,
        project: &str,
        zone: &str,
        name: &str,
        version: ApiVersion,
    ) -> Result<shared::Operation> {
        let client = self.client_for("InstanceGroupManager", Verb::Delete, version)?;
        let path = INSTANCE_GROUP_MANAGERS.collection_path(&[zone])?;
        match version {
            ApiVersion::V0Beta => {
                let op: beta::Operation = client.delete(project, &path, name).await?;
                Ok(convert_to(&op))
            }
            ApiVersion::V1 => {
                let op: v1::Operation = client.delete(project, &path, name).await?;
                Ok(convert_to(&op))
            }
        }
    }

    pub async fn update_instance_group_manager(
        &self,
        project: &str,
        zone: &str,
        name: &str,
        resource: &shared::InstanceGroupManager,
        version: ApiVersion,
    ) -> Result<shared::Operation> {
        let client = self.client_for("InstanceGroupManager", Verb::Update, version)?;
        let path = INSTANCE_GROUP_MANAGERS.collection_path(&[zone])?;
        match version {
            ApiVersion::V0Beta => {
                let body: beta::InstanceGroupManager = convert_to(resource);
                let op: beta::Operation = client.update(project, &path, name, &body).await?;
                Ok(convert_to(&op))
            }
            _ => Err(Error::unknown_version("InstanceGroupManager", version)),
        }
    }
}

pub const SSL_POLICIES: Collection = Collection {
    plural: "SslPolicies",
    path: "sslPolicies",
    location: Location::Global,
};

impl ComputeMultiversionService {
    pub async fn insert_ssl_policy(
        &self,
        project: &str,
        resource: &shared::SslPolicy,
        version: ApiVersion,
    ) -> Result<shared::Operation> {
        let client = self.client_for("SslPolicy", Verb::Insert, version)?;
        let path = SSL_POLICIES.collection_path(&[])?;
        match version {
            ApiVersion::V0Beta => {
                let body: beta::SslPolicy = convert_to(resource);
                let op: beta::Operation = client.insert(project, &path, &body).await?;
                Ok(convert_to(&op))
            }
            _ => Err(Error::unknown_version("SslPolicy", version)),
        }
    }

    pub async fn get_ssl_policy(
        &self,
        project: &str,
        name: &str,
        version: ApiVersion,
    ) -> Result<shared::SslPolicy> {
        let client = self.client_for("SslPolicy", Verb::Get, version)?;
        let path = SSL_POLICIES.collection_path(&[])?;
        match version {
            ApiVersion::V0Beta => {
                let wire: beta::SslPolicy = client.get(project, &path, name).await?;
                Ok(convert_to(&wire))
            }
            _ => Err(Error::unknown_version("SslPolicy", version)),
        }
    }

    pub async fn delete_ssl_policy(
        &self,
        project: &str,
        name: &str,
        version: ApiVersion,
    ) -> Result<shared::Operation> {
        let client = self.client_for("SslPolicy", Verb::Delete, version)?;
        let path = SSL_POLICIES.collection_path(&[])?;
        match version {
            ApiVersion::V0Beta => {
                let op: beta::Operation = client.delete(project, &path, name).await?;
                Ok(convert_to(&op))
            }
            _ => Err(Error::unknown_version("SslPolicy", version)),
        }
    }
}
