//! Compute Engine `v1` wire types

use serde::{Deserialize, Serialize};

/// Named port on an instance group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamedPort {
    #[serde(skip_serializing_if = "super::is_default")]
    pub name: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub port: i64,
}

/// Reserved IP address, regional or global
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    #[serde(with = "super::u64_string", skip_serializing_if = "super::is_default")]
    pub id: u64,
    #[serde(skip_serializing_if = "super::is_default")]
    pub creation_timestamp: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub name: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub description: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub address: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub status: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub region: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub self_link: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub users: Vec<String>,
    #[serde(skip_serializing_if = "super::is_default")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstanceGroupManagerActionsSummary {
    #[serde(skip_serializing_if = "super::is_default")]
    pub abandoning: i64,
    #[serde(skip_serializing_if = "super::is_default")]
    pub creating: i64,
    #[serde(skip_serializing_if = "super::is_default")]
    pub creating_without_retries: i64,
    #[serde(skip_serializing_if = "super::is_default")]
    pub deleting: i64,
    #[serde(skip_serializing_if = "super::is_default")]
    pub none: i64,
    #[serde(skip_serializing_if = "super::is_default")]
    pub recreating: i64,
    #[serde(skip_serializing_if = "super::is_default")]
    pub refreshing: i64,
    #[serde(skip_serializing_if = "super::is_default")]
    pub restarting: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstanceGroupManager {
    #[serde(with = "super::u64_string", skip_serializing_if = "super::is_default")]
    pub id: u64,
    #[serde(skip_serializing_if = "super::is_default")]
    pub creation_timestamp: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub name: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub description: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub zone: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub base_instance_name: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub instance_template: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub instance_group: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub target_size: i64,
    #[serde(skip_serializing_if = "super::is_default")]
    pub target_pools: Vec<String>,
    #[serde(skip_serializing_if = "super::is_default")]
    pub named_ports: Vec<NamedPort>,
    #[serde(skip_serializing_if = "super::is_default")]
    pub current_actions: Option<InstanceGroupManagerActionsSummary>,
    #[serde(skip_serializing_if = "super::is_default")]
    pub fingerprint: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub self_link: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstanceGroup {
    #[serde(with = "super::u64_string", skip_serializing_if = "super::is_default")]
    pub id: u64,
    #[serde(skip_serializing_if = "super::is_default")]
    pub creation_timestamp: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub name: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub description: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub zone: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub network: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub size: i64,
    #[serde(skip_serializing_if = "super::is_default")]
    pub named_ports: Vec<NamedPort>,
    #[serde(skip_serializing_if = "super::is_default")]
    pub fingerprint: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub self_link: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperationErrorErrors {
    #[serde(skip_serializing_if = "super::is_default")]
    pub code: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub location: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperationError {
    #[serde(skip_serializing_if = "super::is_default")]
    pub errors: Vec<OperationErrorErrors>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperationWarningsData {
    #[serde(skip_serializing_if = "super::is_default")]
    pub key: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperationWarnings {
    #[serde(skip_serializing_if = "super::is_default")]
    pub code: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub message: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub data: Vec<OperationWarningsData>,
}

/// Long-running operation returned by every mutating call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Operation {
    #[serde(with = "super::u64_string", skip_serializing_if = "super::is_default")]
    pub id: u64,
    #[serde(skip_serializing_if = "super::is_default")]
    pub name: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub kind: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub zone: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub region: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub client_operation_id: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub operation_type: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub target_link: String,
    #[serde(with = "super::u64_string", skip_serializing_if = "super::is_default")]
    pub target_id: u64,
    #[serde(skip_serializing_if = "super::is_default")]
    pub status: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub status_message: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub user: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub progress: i64,
    #[serde(skip_serializing_if = "super::is_default")]
    pub insert_time: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub start_time: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub end_time: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub http_error_status_code: i64,
    #[serde(skip_serializing_if = "super::is_default")]
    pub http_error_message: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub self_link: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub description: String,
    #[serde(skip_serializing_if = "super::is_default")]
    pub error: Option<OperationError>,
    #[serde(skip_serializing_if = "super::is_default")]
    pub warnings: Vec<OperationWarnings>,
}
