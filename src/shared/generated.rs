//! This is a generated file, please do not edit manually. Changes can be
//! made in the schemas under `src/schemas/` and regenerated with `gce-mv`.

use crate::compute::{beta, v1};
use crate::convert::{convert_optional, convert_sequence, convert_to, Convert};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NamedPort {
    pub name: String,
    pub port: i64,
}

impl Convert<beta::NamedPort> for NamedPort {
    fn convert_into(&self, dst: &mut beta::NamedPort) {
        dst.name = self.name.clone();
        dst.port = self.port;
    }
}

impl Convert<NamedPort> for beta::NamedPort {
    fn convert_into(&self, dst: &mut NamedPort) {
        dst.name = self.name.clone();
        dst.port = self.port;
    }
}

impl Convert<v1::NamedPort> for NamedPort {
    fn convert_into(&self, dst: &mut v1::NamedPort) {
        dst.name = self.name.clone();
        dst.port = self.port;
    }
}

impl Convert<NamedPort> for v1::NamedPort {
    fn convert_into(&self, dst: &mut NamedPort) {
        dst.name = self.name.clone();
        dst.port = self.port;
    }
}

impl NamedPort {
    pub fn to_production(&self) -> v1::NamedPort {
        convert_to(self)
    }

    pub fn from_production(src: &v1::NamedPort) -> Self {
        convert_to(src)
    }
}

pub fn named_port_array_to_production(items: &[NamedPort]) -> Vec<v1::NamedPort> {
    convert_sequence(items)
}

pub fn named_port_array_from_production(items: &[v1::NamedPort]) -> Vec<NamedPort> {
    convert_sequence(items)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Address {
    pub id: u64,
    pub creation_timestamp: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub status: String,
    pub region: String,
    pub self_link: String,
    pub users: Vec<String>,
    pub kind: String,
    pub ip_version: String,
    pub address_type: String,
}

impl Convert<beta::Address> for Address {
    fn convert_into(&self, dst: &mut beta::Address) {
        dst.id = self.id;
        dst.creation_timestamp = self.creation_timestamp.clone();
        dst.name = self.name.clone();
        dst.description = self.description.clone();
        dst.address = self.address.clone();
        dst.status = self.status.clone();
        dst.region = self.region.clone();
        dst.self_link = self.self_link.clone();
        dst.users = self.users.clone();
        dst.kind = self.kind.clone();
        dst.ip_version = self.ip_version.clone();
        dst.address_type = self.address_type.clone();
    }
}

impl Convert<Address> for beta::Address {
    fn convert_into(&self, dst: &mut Address) {
        dst.id = self.id;
        dst.creation_timestamp = self.creation_timestamp.clone();
        dst.name = self.name.clone();
        dst.description = self.description.clone();
        dst.address = self.address.clone();
        dst.status = self.status.clone();
        dst.region = self.region.clone();
        dst.self_link = self.self_link.clone();
        dst.users = self.users.clone();
        dst.kind = self.kind.clone();
        dst.ip_version = self.ip_version.clone();
        dst.address_type = self.address_type.clone();
    }
}

impl Convert<v1::Address> for Address {
    fn convert_into(&self, dst: &mut v1::Address) {
        dst.id = self.id;
        dst.creation_timestamp = self.creation_timestamp.clone();
        dst.name = self.name.clone();
        dst.description = self.description.clone();
        dst.address = self.address.clone();
        dst.status = self.status.clone();
        dst.region = self.region.clone();
        dst.self_link = self.self_link.clone();
        dst.users = self.users.clone();
        dst.kind = self.kind.clone();
    }
}

impl Convert<Address> for v1::Address {
    fn convert_into(&self, dst: &mut Address) {
        dst.id = self.id;
        dst.creation_timestamp = self.creation_timestamp.clone();
        dst.name = self.name.clone();
        dst.description = self.description.clone();
        dst.address = self.address.clone();
        dst.status = self.status.clone();
        dst.region = self.region.clone();
        dst.self_link = self.self_link.clone();
        dst.users = self.users.clone();
        dst.kind = self.kind.clone();
    }
}

impl Address {
    pub fn to_production(&self) -> v1::Address {
        convert_to(self)
    }

    pub fn from_production(src: &v1::Address) -> Self {
        convert_to(src)
    }
}

pub fn address_array_to_production(items: &[Address]) -> Vec<v1::Address> {
    convert_sequence(items)
}

pub fn address_array_from_production(items: &[v1::Address]) -> Vec<Address> {
    convert_sequence(items)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstanceGroupManagerActionsSummary {
    pub abandoning: i64,
    pub creating: i64,
    pub creating_without_retries: i64,
    pub deleting: i64,
    pub none: i64,
    pub recreating: i64,
    pub refreshing: i64,
    pub restarting: i64,
}

impl Convert<beta::InstanceGroupManagerActionsSummary> for InstanceGroupManagerActionsSummary {
    fn convert_into(&self, dst: &mut beta::InstanceGroupManagerActionsSummary) {
        dst.abandoning = self.abandoning;
        dst.creating = self.creating;
        dst.creating_without_retries = self.creating_without_retries;
        dst.deleting = self.deleting;
        dst.none = self.none;
        dst.recreating = self.recreating;
        dst.refreshing = self.refreshing;
        dst.restarting = self.restarting;
    }
}

impl Convert<InstanceGroupManagerActionsSummary> for beta::InstanceGroupManagerActionsSummary {
    fn convert_into(&self, dst: &mut InstanceGroupManagerActionsSummary) {
        dst.abandoning = self.abandoning;
        dst.creating = self.creating;
        dst.creating_without_retries = self.creating_without_retries;
        dst.deleting = self.deleting;
        dst.none = self.none;
        dst.recreating = self.recreating;
        dst.refreshing = self.refreshing;
        dst.restarting = self.restarting;
    }
}

impl Convert<v1::InstanceGroupManagerActionsSummary> for InstanceGroupManagerActionsSummary {
    fn convert_into(&self, dst: &mut v1::InstanceGroupManagerActionsSummary) {
        dst.abandoning = self.abandoning;
        dst.creating = self.creating;
        dst.creating_without_retries = self.creating_without_retries;
        dst.deleting = self.deleting;
        dst.none = self.none;
        dst.recreating = self.recreating;
        dst.refreshing = self.refreshing;
        dst.restarting = self.restarting;
    }
}

impl Convert<InstanceGroupManagerActionsSummary> for v1::InstanceGroupManagerActionsSummary {
    fn convert_into(&self, dst: &mut InstanceGroupManagerActionsSummary) {
        dst.abandoning = self.abandoning;
        dst.creating = self.creating;
        dst.creating_without_retries = self.creating_without_retries;
        dst.deleting = self.deleting;
        dst.none = self.none;
        dst.recreating = self.recreating;
        dst.refreshing = self.refreshing;
        dst.restarting = self.restarting;
    }
}

impl InstanceGroupManagerActionsSummary {
    pub fn to_production(&self) -> v1::InstanceGroupManagerActionsSummary {
        convert_to(self)
    }

    pub fn from_production(src: &v1::InstanceGroupManagerActionsSummary) -> Self {
        convert_to(src)
    }
}

pub fn instance_group_manager_actions_summary_array_to_production(
    items: &[InstanceGroupManagerActionsSummary],
) -> Vec<v1::InstanceGroupManagerActionsSummary> {
    convert_sequence(items)
}

pub fn instance_group_manager_actions_summary_array_from_production(
    items: &[v1::InstanceGroupManagerActionsSummary],
) -> Vec<InstanceGroupManagerActionsSummary> {
    convert_sequence(items)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstanceGroupManagerAutoHealingPolicy {
    pub health_check: String,
    pub initial_delay_sec: i64,
}

impl Convert<beta::InstanceGroupManagerAutoHealingPolicy>
    for InstanceGroupManagerAutoHealingPolicy
{
    fn convert_into(&self, dst: &mut beta::InstanceGroupManagerAutoHealingPolicy) {
        dst.health_check = self.health_check.clone();
        dst.initial_delay_sec = self.initial_delay_sec;
    }
}

impl Convert<InstanceGroupManagerAutoHealingPolicy>
    for beta::InstanceGroupManagerAutoHealingPolicy
{
    fn convert_into(&self, dst: &mut InstanceGroupManagerAutoHealingPolicy) {
        dst.health_check = self.health_check.clone();
        dst.initial_delay_sec = self.initial_delay_sec;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstanceGroupManager {
    pub id: u64,
    pub creation_timestamp: String,
    pub name: String,
    pub description: String,
    pub zone: String,
    pub base_instance_name: String,
    pub instance_template: String,
    pub instance_group: String,
    pub target_size: i64,
    pub target_pools: Vec<String>,
    pub named_ports: Vec<NamedPort>,
    pub current_actions: Option<InstanceGroupManagerActionsSummary>,
    pub fingerprint: String,
    pub self_link: String,
    pub kind: String,
    pub auto_healing_policies: Vec<InstanceGroupManagerAutoHealingPolicy>,
}

impl Convert<beta::InstanceGroupManager> for InstanceGroupManager {
    fn convert_into(&self, dst: &mut beta::InstanceGroupManager) {
        dst.id = self.id;
        dst.creation_timestamp = self.creation_timestamp.clone();
        dst.name = self.name.clone();
        dst.description = self.description.clone();
        dst.zone = self.zone.clone();
        dst.base_instance_name = self.base_instance_name.clone();
        dst.instance_template = self.instance_template.clone();
        dst.instance_group = self.instance_group.clone();
        dst.target_size = self.target_size;
        dst.target_pools = self.target_pools.clone();
        dst.named_ports = convert_sequence(&self.named_ports);
        dst.current_actions = convert_optional(&self.current_actions);
        dst.fingerprint = self.fingerprint.clone();
        dst.self_link = self.self_link.clone();
        dst.kind = self.kind.clone();
        dst.auto_healing_policies = convert_sequence(&self.auto_healing_policies);
    }
}

impl Convert<InstanceGroupManager> for beta::InstanceGroupManager {
    fn convert_into(&self, dst: &mut InstanceGroupManager) {
        dst.id = self.id;
        dst.creation_timestamp = self.creation_timestamp.clone();
        dst.name = self.name.clone();
        dst.description = self.description.clone();
        dst.zone = self.zone.clone();
        dst.base_instance_name = self.base_instance_name.clone();
        dst.instance_template = self.instance_template.clone();
        dst.instance_group = self.instance_group.clone();
        dst.target_size = self.target_size;
        dst.target_pools = self.target_pools.clone();
        dst.named_ports = convert_sequence(&self.named_ports);
        dst.current_actions = convert_optional(&self.current_actions);
        dst.fingerprint = self.fingerprint.clone();
        dst.self_link = self.self_link.clone();
        dst.kind = self.kind.clone();
        dst.auto_healing_policies = convert_sequence(&self.auto_healing_policies);
    }
}

impl Convert<v1::InstanceGroupManager> for InstanceGroupManager {
    fn convert_into(&self, dst: &mut v1::InstanceGroupManager) {
        dst.id = self.id;
        dst.creation_timestamp = self.creation_timestamp.clone();
        dst.name = self.name.clone();
        dst.description = self.description.clone();
        dst.zone = self.zone.clone();
        dst.base_instance_name = self.base_instance_name.clone();
        dst.instance_template = self.instance_template.clone();
        dst.instance_group = self.instance_group.clone();
        dst.target_size = self.target_size;
        dst.target_pools = self.target_pools.clone();
        dst.named_ports = convert_sequence(&self.named_ports);
        dst.current_actions = convert_optional(&self.current_actions);
        dst.fingerprint = self.fingerprint.clone();
        dst.self_link = self.self_link.clone();
        dst.kind = self.kind.clone();
    }
}

impl Convert<InstanceGroupManager> for v1::InstanceGroupManager {
    fn convert_into(&self, dst: &mut InstanceGroupManager) {
        dst.id = self.id;
        dst.creation_timestamp = self.creation_timestamp.clone();
        dst.name = self.name.clone();
        dst.description = self.description.clone();
        dst.zone = self.zone.clone();
        dst.base_instance_name = self.base_instance_name.clone();
        dst.instance_template = self.instance_template.clone();
        dst.instance_group = self.instance_group.clone();
        dst.target_size = self.target_size;
        dst.target_pools = self.target_pools.clone();
        dst.named_ports = convert_sequence(&self.named_ports);
        dst.current_actions = convert_optional(&self.current_actions);
        dst.fingerprint = self.fingerprint.clone();
        dst.self_link = self.self_link.clone();
        dst.kind = self.kind.clone();
    }
}

impl InstanceGroupManager {
    pub fn to_production(&self) -> v1::InstanceGroupManager {
        convert_to(self)
    }

    pub fn from_production(src: &v1::InstanceGroupManager) -> Self {
        convert_to(src)
    }
}

pub fn instance_group_manager_array_to_production(
    items: &[InstanceGroupManager],
) -> Vec<v1::InstanceGroupManager> {
    convert_sequence(items)
}

pub fn instance_group_manager_array_from_production(
    items: &[v1::InstanceGroupManager],
) -> Vec<InstanceGroupManager> {
    convert_sequence(items)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstanceGroup {
    pub id: u64,
    pub creation_timestamp: String,
    pub name: String,
    pub description: String,
    pub zone: String,
    pub network: String,
    pub size: i64,
    pub named_ports: Vec<NamedPort>,
    pub fingerprint: String,
    pub self_link: String,
    pub kind: String,
}

impl Convert<beta::InstanceGroup> for InstanceGroup {
    fn convert_into(&self, dst: &mut beta::InstanceGroup) {
        dst.id = self.id;
        dst.creation_timestamp = self.creation_timestamp.clone();
        dst.name = self.name.clone();
        dst.description = self.description.clone();
        dst.zone = self.zone.clone();
        dst.network = self.network.clone();
        dst.size = self.size;
        dst.named_ports = convert_sequence(&self.named_ports);
        dst.fingerprint = self.fingerprint.clone();
        dst.self_link = self.self_link.clone();
        dst.kind = self.kind.clone();
    }
}

impl Convert<InstanceGroup> for beta::InstanceGroup {
    fn convert_into(&self, dst: &mut InstanceGroup) {
        dst.id = self.id;
        dst.creation_timestamp = self.creation_timestamp.clone();
        dst.name = self.name.clone();
        dst.description = self.description.clone();
        dst.zone = self.zone.clone();
        dst.network = self.network.clone();
        dst.size = self.size;
        dst.named_ports = convert_sequence(&self.named_ports);
        dst.fingerprint = self.fingerprint.clone();
        dst.self_link = self.self_link.clone();
        dst.kind = self.kind.clone();
    }
}

impl Convert<v1::InstanceGroup> for InstanceGroup {
    fn convert_into(&self, dst: &mut v1::InstanceGroup) {
        dst.id = self.id;
        dst.creation_timestamp = self.creation_timestamp.clone();
        dst.name = self.name.clone();
        dst.description = self.description.clone();
        dst.zone = self.zone.clone();
        dst.network = self.network.clone();
        dst.size = self.size;
        dst.named_ports = convert_sequence(&self.named_ports);
        dst.fingerprint = self.fingerprint.clone();
        dst.self_link = self.self_link.clone();
        dst.kind = self.kind.clone();
    }
}

impl Convert<InstanceGroup> for v1::InstanceGroup {
    fn convert_into(&self, dst: &mut InstanceGroup) {
        dst.id = self.id;
        dst.creation_timestamp = self.creation_timestamp.clone();
        dst.name = self.name.clone();
        dst.description = self.description.clone();
        dst.zone = self.zone.clone();
        dst.network = self.network.clone();
        dst.size = self.size;
        dst.named_ports = convert_sequence(&self.named_ports);
        dst.fingerprint = self.fingerprint.clone();
        dst.self_link = self.self_link.clone();
        dst.kind = self.kind.clone();
    }
}

impl InstanceGroup {
    pub fn to_production(&self) -> v1::InstanceGroup {
        convert_to(self)
    }

    pub fn from_production(src: &v1::InstanceGroup) -> Self {
        convert_to(src)
    }
}

pub fn instance_group_array_to_production(items: &[InstanceGroup]) -> Vec<v1::InstanceGroup> {
    convert_sequence(items)
}

pub fn instance_group_array_from_production(items: &[v1::InstanceGroup]) -> Vec<InstanceGroup> {
    convert_sequence(items)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationErrorErrors {
    pub code: String,
    pub location: String,
    pub message: String,
}

impl Convert<beta::OperationErrorErrors> for OperationErrorErrors {
    fn convert_into(&self, dst: &mut beta::OperationErrorErrors) {
        dst.code = self.code.clone();
        dst.location = self.location.clone();
        dst.message = self.message.clone();
    }
}

impl Convert<OperationErrorErrors> for beta::OperationErrorErrors {
    fn convert_into(&self, dst: &mut OperationErrorErrors) {
        dst.code = self.code.clone();
        dst.location = self.location.clone();
        dst.message = self.message.clone();
    }
}

impl Convert<v1::OperationErrorErrors> for OperationErrorErrors {
    fn convert_into(&self, dst: &mut v1::OperationErrorErrors) {
        dst.code = self.code.clone();
        dst.location = self.location.clone();
        dst.message = self.message.clone();
    }
}

impl Convert<OperationErrorErrors> for v1::OperationErrorErrors {
    fn convert_into(&self, dst: &mut OperationErrorErrors) {
        dst.code = self.code.clone();
        dst.location = self.location.clone();
        dst.message = self.message.clone();
    }
}

impl OperationErrorErrors {
    pub fn to_production(&self) -> v1::OperationErrorErrors {
        convert_to(self)
    }

    pub fn from_production(src: &v1::OperationErrorErrors) -> Self {
        convert_to(src)
    }
}

pub fn operation_error_errors_array_to_production(
    items: &[OperationErrorErrors],
) -> Vec<v1::OperationErrorErrors> {
    convert_sequence(items)
}

pub fn operation_error_errors_array_from_production(
    items: &[v1::OperationErrorErrors],
) -> Vec<OperationErrorErrors> {
    convert_sequence(items)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationError {
    pub errors: Vec<OperationErrorErrors>,
}

impl Convert<beta::OperationError> for OperationError {
    fn convert_into(&self, dst: &mut beta::OperationError) {
        dst.errors = convert_sequence(&self.errors);
    }
}

impl Convert<OperationError> for beta::OperationError {
    fn convert_into(&self, dst: &mut OperationError) {
        dst.errors = convert_sequence(&self.errors);
    }
}

impl Convert<v1::OperationError> for OperationError {
    fn convert_into(&self, dst: &mut v1::OperationError) {
        dst.errors = convert_sequence(&self.errors);
    }
}

impl Convert<OperationError> for v1::OperationError {
    fn convert_into(&self, dst: &mut OperationError) {
        dst.errors = convert_sequence(&self.errors);
    }
}

impl OperationError {
    pub fn to_production(&self) -> v1::OperationError {
        convert_to(self)
    }

    pub fn from_production(src: &v1::OperationError) -> Self {
        convert_to(src)
    }
}

pub fn operation_error_array_to_production(items: &[OperationError]) -> Vec<v1::OperationError> {
    convert_sequence(items)
}

pub fn operation_error_array_from_production(items: &[v1::OperationError]) -> Vec<OperationError> {
    convert_sequence(items)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationWarningsData {
    pub key: String,
    pub value: String,
}

impl Convert<beta::OperationWarningsData> for OperationWarningsData {
    fn convert_into(&self, dst: &mut beta::OperationWarningsData) {
        dst.key = self.key.clone();
        dst.value = self.value.clone();
    }
}

impl Convert<OperationWarningsData> for beta::OperationWarningsData {
    fn convert_into(&self, dst: &mut OperationWarningsData) {
        dst.key = self.key.clone();
        dst.value = self.value.clone();
    }
}

impl Convert<v1::OperationWarningsData> for OperationWarningsData {
    fn convert_into(&self, dst: &mut v1::OperationWarningsData) {
        dst.key = self.key.clone();
        dst.value = self.value.clone();
    }
}

impl Convert<OperationWarningsData> for v1::OperationWarningsData {
    fn convert_into(&self, dst: &mut OperationWarningsData) {
        dst.key = self.key.clone();
        dst.value = self.value.clone();
    }
}

impl OperationWarningsData {
    pub fn to_production(&self) -> v1::OperationWarningsData {
        convert_to(self)
    }

    pub fn from_production(src: &v1::OperationWarningsData) -> Self {
        convert_to(src)
    }
}

pub fn operation_warnings_data_array_to_production(
    items: &[OperationWarningsData],
) -> Vec<v1::OperationWarningsData> {
    convert_sequence(items)
}

pub fn operation_warnings_data_array_from_production(
    items: &[v1::OperationWarningsData],
) -> Vec<OperationWarningsData> {
    convert_sequence(items)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationWarnings {
    pub code: String,
    pub message: String,
    pub data: Vec<OperationWarningsData>,
}

impl Convert<beta::OperationWarnings> for OperationWarnings {
    fn convert_into(&self, dst: &mut beta::OperationWarnings) {
        dst.code = self.code.clone();
        dst.message = self.message.clone();
        dst.data = convert_sequence(&self.data);
    }
}

impl Convert<OperationWarnings> for beta::OperationWarnings {
    fn convert_into(&self, dst: &mut OperationWarnings) {
        dst.code = self.code.clone();
        dst.message = self.message.clone();
        dst.data = convert_sequence(&self.data);
    }
}

impl Convert<v1::OperationWarnings> for OperationWarnings {
    fn convert_into(&self, dst: &mut v1::OperationWarnings) {
        dst.code = self.code.clone();
        dst.message = self.message.clone();
        dst.data = convert_sequence(&self.data);
    }
}

impl Convert<OperationWarnings> for v1::OperationWarnings {
    fn convert_into(&self, dst: &mut OperationWarnings) {
        dst.code = self.code.clone();
        dst.message = self.message.clone();
        dst.data = convert_sequence(&self.data);
    }
}

impl OperationWarnings {
    pub fn to_production(&self) -> v1::OperationWarnings {
        convert_to(self)
    }

    pub fn from_production(src: &v1::OperationWarnings) -> Self {
        convert_to(src)
    }
}

pub fn operation_warnings_array_to_production(
    items: &[OperationWarnings],
) -> Vec<v1::OperationWarnings> {
    convert_sequence(items)
}

pub fn operation_warnings_array_from_production(
    items: &[v1::OperationWarnings],
) -> Vec<OperationWarnings> {
    convert_sequence(items)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Operation {
    pub id: u64,
    pub name: String,
    pub kind: String,
    pub zone: String,
    pub region: String,
    pub client_operation_id: String,
    pub operation_type: String,
    pub target_link: String,
    pub target_id: u64,
    pub status: String,
    pub status_message: String,
    pub user: String,
    pub progress: i64,
    pub insert_time: String,
    pub start_time: String,
    pub end_time: String,
    pub http_error_status_code: i64,
    pub http_error_message: String,
    pub self_link: String,
    pub description: String,
    pub error: Option<OperationError>,
    pub warnings: Vec<OperationWarnings>,
}

impl Convert<beta::Operation> for Operation {
    fn convert_into(&self, dst: &mut beta::Operation) {
        dst.id = self.id;
        dst.name = self.name.clone();
        dst.kind = self.kind.clone();
        dst.zone = self.zone.clone();
        dst.region = self.region.clone();
        dst.client_operation_id = self.client_operation_id.clone();
        dst.operation_type = self.operation_type.clone();
        dst.target_link = self.target_link.clone();
        dst.target_id = self.target_id;
        dst.status = self.status.clone();
        dst.status_message = self.status_message.clone();
        dst.user = self.user.clone();
        dst.progress = self.progress;
        dst.insert_time = self.insert_time.clone();
        dst.start_time = self.start_time.clone();
        dst.end_time = self.end_time.clone();
        dst.http_error_status_code = self.http_error_status_code;
        dst.http_error_message = self.http_error_message.clone();
        dst.self_link = self.self_link.clone();
        dst.description = self.description.clone();
        dst.error = convert_optional(&self.error);
        dst.warnings = convert_sequence(&self.warnings);
    }
}

impl Convert<Operation> for beta::Operation {
    fn convert_into(&self, dst: &mut Operation) {
        dst.id = self.id;
        dst.name = self.name.clone();
        dst.kind = self.kind.clone();
        dst.zone = self.zone.clone();
        dst.region = self.region.clone();
        dst.client_operation_id = self.client_operation_id.clone();
        dst.operation_type = self.operation_type.clone();
        dst.target_link = self.target_link.clone();
        dst.target_id = self.target_id;
        dst.status = self.status.clone();
        dst.status_message = self.status_message.clone();
        dst.user = self.user.clone();
        dst.progress = self.progress;
        dst.insert_time = self.insert_time.clone();
        dst.start_time = self.start_time.clone();
        dst.end_time = self.end_time.clone();
        dst.http_error_status_code = self.http_error_status_code;
        dst.http_error_message = self.http_error_message.clone();
        dst.self_link = self.self_link.clone();
        dst.description = self.description.clone();
        dst.error = convert_optional(&self.error);
        dst.warnings = convert_sequence(&self.warnings);
    }
}

impl Convert<v1::Operation> for Operation {
    fn convert_into(&self, dst: &mut v1::Operation) {
        dst.id = self.id;
        dst.name = self.name.clone();
        dst.kind = self.kind.clone();
        dst.zone = self.zone.clone();
        dst.region = self.region.clone();
        dst.client_operation_id = self.client_operation_id.clone();
        dst.operation_type = self.operation_type.clone();
        dst.target_link = self.target_link.clone();
        dst.target_id = self.target_id;
        dst.status = self.status.clone();
        dst.status_message = self.status_message.clone();
        dst.user = self.user.clone();
        dst.progress = self.progress;
        dst.insert_time = self.insert_time.clone();
        dst.start_time = self.start_time.clone();
        dst.end_time = self.end_time.clone();
        dst.http_error_status_code = self.http_error_status_code;
        dst.http_error_message = self.http_error_message.clone();
        dst.self_link = self.self_link.clone();
        dst.description = self.description.clone();
        dst.error = convert_optional(&self.error);
        dst.warnings = convert_sequence(&self.warnings);
    }
}

impl Convert<Operation> for v1::Operation {
    fn convert_into(&self, dst: &mut Operation) {
        dst.id = self.id;
        dst.name = self.name.clone();
        dst.kind = self.kind.clone();
        dst.zone = self.zone.clone();
        dst.region = self.region.clone();
        dst.client_operation_id = self.client_operation_id.clone();
        dst.operation_type = self.operation_type.clone();
        dst.target_link = self.target_link.clone();
        dst.target_id = self.target_id;
        dst.status = self.status.clone();
        dst.status_message = self.status_message.clone();
        dst.user = self.user.clone();
        dst.progress = self.progress;
        dst.insert_time = self.insert_time.clone();
        dst.start_time = self.start_time.clone();
        dst.end_time = self.end_time.clone();
        dst.http_error_status_code = self.http_error_status_code;
        dst.http_error_message = self.http_error_message.clone();
        dst.self_link = self.self_link.clone();
        dst.description = self.description.clone();
        dst.error = convert_optional(&self.error);
        dst.warnings = convert_sequence(&self.warnings);
    }
}

impl Operation {
    pub fn to_production(&self) -> v1::Operation {
        convert_to(self)
    }

    pub fn from_production(src: &v1::Operation) -> Self {
        convert_to(src)
    }
}

pub fn operation_array_to_production(items: &[Operation]) -> Vec<v1::Operation> {
    convert_sequence(items)
}

pub fn operation_array_from_production(items: &[v1::Operation]) -> Vec<Operation> {
    convert_sequence(items)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SslPolicy {
    pub id: u64,
    pub creation_timestamp: String,
    pub name: String,
    pub description: String,
    pub profile: String,
    pub min_tls_version: String,
    pub custom_features: Vec<String>,
    pub enabled_features: Vec<String>,
    pub fingerprint: String,
    pub self_link: String,
    pub kind: String,
}

impl Convert<beta::SslPolicy> for SslPolicy {
    fn convert_into(&self, dst: &mut beta::SslPolicy) {
        dst.id = self.id;
        dst.creation_timestamp = self.creation_timestamp.clone();
        dst.name = self.name.clone();
        dst.description = self.description.clone();
        dst.profile = self.profile.clone();
        dst.min_tls_version = self.min_tls_version.clone();
        dst.custom_features = self.custom_features.clone();
        dst.enabled_features = self.enabled_features.clone();
        dst.fingerprint = self.fingerprint.clone();
        dst.self_link = self.self_link.clone();
        dst.kind = self.kind.clone();
    }
}

impl Convert<SslPolicy> for beta::SslPolicy {
    fn convert_into(&self, dst: &mut SslPolicy) {
        dst.id = self.id;
        dst.creation_timestamp = self.creation_timestamp.clone();
        dst.name = self.name.clone();
        dst.description = self.description.clone();
        dst.profile = self.profile.clone();
        dst.min_tls_version = self.min_tls_version.clone();
        dst.custom_features = self.custom_features.clone();
        dst.enabled_features = self.enabled_features.clone();
        dst.fingerprint = self.fingerprint.clone();
        dst.self_link = self.self_link.clone();
        dst.kind = self.kind.clone();
    }
}
