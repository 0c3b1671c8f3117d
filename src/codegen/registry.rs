//! Schema Registry - Load record schemas and resource descriptors from JSON
//!
//! The schemas and descriptors are embedded at compile time, parsed once on
//! first access and shared by the generators and the runtime dispatch table.

use std::sync::OnceLock;

use crate::codegen::schema::ApiSchema;
use crate::codegen::service::ResourceDescriptor;
use crate::version::{ApiVersion, ORDERED_VERSIONS};

/// Embedded per-version schemas (compiled into the binary)
const SCHEMA_FILES: &[&str] = &[
    include_str!("../schemas/compute_beta.json"),
    include_str!("../schemas/compute_v1.json"),
];

const RESOURCE_FILE: &str = include_str!("../schemas/resources.json");

static SCHEMAS: OnceLock<Vec<ApiSchema>> = OnceLock::new();
static DESCRIPTORS: OnceLock<Vec<ResourceDescriptor>> = OnceLock::new();

/// Every embedded schema, in version order.
pub fn schemas() -> &'static [ApiSchema] {
    SCHEMAS.get_or_init(|| {
        let mut schemas: Vec<ApiSchema> = SCHEMA_FILES
            .iter()
            .map(|content| {
                ApiSchema::from_json(content)
                    .unwrap_or_else(|e| panic!("Failed to parse embedded schema JSON: {}", e))
            })
            .collect();
        schemas.sort_by_key(|s| s.version);
        schemas
    })
}

pub fn schema(version: ApiVersion) -> Option<&'static ApiSchema> {
    schemas().iter().find(|s| s.version == version)
}

/// Schema the canonical model is derived from: the oldest, widest version.
pub fn canonical_schema() -> &'static ApiSchema {
    schema(ORDERED_VERSIONS[0])
        .unwrap_or_else(|| panic!("No embedded schema for {}", ORDERED_VERSIONS[0]))
}

/// Every resource descriptor, in declaration order.
pub fn descriptors() -> &'static [ResourceDescriptor] {
    DESCRIPTORS.get_or_init(|| {
        serde_json::from_str(RESOURCE_FILE)
            .unwrap_or_else(|e| panic!("Failed to parse embedded resource JSON: {}", e))
    })
}

pub fn descriptor(type_name: &str) -> Option<&'static ResourceDescriptor> {
    descriptors().iter().find(|d| d.type_name == type_name)
}
