//! Multiversion service generator
//!
//! Turns a [`ResourceDescriptor`] into the `insert_*`, `get_*`, `delete_*` and
//! (for resources with a full update tier) `update_*` methods of
//! `ComputeMultiversionService`, each a `match` over the versions the resource
//! is served on.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::codegen::util::{
    fn_signature, pluralize, to_lower_camel_case, to_lower_snake_case, to_upper_snake_case,
    GENERATED_HEADER,
};
use crate::gcp::client::Location;
use crate::version::{update_versions, versions_up_to, ApiVersion, UpdateTier, ORDERED_VERSIONS};
use crate::{Error, Result};

/// Generation-time description of one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub type_name: String,
    /// Record type on the wire, when it differs from `type_name`
    #[serde(default)]
    pub record: Option<String>,
    /// Collection name, when the default pluralization is wrong
    #[serde(default)]
    pub plural: Option<String>,
    /// REST collection segment, when it is not the lower camel plural
    #[serde(default)]
    pub rest_path: Option<String>,
    pub lowest_version: ApiVersion,
    #[serde(default)]
    pub update_types: Vec<UpdateTier>,
    /// Positional scoping parameters, e.g. `["zone"]`
    #[serde(default)]
    pub extra_params: Vec<String>,
}

impl ResourceDescriptor {
    pub fn record_type(&self) -> &str {
        self.record.as_deref().unwrap_or(&self.type_name)
    }

    pub fn plural_type(&self) -> String {
        self.plural
            .clone()
            .unwrap_or_else(|| pluralize(&self.type_name))
    }

    pub fn rest_path(&self) -> String {
        self.rest_path
            .clone()
            .unwrap_or_else(|| to_lower_camel_case(&self.plural_type()))
    }

    /// Name of the generated `Collection` constant
    pub fn collection_const(&self) -> String {
        to_upper_snake_case(&self.plural_type())
    }

    pub fn location(&self) -> Result<Location> {
        let params: Vec<&str> = self.extra_params.iter().map(String::as_str).collect();
        match params.as_slice() {
            [] => Ok(Location::Global),
            ["region"] => Ok(Location::Region),
            ["zone"] => Ok(Location::Zone),
            other => Err(Error::Schema(format!(
                "{}: unsupported scoping parameters {:?}",
                self.type_name, other
            ))),
        }
    }

    /// Versions that get insert, get and delete.
    pub fn versions(&self) -> Vec<ApiVersion> {
        versions_up_to(self.lowest_version)
    }

    /// Versions that get update; empty when no tier is full.
    pub fn update_versions(&self) -> Vec<ApiVersion> {
        update_versions(&self.update_types)
    }
}

/// Renders dispatcher methods for a set of descriptors.
pub struct ServiceGenerator<'a> {
    resources: Vec<&'a ResourceDescriptor>,
}

impl<'a> ServiceGenerator<'a> {
    pub fn new(resources: impl IntoIterator<Item = &'a ResourceDescriptor>) -> Self {
        Self {
            resources: resources.into_iter().collect(),
        }
    }

    /// Full module with header and imports.
    pub fn render_module(&self) -> Result<String> {
        let mut used: BTreeSet<ApiVersion> = BTreeSet::new();
        let mut needs_fallback = false;
        for resource in &self.resources {
            let versions = resource.versions();
            let updates = resource.update_versions();
            needs_fallback |= versions.len() < ORDERED_VERSIONS.len();
            needs_fallback |= !updates.is_empty() && updates.len() < ORDERED_VERSIONS.len();
            used.extend(versions);
            used.extend(updates);
        }

        let modules: Vec<&str> = used.iter().map(|v| v.wire_module()).collect();
        let compute_import = match modules.as_slice() {
            [single] => single.to_string(),
            _ => format!("{{{}}}", modules.join(", ")),
        };

        let mut out = String::new();
        out.push_str(GENERATED_HEADER);
        out.push_str("\n\n");
        out.push_str("use super::{ComputeMultiversionService, Verb};\n");
        out.push_str(&format!("use crate::compute::{};\n", compute_import));
        out.push_str("use crate::convert::convert_to;\n");
        out.push_str("use crate::gcp::client::{Collection, Location};\n");
        out.push_str("use crate::shared;\n");
        out.push_str("use crate::version::ApiVersion;\n");
        if needs_fallback {
            out.push_str("use crate::{Error, Result};\n");
        } else {
            out.push_str("use crate::Result;\n");
        }

        for resource in &self.resources {
            out.push('\n');
            out.push_str(&render_resource(resource)?);
        }
        Ok(out)
    }
}

/// Collection constant plus the impl block for one resource.
pub fn render_resource(resource: &ResourceDescriptor) -> Result<String> {
    let location = resource.location()?;
    let versions = resource.versions();
    let update_versions = resource.update_versions();
    tracing::debug!(
        "rendering {} for {:?}, update on {:?}",
        resource.type_name,
        versions,
        update_versions
    );

    let mut out = String::new();
    out.push_str(&format!(
        "pub const {}: Collection = Collection {{\n    plural: \"{}\",\n    path: \"{}\",\n    location: Location::{:?},\n}};\n\n",
        resource.collection_const(),
        resource.plural_type(),
        resource.rest_path(),
        location,
    ));

    let mut methods = vec![
        render_method(resource, MethodKind::Insert, &versions),
        render_method(resource, MethodKind::Get, &versions),
        render_method(resource, MethodKind::Delete, &versions),
    ];
    if !update_versions.is_empty() {
        methods.push(render_method(resource, MethodKind::Update, &update_versions));
    }

    out.push_str("impl ComputeMultiversionService {\n");
    out.push_str(&methods.join("\n"));
    out.push_str("}\n");
    Ok(out)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MethodKind {
    Insert,
    Get,
    Delete,
    Update,
}

impl MethodKind {
    fn prefix(self) -> &'static str {
        match self {
            MethodKind::Insert => "insert",
            MethodKind::Get => "get",
            MethodKind::Delete => "delete",
            MethodKind::Update => "update",
        }
    }

    fn verb(self) -> &'static str {
        match self {
            MethodKind::Insert => "Verb::Insert",
            MethodKind::Get => "Verb::Get",
            MethodKind::Delete => "Verb::Delete",
            MethodKind::Update => "Verb::Update",
        }
    }
}

fn render_method(resource: &ResourceDescriptor, kind: MethodKind, versions: &[ApiVersion]) -> String {
    let record = resource.record_type();

    let mut params = vec!["&self".to_string(), "project: &str".to_string()];
    params.extend(resource.extra_params.iter().map(|p| format!("{p}: &str")));
    match kind {
        MethodKind::Insert => params.push(format!("resource: &shared::{record}")),
        MethodKind::Get | MethodKind::Delete => params.push("name: &str".to_string()),
        MethodKind::Update => {
            params.push("name: &str".to_string());
            params.push(format!("resource: &shared::{record}"));
        }
    }
    params.push("version: ApiVersion".to_string());

    let returns = match kind {
        MethodKind::Get => format!("shared::{record}"),
        _ => "shared::Operation".to_string(),
    };

    let head = format!(
        "pub async fn {}_{}",
        kind.prefix(),
        to_lower_snake_case(&resource.type_name)
    );
    let mut out = fn_signature(4, &head, &params, &format!(" -> Result<{returns}> {{"));
    out.push_str(&format!(
        "        let client = self.client_for(\"{}\", {}, version)?;\n",
        resource.type_name,
        kind.verb()
    ));
    out.push_str(&format!(
        "        let path = {}.collection_path(&[{}])?;\n",
        resource.collection_const(),
        resource.extra_params.join(", ")
    ));
    out.push_str("        match version {\n");

    for version in versions {
        let module = version.wire_module();
        out.push_str(&format!("            {} => {{\n", version.variant_path()));
        match kind {
            MethodKind::Insert => {
                out.push_str(&format!(
                    "                let body: {module}::{record} = convert_to(resource);\n"
                ));
                out.push_str(&format!(
                    "                let op: {module}::Operation = client.insert(project, &path, &body).await?;\n"
                ));
                out.push_str("                Ok(convert_to(&op))\n");
            }
            MethodKind::Get => {
                out.push_str(&format!(
                    "                let wire: {module}::{record} = client.get(project, &path, name).await?;\n"
                ));
                out.push_str("                Ok(convert_to(&wire))\n");
            }
            MethodKind::Delete => {
                out.push_str(&format!(
                    "                let op: {module}::Operation = client.delete(project, &path, name).await?;\n"
                ));
                out.push_str("                Ok(convert_to(&op))\n");
            }
            MethodKind::Update => {
                out.push_str(&format!(
                    "                let body: {module}::{record} = convert_to(resource);\n"
                ));
                out.push_str(&format!(
                    "                let op: {module}::Operation = client.update(project, &path, name, &body).await?;\n"
                ));
                out.push_str("                Ok(convert_to(&op))\n");
            }
        }
        out.push_str("            }\n");
    }

    if versions.len() < ORDERED_VERSIONS.len() {
        out.push_str(&format!(
            "            _ => Err(Error::unknown_version(\"{}\", version)),\n",
            resource.type_name
        ));
    }
    out.push_str("        }\n");
    out.push_str("    }\n");
    out
}
