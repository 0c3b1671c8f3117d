//! Schema description of one API version's record types
//!
//! This stands in for runtime type reflection: each version's record types are
//! listed with their fields and the shape of each field, and the generators
//! work from that list.

use serde::{Deserialize, Serialize};

use crate::version::ApiVersion;
use crate::{Error, Result};

/// Shape of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Copied verbatim (strings, integers, booleans, lists of strings)
    Scalar,
    /// Optional reference to another record
    Optional,
    /// Ordered sequence of records
    Sequence,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    pub kind: FieldKind,
    /// Rust scalar type, or the qualified name of the referenced record
    pub ty: String,
}

impl FieldDef {
    pub fn is_complex(&self) -> bool {
        matches!(self.kind, FieldKind::Optional | FieldKind::Sequence)
    }

    /// Record type name with its module path stripped.
    pub fn pretty_type(&self) -> &str {
        pretty_type(&self.ty)
    }

    /// Type of this field in the generated canonical struct.
    pub fn extract_type(&self) -> String {
        match self.kind {
            FieldKind::Scalar => self.ty.clone(),
            FieldKind::Optional => format!("Option<{}>", self.pretty_type()),
            FieldKind::Sequence => format!("Vec<{}>", self.pretty_type()),
        }
    }

    /// Whether `other` can be assigned from this field without a mismatch.
    pub fn compatible_with(&self, other: &FieldDef) -> bool {
        if self.kind != other.kind {
            return false;
        }
        match self.kind {
            FieldKind::Scalar => self.ty == other.ty,
            FieldKind::Optional | FieldKind::Sequence => self.pretty_type() == other.pretty_type(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDef {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

impl TypeDef {
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// All record types of one API version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSchema {
    pub version: ApiVersion,
    pub types: Vec<TypeDef>,
}

impl ApiSchema {
    pub fn from_json(content: &str) -> Result<Self> {
        let schema: ApiSchema = serde_json::from_str(content)?;
        schema.validate()?;
        Ok(schema)
    }

    pub fn get(&self, name: &str) -> Option<&TypeDef> {
        self.types.iter().find(|t| t.name == name)
    }

    /// Every referenced record type must be declared, and names are unique.
    pub fn validate(&self) -> Result<()> {
        for (idx, def) in self.types.iter().enumerate() {
            if self.types[..idx].iter().any(|t| t.name == def.name) {
                return Err(Error::Schema(format!(
                    "{}: type {} declared twice",
                    self.version, def.name
                )));
            }
            for field in def.fields.iter().filter(|f| f.is_complex()) {
                if self.get(field.pretty_type()).is_none() {
                    return Err(Error::Schema(format!(
                        "{}: {}.{} references undeclared type {}",
                        self.version,
                        def.name,
                        field.name,
                        field.ty
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Strip every path component but the last: `compute::v1::NamedPort` -> `NamedPort`.
pub fn pretty_type(qualified: &str) -> &str {
    qualified.rsplit("::").next().unwrap_or(qualified)
}

/// Scalars that are `Copy` and assigned without `.clone()`.
pub fn is_copy_type(ty: &str) -> bool {
    matches!(ty, "bool" | "i32" | "i64" | "u32" | "u64" | "f32" | "f64")
}
