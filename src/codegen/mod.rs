//! Source generation
//!
//! - [`schema`] - per-version record descriptions
//! - [`model`] - canonical record types and their conversions
//! - [`service`] - per-resource dispatcher methods
//! - [`registry`] - embedded schemas and resource descriptors
//!
//! The output of both generators is checked into `src/shared/generated.rs` and
//! `src/multiversion/generated.rs`; [`emit`] rewrites them in place. The text is
//! laid out the way rustfmt would lay it out, so formatting the crate leaves it
//! untouched.

pub mod model;
pub mod registry;
pub mod schema;
pub mod service;
pub mod util;

use std::path::{Path, PathBuf};

use crate::version::{ApiVersion, ORDERED_VERSIONS};
use crate::{Error, Result};

pub use model::ModelGenerator;
pub use service::{ResourceDescriptor, ServiceGenerator};

/// Relative location of the generated canonical model.
pub const MODEL_FILE: &str = "shared/generated.rs";
/// Relative location of the generated dispatcher methods.
pub const SERVICE_FILE: &str = "multiversion/generated.rs";

/// Render the canonical model from the embedded schemas.
pub fn render_model() -> Result<String> {
    let source = registry::canonical_schema();
    let mut generator = ModelGenerator::new(source).production(ApiVersion::newest());
    for version in ORDERED_VERSIONS {
        let schema = registry::schema(version)
            .ok_or_else(|| Error::Schema(format!("no embedded schema for {}", version)))?;
        generator = generator.with_target(schema);
    }
    generator.render_module()
}

/// Render the dispatcher methods for every embedded descriptor.
pub fn render_service() -> Result<String> {
    ServiceGenerator::new(registry::descriptors()).render_module()
}

/// Outcome of writing one generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub path: PathBuf,
    pub updated: bool,
}

/// Write `contents` under `src_dir`, or with `check` only report whether it
/// would change.
pub fn emit(src_dir: &Path, relative: &str, contents: &str, check: bool) -> Result<Generated> {
    let path = src_dir.join(relative);
    let updated = if check {
        let current = std::fs::read_to_string(&path).unwrap_or_default();
        current.replace("\r\n", "\n") != contents
    } else {
        util::ensure_file_contents(&path, contents)?
    };
    Ok(Generated { path, updated })
}
