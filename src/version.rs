//! Compute API versions
//!
//! Versions form a closed, totally ordered set. A resource is served on every
//! version from the start of [`ORDERED_VERSIONS`] up to and including the
//! version it declares as its lowest.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Compute Engine API version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ApiVersion {
    #[serde(rename = "v0beta")]
    V0Beta,
    #[serde(rename = "v1")]
    V1,
}

/// Every version, in release order.
pub const ORDERED_VERSIONS: [ApiVersion; 2] = [ApiVersion::V0Beta, ApiVersion::V1];

impl ApiVersion {
    /// Name used by the generators and on the command line
    pub fn service_name(self) -> &'static str {
        match self {
            ApiVersion::V0Beta => "v0beta",
            ApiVersion::V1 => "v1",
        }
    }

    /// Path segment in `https://compute.googleapis.com/compute/{segment}/...`
    pub fn path_segment(self) -> &'static str {
        match self {
            ApiVersion::V0Beta => "beta",
            ApiVersion::V1 => "v1",
        }
    }

    /// Module holding this version's wire types (`crate::compute::<module>`)
    pub fn wire_module(self) -> &'static str {
        match self {
            ApiVersion::V0Beta => "beta",
            ApiVersion::V1 => "v1",
        }
    }

    /// Enum variant path, as emitted in generated match arms
    pub fn variant_path(self) -> &'static str {
        match self {
            ApiVersion::V0Beta => "ApiVersion::V0Beta",
            ApiVersion::V1 => "ApiVersion::V1",
        }
    }

    pub fn newest() -> Self {
        ORDERED_VERSIONS[ORDERED_VERSIONS.len() - 1]
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.service_name())
    }
}

impl FromStr for ApiVersion {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ORDERED_VERSIONS
            .iter()
            .copied()
            .find(|v| v.service_name() == s || v.path_segment() == s)
            .ok_or_else(|| crate::Error::Config(format!("unknown API version '{s}'")))
    }
}

/// Walk the ordered list from the start up to `lowest`, inclusive.
pub fn versions_up_to(lowest: ApiVersion) -> Vec<ApiVersion> {
    let mut versions = Vec::with_capacity(ORDERED_VERSIONS.len());
    for version in ORDERED_VERSIONS {
        versions.push(version);
        if version == lowest {
            break;
        }
    }
    versions
}

/// How much of a resource can be changed in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateKind {
    None,
    /// Only restart based or field specific setters
    Partial,
    Full,
}

/// The lowest version that offers a given update capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTier {
    pub lowest_version: ApiVersion,
    pub kind: UpdateKind,
}

/// Versions that get a generated `update_*` method.
///
/// Empty unless one of the tiers reaches [`UpdateKind::Full`]; the last full
/// tier wins when several are declared.
pub fn update_versions(tiers: &[UpdateTier]) -> Vec<ApiVersion> {
    tiers
        .iter()
        .rev()
        .find(|tier| tier.kind == UpdateKind::Full)
        .map(|tier| versions_up_to(tier.lowest_version))
        .unwrap_or_default()
}
