//! Version dispatch table
//!
//! Which versions serve which (resource, verb) pair, built once from the
//! resource descriptors.

use std::collections::BTreeMap;
use std::fmt;

use crate::codegen::ResourceDescriptor;
use crate::version::ApiVersion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verb {
    Insert,
    Get,
    Delete,
    Update,
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verb::Insert => "insert",
            Verb::Get => "get",
            Verb::Delete => "delete",
            Verb::Update => "update",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchTable {
    entries: BTreeMap<String, BTreeMap<Verb, Vec<ApiVersion>>>,
}

impl DispatchTable {
    pub fn from_descriptors<'a>(
        descriptors: impl IntoIterator<Item = &'a ResourceDescriptor>,
    ) -> Self {
        let mut entries = BTreeMap::new();
        for desc in descriptors {
            let versions = desc.versions();
            let mut verbs = BTreeMap::new();
            verbs.insert(Verb::Insert, versions.clone());
            verbs.insert(Verb::Get, versions.clone());
            verbs.insert(Verb::Delete, versions);
            let updates = desc.update_versions();
            if !updates.is_empty() {
                verbs.insert(Verb::Update, updates);
            }
            entries.insert(desc.type_name.clone(), verbs);
        }
        Self { entries }
    }

    /// Versions serving `verb` on `resource`; empty when there are none.
    pub fn versions(&self, resource: &str, verb: Verb) -> &[ApiVersion] {
        self.entries
            .get(resource)
            .and_then(|verbs| verbs.get(&verb))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn supports(&self, resource: &str, verb: Verb, version: ApiVersion) -> bool {
        self.versions(resource, verb).contains(&version)
    }

    pub fn resources(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Every (resource, verb, versions) row, sorted by resource then verb.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Verb, &[ApiVersion])> {
        self.entries.iter().flat_map(|(resource, verbs)| {
            verbs
                .iter()
                .map(move |(verb, versions)| (resource.as_str(), *verb, versions.as_slice()))
        })
    }
}
