use super::ProjectDescriptor;
use crate::analysis::services::CoordinateExtractor;
use std::collections::{BTreeMap, HashMap};

/// Lookup table used for `${name}` substitution.
///
/// Declared descriptor properties take precedence; ambient system
/// properties only fill names the descriptor does not declare.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyTable {
    entries: HashMap<String, String>,
}

impl PropertyTable {
    pub fn new(declared: &BTreeMap<String, String>, ambient: &BTreeMap<String, String>) -> Self {
        let mut entries: HashMap<String, String> = declared
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        for (name, value) in ambient {
            entries
                .entry(name.clone())
                .or_insert_with(|| value.clone());
        }

        Self { entries }
    }

    /// Table for a descriptor: its declared properties, then the built-in
    /// `project.*` coordinate properties, then the ambient properties
    pub fn for_descriptor(descriptor: &ProjectDescriptor, ambient: &BTreeMap<String, String>) -> Self {
        let mut builtins = BTreeMap::new();
        let mut builtin = |name: &str, value: Option<&str>| {
            if let Some(value) = value {
                builtins.insert(name.to_string(), value.to_string());
            }
        };
        builtin("project.groupId", CoordinateExtractor::effective_group_id(descriptor));
        builtin("project.artifactId", descriptor.artifact_id.as_deref());
        builtin("project.version", CoordinateExtractor::effective_version(descriptor));
        if let Some(parent) = &descriptor.parent {
            builtin("project.parent.groupId", parent.group_id.as_deref());
            builtin("project.parent.artifactId", parent.artifact_id.as_deref());
            builtin("project.parent.version", parent.version.as_deref());
        }

        let mut table = Self::new(&descriptor.properties, &builtins);
        for (name, value) in ambient {
            table
                .entries
                .entry(name.clone())
                .or_insert_with(|| value.clone());
        }
        table
    }

    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
