use crate::analysis::domain::{DependencyDeclaration, ProjectDescriptor, PropertyTable};

const PLACEHOLDER_PREFIX: &str = "${";
const PLACEHOLDER_SUFFIX: char = '}';

/// PropertyInterpolator service for `${name}` placeholder substitution
///
/// Substitution is a single, non-recursive pass: substituted values are
/// never rescanned, and placeholders without a matching property are
/// kept verbatim.
pub struct PropertyInterpolator;

impl PropertyInterpolator {
    /// Substitutes every resolvable placeholder in `raw`
    pub fn interpolate(raw: &str, properties: &PropertyTable) -> String {
        Self::interpolate_tracked(raw, properties, &mut Vec::new())
    }

    /// Interpolates the coordinates of every dependency and managed dependency
    ///
    /// # Returns
    /// Names of the placeholders that could not be resolved, in first-seen order
    pub fn interpolate_descriptor(
        descriptor: &mut ProjectDescriptor,
        properties: &PropertyTable,
    ) -> Vec<String> {
        let mut unresolved = Vec::new();
        for dependency in descriptor
            .dependencies
            .iter_mut()
            .chain(descriptor.dependency_management.iter_mut())
        {
            Self::interpolate_dependency(dependency, properties, &mut unresolved);
        }
        unresolved
    }

    fn interpolate_dependency(
        dependency: &mut DependencyDeclaration,
        properties: &PropertyTable,
        unresolved: &mut Vec<String>,
    ) {
        if let Some(version) = dependency.version.as_deref() {
            dependency.version = Some(Self::interpolate_tracked(version, properties, unresolved));
        }
        dependency.group_id = Self::interpolate_tracked(&dependency.group_id, properties, unresolved);
        dependency.artifact_id =
            Self::interpolate_tracked(&dependency.artifact_id, properties, unresolved);
    }

    fn interpolate_tracked(
        raw: &str,
        properties: &PropertyTable,
        unresolved: &mut Vec<String>,
    ) -> String {
        if !raw.contains(PLACEHOLDER_PREFIX) {
            return raw.to_string();
        }

        let mut output = String::with_capacity(raw.len());
        let mut rest = raw;

        while let Some(start) = rest.find(PLACEHOLDER_PREFIX) {
            let after_prefix = &rest[start + PLACEHOLDER_PREFIX.len()..];
            match after_prefix.find(PLACEHOLDER_SUFFIX) {
                Some(end) if end > 0 => {
                    let name = &after_prefix[..end];
                    output.push_str(&rest[..start]);
                    match properties.resolve(name) {
                        Some(value) => {
                            tracing::debug!(property = name, value, "Replaced placeholder");
                            output.push_str(value);
                        }
                        None => {
                            if !unresolved.iter().any(|known| known == name) {
                                unresolved.push(name.to_string());
                            }
                            output.push_str(PLACEHOLDER_PREFIX);
                            output.push_str(name);
                            output.push(PLACEHOLDER_SUFFIX);
                        }
                    }
                    rest = &after_prefix[end + 1..];
                }
                // `${}` or an unterminated `${`: not a placeholder
                _ => {
                    output.push_str(&rest[..start + PLACEHOLDER_PREFIX.len()]);
                    rest = after_prefix;
                }
            }
        }

        output.push_str(rest);
        output
    }
}
