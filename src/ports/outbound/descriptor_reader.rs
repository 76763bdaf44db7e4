use crate::analysis::domain::ProjectDescriptor;
use crate::shared::Result;
use std::path::Path;

/// DescriptorReader port for loading the build descriptor of a project
///
/// Implementations return a descriptor whose dependency coordinates are
/// already interpolated and whose mandatory fields are validated.
pub trait DescriptorReader {
    /// Reads the pom.xml from the specified project directory
    ///
    /// # Arguments
    /// * `project_path` - Path to the project directory containing pom.xml
    ///
    /// # Errors
    /// Returns an error if:
    /// - The project path is not an existing directory
    /// - pom.xml is missing, not a regular file, unreadable or malformed
    /// - No groupId can be derived or artifactId is blank
    fn read_descriptor(&self, project_path: &Path) -> Result<ProjectDescriptor>;
}
