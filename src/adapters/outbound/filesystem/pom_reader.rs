use super::pom_xml::parse_descriptor;
use crate::analysis::domain::{ProjectDescriptor, PropertyTable, DESCRIPTOR_FILE_NAME};
use crate::analysis::services::{DescriptorValidator, PropertyInterpolator};
use crate::ports::outbound::DescriptorReader;
use crate::shared::error::AnalyzerError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_DESCRIPTOR_SIZE};
use crate::shared::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// PomReader adapter reading pom.xml from the file system
///
/// Dependency coordinates are interpolated against the descriptor's own
/// properties first and the ambient system properties second.
pub struct PomReader {
    system_properties: BTreeMap<String, String>,
}

impl PomReader {
    pub fn new(system_properties: BTreeMap<String, String>) -> Self {
        Self { system_properties }
    }

    fn validate_project_directory(project_path: &Path) -> Result<()> {
        let metadata = fs::symlink_metadata(project_path).map_err(|_| {
            AnalyzerError::InvalidProjectPath {
                path: project_path.to_path_buf(),
                reason: "Directory does not exist".to_string(),
            }
        })?;

        if metadata.is_symlink() {
            return Err(AnalyzerError::SecurityError {
                path: project_path.to_path_buf(),
                reason: "Project directory is a symbolic link".to_string(),
                hint: "Pass the real project directory instead of a link to it".to_string(),
            }
            .into());
        }

        if !metadata.is_dir() {
            return Err(AnalyzerError::InvalidProjectPath {
                path: project_path.to_path_buf(),
                reason: "Path is not a directory".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    fn safe_read_file(path: &Path) -> Result<String> {
        validate_regular_file(path, DESCRIPTOR_FILE_NAME)?;
        let metadata = fs::metadata(path)?;
        validate_file_size(metadata.len(), path, MAX_DESCRIPTOR_SIZE)?;
        Ok(fs::read_to_string(path)?)
    }
}

impl DescriptorReader for PomReader {
    fn read_descriptor(&self, project_path: &Path) -> Result<ProjectDescriptor> {
        Self::validate_project_directory(project_path)?;

        let pom_path = project_path.join(DESCRIPTOR_FILE_NAME);
        if !pom_path.exists() {
            return Err(AnalyzerError::DescriptorNotFound {
                path: pom_path,
                suggestion: format!(
                    "pom.xml does not exist in project directory \"{}\".\n   \
                     Please run in the root directory of a Maven project, or specify the correct path with the -d option.",
                    project_path.display()
                ),
            }
            .into());
        }

        let content = Self::safe_read_file(&pom_path).map_err(|e| AnalyzerError::DescriptorReadError {
            path: pom_path.clone(),
            details: e.to_string(),
        })?;

        let mut descriptor = parse_descriptor(&content).map_err(|e| {
            AnalyzerError::DescriptorReadError {
                path: pom_path.clone(),
                details: format!("{:#}", e),
            }
        })?;

        let properties = PropertyTable::for_descriptor(&descriptor, &self.system_properties);
        for name in PropertyInterpolator::interpolate_descriptor(&mut descriptor, &properties) {
            tracing::warn!("Property not found: ${{{}}}", name);
        }

        DescriptorValidator::validate(&descriptor, &pom_path)?;

        tracing::debug!(
            dependencies = descriptor.dependencies.len(),
            managed = descriptor.dependency_management.len(),
            properties = descriptor.properties.len(),
            "Successfully parsed POM"
        );

        Ok(descriptor)
    }
}
