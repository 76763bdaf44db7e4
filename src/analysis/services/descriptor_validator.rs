use super::CoordinateExtractor;
use crate::analysis::domain::ProjectDescriptor;
use crate::shared::error::AnalyzerError;
use crate::shared::Result;
use std::path::Path;

/// DescriptorValidator checks the mandatory coordinate fields of a descriptor
pub struct DescriptorValidator;

impl DescriptorValidator {
    /// # Errors
    /// `DescriptorValidationError` when no groupId can be derived (own or parent)
    /// or when artifactId is missing or blank
    pub fn validate(descriptor: &ProjectDescriptor, path: &Path) -> Result<()> {
        if CoordinateExtractor::effective_group_id(descriptor).is_none() {
            return Err(AnalyzerError::DescriptorValidationError {
                path: path.to_path_buf(),
                reason: "No groupId specified in pom.xml".to_string(),
            }
            .into());
        }

        let artifact_id = descriptor.artifact_id.as_deref().unwrap_or_default();
        if artifact_id.trim().is_empty() {
            return Err(AnalyzerError::DescriptorValidationError {
                path: path.to_path_buf(),
                reason: "No artifactId specified in pom.xml".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::domain::ParentReference;

    fn descriptor(group_id: Option<&str>, artifact_id: Option<&str>) -> ProjectDescriptor {
        ProjectDescriptor {
            group_id: group_id.map(str::to_string),
            artifact_id: artifact_id.map(str::to_string),
            ..ProjectDescriptor::default()
        }
    }

    #[test]
    fn test_valid_descriptor() {
        let result = DescriptorValidator::validate(
            &descriptor(Some("com.test"), Some("demo")),
            Path::new("pom.xml"),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_group_inherited_from_parent_is_valid() {
        let mut inherited = descriptor(None, Some("child"));
        inherited.parent = Some(ParentReference {
            group_id: Some("com.parent".to_string()),
            ..ParentReference::default()
        });
        assert!(DescriptorValidator::validate(&inherited, Path::new("pom.xml")).is_ok());
    }

    #[test]
    fn test_missing_group_id() {
        let err = DescriptorValidator::validate(&descriptor(None, Some("demo")), Path::new("pom.xml"))
            .unwrap_err();
        let analyzer_error = err.downcast_ref::<AnalyzerError>().unwrap();
        assert!(matches!(
            analyzer_error,
            AnalyzerError::DescriptorValidationError { .. }
        ));
        assert!(analyzer_error.to_string().contains("No groupId specified"));
    }

    #[test]
    fn test_blank_artifact_id() {
        let err = DescriptorValidator::validate(
            &descriptor(Some("com.test"), Some("   ")),
            Path::new("pom.xml"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("No artifactId specified"));
    }
}
