use crate::analysis::domain::{
    AnalysisResult, ProjectCoordinate, ProjectDescriptor, DESCRIPTOR_FILE_NAME,
};
use crate::analysis::services::{
    CoordinateExtractor, DependencyGraphMaterializer, LocalArtifactLocator,
};
use crate::application::dto::AnalysisRequest;
use crate::ports::outbound::{
    ArtifactFingerprinter, DependencyResolver, DescriptorReader, ProgressReporter,
};
use crate::shared::error::AnalyzerError;
use crate::shared::security::normalize_project_path;
use crate::shared::Result;
use std::path::Path;

/// AnalyzeProjectUseCase - Core use case for dependency analysis
///
/// This use case orchestrates the analysis workflow using
/// generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `DR` - DescriptorReader implementation
/// * `RES` - DependencyResolver implementation
/// * `FP` - ArtifactFingerprinter implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeProjectUseCase<DR, RES, FP, PR> {
    descriptor_reader: DR,
    dependency_resolver: RES,
    fingerprinter: FP,
    progress_reporter: PR,
    locator: LocalArtifactLocator,
}

impl<DR, RES, FP, PR> AnalyzeProjectUseCase<DR, RES, FP, PR>
where
    DR: DescriptorReader,
    RES: DependencyResolver,
    FP: ArtifactFingerprinter,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeProjectUseCase with injected dependencies
    pub fn new(
        descriptor_reader: DR,
        dependency_resolver: RES,
        fingerprinter: FP,
        progress_reporter: PR,
        locator: LocalArtifactLocator,
    ) -> Self {
        Self {
            descriptor_reader,
            dependency_resolver,
            fingerprinter,
            progress_reporter,
            locator,
        }
    }

    /// Executes the analysis use case
    ///
    /// # Returns
    /// AnalysisResult holding the project coordinate and the deduplicated
    /// dependency forest
    ///
    /// # Errors
    /// Descriptor and resolution failures abort the analysis. Artifacts
    /// missing from the local repository never do.
    pub fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResult> {
        // Step 1: Validate and normalize the project path
        let project_path = normalize_project_path(&request.project_path)?;

        // Step 2: Read, interpolate and validate pom.xml
        let descriptor = self.read_and_report_descriptor(&project_path)?;

        // Step 3: Effective project coordinate (parent fallback)
        let coordinate = Self::extract_coordinate(&descriptor, &project_path)?;

        // Step 4: Transitive resolution
        self.progress_reporter.report(&format!(
            "🔍 Resolving dependencies of {} ...",
            coordinate
        ));
        let graph = self
            .dependency_resolver
            .resolve(&descriptor)
            .map_err(|e| Self::as_resolution_error(e, &coordinate))?;

        // Step 5: Materialize the forest and fingerprint each artifact
        let forest = DependencyGraphMaterializer::new(
            &self.locator,
            &self.fingerprinter,
            &self.progress_reporter,
        )
        .materialize(&graph);

        self.progress_reporter.report_completion(&format!(
            "✅ Analyzed {} dependency(ies)",
            forest.total_count
        ));

        // Step 6: Build the result
        Ok(
            AnalysisResult::new(project_path.display().to_string(), coordinate)
                .with_dependencies(forest.dependencies),
        )
    }

    fn read_and_report_descriptor(&self, project_path: &Path) -> Result<ProjectDescriptor> {
        self.progress_reporter.report(&format!(
            "📖 Loading {} from: {}",
            DESCRIPTOR_FILE_NAME,
            project_path.display()
        ));

        let descriptor = self.descriptor_reader.read_descriptor(project_path)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} declared dependency(ies)",
            descriptor.dependencies.len()
        ));

        Ok(descriptor)
    }

    fn extract_coordinate(
        descriptor: &ProjectDescriptor,
        project_path: &Path,
    ) -> Result<ProjectCoordinate> {
        CoordinateExtractor::project_coordinate(descriptor).ok_or_else(|| {
            AnalyzerError::DescriptorValidationError {
                path: project_path.join(DESCRIPTOR_FILE_NAME),
                reason: "No groupId or artifactId specified in pom.xml".to_string(),
            }
            .into()
        })
    }

    /// Resolver failures that are not already categorized count as
    /// resolution errors
    fn as_resolution_error(error: anyhow::Error, coordinate: &ProjectCoordinate) -> anyhow::Error {
        if error.downcast_ref::<AnalyzerError>().is_some() {
            return error;
        }
        AnalyzerError::ResolutionError {
            coordinate: coordinate.to_string(),
            details: format!("{:#}", error),
        }
        .into()
    }
}

#[cfg(test)]
mod tests;
