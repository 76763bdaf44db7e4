use crate::analysis::domain::ArtifactCoordinate;

/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to stderr)
/// to provide user feedback during long-running operations.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports one materialized dependency
    ///
    /// # Arguments
    /// * `sequence` - 1-based position in materialization order
    /// * `coordinate` - Coordinate of the dependency
    /// * `scope` - Effective scope
    /// * `has_digest` - Whether the artifact was found in the local repository
    fn report_dependency(
        &self,
        sequence: usize,
        coordinate: &ArtifactCoordinate,
        scope: &str,
        has_digest: bool,
    );

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
