use crate::analysis::domain::AnalysisResult;
use crate::shared::Result;

/// ResultFormatter port for rendering an analysis result
pub trait ResultFormatter {
    /// Formats the analysis result as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, result: &AnalysisResult) -> Result<String>;
}
