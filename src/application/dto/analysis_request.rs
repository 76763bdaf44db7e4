use std::path::PathBuf;

/// AnalysisRequest - Internal request DTO for the analysis use case
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Path to the project directory containing pom.xml
    pub project_path: PathBuf,
}

impl AnalysisRequest {
    pub fn new(project_path: impl Into<PathBuf>) -> Self {
        Self {
            project_path: project_path.into(),
        }
    }
}
