use crate::analysis::domain::{AnalysisResult, AnalyzedDependency};
use crate::ports::outbound::ResultFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisDocument<'a> {
    project_path: &'a str,
    project_group_id: &'a str,
    project_artifact_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    project_version: Option<&'a str>,
    dependencies: Vec<DependencyEntry<'a>>,
    total_dependencies: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DependencyEntry<'a> {
    group_id: &'a str,
    artifact_id: &'a str,
    version: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha1: Option<&'a str>,
    scope: &'a str,
    children: Vec<DependencyEntry<'a>>,
}

impl<'a> From<&'a AnalyzedDependency> for DependencyEntry<'a> {
    fn from(dependency: &'a AnalyzedDependency) -> Self {
        Self {
            group_id: dependency.group_id(),
            artifact_id: dependency.artifact_id(),
            version: dependency.version(),
            sha1: dependency.digest(),
            scope: dependency.scope(),
            children: dependency.children().iter().map(Self::from).collect(),
        }
    }
}

/// JsonFormatter adapter rendering the analysis as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultFormatter for JsonFormatter {
    fn format(&self, result: &AnalysisResult) -> Result<String> {
        let coordinate = result.coordinate();
        let document = AnalysisDocument {
            project_path: result.project_path(),
            project_group_id: coordinate.group_id(),
            project_artifact_id: coordinate.artifact_id(),
            project_version: coordinate.version(),
            dependencies: result.dependencies().iter().map(DependencyEntry::from).collect(),
            total_dependencies: result.total_dependencies(),
        };

        serde_json::to_string_pretty(&document).map_err(Into::into)
    }
}
