use super::{AnalyzedDependency, ProjectCoordinate};

/// AnalysisResult aggregate: the project and its materialized dependency forest.
///
/// `total_dependencies` is derived from the forest every time it is assigned
/// and cannot be set on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    project_path: String,
    coordinate: ProjectCoordinate,
    dependencies: Vec<AnalyzedDependency>,
    total_dependencies: usize,
}

impl AnalysisResult {
    pub fn new(project_path: impl Into<String>, coordinate: ProjectCoordinate) -> Self {
        Self {
            project_path: project_path.into(),
            coordinate,
            dependencies: Vec::new(),
            total_dependencies: 0,
        }
    }

    pub fn with_dependencies(mut self, dependencies: Vec<AnalyzedDependency>) -> Self {
        self.set_dependencies(dependencies);
        self
    }

    pub fn set_dependencies(&mut self, dependencies: Vec<AnalyzedDependency>) {
        self.total_dependencies = AnalyzedDependency::count_nodes(&dependencies);
        self.dependencies = dependencies;
    }

    pub fn project_path(&self) -> &str {
        &self.project_path
    }

    pub fn coordinate(&self) -> &ProjectCoordinate {
        &self.coordinate
    }

    pub fn dependencies(&self) -> &[AnalyzedDependency] {
        &self.dependencies
    }

    pub fn total_dependencies(&self) -> usize {
        self.total_dependencies
    }
}
