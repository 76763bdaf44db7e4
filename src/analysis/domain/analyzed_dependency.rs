use super::ArtifactCoordinate;

/// Materialized dependency in the output forest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedDependency {
    coordinate: ArtifactCoordinate,
    scope: String,
    digest: Option<String>,
    children: Vec<AnalyzedDependency>,
}

impl AnalyzedDependency {
    pub fn new(coordinate: ArtifactCoordinate, scope: impl Into<String>, digest: Option<String>) -> Self {
        Self {
            coordinate,
            scope: scope.into(),
            digest,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<AnalyzedDependency>) -> Self {
        self.children = children;
        self
    }

    pub fn coordinate(&self) -> &ArtifactCoordinate {
        &self.coordinate
    }

    pub fn group_id(&self) -> &str {
        self.coordinate.group_id()
    }

    pub fn artifact_id(&self) -> &str {
        self.coordinate.artifact_id()
    }

    pub fn version(&self) -> &str {
        self.coordinate.version()
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// SHA1 of the cached artifact, absent when it was not found locally
    pub fn digest(&self) -> Option<&str> {
        self.digest.as_deref()
    }

    pub fn children(&self) -> &[AnalyzedDependency] {
        &self.children
    }

    /// Counts every node of a forest, children included
    pub fn count_nodes(nodes: &[AnalyzedDependency]) -> usize {
        nodes
            .iter()
            .map(|node| 1 + Self::count_nodes(&node.children))
            .sum()
    }
}
