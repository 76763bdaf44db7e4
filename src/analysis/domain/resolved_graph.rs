use super::ArtifactCoordinate;

/// Coordinate and scope carried by every non-root node of a resolved graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    coordinate: ArtifactCoordinate,
    scope: String,
}

impl ResolvedArtifact {
    pub fn coordinate(&self) -> &ArtifactCoordinate {
        &self.coordinate
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }
}

/// Node of the transitively resolved dependency graph produced by a
/// [`DependencyResolver`](crate::ports::outbound::DependencyResolver).
///
/// The root carries no artifact. Leaves have an empty child list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNode {
    artifact: Option<ResolvedArtifact>,
    children: Vec<ResolvedNode>,
}

impl ResolvedNode {
    pub fn root(children: Vec<ResolvedNode>) -> Self {
        Self {
            artifact: None,
            children,
        }
    }

    pub fn dependency(
        coordinate: ArtifactCoordinate,
        scope: impl Into<String>,
        children: Vec<ResolvedNode>,
    ) -> Self {
        Self {
            artifact: Some(ResolvedArtifact {
                coordinate,
                scope: scope.into(),
            }),
            children,
        }
    }

    pub fn leaf(coordinate: ArtifactCoordinate, scope: impl Into<String>) -> Self {
        Self::dependency(coordinate, scope, Vec::new())
    }

    pub fn artifact(&self) -> Option<&ResolvedArtifact> {
        self.artifact.as_ref()
    }

    pub fn children(&self) -> &[ResolvedNode] {
        &self.children
    }
}
