use super::LocalArtifactLocator;
use crate::analysis::domain::{AnalyzedDependency, DependencyKey, ResolvedNode};
use crate::ports::outbound::{ArtifactFingerprinter, ProgressReporter};
use std::collections::HashSet;

/// Output of one materialization pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedForest {
    pub dependencies: Vec<AnalyzedDependency>,
    pub total_count: usize,
}

/// DependencyGraphMaterializer turns a resolved graph into the output forest
///
/// Walks the graph depth-first in pre-order. The first node seen for a
/// `(groupId, artifactId, version, scope)` key is kept; every later node
/// with the same key is dropped together with its subtree.
pub struct DependencyGraphMaterializer<'a, F: ArtifactFingerprinter, P: ProgressReporter> {
    locator: &'a LocalArtifactLocator,
    fingerprinter: &'a F,
    progress_reporter: &'a P,
}

/// State owned by a single pass
struct WalkState {
    visited: HashSet<DependencyKey>,
    sequence: usize,
}

impl<'a, F: ArtifactFingerprinter, P: ProgressReporter> DependencyGraphMaterializer<'a, F, P> {
    pub fn new(
        locator: &'a LocalArtifactLocator,
        fingerprinter: &'a F,
        progress_reporter: &'a P,
    ) -> Self {
        Self {
            locator,
            fingerprinter,
            progress_reporter,
        }
    }

    pub fn materialize(&self, root: &ResolvedNode) -> MaterializedForest {
        let mut state = WalkState {
            visited: HashSet::new(),
            sequence: 0,
        };
        let dependencies = self.materialize_children(root, &mut state);
        let total_count = AnalyzedDependency::count_nodes(&dependencies);

        MaterializedForest {
            dependencies,
            total_count,
        }
    }

    fn materialize_children(
        &self,
        node: &ResolvedNode,
        state: &mut WalkState,
    ) -> Vec<AnalyzedDependency> {
        let mut materialized = Vec::with_capacity(node.children().len());

        for child in node.children() {
            let Some(artifact) = child.artifact() else {
                continue;
            };

            let key = DependencyKey::new(artifact.coordinate(), artifact.scope());
            if !state.visited.insert(key) {
                tracing::debug!(
                    dependency = %artifact.coordinate(),
                    scope = artifact.scope(),
                    "Skipping duplicate dependency"
                );
                continue;
            }

            let artifact_path = self.locator.locate(artifact.coordinate());
            let digest = self.fingerprinter.fingerprint(&artifact_path);

            state.sequence += 1;
            self.progress_reporter.report_dependency(
                state.sequence,
                artifact.coordinate(),
                artifact.scope(),
                digest.is_some(),
            );

            let children = self.materialize_children(child, state);
            materialized.push(
                AnalyzedDependency::new(artifact.coordinate().clone(), artifact.scope(), digest)
                    .with_children(children),
            );
        }

        materialized
    }
}
