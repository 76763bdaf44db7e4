use maven_analyzer::prelude::*;

/// Mock DependencyResolver returning a prepared graph
pub struct MockDependencyResolver {
    pub graph: ResolvedNode,
    pub should_fail: bool,
}

impl MockDependencyResolver {
    pub fn new(graph: ResolvedNode) -> Self {
        Self {
            graph,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            graph: ResolvedNode::root(Vec::new()),
            should_fail: true,
        }
    }
}

impl DependencyResolver for MockDependencyResolver {
    fn resolve(&self, _descriptor: &ProjectDescriptor) -> Result<ResolvedNode> {
        if self.should_fail {
            anyhow::bail!("Mock dependency collection failure");
        }
        Ok(self.graph.clone())
    }
}
