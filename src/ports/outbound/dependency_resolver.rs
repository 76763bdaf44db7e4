use crate::analysis::domain::{ProjectDescriptor, ResolvedNode};
use crate::shared::Result;

/// DependencyResolver port for transitive dependency resolution
///
/// The resolver owns version mediation and repository access. It returns a
/// graph rooted at the project itself; the root node carries no artifact.
pub trait DependencyResolver {
    /// Resolves the declared dependencies of `descriptor` transitively
    ///
    /// # Errors
    /// Returns an error if a dependency cannot be resolved. Resolution
    /// failures abort the analysis.
    fn resolve(&self, descriptor: &ProjectDescriptor) -> Result<ResolvedNode>;
}
