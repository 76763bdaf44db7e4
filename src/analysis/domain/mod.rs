pub mod analysis_result;
pub mod analyzed_dependency;
pub mod coordinate;
pub mod descriptor;
pub mod property_table;
pub mod resolved_graph;

pub use analysis_result::AnalysisResult;
pub use analyzed_dependency::AnalyzedDependency;
pub use coordinate::{ArtifactCoordinate, DependencyKey, ProjectCoordinate};
pub use descriptor::{
    DependencyDeclaration, Exclusion, ParentReference, ProjectDescriptor, DESCRIPTOR_FILE_NAME,
};
pub use property_table::PropertyTable;
pub use resolved_graph::{ResolvedArtifact, ResolvedNode};
