mod artifact_locator;
mod coordinate_extractor;
mod descriptor_validator;
mod graph_materializer;
mod interpolator;

pub use artifact_locator::LocalArtifactLocator;
pub use coordinate_extractor::CoordinateExtractor;
pub use descriptor_validator::DescriptorValidator;
pub use graph_materializer::{DependencyGraphMaterializer, MaterializedForest};
pub use interpolator::PropertyInterpolator;
