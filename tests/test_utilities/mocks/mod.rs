/// Mock implementations for testing
mod mock_dependency_resolver;
mod mock_descriptor_reader;
mod mock_fingerprinter;
mod mock_progress_reporter;

pub use mock_dependency_resolver::MockDependencyResolver;
pub use mock_descriptor_reader::MockDescriptorReader;
pub use mock_fingerprinter::MockFingerprinter;
pub use mock_progress_reporter::MockProgressReporter;
