/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, local repository, console).
pub mod artifact_fingerprinter;
pub mod dependency_resolver;
pub mod descriptor_reader;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use artifact_fingerprinter::ArtifactFingerprinter;
pub use dependency_resolver::DependencyResolver;
pub use descriptor_reader::DescriptorReader;
pub use formatter::ResultFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
