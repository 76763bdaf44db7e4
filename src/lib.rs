//! maven-analyzer - dependency analysis for Maven projects
//!
//! This library reads a project's `pom.xml`, interpolates `${...}` property
//! placeholders, resolves the transitive dependency graph from the local
//! Maven repository and fingerprints every resolved artifact with SHA-1,
//! following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`analysis`): Descriptor model, interpolation, scope rules and graph materialization
//! - **Application Layer** (`application`): The analysis use case
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Configuration** (`config`): Config file, system properties and repository location
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use maven_analyzer::prelude::*;
//! use std::collections::BTreeMap;
//!
//! # fn main() -> Result<()> {
//! let locator = LocalArtifactLocator::new("/home/dev/.m2/repository");
//!
//! let use_case = AnalyzeProjectUseCase::new(
//!     PomReader::new(BTreeMap::new()),
//!     LocalRepositoryResolver::new(locator.clone(), BTreeMap::new()),
//!     Sha1Fingerprinter::new(),
//!     StderrProgressReporter::new(),
//!     locator,
//! );
//!
//! let result = use_case.execute(AnalysisRequest::new("."))?;
//! println!("{}", JsonFormatter::new().format(&result)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod analysis;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, PomReader, Sha1Fingerprinter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::JsonFormatter;
    pub use crate::adapters::outbound::repository::LocalRepositoryResolver;
    pub use crate::analysis::domain::{
        AnalysisResult, AnalyzedDependency, ArtifactCoordinate, DependencyDeclaration,
        ProjectCoordinate, ProjectDescriptor, PropertyTable, ResolvedNode,
    };
    pub use crate::analysis::policies::ScopePolicy;
    pub use crate::analysis::services::{
        CoordinateExtractor, DependencyGraphMaterializer, LocalArtifactLocator,
        PropertyInterpolator,
    };
    pub use crate::application::dto::AnalysisRequest;
    pub use crate::application::use_cases::AnalyzeProjectUseCase;
    pub use crate::config::{AnalyzerConfig, SystemProperties};
    pub use crate::ports::outbound::{
        ArtifactFingerprinter, DependencyResolver, DescriptorReader, OutputPresenter,
        ProgressReporter, ResultFormatter,
    };
    pub use crate::shared::Result;
}
