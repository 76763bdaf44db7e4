/// Filesystem adapters for file I/O operations
mod file_writer;
mod metadata_xml;
mod pom_reader;
mod pom_xml;
mod sha1_fingerprinter;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub(crate) use metadata_xml::{parse_metadata, RepositoryMetadata};
pub use pom_reader::PomReader;
pub(crate) use pom_xml::parse_descriptor;
pub use sha1_fingerprinter::Sha1Fingerprinter;
