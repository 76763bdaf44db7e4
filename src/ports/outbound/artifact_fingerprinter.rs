use std::path::Path;

/// ArtifactFingerprinter port for content digests of cached artifacts
pub trait ArtifactFingerprinter {
    /// Computes the lowercase hex digest of the file at `path`
    ///
    /// # Returns
    /// None when the file does not exist, is not a regular file, or cannot be read
    fn fingerprint(&self, path: &Path) -> Option<String>;
}
