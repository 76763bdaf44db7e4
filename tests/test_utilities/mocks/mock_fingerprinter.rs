use maven_analyzer::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock ArtifactFingerprinter with a fixed digest per artifact path
#[derive(Default)]
pub struct MockFingerprinter {
    digests: HashMap<PathBuf, String>,
}

impl MockFingerprinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_digest(mut self, path: impl Into<PathBuf>, digest: &str) -> Self {
        self.digests.insert(path.into(), digest.to_string());
        self
    }
}

impl ArtifactFingerprinter for MockFingerprinter {
    fn fingerprint(&self, path: &Path) -> Option<String> {
        self.digests.get(path).cloned()
    }
}
