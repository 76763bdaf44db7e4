use crate::ports::outbound::ArtifactFingerprinter;
use anyhow::Context;
use sha1::{Digest, Sha1};
use std::fs::{self, File};
use std::io::{ErrorKind, Read};
use std::path::Path;

const BUFFER_SIZE: usize = 8 * 1024;

/// Sha1Fingerprinter adapter computing SHA-1 digests of cached artifacts
///
/// Files are streamed through the hasher in 8 KiB chunks so large jars are
/// never held in memory.
pub struct Sha1Fingerprinter;

impl Sha1Fingerprinter {
    pub fn new() -> Self {
        Self
    }

    fn digest_file(path: &Path) -> anyhow::Result<String> {
        let mut file = File::open(path)
            .with_context(|| format!("Cannot open artifact for hashing: {}", path.display()))?;
        let mut hasher = Sha1::new();
        let mut buffer = [0u8; BUFFER_SIZE];

        loop {
            let read = match file.read(&mut buffer) {
                Ok(0) => break,
                Ok(read) => read,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(e).with_context(|| format!("Cannot read artifact: {}", path.display()))
                }
            };
            hasher.update(&buffer[..read]);
        }

        Ok(hex::encode(hasher.finalize()))
    }
}

impl Default for Sha1Fingerprinter {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactFingerprinter for Sha1Fingerprinter {
    fn fingerprint(&self, path: &Path) -> Option<String> {
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_file() => {}
            _ => {
                tracing::debug!(path = %path.display(), "Artifact not found in local repository");
                return None;
            }
        }

        match Self::digest_file(path) {
            Ok(digest) => Some(digest),
            Err(e) => {
                tracing::warn!("Failed to calculate SHA1 for {}: {:#}", path.display(), e);
                None
            }
        }
    }
}
