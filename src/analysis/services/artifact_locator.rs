use crate::analysis::domain::ArtifactCoordinate;
use std::path::{Path, PathBuf};

const JAR_EXTENSION: &str = "jar";
const LOCAL_METADATA_FILE: &str = "maven-metadata-local.xml";

/// LocalArtifactLocator maps coordinates onto the Maven local repository layout
///
/// `<root>/<group path>/<artifactId>/<version>/<artifactId>-<version>.<ext>`,
/// where the group path is the groupId with every `.` turned into a
/// directory separator. Pure path computation, never touches the disk.
#[derive(Debug, Clone)]
pub struct LocalArtifactLocator {
    repository_root: PathBuf,
}

impl LocalArtifactLocator {
    pub fn new(repository_root: impl Into<PathBuf>) -> Self {
        Self {
            repository_root: repository_root.into(),
        }
    }

    pub fn repository_root(&self) -> &Path {
        &self.repository_root
    }

    /// Expected location of the artifact's jar
    pub fn locate(&self, coordinate: &ArtifactCoordinate) -> PathBuf {
        self.locate_with_extension(coordinate, JAR_EXTENSION)
    }

    pub fn locate_with_extension(&self, coordinate: &ArtifactCoordinate, extension: &str) -> PathBuf {
        let mut path = self.artifact_directory(coordinate.group_id(), coordinate.artifact_id());
        path.push(coordinate.version());
        path.push(format!(
            "{}-{}.{}",
            coordinate.artifact_id(),
            coordinate.version(),
            extension
        ));
        path
    }

    /// Directory holding every cached version of an artifact
    pub fn artifact_directory(&self, group_id: &str, artifact_id: &str) -> PathBuf {
        let mut path = self.repository_root.clone();
        for segment in group_id.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(artifact_id);
        path
    }

    /// `maven-metadata-local.xml` written by Maven when it installs an artifact
    pub fn local_metadata(&self, group_id: &str, artifact_id: &str) -> PathBuf {
        self.artifact_directory(group_id, artifact_id)
            .join(LOCAL_METADATA_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_jar() {
        let locator = LocalArtifactLocator::new("/home/dev/.m2/repository");
        let path = locator.locate(&ArtifactCoordinate::new(
            "org.junit.jupiter",
            "junit-jupiter-api",
            "5.8.2",
        ));
        assert_eq!(
            path,
            PathBuf::from("/home/dev/.m2/repository")
                .join("org")
                .join("junit")
                .join("jupiter")
                .join("junit-jupiter-api")
                .join("5.8.2")
                .join("junit-jupiter-api-5.8.2.jar")
        );
    }

    #[test]
    fn test_locate_pom() {
        let locator = LocalArtifactLocator::new("repo");
        let path = locator.locate_with_extension(
            &ArtifactCoordinate::new("junit", "junit", "4.13.2"),
            "pom",
        );
        assert_eq!(
            path,
            PathBuf::from("repo/junit/junit/4.13.2/junit-4.13.2.pom")
        );
    }

    #[test]
    fn test_artifact_directory_and_metadata() {
        let locator = LocalArtifactLocator::new("repo");
        assert_eq!(
            locator.artifact_directory("org.slf4j", "slf4j-api"),
            PathBuf::from("repo/org/slf4j/slf4j-api")
        );
        assert_eq!(
            locator.local_metadata("org.slf4j", "slf4j-api"),
            PathBuf::from("repo/org/slf4j/slf4j-api/maven-metadata-local.xml")
        );
    }

    #[test]
    fn test_locate_is_deterministic() {
        let locator = LocalArtifactLocator::new("repo");
        let coordinate = ArtifactCoordinate::new("com.example", "lib", "1.0.0");
        assert_eq!(locator.locate(&coordinate), locator.locate(&coordinate));
        assert_eq!(locator.repository_root(), Path::new("repo"));
    }
}
