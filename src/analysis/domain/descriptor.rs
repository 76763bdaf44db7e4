use std::collections::BTreeMap;

/// File name of the build descriptor inside a project directory
pub const DESCRIPTOR_FILE_NAME: &str = "pom.xml";

const WILDCARD: &str = "*";

/// `<parent>` reference of a descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentReference {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
}

/// `<exclusion>` entry of a dependency declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusion {
    pub group_id: String,
    pub artifact_id: String,
}

impl Exclusion {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }

    /// `*` matches any value in either position
    pub fn matches(&self, group_id: &str, artifact_id: &str) -> bool {
        (self.group_id == WILDCARD || self.group_id == group_id)
            && (self.artifact_id == WILDCARD || self.artifact_id == artifact_id)
    }
}

/// A `<dependency>` element as authored, before or after interpolation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyDeclaration {
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
    pub scope: Option<String>,
    pub dependency_type: Option<String>,
    pub classifier: Option<String>,
    pub optional: bool,
    pub exclusions: Vec<Exclusion>,
}

impl DependencyDeclaration {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: Option<&str>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// `groupId:artifactId` used in diagnostics
    pub fn management_key(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}

/// Structured model of a build descriptor (pom.xml)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDescriptor {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub packaging: Option<String>,
    pub parent: Option<ParentReference>,
    pub properties: BTreeMap<String, String>,
    pub dependencies: Vec<DependencyDeclaration>,
    pub dependency_management: Vec<DependencyDeclaration>,
}

impl ProjectDescriptor {
    /// Finds the `<dependencyManagement>` entry for a groupId/artifactId pair
    pub fn managed_dependency(
        &self,
        group_id: &str,
        artifact_id: &str,
    ) -> Option<&DependencyDeclaration> {
        self.dependency_management
            .iter()
            .find(|managed| managed.group_id == group_id && managed.artifact_id == artifact_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclusion_exact_match() {
        let exclusion = Exclusion::new("commons-logging", "commons-logging");
        assert!(exclusion.matches("commons-logging", "commons-logging"));
        assert!(!exclusion.matches("commons-logging", "other"));
    }

    #[test]
    fn test_exclusion_wildcards() {
        assert!(Exclusion::new("*", "*").matches("any.group", "any-artifact"));
        assert!(Exclusion::new("org.slf4j", "*").matches("org.slf4j", "slf4j-api"));
        assert!(!Exclusion::new("org.slf4j", "*").matches("ch.qos.logback", "logback-core"));
    }

    #[test]
    fn test_managed_dependency_lookup() {
        let descriptor = ProjectDescriptor {
            dependency_management: vec![
                DependencyDeclaration::new("org.junit", "junit-bom", Some("5.10.0")),
                DependencyDeclaration::new("org.slf4j", "slf4j-api", Some("2.0.9"))
                    .with_scope("runtime"),
            ],
            ..ProjectDescriptor::default()
        };

        let managed = descriptor.managed_dependency("org.slf4j", "slf4j-api").unwrap();
        assert_eq!(managed.version.as_deref(), Some("2.0.9"));
        assert_eq!(managed.scope.as_deref(), Some("runtime"));
        assert!(descriptor.managed_dependency("org.slf4j", "other").is_none());
    }

    #[test]
    fn test_management_key() {
        let declaration = DependencyDeclaration::new("com.example", "lib", None);
        assert_eq!(declaration.management_key(), "com.example:lib");
    }
}
