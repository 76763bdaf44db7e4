use super::*;
use crate::analysis::domain::{ArtifactCoordinate, DependencyDeclaration, ParentReference, ResolvedNode};
use crate::shared::error::ErrorCategory;
use std::cell::RefCell;
use std::collections::HashSet;
use std::path::PathBuf;

// Mock implementations for testing
struct MockDescriptorReader {
    descriptor: ProjectDescriptor,
}

impl DescriptorReader for MockDescriptorReader {
    fn read_descriptor(&self, _path: &Path) -> Result<ProjectDescriptor> {
        Ok(self.descriptor.clone())
    }
}

struct FailingDescriptorReader;

impl DescriptorReader for FailingDescriptorReader {
    fn read_descriptor(&self, path: &Path) -> Result<ProjectDescriptor> {
        Err(AnalyzerError::DescriptorNotFound {
            path: path.join(DESCRIPTOR_FILE_NAME),
            suggestion: "test".to_string(),
        }
        .into())
    }
}

struct MockResolver {
    graph: Option<ResolvedNode>,
}

impl DependencyResolver for MockResolver {
    fn resolve(&self, _descriptor: &ProjectDescriptor) -> Result<ResolvedNode> {
        self.graph
            .clone()
            .ok_or_else(|| anyhow::anyhow!("repository unavailable"))
    }
}

struct MockFingerprinter {
    present: HashSet<PathBuf>,
}

impl ArtifactFingerprinter for MockFingerprinter {
    fn fingerprint(&self, path: &Path) -> Option<String> {
        self.present.contains(path).then(|| "f".repeat(40))
    }
}

#[derive(Default)]
struct MockProgressReporter {
    messages: RefCell<Vec<String>>,
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_dependency(
        &self,
        sequence: usize,
        coordinate: &ArtifactCoordinate,
        _scope: &str,
        _has_digest: bool,
    ) {
        self.messages
            .borrow_mut()
            .push(format!("{} {}", sequence, coordinate));
    }

    fn report_error(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

fn demo_descriptor() -> ProjectDescriptor {
    ProjectDescriptor {
        group_id: Some("com.test".to_string()),
        artifact_id: Some("demo".to_string()),
        version: Some("1.0.0".to_string()),
        dependencies: vec![DependencyDeclaration::new("org.slf4j", "slf4j-api", Some("2.0.9"))],
        ..ProjectDescriptor::default()
    }
}

fn use_case<DR: DescriptorReader>(
    reader: DR,
    graph: Option<ResolvedNode>,
    present: &[PathBuf],
) -> AnalyzeProjectUseCase<DR, MockResolver, MockFingerprinter, MockProgressReporter> {
    AnalyzeProjectUseCase::new(
        reader,
        MockResolver { graph },
        MockFingerprinter {
            present: present.iter().cloned().collect(),
        },
        MockProgressReporter::default(),
        LocalArtifactLocator::new("/repo"),
    )
}

#[test]
fn test_execute_builds_result() {
    let slf4j = ArtifactCoordinate::new("org.slf4j", "slf4j-api", "2.0.9");
    let graph = ResolvedNode::root(vec![ResolvedNode::leaf(slf4j.clone(), "compile")]);
    let jar = LocalArtifactLocator::new("/repo").locate(&slf4j);

    let use_case = use_case(
        MockDescriptorReader {
            descriptor: demo_descriptor(),
        },
        Some(graph),
        &[jar],
    );
    let result = use_case
        .execute(AnalysisRequest::new("/work/demo"))
        .unwrap();

    assert_eq!(result.project_path(), "/work/demo");
    assert_eq!(result.coordinate().to_string(), "com.test:demo:1.0.0");
    assert_eq!(result.total_dependencies(), 1);
    assert_eq!(result.dependencies()[0].digest(), Some("f".repeat(40).as_str()));

    let messages = use_case.progress_reporter.messages.borrow();
    assert!(messages.iter().any(|m| m.contains("Loading pom.xml")));
    assert!(messages.iter().any(|m| m == "1 org.slf4j:slf4j-api:2.0.9"));
    assert!(messages.iter().any(|m| m.contains("Analyzed 1 dependency")));
}

#[test]
fn test_execute_uses_parent_coordinate() {
    let descriptor = ProjectDescriptor {
        artifact_id: Some("child".to_string()),
        parent: Some(ParentReference {
            group_id: Some("com.parent".to_string()),
            artifact_id: Some("parent".to_string()),
            version: Some("3.0.0".to_string()),
        }),
        ..ProjectDescriptor::default()
    };

    let result = use_case(
        MockDescriptorReader { descriptor },
        Some(ResolvedNode::root(Vec::new())),
        &[],
    )
    .execute(AnalysisRequest::new("/work/child"))
    .unwrap();

    assert_eq!(result.coordinate().group_id(), "com.parent");
    assert_eq!(result.coordinate().version(), Some("3.0.0"));
    assert!(result.dependencies().is_empty());
    assert_eq!(result.total_dependencies(), 0);
}

#[test]
fn test_execute_normalizes_project_path() {
    let result = use_case(
        MockDescriptorReader {
            descriptor: demo_descriptor(),
        },
        Some(ResolvedNode::root(Vec::new())),
        &[],
    )
    .execute(AnalysisRequest::new("/work/./demo/sub/.."))
    .unwrap();

    assert_eq!(result.project_path(), "/work/demo");
}

#[test]
fn test_execute_rejects_path_traversal() {
    let err = use_case(
        MockDescriptorReader {
            descriptor: demo_descriptor(),
        },
        Some(ResolvedNode::root(Vec::new())),
        &[],
    )
    .execute(AnalysisRequest::new("../outside"))
    .unwrap_err();

    let analyzer_error = err.downcast_ref::<AnalyzerError>().unwrap();
    assert!(matches!(analyzer_error, AnalyzerError::SecurityError { .. }));
}

#[test]
fn test_descriptor_error_propagates() {
    let err = use_case(FailingDescriptorReader, Some(ResolvedNode::root(Vec::new())), &[])
        .execute(AnalysisRequest::new("/work/missing"))
        .unwrap_err();

    let analyzer_error = err.downcast_ref::<AnalyzerError>().unwrap();
    assert_eq!(analyzer_error.category(), ErrorCategory::Descriptor);
}

#[test]
fn test_uncategorized_resolver_error_becomes_resolution_error() {
    let err = use_case(
        MockDescriptorReader {
            descriptor: demo_descriptor(),
        },
        None,
        &[],
    )
    .execute(AnalysisRequest::new("/work/demo"))
    .unwrap_err();

    let analyzer_error = err.downcast_ref::<AnalyzerError>().unwrap();
    assert_eq!(analyzer_error.category(), ErrorCategory::Resolution);
    assert!(err.to_string().contains("com.test:demo:1.0.0"));
    assert!(err.to_string().contains("repository unavailable"));
}

#[test]
fn test_duplicate_dependencies_counted_once() {
    let shared = ArtifactCoordinate::new("com.example", "shared", "1.0");
    let graph = ResolvedNode::root(vec![
        ResolvedNode::leaf(shared.clone(), "compile"),
        ResolvedNode::dependency(
            ArtifactCoordinate::new("com.example", "b", "1.0"),
            "compile",
            vec![ResolvedNode::leaf(shared, "compile")],
        ),
    ]);

    let result = use_case(
        MockDescriptorReader {
            descriptor: demo_descriptor(),
        },
        Some(graph),
        &[],
    )
    .execute(AnalysisRequest::new("/work/demo"))
    .unwrap();

    assert_eq!(result.total_dependencies(), 2);
    assert!(result.dependencies()[1].children().is_empty());
}
