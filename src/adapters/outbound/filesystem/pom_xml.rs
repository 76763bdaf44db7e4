use crate::analysis::domain::{DependencyDeclaration, Exclusion, ParentReference, ProjectDescriptor};
use anyhow::Context;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;
use std::collections::BTreeMap;

const ROOT_ELEMENT: &[u8] = b"project";

/// Raw `<project>` element as serde sees it. Elements we do not model
/// (`<build>`, `<profiles>`, ...) are skipped.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProject {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
    packaging: Option<String>,
    parent: Option<RawParent>,
    properties: Option<BTreeMap<String, String>>,
    dependencies: Option<RawDependencies>,
    dependency_management: Option<RawDependencyManagement>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawParent {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawDependencyManagement {
    dependencies: Option<RawDependencies>,
}

#[derive(Debug, Default, Deserialize)]
struct RawDependencies {
    #[serde(rename = "dependency", default)]
    items: Vec<RawDependency>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDependency {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
    scope: Option<String>,
    #[serde(rename = "type")]
    dependency_type: Option<String>,
    classifier: Option<String>,
    optional: Option<String>,
    exclusions: Option<RawExclusions>,
}

#[derive(Debug, Default, Deserialize)]
struct RawExclusions {
    #[serde(rename = "exclusion", default)]
    items: Vec<RawExclusion>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawExclusion {
    group_id: Option<String>,
    artifact_id: Option<String>,
}

/// Parses pom.xml content into a descriptor, without interpolation
///
/// # Errors
/// Returns an error if the content is not well-formed XML, the root element
/// is not `<project>`, or a dependency lacks its groupId or artifactId
pub(crate) fn parse_descriptor(xml: &str) -> anyhow::Result<ProjectDescriptor> {
    ensure_project_root(xml)?;

    let raw: RawProject = quick_xml::de::from_str(xml).context("Malformed POM XML")?;

    let dependencies = convert_dependencies(raw.dependencies, "dependencies")?;
    let dependency_management = convert_dependencies(
        raw.dependency_management.and_then(|m| m.dependencies),
        "dependencyManagement",
    )?;

    Ok(ProjectDescriptor {
        group_id: text(raw.group_id),
        artifact_id: text(raw.artifact_id),
        version: text(raw.version),
        packaging: text(raw.packaging),
        parent: raw.parent.map(|parent| ParentReference {
            group_id: text(parent.group_id),
            artifact_id: text(parent.artifact_id),
            version: text(parent.version),
        }),
        properties: raw
            .properties
            .unwrap_or_default()
            .into_iter()
            .map(|(name, value)| (name, value.trim().to_string()))
            .collect(),
        dependencies,
        dependency_management,
    })
}

fn ensure_project_root(xml: &str) -> anyhow::Result<()> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event().context("Malformed POM XML")? {
            Event::Start(element) | Event::Empty(element) => {
                if element.local_name().as_ref() == ROOT_ELEMENT {
                    return Ok(());
                }
                anyhow::bail!(
                    "Root element is <{}>, expected <project>",
                    String::from_utf8_lossy(element.name().as_ref())
                );
            }
            Event::Eof => anyhow::bail!("Document contains no <project> element"),
            _ => {}
        }
    }
}

fn convert_dependencies(
    raw: Option<RawDependencies>,
    section: &str,
) -> anyhow::Result<Vec<DependencyDeclaration>> {
    raw.map(|deps| deps.items)
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, dependency)| convert_dependency(dependency, section, index))
        .collect()
}

fn convert_dependency(
    raw: RawDependency,
    section: &str,
    index: usize,
) -> anyhow::Result<DependencyDeclaration> {
    let (Some(group_id), Some(artifact_id)) = (text(raw.group_id), text(raw.artifact_id)) else {
        anyhow::bail!(
            "Dependency #{} in <{}> is missing groupId or artifactId",
            index + 1,
            section
        );
    };

    Ok(DependencyDeclaration {
        group_id,
        artifact_id,
        version: text(raw.version),
        scope: text(raw.scope),
        dependency_type: text(raw.dependency_type),
        classifier: text(raw.classifier),
        optional: text(raw.optional).is_some_and(|flag| flag.eq_ignore_ascii_case("true")),
        exclusions: raw
            .exclusions
            .map(|e| e.items)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|exclusion| {
                Some(Exclusion::new(
                    text(exclusion.group_id)?,
                    text(exclusion.artifact_id)?,
                ))
            })
            .collect(),
    })
}

/// Trimmed element text, None when missing or blank
fn text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
