use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct RawMetadata {
    versioning: Option<RawVersioning>,
}

#[derive(Debug, Default, Deserialize)]
struct RawVersioning {
    latest: Option<String>,
    release: Option<String>,
    versions: Option<RawVersions>,
}

#[derive(Debug, Default, Deserialize)]
struct RawVersions {
    #[serde(rename = "version", default)]
    items: Vec<String>,
}

/// Versions recorded in a `maven-metadata-local.xml`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RepositoryMetadata {
    pub latest: Option<String>,
    pub release: Option<String>,
    pub versions: Vec<String>,
}

/// Parses repository metadata, blank values are dropped
pub(crate) fn parse_metadata(xml: &str) -> anyhow::Result<RepositoryMetadata> {
    let raw: RawMetadata =
        quick_xml::de::from_str(xml).context("Malformed repository metadata XML")?;
    let versioning = raw.versioning.unwrap_or_default();

    Ok(RepositoryMetadata {
        latest: text(versioning.latest),
        release: text(versioning.release),
        versions: versioning
            .versions
            .map(|v| v.items)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|v| text(Some(v)))
            .collect(),
    })
}

fn text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
