//! Configuration for maven-analyzer.
//!
//! Provides YAML-based configuration through `maven-analyzer.config.yml`
//! files, the system property table used for `${...}` interpolation, and
//! the resolved [`AnalyzerConfig`] handed to the adapters at startup.

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::shared::error::AnalyzerError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "maven-analyzer.config.yml";

/// System property naming an alternative local repository
pub const REPO_LOCAL_PROPERTY: &str = "maven.repo.local";

const ENV_PREFIX: &str = "env.";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub local_repository: Option<String>,
    pub output: Option<String>,
    pub properties: Option<BTreeMap<String, serde_yaml_ng::Value>>,
    pub include_optional: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Properties with scalar values rendered as strings
    ///
    /// Non-scalar values are rejected by validation, so they never reach here.
    pub fn property_values(&self) -> BTreeMap<String, String> {
        self.properties
            .iter()
            .flatten()
            .filter_map(|(name, value)| scalar_to_string(value).map(|v| (name.clone(), v)))
            .collect()
    }
}

fn scalar_to_string(value: &serde_yaml_ng::Value) -> Option<String> {
    match value {
        serde_yaml_ng::Value::String(s) => Some(s.clone()),
        serde_yaml_ng::Value::Number(n) => Some(n.to_string()),
        serde_yaml_ng::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn config_error(path: &Path, details: String, hint: &str) -> AnalyzerError {
    AnalyzerError::ConfigError {
        path: path.to_path_buf(),
        details,
        hint: hint.to_string(),
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        config_error(
            path,
            format!("Failed to read config file: {}", e),
            "Check that the file exists and is readable.",
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).map_err(|e| {
        config_error(
            path,
            format!("Failed to parse config file: {}", e),
            "Ensure the file contains valid YAML syntax.",
        )
    })?;

    validate_config(&config, path)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.is_file() {
        return Ok(None);
    }

    tracing::debug!(path = %config_path.display(), "Loading configuration file");
    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile, path: &Path) -> Result<()> {
    if let Some(repository) = &config.local_repository {
        if repository.trim().is_empty() {
            return Err(config_error(
                path,
                "local_repository must not be empty".to_string(),
                "Remove the field to use ~/.m2/repository, or set it to a directory path.",
            )
            .into());
        }
    }

    for (name, value) in config.properties.iter().flatten() {
        if name.trim().is_empty() {
            return Err(config_error(
                path,
                "properties must not contain an empty name".to_string(),
                "Each entry needs a name, e.g. `junit.version: \"5.10.0\"`.",
            )
            .into());
        }
        if scalar_to_string(value).is_none() {
            return Err(config_error(
                path,
                format!("properties.{} must be a string, number or boolean", name),
                "Property values are substituted into pom.xml text and must be scalars.",
            )
            .into());
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!("Unknown config field '{}' will be ignored", key);
    }
}

/// Ambient system properties available to `${...}` placeholders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemProperties {
    entries: BTreeMap<String, String>,
}

impl SystemProperties {
    /// Built-in properties of the running process plus `env.<NAME>` for
    /// every environment variable
    pub fn ambient() -> Self {
        let mut properties = Self::default();

        if let Some(home) = dirs::home_dir() {
            properties.insert("user.home", home.display().to_string());
        }
        if let Ok(cwd) = std::env::current_dir() {
            properties.insert("user.dir", cwd.display().to_string());
        }
        if let Some(user) = std::env::var("USER")
            .ok()
            .or_else(|| std::env::var("USERNAME").ok())
        {
            properties.insert("user.name", user);
        }
        properties.insert("os.name", os_name());
        properties.insert("os.arch", os_arch());
        properties.insert("file.separator", std::path::MAIN_SEPARATOR.to_string());
        properties.insert("path.separator", if cfg!(windows) { ";" } else { ":" });
        properties.insert("line.separator", if cfg!(windows) { "\r\n" } else { "\n" });

        for (name, value) in std::env::vars_os() {
            if let (Some(name), Some(value)) = (name.to_str(), value.to_str()) {
                properties.insert(format!("{}{}", ENV_PREFIX, name), value);
            }
        }

        properties
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    /// Parses a `-D` definition: `name=value`, or a bare `name` meaning `true`
    pub fn parse_definition(definition: &str) -> std::result::Result<(String, String), String> {
        let (name, value) = match definition.split_once('=') {
            Some((name, value)) => (name.trim(), value),
            None => (definition.trim(), "true"),
        };
        if name.is_empty() {
            return Err(format!(
                "Invalid property definition '{}': expected NAME=VALUE",
                definition
            ));
        }
        Ok((name.to_string(), value.to_string()))
    }
}

fn os_name() -> String {
    match std::env::consts::OS {
        "linux" => "Linux".to_string(),
        "macos" => "Mac OS X".to_string(),
        "windows" => "Windows".to_string(),
        other => other.to_string(),
    }
}

fn os_arch() -> String {
    match std::env::consts::ARCH {
        "x86_64" => "amd64".to_string(),
        other => other.to_string(),
    }
}

/// Settings resolved once at startup from CLI flags, config file and environment
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub local_repository: PathBuf,
    pub system_properties: SystemProperties,
    pub output: Option<PathBuf>,
    pub include_optional: bool,
}

impl AnalyzerConfig {
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::default()
    }
}

/// Builder applying the precedence rules of [`AnalyzerConfig`]
///
/// Properties: ambient < config file `properties` < `-D` definitions.
/// Repository: `--local-repository` < `maven.repo.local` < config file <
/// `~/.m2/repository`, first present wins in that order.
#[derive(Debug, Default)]
pub struct AnalyzerConfigBuilder {
    ambient: Option<SystemProperties>,
    config_file: Option<ConfigFile>,
    definitions: Vec<(String, String)>,
    local_repository: Option<PathBuf>,
    output: Option<PathBuf>,
    include_optional: bool,
    home_dir: Option<Option<PathBuf>>,
}

impl AnalyzerConfigBuilder {
    /// Replaces [`SystemProperties::ambient`] as the lowest property layer
    pub fn with_ambient_properties(mut self, ambient: SystemProperties) -> Self {
        self.ambient = Some(ambient);
        self
    }

    pub fn with_config_file(mut self, config_file: Option<ConfigFile>) -> Self {
        self.config_file = config_file;
        self
    }

    pub fn with_definitions(mut self, definitions: Vec<(String, String)>) -> Self {
        self.definitions = definitions;
        self
    }

    pub fn with_local_repository(mut self, local_repository: Option<PathBuf>) -> Self {
        self.local_repository = local_repository;
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_include_optional(mut self, include_optional: bool) -> Self {
        self.include_optional = include_optional;
        self
    }

    /// Overrides the home directory lookup (`None` simulates no home)
    pub fn with_home_dir(mut self, home_dir: Option<PathBuf>) -> Self {
        self.home_dir = Some(home_dir);
        self
    }

    pub fn build(self) -> AnalyzerConfig {
        let mut system_properties = self.ambient.unwrap_or_else(SystemProperties::ambient);
        let config_file = self.config_file.unwrap_or_default();

        for (name, value) in config_file.property_values() {
            system_properties.insert(name, value);
        }
        for (name, value) in self.definitions {
            system_properties.insert(name, value);
        }

        let home_dir = self.home_dir.unwrap_or_else(dirs::home_dir);
        let local_repository = self
            .local_repository
            .or_else(|| system_properties.get(REPO_LOCAL_PROPERTY).map(PathBuf::from))
            .or_else(|| config_file.local_repository.as_deref().map(PathBuf::from))
            .or_else(|| home_dir.map(|home| home.join(".m2").join("repository")))
            .unwrap_or_else(|| {
                PathBuf::from(system_properties.get("user.home").unwrap_or("."))
                    .join(".m2")
                    .join("repository")
            });

        AnalyzerConfig {
            local_repository,
            system_properties,
            output: self
                .output
                .or_else(|| config_file.output.as_deref().map(PathBuf::from)),
            include_optional: self.include_optional
                || config_file.include_optional.unwrap_or(false),
        }
    }
}
