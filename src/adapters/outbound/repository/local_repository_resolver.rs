use crate::adapters::outbound::filesystem::{parse_descriptor, parse_metadata, RepositoryMetadata};
use crate::analysis::domain::{
    ArtifactCoordinate, DependencyDeclaration, DependencyKey, Exclusion, ProjectDescriptor,
    PropertyTable, ResolvedNode,
};
use crate::analysis::policies::{ScopePolicy, VersionPolicy};
use crate::analysis::services::{CoordinateExtractor, LocalArtifactLocator, PropertyInterpolator};
use crate::ports::outbound::DependencyResolver;
use crate::shared::error::AnalyzerError;
use crate::shared::security::MAX_DESCRIPTOR_SIZE;
use crate::shared::Result;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::rc::Rc;

const POM_EXTENSION: &str = "pom";
const JAR_EXTENSION: &str = "jar";

/// Maximum dependency chain length before resolution is aborted
const MAX_DEPTH: usize = 100;

/// LocalRepositoryResolver adapter resolving dependencies offline
///
/// Transitive dependencies are read from the `<artifactId>-<version>.pom`
/// files cached in the local repository. Artifacts whose POM is not cached
/// become leaves. A cached POM inherits properties and dependency management
/// from its `<parent>` when the parent POM is cached too (one level). A
/// direct dependency without any version resolves to the newest cached
/// version. Nothing is ever downloaded.
pub struct LocalRepositoryResolver {
    locator: LocalArtifactLocator,
    system_properties: BTreeMap<String, String>,
    include_optional: bool,
    pom_cache: RefCell<HashMap<ArtifactCoordinate, Option<Rc<ProjectDescriptor>>>>,
}

/// Per-resolution bookkeeping
#[derive(Default)]
struct ResolutionState {
    /// groupId/artifactId pairs on the path from the root to the current node
    path: Vec<(String, String)>,
    expanded: HashSet<DependencyKey>,
}

impl ResolutionState {
    fn on_path(&self, group_id: &str, artifact_id: &str) -> bool {
        self.path
            .iter()
            .any(|(g, a)| g == group_id && a == artifact_id)
    }
}

impl LocalRepositoryResolver {
    pub fn new(locator: LocalArtifactLocator, system_properties: BTreeMap<String, String>) -> Self {
        Self {
            locator,
            system_properties,
            include_optional: false,
            pom_cache: RefCell::new(HashMap::new()),
        }
    }

    /// Follow `<optional>true</optional>` transitive dependencies as well
    pub fn with_optional_dependencies(mut self, include_optional: bool) -> Self {
        self.include_optional = include_optional;
        self
    }

    fn resolve_direct(
        &self,
        descriptor: &ProjectDescriptor,
        declaration: &DependencyDeclaration,
    ) -> Result<(ArtifactCoordinate, String)> {
        let managed = descriptor.managed_dependency(&declaration.group_id, &declaration.artifact_id);

        let version = match declaration
            .version
            .clone()
            .or_else(|| managed.and_then(|m| m.version.clone()))
        {
            Some(version) => version,
            None => self
                .latest_cached_version(&declaration.group_id, &declaration.artifact_id)
                .ok_or_else(|| AnalyzerError::ResolutionError {
                    coordinate: declaration.management_key(),
                    details: format!(
                        "No version declared, none managed in <dependencyManagement> \
                         and no version cached in {}",
                        self.locator.repository_root().display()
                    ),
                })?,
        };

        let scope = declaration
            .scope
            .as_deref()
            .or_else(|| managed.and_then(|m| m.scope.as_deref()));

        Ok((
            ArtifactCoordinate::new(&declaration.group_id, &declaration.artifact_id, version),
            ScopePolicy::effective_scope(scope).to_string(),
        ))
    }

    /// Newest version of an artifact present in the local repository
    ///
    /// `maven-metadata-local.xml` is consulted first (`latest`, then
    /// `release`) as long as the version it names is actually cached.
    /// Otherwise the highest cached version directory wins.
    fn latest_cached_version(&self, group_id: &str, artifact_id: &str) -> Option<String> {
        let directory = self.locator.artifact_directory(group_id, artifact_id);
        let entries = fs::read_dir(&directory).ok()?;

        let cached: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|version| self.is_cached(group_id, artifact_id, version))
            .collect();

        let from_metadata = self
            .read_local_metadata(group_id, artifact_id)
            .and_then(|metadata| {
                [metadata.latest, metadata.release]
                    .into_iter()
                    .flatten()
                    .find(|version| cached.contains(version))
            });

        let version = from_metadata
            .or_else(|| VersionPolicy::latest(cached.iter().map(String::as_str)).map(str::to_string))?;

        tracing::warn!(
            dependency = %format!("{}:{}", group_id, artifact_id),
            version = %version,
            "No version declared, using the newest cached version"
        );
        Some(version)
    }

    fn is_cached(&self, group_id: &str, artifact_id: &str, version: &str) -> bool {
        let coordinate = ArtifactCoordinate::new(group_id, artifact_id, version);
        [POM_EXTENSION, JAR_EXTENSION].iter().any(|extension| {
            self.locator
                .locate_with_extension(&coordinate, extension)
                .is_file()
        })
    }

    fn read_local_metadata(&self, group_id: &str, artifact_id: &str) -> Option<RepositoryMetadata> {
        let path = self.locator.local_metadata(group_id, artifact_id);
        let content = read_bounded(&path).ok()??;
        match parse_metadata(&content) {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                tracing::debug!(path = %path.display(), "Ignoring repository metadata: {:#}", e);
                None
            }
        }
    }

    fn expand(
        &self,
        coordinate: ArtifactCoordinate,
        scope: String,
        exclusions: &[Exclusion],
        state: &mut ResolutionState,
        depth: usize,
    ) -> Result<ResolvedNode> {
        if depth > MAX_DEPTH {
            return Err(AnalyzerError::ResolutionError {
                coordinate: coordinate.to_string(),
                details: format!(
                    "Dependency chain exceeds the maximum depth of {}",
                    MAX_DEPTH
                ),
            }
            .into());
        }

        if !state.expanded.insert(DependencyKey::new(&coordinate, &scope)) {
            return Ok(ResolvedNode::leaf(coordinate, scope));
        }

        let Some(pom) = self.load_pom(&coordinate)? else {
            return Ok(ResolvedNode::leaf(coordinate, scope));
        };

        state.path.push((
            coordinate.group_id().to_string(),
            coordinate.artifact_id().to_string(),
        ));

        let mut children = Vec::new();
        for declaration in &pom.dependencies {
            let Some((child, child_scope)) =
                self.transitive_child(&pom, declaration, &scope, exclusions, state)
            else {
                continue;
            };

            let mut child_exclusions = exclusions.to_vec();
            child_exclusions.extend(declaration.exclusions.iter().cloned());

            children.push(self.expand(child, child_scope, &child_exclusions, state, depth + 1)?);
        }

        state.path.pop();
        Ok(ResolvedNode::dependency(coordinate, scope, children))
    }

    /// Decides whether a dependency of a cached POM is followed, and with
    /// which coordinate and scope
    fn transitive_child(
        &self,
        pom: &ProjectDescriptor,
        declaration: &DependencyDeclaration,
        parent_scope: &str,
        exclusions: &[Exclusion],
        state: &ResolutionState,
    ) -> Option<(ArtifactCoordinate, String)> {
        let group_id = declaration.group_id.as_str();
        let artifact_id = declaration.artifact_id.as_str();

        if declaration.optional && !self.include_optional {
            return None;
        }

        if exclusions.iter().any(|e| e.matches(group_id, artifact_id)) {
            tracing::debug!(dependency = %declaration.management_key(), "Excluded");
            return None;
        }

        let managed = pom.managed_dependency(group_id, artifact_id);
        let declared_scope = ScopePolicy::effective_scope(
            declaration
                .scope
                .as_deref()
                .or_else(|| managed.and_then(|m| m.scope.as_deref())),
        );
        let scope = ScopePolicy::propagate(parent_scope, declared_scope)?;

        if state.on_path(group_id, artifact_id) {
            tracing::debug!(dependency = %declaration.management_key(), "Skipping dependency cycle");
            return None;
        }

        let Some(version) = declaration
            .version
            .as_deref()
            .or_else(|| managed.and_then(|m| m.version.as_deref()))
        else {
            tracing::debug!(
                dependency = %declaration.management_key(),
                "Skipping transitive dependency without a version"
            );
            return None;
        };

        Some((ArtifactCoordinate::new(group_id, artifact_id, version), scope))
    }

    fn load_pom(&self, coordinate: &ArtifactCoordinate) -> Result<Option<Rc<ProjectDescriptor>>> {
        if let Some(cached) = self.pom_cache.borrow().get(coordinate) {
            return Ok(cached.clone());
        }

        let loaded = self.read_pom(coordinate)?.map(Rc::new);
        self.pom_cache
            .borrow_mut()
            .insert(coordinate.clone(), loaded.clone());
        Ok(loaded)
    }

    fn read_pom(&self, coordinate: &ArtifactCoordinate) -> Result<Option<ProjectDescriptor>> {
        let Some(mut pom) = self.read_cached_descriptor(coordinate)? else {
            tracing::debug!(dependency = %coordinate, "POM not cached, treating as leaf");
            return Ok(None);
        };

        if let Some(parent) = self.read_parent(&pom)? {
            inherit_from_parent(&mut pom, parent);
        }

        let properties = PropertyTable::for_descriptor(&pom, &self.system_properties);
        for name in PropertyInterpolator::interpolate_descriptor(&mut pom, &properties) {
            tracing::debug!(dependency = %coordinate, "Property not found in cached POM: ${{{}}}", name);
        }

        Ok(Some(pom))
    }

    /// Cached `<parent>` POM of a descriptor, parsed but not interpolated
    fn read_parent(&self, descriptor: &ProjectDescriptor) -> Result<Option<ProjectDescriptor>> {
        let Some(parent) = &descriptor.parent else {
            return Ok(None);
        };
        let (Some(group_id), Some(artifact_id), Some(version)) = (
            parent.group_id.as_deref(),
            parent.artifact_id.as_deref(),
            parent.version.as_deref(),
        ) else {
            return Ok(None);
        };

        let coordinate = ArtifactCoordinate::new(group_id, artifact_id, version);
        let loaded = self.read_cached_descriptor(&coordinate)?;
        if loaded.is_none() {
            tracing::debug!(parent = %coordinate, "Parent POM not cached, nothing inherited");
        }
        Ok(loaded)
    }

    /// Reads and parses a cached POM. `None` when it is not in the repository
    fn read_cached_descriptor(
        &self,
        coordinate: &ArtifactCoordinate,
    ) -> Result<Option<ProjectDescriptor>> {
        let pom_path = self.locator.locate_with_extension(coordinate, POM_EXTENSION);

        let resolution_error = |details: String| AnalyzerError::ResolutionError {
            coordinate: coordinate.to_string(),
            details,
        };

        let Some(content) = read_bounded(&pom_path).map_err(resolution_error)? else {
            return Ok(None);
        };

        let pom = parse_descriptor(&content).map_err(|e| {
            resolution_error(format!("Malformed cached POM {}: {:#}", pom_path.display(), e))
        })?;
        Ok(Some(pom))
    }

    /// Root descriptor with the management of its cached parent merged in
    fn root_with_parent(&self, descriptor: &ProjectDescriptor) -> Result<Option<ProjectDescriptor>> {
        let Some(parent) = self.read_parent(descriptor)? else {
            return Ok(None);
        };

        let mut effective = descriptor.clone();
        inherit_from_parent(&mut effective, parent);
        let properties = PropertyTable::for_descriptor(&effective, &self.system_properties);
        for name in PropertyInterpolator::interpolate_descriptor(&mut effective, &properties) {
            tracing::debug!("Property not found in inherited management: ${{{}}}", name);
        }
        Ok(Some(effective))
    }
}

/// Merges a parent's properties and dependency management under the child's
fn inherit_from_parent(child: &mut ProjectDescriptor, parent: ProjectDescriptor) {
    for (name, value) in parent.properties {
        child.properties.entry(name).or_insert(value);
    }
    child
        .dependency_management
        .extend(parent.dependency_management);
}

/// Reads a file from the repository, `None` when it does not exist
fn read_bounded(path: &Path) -> std::result::Result<Option<String>, String> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => metadata,
        _ => return Ok(None),
    };

    if metadata.len() > MAX_DESCRIPTOR_SIZE {
        return Err(format!(
            "Cached file {} is too large ({} bytes)",
            path.display(),
            metadata.len()
        ));
    }

    fs::read_to_string(path)
        .map(Some)
        .map_err(|e| format!("Cannot read cached file {}: {}", path.display(), e))
}

impl DependencyResolver for LocalRepositoryResolver {
    fn resolve(&self, descriptor: &ProjectDescriptor) -> Result<ResolvedNode> {
        let mut state = ResolutionState::default();
        if let (Some(group_id), Some(artifact_id)) = (
            CoordinateExtractor::effective_group_id(descriptor),
            descriptor.artifact_id.as_deref(),
        ) {
            state.path.push((group_id.to_string(), artifact_id.to_string()));
        }

        let inherited = self.root_with_parent(descriptor)?;
        let effective = inherited.as_ref().unwrap_or(descriptor);

        let mut children = Vec::with_capacity(descriptor.dependencies.len());
        for declaration in &effective.dependencies {
            let (coordinate, scope) = self.resolve_direct(effective, declaration)?;
            children.push(self.expand(coordinate, scope, &declaration.exclusions, &mut state, 1)?);
        }

        tracing::debug!(
            direct = children.len(),
            cached_poms = self.pom_cache.borrow().len(),
            "Resolved dependency graph"
        );

        Ok(ResolvedNode::root(children))
    }
}
