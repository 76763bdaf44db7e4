use crate::analysis::domain::{ParentReference, ProjectCoordinate, ProjectDescriptor};

/// CoordinateExtractor service for the effective project coordinate
///
/// A child module may omit its groupId and version and inherit them from
/// `<parent>`. Only a single parent level is consulted.
pub struct CoordinateExtractor;

impl CoordinateExtractor {
    pub fn effective_group_id(descriptor: &ProjectDescriptor) -> Option<&str> {
        Self::own_or_parent(descriptor, descriptor.group_id.as_deref(), |parent| {
            parent.group_id.as_deref()
        })
    }

    pub fn effective_version(descriptor: &ProjectDescriptor) -> Option<&str> {
        Self::own_or_parent(descriptor, descriptor.version.as_deref(), |parent| {
            parent.version.as_deref()
        })
    }

    /// Builds the project coordinate, or None when groupId or artifactId is missing
    pub fn project_coordinate(descriptor: &ProjectDescriptor) -> Option<ProjectCoordinate> {
        let group_id = Self::effective_group_id(descriptor)?;
        let artifact_id = non_blank(descriptor.artifact_id.as_deref())?;
        Some(ProjectCoordinate::new(
            group_id,
            artifact_id,
            Self::effective_version(descriptor).map(str::to_string),
        ))
    }

    fn own_or_parent<'a>(
        descriptor: &'a ProjectDescriptor,
        own: Option<&'a str>,
        inherited: fn(&'a ParentReference) -> Option<&'a str>,
    ) -> Option<&'a str> {
        non_blank(own).or_else(|| descriptor.parent.as_ref().and_then(|p| non_blank(inherited(p))))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
