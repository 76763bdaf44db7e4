use maven_analyzer::prelude::*;
use std::path::Path;

/// Mock DescriptorReader for testing
pub struct MockDescriptorReader {
    pub descriptor: ProjectDescriptor,
    pub should_fail: bool,
}

impl MockDescriptorReader {
    pub fn new(descriptor: ProjectDescriptor) -> Self {
        Self {
            descriptor,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            descriptor: ProjectDescriptor::default(),
            should_fail: true,
        }
    }
}

impl DescriptorReader for MockDescriptorReader {
    fn read_descriptor(&self, _project_path: &Path) -> Result<ProjectDescriptor> {
        if self.should_fail {
            anyhow::bail!("Mock descriptor read failure");
        }
        Ok(self.descriptor.clone())
    }
}
