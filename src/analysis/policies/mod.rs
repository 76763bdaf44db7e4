pub mod scope_policy;
pub mod version_policy;

pub use scope_policy::ScopePolicy;
pub use version_policy::VersionPolicy;
