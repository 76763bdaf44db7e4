/// Local repository adapters
mod local_repository_resolver;

pub use local_repository_resolver::LocalRepositoryResolver;
