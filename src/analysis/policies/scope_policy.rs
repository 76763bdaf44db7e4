pub const SCOPE_COMPILE: &str = "compile";
pub const SCOPE_RUNTIME: &str = "runtime";
pub const SCOPE_PROVIDED: &str = "provided";
pub const SCOPE_TEST: &str = "test";
pub const SCOPE_SYSTEM: &str = "system";
pub const SCOPE_IMPORT: &str = "import";

/// ScopePolicy encodes the Maven rules for dependency scopes
///
/// Rules:
/// 1. A dependency without a scope is `compile`
/// 2. Only `compile` and `runtime` dependencies of a dependency are transitive
/// 3. The scope of a transitive dependency is derived from its parent:
///
/// | parent \ child | compile  | runtime  |
/// |----------------|----------|----------|
/// | compile        | compile  | runtime  |
/// | runtime        | runtime  | runtime  |
/// | provided       | provided | provided |
/// | test           | test     | test     |
pub struct ScopePolicy;

impl ScopePolicy {
    /// Returns the declared scope, or `compile` when none was declared
    pub fn effective_scope(declared: Option<&str>) -> &str {
        match declared.map(str::trim) {
            Some(scope) if !scope.is_empty() => scope,
            _ => SCOPE_COMPILE,
        }
    }

    /// Whether a dependency declared with this scope is inherited transitively
    pub fn is_transitive(scope: &str) -> bool {
        matches!(scope, SCOPE_COMPILE | SCOPE_RUNTIME)
    }

    /// Derives the scope of a transitive dependency
    ///
    /// # Returns
    /// The propagated scope, or None when the child is not inherited at all
    pub fn propagate(parent_scope: &str, child_scope: &str) -> Option<String> {
        if !Self::is_transitive(child_scope) {
            return None;
        }

        let scope = match parent_scope {
            SCOPE_COMPILE => child_scope,
            SCOPE_RUNTIME => SCOPE_RUNTIME,
            SCOPE_PROVIDED => SCOPE_PROVIDED,
            SCOPE_TEST => SCOPE_TEST,
            SCOPE_SYSTEM | SCOPE_IMPORT => return None,
            _ => child_scope,
        };
        Some(scope.to_string())
    }
}
