pub mod resolver;
pub mod visited;

pub use resolver::DependencyResolver;
pub use visited::VisitedSet;

use pacchetti_config::ConfigProvider;
use pacchetti_error::Result;
use std::collections::HashSet;

/// Transitive closure of package names. Iteration order carries no meaning.
pub type ResolvedSet = HashSet<String>;

pub fn resolve_project(config: &dyn ConfigProvider, debug: bool) -> Result<ResolvedSet> {
    DependencyResolver::new(config, debug).resolve_project()
}
