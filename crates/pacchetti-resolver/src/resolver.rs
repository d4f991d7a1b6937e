use pacchetti_config::{ConfigProvider, package_dependencies, root_dependencies};
use pacchetti_error::Result;

use crate::ResolvedSet;
use crate::visited::VisitedSet;

pub struct DependencyResolver<'a> {
    config: &'a dyn ConfigProvider,
    debug: bool,
}

impl<'a> DependencyResolver<'a> {
    #[must_use]
    pub fn new(config: &'a dyn ConfigProvider, debug: bool) -> Self {
        Self { config, debug }
    }

    /// Resolves the roots listed under `dependencies` in the registry.
    pub fn resolve_project(&self) -> Result<ResolvedSet> {
        let roots = root_dependencies(self.config)?;
        pacchetti_logger::debug(
            &format!("Project declares {} direct dependencies", roots.len()),
            self.debug,
        );
        self.resolve(&roots)
    }

    /// Computes every package reachable from `roots`. Any registry failure
    /// aborts the whole run; a partial closure would silently under-build.
    pub fn resolve(&self, roots: &[String]) -> Result<ResolvedSet> {
        let start_time = std::time::Instant::now();
        let mut visited = VisitedSet::new();

        for root in roots {
            self.resolve_full_tree(root, &mut visited)?;
        }

        let resolved = visited.into_resolved();
        pacchetti_logger::debug(
            &format!(
                "Resolved {} packages from {} roots in {:?}",
                resolved.len(),
                roots.len(),
                start_time.elapsed()
            ),
            self.debug,
        );

        Ok(resolved)
    }

    fn resolve_full_tree(&self, name: &str, visited: &mut VisitedSet) -> Result<()> {
        if !visited.insert(name) {
            return Ok(()); // cycle or diamond
        }

        let dependencies = package_dependencies(self.config, name)?;
        pacchetti_logger::debug(
            &format!("{name} -> [{}]", dependencies.join(", ")),
            self.debug,
        );

        for dep in &dependencies {
            self.resolve_full_tree(dep, visited)?;
        }

        Ok(())
    }
}
