use crate::provider::ConfigProvider;
use crate::query::QueryPath;
use pacchetti_constants::ROOT_DEPENDENCIES_QUERY;
use pacchetti_error::Result;

/// Where a package is fetched from, pinned to one version tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub name: String,
    pub repo: String,
    pub version: String,
}

impl PackageRecord {
    pub fn lookup(config: &dyn ConfigProvider, name: &str) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            repo: package_property(config, name, "repo")?,
            version: package_property(config, name, "version")?,
        })
    }
}

/// Direct dependencies of the project itself.
pub fn root_dependencies(config: &dyn ConfigProvider) -> Result<Vec<String>> {
    config
        .query(ROOT_DEPENDENCIES_QUERY)?
        .into_list(ROOT_DEPENDENCIES_QUERY)
}

pub fn package_dependencies(config: &dyn ConfigProvider, name: &str) -> Result<Vec<String>> {
    let path = QueryPath::from_segments(&["packages", name, "dependencies"], true)?;
    config.query_path(&path)?.into_list(&path)
}

pub fn package_property(config: &dyn ConfigProvider, name: &str, field: &str) -> Result<String> {
    let path = QueryPath::from_segments(&["packages", name, field], false)?;
    let value = config.query_path(&path)?.into_string(&path)?;
    Ok(value.trim().to_string())
}
