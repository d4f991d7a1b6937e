pub mod generate;
pub mod provider;
pub mod query;
pub mod registry;

pub use generate::{ConfigGenerator, ensure_config};
pub use provider::{ConfigProvider, ConfigValue, JsonConfig};
pub use query::QueryPath;
pub use registry::{PackageRecord, package_dependencies, package_property, root_dependencies};
