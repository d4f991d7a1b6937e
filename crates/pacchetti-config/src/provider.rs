use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;

use crate::query::QueryPath;
use pacchetti_error::{PackageManagerError, Result};

/// Result of a registry query: a scalar for plain paths, a list for `[]` paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Str(String),
    List(Vec<String>),
}

impl ConfigValue {
    pub fn into_string(self, path: impl fmt::Display) -> Result<String> {
        match self {
            Self::Str(value) => Ok(value),
            Self::List(_) => Err(PackageManagerError::ConfigLookup(
                path.to_string(),
                "expected a string, found a list".to_string(),
            )),
        }
    }

    pub fn into_list(self, path: impl fmt::Display) -> Result<Vec<String>> {
        match self {
            Self::List(values) => Ok(values),
            Self::Str(_) => Err(PackageManagerError::ConfigLookup(
                path.to_string(),
                "expected a list, found a string".to_string(),
            )),
        }
    }
}

/// Read-only key-path access to the package registry.
pub trait ConfigProvider: Send + Sync {
    fn query_path(&self, path: &QueryPath) -> Result<ConfigValue>;

    /// Parses a textual path such as `packages.prelude.version` first.
    fn query(&self, raw: &str) -> Result<ConfigValue> {
        self.query_path(&raw.parse()?)
    }
}

/// Registry backed by the JSON document that `dhall-to-json` produces.
#[derive(Debug, Clone)]
pub struct JsonConfig {
    document: Value,
}

impl JsonConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            let reason = if e.kind() == io::ErrorKind::NotFound {
                "file does not exist".to_string()
            } else {
                e.to_string()
            };
            PackageManagerError::ConfigParse(path.display().to_string(), reason)
        })?;

        let document = serde_json::from_str(&content).map_err(|e| {
            PackageManagerError::ConfigParse(path.display().to_string(), e.to_string())
        })?;

        Ok(Self { document })
    }

    #[must_use]
    pub const fn from_value(document: Value) -> Self {
        Self { document }
    }

    fn resolve<'a>(&'a self, path: &QueryPath) -> Option<&'a Value> {
        path.segments
            .iter()
            .try_fold(&self.document, |value, segment| value.get(segment.as_str()))
            .filter(|value| !value.is_null())
    }
}

impl ConfigProvider for JsonConfig {
    fn query_path(&self, path: &QueryPath) -> Result<ConfigValue> {
        let lookup_err =
            |reason: &str| PackageManagerError::ConfigLookup(path.to_string(), reason.to_string());

        let value = self
            .resolve(path)
            .ok_or_else(|| lookup_err("no matching entry"))?;

        if path.iterate {
            let items = value
                .as_array()
                .ok_or_else(|| lookup_err("cannot iterate over a non-array value"))?;

            items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(str::to_string)
                        .ok_or_else(|| lookup_err("array contains a non-string value"))
                })
                .collect::<Result<Vec<_>>>()
                .map(ConfigValue::List)
        } else {
            value
                .as_str()
                .map(|s| ConfigValue::Str(s.to_string()))
                .ok_or_else(|| lookup_err("value is not a string"))
        }
    }
}
