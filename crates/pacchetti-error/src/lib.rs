use std::fmt;

#[derive(Debug)]
pub enum PackageManagerError {
    ConfigLookup(String, String),
    ConfigParse(String, String),
    ConfigGeneration(String),
    FetchFailed(String, String),
    Filesystem(String, String),
    BuildFailed(String),
    Runtime(String),
}

impl fmt::Display for PackageManagerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigLookup(path, reason) => {
                write!(f, "Config lookup failed for '{path}': {reason}")
            }
            Self::ConfigParse(path, reason) => {
                write!(f, "Failed to read registry at {path}: {reason}")
            }
            Self::ConfigGeneration(reason) => {
                write!(f, "Failed to generate registry config: {reason}")
            }
            Self::FetchFailed(name, reason) => {
                write!(f, "Failed to fetch '{name}': {reason}")
            }
            Self::Filesystem(path, reason) => {
                write!(f, "Filesystem error at {path}: {reason}")
            }
            Self::BuildFailed(reason) => {
                write!(f, "Build failed: {reason}")
            }
            Self::Runtime(msg) => {
                write!(f, "Runtime error: {msg}")
            }
        }
    }
}

impl std::error::Error for PackageManagerError {}

pub type Result<T> = std::result::Result<T, PackageManagerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_failing_package() {
        let err = PackageManagerError::FetchFailed("prelude".into(), "exit status 128".into());
        assert_eq!(err.to_string(), "Failed to fetch 'prelude': exit status 128");
    }

    #[test]
    fn test_display_of_lookup_names_the_path() {
        let err = PackageManagerError::ConfigLookup(
            "packages.prelude.version".into(),
            "no matching entry".into(),
        );
        assert_eq!(
            err.to_string(),
            "Config lookup failed for 'packages.prelude.version': no matching entry"
        );
    }
}
