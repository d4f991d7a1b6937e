pub const DESCRIPTION: &str = "Installs PureScript package sets and builds against them";
pub const BIN_NAME: &str = "pacchetti";

/// Directory holding the generated registry and every installed package.
pub const INSTALL_DIR: &str = ".spacchetti";
pub const CONFIG_JSON: &str = "spacchetti.json";
pub const CONFIG_DHALL: &str = "./spacchetti.dhall";

pub const DHALL_TO_JSON: &str = "dhall-to-json";
pub const GIT: &str = "git";

pub const COMPILER: &str = "purs";
pub const COMPILER_SUBCOMMAND: &str = "compile";
pub const PROJECT_GLOBS: &[&str] = &["src/**/*.purs", "test/**/*.purs"];
pub const SOURCE_GLOB_SUFFIX: &str = "src/**/*.purs";

pub const ROOT_DEPENDENCIES_QUERY: &str = "dependencies[]";

pub const MIN_INSTALL_JOBS: usize = 4;
pub const MAX_INSTALL_JOBS: usize = 16;
