pub mod installer;
pub mod manager;
pub mod types;

pub use installer::PackageInstaller;
pub use manager::InstallManager;
pub use types::{InstallOutcome, InstallSummary};
