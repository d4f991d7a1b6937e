pub mod path_resolver;
pub mod store_manager;

pub use path_resolver::PathResolver;
pub use store_manager::StoreManager;

pub use path_resolver::{source_glob, target_path};
pub use store_manager::ensure_install_dir;
