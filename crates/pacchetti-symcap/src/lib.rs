use pacchetti_constants::{MAX_INSTALL_JOBS, MIN_INSTALL_JOBS};
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct SystemCapabilities {
    pub cpu_cores: usize,
    pub logical_cores: usize,
    pub optimal_parallel_installs: usize,
}

static SYSTEM_CAPS: OnceLock<SystemCapabilities> = OnceLock::new();

impl SystemCapabilities {
    pub fn get() -> &'static Self {
        SYSTEM_CAPS.get_or_init(|| Self::from_cores(num_cpus::get_physical(), num_cpus::get()))
    }

    /// Installs mostly wait on `git`, so the ceiling runs ahead of the core count.
    #[must_use]
    pub fn from_cores(cpu_cores: usize, logical_cores: usize) -> Self {
        let optimal_parallel_installs =
            (logical_cores * 2).clamp(MIN_INSTALL_JOBS, MAX_INSTALL_JOBS);

        Self {
            cpu_cores,
            logical_cores,
            optimal_parallel_installs,
        }
    }

    /// Never hand out more permits than there are packages to install.
    #[must_use]
    pub fn install_jobs_for(&self, requested: Option<usize>, package_count: usize) -> usize {
        let jobs = requested.unwrap_or(self.optimal_parallel_installs).max(1);
        jobs.min(package_count.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_machine_gets_minimum() {
        let caps = SystemCapabilities::from_cores(1, 1);
        assert_eq!(caps.optimal_parallel_installs, MIN_INSTALL_JOBS);
    }

    #[test]
    fn test_large_machine_is_capped() {
        let caps = SystemCapabilities::from_cores(32, 64);
        assert_eq!(caps.optimal_parallel_installs, MAX_INSTALL_JOBS);
    }

    #[test]
    fn test_requested_jobs_win_over_default() {
        let caps = SystemCapabilities::from_cores(4, 8);
        assert_eq!(caps.install_jobs_for(Some(2), 50), 2);
        assert_eq!(caps.install_jobs_for(None, 50), 16);
    }

    #[test]
    fn test_jobs_never_exceed_package_count() {
        let caps = SystemCapabilities::from_cores(4, 8);
        assert_eq!(caps.install_jobs_for(None, 3), 3);
        assert_eq!(caps.install_jobs_for(Some(0), 0), 1);
    }
}
