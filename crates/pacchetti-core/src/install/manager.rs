use futures::StreamExt;
use futures::stream::FuturesUnordered;
use std::sync::Arc;
use tokio::sync::Semaphore;

use super::installer::PackageInstaller;
use super::types::{InstallOutcome, InstallSummary};
use pacchetti_error::{PackageManagerError, Result};
use pacchetti_resolver::ResolvedSet;

/// Fans one install unit out per resolved package, at most `jobs` at a time.
pub struct InstallManager {
    installer: Arc<PackageInstaller>,
    jobs: usize,
    debug: bool,
}

impl InstallManager {
    #[must_use]
    pub fn new(installer: PackageInstaller, jobs: usize, debug: bool) -> Self {
        Self {
            installer: Arc::new(installer),
            jobs: jobs.max(1),
            debug,
        }
    }

    /// Runs every unit to completion before returning. The first failure to
    /// be observed is the result; siblings still finish and their outcomes
    /// are dropped.
    pub async fn install_all(&self, names: &ResolvedSet) -> Result<InstallSummary> {
        if names.is_empty() {
            return Ok(InstallSummary::default());
        }

        let total = names.len();
        let semaphore = Arc::new(Semaphore::new(self.jobs));

        pacchetti_logger::debug(
            &format!("Launching {total} install units, {} at a time", self.jobs),
            self.debug,
        );

        let mut units: FuturesUnordered<_> = names
            .iter()
            .map(|name| {
                let handle = tokio::spawn(Self::install_unit(
                    Arc::clone(&self.installer),
                    Arc::clone(&semaphore),
                    name.clone(),
                ));
                let name = name.clone();
                async move { (name, handle.await) }
            })
            .collect();

        let mut summary = InstallSummary::default();
        let mut first_error: Option<PackageManagerError> = None;
        let mut completed = 0;

        while let Some((name, joined)) = units.next().await {
            completed += 1;

            let result = joined.unwrap_or_else(|e| {
                Err(PackageManagerError::FetchFailed(
                    name.clone(),
                    format!("install unit aborted: {e}"),
                ))
            });

            match result {
                Ok(outcome) => {
                    summary.record(outcome);
                    pacchetti_logger::progress(&format!("Installed {name}"), completed, total);
                }
                Err(e) if first_error.is_none() => {
                    pacchetti_logger::error(&e.to_string());
                    first_error = Some(e);
                }
                Err(e) => {
                    pacchetti_logger::warn(&format!("Also failed: {e}"));
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(summary),
        }
    }

    async fn install_unit(
        installer: Arc<PackageInstaller>,
        semaphore: Arc<Semaphore>,
        name: String,
    ) -> Result<InstallOutcome> {
        let _permit = semaphore
            .acquire_owned()
            .await
            .map_err(|e| PackageManagerError::Runtime(e.to_string()))?;

        let unit_name = name.clone();
        tokio::task::spawn_blocking(move || installer.install(&unit_name))
            .await
            .map_err(|e| {
                PackageManagerError::FetchFailed(name, format!("install unit panicked: {e}"))
            })?
    }
}
