#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    AlreadyPresent,
    FreshlyInstalled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallSummary {
    pub fetched: usize,
    pub already_present: usize,
}

impl InstallSummary {
    pub fn record(&mut self, outcome: InstallOutcome) {
        match outcome {
            InstallOutcome::AlreadyPresent => self.already_present += 1,
            InstallOutcome::FreshlyInstalled => self.fetched += 1,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.fetched + self.already_present
    }

    #[must_use]
    pub fn finish_message(&self) -> String {
        match (self.fetched, self.already_present) {
            (0, 0) => "No dependencies to install".to_string(),
            (0, present) => format!("All {present} dependencies already installed"),
            (fetched, 0) => format!("{fetched} packages fetched and installed"),
            (fetched, present) => format!(
                "{} packages installed ({fetched} fetched, {present} already present)",
                self.total()
            ),
        }
    }
}
