use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use pacchetti_constants::{CONFIG_DHALL, CONFIG_JSON, DHALL_TO_JSON};
use pacchetti_error::{PackageManagerError, Result};

/// Turns the project's Dhall package set into the JSON registry.
pub struct ConfigGenerator {
    program: String,
    input: String,
}

impl ConfigGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::with_program(DHALL_TO_JSON, CONFIG_DHALL)
    }

    #[must_use]
    pub fn with_program(program: &str, input: &str) -> Self {
        Self {
            program: program.to_string(),
            input: input.to_string(),
        }
    }

    /// Returns the registry path, generating it only when it does not exist yet.
    pub fn ensure(&self, project_dir: &Path, install_dir: &Path, debug: bool) -> Result<PathBuf> {
        let config_path = install_dir.join(CONFIG_JSON);

        if config_path.exists() {
            pacchetti_logger::debug(
                &format!("Reusing registry at {}", config_path.display()),
                debug,
            );
            return Ok(config_path);
        }

        pacchetti_logger::status("Generating package registry...");
        pacchetti_logger::debug(
            &format!("{} <<< {}", self.program, self.input),
            debug,
        );

        let json = self.run(project_dir)?;

        serde_json::from_slice::<serde_json::Value>(&json).map_err(|e| {
            PackageManagerError::ConfigGeneration(format!(
                "{} produced invalid JSON: {e}",
                self.program
            ))
        })?;

        // Staged beside the target and renamed: later runs trust any registry they find.
        let generation_err = |e: std::io::Error| {
            PackageManagerError::ConfigGeneration(format!(
                "cannot write {}: {e}",
                config_path.display()
            ))
        };
        let mut staged = tempfile::NamedTempFile::new_in(install_dir).map_err(generation_err)?;
        staged.write_all(&json).map_err(generation_err)?;
        staged
            .persist(&config_path)
            .map_err(|e| generation_err(e.error))?;

        pacchetti_logger::success(&format!("Generated {}", config_path.display()));
        Ok(config_path)
    }

    fn run(&self, project_dir: &Path) -> Result<Vec<u8>> {
        let mut child = Command::new(&self.program)
            .current_dir(project_dir)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                PackageManagerError::ConfigGeneration(format!("cannot run {}: {e}", self.program))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // A program that exits early closes the pipe; its exit status says why.
            let _ = stdin.write_all(self.input.as_bytes());
        }

        let output = child.wait_with_output().map_err(|e| {
            PackageManagerError::ConfigGeneration(format!("{} did not finish: {e}", self.program))
        })?;

        if !output.status.success() {
            return Err(PackageManagerError::ConfigGeneration(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(output.stdout)
    }
}

impl Default for ConfigGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn ensure_config(project_dir: &Path, install_dir: &Path, debug: bool) -> Result<PathBuf> {
    ConfigGenerator::new().ensure(project_dir, install_dir, debug)
}
