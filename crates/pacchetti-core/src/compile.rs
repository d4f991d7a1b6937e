use std::path::{Path, PathBuf};
use std::process::Command;

use pacchetti_constants::{COMPILER, COMPILER_SUBCOMMAND, PROJECT_GLOBS};
use pacchetti_error::{PackageManagerError, Result};

/// Compiles the project against the dependency source globs.
pub trait BuildTool {
    fn compile(&self, dependency_globs: &[String]) -> Result<()>;
}

pub struct PursCompiler {
    program: String,
    project_dir: PathBuf,
    debug: bool,
}

impl PursCompiler {
    #[must_use]
    pub fn new(project_dir: &Path, debug: bool) -> Self {
        Self::with_program(COMPILER, project_dir, debug)
    }

    #[must_use]
    pub fn with_program(program: &str, project_dir: &Path, debug: bool) -> Self {
        Self {
            program: program.to_string(),
            project_dir: project_dir.to_path_buf(),
            debug,
        }
    }

    #[must_use]
    pub fn args(dependency_globs: &[String]) -> Vec<String> {
        std::iter::once(COMPILER_SUBCOMMAND)
            .chain(PROJECT_GLOBS.iter().copied())
            .map(str::to_string)
            .chain(dependency_globs.iter().cloned())
            .collect()
    }
}

impl BuildTool for PursCompiler {
    fn compile(&self, dependency_globs: &[String]) -> Result<()> {
        let args = Self::args(dependency_globs);

        if self.debug {
            pacchetti_logger::shell(&format!("{} {}", self.program, args.join(" ")));
        }

        // Compiler output goes straight to the user.
        let status = Command::new(&self.program)
            .args(&args)
            .current_dir(&self.project_dir)
            .status()
            .map_err(|e| {
                PackageManagerError::BuildFailed(format!("cannot run {}: {e}", self.program))
            })?;

        if !status.success() {
            return Err(PackageManagerError::BuildFailed(format!(
                "{} exited with {status}",
                self.program
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_put_project_globs_first() {
        let args = PursCompiler::args(&[".spacchetti/prelude/v4.1.0/src/**/*.purs".to_string()]);
        assert_eq!(
            args,
            vec![
                "compile",
                "src/**/*.purs",
                "test/**/*.purs",
                ".spacchetti/prelude/v4.1.0/src/**/*.purs",
            ]
        );
    }

    #[test]
    fn test_missing_compiler_is_a_build_error() {
        let dir = tempfile::tempdir().unwrap();
        let compiler = PursCompiler::with_program("pacchetti-no-such-purs", dir.path(), false);
        assert!(matches!(
            compiler.compile(&[]),
            Err(PackageManagerError::BuildFailed(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_status_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let failing = PursCompiler::with_program("false", dir.path(), false);
        let err = failing.compile(&[]).unwrap_err();
        assert!(err.to_string().contains("false exited with"));

        let passing = PursCompiler::with_program("true", dir.path(), false);
        assert!(passing.compile(&[]).is_ok());
    }
}
