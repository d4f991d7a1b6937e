use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pacchetti")]
#[command(version)]
#[command(propagate_version = true)]
#[command(about = pacchetti_constants::DESCRIPTION, long_about = None)]
pub struct Cli {
    /// Project directory containing spacchetti.dhall
    #[arg(short = 'C', long = "project-dir", default_value = ".", global = true)]
    pub project_dir: String,
    /// Enable debug mode for verbose output
    #[arg(long, global = true)]
    pub debug: bool,
    /// Only print errors
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Installs the transitive dependencies of the project
    #[command(alias = "i")]
    Install {
        /// Maximum number of packages fetched at once
        #[arg(
            short = 'j',
            long = "jobs",
            value_parser = RangedU64ValueParser::<usize>::new().range(1..)
        )]
        jobs: Option<usize>,
    },
    /// Prints the source globs of the project
    #[command(alias = "src")]
    Sources,
    /// Builds the project with purs
    #[command(alias = "b")]
    Build {
        /// Install missing dependencies before compiling
        #[arg(short = 'i', long)]
        install: bool,
        /// Maximum number of packages fetched at once
        #[arg(
            short = 'j',
            long = "jobs",
            requires = "install",
            value_parser = RangedU64ValueParser::<usize>::new().range(1..)
        )]
        jobs: Option<usize>,
    },
}
