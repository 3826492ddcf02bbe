//! clap definitions for the `unpak` command tree.

use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "unpak")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract package contents
    Extract(ExtractArgs),
    /// Probe a package to determine its archive format
    Probe(ProbeArgs),
}

#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Path to the package file
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Output directory (default: current directory)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct ProbeArgs {
    /// Path to the package file
    #[arg(value_name = "PACKAGE")]
    pub path: PathBuf,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extract_default_output_dir() {
        let cli = Cli::try_parse_from(["unpak", "extract", "setup.msi"]).unwrap();
        match cli.command {
            Commands::Extract(args) => {
                assert_eq!(args.archive, PathBuf::from("setup.msi"));
                assert!(args.output_dir.is_none());
            }
            Commands::Probe(_) => panic!("parsed the wrong subcommand"),
        }
    }

    #[test]
    fn test_parse_probe_json_flag() {
        let cli = Cli::try_parse_from(["unpak", "probe", "--json", "pkg.zip"]).unwrap();
        match cli.command {
            Commands::Probe(args) => {
                assert!(args.json);
                assert_eq!(args.path, PathBuf::from("pkg.zip"));
            }
            Commands::Extract(_) => panic!("parsed the wrong subcommand"),
        }
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["unpak", "-v", "-q", "probe", "pkg.zip"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["unpak", "extract", "pkg.zip", "--quiet"]).unwrap();
        assert!(cli.quiet);
        assert!(!cli.verbose);
    }
}
