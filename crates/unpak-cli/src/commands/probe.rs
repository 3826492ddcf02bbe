//! The `probe` subcommand: identify a package's container format.

use crate::cli::ProbeArgs;
use crate::error::add_package_context;
use anyhow::Result;
use anyhow::bail;
use serde::Serialize;
use unpak_core::probe_package;

/// JSON envelope for probe results.
#[derive(Serialize)]
struct ProbeOutput {
    operation: &'static str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<ProbeData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
}

#[derive(Serialize)]
struct ProbeData {
    path: String,
    format: &'static str,
    files: usize,
}

pub fn execute(args: &ProbeArgs, quiet: bool) -> Result<()> {
    let probed = add_package_context(probe_package(&args.path), &args.path)?;

    let Some(archive) = probed else {
        if args.json && !quiet {
            let output = ProbeOutput {
                operation: "probe",
                status: "error",
                data: None,
                error: Some("format undetermined"),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        bail!(
            "format undetermined: no known archive format opened '{}'",
            args.path.display()
        );
    };

    if quiet {
        return Ok(());
    }

    if args.json {
        let output = ProbeOutput {
            operation: "probe",
            status: "success",
            data: Some(ProbeData {
                path: args.path.display().to_string(),
                format: archive.kind().name(),
                files: archive.file_count(),
            }),
            error: None,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{}: {} ({} files)",
            args.path.display(),
            archive.kind(),
            archive.file_count()
        );
    }

    Ok(())
}
