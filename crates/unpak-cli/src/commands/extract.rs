//! The `extract` subcommand: unpack a package into a directory.

use crate::cli::ExtractArgs;
use crate::error::add_package_context;
use crate::progress::CliProgress;
use anyhow::Context;
use anyhow::Result;
use std::env;
use std::fs;
use unpak_core::NoopProgress;
use unpak_core::extract_package_with_progress;

pub fn execute(args: &ExtractArgs, quiet: bool) -> Result<()> {
    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };

    fs::create_dir_all(&output_dir).with_context(|| {
        format!(
            "failed to create output directory '{}'",
            output_dir.display()
        )
    })?;
    tracing::debug!("resolved output directory: {}", output_dir.display());

    // Use a progress bar if a TTY is detected and output is not suppressed
    if !quiet && CliProgress::should_show() {
        let mut progress = CliProgress::new("Extracting");
        add_package_context(
            extract_package_with_progress(&args.archive, &output_dir, &mut progress),
            &args.archive,
        )?;
    } else {
        let mut noop = NoopProgress;
        add_package_context(
            extract_package_with_progress(&args.archive, &output_dir, &mut noop),
            &args.archive,
        )?;
    }

    if !quiet {
        println!("Extraction complete: {}", output_dir.display());
    }

    Ok(())
}
