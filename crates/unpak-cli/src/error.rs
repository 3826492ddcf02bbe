//! Maps unpak-core's typed errors onto user-facing CLI errors.
//!
//! Library errors stay structured; here they pick up the offending path
//! and a HINT line so the terminal message says what to try next.

use anyhow::Result;
use anyhow::anyhow;
use std::path::Path;
use unpak_core::ArchiveError;

/// Converts `ArchiveError` to user-friendly anyhow error with context
pub fn convert_archive_error(err: ArchiveError, package: &Path) -> anyhow::Error {
    match err {
        ArchiveError::UnsupportedExtension { extension } => {
            anyhow!(
                "Unsupported package extension {:?} for '{}'\n\
                 HINT: Probing only accepts .msi, .exe, and .zip packages.",
                extension,
                package.display()
            )
        }
        ArchiveError::UnsupportedFormat => {
            anyhow!(
                "Archive format not recognized: {}\n\
                 HINT: Supported containers: zip, 7z, tar, tar.gz, tar.bz2, tar.xz, tar.zst",
                package.display()
            )
        }
        ArchiveError::InvalidArchive(reason) => {
            anyhow!(
                "Invalid archive '{}': {}\n\
                 HINT: The archive may be corrupted or truncated.",
                package.display(),
                reason
            )
        }
        ArchiveError::Io(io_err) => {
            anyhow!(
                "I/O error while processing '{}': {}",
                package.display(),
                io_err
            )
        }
    }
}

/// Adds context to a core result about a package operation
pub fn add_package_context<T>(
    result: Result<T, ArchiveError>,
    package: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_archive_error(e, package))
}
