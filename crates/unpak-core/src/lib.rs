//! Package archive probing and extraction.
//!
//! `unpak-core` determines the real format of installer packages (`.msi`,
//! `.exe`, `.zip`) by trial-opening every candidate format against the
//! file's contents, and extracts the supported containers (zip, 7z, the tar
//! family) with per-entry progress reporting.
//!
//! # Examples
//!
//! ```no_run
//! use unpak_core::extract_package;
//! use unpak_core::probe_package;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! if let Some(probed) = probe_package("installer.exe")? {
//!     println!("{} package with {} files", probed.kind(), probed.file_count());
//! }
//! extract_package("bundle.zip", "/tmp/bundle")?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod entry;
pub mod error;
pub mod extract;
mod formats;
pub mod kind;
pub mod probe;
pub mod progress;
pub mod sniff;
pub mod test_utils;

// Re-export main API types
pub use entry::ArchiveEntry;
pub use entry::EntryKind;
pub use error::ArchiveError;
pub use error::Result;
pub use extract::extract_package;
pub use extract::extract_package_with_progress;
pub use kind::ArchiveKind;
pub use probe::ProbedArchive;
pub use probe::probe_package;
pub use progress::NoopProgress;
pub use progress::ProgressSink;
pub use progress::ProgressState;
pub use sniff::sniff_format;
