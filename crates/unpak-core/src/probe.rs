//! Trial-opening packages to determine their real archive format.
//!
//! Package extensions lie: `.exe` installers are frequently cabinets, MSI
//! packages are OLE compound files, and vendors ship 7z payloads renamed to
//! `.zip`. Probing therefore treats the extension only as a hint for the
//! trial order and lets the file's actual contents decide.

use std::fs::File;
use std::io::Seek;
use std::path::Path;
use std::path::PathBuf;

use crate::Result;
use crate::error::ArchiveError;
use crate::formats;
use crate::kind::ArchiveKind;

/// Outcome of trial-opening a file as a single candidate format.
///
/// A candidate either claims the file (opened it and found entries) or
/// rejects it. Open errors and empty opens both land in [`Rejected`]; probing
/// never surfaces a per-candidate failure to the caller.
///
/// [`Rejected`]: ProbeAttempt::Rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProbeAttempt {
    /// The candidate opened the file and found this many contained files.
    Opened { files: usize },
    /// The candidate failed to open the file, or opened it and found nothing.
    Rejected,
}

/// A package whose format has been determined by probing.
///
/// Holds the open file handle, rewound to the start, so callers can keep
/// reading without re-opening the path. Dropping the value releases the
/// handle.
#[derive(Debug)]
pub struct ProbedArchive {
    kind: ArchiveKind,
    file_count: usize,
    path: PathBuf,
    file: File,
}

impl ProbedArchive {
    /// Returns the format that claimed the file.
    #[must_use]
    pub const fn kind(&self) -> ArchiveKind {
        self.kind
    }

    /// Returns the number of contained files the claiming format reported.
    #[must_use]
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Returns the probed path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consumes the handle, returning the open file rewound to the start.
    #[must_use]
    pub fn into_file(self) -> File {
        self.file
    }
}

/// Probes `path` for a supported package format.
///
/// The extension (case-insensitive) picks the formats to try first:
/// `.msi` leads with OLE compound then cabinet, `.exe` with PE, NSIS then
/// cabinet, `.zip` with zip. Every remaining format follows in
/// [`ArchiveKind::ALL`] order, so a mislabeled file is still recognized as
/// long as some format can open it. The first candidate that opens the file
/// and reports a non-zero file count claims it.
///
/// Returns `Ok(None)` when every candidate rejects the file — the format is
/// undetermined, which callers may treat as "not an archive".
///
/// # Errors
///
/// Returns [`ArchiveError::UnsupportedExtension`] when the extension is
/// outside the known package set, before any file I/O, and
/// [`ArchiveError::Io`] when the path itself cannot be opened.
pub fn probe_package<P: AsRef<Path>>(path: P) -> Result<Option<ProbedArchive>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let Some(candidates) = ArchiveKind::probe_order(&extension) else {
        return Err(ArchiveError::unsupported_extension(extension));
    };

    let mut file = File::open(path)?;
    for kind in candidates {
        if let ProbeAttempt::Opened { files } = attempt_open(&mut file, kind) {
            file.rewind()?;
            return Ok(Some(ProbedArchive {
                kind,
                file_count: files,
                path: path.to_path_buf(),
                file,
            }));
        }
    }

    Ok(None)
}

/// Rewinds the handle and tries to open it as `kind`, counting entries.
fn attempt_open(file: &mut File, kind: ArchiveKind) -> ProbeAttempt {
    if file.rewind().is_err() {
        return ProbeAttempt::Rejected;
    }
    match formats::count_entries(file, kind) {
        Ok(0) | Err(_) => ProbeAttempt::Rejected,
        Ok(files) => ProbeAttempt::Opened { files },
    }
}
