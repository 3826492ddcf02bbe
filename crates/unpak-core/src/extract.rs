//! Streaming package extraction with per-entry progress.

use std::fs;
use std::fs::File;
use std::io;
use std::io::Read;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use crate::Result;
use crate::entry::ArchiveEntry;
use crate::error::ArchiveError;
use crate::formats;
use crate::progress::NoopProgress;
use crate::progress::ProgressSink;
use crate::progress::ProgressState;
use crate::sniff;

/// Extracts the package at `archive` into `dest` without progress reporting.
///
/// Equivalent to [`extract_package_with_progress`] with a [`NoopProgress`]
/// sink.
///
/// # Errors
///
/// See [`extract_package_with_progress`].
pub fn extract_package<P: AsRef<Path>, Q: AsRef<Path>>(archive: P, dest: Q) -> Result<()> {
    extract_package_with_progress(archive, dest, &mut NoopProgress)
}

/// Extracts the package at `archive` into `dest`, reporting per-entry
/// progress to `sink`.
///
/// The container format is decided by the file's leading bytes, never its
/// extension, and must be one of the extractable kinds (zip, 7z, the tar
/// family). The full entry list is read before the first write, so the total
/// in the very first notification is already exact.
///
/// File entries are written under `dest` with their relative paths,
/// overwriting anything already there, and their recorded modification times
/// are restored. Directory and link entries are not materialized (parent
/// directories appear as files need them) but still count toward progress,
/// as do entries skipped because their path is absolute or climbs out of
/// `dest`.
///
/// After every processed entry both sink hooks fire, `on_status_updated`
/// then `on_completed`. The first failed write aborts the operation: the
/// error propagates, `dest` keeps whatever was already written, and no
/// further hooks fire.
///
/// # Errors
///
/// Returns [`ArchiveError::UnsupportedFormat`] when the leading bytes match
/// no extractable container, [`ArchiveError::InvalidArchive`] when the
/// container fails to parse, and [`ArchiveError::Io`] when the archive
/// cannot be read or an extracted file cannot be written.
pub fn extract_package_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    archive: P,
    dest: Q,
    sink: &mut dyn ProgressSink,
) -> Result<()> {
    let archive = archive.as_ref();
    let dest = dest.as_ref();

    tracing::info!("Extracting {} to {}", archive.display(), dest.display());

    let kind = sniff::sniff_format(archive)?.ok_or(ArchiveError::UnsupportedFormat)?;
    let mut reader = formats::open_reader(archive, kind)?;

    let entries = reader.entries()?;
    let mut state = ProgressState::new(entries.len());

    reader.visit(dest, &mut |entry, stream| {
        if entry.is_file()
            && let Some(relative) = sanitize_entry_path(&entry.path)
        {
            write_entry(&dest.join(relative), entry, stream)?;
        }
        state.advance();
        sink.on_status_updated(state);
        sink.on_completed(state);
        Ok(())
    })
}

/// Writes one file entry to `target`, creating parent directories and
/// overwriting any existing file, then restores the recorded mtime.
fn write_entry(target: &Path, entry: &ArchiveEntry, stream: &mut dyn Read) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(target)?;
    io::copy(stream, &mut file)?;
    drop(file);

    if let Some(modified) = entry.modified {
        filetime::set_file_mtime(target, modified)?;
    }
    Ok(())
}

/// Lexically resolves an entry path to a relative path that stays under the
/// destination.
///
/// `.` components are dropped and `..` pops the previous component. Returns
/// `None` for paths that are absolute, climb past their start, or resolve to
/// nothing; such entries are skipped. The check never touches the
/// filesystem.
fn sanitize_entry_path(path: &Path) -> Option<PathBuf> {
    let mut resolved = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                if !resolved.pop() {
                    return None;
                }
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    if resolved.as_os_str().is_empty() {
        None
    } else {
        Some(resolved)
    }
}
