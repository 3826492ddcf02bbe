//! ZIP archive backend.

use std::fs::File;
use std::io::Read;
use std::io::Seek;
use std::path::Path;
use std::path::PathBuf;

use filetime::FileTime;

use crate::Result;
use crate::entry::ArchiveEntry;
use crate::entry::EntryKind;
use crate::error::ArchiveError;

use super::EntryReader;
use super::EntryVisitor;

/// ZIP reader backed by the central directory, so the entry count is known
/// without touching file data.
pub(crate) struct ZipReader {
    archive: zip::ZipArchive<File>,
}

impl ZipReader {
    /// Opens the ZIP archive at `path`.
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let archive = zip::ZipArchive::new(file)
            .map_err(|e| ArchiveError::InvalidArchive(format!("failed to open zip archive: {e}")))?;
        Ok(Self { archive })
    }
}

impl EntryReader for ZipReader {
    fn entries(&mut self) -> Result<Vec<ArchiveEntry>> {
        let mut entries = Vec::with_capacity(self.archive.len());
        for index in 0..self.archive.len() {
            let entry = self.archive.by_index(index).map_err(|e| {
                ArchiveError::InvalidArchive(format!("failed to read zip entry: {e}"))
            })?;
            entries.push(entry_metadata(&entry));
        }
        Ok(entries)
    }

    fn visit(&mut self, _dest: &Path, visitor: &mut EntryVisitor<'_>) -> Result<()> {
        for index in 0..self.archive.len() {
            let mut entry = self.archive.by_index(index).map_err(|e| {
                ArchiveError::InvalidArchive(format!("failed to read zip entry: {e}"))
            })?;
            let metadata = entry_metadata(&entry);
            visitor(&metadata, &mut entry)?;
        }
        Ok(())
    }
}

/// Counts entries via the central directory.
pub(crate) fn count_entries<R: Read + Seek>(reader: R) -> Result<usize> {
    let archive = zip::ZipArchive::new(reader)
        .map_err(|e| ArchiveError::InvalidArchive(format!("failed to open zip archive: {e}")))?;
    Ok(archive.len())
}

fn entry_metadata<R: Read + Seek>(entry: &zip::read::ZipFile<'_, R>) -> ArchiveEntry {
    // Entries with escaping names still get listed (they count toward
    // progress); the extraction loop refuses to write them.
    let path = entry
        .enclosed_name()
        .unwrap_or_else(|| PathBuf::from(entry.name()));

    let kind = if entry.is_dir() {
        EntryKind::Directory
    } else if is_symlink(entry) {
        EntryKind::Symlink
    } else {
        EntryKind::File
    };

    #[allow(deprecated)]
    let modified = entry
        .last_modified()
        .and_then(|dt| dt.to_time().ok())
        .map(|t| FileTime::from_unix_time(t.unix_timestamp(), 0));

    ArchiveEntry {
        path,
        kind,
        size: entry.size(),
        modified,
    }
}

fn is_symlink<R: Read + Seek>(entry: &zip::read::ZipFile<'_, R>) -> bool {
    const S_IFLNK: u32 = 0o120_000;
    entry
        .unix_mode()
        .is_some_and(|mode| (mode & S_IFLNK) == S_IFLNK)
}
