//! Archive entry metadata.

use std::path::PathBuf;

use filetime::FileTime;

/// Classification of an archive entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Regular file with contents.
    File,
    /// Directory.
    Directory,
    /// Symbolic link.
    Symlink,
    /// Hard link to another entry.
    Hardlink,
}

/// Metadata for a single archive entry, as recorded in the archive.
///
/// Entries are listed before extraction begins, so the archive's total
/// entry count is known up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Entry path relative to the archive root.
    pub path: PathBuf,

    /// What kind of entry this is.
    pub kind: EntryKind,

    /// Uncompressed size in bytes.
    pub size: u64,

    /// Recorded modification time, when the format stores one.
    pub modified: Option<FileTime>,
}

impl ArchiveEntry {
    /// Returns `true` if this entry is a regular file.
    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self.kind, EntryKind::File)
    }

    /// Returns `true` if this entry is a directory.
    #[must_use]
    pub const fn is_directory(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kind_helpers() {
        let file = ArchiveEntry {
            path: PathBuf::from("docs/readme.txt"),
            kind: EntryKind::File,
            size: 42,
            modified: None,
        };
        assert!(file.is_file());
        assert!(!file.is_directory());

        let dir = ArchiveEntry {
            path: PathBuf::from("docs"),
            kind: EntryKind::Directory,
            size: 0,
            modified: None,
        };
        assert!(dir.is_directory());
        assert!(!dir.is_file());
    }

    #[test]
    fn test_modified_time_round_trip() {
        let mtime = FileTime::from_unix_time(1_600_000_000, 0);
        let entry = ArchiveEntry {
            path: PathBuf::from("a.bin"),
            kind: EntryKind::File,
            size: 1,
            modified: Some(mtime),
        };
        assert_eq!(entry.modified, Some(mtime));
    }
}
