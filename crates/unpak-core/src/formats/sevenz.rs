//! 7z archive backend.
//!
//! Entry metadata comes from the archive header read at open time; content
//! is streamed through the library's extraction callback during
//! [`EntryReader::visit`].

use std::fs::File;
use std::io::Read;
use std::io::Seek;
use std::path::Path;
use std::path::PathBuf;

use sevenz_rust2::Archive;
use sevenz_rust2::Password;

use crate::Result;
use crate::entry::ArchiveEntry;
use crate::entry::EntryKind;
use crate::error::ArchiveError;

use super::EntryReader;
use super::EntryVisitor;

/// 7z reader with cached entry metadata.
pub(crate) struct SevenZReader {
    source: File,
    entries: Vec<ArchiveEntry>,
}

impl SevenZReader {
    /// Opens the 7z archive at `path` and caches its entry table.
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let mut source = File::open(path)?;
        let password = Password::empty();
        let archive = Archive::read(&mut source, &password)
            .map_err(|e| ArchiveError::InvalidArchive(format!("failed to open 7z archive: {e}")))?;

        let entries = archive.files.iter().map(entry_metadata).collect();
        source.rewind()?;

        Ok(Self { source, entries })
    }
}

impl EntryReader for SevenZReader {
    fn entries(&mut self) -> Result<Vec<ArchiveEntry>> {
        Ok(self.entries.clone())
    }

    fn visit(&mut self, dest: &Path, visitor: &mut EntryVisitor<'_>) -> Result<()> {
        self.source.rewind()?;

        // The library surfaces callback errors as its own error type, so a
        // failure from the visitor is stashed and restored afterwards to
        // keep its original kind.
        let mut failure: Option<ArchiveError> = None;
        let extract_fn = |entry: &sevenz_rust2::ArchiveEntry,
                          reader: &mut dyn Read,
                          _dest_dir: &PathBuf|
         -> std::result::Result<bool, sevenz_rust2::Error> {
            let metadata = entry_metadata(entry);
            match visitor(&metadata, reader) {
                Ok(()) => Ok(true),
                Err(e) => {
                    failure = Some(e);
                    Err(sevenz_rust2::Error::Other("extraction aborted".into()))
                }
            }
        };

        let result = sevenz_rust2::decompress_with_extract_fn(&mut self.source, dest, extract_fn);
        if let Some(err) = failure {
            return Err(err);
        }
        result?;
        Ok(())
    }
}

/// Counts entries from the archive header.
pub(crate) fn count_entries<R: Read + Seek>(reader: &mut R) -> Result<usize> {
    let password = Password::empty();
    let archive = Archive::read(reader, &password)
        .map_err(|e| ArchiveError::InvalidArchive(format!("failed to open 7z archive: {e}")))?;
    Ok(archive.files.len())
}

fn entry_metadata(entry: &sevenz_rust2::ArchiveEntry) -> ArchiveEntry {
    ArchiveEntry {
        path: PathBuf::from(&entry.name),
        kind: if entry.is_directory() {
            EntryKind::Directory
        } else {
            EntryKind::File
        },
        size: entry.size,
        // The backend does not expose per-entry modification times.
        modified: None,
    }
}

impl From<sevenz_rust2::Error> for ArchiveError {
    fn from(err: sevenz_rust2::Error) -> Self {
        Self::InvalidArchive(format!("7z error: {err}"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::test_utils::load_fixture;

    #[test]
    fn test_count_entries_single() {
        let data = load_fixture("single.7z");
        assert_eq!(count_entries(&mut Cursor::new(data)).unwrap(), 1);
    }

    #[test]
    fn test_count_entries_empty_file_archive() {
        // A zero-length member still counts as an entry.
        let data = load_fixture("empty-file.7z");
        assert_eq!(count_entries(&mut Cursor::new(data)).unwrap(), 1);
    }

    #[test]
    fn test_count_entries_rejects_truncated_signature() {
        let data = vec![0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C];
        let result = count_entries(&mut Cursor::new(data));
        assert!(matches!(result, Err(ArchiveError::InvalidArchive(_))));
    }

    #[test]
    fn test_count_entries_rejects_garbage() {
        let result = count_entries(&mut Cursor::new(b"definitely not 7z".to_vec()));
        assert!(matches!(result, Err(ArchiveError::InvalidArchive(_))));
    }

    #[test]
    fn test_entries_metadata() {
        let data = load_fixture("single.7z");
        let mut temp = NamedTempFile::with_suffix(".7z").unwrap();
        temp.write_all(&data).unwrap();

        let mut reader = SevenZReader::open(temp.path()).unwrap();
        let entries = reader.entries().unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, PathBuf::from("a.txt"));
        assert_eq!(entries[0].kind, EntryKind::File);
        assert_eq!(entries[0].size, 5);
        assert_eq!(entries[0].modified, None);
    }

    #[test]
    fn test_visit_streams_contents() {
        let data = load_fixture("single.7z");
        let mut temp = NamedTempFile::with_suffix(".7z").unwrap();
        temp.write_all(&data).unwrap();

        let dest = tempfile::TempDir::new().unwrap();
        let mut reader = SevenZReader::open(temp.path()).unwrap();
        let mut seen = Vec::new();
        reader
            .visit(dest.path(), &mut |entry, stream| {
                let mut contents = String::new();
                stream.read_to_string(&mut contents)?;
                seen.push((entry.path.clone(), contents));
                Ok(())
            })
            .unwrap();

        assert_eq!(seen, vec![(PathBuf::from("a.txt"), "hello".to_string())]);
    }

    #[test]
    fn test_visit_propagates_callback_error() {
        let data = load_fixture("single.7z");
        let mut temp = NamedTempFile::with_suffix(".7z").unwrap();
        temp.write_all(&data).unwrap();

        let dest = tempfile::TempDir::new().unwrap();
        let mut reader = SevenZReader::open(temp.path()).unwrap();
        let result = reader.visit(dest.path(), &mut |_, _| {
            Err(ArchiveError::InvalidArchive("boom".to_string()))
        });

        match result {
            Err(ArchiveError::InvalidArchive(msg)) => assert_eq!(msg, "boom"),
            other => panic!("expected the callback error back, got {other:?}"),
        }
    }
}
