//! Tar archive backend, covering the plain and compressed variants.

use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

use bzip2::read::BzDecoder;
use filetime::FileTime;
use flate2::read::GzDecoder;
use xz2::read::XzDecoder;
use zstd::stream::read::Decoder as ZstdDecoder;

use crate::Result;
use crate::entry::ArchiveEntry;
use crate::entry::EntryKind;
use crate::error::ArchiveError;

use super::EntryReader;
use super::EntryVisitor;

/// Compression applied to the tar stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TarCodec {
    /// No compression.
    Plain,
    /// Gzip.
    Gzip,
    /// Bzip2.
    Bzip2,
    /// XZ.
    Xz,
    /// Zstandard.
    Zstd,
}

impl TarCodec {
    /// Wraps `reader` in the matching decompressor.
    fn wrap<'a, R: Read + 'a>(self, reader: R) -> Result<Box<dyn Read + 'a>> {
        Ok(match self {
            Self::Plain => Box::new(reader),
            Self::Gzip => Box::new(GzDecoder::new(reader)),
            Self::Bzip2 => Box::new(BzDecoder::new(reader)),
            Self::Xz => Box::new(XzDecoder::new(reader)),
            Self::Zstd => Box::new(ZstdDecoder::new(reader)?),
        })
    }
}

/// Tar reader. The format has no index, so listing and streaming are two
/// separate passes over the file.
pub(crate) struct TarReader {
    path: PathBuf,
    codec: TarCodec,
}

impl TarReader {
    pub(crate) fn new(path: &Path, codec: TarCodec) -> Self {
        Self {
            path: path.to_path_buf(),
            codec,
        }
    }

    fn open_archive(&self) -> Result<tar::Archive<Box<dyn Read>>> {
        let file = File::open(&self.path)?;
        let decoder = self.codec.wrap(BufReader::new(file))?;
        Ok(tar::Archive::new(decoder))
    }
}

impl EntryReader for TarReader {
    fn entries(&mut self) -> Result<Vec<ArchiveEntry>> {
        let mut archive = self.open_archive()?;
        let mut entries = Vec::new();
        for entry in read_entries(&mut archive)? {
            let entry = entry.map_err(|e| {
                ArchiveError::InvalidArchive(format!("failed to read tar entry: {e}"))
            })?;
            entries.push(entry_metadata(&entry)?);
        }
        Ok(entries)
    }

    fn visit(&mut self, _dest: &Path, visitor: &mut EntryVisitor<'_>) -> Result<()> {
        let mut archive = self.open_archive()?;
        for entry in read_entries(&mut archive)? {
            let mut entry = entry.map_err(|e| {
                ArchiveError::InvalidArchive(format!("failed to read tar entry: {e}"))
            })?;
            let metadata = entry_metadata(&entry)?;
            visitor(&metadata, &mut entry)?;
        }
        Ok(())
    }
}

/// Counts entries by walking the whole (decoded) stream; any header error
/// fails the count.
pub(crate) fn count_entries<R: Read>(reader: R, codec: TarCodec) -> Result<usize> {
    let decoder = codec.wrap(BufReader::new(reader))?;
    let mut archive = tar::Archive::new(decoder);
    let mut count = 0;
    for entry in read_entries(&mut archive)? {
        entry.map_err(|e| {
            ArchiveError::InvalidArchive(format!("failed to read tar entry: {e}"))
        })?;
        count += 1;
    }
    Ok(count)
}

fn read_entries<R: Read>(archive: &mut tar::Archive<R>) -> Result<tar::Entries<'_, R>> {
    archive
        .entries()
        .map_err(|e| ArchiveError::InvalidArchive(format!("failed to read tar entries: {e}")))
}

fn entry_metadata<R: Read>(entry: &tar::Entry<'_, R>) -> Result<ArchiveEntry> {
    let path = entry
        .path()
        .map_err(|e| ArchiveError::InvalidArchive(format!("invalid tar entry path: {e}")))?
        .into_owned();

    let kind = match entry.header().entry_type() {
        tar::EntryType::Directory => EntryKind::Directory,
        tar::EntryType::Symlink => EntryKind::Symlink,
        tar::EntryType::Link => EntryKind::Hardlink,
        tar::EntryType::Char | tar::EntryType::Block | tar::EntryType::Fifo => {
            return Err(ArchiveError::InvalidArchive(
                "special files (char/block devices, FIFOs) are not supported".to_string(),
            ));
        }
        // Regular, Continuous, GNU sparse and friends all carry file data.
        _ => EntryKind::File,
    };

    let modified = entry
        .header()
        .mtime()
        .ok()
        .and_then(|t| i64::try_from(t).ok())
        .map(|t| FileTime::from_unix_time(t, 0));

    Ok(ArchiveEntry {
        path,
        kind,
        size: entry.size(),
        modified,
    })
}
