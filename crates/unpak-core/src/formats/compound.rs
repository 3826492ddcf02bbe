//! Compound File Binary (OLE) backend, the container behind MSI packages.
//!
//! Compound files are probed but not extracted; only the counting open
//! lives here.

use std::io::Read;
use std::io::Seek;

use crate::Result;
use crate::error::ArchiveError;

/// Counts the streams in a compound file.
///
/// Storages (the directory-like nodes) are not counted, so a container
/// holding nothing but its root storage counts as empty.
pub(crate) fn count_entries<R: Read + Seek>(reader: R) -> Result<usize> {
    let compound = cfb::CompoundFile::open(reader)
        .map_err(|e| ArchiveError::InvalidArchive(format!("failed to open compound file: {e}")))?;
    Ok(compound.walk().filter(cfb::Entry::is_stream).count())
}
