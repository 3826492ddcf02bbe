//! Cabinet archive backend.
//!
//! Cabinets are probed but not extracted; only the counting open lives
//! here.

use std::io::Read;
use std::io::Seek;

use crate::Result;
use crate::error::ArchiveError;

/// Counts the files recorded across all folders of a cabinet.
pub(crate) fn count_entries<R: Read + Seek>(reader: R) -> Result<usize> {
    let cabinet = cab::Cabinet::new(reader)
        .map_err(|e| ArchiveError::InvalidArchive(format!("failed to open cab archive: {e}")))?;
    let count = cabinet
        .folder_entries()
        .map(|folder| folder.file_entries().count())
        .sum();
    Ok(count)
}
