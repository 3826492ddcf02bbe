//! Format backends for probing and extraction.
//!
//! Each backend offers a counting open used by probing; the extractable
//! formats additionally implement [`EntryReader`] for the extraction loop.

pub(crate) mod cab;
pub(crate) mod compound;
pub(crate) mod sevenz;
pub(crate) mod tar;
pub(crate) mod zip;

use std::io::Read;
use std::io::Seek;
use std::path::Path;

use crate::Result;
use crate::entry::ArchiveEntry;
use crate::error::ArchiveError;
use crate::kind::ArchiveKind;

use self::tar::TarCodec;

/// Callback receiving each entry's metadata and byte stream during a
/// [`EntryReader::visit`] walk.
pub(crate) type EntryVisitor<'a> = dyn FnMut(&ArchiveEntry, &mut dyn Read) -> Result<()> + 'a;

/// An opened archive that can list its entries up front and then stream
/// them in order.
pub(crate) trait EntryReader {
    /// Lists every entry in the archive, in archive order.
    fn entries(&mut self) -> Result<Vec<ArchiveEntry>>;

    /// Walks the archive in order, handing each entry and its content
    /// stream to `visitor`. Directory and link entries are visited with an
    /// empty stream.
    ///
    /// `dest` is forwarded to backends whose underlying library needs the
    /// destination during the walk; it does not cause any writes by itself.
    fn visit(&mut self, dest: &Path, visitor: &mut EntryVisitor<'_>) -> Result<()>;
}

// `Result::unwrap_err` in tests requires the success type to be `Debug`.
#[cfg(test)]
impl std::fmt::Debug for dyn EntryReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("EntryReader")
    }
}

/// Opens an extraction backend for `kind`.
pub(crate) fn open_reader(path: &Path, kind: ArchiveKind) -> Result<Box<dyn EntryReader>> {
    Ok(match kind {
        ArchiveKind::Zip => Box::new(zip::ZipReader::open(path)?),
        ArchiveKind::SevenZ => Box::new(sevenz::SevenZReader::open(path)?),
        ArchiveKind::Tar => Box::new(tar::TarReader::new(path, TarCodec::Plain)),
        ArchiveKind::TarGz => Box::new(tar::TarReader::new(path, TarCodec::Gzip)),
        ArchiveKind::TarBz2 => Box::new(tar::TarReader::new(path, TarCodec::Bzip2)),
        ArchiveKind::TarXz => Box::new(tar::TarReader::new(path, TarCodec::Xz)),
        ArchiveKind::TarZst => Box::new(tar::TarReader::new(path, TarCodec::Zstd)),
        ArchiveKind::Cab | ArchiveKind::Compound | ArchiveKind::Pe | ArchiveKind::Nsis => {
            return Err(ArchiveError::UnsupportedFormat);
        }
    })
}

/// Counts the entries `reader` contains when opened as `kind`.
///
/// The reader must be positioned at the start; its position afterwards is
/// unspecified. Probing rewinds between attempts.
pub(crate) fn count_entries<R: Read + Seek>(reader: &mut R, kind: ArchiveKind) -> Result<usize> {
    match kind {
        ArchiveKind::Zip => zip::count_entries(&mut *reader),
        ArchiveKind::Cab => cab::count_entries(&mut *reader),
        ArchiveKind::Compound => compound::count_entries(&mut *reader),
        ArchiveKind::SevenZ => sevenz::count_entries(reader),
        ArchiveKind::Tar => tar::count_entries(&mut *reader, TarCodec::Plain),
        ArchiveKind::TarGz => tar::count_entries(&mut *reader, TarCodec::Gzip),
        ArchiveKind::TarBz2 => tar::count_entries(&mut *reader, TarCodec::Bzip2),
        ArchiveKind::TarXz => tar::count_entries(&mut *reader, TarCodec::Xz),
        ArchiveKind::TarZst => tar::count_entries(&mut *reader, TarCodec::Zstd),
        // No reader backs these kinds; opening as them never succeeds.
        ArchiveKind::Pe | ArchiveKind::Nsis => Err(ArchiveError::UnsupportedFormat),
    }
}
