//! Content-based archive format detection.
//!
//! Package files routinely carry misleading extensions, so extraction
//! decides the container format from leading magic bytes rather than from
//! the file name.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use crate::Result;
use crate::kind::ArchiveKind;

/// Bytes to read from the head of a file. Covers every signature,
/// including the `ustar` magic at offset 257 inside the first tar header
/// block.
const SNIFF_LEN: u64 = 512;

/// Detects an archive format from the leading bytes of a file.
///
/// Tar detection needs the first 512-byte header block; shorter input only
/// matches the other formats.
#[must_use]
pub fn sniff_bytes(data: &[u8]) -> Option<ArchiveKind> {
    match data {
        // Local file header, or the bare end-of-central-directory record an
        // empty zip starts with.
        [0x50, 0x4B, 0x03, 0x04, ..] | [0x50, 0x4B, 0x05, 0x06, ..] => Some(ArchiveKind::Zip),
        // "7z" signature.
        [0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C, ..] => Some(ArchiveKind::SevenZ),
        [0x1F, 0x8B, ..] => Some(ArchiveKind::TarGz),
        // "BZh".
        [0x42, 0x5A, 0x68, ..] => Some(ArchiveKind::TarBz2),
        [0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00, ..] => Some(ArchiveKind::TarXz),
        [0x28, 0xB5, 0x2F, 0xFD, ..] => Some(ArchiveKind::TarZst),
        _ if is_tar_header(data) => Some(ArchiveKind::Tar),
        _ => None,
    }
}

/// Detects an archive format by reading the head of `reader`.
///
/// The reader is rewound to the start afterwards.
///
/// # Errors
///
/// Returns an error if reading or seeking fails.
pub fn sniff_reader<R: Read + Seek>(reader: &mut R) -> std::io::Result<Option<ArchiveKind>> {
    let mut header = Vec::new();
    reader.by_ref().take(SNIFF_LEN).read_to_end(&mut header)?;
    reader.rewind()?;
    Ok(sniff_bytes(&header))
}

/// Detects the archive format of the file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn sniff_format(path: &Path) -> Result<Option<ArchiveKind>> {
    let mut file = File::open(path)?;
    Ok(sniff_reader(&mut file)?)
}

/// Checks for the POSIX `ustar` magic in a leading tar header block.
///
/// Matches both the POSIX (`ustar\0`) and GNU (`ustar `) spellings; ancient
/// pre-POSIX tars carry no magic at all and are not detected.
fn is_tar_header(data: &[u8]) -> bool {
    data.len() >= 512 && &data[257..262] == b"ustar"
}
