//! Helpers for assembling small package archives in memory.
//!
//! Tests build their fixtures on the fly instead of shipping binary blobs:
//! every helper returns raw archive bytes ready to be written wherever a
//! test needs them. The builders cover the entry shapes the extraction
//! loop cares about (files, directories, links); the one-shot functions
//! are shorthand for the common files-only case.
//!
//! # Panics
//!
//! Everything here panics on I/O or encoding failure. These helpers exist
//! for tests, where a panic is the right way to fail.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Cursor;
use std::io::Write;
use std::path::Path;

/// Shorthand for a files-only tar: each `(path, contents)` pair becomes a
/// regular file entry with mode `0o644`.
///
/// # Examples
///
/// ```
/// use unpak_core::test_utils::create_test_tar;
///
/// let tar = create_test_tar(vec![("bin/tool", b"payload"), ("README", b"docs")]);
/// ```
#[must_use]
pub fn create_test_tar(entries: Vec<(&str, &[u8])>) -> Vec<u8> {
    let mut builder = TarBuilder::new();
    for (path, data) in entries {
        builder = builder.file(path, data);
    }
    builder.build()
}

/// Shorthand for a files-only zip: each `(path, contents)` pair becomes a
/// stored (uncompressed) file entry with mode `0o644`.
///
/// # Examples
///
/// ```
/// use unpak_core::test_utils::create_test_zip;
///
/// let zip = create_test_zip(vec![("bin/tool", b"payload"), ("README", b"docs")]);
/// ```
#[must_use]
pub fn create_test_zip(entries: Vec<(&str, &[u8])>) -> Vec<u8> {
    let mut builder = ZipBuilder::new();
    for (path, data) in entries {
        builder = builder.file(path, data);
    }
    builder.build()
}

/// Incrementally assembles a tar archive covering the full range of entry
/// kinds.
///
/// # Examples
///
/// ```
/// use unpak_core::test_utils::TarBuilder;
///
/// let tar = TarBuilder::new()
///     .directory("opt")
///     .file("opt/tool", b"#!/bin/sh\n")
///     .symlink("tool", "opt/tool")
///     .build();
/// ```
pub struct TarBuilder {
    builder: tar::Builder<Vec<u8>>,
}

impl TarBuilder {
    /// Starts an empty archive.
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: tar::Builder::new(Vec::new()),
        }
    }

    fn append(mut self, header: &mut tar::Header, path: &str, data: &[u8]) -> Self {
        header.set_cksum();
        self.builder.append_data(header, path, data).unwrap();
        self
    }

    /// Appends a regular file entry.
    #[must_use]
    pub fn file(self, path: &str, data: &[u8]) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        self.append(&mut header, path, data)
    }

    /// Appends a regular file entry stamped with `mtime` (Unix seconds).
    #[must_use]
    pub fn file_with_mtime(self, path: &str, data: &[u8], mtime: u64) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_mtime(mtime);
        self.append(&mut header, path, data)
    }

    /// Appends a directory entry.
    #[must_use]
    pub fn directory(self, path: &str) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_entry_type(tar::EntryType::Directory);
        header.set_size(0);
        header.set_mode(0o755);
        self.append(&mut header, path, &[])
    }

    /// Appends a symlink entry pointing at `target`.
    #[must_use]
    pub fn symlink(self, path: &str, target: &str) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_entry_type(tar::EntryType::Symlink);
        header.set_size(0);
        header.set_mode(0o777);
        header.set_link_name(target).unwrap();
        self.append(&mut header, path, &[])
    }

    /// Appends a hard link entry pointing at `target`.
    #[must_use]
    pub fn hardlink(self, path: &str, target: &str) -> Self {
        let mut header = tar::Header::new_gnu();
        header.set_entry_type(tar::EntryType::Link);
        header.set_size(0);
        header.set_mode(0o644);
        header.set_link_name(target).unwrap();
        self.append(&mut header, path, &[])
    }

    /// Closes the archive and returns its bytes.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.builder.into_inner().unwrap()
    }
}

impl Default for TarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Incrementally assembles a zip archive of stored (uncompressed) entries.
///
/// # Examples
///
/// ```
/// use unpak_core::test_utils::ZipBuilder;
///
/// let zip = ZipBuilder::new()
///     .directory("opt")
///     .file("opt/tool", b"#!/bin/sh\n")
///     .build();
/// ```
pub struct ZipBuilder {
    writer: zip::ZipWriter<Cursor<Vec<u8>>>,
}

impl ZipBuilder {
    /// Starts an empty archive.
    #[must_use]
    pub fn new() -> Self {
        Self {
            writer: zip::ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    fn stored_options() -> zip::write::SimpleFileOptions {
        zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored)
            .unix_permissions(0o644)
    }

    /// Appends a regular file entry.
    #[must_use]
    pub fn file(mut self, path: &str, data: &[u8]) -> Self {
        self.writer.start_file(path, Self::stored_options()).unwrap();
        self.writer.write_all(data).unwrap();
        self
    }

    /// Appends a regular file entry stamped with `modified`.
    #[must_use]
    pub fn file_with_mtime(mut self, path: &str, data: &[u8], modified: zip::DateTime) -> Self {
        let options = Self::stored_options().last_modified_time(modified);
        self.writer.start_file(path, options).unwrap();
        self.writer.write_all(data).unwrap();
        self
    }

    /// Appends a directory entry.
    #[must_use]
    pub fn directory(mut self, path: &str) -> Self {
        let options = zip::write::SimpleFileOptions::default().unix_permissions(0o755);
        self.writer.add_directory(path, options).unwrap();
        self
    }

    /// Appends a symlink entry.
    ///
    /// Zip has no native link type; the entry is a file whose Unix mode
    /// carries the link bit and whose contents are the target path.
    #[must_use]
    pub fn symlink(mut self, path: &str, target: &str) -> Self {
        let options = zip::write::SimpleFileOptions::default();
        self.writer.add_symlink(path, target, options).unwrap();
        self
    }

    /// Closes the archive and returns its bytes.
    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.writer.finish().unwrap().into_inner()
    }
}

impl Default for ZipBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Gzip-compresses `data` at the default level.
#[must_use]
pub fn gzip_compress(data: &[u8]) -> Vec<u8> {
    let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Bzip2-compresses `data` at the default level.
#[must_use]
pub fn bzip2_compress(data: &[u8]) -> Vec<u8> {
    let mut encoder = bzip2::write::BzEncoder::new(Vec::new(), bzip2::Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// XZ-compresses `data` at preset level 6.
#[must_use]
pub fn xz_compress(data: &[u8]) -> Vec<u8> {
    let mut encoder = xz2::write::XzEncoder::new(Vec::new(), 6);
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Zstd-compresses `data` at the default level.
#[must_use]
pub fn zstd_compress(data: &[u8]) -> Vec<u8> {
    zstd::stream::encode_all(data, 0).unwrap()
}

/// Assembles a cabinet holding each `(name, contents)` pair in a single
/// uncompressed folder.
#[must_use]
pub fn create_test_cab(entries: Vec<(&str, &[u8])>) -> Vec<u8> {
    let mut builder = cab::CabinetBuilder::new();
    let folder = builder.add_folder(cab::CompressionType::None);
    for (name, _) in &entries {
        folder.add_file((*name).to_string());
    }

    let mut writer = builder.build(Cursor::new(Vec::new())).unwrap();
    while let Some(mut file_writer) = writer.next_file().unwrap() {
        let data = entries
            .iter()
            .find(|(name, _)| *name == file_writer.file_name())
            .map(|(_, data)| *data)
            .unwrap();
        file_writer.write_all(data).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Assembles an OLE compound file with each `(name, contents)` pair as a
/// stream under the root storage. No entries yields a container holding
/// only the root.
#[must_use]
pub fn create_test_cfb(entries: Vec<(&str, &[u8])>) -> Vec<u8> {
    let mut comp = cfb::CompoundFile::create(Cursor::new(Vec::new())).unwrap();
    for (name, data) in entries {
        let mut stream = comp.create_stream(name).unwrap();
        stream.write_all(data).unwrap();
        stream.flush().unwrap();
    }
    comp.flush().unwrap();
    comp.into_inner().into_inner()
}

/// Reads a binary fixture from this crate's `tests/fixtures` directory.
#[must_use]
pub fn load_fixture(name: &str) -> Vec<u8> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read(&path).unwrap()
}
