//! The closed set of archive formats known to probing and extraction.

/// Archive formats this crate knows about.
///
/// The declaration order is meaningful: probing tries leftover candidates in
/// exactly this order after the extension-specific ones, so reordering
/// variants changes which format wins when several could open a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveKind {
    /// ZIP archive.
    Zip,
    /// Microsoft Cabinet archive.
    Cab,
    /// Compound File Binary (OLE) container, the format behind MSI packages.
    Compound,
    /// Portable Executable image treated as a container.
    ///
    /// No reader backs this kind; probe attempts always fail, letting later
    /// candidates claim the file.
    Pe,
    /// NSIS installer payload.
    ///
    /// No reader backs this kind; probe attempts always fail, letting later
    /// candidates claim the file.
    Nsis,
    /// 7z archive.
    SevenZ,
    /// Tar archive (uncompressed).
    Tar,
    /// Gzip-compressed tar archive.
    TarGz,
    /// Bzip2-compressed tar archive.
    TarBz2,
    /// XZ-compressed tar archive.
    TarXz,
    /// Zstd-compressed tar archive.
    TarZst,
}

impl ArchiveKind {
    /// Every known format, in declaration order.
    ///
    /// This list is the single source of the probe fallback order; there is
    /// no runtime registration.
    pub const ALL: [Self; 11] = [
        Self::Zip,
        Self::Cab,
        Self::Compound,
        Self::Pe,
        Self::Nsis,
        Self::SevenZ,
        Self::Tar,
        Self::TarGz,
        Self::TarBz2,
        Self::TarXz,
        Self::TarZst,
    ];

    /// Returns the short lowercase name of the format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::Cab => "cab",
            Self::Compound => "compound",
            Self::Pe => "pe",
            Self::Nsis => "nsis",
            Self::SevenZ => "7z",
            Self::Tar => "tar",
            Self::TarGz => "tar.gz",
            Self::TarBz2 => "tar.bz2",
            Self::TarXz => "tar.xz",
            Self::TarZst => "tar.zst",
        }
    }

    /// Returns `true` if this format has a full extraction backend, not
    /// just a probe-time counting open.
    #[must_use]
    pub const fn can_extract(self) -> bool {
        matches!(
            self,
            Self::Zip
                | Self::SevenZ
                | Self::Tar
                | Self::TarGz
                | Self::TarBz2
                | Self::TarXz
                | Self::TarZst
        )
    }

    /// Formats tried first for a recognized package extension.
    ///
    /// The table is closed: `extension` must already be lowercased and
    /// dot-free, and anything outside the three known package extensions
    /// returns `None`.
    #[must_use]
    pub fn common_candidates(extension: &str) -> Option<&'static [Self]> {
        match extension {
            "msi" => Some(&[Self::Compound, Self::Cab]),
            "exe" => Some(&[Self::Pe, Self::Nsis, Self::Cab]),
            "zip" => Some(&[Self::Zip]),
            _ => None,
        }
    }

    /// Full trial order for `extension`: the common candidates, then every
    /// remaining kind in declaration order. Returns `None` when the
    /// extension is outside the closed table.
    #[must_use]
    pub fn probe_order(extension: &str) -> Option<Vec<Self>> {
        let common = Self::common_candidates(extension)?;
        let mut order = common.to_vec();
        order.extend(Self::ALL.iter().copied().filter(|kind| !common.contains(kind)));
        Some(order)
    }
}

impl std::fmt::Display for ArchiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
