//! Error types for package probing and extraction.

use thiserror::Error;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that can occur while probing or extracting a package archive.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Reading the package or writing an extracted file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The package file extension is not one probing knows how to seed
    /// candidates for.
    #[error("unsupported package extension: {extension:?}")]
    UnsupportedExtension {
        /// The offending extension, lowercased and without the leading dot;
        /// empty when the path has no extension.
        extension: String,
    },

    /// The archive format is not one this crate can open.
    #[error("unsupported archive format")]
    UnsupportedFormat,

    /// The archive exists but its structure failed to parse.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),
}

impl ArchiveError {
    /// Builds an [`ArchiveError::UnsupportedExtension`] from any extension
    /// representation.
    pub fn unsupported_extension(extension: impl Into<String>) -> Self {
        Self::UnsupportedExtension {
            extension: extension.into(),
        }
    }

    /// Returns `true` if this error means the input cannot be handled at
    /// all, as opposed to an operation that failed partway through.
    ///
    /// # Examples
    ///
    /// ```
    /// use unpak_core::ArchiveError;
    ///
    /// let err = ArchiveError::unsupported_extension("rar");
    /// assert!(err.is_unsupported());
    ///
    /// let err = ArchiveError::InvalidArchive("truncated header".to_string());
    /// assert!(!err.is_unsupported());
    /// ```
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedExtension { .. } | Self::UnsupportedFormat)
    }

    /// Returns the detail message carried by this error, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use unpak_core::ArchiveError;
    ///
    /// let err = ArchiveError::InvalidArchive("truncated central directory".to_string());
    /// assert_eq!(err.context(), Some("truncated central directory"));
    ///
    /// let err = ArchiveError::UnsupportedFormat;
    /// assert_eq!(err.context(), None);
    /// ```
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::InvalidArchive(msg) => Some(msg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ArchiveError::UnsupportedFormat;
        assert_eq!(err.to_string(), "unsupported archive format");
    }

    #[test]
    fn test_unsupported_extension_display() {
        let err = ArchiveError::unsupported_extension("rar");
        assert!(err.to_string().contains("unsupported package extension"));
        assert!(err.to_string().contains("\"rar\""));

        // A path with no extension still names the (empty) extension.
        let err = ArchiveError::unsupported_extension("");
        assert!(err.to_string().contains("\"\""));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ArchiveError = io_err.into();
        assert!(matches!(err, ArchiveError::Io(_)));
    }

    #[test]
    fn test_is_unsupported() {
        assert!(ArchiveError::unsupported_extension("iso").is_unsupported());
        assert!(ArchiveError::UnsupportedFormat.is_unsupported());

        assert!(!ArchiveError::InvalidArchive("bad".into()).is_unsupported());
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!ArchiveError::Io(io_err).is_unsupported());
    }

    #[test]
    fn test_context() {
        let err = ArchiveError::InvalidArchive("truncated central directory".into());
        assert_eq!(err.context(), Some("truncated central directory"));

        let err = ArchiveError::UnsupportedFormat;
        assert_eq!(err.context(), None);

        let err = ArchiveError::unsupported_extension("exe");
        assert_eq!(err.context(), None);
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "disk unplugged");
        let err: ArchiveError = io_err.into();

        let source = err.source().map(ToString::to_string);
        assert_eq!(source, Some("disk unplugged".to_string()));
    }
}
