//! Word-source error module.
//!
//! Errors raised while turning a file, reader or byte buffer into a word list.
//! None of these come from the trie itself.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a word source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The word-source file could not be read.
    #[error("Failed to read word source {path}: {source}")]
    Read {
        /// Path of the unreadable file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A word-source stream failed mid-read.
    #[error("Failed to read word source stream: {0}")]
    Stream(#[from] std::io::Error),

    /// The source starts with the gzip magic bytes but is not a valid gzip stream.
    #[error("Failed to decompress gzip word source: {0}")]
    Decompress(#[source] std::io::Error),

    /// The (decompressed) contents are not UTF-8 text.
    #[error("Word source is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// No word-source path was configured.
    #[error("No word source path configured")]
    NotConfigured,
}
