// Copyright (c) 2025 Word Dictionary Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word-source loading.
//!
//! Turns files, readers and byte buffers into dictionaries. Input that starts
//! with the gzip magic bytes is decompressed transparently; text sources are then
//! split on a literal separator, JSON sources must hold an array.

use std::borrow::Cow;
use std::fs;
use std::io::Read;
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tracing::{debug, info};

use super::Dictionary;
use crate::config::{SourceConfig, SourceFormat};
use crate::error::source::SourceError;
use crate::error::{DictionaryError, DictionaryResult};

/// Separator used when none is configured.
pub const DEFAULT_SEPARATOR: &str = "\n";

/// Leading bytes of every gzip stream.
pub const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Returns `true` if `raw` starts with the gzip magic bytes.
pub fn is_gzip(raw: &[u8]) -> bool {
    raw.starts_with(&GZIP_MAGIC)
}

/// Returns `raw`, gunzipped if it starts with the gzip magic bytes.
pub fn decompress(raw: &[u8]) -> Result<Cow<'_, [u8]>, SourceError> {
    if !is_gzip(raw) {
        return Ok(Cow::Borrowed(raw));
    }

    let mut decompressed = Vec::new();
    MultiGzDecoder::new(raw)
        .read_to_end(&mut decompressed)
        .map_err(SourceError::Decompress)?;
    debug!(
        compressed = raw.len(),
        decompressed = decompressed.len(),
        "Decompressed gzip word source"
    );
    Ok(Cow::Owned(decompressed))
}

fn decode_text(raw: &[u8]) -> Result<String, SourceError> {
    let bytes = decompress(raw)?.into_owned();
    Ok(String::from_utf8(bytes)?)
}

fn read_path(path: &Path) -> Result<Vec<u8>, SourceError> {
    fs::read(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })
}

impl Dictionary {
    /// Builds a dictionary from raw, possibly gzipped, text.
    ///
    /// The text is split on every literal occurrence of `separator`; each piece is
    /// one word. Blank pieces (such as the one after a trailing newline) are
    /// skipped by insertion.
    ///
    /// # Errors
    ///
    /// * [`DictionaryError::InvalidArgument`] if `separator` is empty
    /// * [`DictionaryError::Source`] if decompression or UTF-8 decoding fails
    pub fn from_bytes(raw: &[u8], separator: &str, case_sensitive: bool) -> DictionaryResult<Self> {
        if separator.is_empty() {
            return Err(DictionaryError::InvalidArgument(
                "separator must not be empty".to_string(),
            ));
        }

        let text = decode_text(raw)?;
        Ok(Self::new(text.split(separator), case_sensitive))
    }

    /// Reads `reader` to the end and builds a dictionary as [`Dictionary::from_bytes`].
    pub fn from_reader<R: Read>(
        mut reader: R,
        separator: &str,
        case_sensitive: bool,
    ) -> DictionaryResult<Self> {
        let mut raw = Vec::new();
        reader.read_to_end(&mut raw).map_err(SourceError::from)?;
        Self::from_bytes(&raw, separator, case_sensitive)
    }

    /// Reads the file at `path` and builds a dictionary as [`Dictionary::from_bytes`].
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        separator: &str,
        case_sensitive: bool,
    ) -> DictionaryResult<Self> {
        let path = path.as_ref();
        let raw = read_path(path)?;
        let dictionary = Self::from_bytes(&raw, separator, case_sensitive)?;
        info!(path = %path.display(), words = dictionary.len(), "Loaded word list");
        Ok(dictionary)
    }

    /// Builds a dictionary from a raw, possibly gzipped, JSON document.
    ///
    /// # Errors
    ///
    /// * [`DictionaryError::Serialization`] if the document is not JSON
    /// * [`DictionaryError::InvalidArgument`] if it is not an array
    pub fn from_json_bytes(raw: &[u8], case_sensitive: bool) -> DictionaryResult<Self> {
        let raw = decompress(raw)?;
        let value: serde_json::Value = serde_json::from_slice(&raw)?;
        Self::from_json(&value, case_sensitive)
    }

    /// Loads the dictionary described by a [`SourceConfig`].
    pub fn from_config(config: &SourceConfig) -> DictionaryResult<Self> {
        let path = config.path.as_deref().ok_or(SourceError::NotConfigured)?;

        match config.format {
            SourceFormat::Text => Self::from_file(path, &config.separator, config.case_sensitive),
            SourceFormat::Json => {
                let raw = read_path(path)?;
                let dictionary = Self::from_json_bytes(&raw, config.case_sensitive)?;
                info!(path = %path.display(), words = dictionary.len(), "Loaded JSON word list");
                Ok(dictionary)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_is_gzip() {
        assert!(is_gzip(&gzip(b"zoo")));
        assert!(is_gzip(&[0x1F, 0x8B]));
        assert!(!is_gzip(b"zoo"));
        assert!(!is_gzip(&[0x1F]));
        assert!(!is_gzip(&[]));
    }

    #[test]
    fn test_decompress_passes_plain_text_through() {
        let raw = b"zoo\nzebra";
        assert!(matches!(decompress(raw).unwrap(), Cow::Borrowed(_)));
    }

    #[test]
    fn test_decompress_concatenated_members() {
        let mut raw = gzip(b"zoo\n");
        raw.extend(gzip(b"zebra\n"));
        assert_eq!(&*decompress(&raw).unwrap(), b"zoo\nzebra\n");
    }

    #[test]
    fn test_from_bytes_plain() {
        let dictionary = Dictionary::from_bytes(b"zoo\nzoos\nzebra\n", "\n", false).unwrap();
        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.starting_with("z"), vec!["zebra", "zoo", "zoos"]);
    }

    #[test]
    fn test_from_bytes_gzipped_with_pipe_separator() {
        let raw = gzip(b"Zoo|zoos|zebra");
        let dictionary = Dictionary::from_bytes(&raw, "|", false).unwrap();
        assert_eq!(dictionary.starting_with("Z"), vec!["zebra", "zoo", "zoos"]);
    }

    #[test]
    fn test_from_bytes_multi_character_separator() {
        let dictionary = Dictionary::from_bytes(b"be, bee, been", ", ", true).unwrap();
        assert!(dictionary.exists("been"));
        assert_eq!(dictionary.len(), 3);
    }

    #[test]
    fn test_from_bytes_handles_crlf() {
        let dictionary = Dictionary::from_bytes(b"yuck\r\nzoo\r\n", "\n", false).unwrap();
        assert!(dictionary.exists("yuck"));
        assert!(dictionary.exists("zoo"));
    }

    #[test]
    fn test_from_bytes_rejects_empty_separator() {
        let err = Dictionary::from_bytes(b"zoo", "", false).unwrap_err();
        assert!(matches!(err, DictionaryError::InvalidArgument(_)));
    }

    #[test]
    fn test_from_bytes_rejects_corrupt_gzip() {
        // valid magic, unknown compression method
        let raw = [0x1F, 0x8B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, b'z'];
        let err = Dictionary::from_bytes(&raw, "\n", false).unwrap_err();
        assert!(matches!(
            err,
            DictionaryError::Source(SourceError::Decompress(_))
        ));
    }

    #[test]
    fn test_from_bytes_rejects_invalid_utf8() {
        let err = Dictionary::from_bytes(&[b'z', 0xFF, b'\n'], "\n", false).unwrap_err();
        assert!(matches!(
            err,
            DictionaryError::Source(SourceError::InvalidUtf8(_))
        ));
    }

    #[test]
    fn test_from_reader() {
        let raw = gzip(b"a\nab\nabs\n");
        let dictionary = Dictionary::from_reader(raw.as_slice(), "\n", false).unwrap();
        assert_eq!(dictionary.prefixes("absent"), vec!["a", "ab", "abs"]);
    }

    #[test]
    fn test_from_json_bytes() {
        let dictionary = Dictionary::from_json_bytes(&gzip(br#"["bee", "bees"]"#), false).unwrap();
        assert_eq!(dictionary.starting_with("bee"), vec!["bee", "bees"]);

        let err = Dictionary::from_json_bytes(br#"{"bee": 1}"#, false).unwrap_err();
        assert!(matches!(err, DictionaryError::InvalidArgument(_)));

        let err = Dictionary::from_json_bytes(b"[\"bee\"", false).unwrap_err();
        assert!(matches!(err, DictionaryError::Serialization(_)));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Dictionary::from_file("/nonexistent/words.txt", "\n", false).unwrap_err();
        match err {
            DictionaryError::Source(SourceError::Read { path, .. }) => {
                assert_eq!(path, Path::new("/nonexistent/words.txt"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_config_without_path() {
        let err = Dictionary::from_config(&SourceConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            DictionaryError::Source(SourceError::NotConfigured)
        ));
    }
}
