//! Document data datagram and its legacy-format disambiguation.
//!
//! The payload is always a `String`: either structured document JSON, or
//! base64 of a binary document (e.g. an encrypted PDF). Neither the bytes
//! on disk nor the recorded version carry an explicit format tag.
//!
//! Physical encodings by recorded version:
//! - `0.1.0`: JSON object `{"data": <string>}`. `data` is either document
//!   JSON (returned as-is) or hex of binary content (returned as base64).
//! - `0.2.0`: document JSON as raw UTF-8, or the binary content gzipped.

use serde::de::IgnoredAny;
use serde::Deserialize;

use crate::codec::{
    base64_decode, base64_encode, gzip_compress, gzip_decompress, hex_decode, utf8_decode,
    utf8_encode,
};
use crate::config::CodecOptions;
use crate::datagram::{Datagram, DatagramInfo};
use crate::error::{DatagramError, Result};

pub const DOCUMENT_DATA_TYPE: &str = "ddl://skiff/DocumentDataDatagram";
pub const DOCUMENT_DATA_VERSION: &str = "0.2.0";
pub const DOCUMENT_DATA_VERSION_CONSTRAINT: &str = "0.*.*";

/// Physical encoding of a stored document blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingClass {
    /// Valid UTF-8 that parses as JSON. Holds the decoded text.
    JsonText(String),
    /// Anything else; expected to be a gzip stream.
    CompressedBinary,
}

/// Classify stored bytes as JSON text or compressed binary.
///
/// Heuristic: gzip output begins `0x1f 0x8b`, and `0x8b` is never a valid
/// UTF-8 lead byte, so a gzip stream cannot classify as JSON text. The
/// reverse is not checked here: bytes that are not JSON are only assumed to
/// be gzip, and the caller must handle a failed decompress.
pub fn classify_encoding(data: &[u8]) -> EncodingClass {
    match utf8_decode(data) {
        Ok(text) if is_json(&text) => EncodingClass::JsonText(text),
        _ => EncodingClass::CompressedBinary,
    }
}

fn is_json(text: &str) -> bool {
    serde_json::from_str::<IgnoredAny>(text).is_ok()
}

/// Recorded versions with a distinct physical encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentVersion {
    V0_1_0,
    V0_2_0,
}

impl DocumentVersion {
    /// Map a readable recorded version onto its decoder.
    ///
    /// Only `0.1.0` used the wrapped encoding; every later `0.x` reads as
    /// the current one.
    pub fn from_recorded(version: &str) -> Self {
        match version.trim() {
            "0.1.0" => DocumentVersion::V0_1_0,
            _ => DocumentVersion::V0_2_0,
        }
    }
}

/// `0.1.0` wire shape. Extra fields are ignored.
#[derive(Deserialize)]
struct WrappedDocumentData {
    data: String,
}

pub struct DocumentDataDatagram {
    info: DatagramInfo,
    options: CodecOptions,
}

impl DocumentDataDatagram {
    pub fn new() -> Self {
        Self::with_options(CodecOptions::default())
    }

    pub fn with_options(options: CodecOptions) -> Self {
        Self {
            info: DatagramInfo::new(
                DOCUMENT_DATA_TYPE,
                DOCUMENT_DATA_VERSION,
                DOCUMENT_DATA_VERSION_CONSTRAINT,
            ),
            options,
        }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    fn corrupt(&self, version: &str) -> DatagramError {
        DatagramError::CorruptPayload {
            type_name: self.info.type_name.clone(),
            version: version.to_string(),
        }
    }

    fn decode_v0_1_0(&self, data: &[u8], version: &str) -> Result<String> {
        tracing::debug!(version, "decoding wrapped legacy document data");

        let wrapped: WrappedDocumentData = utf8_decode(data)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .ok_or_else(|| {
                tracing::warn!(version, "legacy document data is not a {{\"data\"}} object");
                self.corrupt(version)
            })?;

        if is_json(&wrapped.data) {
            return Ok(wrapped.data);
        }

        match hex_decode(&wrapped.data) {
            Ok(bytes) => Ok(base64_encode(&bytes)),
            Err(e) => {
                tracing::warn!(version, error = %e, "legacy document data is neither JSON nor hex");
                Err(self.corrupt(version))
            }
        }
    }

    fn decode_v0_2_0(&self, data: &[u8], version: &str) -> Result<String> {
        match classify_encoding(data) {
            EncodingClass::JsonText(text) => Ok(text),
            EncodingClass::CompressedBinary => {
                tracing::debug!(version, len = data.len(), "document data is not JSON, inflating");
                match gzip_decompress(data, &self.options) {
                    Ok(bytes) => Ok(base64_encode(&bytes)),
                    Err(e) => {
                        tracing::warn!(version, error = %e, "document data is neither JSON nor gzip");
                        Err(self.corrupt(version))
                    }
                }
            }
        }
    }
}

impl Default for DocumentDataDatagram {
    fn default() -> Self {
        Self::new()
    }
}

impl Datagram for DocumentDataDatagram {
    type Payload = String;

    fn info(&self) -> &DatagramInfo {
        &self.info
    }

    /// JSON payloads are stored as their UTF-8 text. Anything else must be
    /// base64, and is stored as gzip of the decoded bytes.
    fn serialize(&self, payload: &String) -> Result<Vec<u8>> {
        if is_json(payload) {
            return Ok(utf8_encode(payload));
        }
        let raw = base64_decode(payload)?;
        gzip_compress(&raw, &self.options)
    }

    fn decode(&self, data: &[u8], version: &str) -> Result<String> {
        match DocumentVersion::from_recorded(version) {
            DocumentVersion::V0_1_0 => self.decode_v0_1_0(data, version),
            DocumentVersion::V0_2_0 => self.decode_v0_2_0(data, version),
        }
    }
}
