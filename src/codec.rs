//! Byte codec: UTF-8, base64, hex and gzip transforms.
//!
//! Every function is pure. Malformed input surfaces as
//! [`DatagramError::Decode`]; nothing here panics on user bytes.

use std::io::{Read, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use flate2::read::MultiGzDecoder;
use flate2::{Compression, GzBuilder};

use crate::config::CodecOptions;
use crate::error::{DatagramError, Result};

/// Encode a string as UTF-8 bytes.
pub fn utf8_encode(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Decode UTF-8 bytes into a string.
pub fn utf8_decode(data: &[u8]) -> Result<String> {
    std::str::from_utf8(data)
        .map(str::to_owned)
        .map_err(|e| DatagramError::Decode(format!("invalid UTF-8: {}", e)))
}

/// Standard (padded, non URL-safe) base64 encode.
pub fn base64_encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Standard base64 decode.
pub fn base64_decode(s: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(s)
        .map_err(|e| DatagramError::Decode(format!("invalid base64: {}", e)))
}

/// Strict hex decode: even length, `[0-9a-fA-F]` only, no `0x` prefix.
pub fn hex_decode(s: &str) -> Result<Vec<u8>> {
    hex::decode(s).map_err(|e| DatagramError::Decode(format!("invalid hex: {}", e)))
}

/// gzip-compress bytes.
///
/// The header carries mtime 0 and no file name, so equal input and options
/// always produce equal output.
pub fn gzip_compress(data: &[u8], opts: &CodecOptions) -> Result<Vec<u8>> {
    let level = Compression::new(opts.compression_level.min(9));
    let mut encoder = GzBuilder::new().mtime(0).write(Vec::new(), level);
    encoder
        .write_all(data)
        .map_err(|e| DatagramError::Serialization(format!("gzip: {}", e)))?;
    encoder
        .finish()
        .map_err(|e| DatagramError::Serialization(format!("gzip: {}", e)))
}

/// Decompress a gzip stream.
///
/// Every member of a multi-member stream is inflated and concatenated.
/// Fails on an empty buffer, a bad header, a truncated or corrupt stream,
/// bytes after the last member that are not another member, and on output
/// larger than `opts.max_decompressed_len`.
pub fn gzip_decompress(data: &[u8], opts: &CodecOptions) -> Result<Vec<u8>> {
    if data.is_empty() {
        return Err(DatagramError::Decode("gzip: empty input".to_string()));
    }

    let limit = opts.max_decompressed_len;
    let mut out = Vec::new();
    MultiGzDecoder::new(data)
        .take((limit as u64).saturating_add(1))
        .read_to_end(&mut out)
        .map_err(|e| DatagramError::Decode(format!("gzip: {}", e)))?;

    if out.len() > limit {
        return Err(DatagramError::Decode(format!(
            "gzip: decompressed size exceeds limit of {} bytes",
            limit
        )));
    }
    Ok(out)
}

/// Big-endian `u32` length prefix for a length-delimited field.
pub(crate) fn u32_be_prefix(len: usize, what: &str) -> Result<[u8; 4]> {
    u32::try_from(len)
        .map(u32::to_be_bytes)
        .map_err(|_| DatagramError::Serialization(format!("{} too large: {} bytes", what, len)))
}
