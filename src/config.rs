//! Tunables for the compressing codecs.

/// Default gzip level (zlib's own default).
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

/// Default ceiling on inflated output: 64 MiB.
pub const DEFAULT_MAX_DECOMPRESSED_LEN: usize = 64 * 1024 * 1024;

/// Options controlling gzip behavior in [`crate::codec`] and the document datagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    /// gzip level, 0 (store) through 9 (best). Values above 9 are clamped.
    pub compression_level: u32,
    /// Inflating more than this many bytes fails with a decode error.
    pub max_decompressed_len: usize,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            max_decompressed_len: DEFAULT_MAX_DECOMPRESSED_LEN,
        }
    }
}

impl CodecOptions {
    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = level.min(9);
        self
    }

    pub fn with_max_decompressed_len(mut self, len: usize) -> Self {
        self.max_decompressed_len = len;
        self
    }
}
