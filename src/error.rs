use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatagramError {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Schema mismatch for {type_name}: {reason}")]
    SchemaMismatch { type_name: String, reason: String },

    #[error("Corrupt payload for {type_name} (recorded version {version}): no known encoding matched")]
    CorruptPayload { type_name: String, version: String },

    #[error("Unsupported version {version} for {type_name} (reader accepts {constraint})")]
    VersionUnsupported {
        type_name: String,
        version: String,
        constraint: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Datagram type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("Unknown datagram type: {0}")]
    UnknownType(String),

    #[error("Datagram type already registered: {0}")]
    DuplicateType(String),

    #[error("Invalid key length: expected {expected} bytes, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },

    #[error("Encrypted data too short")]
    ContainerTooShort,

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("Random number generation failed: {0}")]
    RngFailed(String),
}

impl DatagramError {
    /// Whether retrying the same operation could succeed.
    ///
    /// Always `false`: every error here is a pure function of the input bytes.
    pub fn is_retryable(&self) -> bool {
        false
    }
}

pub type Result<T> = std::result::Result<T, DatagramError>;
