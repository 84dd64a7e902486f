//! Tagged encrypted container.
//!
//! Seal: payload → datagram serialize → encrypt(AAD = type + version) → container
//! Open: check type → check version constraint → decrypt(AAD) → datagram deserialize
//!
//! The type and version travel in clear next to the ciphertext but are
//! authenticated through the AAD, so relabeling a container breaks decryption.

use serde::{Deserialize, Serialize};

use crate::cipher::SymmetricCipher;
use crate::codec::u32_be_prefix;
use crate::datagram::Datagram;
use crate::error::{DatagramError, Result};

/// Persisted form of an encrypted datagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedContainer {
    /// Datagram type name.
    #[serde(rename = "t")]
    pub type_name: String,
    /// Datagram version the plaintext was written at.
    #[serde(rename = "v")]
    pub version: String,
    /// Cipher output (opaque).
    #[serde(rename = "c", with = "serde_bytes")]
    pub ciphertext: Vec<u8>,
}

/// Build AAD binding a ciphertext to a datagram type and version.
/// Format: [4 bytes: type length (u32 BE)][type UTF-8][version UTF-8]
pub fn build_header_aad(type_name: &str, version: &str) -> Result<Vec<u8>> {
    let type_bytes = type_name.as_bytes();
    let version_bytes = version.as_bytes();
    let prefix = u32_be_prefix(type_bytes.len(), "datagram type name")?;
    let mut aad = Vec::with_capacity(4 + type_bytes.len() + version_bytes.len());
    aad.extend_from_slice(&prefix);
    aad.extend_from_slice(type_bytes);
    aad.extend_from_slice(version_bytes);
    Ok(aad)
}

/// Serialize and encrypt a payload at the datagram's current version.
pub fn seal<D, C>(datagram: &D, payload: &D::Payload, cipher: &C) -> Result<EncryptedContainer>
where
    D: Datagram + ?Sized,
    C: SymmetricCipher + ?Sized,
{
    let plaintext = datagram.serialize(payload)?;
    let aad = build_header_aad(datagram.type_name(), datagram.version())?;
    let ciphertext = cipher.encrypt(&plaintext, &aad)?;

    tracing::debug!(
        type_name = datagram.type_name(),
        version = datagram.version(),
        len = ciphertext.len(),
        "sealed datagram"
    );

    Ok(EncryptedContainer {
        type_name: datagram.type_name().to_string(),
        version: datagram.version().to_string(),
        ciphertext,
    })
}

/// Decrypt and deserialize a container written by `seal`, at any version
/// still inside the datagram's constraint.
pub fn open<D, C>(datagram: &D, container: &EncryptedContainer, cipher: &C) -> Result<D::Payload>
where
    D: Datagram + ?Sized,
    C: SymmetricCipher + ?Sized,
{
    if container.type_name != datagram.type_name() {
        return Err(DatagramError::TypeMismatch {
            expected: datagram.type_name().to_string(),
            got: container.type_name.clone(),
        });
    }
    datagram.info().ensure_readable(&container.version)?;

    let aad = build_header_aad(&container.type_name, &container.version)?;
    let plaintext = cipher.decrypt(&container.ciphertext, &aad)?;

    tracing::debug!(
        type_name = %container.type_name,
        version = %container.version,
        "opened datagram"
    );

    datagram.deserialize(&plaintext, &container.version)
}

/// Encode a container as CBOR bytes.
pub fn encode_container(container: &EncryptedContainer) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    ciborium::into_writer(container, &mut buf)
        .map_err(|e| DatagramError::Serialization(format!("CBOR encode: {}", e)))?;
    Ok(buf)
}

/// Decode CBOR bytes into a container.
pub fn decode_container(data: &[u8]) -> Result<EncryptedContainer> {
    ciborium::from_reader(data).map_err(|e| DatagramError::Decode(format!("CBOR decode: {}", e)))
}
