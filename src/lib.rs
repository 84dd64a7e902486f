//! Versioned, self-describing datagram containers.
//!
//! A datagram pairs a logical payload type with a serialize/deserialize
//! contract, the version it writes, and the range of recorded versions it
//! can still read. Encryption is an outside concern: callers encrypt the
//! bytes `serialize` produces and hand the decrypted bytes back to
//! `deserialize` with the version recorded beside them.

pub mod cipher;
pub mod codec;
pub mod config;
pub mod datagram;
pub mod datagrams;
pub mod document;
pub mod envelope;
pub mod error;
pub mod json;
pub mod proto;
pub mod raw;
pub mod registry;
pub mod version;

pub use cipher::{generate_key, Aes256GcmCipher, SymmetricCipher};
pub use codec::{
    base64_decode, base64_encode, gzip_compress, gzip_decompress, hex_decode, utf8_decode,
    utf8_encode,
};
pub use config::CodecOptions;
pub use datagram::{Datagram, DatagramInfo};
pub use datagrams::{
    contact_data_datagram, encrypted_alias_data_datagram, link_session_key_datagram,
    thumbnail_datagram, AliasData, ContactData, DisplayPictureData, LinkSessionKey,
};
pub use document::{classify_encoding, DocumentDataDatagram, DocumentVersion, EncodingClass};
pub use envelope::{
    build_header_aad, decode_container, encode_container, open, seal, EncryptedContainer,
};
pub use error::{DatagramError, Result};
pub use json::{create_json_wrapper_datagram, JsonDatagram};
pub use proto::{
    create_proto_wrapper_datagram_v2, CborSchema, HeaderBody, ProtoWrapperDatagram, WireSchema,
};
pub use raw::{create_uint8_array_datagram, RawDatagram};
pub use registry::DatagramRegistry;
pub use version::{satisfies, VersionConstraint};
