//! Header/body datagram over caller-supplied binary schemas.
//!
//! Wire format: `[4 bytes: header length (u32 BE)][header][body]`
//!
//! Header and body are encoded independently so a reader can decode the
//! header without touching the body.

use std::io::Cursor;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::u32_be_prefix;
use crate::datagram::{Datagram, DatagramInfo};
use crate::error::{DatagramError, Result};

const LENGTH_PREFIX_SIZE: usize = 4;

/// A binary codec for one part of a [`ProtoWrapperDatagram`].
///
/// Errors are plain reasons; the datagram attaches its type name.
pub trait WireSchema: Send + Sync {
    type Value;

    fn encode(&self, value: &Self::Value) -> std::result::Result<Vec<u8>, String>;

    fn decode(&self, data: &[u8]) -> std::result::Result<Self::Value, String>;
}

/// CBOR schema for any serde type.
///
/// Decoding expects exactly one CBOR item; leftover bytes are an error.
pub struct CborSchema<T> {
    _value: PhantomData<fn() -> T>,
}

impl<T> CborSchema<T> {
    pub fn new() -> Self {
        Self {
            _value: PhantomData,
        }
    }
}

impl<T> Default for CborSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> WireSchema for CborSchema<T>
where
    T: Serialize + DeserializeOwned,
{
    type Value = T;

    fn encode(&self, value: &T) -> std::result::Result<Vec<u8>, String> {
        let mut buf = Vec::new();
        ciborium::into_writer(value, &mut buf).map_err(|e| format!("CBOR encode: {}", e))?;
        Ok(buf)
    }

    fn decode(&self, data: &[u8]) -> std::result::Result<T, String> {
        let mut cursor = Cursor::new(data);
        let value =
            ciborium::from_reader(&mut cursor).map_err(|e| format!("CBOR decode: {}", e))?;
        let consumed = cursor.position() as usize;
        if consumed != data.len() {
            return Err(format!(
                "{} trailing bytes after CBOR item",
                data.len() - consumed
            ));
        }
        Ok(value)
    }
}

/// Payload of a header/body datagram.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderBody<H, B> {
    pub header: H,
    pub body: B,
}

pub struct ProtoWrapperDatagram<HS, BS> {
    info: DatagramInfo,
    header_schema: HS,
    body_schema: BS,
}

impl<HS, BS> ProtoWrapperDatagram<HS, BS>
where
    HS: WireSchema,
    BS: WireSchema,
{
    pub fn new(
        type_name: &str,
        header_schema: HS,
        body_schema: BS,
        version: &str,
        version_constraint: &str,
    ) -> Self {
        Self {
            info: DatagramInfo::new(type_name, version, version_constraint),
            header_schema,
            body_schema,
        }
    }

    /// Decode only the header, leaving the body bytes untouched.
    pub fn decode_header(&self, data: &[u8]) -> Result<HS::Value> {
        let (header, _) = self.split(data)?;
        self.header_schema
            .decode(header)
            .map_err(|reason| self.mismatch(format!("header: {}", reason)))
    }

    fn split<'a>(&self, data: &'a [u8]) -> Result<(&'a [u8], &'a [u8])> {
        if data.len() < LENGTH_PREFIX_SIZE {
            return Err(self.mismatch(format!(
                "data too short for length prefix: {} bytes",
                data.len()
            )));
        }
        let mut prefix = [0u8; LENGTH_PREFIX_SIZE];
        prefix.copy_from_slice(&data[..LENGTH_PREFIX_SIZE]);
        let header_len = u32::from_be_bytes(prefix) as usize;

        let rest = &data[LENGTH_PREFIX_SIZE..];
        if header_len > rest.len() {
            return Err(self.mismatch(format!(
                "claimed header length {} exceeds available data {}",
                header_len,
                rest.len()
            )));
        }
        Ok(rest.split_at(header_len))
    }

    fn mismatch(&self, reason: String) -> DatagramError {
        DatagramError::SchemaMismatch {
            type_name: self.info.type_name.clone(),
            reason,
        }
    }
}

/// Build a header/body datagram from two schemas.
pub fn create_proto_wrapper_datagram_v2<HS, BS>(
    type_name: &str,
    header_schema: HS,
    body_schema: BS,
    version: &str,
    version_constraint: &str,
) -> ProtoWrapperDatagram<HS, BS>
where
    HS: WireSchema,
    BS: WireSchema,
{
    ProtoWrapperDatagram::new(
        type_name,
        header_schema,
        body_schema,
        version,
        version_constraint,
    )
}

impl<HS, BS> Datagram for ProtoWrapperDatagram<HS, BS>
where
    HS: WireSchema,
    BS: WireSchema,
{
    type Payload = HeaderBody<HS::Value, BS::Value>;

    fn info(&self) -> &DatagramInfo {
        &self.info
    }

    fn serialize(&self, payload: &Self::Payload) -> Result<Vec<u8>> {
        let header = self
            .header_schema
            .encode(&payload.header)
            .map_err(DatagramError::Serialization)?;
        let body = self
            .body_schema
            .encode(&payload.body)
            .map_err(DatagramError::Serialization)?;
        let prefix = u32_be_prefix(header.len(), "header")?;

        let mut out = Vec::with_capacity(LENGTH_PREFIX_SIZE + header.len() + body.len());
        out.extend_from_slice(&prefix);
        out.extend_from_slice(&header);
        out.extend_from_slice(&body);
        Ok(out)
    }

    fn decode(&self, data: &[u8], _version: &str) -> Result<Self::Payload> {
        let (header, body) = self.split(data)?;
        let header = self
            .header_schema
            .decode(header)
            .map_err(|reason| self.mismatch(format!("header: {}", reason)))?;
        let body = self
            .body_schema
            .decode(body)
            .map_err(|reason| self.mismatch(format!("body: {}", reason)))?;
        Ok(HeaderBody { header, body })
    }
}
