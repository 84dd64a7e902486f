//! JSON wrapper datagram: `serde_json` text in UTF-8.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::utf8_decode;
use crate::datagram::{Datagram, DatagramInfo, DEFAULT_VERSION, DEFAULT_VERSION_CONSTRAINT};
use crate::error::{DatagramError, Result};

/// Datagram whose wire form is the JSON serialization of `T`.
pub struct JsonDatagram<T> {
    info: DatagramInfo,
    _payload: PhantomData<fn() -> T>,
}

impl<T> JsonDatagram<T> {
    pub fn new(type_name: &str) -> Self {
        Self::with_version(type_name, DEFAULT_VERSION, DEFAULT_VERSION_CONSTRAINT)
    }

    pub fn with_version(type_name: &str, version: &str, version_constraint: &str) -> Self {
        Self {
            info: DatagramInfo::new(type_name, version, version_constraint),
            _payload: PhantomData,
        }
    }
}

/// Build a JSON wrapper datagram at version `0.1.0`, reading `0.*.*`.
pub fn create_json_wrapper_datagram<T>(type_name: &str) -> JsonDatagram<T>
where
    T: Serialize + DeserializeOwned,
{
    JsonDatagram::new(type_name)
}

impl<T> Datagram for JsonDatagram<T>
where
    T: Serialize + DeserializeOwned,
{
    type Payload = T;

    fn info(&self) -> &DatagramInfo {
        &self.info
    }

    fn serialize(&self, payload: &T) -> Result<Vec<u8>> {
        serde_json::to_vec(payload).map_err(|e| DatagramError::Serialization(e.to_string()))
    }

    fn decode(&self, data: &[u8], _version: &str) -> Result<T> {
        let text = utf8_decode(data)?;
        serde_json::from_str(&text).map_err(|e| DatagramError::Parse(e.to_string()))
    }
}
