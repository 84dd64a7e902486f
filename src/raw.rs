//! Identity datagram for payloads that are already bytes (media, thumbnails).

use crate::datagram::{Datagram, DatagramInfo, DEFAULT_VERSION, DEFAULT_VERSION_CONSTRAINT};
use crate::error::Result;

pub struct RawDatagram {
    info: DatagramInfo,
}

impl RawDatagram {
    pub fn new(type_name: &str) -> Self {
        Self {
            info: DatagramInfo::new(type_name, DEFAULT_VERSION, DEFAULT_VERSION_CONSTRAINT),
        }
    }
}

/// Build a pass-through datagram over raw bytes.
pub fn create_uint8_array_datagram(type_name: &str) -> RawDatagram {
    RawDatagram::new(type_name)
}

impl Datagram for RawDatagram {
    type Payload = Vec<u8>;

    fn info(&self) -> &DatagramInfo {
        &self.info
    }

    fn serialize(&self, payload: &Vec<u8>) -> Result<Vec<u8>> {
        Ok(payload.clone())
    }

    fn decode(&self, data: &[u8], _version: &str) -> Result<Vec<u8>> {
        Ok(data.to_vec())
    }
}
