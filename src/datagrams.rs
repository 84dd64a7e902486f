//! Named application datagrams.

use serde::{Deserialize, Serialize};

use crate::json::{create_json_wrapper_datagram, JsonDatagram};
use crate::raw::{create_uint8_array_datagram, RawDatagram};

pub use crate::document::{DocumentDataDatagram, DOCUMENT_DATA_TYPE};

pub const LINK_SESSION_KEY_TYPE: &str = "ddl://skiff/LinkSessionKeyDatagram";
pub const ENCRYPTED_ALIAS_DATA_TYPE: &str = "ddl://skiff/EncryptedAliasDataDatagram";
pub const CONTACT_DATA_TYPE: &str = "ddl://skiff/ContactDataDatagram";
pub const THUMBNAIL_TYPE: &str = "ddl://skiff/ThumbnailDatagram";

/// Session key shared through a document link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSessionKey {
    pub session_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayPictureData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_accent_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_custom_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_icon: Option<String>,
}

/// Per-alias profile shown to recipients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_picture_data: Option<DisplayPictureData>,
}

/// Encrypted portion of an address book entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phone_numbers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

pub fn link_session_key_datagram() -> JsonDatagram<LinkSessionKey> {
    create_json_wrapper_datagram(LINK_SESSION_KEY_TYPE)
}

pub fn encrypted_alias_data_datagram() -> JsonDatagram<AliasData> {
    create_json_wrapper_datagram(ENCRYPTED_ALIAS_DATA_TYPE)
}

pub fn contact_data_datagram() -> JsonDatagram<ContactData> {
    create_json_wrapper_datagram(CONTACT_DATA_TYPE)
}

pub fn thumbnail_datagram() -> RawDatagram {
    create_uint8_array_datagram(THUMBNAIL_TYPE)
}
