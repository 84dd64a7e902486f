//! Lookup table of datagrams keyed by type name.
//!
//! Built once at startup and passed to whatever needs to serialize. The
//! registry is immutable once shared, so it needs no locking.

use std::any::Any;
use std::collections::HashMap;

use crate::datagram::{Datagram, DatagramInfo};
use crate::datagrams::{
    contact_data_datagram, encrypted_alias_data_datagram, link_session_key_datagram,
    thumbnail_datagram, DocumentDataDatagram,
};
use crate::error::{DatagramError, Result};

struct Entry {
    info: DatagramInfo,
    datagram: Box<dyn Any + Send + Sync>,
}

#[derive(Default)]
pub struct DatagramRegistry {
    entries: HashMap<String, Entry>,
}

impl DatagramRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every named application datagram.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.insert(DocumentDataDatagram::new());
        registry.insert(link_session_key_datagram());
        registry.insert(encrypted_alias_data_datagram());
        registry.insert(contact_data_datagram());
        registry.insert(thumbnail_datagram());
        registry
    }

    /// Add a datagram. Each type name may be registered once.
    pub fn register<D>(&mut self, datagram: D) -> Result<()>
    where
        D: Datagram + 'static,
    {
        if self.entries.contains_key(datagram.type_name()) {
            return Err(DatagramError::DuplicateType(datagram.type_name().to_string()));
        }
        self.insert(datagram);
        Ok(())
    }

    fn insert<D>(&mut self, datagram: D)
    where
        D: Datagram + 'static,
    {
        let info = datagram.info().clone();
        self.entries.insert(
            info.type_name.clone(),
            Entry {
                info,
                datagram: Box::new(datagram),
            },
        );
    }

    /// Look up a datagram by type name as its concrete type.
    pub fn get<D>(&self, type_name: &str) -> Result<&D>
    where
        D: Datagram + 'static,
    {
        let entry = self
            .entries
            .get(type_name)
            .ok_or_else(|| DatagramError::UnknownType(type_name.to_string()))?;
        entry
            .datagram
            .downcast_ref::<D>()
            .ok_or_else(|| DatagramError::TypeMismatch {
                expected: type_name.to_string(),
                got: std::any::type_name::<D>().to_string(),
            })
    }

    pub fn info(&self, type_name: &str) -> Option<&DatagramInfo> {
        self.entries.get(type_name).map(|e| &e.info)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fast-reject for stored data: is `type_name` known, and is `version`
    /// readable by it?
    pub fn check_readable(&self, type_name: &str, version: &str) -> Result<()> {
        self.info(type_name)
            .ok_or_else(|| DatagramError::UnknownType(type_name.to_string()))?
            .ensure_readable(version)
    }
}
