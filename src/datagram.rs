//! The datagram contract: a named, versioned serialize/deserialize pair.

use crate::error::{DatagramError, Result};
use crate::version::VersionConstraint;

/// Version written by the generic wrappers unless told otherwise.
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Range read by the generic wrappers unless told otherwise.
pub const DEFAULT_VERSION_CONSTRAINT: &str = "0.*.*";

/// Identity of a datagram: its logical type, the version it writes, and the
/// range of recorded versions it can still read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatagramInfo {
    /// Namespaced schema identifier, e.g. `ddl://skiff/DocumentDataDatagram`.
    pub type_name: String,
    /// Version stamped on everything this datagram serializes.
    pub version: String,
    /// Recorded versions `deserialize` accepts.
    pub version_constraint: VersionConstraint,
}

impl DatagramInfo {
    pub fn new(type_name: &str, version: &str, version_constraint: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            version: version.to_string(),
            version_constraint: VersionConstraint::new(version_constraint),
        }
    }

    /// Whether data recorded at `version` is readable here.
    pub fn can_read(&self, version: &str) -> bool {
        self.version_constraint.matches(version)
    }

    /// Reject a recorded version outside the constraint.
    pub fn ensure_readable(&self, version: &str) -> Result<()> {
        if self.can_read(version) {
            Ok(())
        } else {
            Err(DatagramError::VersionUnsupported {
                type_name: self.type_name.clone(),
                version: version.to_string(),
                constraint: self.version_constraint.to_string(),
            })
        }
    }
}

/// A versioned payload contract.
///
/// Implementations are stateless: `serialize` depends only on the payload and
/// `decode` only on the bytes and the recorded version.
///
/// Laws:
/// - `deserialize(serialize(p), version()) == p` for every valid payload.
/// - Bytes written by any earlier version still inside the constraint decode
///   to the equivalent payload, or fail; they never decode to something else.
pub trait Datagram: Send + Sync {
    type Payload;

    fn info(&self) -> &DatagramInfo;

    /// Encode a payload at the current version.
    fn serialize(&self, payload: &Self::Payload) -> Result<Vec<u8>>;

    /// Decode bytes recorded at `version`. Called after the version gate.
    fn decode(&self, data: &[u8], version: &str) -> Result<Self::Payload>;

    /// Gate on the version constraint, then decode.
    fn deserialize(&self, data: &[u8], version: &str) -> Result<Self::Payload> {
        self.info().ensure_readable(version)?;
        self.decode(data, version)
    }

    fn type_name(&self) -> &str {
        &self.info().type_name
    }

    fn version(&self) -> &str {
        &self.info().version
    }

    fn version_constraint(&self) -> &VersionConstraint {
        &self.info().version_constraint
    }
}
