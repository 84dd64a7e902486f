//! Semantic-version range matching for recorded datagram versions.

use std::fmt;

use semver::{Version, VersionReq};

/// Whether `version` satisfies the semver `range`.
///
/// Malformed input on either side is treated as non-matching.
pub fn satisfies(version: &str, range: &str) -> bool {
    match VersionReq::parse(range) {
        Ok(req) => matches_req(&req, version),
        Err(_) => false,
    }
}

fn matches_req(req: &VersionReq, version: &str) -> bool {
    match Version::parse(version.trim()) {
        Ok(v) => req.matches(&v),
        Err(_) => false,
    }
}

/// A version range parsed once at construction.
///
/// An unparseable range is kept verbatim for error messages but matches
/// nothing.
#[derive(Debug, Clone)]
pub struct VersionConstraint {
    raw: String,
    req: Option<VersionReq>,
}

impl VersionConstraint {
    pub fn new(range: &str) -> Self {
        let req = match VersionReq::parse(range) {
            Ok(req) => Some(req),
            Err(e) => {
                tracing::warn!(range, error = %e, "unparseable version constraint, matching nothing");
                None
            }
        };
        Self {
            raw: range.to_string(),
            req,
        }
    }

    /// The range as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// False whenever the range failed to parse.
    pub fn is_valid(&self) -> bool {
        self.req.is_some()
    }

    pub fn matches(&self, version: &str) -> bool {
        match &self.req {
            Some(req) => matches_req(req, version),
            None => false,
        }
    }
}

impl PartialEq for VersionConstraint {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for VersionConstraint {}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_major_zero() {
        assert!(satisfies("0.1.5", "0.*.*"));
        assert!(satisfies("0.2.0", "0.*.*"));
        assert!(satisfies("0.0.0", "0.*.*"));
        assert!(!satisfies("1.0.0", "0.*.*"));
    }

    #[test]
    fn malformed_version_does_not_match() {
        assert!(!satisfies("", "0.*.*"));
        assert!(!satisfies("0.1", "0.*.*"));
        assert!(!satisfies("v0.1.0.1", "0.*.*"));
        assert!(!satisfies("banana", "*"));
    }

    #[test]
    fn malformed_range_does_not_match() {
        assert!(!satisfies("0.1.0", "not a range"));
    }

    #[test]
    fn comparator_ranges() {
        assert!(satisfies("1.4.0", ">=1.2.0, <2.0.0"));
        assert!(!satisfies("2.0.0", ">=1.2.0, <2.0.0"));
        assert!(satisfies("0.2.3", "=0.2.3"));
    }

    #[test]
    fn constraint_keeps_raw_text() {
        let c = VersionConstraint::new("0.*.*");
        assert!(c.is_valid());
        assert_eq!(c.as_str(), "0.*.*");
        assert_eq!(c.to_string(), "0.*.*");
        assert!(c.matches("0.9.1"));
        assert!(!c.matches("1.0.0"));
    }

    #[test]
    fn invalid_constraint_matches_nothing() {
        let c = VersionConstraint::new("~>nope");
        assert!(!c.is_valid());
        assert!(!c.matches("0.1.0"));
    }
}
