//! Typed identifier for placed instances.
//!
//! `NodeId` wraps a UUIDv7 (time-ordered, globally unique). It displays as
//! standard UUID text for logging and drop targets. The `short()` form (first
//! 8 hex chars) is for human-facing output only, never used as a lookup key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A placed-instance identifier (UUIDv7).
///
/// Every instance gets a fresh one at creation, whatever its kind, so two
/// headers placed in different sections never share an id.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(uuid::Uuid);

impl NodeId {
    /// Create a new time-ordered ID (UUIDv7).
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// First 8 hex characters, for human display only, not lookup.
    pub fn short(&self) -> String {
        self.0.as_simple().to_string()[..8].to_string()
    }

    /// Parse from a hex string (32 chars, no hyphens) or standard UUID format.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        uuid::Uuid::parse_str(s).map(Self)
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<uuid::Uuid> for NodeId {
    fn from(u: uuid::Uuid) -> Self {
        Self(u)
    }
}

impl FromStr for NodeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Full UUID with hyphens: this is also the drop-target form
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.short())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_distinct() {
        let a = NodeId::new();
        let b = NodeId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_rapid_ids_are_ordered() {
        // UUIDv7 stays monotonic within one process even inside a millisecond
        let ids: Vec<NodeId> = (0..256).map(|_| NodeId::new()).collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_display_parse_roundtrip() {
        let id = NodeId::new();
        let parsed = NodeId::parse(&id.to_string()).unwrap();
        assert_eq!(id, parsed);

        let from_simple: NodeId = id.to_string().replace('-', "").parse().unwrap();
        assert_eq!(id, from_simple);
    }

    #[test]
    fn test_parse_rejects_catalog_tags() {
        assert!(NodeId::parse("header").is_err());
        assert!(NodeId::parse("work-area-1").is_err());
        assert!(NodeId::parse("").is_err());
    }

    #[test]
    fn test_short_is_hex_prefix() {
        let id = NodeId::new();
        assert_eq!(id.short().len(), 8);
        assert!(id.to_string().starts_with(&id.short()));
        assert!(format!("{:?}", id).starts_with("NodeId("));
    }

    #[test]
    fn test_serde_transparent() {
        let id = NodeId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
        let back: NodeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
