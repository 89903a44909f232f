//! Identifier types shared across the crate.

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Identifier of a tracked tradable instrument.
///
/// The external engine assigns identifiers and owns all asset metadata; this
/// crate treats them as opaque identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
pub enum EntityId {
    /// Stable integer security identifier
    #[display("{_0}")]
    Sid(u64),
    /// Ticker or other string identifier
    #[display("{_0}")]
    Symbol(String),
}

impl From<&str> for EntityId {
    fn from(symbol: &str) -> Self {
        Self::Symbol(symbol.to_owned())
    }
}

/// Name of an input column of per-entity-per-date observations
/// ("close", "open", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Serialize, Deserialize)]
#[display("{_0}")]
pub struct ColumnId(String);

impl ColumnId {
    /// Column name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnId {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_display() {
        assert_eq!(EntityId::Sid(42).to_string(), "42");
        assert_eq!(EntityId::from("AAPL").to_string(), "AAPL");
    }

    #[test]
    fn test_entity_id_equality() {
        assert_eq!(EntityId::from("AAPL"), EntityId::Symbol("AAPL".to_owned()));
        assert_ne!(EntityId::Sid(1), EntityId::from("1"));
    }

    #[test]
    fn test_column_id_round_trip() {
        let column = ColumnId::from("close");
        assert_eq!(column.as_str(), "close");
        assert_eq!(column.to_string(), "close");
    }
}
