//! Account address type: exactly 40 hexadecimal characters.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TypeError;

/// A ledger account address, exactly 40 hex characters (either case).
///
/// Validation happens at parse time; the raw string is kept as received so
/// mixed-case addresses round-trip unchanged. Punctuation, whitespace, and
/// prefixes are all rejected.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// Required address length in characters.
    pub const LEN: usize = 40;

    /// Parse and validate a raw address string.
    pub fn parse(raw: &str) -> Result<Self, TypeError> {
        if raw.len() != Self::LEN || hex::decode(raw).is_err() {
            return Err(TypeError::InvalidAddress(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// The all-zero address, used as the `from` party of issuance events.
    pub fn zero() -> Self {
        Self("0".repeat(Self::LEN))
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
