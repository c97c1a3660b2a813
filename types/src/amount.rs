//! Token amount type.
//!
//! Amounts are raw integer units (u128) to avoid floating-point errors; the
//! display denomination is fixed by [`crate::params::DECIMALS`]. Operation
//! boundaries accept decimal strings and must go through [`Amount::parse`],
//! which rejects anything that is not a plain nonnegative integer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::TypeError;

/// A nonnegative token amount in raw units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Amount(u128);

impl Amount {
    pub const ZERO: Self = Self(0);

    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// Parse a decimal string into an amount.
    ///
    /// Only ASCII digits are accepted: no sign, no separators, no leading
    /// `+`, no whitespace. Values beyond `u128::MAX` are rejected.
    pub fn parse(raw: &str) -> Result<Self, TypeError> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TypeError::InvalidAmount(raw.to_string()));
        }
        raw.parse::<u128>()
            .map(Self)
            .map_err(|_| TypeError::InvalidAmount(raw.to_string()))
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Add for Amount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Amount {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
