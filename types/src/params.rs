//! Protocol constants.

/// Display decimals of the token. Fixed by the protocol, never configurable.
pub const DECIMALS: u8 = 18;

/// Hardcoded upper bound for a single gas-fee sweep in the fixed-admin
/// variant: 1000 whole tokens at 18 decimals. The role-resolved variant
/// reads a configurable ceiling from storage instead and falls back to this
/// constant when none is stored.
pub const MAX_FEE_SWEEP: u128 = 1_000_000_000_000_000_000_000;
