//! Fundamental types for the tessera token ledger.
//!
//! Account balances are never stored directly: they are the derived sum of
//! unspent output records. Everything that crosses an operation boundary
//! (addresses, amounts, roles, the call context) is parsed into one of the
//! types in this crate before any ledger logic runs.

pub mod address;
pub mod amount;
pub mod context;
pub mod error;
pub mod params;
pub mod role;

pub use address::Address;
pub use amount::Amount;
pub use context::CallContext;
pub use error::TypeError;
pub use role::Role;
