//! Output ledger and allowance sub-ledger.
//!
//! Value lives in immutable output records, never in mutable balances. A
//! debit consumes outputs in a deterministic order and splits the boundary
//! output when the consumed total overshoots; the account balance is always
//! the derived sum of its surviving outputs, so debits and credits conserve
//! value by construction.
//!
//! Every operation validates before it mutates: a failure never leaves a
//! partial write-set for the host to commit.

pub mod allowance;
pub mod error;
pub mod outputs;

pub use allowance::AllowanceLedger;
pub use error::LedgerError;
pub use outputs::OutputLedger;
