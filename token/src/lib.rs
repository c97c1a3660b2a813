//! Token contract core.
//!
//! Classifies every transfer into one of a closed set of fee-routing
//! branches and applies exactly the debits and credits of that branch, on
//! top of the output ledger. Also carries the allowance surface, role and
//! denylist access control, one-time minting, and the privileged gas-fee
//! sweep.
//!
//! Every public operation consults access control first, delegates state
//! changes to the ledgers, and emits one domain event. Errors abort the
//! invocation's entire write-set; the host commits nothing on failure.

pub mod access;
pub mod error;
pub mod events;
pub mod gas;
pub mod mint;
pub mod queries;
pub mod transfer;

pub use access::AccessControl;
pub use error::TokenError;
pub use gas::GasFeeRouter;
pub use mint::{MintConfig, Minter};
pub use queries::TokenInfo;
pub use transfer::{Route, RoutedTransfer, TransferEngine};
