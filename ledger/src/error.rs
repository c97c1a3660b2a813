use tessera_types::Amount;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("insufficient balance: have {have}, need {need}")]
    InsufficientBalance { have: Amount, need: Amount },

    #[error("allowance exceeded: allowance {allowance}, requested {requested}")]
    ExceedsAllowance { allowance: Amount, requested: Amount },

    #[error("amount overflow while summing outputs")]
    Overflow,

    #[error("storage error: {0}")]
    Storage(#[from] tessera_store::StoreError),
}
