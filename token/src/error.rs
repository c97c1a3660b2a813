use tessera_ledger::LedgerError;
use tessera_store::StoreError;
use tessera_types::{Address, Amount, TypeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("transfer to self not allowed")]
    SelfTransfer,

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("account is denylisted: {0}")]
    AccountDenied(Address),

    #[error("account is already denylisted: {0}")]
    AlreadyDenied(Address),

    #[error("account is not denylisted: {0}")]
    NotDenied(Address),

    #[error("ledger is already initialized")]
    AlreadyInitialized,

    #[error("ledger is not initialized")]
    NotInitialized,

    #[error("insufficient balance: have {have}, need {need}")]
    InsufficientBalance { have: Amount, need: Amount },

    #[error("allowance exceeded: allowance {allowance}, requested {requested}")]
    ExceedsAllowance { allowance: Amount, requested: Amount },

    #[error("arithmetic overflow")]
    Overflow,

    #[error("storage error: {0}")]
    Storage(StoreError),
}

impl From<TypeError> for TokenError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::InvalidAddress(raw) => TokenError::InvalidAddress(raw),
            TypeError::InvalidAmount(raw) => TokenError::InvalidAmount(raw),
        }
    }
}

impl From<StoreError> for TokenError {
    fn from(err: StoreError) -> Self {
        TokenError::Storage(err)
    }
}

impl From<LedgerError> for TokenError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientBalance { have, need } => {
                TokenError::InsufficientBalance { have, need }
            }
            LedgerError::ExceedsAllowance {
                allowance,
                requested,
            } => TokenError::ExceedsAllowance {
                allowance,
                requested,
            },
            LedgerError::Overflow => TokenError::Overflow,
            LedgerError::Storage(inner) => TokenError::Storage(inner),
        }
    }
}
