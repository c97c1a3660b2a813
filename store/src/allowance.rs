//! Allowance storage trait.

use crate::StoreError;
use tessera_types::{Address, Amount};

/// Trait for the `(owner, spender) -> amount` allowance sub-ledger.
pub trait AllowanceStore {
    /// Write an allowance, overwriting any existing record for the pair.
    fn put_allowance(
        &self,
        owner: &Address,
        spender: &Address,
        amount: Amount,
    ) -> Result<(), StoreError>;

    /// Read an allowance. `None` when no record exists for the pair.
    fn get_allowance(
        &self,
        owner: &Address,
        spender: &Address,
    ) -> Result<Option<Amount>, StoreError>;
}
