//! The allowance sub-ledger.

use tracing::debug;

use crate::error::LedgerError;
use tessera_store::AllowanceStore;
use tessera_types::{Address, Amount};

/// Tracks the amount a spender may withdraw from an owner.
///
/// Approvals overwrite (never accumulate), spends decrement, and a spend
/// above the stored amount is rejected rather than clamped.
pub struct AllowanceLedger<'a, S: AllowanceStore> {
    store: &'a S,
}

impl<'a, S: AllowanceStore> AllowanceLedger<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Overwrite the allowance for `(owner, spender)` with `amount`.
    pub fn set_allowance(
        &self,
        owner: &Address,
        spender: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.store.put_allowance(owner, spender, amount)?;
        debug!(owner = %owner, spender = %spender, amount = %amount, "allowance set");
        Ok(())
    }

    /// The current allowance, zero when no record exists.
    pub fn allowance(&self, owner: &Address, spender: &Address) -> Result<Amount, LedgerError> {
        Ok(self.store.get_allowance(owner, spender)?.unwrap_or(Amount::ZERO))
    }

    /// Decrement the allowance by `amount`, failing when `amount` exceeds
    /// the stored value.
    pub fn spend_allowance(
        &self,
        owner: &Address,
        spender: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let current = self.allowance(owner, spender)?;
        let remaining = current
            .checked_sub(amount)
            .ok_or(LedgerError::ExceedsAllowance {
                allowance: current,
                requested: amount,
            })?;
        self.store.put_allowance(owner, spender, remaining)?;
        debug!(owner = %owner, spender = %spender, spent = %amount, remaining = %remaining, "allowance spent");
        Ok(())
    }
}
