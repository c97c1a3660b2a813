//! The output ledger: credit, deterministic debit-with-split, derived
//! balance.

use tracing::debug;

use crate::error::LedgerError;
use tessera_store::{OutputRecord, OutputStore};
use tessera_types::{Address, Amount};

/// Creates, sums, and consumes output records for accounts.
///
/// Borrows the storage collaborator; one instance per invocation.
pub struct OutputLedger<'a, S: OutputStore> {
    store: &'a S,
}

impl<'a, S: OutputStore> OutputLedger<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Credit `amount` to `account` as one new output keyed by
    /// `(account, tx_id)`.
    ///
    /// A zero amount is a successful no-op: the fee leg of a transfer may
    /// legitimately be zero when the gas fee is unset. Paths that must
    /// reject zero (minting) do so before calling in.
    pub fn credit(
        &self,
        account: &Address,
        tx_id: &str,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if amount.is_zero() {
            return Ok(());
        }
        let record = OutputRecord::new(account.clone(), tx_id, amount);
        self.store.put_output(&record)?;
        debug!(account = %account, tx_id, amount = %amount, "credited output");
        Ok(())
    }

    /// Debit exactly `amount` from `account`, or fail with no mutation.
    ///
    /// Outputs are consumed in the store's ascending-`tx_id` order. The
    /// selection is planned in full before the first write: enumerate
    /// outputs accumulating a running total, stop as soon as the total
    /// covers the request, and only then delete the consumed outputs. When
    /// the total strictly exceeds the request, the overshoot is preserved
    /// as one replacement output keyed by the current `tx_id`.
    pub fn debit(
        &self,
        account: &Address,
        tx_id: &str,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let outputs = self.store.outputs_for_account(account)?;

        let mut accumulated = Amount::ZERO;
        let mut consumed = 0usize;
        for output in &outputs {
            if accumulated >= amount {
                break;
            }
            accumulated = accumulated
                .checked_add(output.amount)
                .ok_or(LedgerError::Overflow)?;
            consumed += 1;
        }
        if accumulated < amount {
            // All outputs enumerated without covering the request;
            // `accumulated` is the account's whole balance.
            return Err(LedgerError::InsufficientBalance {
                have: accumulated,
                need: amount,
            });
        }

        for output in &outputs[..consumed] {
            self.store.delete_output(account, &output.tx_id)?;
        }
        let remainder = accumulated - amount;
        if !remainder.is_zero() {
            self.credit(account, tx_id, remainder)?;
        }
        debug!(
            account = %account,
            tx_id,
            amount = %amount,
            consumed,
            remainder = %remainder,
            "debited outputs"
        );
        Ok(())
    }

    /// The account's balance: the sum of all its outputs, zero when none
    /// exist.
    pub fn total_balance(&self, account: &Address) -> Result<Amount, LedgerError> {
        let mut total = Amount::ZERO;
        for output in self.store.outputs_for_account(account)? {
            total = total
                .checked_add(output.amount)
                .ok_or(LedgerError::Overflow)?;
        }
        Ok(total)
    }
}
