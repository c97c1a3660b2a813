//! Output record storage trait.

use crate::StoreError;
use serde::{Deserialize, Serialize};
use tessera_types::{Address, Amount};

/// Record-type tag written on every output, used by indexed queries to
/// select output records for one account.
pub const OUTPUT_RECORD_TYPE: &str = "token-output";

/// A discrete, immutable unit of value owned by one account.
///
/// Outputs are never mutated in place: a partial spend deletes the original
/// and writes a new output for the unconsumed remainder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub owner: Address,
    /// Uniqueness discriminator: the id of the invocation that created the
    /// output. Keys are `(owner, tx_id)` pairs.
    pub tx_id: String,
    pub amount: Amount,
    pub record_type: String,
}

impl OutputRecord {
    pub fn new(owner: Address, tx_id: impl Into<String>, amount: Amount) -> Self {
        Self {
            owner,
            tx_id: tx_id.into(),
            amount,
            record_type: OUTPUT_RECORD_TYPE.to_string(),
        }
    }
}

/// Trait for output record storage.
///
/// Keys are `(owner, tx_id)` pairs.
pub trait OutputStore {
    /// Write a new output record under its `(owner, tx_id)` key.
    ///
    /// Fails with [`StoreError::Duplicate`] when an output already exists
    /// under that key, so no writer can silently overwrite value.
    fn put_output(&self, record: &OutputRecord) -> Result<(), StoreError>;

    /// Retrieve a specific output.
    fn get_output(&self, owner: &Address, tx_id: &str) -> Result<OutputRecord, StoreError>;

    /// Delete a consumed output.
    fn delete_output(&self, owner: &Address, tx_id: &str) -> Result<(), StoreError>;

    /// All outputs owned by `owner`, in ascending lexicographic `tx_id`
    /// order.
    ///
    /// The order is a contract, not a convenience: debit selection consumes
    /// the returned prefix, and replicas executing the same logical debit
    /// must select the same outputs and produce the same remainder split.
    /// Implementations must not expose whatever order a secondary index
    /// happens to iterate in.
    fn outputs_for_account(&self, owner: &Address) -> Result<Vec<OutputRecord>, StoreError>;

    /// Total number of outputs across all accounts.
    fn output_count(&self) -> Result<u64, StoreError>;
}
