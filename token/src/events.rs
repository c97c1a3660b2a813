//! Domain event names and payloads.
//!
//! One event per successful operation, JSON-encoded into the host's event
//! sink and delivered post-commit.

use serde::{Deserialize, Serialize};
use tessera_store::{EventSink, StoreError};
use tessera_types::{Address, Amount};

use crate::error::TokenError;

pub const TRANSFER_EVENT: &str = "transfer";
pub const APPROVAL_EVENT: &str = "approval";
pub const DENYLIST_EVENT: &str = "denylist";
pub const GAS_FEE_EVENT: &str = "gas-fee";
pub const FEE_CEILING_EVENT: &str = "fee-ceiling";

/// The per-transfer record.
///
/// `value` is always the original requested amount, not the post-fee
/// amount; `from`/`to` are the effective parties after routing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferEvent {
    /// Authenticated caller of the operation.
    pub operator: Address,
    pub from: Address,
    pub to: Address,
    pub value: Amount,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalEvent {
    pub owner: Address,
    pub spender: Address,
    pub value: Amount,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenylistEvent {
    pub address: Address,
    pub denied: bool,
}

/// Payload for the gas-fee and fee-ceiling parameter updates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeEvent {
    pub value: Amount,
}

/// JSON-encode `event` and hand it to the sink.
pub fn emit<S, T>(sink: &S, name: &str, event: &T) -> Result<(), TokenError>
where
    S: EventSink + ?Sized,
    T: Serialize,
{
    let payload = serde_json::to_vec(event)
        .map_err(|e| TokenError::Storage(StoreError::Serialization(e.to_string())))?;
    sink.emit(name, &payload)?;
    Ok(())
}
