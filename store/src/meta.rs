//! Global parameter storage trait.
//!
//! Every value lives under its own well-known key in the keyed store and is
//! read fresh on each operation, since a ledger process may interleave unrelated
//! invocations, so nothing here is cached process-wide.

use crate::StoreError;
use tessera_types::{Address, Amount};

/// Trait for the persisted global parameters.
///
/// `token_name`/`token_symbol` double as the initialization sentinel: their
/// presence means the ledger has been minted and blocks re-initialization.
pub trait ParamStore {
    fn token_name(&self) -> Result<Option<String>, StoreError>;
    fn set_token_name(&self, name: &str) -> Result<(), StoreError>;

    fn token_symbol(&self) -> Result<Option<String>, StoreError>;
    fn set_token_symbol(&self, symbol: &str) -> Result<(), StoreError>;

    fn total_supply(&self) -> Result<Option<Amount>, StoreError>;
    fn set_total_supply(&self, supply: Amount) -> Result<(), StoreError>;

    /// Fee deducted from ordinary and bridge transfers.
    fn gas_fee(&self) -> Result<Option<Amount>, StoreError>;
    fn set_gas_fee(&self, fee: Amount) -> Result<(), StoreError>;

    /// Configurable per-sweep ceiling for the role-resolved fee router.
    fn fee_ceiling(&self) -> Result<Option<Amount>, StoreError>;
    fn set_fee_ceiling(&self, ceiling: Amount) -> Result<(), StoreError>;

    /// The privileged address that receives collected fees and holds the
    /// initial issuance.
    fn foundation(&self) -> Result<Option<Address>, StoreError>;
    fn set_foundation(&self, address: &Address) -> Result<(), StoreError>;

    /// Registered bridge contract. Invocations originating from it get
    /// cross-chain transfer semantics.
    fn bridge_contract(&self) -> Result<Option<Address>, StoreError>;
    fn set_bridge_contract(&self, address: &Address) -> Result<(), StoreError>;

    /// Fixed gateway admin address checked by the simple fee-sweep variant.
    fn gateway_admin(&self) -> Result<Option<Address>, StoreError>;
    fn set_gateway_admin(&self, address: &Address) -> Result<(), StoreError>;
}
