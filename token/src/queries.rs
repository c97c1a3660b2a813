//! Read-only token metadata and balance queries.

use crate::error::TokenError;
use tessera_ledger::OutputLedger;
use tessera_store::{OutputStore, ParamStore};
use tessera_types::{params::DECIMALS, Address, Amount};

/// Read-only view over the token's metadata and balances.
pub struct TokenInfo<'a, S: ParamStore + OutputStore> {
    store: &'a S,
}

impl<'a, S: ParamStore + OutputStore> TokenInfo<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn name(&self) -> Result<String, TokenError> {
        self.store.token_name()?.ok_or(TokenError::NotInitialized)
    }

    pub fn symbol(&self) -> Result<String, TokenError> {
        self.store.token_symbol()?.ok_or(TokenError::NotInitialized)
    }

    /// Display decimals; a protocol constant, not stored state.
    pub fn decimals(&self) -> u8 {
        DECIMALS
    }

    pub fn total_supply(&self) -> Result<Amount, TokenError> {
        self.store.total_supply()?.ok_or(TokenError::NotInitialized)
    }

    /// Derived balance of `account`: the sum of its unspent outputs.
    pub fn balance_of(&self, account: &str) -> Result<Amount, TokenError> {
        let account = Address::parse(account)?;
        Ok(OutputLedger::new(self.store).total_balance(&account)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_nullables::MemoryStore;

    #[test]
    fn test_queries_on_uninitialized_ledger() {
        let store = MemoryStore::new();
        let info = TokenInfo::new(&store);
        assert!(matches!(info.name(), Err(TokenError::NotInitialized)));
        assert!(matches!(
            info.total_supply(),
            Err(TokenError::NotInitialized)
        ));
        assert_eq!(info.decimals(), DECIMALS);
    }

    #[test]
    fn test_balance_of_unknown_account_is_zero() {
        let store = MemoryStore::new();
        let info = TokenInfo::new(&store);
        let account = "ab".repeat(20);
        assert_eq!(info.balance_of(&account).unwrap(), Amount::ZERO);
    }

    #[test]
    fn test_balance_of_rejects_malformed_address() {
        let store = MemoryStore::new();
        let info = TokenInfo::new(&store);
        assert!(matches!(
            info.balance_of("bogus"),
            Err(TokenError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_metadata_after_init() {
        let store = MemoryStore::new();
        store.set_token_name("Tessera").unwrap();
        store.set_token_symbol("TSR").unwrap();
        store.set_total_supply(Amount::new(300)).unwrap();
        let info = TokenInfo::new(&store);
        assert_eq!(info.name().unwrap(), "Tessera");
        assert_eq!(info.symbol().unwrap(), "TSR");
        assert_eq!(info.total_supply().unwrap(), Amount::new(300));
    }
}
