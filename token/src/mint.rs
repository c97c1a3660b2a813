//! One-time issuance of the initial supply.

use std::collections::HashSet;

use tracing::info;

use crate::error::TokenError;
use crate::events::{self, TransferEvent, TRANSFER_EVENT};
use tessera_ledger::OutputLedger;
use tessera_store::Backend;
use tessera_types::{Address, Amount, CallContext, Role};

/// Bootstrap configuration for the one-shot mint.
///
/// `name` and `symbol` double as the initialization sentinel: once stored,
/// every further mint attempt fails.
#[derive(Clone, Debug)]
pub struct MintConfig {
    pub name: String,
    pub symbol: String,
    /// Address that receives routed fees and holds privileged admin rights.
    pub foundation: String,
    /// Accounts receiving the initial supply, paired with `amounts`.
    pub accounts: Vec<String>,
    pub amounts: Vec<String>,
    /// Gateway admin, granted the gateway role and registered for the
    /// fixed-address fee-sweep variant.
    pub gateway: Option<String>,
    /// Registered bridge contract address.
    pub bridge: Option<String>,
    /// Initial gas fee; unset means fee-free transfers until configured.
    pub gas_fee: Option<String>,
}

/// Guarded issuance of the initial supply.
pub struct Minter<'a, S: Backend> {
    store: &'a S,
}

impl<'a, S: Backend> Minter<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Mint the initial supply and persist the global parameters.
    ///
    /// Everything is validated before the first write: any malformed
    /// address or amount aborts the whole call with no outputs created and
    /// the sentinel unset.
    pub fn mint(&self, ctx: &CallContext, config: &MintConfig) -> Result<(), TokenError> {
        if self.store.token_name()?.is_some() || self.store.token_symbol()?.is_some() {
            return Err(TokenError::AlreadyInitialized);
        }
        if config.name.is_empty() || config.symbol.is_empty() {
            return Err(TokenError::InvalidArgument(
                "token name and symbol must be non-empty".to_string(),
            ));
        }
        if config.accounts.len() != config.amounts.len() {
            return Err(TokenError::InvalidArgument(format!(
                "{} accounts but {} amounts",
                config.accounts.len(),
                config.amounts.len()
            )));
        }

        let foundation = Address::parse(&config.foundation)?;
        let gateway = config
            .gateway
            .as_deref()
            .map(Address::parse)
            .transpose()?;
        let bridge = config.bridge.as_deref().map(Address::parse).transpose()?;
        let gas_fee = config.gas_fee.as_deref().map(Amount::parse).transpose()?;

        let mut allocations = Vec::with_capacity(config.accounts.len());
        let mut seen: HashSet<String> = HashSet::new();
        let mut supply = Amount::ZERO;
        for (account, amount) in config.accounts.iter().zip(config.amounts.iter()) {
            let account = Address::parse(account)?;
            let amount = Amount::parse(amount)?;
            if amount.is_zero() {
                return Err(TokenError::InvalidAmount(
                    "mint amount must be positive".to_string(),
                ));
            }
            // Output keys are (account, tx_id); one mint is one invocation,
            // so the same account twice would collide.
            if !seen.insert(account.to_string()) {
                return Err(TokenError::InvalidArgument(format!(
                    "duplicate mint account: {account}"
                )));
            }
            supply = supply.checked_add(amount).ok_or(TokenError::Overflow)?;
            allocations.push((account, amount));
        }

        self.store.set_token_name(&config.name)?;
        self.store.set_token_symbol(&config.symbol)?;
        self.store.set_foundation(&foundation)?;
        self.store.set_total_supply(supply)?;
        self.store.put_role(&foundation, Role::FoundationAdmin)?;
        if let Some(gateway) = &gateway {
            self.store.set_gateway_admin(gateway)?;
            self.store.put_role(gateway, Role::GatewayAdmin)?;
        }
        if let Some(bridge) = &bridge {
            self.store.set_bridge_contract(bridge)?;
        }
        if let Some(gas_fee) = gas_fee {
            self.store.set_gas_fee(gas_fee)?;
        }

        let outputs = OutputLedger::new(self.store);
        for (account, amount) in &allocations {
            outputs.credit(account, &ctx.tx_id, *amount)?;
            events::emit(
                self.store,
                TRANSFER_EVENT,
                &TransferEvent {
                    operator: ctx.caller.clone(),
                    from: Address::zero(),
                    to: account.clone(),
                    value: *amount,
                },
            )?;
        }
        info!(
            name = config.name,
            symbol = config.symbol,
            supply = %supply,
            accounts = allocations.len(),
            "initial supply minted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_ledger::OutputLedger;
    use tessera_nullables::MemoryStore;
    use tessera_store::{OutputStore, ParamStore, RoleStore};

    fn addr(tag: u8) -> String {
        format!("{tag:02x}").repeat(20)
    }

    fn ctx(caller: &str, tx_id: &str) -> CallContext {
        CallContext {
            caller: Address::parse(caller).unwrap(),
            tx_id: tx_id.to_string(),
            initiating_contract: "tessera".to_string(),
            own_contract: "tessera".to_string(),
        }
    }

    fn config() -> MintConfig {
        MintConfig {
            name: "Tessera".to_string(),
            symbol: "TSR".to_string(),
            foundation: addr(0xf0),
            accounts: vec![addr(1), addr(2)],
            amounts: vec!["100".to_string(), "200".to_string()],
            gateway: Some(addr(0xaa)),
            bridge: None,
            gas_fee: Some("10".to_string()),
        }
    }

    #[test]
    fn test_mint_credits_each_account() {
        let store = MemoryStore::new();
        Minter::new(&store)
            .mint(&ctx(&addr(0xf0), "tx-init"), &config())
            .unwrap();
        let outputs = OutputLedger::new(&store);
        let a = Address::parse(&addr(1)).unwrap();
        let b = Address::parse(&addr(2)).unwrap();
        assert_eq!(outputs.total_balance(&a).unwrap(), Amount::new(100));
        assert_eq!(outputs.total_balance(&b).unwrap(), Amount::new(200));
        assert_eq!(store.total_supply().unwrap().unwrap(), Amount::new(300));
        assert_eq!(store.events_named(TRANSFER_EVENT).len(), 2);
    }

    #[test]
    fn test_mint_assigns_roles_and_params() {
        let store = MemoryStore::new();
        let cfg = config();
        Minter::new(&store)
            .mint(&ctx(&addr(0xf0), "tx-init"), &cfg)
            .unwrap();
        let foundation = Address::parse(&cfg.foundation).unwrap();
        assert_eq!(
            store.get_role(&foundation).unwrap(),
            Some(Role::FoundationAdmin)
        );
        assert_eq!(store.token_name().unwrap().unwrap(), "Tessera");
        assert_eq!(store.gas_fee().unwrap().unwrap(), Amount::new(10));
        assert!(store.gateway_admin().unwrap().is_some());
    }

    #[test]
    fn test_second_mint_rejected() {
        let store = MemoryStore::new();
        let minter = Minter::new(&store);
        minter.mint(&ctx(&addr(0xf0), "tx-1"), &config()).unwrap();
        let err = minter
            .mint(&ctx(&addr(0xf0), "tx-2"), &config())
            .unwrap_err();
        assert!(matches!(err, TokenError::AlreadyInitialized));
    }

    #[test]
    fn test_one_bad_amount_aborts_everything() {
        let store = MemoryStore::new();
        let mut cfg = config();
        cfg.amounts[1] = "0".to_string();
        let err = Minter::new(&store)
            .mint(&ctx(&addr(0xf0), "tx-1"), &cfg)
            .unwrap_err();
        assert!(matches!(err, TokenError::InvalidAmount(_)));
        // Nothing was written: sentinel unset, no outputs.
        assert!(store.token_name().unwrap().is_none());
        assert_eq!(store.output_count().unwrap(), 0);
    }

    #[test]
    fn test_bad_address_aborts_everything() {
        let store = MemoryStore::new();
        let mut cfg = config();
        cfg.accounts[0] = "not-an-address".to_string();
        let err = Minter::new(&store)
            .mint(&ctx(&addr(0xf0), "tx-1"), &cfg)
            .unwrap_err();
        assert!(matches!(err, TokenError::InvalidAddress(_)));
        assert_eq!(store.output_count().unwrap(), 0);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let store = MemoryStore::new();
        let mut cfg = config();
        cfg.amounts.pop();
        let err = Minter::new(&store)
            .mint(&ctx(&addr(0xf0), "tx-1"), &cfg)
            .unwrap_err();
        assert!(matches!(err, TokenError::InvalidArgument(_)));
    }

    #[test]
    fn test_duplicate_account_rejected() {
        let store = MemoryStore::new();
        let mut cfg = config();
        cfg.accounts[1] = cfg.accounts[0].clone();
        let err = Minter::new(&store)
            .mint(&ctx(&addr(0xf0), "tx-1"), &cfg)
            .unwrap_err();
        assert!(matches!(err, TokenError::InvalidArgument(_)));
        assert_eq!(store.output_count().unwrap(), 0);
    }
}
