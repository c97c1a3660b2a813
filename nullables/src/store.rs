//! In-memory, thread-safe implementation of every storage trait.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use tessera_store::{
    composite_key, AllowanceStore, DenyStore, EventSink, OutputRecord, OutputStore, ParamStore,
    RoleStore, StoreError,
};
use tessera_types::{Address, Amount, Role};

const OUTPUT_PREFIX: &str = "output";

const NAME_KEY: &str = "name";
const SYMBOL_KEY: &str = "symbol";
const TOTAL_SUPPLY_KEY: &str = "total-supply";
const GAS_FEE_KEY: &str = "gas-fee";
const FEE_CEILING_KEY: &str = "fee-ceiling";
const FOUNDATION_KEY: &str = "foundation";
const BRIDGE_KEY: &str = "bridge";
const GATEWAY_KEY: &str = "gateway";

/// An in-memory store implementing every collaborator trait.
///
/// Outputs live in a `BTreeMap` keyed by composite key, so the
/// ascending-`tx_id` iteration contract of [`OutputStore`] holds by
/// construction. Emitted events are recorded for inspection.
pub struct MemoryStore {
    outputs: Mutex<BTreeMap<String, OutputRecord>>,
    allowances: Mutex<HashMap<(String, String), Amount>>,
    roles: Mutex<HashMap<String, Role>>,
    denied: Mutex<HashMap<String, bool>>,
    params: Mutex<HashMap<&'static str, String>>,
    events: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            outputs: Mutex::new(BTreeMap::new()),
            allowances: Mutex::new(HashMap::new()),
            roles: Mutex::new(HashMap::new()),
            denied: Mutex::new(HashMap::new()),
            params: Mutex::new(HashMap::new()),
            events: Mutex::new(Vec::new()),
        }
    }

    /// All events emitted so far, in emission order.
    pub fn events(&self) -> Vec<(String, Vec<u8>)> {
        self.events.lock().unwrap().clone()
    }

    /// Payloads of all events with the given name, in emission order.
    pub fn events_named(&self, name: &str) -> Vec<Vec<u8>> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(n, _)| n.as_str() == name)
            .map(|(_, payload)| payload.clone())
            .collect()
    }

    /// Drop all recorded events.
    pub fn clear_events(&self) {
        self.events.lock().unwrap().clear();
    }

    fn get_param(&self, key: &'static str) -> Option<String> {
        self.params.lock().unwrap().get(key).cloned()
    }

    fn put_param(&self, key: &'static str, value: String) {
        self.params.lock().unwrap().insert(key, value);
    }

    fn get_amount_param(&self, key: &'static str) -> Result<Option<Amount>, StoreError> {
        self.get_param(key)
            .map(|raw| {
                Amount::parse(&raw)
                    .map_err(|e| StoreError::Corruption(format!("param {key}: {e}")))
            })
            .transpose()
    }

    fn get_address_param(&self, key: &'static str) -> Result<Option<Address>, StoreError> {
        self.get_param(key)
            .map(|raw| {
                Address::parse(&raw)
                    .map_err(|e| StoreError::Corruption(format!("param {key}: {e}")))
            })
            .transpose()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn output_key(owner: &Address, tx_id: &str) -> Result<String, StoreError> {
    composite_key(OUTPUT_PREFIX, &[owner.as_str(), tx_id])
}

impl OutputStore for MemoryStore {
    fn put_output(&self, record: &OutputRecord) -> Result<(), StoreError> {
        let key = output_key(&record.owner, &record.tx_id)?;
        let mut outputs = self.outputs.lock().unwrap();
        if outputs.contains_key(&key) {
            return Err(StoreError::Duplicate(key));
        }
        outputs.insert(key, record.clone());
        Ok(())
    }

    fn get_output(&self, owner: &Address, tx_id: &str) -> Result<OutputRecord, StoreError> {
        let key = output_key(owner, tx_id)?;
        self.outputs
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or(StoreError::NotFound(key))
    }

    fn delete_output(&self, owner: &Address, tx_id: &str) -> Result<(), StoreError> {
        let key = output_key(owner, tx_id)?;
        self.outputs
            .lock()
            .unwrap()
            .remove(&key)
            .map(|_| ())
            .ok_or(StoreError::NotFound(key))
    }

    fn outputs_for_account(&self, owner: &Address) -> Result<Vec<OutputRecord>, StoreError> {
        // "output\0<owner>\0" prefixes exactly the owner's keys; BTreeMap
        // range order gives ascending tx_id.
        let prefix = composite_key(OUTPUT_PREFIX, &[owner.as_str(), ""])?;
        Ok(self
            .outputs
            .lock()
            .unwrap()
            .range(prefix.clone()..)
            .take_while(|(key, _)| key.starts_with(&prefix))
            .map(|(_, record)| record.clone())
            .collect())
    }

    fn output_count(&self) -> Result<u64, StoreError> {
        Ok(self.outputs.lock().unwrap().len() as u64)
    }
}

impl AllowanceStore for MemoryStore {
    fn put_allowance(
        &self,
        owner: &Address,
        spender: &Address,
        amount: Amount,
    ) -> Result<(), StoreError> {
        self.allowances
            .lock()
            .unwrap()
            .insert((owner.to_string(), spender.to_string()), amount);
        Ok(())
    }

    fn get_allowance(
        &self,
        owner: &Address,
        spender: &Address,
    ) -> Result<Option<Amount>, StoreError> {
        Ok(self
            .allowances
            .lock()
            .unwrap()
            .get(&(owner.to_string(), spender.to_string()))
            .copied())
    }
}

impl RoleStore for MemoryStore {
    fn put_role(&self, address: &Address, role: Role) -> Result<(), StoreError> {
        self.roles.lock().unwrap().insert(address.to_string(), role);
        Ok(())
    }

    fn get_role(&self, address: &Address) -> Result<Option<Role>, StoreError> {
        Ok(self.roles.lock().unwrap().get(address.as_str()).copied())
    }
}

impl DenyStore for MemoryStore {
    fn put_denied(&self, address: &Address, denied: bool) -> Result<(), StoreError> {
        self.denied
            .lock()
            .unwrap()
            .insert(address.to_string(), denied);
        Ok(())
    }

    fn is_denied(&self, address: &Address) -> Result<bool, StoreError> {
        Ok(self
            .denied
            .lock()
            .unwrap()
            .get(address.as_str())
            .copied()
            .unwrap_or(false))
    }
}

impl ParamStore for MemoryStore {
    fn token_name(&self) -> Result<Option<String>, StoreError> {
        Ok(self.get_param(NAME_KEY))
    }

    fn set_token_name(&self, name: &str) -> Result<(), StoreError> {
        self.put_param(NAME_KEY, name.to_string());
        Ok(())
    }

    fn token_symbol(&self) -> Result<Option<String>, StoreError> {
        Ok(self.get_param(SYMBOL_KEY))
    }

    fn set_token_symbol(&self, symbol: &str) -> Result<(), StoreError> {
        self.put_param(SYMBOL_KEY, symbol.to_string());
        Ok(())
    }

    fn total_supply(&self) -> Result<Option<Amount>, StoreError> {
        self.get_amount_param(TOTAL_SUPPLY_KEY)
    }

    fn set_total_supply(&self, supply: Amount) -> Result<(), StoreError> {
        self.put_param(TOTAL_SUPPLY_KEY, supply.to_string());
        Ok(())
    }

    fn gas_fee(&self) -> Result<Option<Amount>, StoreError> {
        self.get_amount_param(GAS_FEE_KEY)
    }

    fn set_gas_fee(&self, fee: Amount) -> Result<(), StoreError> {
        self.put_param(GAS_FEE_KEY, fee.to_string());
        Ok(())
    }

    fn fee_ceiling(&self) -> Result<Option<Amount>, StoreError> {
        self.get_amount_param(FEE_CEILING_KEY)
    }

    fn set_fee_ceiling(&self, ceiling: Amount) -> Result<(), StoreError> {
        self.put_param(FEE_CEILING_KEY, ceiling.to_string());
        Ok(())
    }

    fn foundation(&self) -> Result<Option<Address>, StoreError> {
        self.get_address_param(FOUNDATION_KEY)
    }

    fn set_foundation(&self, address: &Address) -> Result<(), StoreError> {
        self.put_param(FOUNDATION_KEY, address.to_string());
        Ok(())
    }

    fn bridge_contract(&self) -> Result<Option<Address>, StoreError> {
        self.get_address_param(BRIDGE_KEY)
    }

    fn set_bridge_contract(&self, address: &Address) -> Result<(), StoreError> {
        self.put_param(BRIDGE_KEY, address.to_string());
        Ok(())
    }

    fn gateway_admin(&self) -> Result<Option<Address>, StoreError> {
        self.get_address_param(GATEWAY_KEY)
    }

    fn set_gateway_admin(&self, address: &Address) -> Result<(), StoreError> {
        self.put_param(GATEWAY_KEY, address.to_string());
        Ok(())
    }
}

impl EventSink for MemoryStore {
    fn emit(&self, name: &str, payload: &[u8]) -> Result<(), StoreError> {
        self.events
            .lock()
            .unwrap()
            .push((name.to_string(), payload.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(tag: u8) -> Address {
        let raw: String = format!("{:02x}", tag).repeat(20);
        Address::parse(&raw).unwrap()
    }

    #[test]
    fn test_outputs_iterate_in_tx_id_order() {
        let store = MemoryStore::new();
        let a = addr(1);
        for tx in ["zz", "aa", "mm"] {
            store
                .put_output(&OutputRecord::new(a.clone(), tx, Amount::new(1)))
                .unwrap();
        }
        let ids: Vec<String> = store
            .outputs_for_account(&a)
            .unwrap()
            .into_iter()
            .map(|o| o.tx_id)
            .collect();
        assert_eq!(ids, vec!["aa", "mm", "zz"]);
    }

    #[test]
    fn test_outputs_scoped_to_owner() {
        let store = MemoryStore::new();
        store
            .put_output(&OutputRecord::new(addr(1), "tx", Amount::new(1)))
            .unwrap();
        store
            .put_output(&OutputRecord::new(addr(2), "tx", Amount::new(2)))
            .unwrap();
        assert_eq!(store.outputs_for_account(&addr(1)).unwrap().len(), 1);
        assert_eq!(store.output_count().unwrap(), 2);
    }

    #[test]
    fn test_put_duplicate_output_rejected() {
        let store = MemoryStore::new();
        let a = addr(1);
        store
            .put_output(&OutputRecord::new(a.clone(), "tx", Amount::new(40)))
            .unwrap();
        let err = store
            .put_output(&OutputRecord::new(a.clone(), "tx", Amount::new(7)))
            .unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(_)));
        // The first write survives untouched.
        assert_eq!(store.get_output(&a, "tx").unwrap().amount, Amount::new(40));
    }

    #[test]
    fn test_delete_missing_output_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.delete_output(&addr(1), "tx"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_params_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.token_name().unwrap().is_none());
        store.set_token_name("Tessera").unwrap();
        store.set_gas_fee(Amount::new(10)).unwrap();
        assert_eq!(store.token_name().unwrap().unwrap(), "Tessera");
        assert_eq!(store.gas_fee().unwrap().unwrap(), Amount::new(10));
    }

    #[test]
    fn test_events_recorded_in_order() {
        let store = MemoryStore::new();
        store.emit("transfer", b"one").unwrap();
        store.emit("approval", b"two").unwrap();
        store.emit("transfer", b"three").unwrap();
        assert_eq!(store.events().len(), 3);
        assert_eq!(store.events_named("transfer").len(), 2);
    }
}
