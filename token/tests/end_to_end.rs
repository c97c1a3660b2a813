//! Full-lifecycle scenario: mint, transfer, delegate, deny, sweep.

use tessera_ledger::OutputLedger;
use tessera_nullables::MemoryStore;
use tessera_token::{AccessControl, GasFeeRouter, MintConfig, Minter, TokenError, TokenInfo, TransferEngine};
use tessera_types::{Address, Amount, CallContext};

const CONTRACT: &str = "tessera";

fn addr(tag: u8) -> Address {
    Address::parse(&format!("{tag:02x}").repeat(20)).unwrap()
}

fn ctx(caller: &Address, tx_id: &str) -> CallContext {
    CallContext {
        caller: caller.clone(),
        tx_id: tx_id.to_string(),
        initiating_contract: CONTRACT.to_string(),
        own_contract: CONTRACT.to_string(),
    }
}

fn balance(store: &MemoryStore, account: &Address) -> Amount {
    OutputLedger::new(store).total_balance(account).unwrap()
}

#[test]
fn full_lifecycle_conserves_value() {
    let store = MemoryStore::new();
    let foundation = addr(0xf0);
    let gateway = addr(0xcc);
    let (alice, bob, carol) = (addr(1), addr(2), addr(3));

    // Mint 1000 to alice and 500 to bob; gas fee 10.
    Minter::new(&store)
        .mint(
            &ctx(&foundation, "tx-0000"),
            &MintConfig {
                name: "Tessera".to_string(),
                symbol: "TSR".to_string(),
                foundation: foundation.to_string(),
                accounts: vec![alice.to_string(), bob.to_string()],
                amounts: vec!["1000".to_string(), "500".to_string()],
                gateway: Some(gateway.to_string()),
                bridge: None,
                gas_fee: Some("10".to_string()),
            },
        )
        .unwrap();

    let info = TokenInfo::new(&store);
    assert_eq!(info.name().unwrap(), "Tessera");
    assert_eq!(info.total_supply().unwrap(), Amount::new(1500));

    let engine = TransferEngine::new(&store);

    // Ordinary transfer with fee split.
    engine
        .transfer(&ctx(&alice, "tx-0001"), bob.as_str(), "300")
        .unwrap();
    assert_eq!(balance(&store, &alice), Amount::new(700));
    assert_eq!(balance(&store, &bob), Amount::new(790));
    assert_eq!(balance(&store, &foundation), Amount::new(10));

    // Delegated spend, fee-free.
    engine
        .approve(&ctx(&bob, "tx-0002"), carol.as_str(), "200")
        .unwrap();
    engine
        .transfer_from(&ctx(&carol, "tx-0003"), bob.as_str(), carol.as_str(), "150")
        .unwrap();
    assert_eq!(balance(&store, &bob), Amount::new(640));
    assert_eq!(balance(&store, &carol), Amount::new(150));

    // Deny carol; her transfers stop, then resume after allow.
    let access = AccessControl::new(&store);
    access.deny(&foundation, &carol).unwrap();
    let err = engine
        .transfer(&ctx(&carol, "tx-0004"), alice.as_str(), "50")
        .unwrap_err();
    assert!(matches!(err, TokenError::AccountDenied(_)));
    access.allow(&foundation, &carol).unwrap();
    engine
        .transfer(&ctx(&carol, "tx-0005"), alice.as_str(), "50")
        .unwrap();
    assert_eq!(balance(&store, &carol), Amount::new(100));
    assert_eq!(balance(&store, &alice), Amount::new(740));

    // Sweep accumulated gas from bob to the foundation.
    GasFeeRouter::new(&store)
        .sweep(&ctx(&gateway, "tx-0006"), bob.as_str(), "40")
        .unwrap();
    assert_eq!(balance(&store, &bob), Amount::new(600));

    // Value conservation: total across all accounts equals the mint.
    let total = [&alice, &bob, &carol, &foundation, &gateway]
        .iter()
        .map(|a| balance(&store, a).raw())
        .sum::<u128>();
    assert_eq!(total, 1500);
    assert_eq!(info.total_supply().unwrap(), Amount::new(1500));
}
