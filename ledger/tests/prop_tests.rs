use proptest::prelude::*;

use tessera_ledger::{LedgerError, OutputLedger};
use tessera_nullables::MemoryStore;
use tessera_store::OutputStore;
use tessera_types::{Address, Amount};

fn account() -> Address {
    Address::parse(&hex::encode([7u8; 20])).unwrap()
}

proptest! {
    /// Debiting any amount either conserves value exactly (balance drops by
    /// the debited amount) or fails leaving the outputs untouched.
    #[test]
    fn debit_conserves_or_rejects(
        outputs in prop::collection::vec(1u64..10_000, 1..12),
        request in 1u64..120_000,
    ) {
        let store = MemoryStore::new();
        let ledger = OutputLedger::new(&store);
        let a = account();
        for (i, value) in outputs.iter().enumerate() {
            ledger.credit(&a, &format!("tx-{i:04}"), Amount::new(*value as u128)).unwrap();
        }
        let before = ledger.total_balance(&a).unwrap();
        let request = Amount::new(request as u128);

        match ledger.debit(&a, "tx-debit", request) {
            Ok(()) => {
                let after = ledger.total_balance(&a).unwrap();
                prop_assert_eq!(after, before.checked_sub(request).unwrap());
            }
            Err(LedgerError::InsufficientBalance { have, need }) => {
                prop_assert!(before < request);
                prop_assert_eq!(have, before);
                prop_assert_eq!(need, request);
                prop_assert_eq!(ledger.total_balance(&a).unwrap(), before);
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    /// A successful overshooting debit leaves exactly one replacement
    /// output holding the overshoot.
    #[test]
    fn split_remainder_is_exact(
        outputs in prop::collection::vec(1u64..1000, 1..8),
        cut in 1u64..8000,
    ) {
        let total: u64 = outputs.iter().sum();
        prop_assume!(cut < total);

        let store = MemoryStore::new();
        let ledger = OutputLedger::new(&store);
        let a = account();
        for (i, value) in outputs.iter().enumerate() {
            ledger.credit(&a, &format!("tx-{i:04}"), Amount::new(*value as u128)).unwrap();
        }
        ledger.debit(&a, "tx-debit", Amount::new(cut as u128)).unwrap();
        prop_assert_eq!(
            ledger.total_balance(&a).unwrap(),
            Amount::new((total - cut) as u128)
        );
    }

    /// Identical starting outputs and request always select identically:
    /// the surviving output set is deterministic.
    #[test]
    fn selection_is_deterministic(
        outputs in prop::collection::vec(1u64..1000, 1..8),
        cut in 1u64..4000,
    ) {
        let run = || {
            let store = MemoryStore::new();
            let ledger = OutputLedger::new(&store);
            let a = account();
            for (i, value) in outputs.iter().enumerate() {
                ledger.credit(&a, &format!("tx-{i:04}"), Amount::new(*value as u128)).unwrap();
            }
            let _ = ledger.debit(&a, "tx-debit", Amount::new(cut as u128));
            store
                .outputs_for_account(&a)
                .unwrap()
                .into_iter()
                .map(|o| (o.tx_id, o.amount))
                .collect::<Vec<_>>()
        };
        prop_assert_eq!(run(), run());
    }
}
