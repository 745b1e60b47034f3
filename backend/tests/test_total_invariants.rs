//! Property tests for scenario totals
//!
//! For any valid integer cost table:
//! 1. normal - small == base × (62 - 14)
//! 2. Both totals include 2 × (proposeBet + depositFund + commitBoard)
//! 3. Estimating is deterministic and leaves the table untouched

use std::collections::BTreeMap;

use match_gas_core_rs::{estimate, CostTable, GasCost, MatchSize};
use proptest::prelude::*;

/// Receipt-sized gas figures; large enough to be realistic, small enough
/// that base × 62 plus the rest never overflows.
fn gas() -> impl Strategy<Value = i64> {
    0i64..30_000_000
}

fn cost_table() -> impl Strategy<Value = (CostTable, i64, i64)> {
    (
        gas(),
        gas(),
        gas(),
        gas(),
        prop::collection::btree_map("[a-z][a-zA-Z]{2,12}", gas(), 0..12),
    )
        .prop_map(|(counterattack, propose, deposit, commit, extra)| {
            let mut entries: BTreeMap<String, GasCost> = extra
                .into_iter()
                .map(|(k, v)| (k, GasCost::Integer(v)))
                .collect();
            entries.insert("counterattack".to_string(), GasCost::Integer(counterattack));
            entries.insert("proposeBet".to_string(), GasCost::Integer(propose));
            entries.insert("depositFund".to_string(), GasCost::Integer(deposit));
            entries.insert("commitBoard".to_string(), GasCost::Integer(commit));
            let table = CostTable::from_entries(entries).unwrap();
            (table, counterattack, propose + deposit + commit)
        })
}

fn integer_total(table: &CostTable, size: MatchSize) -> i64 {
    estimate(table)
        .unwrap()
        .total(size)
        .and_then(GasCost::as_integer)
        .unwrap()
}

proptest! {
    #[test]
    fn test_normal_minus_small_is_scaled_base((table, base, _shared) in cost_table()) {
        let normal = integer_total(&table, MatchSize::Normal);
        let small = integer_total(&table, MatchSize::Small);
        prop_assert_eq!(normal - small, base * (62 - 14));
    }

    #[test]
    fn test_totals_include_doubled_shared_operations((table, base, shared) in cost_table()) {
        let rest: i64 = table
            .iter()
            .filter(|(name, _)| {
                !matches!(*name, "counterattack" | "proposeBet" | "depositFund" | "commitBoard")
            })
            .map(|(_, cost)| cost.as_integer().unwrap())
            .sum();

        prop_assert_eq!(
            integer_total(&table, MatchSize::Normal),
            base * 62 + 2 * shared + rest
        );
        prop_assert_eq!(
            integer_total(&table, MatchSize::Small),
            base * 14 + 2 * shared + rest
        );
    }

    #[test]
    fn test_estimate_is_deterministic((table, _base, _shared) in cost_table()) {
        let before = table.clone();
        let first = estimate(&table).unwrap();
        let second = estimate(&table).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(table, before);
    }
}
