//! Ranking of catalog records by a numeric field.
//!
//! The routine is a recursive, allocation-per-call partition sort:
//!
//! - the first element is the pivot;
//! - the remainder splits into `key <= pivot` (lower) and `key > pivot` (upper),
//!   each keeping its input order;
//! - result = `rank(lower) ++ [pivot] ++ rank(upper)`.
//!
//! Elements equal to the pivot always land before it. The sort is not stable in
//! general and is O(n^2) on already-ordered input, which is fine at catalog scale.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use confereai_core::DomainError;

use crate::item::InventoryRecord;

/// Numeric record fields that can drive a ranking.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RankField {
    StockLevel,
}

impl RankField {
    pub fn key(self, record: &InventoryRecord) -> i64 {
        match self {
            RankField::StockLevel => record.stock_level(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RankField::StockLevel => "stockLevel",
        }
    }
}

impl FromStr for RankField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stockLevel" | "stock_level" => Ok(RankField::StockLevel),
            other => Err(DomainError::validation(format!("unknown ranking field: {other}"))),
        }
    }
}

impl core::fmt::Display for RankField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rank records ascending by `field`. The input is left untouched.
pub fn rank_by(records: &[InventoryRecord], field: RankField) -> Vec<InventoryRecord> {
    rank_by_key(records, |r| field.key(r))
}

/// Generic form of [`rank_by`]: rank any items ascending by `key`.
pub fn rank_by_key<T, K, F>(items: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    partition_sort(items, &key)
}

fn partition_sort<T, K, F>(items: &[T], key: &F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let Some((pivot, rest)) = items.split_first() else {
        return Vec::new();
    };
    if rest.is_empty() {
        return vec![pivot.clone()];
    }

    let pivot_key = key(pivot);
    let (lower, upper): (Vec<T>, Vec<T>) = rest.iter().cloned().partition(|i| key(i) <= pivot_key);

    let mut ranked = partition_sort(&lower, key);
    ranked.reserve(upper.len() + 1);
    ranked.push(pivot.clone());
    ranked.extend(partition_sort(&upper, key));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use confereai_core::ItemCode;
    use proptest::prelude::*;

    fn record(code: &str, stock: i64) -> InventoryRecord {
        InventoryRecord::new(ItemCode::from(code), code, "test", stock)
    }

    fn levels(records: &[InventoryRecord]) -> Vec<i64> {
        records.iter().map(InventoryRecord::stock_level).collect()
    }

    #[test]
    fn ranks_by_stock_level() {
        let records = vec![record("GAZ", 75), record("SER", 850), record("ALC", 48)];
        let ranked = rank_by(&records, RankField::StockLevel);
        assert_eq!(levels(&ranked), vec![48, 75, 850]);
        // input untouched
        assert_eq!(levels(&records), vec![75, 850, 48]);
    }

    #[test]
    fn empty_and_single_inputs() {
        assert!(rank_by(&[], RankField::StockLevel).is_empty());
        let single = vec![record("A", 3)];
        assert_eq!(rank_by(&single, RankField::StockLevel), single);
    }

    #[test]
    fn ties_with_the_pivot_go_before_it() {
        // Pivot "P" (5); "Q" (5) is a tie and must come out ahead of it.
        let records = vec![record("P", 5), record("Q", 5), record("R", 1)];
        let ranked = rank_by(&records, RankField::StockLevel);
        let codes: Vec<&str> = ranked.iter().map(|r| r.code().as_str()).collect();
        assert_eq!(codes, vec!["R", "Q", "P"]);
    }

    #[test]
    fn negative_levels_rank_first() {
        let records = vec![record("A", 0), record("B", -12), record("C", 7)];
        assert_eq!(levels(&rank_by(&records, RankField::StockLevel)), vec![-12, 0, 7]);
    }

    #[test]
    fn rank_field_parses_both_spellings() {
        assert_eq!("stockLevel".parse::<RankField>().unwrap(), RankField::StockLevel);
        assert_eq!("stock_level".parse::<RankField>().unwrap(), RankField::StockLevel);
        assert!("name".parse::<RankField>().is_err());
        assert_eq!(RankField::StockLevel.to_string(), "stockLevel");
    }

    proptest! {
        /// Property: output is non-decreasing, same length, and a permutation of the input.
        #[test]
        fn ranking_is_an_ordered_permutation(stocks in prop::collection::vec(-1000i64..5000, 0..60)) {
            let records: Vec<InventoryRecord> = stocks
                .iter()
                .enumerate()
                .map(|(i, s)| record(&format!("C{i:03}"), *s))
                .collect();

            let ranked = rank_by(&records, RankField::StockLevel);
            prop_assert_eq!(ranked.len(), records.len());
            prop_assert!(ranked.windows(2).all(|w| w[0].stock_level() <= w[1].stock_level()));

            let mut input_codes: Vec<_> = records.iter().map(|r| r.code().clone()).collect();
            let mut output_codes: Vec<_> = ranked.iter().map(|r| r.code().clone()).collect();
            input_codes.sort();
            output_codes.sort();
            prop_assert_eq!(input_codes, output_codes);
        }

        #[test]
        fn rank_by_key_matches_std_sort(values in prop::collection::vec(any::<i32>(), 0..80)) {
            let mut expected = values.clone();
            expected.sort();
            prop_assert_eq!(rank_by_key(&values, |v| *v), expected);
        }
    }
}
