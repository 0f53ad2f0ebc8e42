use std::collections::HashMap;

use cdnbytes_aggregate::{BucketAggregator, BucketBuffer, InputRecord};
use proptest::prelude::*;

/// Keys drawn from a small vocabulary so buckets collide often.
fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{0,3}cdnl3nl[a-z]{0,3}",
        "[a-z]{0,3}cdnak[a-z]{0,3}",
        "[a-z]{0,3}cndllnwnl[a-z]{0,3}",
        "[a-z]{0,3}cdncd[a-z]{0,3}",
        "(Level3|Akamai|LimeLight|CDNetworks)",
        "[a-z_]{1,6}",
    ]
}

fn record_strategy() -> impl Strategy<Value = HashMap<String, i64>> {
    prop::collection::hash_map(key_strategy(), any::<i64>(), 0..8)
}

fn buffer_from(agg: &BucketAggregator, records: &[HashMap<String, i64>]) -> BucketBuffer {
    let mut buffer = agg.new_buffer();
    for rec in records {
        let rec: InputRecord = rec.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        agg.ingest(&mut buffer, Some(&rec));
    }
    buffer
}

fn buffer_strategy() -> impl Strategy<Value = Vec<HashMap<String, i64>>> {
    prop::collection::vec(record_strategy(), 0..4)
}

fn raw_pairs_strategy() -> impl Strategy<Value = Vec<(String, i64)>> {
    prop::collection::vec((key_strategy(), any::<i64>()), 0..12)
}

fn merged(agg: &BucketAggregator, a: &BucketBuffer, b: &BucketBuffer) -> BucketBuffer {
    let mut acc = a.clone();
    agg.merge(&mut acc, b);
    acc
}

// ── Classification ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn classify_is_first_match_or_identity(key in key_strategy()) {
        let agg = BucketAggregator::default();
        let expected = agg
            .table()
            .rules()
            .iter()
            .find(|rule| key.contains(rule.pattern.as_str()))
            .map(|rule| rule.bucket.clone())
            .unwrap_or_else(|| key.clone());
        prop_assert_eq!(agg.classify(&key), expected.as_str());
    }

    #[test]
    fn classify_is_idempotent(key in key_strategy()) {
        let agg = BucketAggregator::default();
        let once = agg.classify(&key).to_string();
        prop_assert_eq!(agg.classify(&once), once.as_str());
    }
}

// ── Merge laws ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn merge_identity(a in buffer_strategy()) {
        let agg = BucketAggregator::default();
        let a = buffer_from(&agg, &a);
        prop_assert_eq!(merged(&agg, &a, &agg.new_buffer()), a.clone());
        prop_assert_eq!(merged(&agg, &agg.new_buffer(), &a), a);
    }

    #[test]
    fn merge_commutative(a in buffer_strategy(), b in buffer_strategy()) {
        let agg = BucketAggregator::default();
        let a = buffer_from(&agg, &a);
        let b = buffer_from(&agg, &b);
        prop_assert_eq!(merged(&agg, &a, &b), merged(&agg, &b, &a));
    }

    #[test]
    fn merge_associative(
        a in buffer_strategy(),
        b in buffer_strategy(),
        c in buffer_strategy(),
    ) {
        let agg = BucketAggregator::default();
        let a = buffer_from(&agg, &a);
        let b = buffer_from(&agg, &b);
        let c = buffer_from(&agg, &c);

        let left = merged(&agg, &merged(&agg, &a, &b), &c);
        let right = merged(&agg, &a, &merged(&agg, &b, &c));
        let swapped = merged(&agg, &merged(&agg, &a, &c), &b);
        prop_assert_eq!(&left, &right);
        prop_assert_eq!(&left, &swapped);
    }

    #[test]
    fn merge_idempotent(a in buffer_strategy()) {
        let agg = BucketAggregator::default();
        let a = buffer_from(&agg, &a);
        prop_assert_eq!(merged(&agg, &a, &a), a);
    }

    #[test]
    fn merge_equals_single_key_ingests(a in buffer_strategy(), b in buffer_strategy()) {
        let agg = BucketAggregator::default();
        let a = buffer_from(&agg, &a);
        let b = buffer_from(&agg, &b);

        let mut by_ingest = a.clone();
        for (key, value) in b.iter() {
            let single: InputRecord = [(key, value)].into_iter().collect();
            agg.ingest(&mut by_ingest, Some(&single));
        }
        prop_assert_eq!(merged(&agg, &a, &b), by_ingest);
    }

    #[test]
    fn partitioning_does_not_change_result(
        records in prop::collection::vec(record_strategy(), 0..10),
        split in 0usize..10,
    ) {
        let agg = BucketAggregator::default();
        let whole = buffer_from(&agg, &records);

        let split = split.min(records.len());
        let (left, right) = records.split_at(split);
        let parts = merged(&agg, &buffer_from(&agg, right), &buffer_from(&agg, left));

        prop_assert_eq!(agg.finalize(&whole), agg.finalize(&parts));
    }
}

// ── Merge laws over buffers built from raw pairs ──────────────────────────

proptest! {
    #[test]
    fn raw_pair_buffers_merge_commutative(a in raw_pairs_strategy(), b in raw_pairs_strategy()) {
        let agg = BucketAggregator::default();
        let a = agg.buffer_from_pairs(a);
        let b = agg.buffer_from_pairs(b);
        prop_assert_eq!(merged(&agg, &a, &b), merged(&agg, &b, &a));
    }

    #[test]
    fn raw_pair_buffers_merge_associative(
        a in raw_pairs_strategy(),
        b in raw_pairs_strategy(),
        c in raw_pairs_strategy(),
    ) {
        let agg = BucketAggregator::default();
        let a = agg.buffer_from_pairs(a);
        let b = agg.buffer_from_pairs(b);
        let c = agg.buffer_from_pairs(c);

        let left = merged(&agg, &merged(&agg, &a, &b), &c);
        let right = merged(&agg, &a, &merged(&agg, &b, &c));
        let swapped = merged(&agg, &merged(&agg, &a, &c), &b);
        prop_assert_eq!(&left, &right);
        prop_assert_eq!(&left, &swapped);
    }

    #[test]
    fn raw_pair_buffer_equals_ingest_of_same_pairs(pairs in raw_pairs_strategy()) {
        let agg = BucketAggregator::default();
        let mut by_ingest = agg.new_buffer();
        for (key, value) in &pairs {
            let single: InputRecord = [(key.as_str(), *value)].into_iter().collect();
            agg.ingest(&mut by_ingest, Some(&single));
        }
        prop_assert_eq!(agg.buffer_from_pairs(pairs), by_ingest);
    }
}

// ── Max semantics ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn bucket_value_is_max_of_contributions(
        records in prop::collection::vec(record_strategy(), 1..6),
    ) {
        let agg = BucketAggregator::default();
        let buffer = buffer_from(&agg, &records);

        let mut expected: HashMap<String, i64> = HashMap::new();
        for rec in &records {
            for (key, &value) in rec {
                let bucket = agg.classify(key).to_string();
                let slot = expected.entry(bucket).or_insert(value);
                *slot = (*slot).max(value);
            }
        }
        prop_assert_eq!(agg.finalize(&buffer).into_inner(), expected);
    }

    #[test]
    fn every_key_is_canonical_or_verbatim(records in prop::collection::vec(record_strategy(), 0..6)) {
        let agg = BucketAggregator::default();
        let buffer = buffer_from(&agg, &records);
        let buckets = agg.table().buckets();
        for (key, _) in buffer.iter() {
            let verbatim = records.iter().any(|r| r.contains_key(key));
            prop_assert!(buckets.contains(&key) || verbatim, "synthesized key {}", key);
        }
    }
}
