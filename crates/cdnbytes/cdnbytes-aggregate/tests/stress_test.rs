//! High-volume fold and merge-tree tests.

use std::time::Instant;

use cdnbytes_aggregate::{BucketAggregator, BucketBuffer, InputRecord};

const TAGS: [&str; 6] = ["cdnl3nl", "cdnak", "cndllnwnl", "cdncd", "origin", "p2p"];

fn make_record(row: usize) -> InputRecord {
    (0..TAGS.len())
        .map(|i| {
            let tag = TAGS[(row + i) % TAGS.len()];
            let value = ((row * 7919 + i * 104_729) % 1_000_003) as i64;
            (format!("bytes_{tag}_{i}"), value)
        })
        .collect()
}

#[test]
fn stress_100k_rows_single_buffer() {
    let agg = BucketAggregator::default();
    let mut buffer = agg.new_buffer();

    let start = Instant::now();
    for row in 0..100_000 {
        agg.ingest(&mut buffer, Some(&make_record(row)));
    }
    let elapsed = start.elapsed();

    for bucket in ["Level3", "Akamai", "LimeLight", "CDNetworks"] {
        assert!(buffer.contains(bucket), "missing {bucket}");
    }
    assert!(
        elapsed.as_secs() < 10,
        "100K rows took {elapsed:?}, expected < 10s"
    );
}

#[test]
fn stress_merge_tree_matches_sequential_fold() {
    let agg = BucketAggregator::default();
    let rows: Vec<InputRecord> = (0..20_000).map(make_record).collect();

    let mut sequential = agg.new_buffer();
    for row in &rows {
        agg.ingest(&mut sequential, Some(row));
    }

    // 64 partitions, then pairwise tree merge.
    let mut level: Vec<BucketBuffer> = rows
        .chunks(rows.len() / 64)
        .map(|chunk| {
            let mut buffer = agg.new_buffer();
            for row in chunk {
                agg.ingest(&mut buffer, Some(row));
            }
            buffer
        })
        .collect();
    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| {
                let mut acc = pair[0].clone();
                if let Some(other) = pair.get(1) {
                    agg.merge(&mut acc, other);
                }
                acc
            })
            .collect();
    }

    assert_eq!(agg.finalize(&level[0]), agg.finalize(&sequential));
}
