//! # Block Anchoring Benchmarks
//!
//! Window aggregation cost as the anchoring period grows.
//!
//! | Operation | Complexity | Target |
//! |-----------|------------|--------|
//! | `summarize` | O(period) lookups | < 1ms at period 1000 |
//! | request encoding | O(1) | < 50µs |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qc_18_block_anchoring::test_utils::{make_test_block, make_test_chain};
use qc_18_block_anchoring::{build_payload, encode_request, summarize};
use std::time::Duration;

fn bench_window_summarize(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-18-window-summarize");
    group.measurement_time(Duration::from_secs(5));

    let chain_len = 2_000usize;
    let counts: Vec<usize> = (0..chain_len).map(|h| h % 17).collect();
    let provider = make_test_chain(&counts);
    let tip = make_test_block(chain_len as u64, 5);

    for period in [1u64, 10, 100, 1_000] {
        group.throughput(Throughput::Elements(period));
        group.bench_with_input(BenchmarkId::from_parameter(period), &period, |b, &period| {
            b.iter(|| black_box(summarize(&tip, period, &provider)))
        });
    }

    group.finish();
}

fn bench_request_encoding(c: &mut Criterion) {
    let provider = make_test_chain(&[3; 64]);
    let summary = summarize(&make_test_block(64, 3), 64, &provider).expect("full window");
    let payload = build_payload(summary);

    c.bench_function("qc-18-encode-request", |b| {
        b.iter(|| black_box(encode_request(&[0x15; 20], &payload)))
    });
}

criterion_group!(benches, bench_window_summarize, bench_request_encoding);
criterion_main!(benches);
