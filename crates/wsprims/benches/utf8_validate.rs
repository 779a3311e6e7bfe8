//! Benchmark – `wsprims::Utf8Validator` per tier
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use wsprims::{Utf8Tier, Utf8Validator, ValidatorOptions, produce_chunks};

/// Deterministic text payload of exactly `target_len` bytes. `non_ascii`
/// selects a mix of 2-, 3- and 4-byte code points instead of plain ASCII,
/// which keeps the vector tiers off their fast path.
fn make_text_payload(target_len: usize, non_ascii: bool) -> Vec<u8> {
    let unit = if non_ascii {
        "h\u{e9}llo w\u{20ac}rld \u{1f600} "
    } else {
        "hello world, plain ascii text "
    };
    unit.bytes().cycle().take(target_len).collect()
}

fn run_validator(tier: Utf8Tier, chunks: &[&[u8]]) -> bool {
    let mut validator = Utf8Validator::with_options(ValidatorOptions { tier: Some(tier) });
    let mut ok = true;
    for chunk in chunks {
        ok &= !validator.validate(chunk).is_invalid();
    }
    ok
}

fn bench_utf8_validate(c: &mut Criterion) {
    for (label, non_ascii) in [("ascii", false), ("mixed", true)] {
        let payload = make_text_payload(64 * 1024, non_ascii);
        let mut group = c.benchmark_group(format!("utf8_validate_{label}"));
        group.throughput(Throughput::Bytes(payload.len() as u64));

        for &parts in &[1usize, 64, 4_096] {
            let chunks = produce_chunks(&payload, parts);
            for tier in Utf8Tier::ALL.into_iter().filter(|tier| tier.is_available()) {
                let name = format!("{tier:?}").to_lowercase();
                group.bench_with_input(BenchmarkId::new(name, parts), &chunks, |b, chunks| {
                    b.iter(|| black_box(run_validator(tier, black_box(chunks))));
                });
            }
        }
        group.finish();
    }
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_utf8_validate }
criterion_main!(benches);
