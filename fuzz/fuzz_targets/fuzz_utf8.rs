#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wsprims::{Utf8Tier, Utf8Validator, ValidatorOptions, Verdict};

#[derive(Debug, Arbitrary)]
struct Input {
    payload: Vec<u8>,
    /// Chunk lengths; each is taken modulo the remaining length, plus one.
    splits: Vec<u16>,
}

/// Verdict, automaton state and cumulative offset after every chunk.
fn run(tier: Utf8Tier, chunks: &[&[u8]]) -> Vec<(Verdict, wsprims::DfaState, usize)> {
    let mut validator = Utf8Validator::with_options(ValidatorOptions { tier: Some(tier) });
    chunks
        .iter()
        .map(|chunk| {
            let verdict = validator.validate(chunk);
            (verdict, validator.state(), validator.total_index())
        })
        .collect()
}

fn chunks<'a>(payload: &'a [u8], splits: &[u16]) -> Vec<&'a [u8]> {
    let mut out = Vec::new();
    let mut idx = 0;
    for &s in splits {
        let remaining = payload.len() - idx;
        if remaining == 0 {
            break;
        }
        let size = 1 + usize::from(s) % remaining;
        out.push(&payload[idx..idx + size]);
        idx += size;
    }
    if idx < payload.len() {
        out.push(&payload[idx..]);
    }
    out
}

fuzz_target!(|input: Input| {
    let chunks = chunks(&input.payload, &input.splits);

    // Every tier must agree after every chunk.
    let reference = run(Utf8Tier::TableDfa, &chunks);
    for tier in Utf8Tier::ALL {
        assert_eq!(run(tier, &chunks), reference, "{tier:?}");
    }

    // Chunking must not change the outcome.
    let mut whole = Utf8Validator::new();
    let verdict = whole.validate(&input.payload);
    let last = reference.iter().find(|(v, ..)| v.is_invalid()).or(reference.last());
    match (verdict, last) {
        (Verdict::Invalid { total, .. }, Some((Verdict::Invalid { total: chunked, .. }, ..))) => {
            assert_eq!(total, *chunked);
        }
        (verdict, Some((chunked, state, _))) => {
            assert_eq!(verdict, *chunked);
            assert_eq!(whole.state(), *state);
        }
        (verdict, None) => assert_eq!(verdict, Verdict::Valid),
    }

    // Acceptance matches the standard library.
    assert_eq!(
        std::str::from_utf8(&input.payload).is_ok(),
        verdict == Verdict::Valid
    );
});
