#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wsprims::{MaskTier, MaskerOptions, XorMasker};

#[derive(Debug, Arbitrary)]
struct Input {
    key: [u8; 4],
    /// Bytes consumed before `payload`, to start mid-key.
    skip: u8,
    /// Leading bytes dropped from the buffer, to vary alignment.
    misalign: u8,
    payload: Vec<u8>,
    split: u16,
}

fuzz_target!(|input: Input| {
    let start = usize::from(input.skip % 4);
    let expected: Vec<u8> = input
        .payload
        .iter()
        .enumerate()
        .map(|(i, b)| b ^ input.key[(start + i) % 4])
        .collect();

    let misalign = usize::from(input.misalign % 16);
    let split = usize::from(input.split) % (input.payload.len() + 1);

    for tier in MaskTier::ALL {
        let mut masker = XorMasker::with_options(
            Some(input.key),
            MaskerOptions {
                tier: Some(tier),
                ..MaskerOptions::default()
            },
        );
        masker.process(&mut vec![0u8; start]);

        let mut backing = vec![0u8; misalign];
        backing.extend_from_slice(&input.payload);
        let buf = &mut backing[misalign..];
        let (head, tail) = buf.split_at_mut(split);
        masker.process(head);
        masker.process(tail);

        assert_eq!(&backing[misalign..], &expected[..], "{tier:?}");
        assert_eq!(masker.pointer(), start + input.payload.len());

        // Masking again from the same position restores the payload.
        masker.reset();
        masker.process(&mut vec![0u8; start]);
        masker.process(&mut backing[misalign..]);
        assert_eq!(&backing[misalign..], &input.payload[..]);
    }
});
