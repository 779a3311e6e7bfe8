use alloc::{vec, vec::Vec};

use rstest::rstest;

use super::*;
use crate::UnknownTier;

const KEY: [u8; 4] = [0x01, 0x02, 0x03, 0x04];

fn masker(tier: MaskTier) -> XorMasker {
    XorMasker::with_options(
        Some(KEY),
        MaskerOptions {
            tier: Some(tier),
            ..MaskerOptions::default()
        },
    )
}

#[rstest]
fn key_repeats_after_four_bytes(#[values(MaskTier::Simple, MaskTier::Sse2)] tier: MaskTier) {
    let mut m = masker(tier);
    let mut buf = [0u8; 5];
    m.process(&mut buf);
    assert_eq!(buf, [0x01, 0x02, 0x03, 0x04, 0x01]);
    assert_eq!(m.pointer(), 5);
}

#[rstest]
fn zeros_reveal_key_for_every_length(
    #[values(MaskTier::Simple, MaskTier::Sse2)] tier: MaskTier,
    #[values(0, 1, 3, 15, 16, 17, 31, 32, 33, 64, 100)] len: usize,
) {
    let mut m = masker(tier);
    let mut buf = vec![0u8; len];
    m.process(&mut buf);
    let expected: Vec<u8> = (0..len).map(|i| KEY[i % 4]).collect();
    assert_eq!(buf, expected);
    assert_eq!(m.pointer(), len);
}

#[rstest]
fn unaligned_starts_and_positions(#[values(MaskTier::Simple, MaskTier::Sse2)] tier: MaskTier) {
    let backing = vec![0u8; 96];
    for start in 0..16 {
        for position in 0..4 {
            let mut m = masker(tier);
            m.process(&mut vec![0u8; position]);
            let mut buf = backing.clone();
            m.process(&mut buf[start..]);
            for (i, &byte) in buf[start..].iter().enumerate() {
                assert_eq!(byte, KEY[(position + i) % 4], "start {start} position {position}");
            }
            assert!(buf[..start].iter().all(|&b| b == 0));
        }
    }
}

#[test]
fn split_processing_matches_one_shot() {
    let data: Vec<u8> = (0..=255).collect();
    let mut whole = XorMasker::from_key(KEY);
    let expected = whole.process_to_vec(&data);

    for tier in MaskTier::ALL {
        for split in [0, 1, 2, 3, 5, 16, 17, 100, 255, 256] {
            let mut m = masker(tier);
            let mut out = m.process_to_vec(&data[..split]);
            out.extend(m.process_to_vec(&data[split..]));
            assert_eq!(out, expected, "{tier:?} split {split}");
        }
    }
}

#[test]
fn masking_twice_restores_input() {
    let data = b"The quick brown fox jumps over the lazy dog, twice over.";
    let mut m = XorMasker::from_key([0xde, 0xad, 0xbe, 0xef]);
    let masked = m.process_to_vec(data);
    assert_ne!(&masked[..], &data[..]);
    m.reset();
    assert_eq!(m.process_to_vec(&masked), data);
}

#[test]
fn reset_rewinds_to_first_key_byte() {
    let mut m = XorMasker::from_key(KEY);
    m.process(&mut [0u8; 3]);
    m.reset();
    assert_eq!(m.pointer(), 0);
    assert_eq!(m.process_to_vec(&[0, 0]), [0x01, 0x02]);
    assert_eq!(m.key(), Some(KEY));
}

#[test]
fn null_masker_only_counts() {
    let mut m = XorMasker::null();
    assert!(m.is_null());
    let mut buf = *b"unmasked frame";
    m.process(&mut buf);
    assert_eq!(&buf, b"unmasked frame");
    assert_eq!(m.pointer(), 14);
    m.reset();
    assert_eq!(m.pointer(), 0);
}

#[rstest]
#[case::empty(&[])]
#[case::short(&[1, 2, 3])]
#[case::long(&[1, 2, 3, 4, 5])]
fn wrong_key_length_is_rejected(#[case] key: &[u8]) {
    assert_eq!(
        XorMasker::new(key).unwrap_err(),
        MaskerError::InvalidKey { len: key.len() }
    );
}

#[test]
fn four_byte_slice_key_is_accepted() {
    let m = XorMasker::new(&KEY[..]).unwrap();
    assert_eq!(m.key(), Some(KEY));
    assert_eq!(m.tier(), MaskTier::best_available());
}

#[test]
fn payload_factory_picks_tier_by_length() {
    assert_eq!(XorMasker::for_payload(Some(KEY), None).tier(), MaskTier::Simple);
    assert_eq!(XorMasker::for_payload(Some(KEY), Some(127)).tier(), MaskTier::Simple);
    assert_eq!(
        XorMasker::for_payload(Some(KEY), Some(128)).tier(),
        MaskTier::best_available()
    );
    assert!(XorMasker::for_payload(None, Some(4096)).is_null());

    let custom = MaskerOptions {
        simd_threshold: 16,
        ..MaskerOptions::default()
    };
    assert_eq!(
        XorMasker::for_payload_with(Some(KEY), Some(16), custom).tier(),
        MaskTier::best_available()
    );
    let forced = MaskerOptions {
        tier: Some(MaskTier::Simple),
        ..custom
    };
    assert_eq!(
        XorMasker::for_payload_with(Some(KEY), Some(1 << 20), forced).tier(),
        MaskTier::Simple
    );
}

#[test]
fn requests_are_clamped_never_raised() {
    let mut m = XorMasker::from_key(KEY);
    for tier in MaskTier::ALL {
        let selected = m.set_tier(Some(tier));
        assert!(selected <= tier);
        assert!(selected.is_available());
    }
    assert_eq!(m.set_tier(None), MaskTier::best_available());
}

#[test]
fn tier_codes() {
    assert_eq!(MaskTier::try_from(1), Ok(MaskTier::Simple));
    assert_eq!(MaskTier::try_from(2), Ok(MaskTier::Sse2));
    assert_eq!(MaskTier::try_from(0), Err(UnknownTier(0)));
}
