//! The UTF-8 validation automaton.
//!
//! This is Björn Höhrmann's compact DFA with states renumbered `0..=8`, so a
//! transition row starts at `state * 16`. Every byte maps to one of twelve
//! character classes; the row of the current state then gives the next
//! state for that class.
//!
//! | state | expects                                 |
//! |-------|-----------------------------------------|
//! | 0     | a lead byte (accept)                    |
//! | 1     | nothing, absorbing (reject)             |
//! | 2     | 1 more byte in `80..=BF`                |
//! | 3     | 2 more bytes, next in `80..=BF`         |
//! | 4     | 2 more bytes after `E0`, next `A0..=BF` |
//! | 5     | 2 more bytes after `ED`, next `80..=9F` |
//! | 6     | 3 more bytes after `F0`, next `90..=BF` |
//! | 7     | 3 more bytes, next in `80..=BF`         |
//! | 8     | 3 more bytes after `F4`, next `80..=8F` |

pub(crate) const ACCEPT: u8 = 0;
pub(crate) const REJECT: u8 = 1;
pub(crate) const STATE_COUNT: u8 = 9;

#[rustfmt::skip]
pub(crate) static BYTE_CLASS: [u8; 256] = [
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0, // 00..1f
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0, // 20..3f
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0, // 40..5f
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0, // 60..7f
    1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,9,9,9,9,9,9,9,9,9,9,9,9,9,9,9,9, // 80..9f
    7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7, // a0..bf
    8,8,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2, // c0..df
    10,3,3,3,3,3,3,3,3,3,3,3,3,4,3,3,                                 // e0..ef
    11,6,6,6,5,8,8,8,8,8,8,8,8,8,8,8,                                 // f0..ff
];

#[rustfmt::skip]
pub(crate) static TRANSITIONS: [u8; 16 * STATE_COUNT as usize] = [
    0,1,2,3,5,8,7,1,1,1,4,6,1,1,1,1, // s0
    1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1, // s1
    1,0,1,1,1,1,1,0,1,0,1,1,1,1,1,1, // s2
    1,2,1,1,1,1,1,2,1,2,1,1,1,1,1,1, // s3
    1,1,1,1,1,1,1,2,1,1,1,1,1,1,1,1, // s4
    1,2,1,1,1,1,1,1,1,2,1,1,1,1,1,1, // s5
    1,1,1,1,1,1,1,3,1,3,1,1,1,1,1,1, // s6
    1,3,1,1,1,1,1,3,1,3,1,1,1,1,1,1, // s7
    1,3,1,1,1,1,1,1,1,1,1,1,1,1,1,1, // s8
];

/// Table-driven transition.
#[inline(always)]
pub(crate) fn step(state: u8, byte: u8) -> u8 {
    TRANSITIONS[usize::from(state) * 16 + usize::from(BYTE_CLASS[usize::from(byte)])]
}

/// Branching transition, equivalent to [`step`] for every `(state, byte)`.
#[inline(always)]
pub(crate) fn transition(state: u8, byte: u8) -> u8 {
    match state {
        0 => match byte {
            0x00..=0x7F => 0,
            0xC2..=0xDF => 2,
            0xE1..=0xEC | 0xEE | 0xEF => 3,
            0xE0 => 4,
            0xED => 5,
            0xF0 => 6,
            0xF1..=0xF3 => 7,
            0xF4 => 8,
            _ => 1,
        },
        2 => match byte {
            0x80..=0xBF => 0,
            _ => 1,
        },
        3 => match byte {
            0x80..=0xBF => 2,
            _ => 1,
        },
        4 => match byte {
            0xA0..=0xBF => 2,
            _ => 1,
        },
        5 => match byte {
            0x80..=0x9F => 2,
            _ => 1,
        },
        6 => match byte {
            0x90..=0xBF => 3,
            _ => 1,
        },
        7 => match byte {
            0x80..=0xBF => 3,
            _ => 1,
        },
        8 => match byte {
            0x80..=0x8F => 3,
            _ => 1,
        },
        _ => 1,
    }
}

/// Outcome of running a tier over one slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Scan {
    /// Automaton state after the slice (or at the rejecting byte).
    pub state: u8,
    /// Index of the rejecting byte, or the slice length if none rejected.
    pub stop: usize,
}

impl Scan {
    #[inline]
    pub(crate) fn rejected(self) -> bool {
        self.state == REJECT
    }

    /// Shift `stop` by `base`, for scans over a sub-slice.
    #[inline]
    pub(crate) fn offset_by(self, base: usize) -> Self {
        Self {
            state: self.state,
            stop: self.stop + base,
        }
    }
}

/// Run `bytes` through `f` from `state`, stopping at the first rejection.
#[inline(always)]
pub(crate) fn run_with(mut state: u8, bytes: &[u8], f: impl Fn(u8, u8) -> u8) -> Scan {
    for (i, &byte) in bytes.iter().enumerate() {
        state = f(state, byte);
        if state == REJECT {
            return Scan { state, stop: i };
        }
    }
    Scan {
        state,
        stop: bytes.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_and_branches_agree_everywhere() {
        for state in 0..STATE_COUNT {
            for byte in 0..=u8::MAX {
                assert_eq!(
                    step(state, byte),
                    transition(state, byte),
                    "state {state} byte {byte:#04x}"
                );
            }
        }
    }

    #[test]
    fn reject_is_absorbing() {
        for byte in 0..=u8::MAX {
            assert_eq!(step(REJECT, byte), REJECT);
        }
    }

    #[test]
    fn ascii_keeps_accept() {
        for byte in 0..=0x7F {
            assert_eq!(step(ACCEPT, byte), ACCEPT);
        }
    }

    #[test]
    fn run_stops_at_first_rejection() {
        let scan = run_with(ACCEPT, b"ab\xFFcd", step);
        assert_eq!(scan, Scan { state: REJECT, stop: 2 });
        let scan = run_with(ACCEPT, b"ab\xE2", step);
        assert_eq!(scan, Scan { state: 3, stop: 3 });
    }
}
