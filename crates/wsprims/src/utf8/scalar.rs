use super::{
    dfa::{self, Scan},
    tier::ValidateTier,
};

pub(crate) struct TableDfa;

impl ValidateTier for TableDfa {
    #[inline]
    fn run(state: u8, bytes: &[u8]) -> Scan {
        dfa::run_with(state, bytes, dfa::step)
    }
}

pub(crate) struct UnrolledDfa;

impl ValidateTier for UnrolledDfa {
    #[inline]
    fn run(state: u8, bytes: &[u8]) -> Scan {
        dfa::run_with(state, bytes, dfa::transition)
    }
}
