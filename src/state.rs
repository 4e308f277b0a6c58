// state.rs
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;

/// Seed of the counter PDA. A program owns exactly one counter.
pub const COUNTER_SEED: &[u8] = b"counter";

#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Eq)]
pub struct Counter {
    /// The only identity allowed to mutate the count; set once at initialize.
    pub authority: Pubkey,
    pub count: u64,
    /// Bump produced by the PDA derivation, stored for re-verification.
    pub bump: u8,
}

impl Counter {
    pub const SIZE: usize = 32 + 8 + 1;

    /// Derive the counter PDA and bump for `program_id`.
    pub fn pda(program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[COUNTER_SEED], program_id)
    }
}
