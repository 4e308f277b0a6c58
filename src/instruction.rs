// instruction.rs
use solana_program::{
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    pubkey::Pubkey,
    system_program,
};

use crate::state::Counter;

pub const INITIALIZE: [u8; 8] = [0, 0, 0, 0, 0, 0, 0, 0];
pub const INCREMENT: [u8; 8] = [1, 0, 0, 0, 0, 0, 0, 0];
pub const DECREMENT: [u8; 8] = [2, 0, 0, 0, 0, 0, 0, 0];

pub enum CounterInstruction {
    /// Create the counter PDA with count 0 and the caller as authority.
    ///
    /// Accounts:
    /// 0. `[signer, writable]` authority (pays for the account)
    /// 1. `[writable]` counter PDA
    /// 2. `[]` system program
    Initialize,
    /// Accounts:
    /// 0. `[signer]` authority
    /// 1. `[writable]` counter PDA
    Increment,
    /// Accounts:
    /// 0. `[signer]` authority
    /// 1. `[writable]` counter PDA
    Decrement,
}

impl CounterInstruction {
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        // Ensure the input has at least 8 bytes for the variant
        if input.len() < 8 {
            return Err(ProgramError::InvalidInstructionData);
        }

        // Extract the first 8 bytes as variant
        let (ix_discriminator, _rest) = input.split_at(8);

        // Match instruction discriminator with process
        Ok(match ix_discriminator {
            [0, 0, 0, 0, 0, 0, 0, 0] => Self::Initialize,
            [1, 0, 0, 0, 0, 0, 0, 0] => Self::Increment,
            [2, 0, 0, 0, 0, 0, 0, 0] => Self::Decrement,
            _ => return Err(ProgramError::InvalidInstructionData),
        })
    }
}

// Client-side builders. The account order here is the authoritative interface
// shape; the processor consumes accounts in exactly this order.

pub fn initialize(program_id: &Pubkey, authority: &Pubkey) -> Instruction {
    let (counter_pda, _bump) = Counter::pda(program_id);
    Instruction::new_with_bytes(
        *program_id,
        &INITIALIZE,
        vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new(counter_pda, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
    )
}

pub fn increment(program_id: &Pubkey, authority: &Pubkey) -> Instruction {
    let (counter_pda, _bump) = Counter::pda(program_id);
    Instruction::new_with_bytes(
        *program_id,
        &INCREMENT,
        vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(counter_pda, false),
        ],
    )
}

pub fn decrement(program_id: &Pubkey, authority: &Pubkey) -> Instruction {
    let (counter_pda, _bump) = Counter::pda(program_id);
    Instruction::new_with_bytes(
        *program_id,
        &DECREMENT,
        vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(counter_pda, false),
        ],
    )
}
