#[cfg(not(feature = "no-entrypoint"))]
pub mod entrypoint; // entrypoint where the Solana program process starts
pub mod error; // program errors, surfaced in ProgramError::Custom space
pub mod instruction; // instruction discriminators, unpacking, and client-side builders
pub mod processor; // where instruction logics are processed
pub mod state; // where the on-chain counter account is defined

use solana_program::declare_id;

pub use crate::processor::process_instruction;

declare_id!("6XE9zPNoqsu2ngVQAy6xdTpogLAuXHoya8NwR2d1Qa8r");
