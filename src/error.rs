// error.rs
use solana_program::program_error::ProgramError;

/// Terminal failures of the counter state machine. Every variant leaves the
/// counter account byte-for-byte unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterError {
    /// Initialize was called but the counter account already exists.
    AlreadyInitialized = 0,
    /// The caller is not the stored authority.
    Unauthorized = 1,
    /// Decrement was attempted with the count already at zero.
    Underflow = 2,
    /// The counter account has not been initialized.
    NotFound = 3,
}

impl From<CounterError> for ProgramError {
    fn from(e: CounterError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
