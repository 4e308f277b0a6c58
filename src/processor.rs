use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program::invoke_signed,
    program_error::ProgramError,
    pubkey::Pubkey,
    system_instruction,
    sysvar::rent::Rent,
    sysvar::Sysvar,
};

use crate::{
    error::CounterError,
    instruction::CounterInstruction,
    state::{Counter, COUNTER_SEED},
};

// program entrypoint's implementation
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    // Unpack instruction discriminator
    let instruction = CounterInstruction::unpack(instruction_data)?;

    // Call the corresponding function
    match instruction {
        // 0: Initialize
        CounterInstruction::Initialize => {
            msg!("Instruction: Initialize");
            process_initialize(program_id, accounts)
        }

        // 1: Increment
        CounterInstruction::Increment => {
            msg!("Instruction: Increment");
            process_increment(program_id, accounts)
        }

        // 2: Decrement
        CounterInstruction::Decrement => {
            msg!("Instruction: Decrement");
            process_decrement(program_id, accounts)
        }
    }
}

pub fn process_initialize(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    // Iterating accounts
    let accounts_iter = &mut accounts.iter();
    let authority_account = next_account_info(accounts_iter)?;
    let counter_account = next_account_info(accounts_iter)?;
    let system_program = next_account_info(accounts_iter)?;

    // The authority funds the account and becomes the only permitted mutator
    if !authority_account.is_signer {
        msg!("Authority {} should be the signer", authority_account.key);
        return Err(ProgramError::MissingRequiredSignature);
    }

    // Check to ensure that you're using the right PDA
    let (counter_pda, bump_seed) = Pubkey::find_program_address(&[COUNTER_SEED], program_id);
    if counter_pda != *counter_account.key {
        msg!("Invalid seeds for PDA");
        return Err(ProgramError::InvalidArgument);
    }

    // The derivation is deterministic, so creation is at-most-once
    if counter_account.lamports() > 0 {
        msg!("Counter account {} already initialized", counter_pda);
        return Err(CounterError::AlreadyInitialized.into());
    }

    let rent = Rent::get()?;
    let rent_lamports = rent.minimum_balance(Counter::SIZE);
    msg!(
        "Initializing counter account {} with {} lamports",
        counter_pda,
        rent_lamports
    );
    invoke_signed(
        &system_instruction::create_account(
            authority_account.key,
            counter_account.key,
            rent_lamports,
            Counter::SIZE as u64,
            program_id,
        ),
        &[
            authority_account.clone(),
            counter_account.clone(),
            system_program.clone(),
        ],
        &[&[COUNTER_SEED, &[bump_seed]]],
    )?;

    let counter_data = Counter {
        authority: *authority_account.key,
        count: 0,
        bump: bump_seed,
    };
    counter_data.serialize(&mut &mut counter_account.data.borrow_mut()[..])?;
    msg!(
        "Counter account {} created with authority {}",
        counter_pda,
        authority_account.key
    );

    Ok(())
}

pub fn process_increment(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    // Iterating accounts
    let accounts_iter = &mut accounts.iter();
    let authority_account = next_account_info(accounts_iter)?;
    let counter_account = next_account_info(accounts_iter)?;

    let mut counter_data = load_counter(program_id, authority_account, counter_account)?;

    counter_data.count = counter_data
        .count
        .checked_add(1)
        .ok_or(ProgramError::ArithmeticOverflow)?;
    counter_data.serialize(&mut &mut counter_account.data.borrow_mut()[..])?;
    msg!("PDA {} count: {}", counter_account.key, counter_data.count);

    Ok(())
}

pub fn process_decrement(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    // Iterating accounts
    let accounts_iter = &mut accounts.iter();
    let authority_account = next_account_info(accounts_iter)?;
    let counter_account = next_account_info(accounts_iter)?;

    let mut counter_data = load_counter(program_id, authority_account, counter_account)?;

    // Reject before mutating; the count never goes below zero
    if counter_data.count == 0 {
        msg!("PDA {} count is already 0", counter_account.key);
        return Err(CounterError::Underflow.into());
    }
    counter_data.count -= 1;
    counter_data.serialize(&mut &mut counter_account.data.borrow_mut()[..])?;
    msg!("PDA {} count: {}", counter_account.key, counter_data.count);

    Ok(())
}

/// Common preconditions of the mutating instructions: the counter account is
/// the derived PDA, it exists, and the signing caller is the stored authority.
fn load_counter(
    program_id: &Pubkey,
    authority_account: &AccountInfo,
    counter_account: &AccountInfo,
) -> Result<Counter, ProgramError> {
    if !authority_account.is_signer {
        msg!("Authority {} should be the signer", authority_account.key);
        return Err(ProgramError::MissingRequiredSignature);
    }

    // Check to ensure that you're using the right PDA
    let (counter_pda, _bump_seed) = Pubkey::find_program_address(&[COUNTER_SEED], program_id);
    if counter_pda != *counter_account.key {
        msg!("Invalid seeds for PDA");
        return Err(ProgramError::InvalidArgument);
    }

    if counter_account.owner != program_id || counter_account.data_is_empty() {
        msg!("Counter account {} does not exist", counter_pda);
        return Err(CounterError::NotFound.into());
    }

    let counter_data = Counter::try_from_slice(&counter_account.data.borrow())?;
    if counter_data.authority != *authority_account.key {
        msg!(
            "Caller {} is not the counter authority {}",
            authority_account.key,
            counter_data.authority
        );
        return Err(CounterError::Unauthorized.into());
    }

    Ok(counter_data)
}
