//! Off-chain helpers for building instructions against this program.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{InstructionData, ToAccountMetas};

/// Wire tag of `initialize`: the first 8 bytes of `sha256("global:initialize")`.
pub const INITIALIZE_DISCRIMINATOR: [u8; 8] = [175, 175, 109, 31, 13, 152, 155, 237];

/// Builds an `initialize` instruction targeting `program_id`.
pub fn initialize(program_id: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: crate::accounts::Initialize {}.to_account_metas(None),
        data: crate::instruction::Initialize {}.data(),
    }
}
