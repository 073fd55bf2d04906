use anchor_lang::prelude::*;

declare_id!("9reR31hCymxLfxjkTVskpgkhDurL2bhtF7BKcPjnX1rX");

#[cfg(not(target_os = "solana"))]
pub mod client;
pub mod instructions;

pub use instructions::*;

#[program]
pub mod nft_fractionalizer {
    use super::*;

    /// Entry point of the program. Takes no accounts and no arguments.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }
}
