use anchor_lang::prelude::*;

#[error_code]
#[derive(AnchorSerialize, AnchorDeserialize, PartialEq)]
pub enum LzMockError {
    #[msg("Not enough native attached for the delivery")]
    NotEnoughNative,
}
