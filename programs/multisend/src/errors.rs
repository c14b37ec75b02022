use anchor_lang::prelude::*;

#[error_code]
#[derive(AnchorSerialize, AnchorDeserialize, PartialEq)]
pub enum MultisendError {
    #[msg("MS-IMT-01: Invalid message type")]
    InvalidMsgType,
    #[msg("MS-INF-01: Insufficient native fee attached")]
    InsufficientFee,
    #[msg("MS-AGG-01: Fee aggregation overflow")]
    FeeOverflow,
    #[msg("MS-NDL-01: Empty destination list")]
    NoDestinations,
    #[msg("Accounts not provided.")]
    AccountsNotProvided,
    #[msg("Invalid PDA for remote entry")]
    InvalidPDA,
    #[msg("Malformed message payload")]
    InvalidMessage,
    #[msg("Malformed execution options")]
    InvalidOptions,
    #[msg("Paying with Lz token is not permitted.")]
    PositiveLzTokenFee,
    #[msg("Signer not authorized.")]
    UnauthorizedSigner,
    #[msg("Invalid LZ endpoint program")]
    InvalidLZProgram,
    #[msg("LZ quote error")]
    LzQuoteError,
    #[msg("MS-SAZ-01: Zero account provided")]
    ZeroAccount,
}
