use crate::{
    consts::{ADMIN_SEED, DISPATCHER_SEED, MAX_ENFORCED_OPTIONS_LEN, REMOTE_SEED},
    errors::MultisendError,
    options::is_type_3,
    state::{Dispatcher, Remote},
    *,
};

#[derive(Accounts)]
#[instruction(params: SetRemoteParams)]
pub struct SetRemote<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(
        init_if_needed,
        payer = payer,
        space = Remote::SIZE,
        seeds = [REMOTE_SEED, &params.dst_eid.to_be_bytes()],
        bump
    )]
    pub remote: Account<'info, Remote>,
    #[account(seeds = [DISPATCHER_SEED], bump = dispatcher.bump)]
    pub dispatcher: Account<'info, Dispatcher>,
    /// CHECK: Verify that user is an admin by checking their PDA.
    #[account(
            seeds = [ADMIN_SEED, payer.key().as_ref()],
            bump
        )]
    pub admin: AccountInfo<'info>,
    pub system_program: Program<'info, System>,
}

pub fn set_remote(ctx: &mut Context<SetRemote>, params: &SetRemoteParams) -> Result<()> {
    let admin = &ctx.accounts.admin;
    require!(
        admin.owner == ctx.program_id,
        MultisendError::UnauthorizedSigner
    );
    require!(params.remote != [0u8; 32], MultisendError::ZeroAccount);
    require!(
        params.enforced_options.len() <= MAX_ENFORCED_OPTIONS_LEN,
        MultisendError::InvalidOptions
    );
    require!(
        params.enforced_options.is_empty() || is_type_3(&params.enforced_options),
        MultisendError::InvalidOptions
    );

    ctx.accounts.remote.address = params.remote;
    ctx.accounts.remote.enforced_options = params.enforced_options.clone();
    ctx.accounts.remote.bump = ctx.bumps.remote;
    Ok(())
}

#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct SetRemoteParams {
    pub dst_eid: u32,
    pub remote: [u8; 32],
    pub enforced_options: Vec<u8>,
}
