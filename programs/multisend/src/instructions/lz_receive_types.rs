use anchor_lang::prelude::*;

use crate::consts::{DISPATCHER_SEED, RECEIVED_SEED};
use crate::cpi_utils::get_accounts_for_clear;
use crate::instructions::LzReceiveParams;
use crate::state::Dispatcher;

#[derive(Accounts)]
pub struct LzReceiveTypes<'info> {
    #[account(seeds = [DISPATCHER_SEED], bump = dispatcher.bump)]
    pub dispatcher: Account<'info, Dispatcher>,
}

#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct LzAccount {
    pub pubkey: Pubkey,
    pub is_signer: bool,
    pub is_writable: bool,
}

/// Accounts the executor must pass when invoking `lz_receive`.
pub fn lz_receive_types(
    ctx: &Context<LzReceiveTypes>,
    params: &LzReceiveParams,
) -> Result<Vec<LzAccount>> {
    let dispatcher_key = ctx.accounts.dispatcher.key();
    let (received, _) = Pubkey::find_program_address(&[RECEIVED_SEED], ctx.program_id);

    let mut accounts = vec![
        LzAccount {
            pubkey: dispatcher_key,
            is_signer: false,
            is_writable: false,
        },
        LzAccount {
            pubkey: received,
            is_signer: false,
            is_writable: true,
        },
    ];

    accounts.extend(get_accounts_for_clear(
        ctx.accounts.dispatcher.endpoint,
        &dispatcher_key,
        params.src_eid,
        &params.sender,
        params.nonce,
    ));

    Ok(accounts)
}
