use crate::{
    consts::{
        CLEAR_MIN_ACCOUNTS_LEN, DISPATCHER_SEED, ENDPOINT_CLEAR, MAX_MESSAGE_LEN, RECEIVED_SEED,
    },
    cpi_utils::{create_instruction_data, ClearParams},
    errors::MultisendError,
    events::MessageReceivedEvent,
    msg_codec,
    state::{Dispatcher, Received},
    *,
};
use anchor_lang::{
    prelude::*,
    solana_program::{instruction::Instruction, program::invoke_signed},
};

#[derive(Accounts, Clone)]
#[instruction(params: LzReceiveParams)]
pub struct LzReceive<'info> {
    #[account(seeds = [DISPATCHER_SEED], bump = dispatcher.bump)]
    pub dispatcher: Account<'info, Dispatcher>,
    #[account(mut, seeds = [RECEIVED_SEED], bump = received.bump)]
    pub received: Account<'info, Received>,
}

#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct LzReceiveParams {
    pub src_eid: u32,
    pub sender: [u8; 32],
    pub nonce: u64,
    pub guid: [u8; 32],
    pub message: Vec<u8>,
    pub extra_data: Vec<u8>,
}

/// Inbound delivery: clear the payload with the endpoint, then overwrite the
/// received cell. Every delivery overwrites unconditionally.
pub fn lz_receive(ctx: &mut Context<LzReceive>, params: &LzReceiveParams) -> Result<()> {
    let dispatcher = &ctx.accounts.dispatcher;

    require!(
        ctx.remaining_accounts.len() >= CLEAR_MIN_ACCOUNTS_LEN,
        MultisendError::AccountsNotProvided
    );

    let accounts_metas: Vec<AccountMeta> = ctx.remaining_accounts[0..CLEAR_MIN_ACCOUNTS_LEN]
        .iter()
        .skip(1) // an account is skipped because we don't use layerzero cpi utils so it's not needed
        .map(|account| AccountMeta {
            pubkey: *account.key,
            is_signer: account.key() == dispatcher.key() || account.is_signer,
            is_writable: account.is_writable,
        })
        .collect();

    let seeds: &[&[&[u8]]] = &[&[DISPATCHER_SEED, &[dispatcher.bump]]];

    let clear_params = ClearParams {
        receiver: dispatcher.key(),
        src_eid: params.src_eid,
        sender: params.sender,
        nonce: params.nonce,
        guid: params.guid,
        message: params.message.clone(),
    };

    let cpi_data = create_instruction_data(&clear_params, ENDPOINT_CLEAR)?;

    // Invoke Layerzero program
    if cfg!(not(test)) {
        invoke_signed(
            &Instruction {
                program_id: dispatcher.endpoint,
                accounts: accounts_metas,
                data: cpi_data,
            },
            ctx.remaining_accounts,
            seeds,
        )?;
    }

    let message = msg_codec::unpack_message(&params.message)?;
    require!(
        message.len() <= MAX_MESSAGE_LEN,
        MultisendError::InvalidMessage
    );

    let received = &mut ctx.accounts.received;
    received.last_message = message.clone();
    received.src_eid = params.src_eid;
    received.src_sender = params.sender;

    emit!(MessageReceivedEvent {
        message,
        src_eid: params.src_eid,
        sender: params.sender,
    });

    Ok(())
}
