use anchor_lang::prelude::*;

use crate::{
    consts::{DISPATCHER_SEED, MSG_TYPE_SEND},
    cpi_utils::EndpointSendParams,
    errors::MultisendError,
    events::MessageSentEvent,
    fees::{aggregate_fee, endpoint_send, quote_destinations},
    msg_codec,
    state::Dispatcher,
};

#[derive(Accounts)]
#[instruction(params: SendParams)]
pub struct Send<'info> {
    #[account(mut)]
    pub sender: Signer<'info>,
    #[account(seeds = [DISPATCHER_SEED], bump = dispatcher.bump)]
    pub dispatcher: Account<'info, Dispatcher>,
    /// CHECK: the endpoint program
    pub endpoint_program: AccountInfo<'info>,
}

#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct SendParams {
    pub destinations: Vec<u32>,
    pub msg_type: u16,
    pub message: String,
    pub options: Vec<u8>,
    /// Attached native payment covering the whole batch.
    pub native_fee: u64,
    // Should always be 0
    pub lz_token_fee: u64,
}

/// Dispatches `message` to every destination, one endpoint delivery each.
///
/// The whole batch lives in one transaction: if any delivery fails the
/// runtime reverts payment and every delivery already issued in this call.
pub fn send<'c: 'info, 'info>(
    ctx: &mut Context<'_, '_, 'c, 'info, Send<'info>>,
    params: &SendParams,
) -> Result<()> {
    require!(
        params.msg_type == MSG_TYPE_SEND,
        MultisendError::InvalidMsgType
    );

    let dispatcher = &ctx.accounts.dispatcher;
    let endpoint_program = &ctx.accounts.endpoint_program;
    require_keys_eq!(
        endpoint_program.key(),
        dispatcher.endpoint,
        MultisendError::InvalidLZProgram
    );

    let payload = msg_codec::pack_message(&params.message);

    // Always re-quoted here; a caller-supplied quote could be stale against
    // current endpoint pricing.
    let quotes = quote_destinations(
        ctx.program_id,
        dispatcher.key(),
        endpoint_program,
        ctx.remaining_accounts,
        &params.destinations,
        params.msg_type,
        &payload,
        &params.options,
        false,
    )?;
    let total = aggregate_fee(&quotes)?;
    require!(total.lz_token_fee == 0, MultisendError::PositiveLzTokenFee);
    require!(
        params.native_fee >= total.native_fee,
        MultisendError::InsufficientFee
    );

    let endpoint_accounts = &ctx.remaining_accounts[params.destinations.len()..];
    let seeds: &[&[&[u8]]] = &[&[DISPATCHER_SEED, &[dispatcher.bump]]];
    let dispatcher_key = dispatcher.key();

    // Each delivery deducts its exact quoted fee from the attached budget.
    // The checked subtraction is the guard: `remaining` is never observed
    // negative. Whatever is left after the loop is not refunded.
    let mut remaining = params.native_fee;
    for quote in &quotes {
        remaining = remaining
            .checked_sub(quote.fee.native_fee)
            .ok_or(MultisendError::InsufficientFee)?;

        let send_params = EndpointSendParams {
            dst_eid: quote.dst_eid,
            receiver: quote.receiver,
            message: payload.clone(),
            options: quote.options.clone(),
            native_fee: quote.fee.native_fee,
            lz_token_fee: 0,
        };
        endpoint_send(
            endpoint_program,
            endpoint_accounts,
            dispatcher_key,
            seeds,
            &send_params,
        )?;

        emit!(MessageSentEvent {
            message: params.message.clone(),
            dst_eid: quote.dst_eid,
        });
    }

    Ok(())
}
