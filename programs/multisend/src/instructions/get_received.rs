use anchor_lang::prelude::*;

use crate::consts::RECEIVED_SEED;
use crate::state::Received;

#[derive(Accounts)]
pub struct GetReceived<'info> {
    #[account(
        seeds = [RECEIVED_SEED],
        bump = received.bump,
    )]
    pub received: Account<'info, Received>,
}

/// Snapshot of the received cell, readable by anyone.
pub fn get_received(ctx: &Context<GetReceived>) -> Result<ReceivedMessage> {
    let received = &ctx.accounts.received;

    Ok(ReceivedMessage {
        message: received.last_message.clone(),
        src_eid: received.src_eid,
        src_sender: received.src_sender,
    })
}

#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct ReceivedMessage {
    pub message: String,
    pub src_eid: u32,
    pub src_sender: [u8; 32],
}
