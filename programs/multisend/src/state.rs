use crate::consts::{
    ANCHOR_DISCRIMINATOR, MAX_ENFORCED_OPTIONS_LEN, MAX_MESSAGE_LEN, MSG_TYPE_SEND,
};
use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace, Default)]
pub struct Dispatcher {
    pub endpoint: Pubkey,
    pub bump: u8,
}

impl Dispatcher {
    pub const LEN: usize = ANCHOR_DISCRIMINATOR + Dispatcher::INIT_SPACE;
}

/// Per-destination peer entry: the receiving dispatcher's address on that
/// endpoint plus the options every send to it must carry.
#[account]
#[derive(InitSpace, Debug)]
pub struct Remote {
    pub address: [u8; 32],
    #[max_len(MAX_ENFORCED_OPTIONS_LEN)]
    pub enforced_options: Vec<u8>,
    pub bump: u8,
}

impl Remote {
    pub const SIZE: usize = ANCHOR_DISCRIMINATOR + Self::INIT_SPACE;

    /// Enforced options are keyed by message type; SEND is the only type
    /// with a configured entry.
    pub fn enforced_for(&self, msg_type: u16) -> &[u8] {
        if msg_type == MSG_TYPE_SEND {
            &self.enforced_options
        } else {
            &[]
        }
    }
}

/// The single mutable cell the dispatcher owns. Overwritten in full on every
/// inbound delivery; last write wins.
#[account]
#[derive(InitSpace, Default)]
pub struct Received {
    #[max_len(MAX_MESSAGE_LEN)]
    pub last_message: String,
    pub src_eid: u32,
    pub src_sender: [u8; 32],
    pub bump: u8,
}

impl Received {
    pub const LEN: usize = ANCHOR_DISCRIMINATOR + Received::INIT_SPACE;
}

#[account]
#[derive(InitSpace)]
pub struct Admin {}

impl Admin {
    pub const LEN: usize = ANCHOR_DISCRIMINATOR + Admin::INIT_SPACE;
}
