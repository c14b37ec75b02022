use anchor_lang::prelude::*;

// Dispatcher events
// event MessageSent(string message, uint32 dstEid);
#[event]
pub struct MessageSentEvent {
    pub message: String,
    pub dst_eid: u32,
}

// event MessageReceived(string message, uint32 srcEid, bytes32 sender);
#[event]
pub struct MessageReceivedEvent {
    pub message: String,
    pub src_eid: u32,
    pub sender: [u8; 32],
}

// Admin events
#[event]
pub struct RoleGrantedEvent {
    pub role: [u8; 32],
    pub account: Pubkey,
}

#[event]
pub struct RoleRevokedEvent {
    pub role: [u8; 32],
    pub admin: Pubkey,
}
