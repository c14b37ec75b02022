use anchor_lang::prelude::*;

// Deterministic price schedule: a flat base, a per-endpoint component and a
// per-byte component. OApps integrating against this mock can predict every
// quote exactly.
pub const BASE_FEE: u64 = 10_000;
pub const FEE_PER_EID: u64 = 5;
pub const FEE_PER_BYTE: u64 = 10;

#[derive(Clone, AnchorSerialize, AnchorDeserialize, Default, Debug, PartialEq)]
pub struct MessagingReceipt {
    pub guid: [u8; 32],
    pub nonce: u64,
    pub fee: MessagingFee,
}

#[derive(Clone, AnchorSerialize, AnchorDeserialize, Default, Debug, PartialEq)]
pub struct MessagingFee {
    pub native_fee: u64,
    pub lz_token_fee: u64,
}

impl MessagingFee {
    pub fn price(dst_eid: u32, message_len: usize, pay_in_lz_token: bool) -> Self {
        let amount =
            BASE_FEE + u64::from(dst_eid) * FEE_PER_EID + message_len as u64 * FEE_PER_BYTE;
        if pay_in_lz_token {
            MessagingFee {
                native_fee: 0,
                lz_token_fee: amount,
            }
        } else {
            MessagingFee {
                native_fee: amount,
                lz_token_fee: 0,
            }
        }
    }
}
