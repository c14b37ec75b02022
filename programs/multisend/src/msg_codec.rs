use anchor_lang::prelude::*;

use crate::errors::MultisendError;

/// Wire layout of a dispatched payload:
/// 4 (big-endian length) | length (UTF-8 message bytes)
const LENGTH_OFFSET: usize = 4;

pub fn pack_message(message: &str) -> Vec<u8> {
    let bytes = message.as_bytes();
    let mut payload = Vec::with_capacity(LENGTH_OFFSET + bytes.len());
    payload.extend_from_slice(&(bytes.len() as u32).to_be_bytes());
    payload.extend_from_slice(bytes);
    payload
}

pub fn unpack_message(payload: &[u8]) -> Result<String> {
    if payload.len() < LENGTH_OFFSET {
        return err!(MultisendError::InvalidMessage);
    }

    let length = u32::from_be_bytes(
        payload[..LENGTH_OFFSET]
            .try_into()
            .map_err(|_| MultisendError::InvalidMessage)?,
    ) as usize;

    if payload.len() != LENGTH_OFFSET + length {
        return err!(MultisendError::InvalidMessage);
    }

    String::from_utf8(payload[LENGTH_OFFSET..].to_vec())
        .map_err(|_| MultisendError::InvalidMessage.into())
}
