use anchor_lang::prelude::*;

use crate::{consts::OPTIONS_TYPE_3, errors::MultisendError};

/// Merges a destination's enforced options with caller-supplied extra options.
///
/// Enforced options always apply. Caller options must carry the TYPE_3 prefix
/// and are appended after it, so the executor reads one framed blob.
pub fn combine_options(enforced: &[u8], extra: &[u8]) -> Result<Vec<u8>> {
    if extra.is_empty() {
        return Ok(enforced.to_vec());
    }

    require!(is_type_3(extra), MultisendError::InvalidOptions);

    if enforced.is_empty() {
        return Ok(extra.to_vec());
    }

    let mut combined = Vec::with_capacity(enforced.len() + extra.len() - OPTIONS_TYPE_3.len());
    combined.extend_from_slice(enforced);
    combined.extend_from_slice(&extra[OPTIONS_TYPE_3.len()..]);
    Ok(combined)
}

pub fn is_type_3(options: &[u8]) -> bool {
    options.len() >= OPTIONS_TYPE_3.len() && options[..OPTIONS_TYPE_3.len()] == OPTIONS_TYPE_3
}
