#![cfg(test)]
use anchor_lang::prelude::*;

use crate::state::Remote;

/// Creates an `AccountInfo` instance for testing purposes.
/// This helper is only compiled when running tests.
pub fn create_account_info<'a>(
    key: &'a Pubkey,
    is_signer: bool,
    is_writable: bool,
    lamports: &'a mut u64,
    data: &'a mut Vec<u8>,
    owner: &'a Pubkey,
    executable: bool,
    discriminator: Option<[u8; 8]>,
) -> AccountInfo<'a> {
    if let Some(disc) = discriminator {
        if data.len() < 8 || &data[..8] != disc.as_ref() {
            let mut new_data = disc.to_vec();
            new_data.extend_from_slice(&data);
            *data = new_data;
        }
    }
    AccountInfo::new(key, is_signer, is_writable, lamports, data, owner, executable, 0)
}

/// Handy function for initializing a bulk of accounts, mostly used for filling up remaining accounts
pub fn create_dummy_account(program_id: &'static Pubkey) -> AccountInfo<'static> {
    let key: &'static Pubkey = Box::leak(Box::new(Pubkey::new_unique()));
    let lamports: &'static mut u64 = Box::leak(Box::new(100));
    let data: &'static mut Vec<u8> = Box::leak(Box::new(vec![0u8; 10]));
    create_account_info(key, false, true, lamports, data, program_id, false, None)
}

/// Serialized body of a Remote entry, ready to back an `AccountInfo`
pub fn create_remote_data(address: [u8; 32], enforced_options: &[u8]) -> Result<Vec<u8>> {
    let remote = Remote {
        address,
        enforced_options: enforced_options.to_vec(),
        bump: 0,
    };
    Ok(remote.try_to_vec()?)
}
