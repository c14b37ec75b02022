use anchor_lang::{
    prelude::*,
    solana_program::{
        instruction::Instruction,
        program::{get_return_data, invoke, invoke_signed},
    },
};

use crate::{
    consts::{ENDPOINT_QUOTE, ENDPOINT_SEND, REMOTE_SEED},
    cpi_utils::{create_instruction_data, EndpointQuoteParams, EndpointSendParams, MessagingFee},
    errors::MultisendError,
    options::combine_options,
    state::Remote,
};

/// One destination's resolved delivery: peer address, combined execution
/// options and the endpoint's current price for it.
#[derive(Debug, PartialEq)]
pub struct DestinationQuote {
    pub dst_eid: u32,
    pub receiver: [u8; 32],
    pub options: Vec<u8>,
    pub fee: MessagingFee,
}

/// Prices every destination in caller order.
///
/// The first `destinations.len()` remaining accounts are the Remote PDAs, one
/// per destination in the same order; everything after them is the endpoint
/// account window reused for each CPI.
pub fn quote_destinations<'c: 'info, 'info>(
    program_id: &Pubkey,
    dispatcher_key: Pubkey,
    endpoint_program: &AccountInfo<'info>,
    remaining_accounts: &'c [AccountInfo<'info>],
    destinations: &[u32],
    msg_type: u16,
    payload: &[u8],
    extra_options: &[u8],
    pay_in_lz_token: bool,
) -> Result<Vec<DestinationQuote>> {
    require!(!destinations.is_empty(), MultisendError::NoDestinations);
    require!(
        remaining_accounts.len() >= destinations.len(),
        MultisendError::AccountsNotProvided
    );

    let endpoint_accounts = &remaining_accounts[destinations.len()..];

    let mut quotes = Vec::with_capacity(destinations.len());
    for (remote_info, &dst_eid) in remaining_accounts.iter().zip(destinations) {
        let remote = load_remote(program_id, remote_info, dst_eid)?;
        let options = combine_options(remote.enforced_for(msg_type), extra_options)?;

        let quote_params = EndpointQuoteParams {
            sender: dispatcher_key,
            dst_eid,
            receiver: remote.address,
            message: payload.to_vec(),
            options: options.clone(),
            pay_in_lz_token,
        };
        let fee = endpoint_quote(endpoint_program, endpoint_accounts, &quote_params)?;

        quotes.push(DestinationQuote {
            dst_eid,
            receiver: remote.address,
            options,
            fee,
        });
    }

    Ok(quotes)
}

/// Sums per-destination fees into the batch's aggregate. Both components are
/// exact checked sums; overflow aborts instead of wrapping.
pub fn aggregate_fee(quotes: &[DestinationQuote]) -> Result<MessagingFee> {
    let mut total = MessagingFee::default();
    for quote in quotes {
        total.native_fee = total
            .native_fee
            .checked_add(quote.fee.native_fee)
            .ok_or(MultisendError::FeeOverflow)?;
        total.lz_token_fee = total
            .lz_token_fee
            .checked_add(quote.fee.lz_token_fee)
            .ok_or(MultisendError::FeeOverflow)?;
    }
    Ok(total)
}

fn load_remote<'c: 'info, 'info>(
    program_id: &Pubkey,
    remote_info: &'c AccountInfo<'info>,
    dst_eid: u32,
) -> Result<Remote> {
    let (pda, _) =
        Pubkey::find_program_address(&[REMOTE_SEED, &dst_eid.to_be_bytes()], program_id);
    require_keys_eq!(pda, *remote_info.key, MultisendError::InvalidPDA);

    let remote: Account<Remote> = Account::try_from(remote_info)?;
    Ok(remote.into_inner())
}

fn endpoint_quote<'info>(
    endpoint_program: &AccountInfo<'info>,
    endpoint_accounts: &[AccountInfo<'info>],
    params: &EndpointQuoteParams,
) -> Result<MessagingFee> {
    let fee = if cfg!(not(test)) {
        let quote_cpi_data = create_instruction_data(params, ENDPOINT_QUOTE)?;
        let accounts_metas: Vec<AccountMeta> = endpoint_accounts
            .iter()
            .skip(1) // an account is skipped because we don't use layerzero cpi utils so it's not needed
            .map(|account| AccountMeta {
                pubkey: *account.key,
                is_signer: account.is_signer,
                is_writable: false,
            })
            .collect();

        invoke(
            &Instruction {
                program_id: endpoint_program.key(),
                accounts: accounts_metas,
                data: quote_cpi_data,
            },
            endpoint_accounts,
        )?;
        let quote_return_data = get_return_data().ok_or(MultisendError::LzQuoteError)?;
        MessagingFee::try_from_slice(&quote_return_data.1)?
    } else {
        MessagingFee::mock_quote(params)
    };

    Ok(fee)
}

/// Dispatches one destination's delivery, attaching exactly its quoted fee.
pub fn endpoint_send<'info>(
    endpoint_program: &AccountInfo<'info>,
    endpoint_accounts: &[AccountInfo<'info>],
    dispatcher_key: Pubkey,
    dispatcher_seeds: &[&[&[u8]]],
    params: &EndpointSendParams,
) -> Result<()> {
    if cfg!(not(test)) {
        let send_cpi_data = create_instruction_data(params, ENDPOINT_SEND)?;
        let accounts_metas: Vec<AccountMeta> = endpoint_accounts
            .iter()
            .skip(1) // an account is skipped because we don't use layerzero cpi utils so it's not needed
            .map(|account| AccountMeta {
                pubkey: *account.key,
                is_signer: account.key() == dispatcher_key || account.is_signer,
                is_writable: account.is_writable,
            })
            .collect();

        invoke_signed(
            &Instruction {
                program_id: endpoint_program.key(),
                accounts: accounts_metas,
                data: send_cpi_data,
            },
            endpoint_accounts,
            dispatcher_seeds,
        )?;
    }
    Ok(())
}
