use anchor_lang::prelude::*;

use crate::{
    consts::DISPATCHER_SEED,
    cpi_utils::MessagingFee,
    errors::MultisendError,
    fees::{aggregate_fee, quote_destinations},
    msg_codec,
    state::Dispatcher,
};

#[derive(Accounts)]
#[instruction(params: QuoteParams)]
pub struct Quote<'info> {
    #[account(seeds = [DISPATCHER_SEED], bump = dispatcher.bump)]
    pub dispatcher: Account<'info, Dispatcher>,
    /// CHECK: the endpoint program
    pub endpoint_program: AccountInfo<'info>,
}

#[derive(Clone, AnchorSerialize, AnchorDeserialize)]
pub struct QuoteParams {
    pub destinations: Vec<u32>,
    pub msg_type: u16,
    pub message: String,
    pub options: Vec<u8>,
    pub pay_in_lz_token: bool,
}

/// Aggregate price of delivering `message` to every destination, read-only.
///
/// The result reflects the endpoint's pricing at call time; it can
/// legitimately differ between calls. `send` re-quotes for itself.
pub fn quote<'c: 'info, 'info>(
    ctx: &Context<'_, '_, 'c, 'info, Quote<'info>>,
    params: &QuoteParams,
) -> Result<MessagingFee> {
    let dispatcher = &ctx.accounts.dispatcher;
    require_keys_eq!(
        ctx.accounts.endpoint_program.key(),
        dispatcher.endpoint,
        MultisendError::InvalidLZProgram
    );

    let payload = msg_codec::pack_message(&params.message);
    let quotes = quote_destinations(
        ctx.program_id,
        dispatcher.key(),
        &ctx.accounts.endpoint_program,
        ctx.remaining_accounts,
        &params.destinations,
        params.msg_type,
        &payload,
        &params.options,
        params.pay_in_lz_token,
    )?;

    aggregate_fee(&quotes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MSG_TYPE_SEND, REMOTE_SEED};
    use crate::cpi_utils::EndpointQuoteParams;
    use crate::state::Remote;
    use crate::test_utils::{create_account_info, create_remote_data};
    use anchor_lang::Discriminator;

    fn mock_fee_for(dst_eid: u32, payload_len: usize) -> u64 {
        MessagingFee::mock_quote(&EndpointQuoteParams {
            sender: Pubkey::default(),
            dst_eid,
            receiver: [0; 32],
            message: vec![0; payload_len],
            options: vec![],
            pay_in_lz_token: false,
        })
        .native_fee
    }

    #[test]
    fn test_quote_aggregates_all_destinations() -> Result<()> {
        let program_id = crate::id();
        let dispatcher_key = Pubkey::new_unique();
        let endpoint_key = Pubkey::new_unique();

        let dispatcher = Dispatcher {
            endpoint: endpoint_key,
            bump: 254,
        };
        let mut dispatcher_data = dispatcher.try_to_vec()?;
        let mut dispatcher_lamports = 100;
        let dispatcher_info = create_account_info(
            &dispatcher_key,
            false,
            false,
            &mut dispatcher_lamports,
            &mut dispatcher_data,
            &program_id,
            false,
            Some(Dispatcher::discriminator()),
        );

        let mut endpoint_lamports = 100;
        let mut endpoint_data = vec![0u8; 10];
        let endpoint_info = create_account_info(
            &endpoint_key,
            false,
            false,
            &mut endpoint_lamports,
            &mut endpoint_data,
            &endpoint_key,
            true,
            None,
        );

        let (pda_a, _) =
            Pubkey::find_program_address(&[REMOTE_SEED, &2u32.to_be_bytes()], &program_id);
        let mut remote_a_data = create_remote_data([1; 32], &[])?;
        let mut remote_a_lamports = 100;
        let remote_a = create_account_info(
            &pda_a,
            false,
            false,
            &mut remote_a_lamports,
            &mut remote_a_data,
            &program_id,
            false,
            Some(Remote::discriminator()),
        );

        let (pda_b, _) =
            Pubkey::find_program_address(&[REMOTE_SEED, &3u32.to_be_bytes()], &program_id);
        let mut remote_b_data = create_remote_data([2; 32], &[])?;
        let mut remote_b_lamports = 100;
        let remote_b = create_account_info(
            &pda_b,
            false,
            false,
            &mut remote_b_lamports,
            &mut remote_b_data,
            &program_id,
            false,
            Some(Remote::discriminator()),
        );

        let remaining = vec![remote_a, remote_b];
        let mut accounts = Quote {
            dispatcher: Account::try_from(&dispatcher_info)?,
            endpoint_program: endpoint_info,
        };

        let ctx = Context {
            accounts: &mut accounts,
            remaining_accounts: remaining.as_slice(),
            program_id: &program_id,
            bumps: QuoteBumps::default(),
        };

        let params = QuoteParams {
            destinations: vec![2, 3],
            msg_type: MSG_TYPE_SEND,
            message: "hello".to_string(),
            options: vec![],
            pay_in_lz_token: false,
        };

        let fee = quote(&ctx, &params)?;
        let payload_len = msg_codec::pack_message("hello").len();
        assert_eq!(
            fee.native_fee,
            mock_fee_for(2, payload_len) + mock_fee_for(3, payload_len)
        );
        assert_eq!(fee.lz_token_fee, 0);

        // Same inputs, same pricing: identical result.
        let again = quote(&ctx, &params)?;
        assert_eq!(again, fee);
        Ok(())
    }

    #[test]
    fn test_quote_rejects_foreign_endpoint() -> Result<()> {
        let program_id = crate::id();
        let dispatcher_key = Pubkey::new_unique();
        let endpoint_key = Pubkey::new_unique();
        let foreign_key = Pubkey::new_unique();

        let dispatcher = Dispatcher {
            endpoint: endpoint_key,
            bump: 254,
        };
        let mut dispatcher_data = dispatcher.try_to_vec()?;
        let mut dispatcher_lamports = 100;
        let dispatcher_info = create_account_info(
            &dispatcher_key,
            false,
            false,
            &mut dispatcher_lamports,
            &mut dispatcher_data,
            &program_id,
            false,
            Some(Dispatcher::discriminator()),
        );

        let mut foreign_lamports = 100;
        let mut foreign_data = vec![0u8; 10];
        let foreign_info = create_account_info(
            &foreign_key,
            false,
            false,
            &mut foreign_lamports,
            &mut foreign_data,
            &foreign_key,
            true,
            None,
        );

        let mut accounts = Quote {
            dispatcher: Account::try_from(&dispatcher_info)?,
            endpoint_program: foreign_info,
        };

        let ctx = Context {
            accounts: &mut accounts,
            remaining_accounts: &[],
            program_id: &program_id,
            bumps: QuoteBumps::default(),
        };

        let params = QuoteParams {
            destinations: vec![2],
            msg_type: MSG_TYPE_SEND,
            message: "hello".to_string(),
            options: vec![],
            pay_in_lz_token: false,
        };

        let result = quote(&ctx, &params);
        assert_eq!(result.unwrap_err(), MultisendError::InvalidLZProgram.into());
        Ok(())
    }
}
