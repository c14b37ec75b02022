use crate::consts::{ADMIN_SEED, DISPATCHER_SEED, RECEIVED_SEED, REGISTER_OAPP};
use crate::cpi_utils::{create_instruction_data, RegisterOAppParams};
use crate::state::{Admin, Dispatcher, Received};
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::program::invoke_signed;
use anchor_lang::{prelude::*, solana_program::pubkey::Pubkey, Accounts, Key};

pub fn initialize(ctx: &mut Context<Initialize>) -> Result<()> {
    let dispatcher = &mut ctx.accounts.dispatcher;
    dispatcher.bump = ctx.bumps.dispatcher;
    dispatcher.endpoint = ctx.accounts.endpoint_program.key();

    // The received cell starts at its sentinel and is only ever overwritten.
    let received = &mut ctx.accounts.received;
    received.bump = ctx.bumps.received;
    received.last_message = String::new();
    received.src_eid = 0;
    received.src_sender = [0; 32];

    // prepare CPI
    let register_params = RegisterOAppParams {
        delegate: ctx.accounts.authority.key(),
    };

    let seeds: &[&[&[u8]]] = &[&[DISPATCHER_SEED, &[ctx.accounts.dispatcher.bump]]];
    let cpi_data = create_instruction_data(&register_params, REGISTER_OAPP)?;

    let dispatcher_key = ctx.accounts.dispatcher.key();
    let accounts_metas: Vec<AccountMeta> = ctx
        .remaining_accounts
        .iter()
        .skip(1) // an account is skipped because we don't use layerzero cpi utils so it's not needed
        .map(|account| AccountMeta {
            pubkey: *account.key,
            is_signer: account.key() == dispatcher_key || account.is_signer,
            is_writable: account.is_writable,
        })
        .collect();

    // Invoke CPI
    if cfg!(not(test)) {
        invoke_signed(
            &Instruction {
                program_id: ctx.accounts.endpoint_program.key(),
                accounts: accounts_metas,
                data: cpi_data,
            },
            ctx.remaining_accounts,
            seeds,
        )?;
    }
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = Dispatcher::LEN,
        seeds = [DISPATCHER_SEED],
        bump
    )]
    pub dispatcher: Box<Account<'info, Dispatcher>>,
    #[account(
        init,
        payer = authority,
        space = Received::LEN,
        seeds = [RECEIVED_SEED],
        bump
    )]
    pub received: Box<Account<'info, Received>>,
    #[account(
        init,
        payer = authority,
        space = Admin::LEN,
        seeds = [ADMIN_SEED, authority.key().as_ref()],
        bump
    )]
    pub admin: Box<Account<'info, Admin>>,
    #[account(mut)]
    pub authority: Signer<'info>,
    pub system_program: Program<'info, System>,
    /// CHECK: endpoint program,
    pub endpoint_program: AccountInfo<'info>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CLEAR_MIN_ACCOUNTS_LEN;
    use crate::test_utils::{create_account_info, create_dummy_account};
    use anchor_lang::solana_program::system_program;
    use anchor_lang::Discriminator;

    #[test]
    fn test_initialize_success() -> Result<()> {
        let program_id = crate::id();
        let authority_key = Pubkey::new_unique();
        let dispatcher_key = Pubkey::new_unique();
        let received_key = Pubkey::new_unique();
        let admin_key = Pubkey::new_unique();
        let endpoint_program_key = Pubkey::new_unique();

        let mut authority_lamports = 1000;
        let mut authority_data = vec![0u8; 10];
        let authority_info = create_account_info(
            &authority_key,
            true,
            true,
            &mut authority_lamports,
            &mut authority_data,
            &program_id,
            false,
            None,
        );

        let mut dispatcher_data = vec![0u8; Dispatcher::LEN];
        let mut dispatcher_lamports = 100;
        let dispatcher_info = create_account_info(
            &dispatcher_key,
            false,
            true,
            &mut dispatcher_lamports,
            &mut dispatcher_data,
            &program_id,
            false,
            Some(Dispatcher::discriminator()),
        );
        let dispatcher_account = Box::new(Account::<Dispatcher>::try_from(&dispatcher_info)?);

        let mut received_data = vec![0u8; Received::LEN];
        let mut received_lamports = 100;
        let received_info = create_account_info(
            &received_key,
            false,
            true,
            &mut received_lamports,
            &mut received_data,
            &program_id,
            false,
            Some(Received::discriminator()),
        );
        let received_account = Box::new(Account::<Received>::try_from(&received_info)?);

        let mut admin_data = vec![0u8; Admin::LEN];
        let mut admin_lamports = 100;
        let admin_info = create_account_info(
            &admin_key,
            false,
            true,
            &mut admin_lamports,
            &mut admin_data,
            &program_id,
            false,
            Some(Admin::discriminator()),
        );
        let admin_account = Box::new(Account::<Admin>::try_from(&admin_info)?);

        let mut system_program_lamports = 100;
        let mut system_program_data = vec![0u8; 10];
        let system_program_info = create_account_info(
            &system_program::ID,
            false,
            false,
            &mut system_program_lamports,
            &mut system_program_data,
            &system_program::ID,
            true,
            None,
        );
        let system_program = Program::<System>::try_from(&system_program_info)?;

        let mut endpoint_program_lamports = 100;
        let mut endpoint_program_data = vec![0u8; 10];
        let endpoint_program_info = create_account_info(
            &endpoint_program_key,
            false,
            false,
            &mut endpoint_program_lamports,
            &mut endpoint_program_data,
            &endpoint_program_key,
            false,
            None,
        );

        let mut init_accounts = Initialize {
            dispatcher: dispatcher_account,
            received: received_account,
            admin: admin_account,
            authority: Signer::try_from(&authority_info)?,
            system_program,
            endpoint_program: endpoint_program_info,
        };

        let program_id_static: &'static Pubkey = Box::leak(Box::new(crate::id()));
        let remaining_accounts: Vec<AccountInfo<'static>> = (0..CLEAR_MIN_ACCOUNTS_LEN)
            .map(|_| create_dummy_account(program_id_static))
            .collect();

        let mut bumps = InitializeBumps::default();
        bumps.dispatcher = 254;
        bumps.received = 253;
        let mut ctx = Context {
            accounts: &mut init_accounts,
            remaining_accounts: remaining_accounts.as_slice(),
            program_id: &program_id,
            bumps,
        };

        let result = initialize(&mut ctx);
        assert!(result.is_ok());

        let dispatcher = &ctx.accounts.dispatcher;
        assert_eq!(dispatcher.bump, 254);
        assert_eq!(dispatcher.endpoint, endpoint_program_key);

        let received = &ctx.accounts.received;
        assert_eq!(received.bump, 253);
        assert_eq!(received.last_message, "");
        assert_eq!(received.src_eid, 0);
        assert_eq!(received.src_sender, [0; 32]);

        Ok(())
    }
}
