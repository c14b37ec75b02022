use anchor_lang::prelude::*;

use crate::consts::ADMIN_SEED;
use crate::errors::MultisendError;
use crate::events::{RoleGrantedEvent, RoleRevokedEvent};
use crate::state::Admin;

pub fn add_admin(ctx: &Context<AddAdmin>, params: &AdminParams) -> Result<()> {
    require!(
        params.account != Pubkey::default(),
        MultisendError::ZeroAccount
    );

    let admin = &ctx.accounts.admin;
    require!(
        admin.owner == ctx.program_id,
        MultisendError::UnauthorizedSigner
    );

    emit!(RoleGrantedEvent {
        role: [0; 32], // 0 for admin
        account: params.account,
    });

    Ok(())
}

pub fn remove_admin(ctx: &Context<RemoveAdmin>, params: &AdminParams) -> Result<()> {
    require!(
        params.account != Pubkey::default(),
        MultisendError::ZeroAccount
    );

    let admin = &ctx.accounts.admin;
    require!(
        admin.owner == ctx.program_id,
        MultisendError::UnauthorizedSigner
    );

    emit!(RoleRevokedEvent {
        role: [0; 32],
        admin: params.account,
    });

    Ok(())
}

#[derive(Clone, AnchorDeserialize, AnchorSerialize)]
pub struct AdminParams {
    pub account: Pubkey,
}

#[derive(Accounts)]
#[instruction(params: AdminParams)]
pub struct AddAdmin<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: Verify that user is an admin by checking their PDA.
    #[account(
        seeds = [ADMIN_SEED, authority.key().as_ref()],
        bump
    )]
    pub admin: AccountInfo<'info>,

    #[account(
        init,
        payer = authority,
        space = Admin::LEN,
        seeds = [ADMIN_SEED, params.account.as_ref()],
        bump
    )]
    pub new_admin: Account<'info, Admin>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(params: AdminParams)]
pub struct RemoveAdmin<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: Verify that user is an admin by checking their PDA.
    #[account(
        seeds = [ADMIN_SEED, authority.key().as_ref()],
        bump
    )]
    pub admin: AccountInfo<'info>,

    #[account(mut)]
    pub receiver: SystemAccount<'info>,

    #[account(
        mut,
        close = receiver, // Refund lamports to the receiver
        seeds = [ADMIN_SEED, params.account.as_ref()],
        bump
    )]
    pub admin_to_remove: Account<'info, Admin>,

    pub system_program: Program<'info, System>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::create_account_info;
    use anchor_lang::{system_program, Discriminator};

    #[test]
    fn test_add_admin() -> Result<()> {
        let program_id = crate::id();
        let authority_key = Pubkey::new_unique();
        let admin_key = Pubkey::new_unique();
        let new_admin_key = Pubkey::new_unique();

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

        let mut admin_lamports = 100;
        let mut admin_data = vec![0u8; 10];
        let admin_info = create_account_info(
            &admin_key,
            false,
            false,
            &mut admin_lamports,
            &mut admin_data,
            &program_id,
            false,
            None,
        );

        let mut new_admin_lamports = 100;
        let mut new_admin_data = vec![0u8; Admin::LEN];
        let new_admin_info = create_account_info(
            &new_admin_key,
            false,
            true,
            &mut new_admin_lamports,
            &mut new_admin_data,
            &program_id,
            false,
            Some(Admin::discriminator()),
        );

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

        let mut accounts = AddAdmin {
            authority: Signer::try_from(&authority_info)?,
            admin: admin_info,
            new_admin: Account::try_from(&new_admin_info)?,
            system_program: Program::try_from(&system_program_info)?,
        };

        let ctx = Context {
            accounts: &mut accounts,
            remaining_accounts: &[],
            program_id: &program_id,
            bumps: AddAdminBumps::default(),
        };

        let params = AdminParams {
            account: Pubkey::new_unique(),
        };
        assert!(add_admin(&ctx, &params).is_ok());

        let zero_params = AdminParams {
            account: Pubkey::default(),
        };
        let result = add_admin(&ctx, &zero_params);
        assert_eq!(result.unwrap_err(), MultisendError::ZeroAccount.into());
        Ok(())
    }

    #[test]
    fn test_add_admin_unauthorized() -> Result<()> {
        let program_id = crate::id();
        let foreign_owner = Pubkey::new_unique();
        let authority_key = Pubkey::new_unique();
        let admin_key = Pubkey::new_unique();
        let new_admin_key = Pubkey::new_unique();

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

        // Admin PDA owned by some other program does not grant the role.
        let mut admin_lamports = 100;
        let mut admin_data = vec![0u8; 10];
        let admin_info = create_account_info(
            &admin_key,
            false,
            false,
            &mut admin_lamports,
            &mut admin_data,
            &foreign_owner,
            false,
            None,
        );

        let mut new_admin_lamports = 100;
        let mut new_admin_data = vec![0u8; Admin::LEN];
        let new_admin_info = create_account_info(
            &new_admin_key,
            false,
            true,
            &mut new_admin_lamports,
            &mut new_admin_data,
            &program_id,
            false,
            Some(Admin::discriminator()),
        );

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

        let mut accounts = AddAdmin {
            authority: Signer::try_from(&authority_info)?,
            admin: admin_info,
            new_admin: Account::try_from(&new_admin_info)?,
            system_program: Program::try_from(&system_program_info)?,
        };

        let ctx = Context {
            accounts: &mut accounts,
            remaining_accounts: &[],
            program_id: &program_id,
            bumps: AddAdminBumps::default(),
        };

        let params = AdminParams {
            account: Pubkey::new_unique(),
        };
        let result = add_admin(&ctx, &params);
        assert_eq!(
            result.unwrap_err(),
            MultisendError::UnauthorizedSigner.into()
        );
        Ok(())
    }
}
