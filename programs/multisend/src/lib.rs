#![allow(unexpected_cfgs)]
//! Multisend: an omnichain message dispatcher
//!
//! This program broadcasts one message to a list of destination endpoints in a
//! single atomic batch, priced per destination through the LayerZero endpoint.

mod consts;
mod cpi_utils;
mod errors;
mod events;
mod fees;
mod instructions;
mod msg_codec;
mod options;
mod state;
mod test_utils;

use anchor_lang::prelude::*;
use anchor_lang::{declare_id, program};
use cpi_utils::MessagingFee;
use instructions::*;

declare_id!("ARVHbbp7sg1MyAMPgFRAPv2j7tPf3uAAj96LCNNB5Swc");

#[program]
pub mod multisend {

    use super::*;

    /// Initializes the dispatcher, its received-message cell and the first
    /// admin, and registers the OApp with the endpoint
    ///
    /// # Arguments
    /// * `ctx` - The context containing the accounts
    pub fn initialize(mut ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(&mut ctx)
    }

    /// Create or update the account where a destination's pair address and
    /// enforced options are stored
    /// Can be called only by admins
    ///
    /// # Arguments
    /// * `ctx` - Context containing the accounts
    /// * `params` - Destination endpoint id, pair address, enforced options
    pub fn set_remote(mut ctx: Context<SetRemote>, params: SetRemoteParams) -> Result<()> {
        instructions::set_remote(&mut ctx, &params)
    }

    /// Adds a new admin to the program
    /// Can be called only by admins
    pub fn add_admin(ctx: Context<AddAdmin>, params: AdminParams) -> Result<()> {
        instructions::add_admin(&ctx, &params)
    }

    /// Removes an admin from the program
    /// Can be called only by admins
    pub fn remove_admin(ctx: Context<RemoveAdmin>, params: AdminParams) -> Result<()> {
        instructions::remove_admin(&ctx, &params)
    }

    /// Returns the aggregate fee for delivering a message to every listed
    /// destination, in caller order
    ///
    /// Read-only; the price reflects current endpoint pricing
    ///
    /// # Arguments
    /// * `ctx` - Context containing the accounts
    /// * `params` - Destinations, message and execution options to price
    pub fn quote<'c: 'info, 'info>(
        ctx: Context<'_, '_, 'c, 'info, Quote<'info>>,
        params: QuoteParams,
    ) -> Result<MessagingFee> {
        instructions::quote(&ctx, &params)
    }

    /// Dispatches one message to every listed destination as one atomic batch
    ///
    /// Attached payment must cover the aggregate fee; each delivery takes its
    /// exact per-destination fee, and any surplus is not refunded
    ///
    /// # Arguments
    /// * `ctx` - Context containing the accounts
    /// * `params` - Destinations, message, options and the attached payment
    ///
    /// # Errors
    /// Returns error if:
    /// - The message type is not SEND
    /// - The attached payment is below the aggregate fee
    /// - A destination has no remote entry
    pub fn send<'c: 'info, 'info>(
        mut ctx: Context<'_, '_, 'c, 'info, Send<'info>>,
        params: SendParams,
    ) -> Result<()> {
        instructions::send(&mut ctx, &params)
    }

    /// Handles an incoming LayerZero message and overwrites the received cell
    ///
    /// # Arguments
    /// * `ctx` - Context containing the accounts
    /// * `params` - LayerZero message parameters
    pub fn lz_receive(mut ctx: Context<LzReceive>, params: LzReceiveParams) -> Result<()> {
        instructions::lz_receive(&mut ctx, &params)
    }

    /// Gets required accounts for calling lz_receive
    ///
    /// Returns a list of accounts needed for calling the lz_receive by the LayerZero program
    pub fn lz_receive_types(
        ctx: Context<LzReceiveTypes>,
        params: LzReceiveParams,
    ) -> Result<Vec<LzAccount>> {
        instructions::lz_receive_types(&ctx, &params)
    }

    /// Retrieves the last received message with its origin
    pub fn get_received(ctx: Context<GetReceived>) -> Result<ReceivedMessage> {
        instructions::get_received(&ctx)
    }
}
