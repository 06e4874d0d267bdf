//! Imports and exports the full state of the interchain accounts application.
use ibc_app_interchain_accounts_types::error::InterchainAccountError;
use ibc_app_interchain_accounts_types::genesis::{ActiveChannel, GenesisState, RegisteredAccount};
use ibc_app_interchain_accounts_types::{CapabilityName, LOG_TARGET};
use tracing::info;

use crate::context::{InterchainAccountExecutionContext, InterchainAccountValidationContext};

/// Restores `genesis` into `ctx`.
///
/// Ports that are not bound yet are bound and their capability claimed under
/// the port path. Active channels and account addresses are written as given.
pub fn init_genesis<Ctx>(ctx: &mut Ctx, genesis: GenesisState) -> Result<(), InterchainAccountError>
where
    Ctx: InterchainAccountExecutionContext,
{
    genesis.validate()?;

    for port_id in &genesis.ports {
        if !ctx.is_bound(port_id) {
            let capability = ctx.bind_port(port_id)?;
            ctx.claim_capability(capability, CapabilityName::port(port_id))?;
        }
    }

    for ActiveChannel {
        port_id,
        channel_id,
    } in &genesis.active_channels
    {
        ctx.store_active_channel_id(port_id, channel_id)?;
    }

    for RegisteredAccount {
        port_id,
        account_address,
    } in genesis.accounts
    {
        ctx.store_ica_address(&port_id, account_address)?;
    }

    ctx.store_params(genesis.params)?;

    info!(
        target: LOG_TARGET,
        ports = genesis.ports.len(),
        active_channels = genesis.active_channels.len(),
        "initialized interchain accounts genesis"
    );

    Ok(())
}

/// Exports the bound ports along with every recorded active channel and
/// account address.
///
/// On a host chain the records are keyed by controller ports, which the host
/// never binds itself, so they are scanned independently of the ports.
pub fn export_genesis<Ctx>(ctx: &Ctx) -> Result<GenesisState, InterchainAccountError>
where
    Ctx: InterchainAccountValidationContext,
{
    Ok(GenesisState {
        ports: ctx.get_all_ports().collect(),
        active_channels: ctx.get_all_active_channels().collect(),
        accounts: ctx.get_all_ica_addresses().collect(),
        params: ctx.get_params()?,
    })
}
