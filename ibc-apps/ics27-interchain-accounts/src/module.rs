//! Provides the channel handshake callbacks of the interchain accounts
//! application.
//!
//! The controller chain (A) initiates every handshake from a port
//! `icacontroller-{owner}`; the host chain (B) answers on its `icahost` port.
//! The host keys its records by the controller port, since all of its
//! channels share the same port.
use ibc_app_interchain_accounts_types::error::InterchainAccountError;
use ibc_app_interchain_accounts_types::events::{ChannelActivatedEvent, ChannelDeactivatedEvent};
use ibc_app_interchain_accounts_types::{
    default_host_port_id, parse_address_from_version, validate_account_address, validate_version,
    verify_controller_port_id_prefix, verify_version_prefix, version_prefix, Capability,
    CapabilityName,
};
use ibc_core::channel::types::channel::{Counterparty, Order};
use ibc_core::channel::types::Version;
use ibc_core::host::types::identifiers::{ChannelId, ConnectionId, PortId};
use ibc_core::primitives::prelude::*;
use ibc_core::primitives::Signer;
use ibc_core::router::types::module::ModuleExtras;

use crate::context::{InterchainAccountExecutionContext, InterchainAccountValidationContext};
use crate::handler::{activate_channel, negotiate_app_version, register_ica_address};

fn verify_ordered(order: Order) -> Result<(), InterchainAccountError> {
    if order != Order::Ordered {
        return Err(InterchainAccountError::InvalidOrder {
            expected: Order::Ordered,
            actual: order,
        });
    }

    Ok(())
}

fn single_connection_hop(
    connection_hops: &[ConnectionId],
) -> Result<&ConnectionId, InterchainAccountError> {
    match connection_hops {
        [conn_id] => Ok(conn_id),
        _ => Err(InterchainAccountError::InvalidConnectionHopsLength {
            expected: 1,
            actual: connection_hops.len() as u64,
        }),
    }
}

fn verify_host_port(port_id: &PortId) -> Result<(), InterchainAccountError> {
    let host_port_id = default_host_port_id();

    if port_id != &host_port_id {
        return Err(InterchainAccountError::InvalidPort {
            port_id: port_id.clone(),
            expected_port_id: host_port_id,
        });
    }

    Ok(())
}

fn verify_no_other_active_channel(
    ctx: &impl InterchainAccountValidationContext,
    port_id: &PortId,
    channel_id: Option<&ChannelId>,
) -> Result<(), InterchainAccountError> {
    match ctx.get_active_channel_id(port_id) {
        Some(active_channel_id) if Some(&active_channel_id) != channel_id => {
            Err(InterchainAccountError::ActiveChannelExists {
                port_id: port_id.clone(),
                active_channel_id,
            })
        }
        _ => Ok(()),
    }
}

/// Fails if `address` could not be registered for `port_id`.
fn verify_registrable_address(
    ctx: &impl InterchainAccountValidationContext,
    port_id: &PortId,
    address: &Signer,
) -> Result<(), InterchainAccountError> {
    validate_account_address(address.as_ref())?;

    match ctx.get_ica_address(port_id) {
        Some(existing) if &existing != address => Err(InterchainAccountError::AccountAddressExists {
            port_id: port_id.clone(),
            address: existing.as_ref().to_string(),
        }),
        _ => Ok(()),
    }
}

fn verify_controller_enabled(
    ctx: &impl InterchainAccountValidationContext,
) -> Result<(), InterchainAccountError> {
    if !ctx.get_params()?.controller_enabled {
        return Err(InterchainAccountError::ControllerDisabled);
    }

    Ok(())
}

fn verify_host_enabled(
    ctx: &impl InterchainAccountValidationContext,
) -> Result<(), InterchainAccountError> {
    if !ctx.get_params()?.host_enabled {
        return Err(InterchainAccountError::HostDisabled);
    }

    Ok(())
}

/// Validates a `ChanOpenInit` on the controller chain.
///
/// An empty version lets the application pick [`version_prefix`].
pub fn on_chan_open_init_validate(
    ctx_a: &impl InterchainAccountValidationContext,
    order: Order,
    conn_hops_on_a: &[ConnectionId],
    port_id_on_a: &PortId,
    _chan_id_on_a: &ChannelId,
    counterparty: &Counterparty,
    version_on_a: &Version,
) -> Result<(), InterchainAccountError> {
    verify_controller_enabled(ctx_a)?;
    verify_ordered(order)?;
    single_connection_hop(conn_hops_on_a)?;
    verify_controller_port_id_prefix(port_id_on_a)?;
    verify_host_port(&counterparty.port_id)?;

    if !version_on_a.is_empty() {
        verify_version_prefix(version_on_a)?;
    }

    verify_no_other_active_channel(ctx_a, port_id_on_a, None)
}

/// Executes a `ChanOpenInit` on the controller chain, claiming the channel
/// capability handed over by the channel handshake.
#[allow(clippy::too_many_arguments)]
pub fn on_chan_open_init_execute(
    ctx_a: &mut impl InterchainAccountExecutionContext,
    _order: Order,
    _conn_hops_on_a: &[ConnectionId],
    port_id_on_a: &PortId,
    chan_id_on_a: &ChannelId,
    chan_cap_on_a: Capability,
    _counterparty: &Counterparty,
    _version_on_a: &Version,
) -> Result<(ModuleExtras, Version), InterchainAccountError> {
    ctx_a.claim_capability(
        chan_cap_on_a,
        CapabilityName::channel(port_id_on_a, chan_id_on_a),
    )?;

    Ok((ModuleExtras::empty(), version_prefix()))
}

/// Validates a `ChanOpenTry` on the host chain, negotiating the version
/// proposed by the controller.
pub fn on_chan_open_try_validate(
    ctx_b: &impl InterchainAccountValidationContext,
    order: Order,
    conn_hops_on_b: &[ConnectionId],
    port_id_on_b: &PortId,
    _chan_id_on_b: &ChannelId,
    counterparty: &Counterparty,
    version_on_a: &Version,
) -> Result<(), InterchainAccountError> {
    verify_host_enabled(ctx_b)?;
    verify_ordered(order)?;
    let conn_id_on_b = single_connection_hop(conn_hops_on_b)?;
    verify_host_port(port_id_on_b)?;
    verify_controller_port_id_prefix(&counterparty.port_id)?;
    verify_no_other_active_channel(ctx_b, &counterparty.port_id, None)?;

    negotiate_app_version(
        ctx_b,
        order,
        conn_id_on_b,
        port_id_on_b,
        counterparty,
        version_on_a,
    )?;

    Ok(())
}

/// Executes a `ChanOpenTry` on the host chain.
///
/// Claims the channel capability, registers the derived account address for
/// the controller port and returns the negotiated version.
#[allow(clippy::too_many_arguments)]
pub fn on_chan_open_try_execute(
    ctx_b: &mut impl InterchainAccountExecutionContext,
    order: Order,
    conn_hops_on_b: &[ConnectionId],
    port_id_on_b: &PortId,
    chan_id_on_b: &ChannelId,
    chan_cap_on_b: Capability,
    counterparty: &Counterparty,
    version_on_a: &Version,
) -> Result<(ModuleExtras, Version), InterchainAccountError> {
    let conn_id_on_b = single_connection_hop(conn_hops_on_b)?;

    let version_on_b = negotiate_app_version(
        ctx_b,
        order,
        conn_id_on_b,
        port_id_on_b,
        counterparty,
        version_on_a,
    )?;

    ctx_b.claim_capability(
        chan_cap_on_b,
        CapabilityName::channel(port_id_on_b, chan_id_on_b),
    )?;

    let address = parse_address_from_version(&version_on_b)?;
    register_ica_address(ctx_b, &counterparty.port_id, address)?;

    Ok((ModuleExtras::empty(), version_on_b))
}

/// Validates a `ChanOpenAck` on the controller chain.
pub fn on_chan_open_ack_validate(
    ctx_a: &impl InterchainAccountValidationContext,
    port_id_on_a: &PortId,
    chan_id_on_a: &ChannelId,
    version_on_b: &Version,
) -> Result<(), InterchainAccountError> {
    verify_controller_enabled(ctx_a)?;
    verify_controller_port_id_prefix(port_id_on_a)?;
    validate_version(version_on_b)?;
    verify_no_other_active_channel(ctx_a, port_id_on_a, Some(chan_id_on_a))?;

    let address = parse_address_from_version(version_on_b)?;

    verify_registrable_address(ctx_a, port_id_on_a, &address)
}

/// Executes a `ChanOpenAck` on the controller chain.
///
/// The channel becomes the active channel of the port and the address chosen
/// by the host is recorded for it.
pub fn on_chan_open_ack_execute(
    ctx_a: &mut impl InterchainAccountExecutionContext,
    port_id_on_a: &PortId,
    chan_id_on_a: &ChannelId,
    version_on_b: &Version,
) -> Result<ModuleExtras, InterchainAccountError> {
    let address = parse_address_from_version(version_on_b)?;

    // nothing is written unless the address can be registered
    verify_registrable_address(ctx_a, port_id_on_a, &address)?;

    activate_channel(ctx_a, port_id_on_a, chan_id_on_a, false)?;
    register_ica_address(ctx_a, port_id_on_a, address.clone())?;

    let mut extras = ModuleExtras::empty();
    extras.events.push(
        ChannelActivatedEvent {
            port_id: port_id_on_a.clone(),
            channel_id: chan_id_on_a.clone(),
            account_address: address,
        }
        .into(),
    );

    Ok(extras)
}

/// Validates a `ChanOpenConfirm` on the host chain. `port_id_on_a` is the
/// controller port of the channel.
pub fn on_chan_open_confirm_validate(
    ctx_b: &impl InterchainAccountValidationContext,
    port_id_on_b: &PortId,
    chan_id_on_b: &ChannelId,
    port_id_on_a: &PortId,
) -> Result<(), InterchainAccountError> {
    verify_host_enabled(ctx_b)?;
    verify_host_port(port_id_on_b)?;
    verify_no_other_active_channel(ctx_b, port_id_on_a, Some(chan_id_on_b))
}

/// Executes a `ChanOpenConfirm` on the host chain, activating the channel for
/// the controller port `port_id_on_a`.
pub fn on_chan_open_confirm_execute(
    ctx_b: &mut impl InterchainAccountExecutionContext,
    _port_id_on_b: &PortId,
    chan_id_on_b: &ChannelId,
    port_id_on_a: &PortId,
) -> Result<ModuleExtras, InterchainAccountError> {
    activate_channel(ctx_b, port_id_on_a, chan_id_on_b, false)?;

    let account_address = ctx_b
        .get_ica_address(port_id_on_a)
        .unwrap_or_else(|| ctx_b.generate_ica_address(port_id_on_a));

    let mut extras = ModuleExtras::empty();
    extras.events.push(
        ChannelActivatedEvent {
            port_id: port_id_on_a.clone(),
            channel_id: chan_id_on_b.clone(),
            account_address,
        }
        .into(),
    );

    Ok(extras)
}

pub fn on_chan_close_init_validate(
    _ctx: &impl InterchainAccountValidationContext,
    _port_id: &PortId,
    _channel_id: &ChannelId,
) -> Result<(), InterchainAccountError> {
    Err(InterchainAccountError::CantCloseChannel)
}

pub fn on_chan_close_init_execute(
    _ctx: &mut impl InterchainAccountExecutionContext,
    _port_id: &PortId,
    _channel_id: &ChannelId,
) -> Result<ModuleExtras, InterchainAccountError> {
    Err(InterchainAccountError::CantCloseChannel)
}

pub fn on_chan_close_confirm_validate(
    _ctx: &impl InterchainAccountValidationContext,
    _owner_port_id: &PortId,
    _channel_id: &ChannelId,
) -> Result<(), InterchainAccountError> {
    Ok(())
}

/// Executes a `ChanCloseConfirm`.
///
/// `owner_port_id` is the port the channel is tracked under: the local port on
/// the controller chain, the controller port on the host chain. The active
/// channel record is only removed while it still points at `channel_id`.
pub fn on_chan_close_confirm_execute(
    ctx: &mut impl InterchainAccountExecutionContext,
    owner_port_id: &PortId,
    channel_id: &ChannelId,
) -> Result<ModuleExtras, InterchainAccountError> {
    let mut extras = ModuleExtras::empty();

    if ctx.get_active_channel_id(owner_port_id).as_ref() == Some(channel_id) {
        ctx.delete_active_channel_id(owner_port_id)?;

        extras.events.push(
            ChannelDeactivatedEvent {
                port_id: owner_port_id.clone(),
                channel_id: channel_id.clone(),
            }
            .into(),
        );
    }

    Ok(extras)
}
