use ibc_app_interchain_accounts_types::error::InterchainAccountError;
use ibc_app_interchain_accounts_types::{
    new_app_version, validate_account_address, verify_version_prefix, VERSION_PREFIX,
};
use ibc_core::channel::types::channel::{Counterparty, Order};
use ibc_core::channel::types::Version;
use ibc_core::host::types::identifiers::{ConnectionId, PortId};

use crate::context::InterchainAccountValidationContext;

/// Handles application version negotiation for the interchain accounts
/// application.
///
/// The proposed version must be exactly [`VERSION_PREFIX`]. On success the
/// returned version is `{VERSION_PREFIX}.{address}`, where the address is
/// derived from the module account address and the counterparty port
/// identifier only, and must pass [`validate_account_address`]. The order,
/// connection and port identifiers belong to the handshake contract and do not
/// take part in the decision.
///
/// Reads no store state, so the same inputs always yield the same version.
pub fn negotiate_app_version<Ctx>(
    ctx: &Ctx,
    _order: Order,
    _conn_id: &ConnectionId,
    _port_id: &PortId,
    counterparty: &Counterparty,
    proposed_version: &Version,
) -> Result<Version, InterchainAccountError>
where
    Ctx: InterchainAccountValidationContext,
{
    verify_version_prefix(proposed_version)?;

    let address = ctx.generate_ica_address(&counterparty.port_id);
    validate_account_address(address.as_ref())?;

    Ok(new_app_version(VERSION_PREFIX, &address))
}
