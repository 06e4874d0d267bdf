use ibc_app_interchain_accounts_types::error::InterchainAccountError;
use ibc_app_interchain_accounts_types::validate_account_address;
use ibc_core::host::types::identifiers::PortId;
use ibc_core::primitives::prelude::*;
use ibc_core::primitives::Signer;

use crate::context::InterchainAccountExecutionContext;

/// Associates `address` with `port_id`, never replacing a different address
/// that is already registered for the port.
pub fn register_ica_address<Ctx>(
    ctx: &mut Ctx,
    port_id: &PortId,
    address: Signer,
) -> Result<(), InterchainAccountError>
where
    Ctx: InterchainAccountExecutionContext,
{
    validate_account_address(address.as_ref())?;

    match ctx.get_ica_address(port_id) {
        Some(existing) if existing == address => Ok(()),
        Some(existing) => Err(InterchainAccountError::AccountAddressExists {
            port_id: port_id.clone(),
            address: existing.as_ref().to_string(),
        }),
        None => ctx.store_ica_address(port_id, address),
    }
}
