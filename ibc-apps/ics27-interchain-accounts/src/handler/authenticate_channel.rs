use ibc_app_interchain_accounts_types::error::InterchainAccountError;
use ibc_app_interchain_accounts_types::{Capability, CapabilityName};
use ibc_core::host::types::identifiers::{ChannelId, PortId};

use crate::context::InterchainAccountValidationContext;

/// Checks that `channel_id` is still authorized to act for `port_id`: it must
/// be the port's active channel, and `capability` must be the capability
/// owned over that channel.
pub fn authenticate_channel<Ctx>(
    ctx: &Ctx,
    port_id: &PortId,
    channel_id: &ChannelId,
    capability: &Capability,
) -> Result<(), InterchainAccountError>
where
    Ctx: InterchainAccountValidationContext,
{
    let active_channel_id =
        ctx.get_active_channel_id(port_id)
            .ok_or_else(|| InterchainAccountError::NoActiveChannel {
                port_id: port_id.clone(),
            })?;

    if &active_channel_id != channel_id {
        return Err(InterchainAccountError::InactiveChannel {
            port_id: port_id.clone(),
            expected: active_channel_id,
            actual: channel_id.clone(),
        });
    }

    let name = CapabilityName::channel(port_id, channel_id);

    if !ctx.authenticate_capability(capability, &name) {
        return Err(InterchainAccountError::UnauthorizedCapability { name });
    }

    Ok(())
}
