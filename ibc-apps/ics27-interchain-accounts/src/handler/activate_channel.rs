use ibc_app_interchain_accounts_types::error::InterchainAccountError;
use ibc_app_interchain_accounts_types::LOG_TARGET;
use ibc_core::host::types::identifiers::{ChannelId, PortId};
use tracing::debug;

use crate::context::InterchainAccountExecutionContext;

/// Makes `channel_id` the active channel of `port_id`.
///
/// Unlike [`InterchainAccountExecutionContext::store_active_channel_id`], it
/// refuses to supersede a different active channel unless `replace` is set.
/// Re-activating the channel that is already active is a no-op success.
pub fn activate_channel<Ctx>(
    ctx: &mut Ctx,
    port_id: &PortId,
    channel_id: &ChannelId,
    replace: bool,
) -> Result<(), InterchainAccountError>
where
    Ctx: InterchainAccountExecutionContext,
{
    if let Some(active_channel_id) = ctx.get_active_channel_id(port_id) {
        if &active_channel_id == channel_id {
            return Ok(());
        }

        if !replace {
            return Err(InterchainAccountError::ActiveChannelExists {
                port_id: port_id.clone(),
                active_channel_id,
            });
        }

        debug!(
            target: LOG_TARGET,
            %port_id,
            superseded = %active_channel_id,
            "replacing active channel"
        );
    }

    ctx.store_active_channel_id(port_id, channel_id)
}
