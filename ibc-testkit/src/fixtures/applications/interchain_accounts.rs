use ibc_app_interchain_accounts::context::{
    InterchainAccountExecutionContext, InterchainAccountValidationContext,
};
use ibc_app_interchain_accounts::keeper::InterchainAccountKeeper;
use ibc_app_interchain_accounts::module::{
    on_chan_open_ack_execute, on_chan_open_ack_validate, on_chan_open_confirm_execute,
    on_chan_open_confirm_validate, on_chan_open_init_execute, on_chan_open_init_validate,
    on_chan_open_try_execute, on_chan_open_try_validate,
};
use ibc_app_interchain_accounts::types::error::InterchainAccountError;
use ibc_app_interchain_accounts::types::{
    default_host_port_id, new_controller_port_id, CapabilityName, MODULE_ID_STR, VERSION_PREFIX,
};
use ibc_core::channel::types::channel::{Counterparty, Order};
use ibc_core::channel::types::Version;
use ibc_core::host::types::identifiers::{ChannelId, ConnectionId, PortId};
use ibc_core::primitives::prelude::*;
use ibc_core::primitives::Signer;
use typed_builder::TypedBuilder;

use crate::store::{InMemoryStore, RevertibleStore};
use crate::testapp::ibc::applications::interchain_accounts::{
    MockAccountKeeper, MockCapabilityKeeper, ACCOUNT_PREFIX,
};

/// The keeper wired with the testkit's in-memory store and mock keepers.
pub type MockInterchainAccountKeeper =
    InterchainAccountKeeper<RevertibleStore<InMemoryStore>, MockCapabilityKeeper, MockAccountKeeper>;

/// Configuration for a [`MockInterchainAccountKeeper`].
#[derive(TypedBuilder, Debug)]
pub struct InterchainAccountKeeperConfig {
    #[builder(default = ACCOUNT_PREFIX)]
    account_prefix: &'static str,
    #[builder(default = Some(
        crate::testapp::ibc::applications::interchain_accounts::module_address(MODULE_ID_STR),
    ))]
    module_address: Option<Vec<u8>>,
    #[builder(default)]
    store: RevertibleStore<InMemoryStore>,
}

impl InterchainAccountKeeperConfig {
    pub fn into_keeper(self) -> Result<MockInterchainAccountKeeper, InterchainAccountError> {
        InterchainAccountKeeper::new(
            self.store,
            MockCapabilityKeeper::default(),
            MockAccountKeeper::new(self.account_prefix, self.module_address),
        )
    }
}

/// Returns a keeper with the default module account, for testing purposes only!
pub fn dummy_ica_keeper() -> MockInterchainAccountKeeper {
    InterchainAccountKeeperConfig::builder()
        .build()
        .into_keeper()
        .expect("the default module account is set")
}

/// Returns a controller port owned by `owner`, for testing purposes only!
pub fn dummy_controller_port_id(owner: &str) -> PortId {
    new_controller_port_id(&Signer::from(owner.to_string()))
        .expect("owner is a valid port identifier suffix")
}

/// Binds `port_id` and claims its capability under the port path, unless the
/// port is already bound.
pub fn bind_and_claim_port(
    keeper: &mut MockInterchainAccountKeeper,
    port_id: &PortId,
) -> Result<(), InterchainAccountError> {
    if keeper.is_bound(port_id) {
        return Ok(());
    }

    let capability = keeper.bind_port(port_id)?;
    keeper.claim_capability(capability, CapabilityName::port(port_id))
}

/// Configuration of a channel opening between a controller and a host chain.
#[derive(TypedBuilder, Clone, Debug)]
pub struct IcaChannelConfig {
    #[builder(default = dummy_controller_port_id("owner"))]
    pub port_id_on_a: PortId,
    #[builder(default = ChannelId::new(0))]
    pub chan_id_on_a: ChannelId,
    #[builder(default = ConnectionId::new(0))]
    pub conn_id_on_a: ConnectionId,
    #[builder(default = ChannelId::new(0))]
    pub chan_id_on_b: ChannelId,
    #[builder(default = ConnectionId::new(0))]
    pub conn_id_on_b: ConnectionId,
    #[builder(default = Order::Ordered)]
    pub order: Order,
    #[builder(default = Version::new(VERSION_PREFIX.to_string()))]
    pub version_on_a: Version,
}

/// Relays the four steps of an interchain accounts channel handshake between
/// `ctx_a`, the controller chain, and `ctx_b`, the host chain.
///
/// Returns the version both chains agreed on.
pub fn open_ica_channel(
    ctx_a: &mut MockInterchainAccountKeeper,
    ctx_b: &mut MockInterchainAccountKeeper,
    config: &IcaChannelConfig,
) -> Result<Version, InterchainAccountError> {
    let port_id_on_b = default_host_port_id();

    bind_and_claim_port(ctx_a, &config.port_id_on_a)?;
    bind_and_claim_port(ctx_b, &port_id_on_b)?;

    // ChanOpenInit on A
    let counterparty_on_a = Counterparty::new(port_id_on_b.clone(), None);
    on_chan_open_init_validate(
        &*ctx_a,
        config.order,
        &[config.conn_id_on_a.clone()],
        &config.port_id_on_a,
        &config.chan_id_on_a,
        &counterparty_on_a,
        &config.version_on_a,
    )?;
    let chan_cap_on_a = ctx_a
        .capability_ctx_mut()
        .new_channel_capability(&config.port_id_on_a, &config.chan_id_on_a);
    let (_, version_on_a) = on_chan_open_init_execute(
        ctx_a,
        config.order,
        &[config.conn_id_on_a.clone()],
        &config.port_id_on_a,
        &config.chan_id_on_a,
        chan_cap_on_a,
        &counterparty_on_a,
        &config.version_on_a,
    )?;

    // ChanOpenTry on B
    let counterparty_on_b = Counterparty::new(
        config.port_id_on_a.clone(),
        Some(config.chan_id_on_a.clone()),
    );
    on_chan_open_try_validate(
        &*ctx_b,
        config.order,
        &[config.conn_id_on_b.clone()],
        &port_id_on_b,
        &config.chan_id_on_b,
        &counterparty_on_b,
        &version_on_a,
    )?;
    let chan_cap_on_b = ctx_b
        .capability_ctx_mut()
        .new_channel_capability(&port_id_on_b, &config.chan_id_on_b);
    let (_, version_on_b) = on_chan_open_try_execute(
        ctx_b,
        config.order,
        &[config.conn_id_on_b.clone()],
        &port_id_on_b,
        &config.chan_id_on_b,
        chan_cap_on_b,
        &counterparty_on_b,
        &version_on_a,
    )?;

    // ChanOpenAck on A
    on_chan_open_ack_validate(
        &*ctx_a,
        &config.port_id_on_a,
        &config.chan_id_on_a,
        &version_on_b,
    )?;
    on_chan_open_ack_execute(
        ctx_a,
        &config.port_id_on_a,
        &config.chan_id_on_a,
        &version_on_b,
    )?;

    // ChanOpenConfirm on B
    on_chan_open_confirm_validate(
        &*ctx_b,
        &port_id_on_b,
        &config.chan_id_on_b,
        &config.port_id_on_a,
    )?;
    on_chan_open_confirm_execute(
        ctx_b,
        &port_id_on_b,
        &config.chan_id_on_b,
        &config.port_id_on_a,
    )?;

    Ok(version_on_b)
}
