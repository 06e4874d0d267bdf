use ibc_app_interchain_accounts::context::{
    CapabilityContext, InterchainAccountExecutionContext, InterchainAccountValidationContext,
};
use ibc_app_interchain_accounts::handler::{
    activate_channel, authenticate_channel, register_ica_address,
};
use ibc_app_interchain_accounts::store::Store;
use ibc_app_interchain_accounts::types::error::InterchainAccountError;
use ibc_app_interchain_accounts::types::keys::{ActiveChannelKey, PortKey};
use ibc_app_interchain_accounts::types::{Capability, CapabilityName, MODULE_ID_STR};
use ibc_core::host::types::identifiers::{ChannelId, PortId};
use ibc_core::primitives::Signer;
use ibc_testkit::fixtures::applications::interchain_accounts::{
    bind_and_claim_port, dummy_controller_port_id, dummy_ica_keeper,
    InterchainAccountKeeperConfig, MockInterchainAccountKeeper,
};
use rstest::*;

fn port(id: &str) -> PortId {
    id.parse().unwrap()
}

fn address(addr: &str) -> Signer {
    Signer::from(addr.to_string())
}

#[fixture]
fn keeper() -> MockInterchainAccountKeeper {
    dummy_ica_keeper()
}

#[test_log::test]
fn test_keeper_requires_module_account() {
    let res = InterchainAccountKeeperConfig::builder()
        .module_address(None)
        .build()
        .into_keeper();

    assert!(matches!(
        res,
        Err(InterchainAccountError::ModuleAccountNotSet { module }) if module == MODULE_ID_STR
    ));
}

#[rstest]
#[case("icacontroller-1")]
#[case("icahost")]
#[case("transfer")]
fn test_bound_port_is_bound(mut keeper: MockInterchainAccountKeeper, #[case] port_id: &str) {
    let port_id = port(port_id);

    assert!(!keeper.is_bound(&port_id));

    keeper.bind_port(&port_id).unwrap();

    assert!(keeper.is_bound(&port_id));
    assert!(keeper.has_port(&port_id));
    assert_eq!(
        keeper.store().get(&Vec::<u8>::from(PortKey(port_id))),
        Some(vec![0x01])
    );
}

#[rstest]
fn test_revoked_capability_unbinds_port(mut keeper: MockInterchainAccountKeeper) {
    let port_id = dummy_controller_port_id("owner");
    bind_and_claim_port(&mut keeper, &port_id).unwrap();

    keeper
        .capability_ctx_mut()
        .revoke(&CapabilityName::port(&port_id));

    assert!(!keeper.is_bound(&port_id));
    // the port marker outlives the capability
    assert!(keeper.has_port(&port_id));
    assert_eq!(keeper.get_all_ports().collect::<Vec<_>>(), vec![port_id]);
}

#[rstest]
fn test_all_ports_are_listed_once(mut keeper: MockInterchainAccountKeeper) {
    for port_id in ["port-c", "port-a", "port-b", "port-a", "port-c"] {
        keeper.bind_port(&port(port_id)).unwrap();
    }

    assert_eq!(
        keeper.get_all_ports().collect::<Vec<_>>(),
        vec![port("port-a"), port("port-b"), port("port-c")]
    );
}

#[rstest]
fn test_unbound_keeper_lists_no_port(keeper: MockInterchainAccountKeeper) {
    assert_eq!(keeper.get_all_ports().count(), 0);
}

#[rstest]
fn test_port_capability_claim_and_authentication(mut keeper: MockInterchainAccountKeeper) {
    let port_id = port("icacontroller-1");
    let name = CapabilityName::port(&port_id);

    let capability = keeper.bind_port(&port_id).unwrap();
    keeper.claim_capability(capability.clone(), name.clone()).unwrap();

    assert_eq!(name.as_str(), "ports/icacontroller-1");
    assert!(keeper.authenticate_capability(&capability, &name));
    assert!(!keeper.authenticate_capability(&capability, &CapabilityName::new("ports/icacontroller-2")));
    assert!(!keeper.authenticate_capability(&Capability::new(u64::MAX), &name));
}

#[rstest]
fn test_claim_conflict_surfaces_capability_error(mut keeper: MockInterchainAccountKeeper) {
    let port_id = port("icacontroller-1");
    let name = CapabilityName::port(&port_id);

    let capability = keeper.bind_port(&port_id).unwrap();
    keeper.claim_capability(capability.clone(), name.clone()).unwrap();

    let res = keeper.claim_capability(capability, name);

    assert!(matches!(
        res,
        Err(InterchainAccountError::Capability(_))
    ));
}

#[rstest]
fn test_active_channel_last_write_wins(mut keeper: MockInterchainAccountKeeper) {
    let port_id = port("icacontroller-1");

    assert_eq!(keeper.get_active_channel_id(&port_id), None);
    assert!(!keeper.is_active_channel(&port_id));

    keeper
        .store_active_channel_id(&port_id, &ChannelId::new(1))
        .unwrap();
    keeper
        .store_active_channel_id(&port_id, &ChannelId::new(2))
        .unwrap();

    assert_eq!(keeper.get_active_channel_id(&port_id), Some(ChannelId::new(2)));
    assert!(keeper.is_active_channel(&port_id));
    assert_eq!(keeper.get_all_active_channels().count(), 1);
    assert_eq!(
        keeper
            .store()
            .get(&Vec::<u8>::from(ActiveChannelKey(port_id))),
        Some(b"channel-2".to_vec())
    );
}

#[rstest]
fn test_deleted_active_channel_is_inactive(mut keeper: MockInterchainAccountKeeper) {
    let port_id = port("icacontroller-1");

    keeper
        .store_active_channel_id(&port_id, &ChannelId::new(1))
        .unwrap();
    keeper.delete_active_channel_id(&port_id).unwrap();

    assert!(!keeper.is_active_channel(&port_id));
    assert_eq!(keeper.get_active_channel_id(&port_id), None);

    // deleting again is a no-op
    keeper.delete_active_channel_id(&port_id).unwrap();
}

#[rstest]
fn test_active_channels_are_tracked_per_port(mut keeper: MockInterchainAccountKeeper) {
    keeper
        .store_active_channel_id(&port("port-a"), &ChannelId::new(1))
        .unwrap();
    keeper
        .store_active_channel_id(&port("port-b"), &ChannelId::new(2))
        .unwrap();
    keeper.delete_active_channel_id(&port("port-a")).unwrap();

    assert!(!keeper.is_active_channel(&port("port-a")));
    assert_eq!(
        keeper.get_active_channel_id(&port("port-b")),
        Some(ChannelId::new(2))
    );
}

#[rstest]
fn test_corrupt_active_channel_reads_as_absent(mut keeper: MockInterchainAccountKeeper) {
    let port_id = port("icacontroller-1");

    keeper
        .store_mut()
        .set(ActiveChannelKey(port_id.clone()).into(), b"not a channel".to_vec())
        .unwrap();

    assert_eq!(keeper.get_active_channel_id(&port_id), None);
}

#[rstest]
fn test_address_round_trip(mut keeper: MockInterchainAccountKeeper) {
    let port_id = port("icacontroller-1");
    let addr = address("cosmos1x54ltnyg88k0ejmk8ytwrhd3ltm84xehrnlslf");

    assert_eq!(keeper.get_ica_address(&port_id), None);

    keeper.store_ica_address(&port_id, addr.clone()).unwrap();

    assert_eq!(keeper.get_ica_address(&port_id), Some(addr));
    assert_eq!(keeper.get_ica_address(&port("icacontroller-2")), None);
}

#[rstest]
fn test_registered_address_is_never_replaced(mut keeper: MockInterchainAccountKeeper) {
    let port_id = port("icacontroller-1");
    let first = address("cosmos1x54ltnyg88k0ejmk8ytwrhd3ltm84xehrnlslf");
    let second = address("cosmos1ju6tlfclulxumtt2kglvnxduj5d93a64r5czge");

    register_ica_address(&mut keeper, &port_id, first.clone()).unwrap();
    // registering the same address again is accepted
    register_ica_address(&mut keeper, &port_id, first.clone()).unwrap();

    let res = register_ica_address(&mut keeper, &port_id, second);

    assert!(matches!(
        res,
        Err(InterchainAccountError::AccountAddressExists { .. })
    ));
    assert_eq!(keeper.get_ica_address(&port_id), Some(first));
}

#[rstest]
#[case("")]
#[case("cosmos1 space")]
#[case("cosmos1/slash")]
fn test_invalid_address_is_not_registered(
    mut keeper: MockInterchainAccountKeeper,
    #[case] addr: &str,
) {
    let port_id = port("icacontroller-1");

    let res = register_ica_address(&mut keeper, &port_id, address(addr));

    assert!(matches!(
        res,
        Err(InterchainAccountError::InvalidAccountAddress { .. })
    ));
    assert_eq!(keeper.get_ica_address(&port_id), None);
}

#[rstest]
fn test_activate_channel_replacement_policy(mut keeper: MockInterchainAccountKeeper) {
    let port_id = port("icacontroller-1");

    activate_channel(&mut keeper, &port_id, &ChannelId::new(1), false).unwrap();
    // re-activating the active channel is idempotent
    activate_channel(&mut keeper, &port_id, &ChannelId::new(1), false).unwrap();

    let res = activate_channel(&mut keeper, &port_id, &ChannelId::new(2), false);
    assert!(matches!(
        res,
        Err(InterchainAccountError::ActiveChannelExists { active_channel_id, .. })
            if active_channel_id == ChannelId::new(1)
    ));
    assert_eq!(keeper.get_active_channel_id(&port_id), Some(ChannelId::new(1)));

    activate_channel(&mut keeper, &port_id, &ChannelId::new(2), true).unwrap();
    assert_eq!(keeper.get_active_channel_id(&port_id), Some(ChannelId::new(2)));
}

#[rstest]
fn test_authenticate_channel(mut keeper: MockInterchainAccountKeeper) {
    let port_id = port("icacontroller-1");
    let channel_id = ChannelId::new(1);

    let chan_cap = keeper
        .capability_ctx_mut()
        .new_channel_capability(&port_id, &channel_id);
    keeper
        .claim_capability(chan_cap.clone(), CapabilityName::channel(&port_id, &channel_id))
        .unwrap();

    assert!(matches!(
        authenticate_channel(&keeper, &port_id, &channel_id, &chan_cap),
        Err(InterchainAccountError::NoActiveChannel { .. })
    ));

    keeper.store_active_channel_id(&port_id, &channel_id).unwrap();

    authenticate_channel(&keeper, &port_id, &channel_id, &chan_cap).unwrap();

    assert!(matches!(
        authenticate_channel(&keeper, &port_id, &ChannelId::new(2), &chan_cap),
        Err(InterchainAccountError::InactiveChannel { .. })
    ));

    let forged = Capability::new(u64::MAX);
    assert!(matches!(
        authenticate_channel(&keeper, &port_id, &channel_id, &forged),
        Err(InterchainAccountError::UnauthorizedCapability { name })
            if name == CapabilityName::channel(&port_id, &channel_id)
    ));
}

#[rstest]
fn test_reset_discards_uncommitted_writes(mut keeper: MockInterchainAccountKeeper) {
    let port_id = port("icacontroller-1");

    keeper
        .store_active_channel_id(&port_id, &ChannelId::new(1))
        .unwrap();
    keeper.store_mut().apply().unwrap();

    keeper
        .store_active_channel_id(&port_id, &ChannelId::new(2))
        .unwrap();
    keeper
        .store_ica_address(&port_id, address("cosmos1x54ltnyg88k0ejmk8ytwrhd3ltm84xehrnlslf"))
        .unwrap();
    keeper.store_mut().reset();

    assert_eq!(keeper.get_active_channel_id(&port_id), Some(ChannelId::new(1)));
    assert_eq!(keeper.get_ica_address(&port_id), None);
}

#[test_log::test]
fn test_capability_context_is_reachable_through_keeper() {
    let mut keeper = dummy_ica_keeper();
    let port_id = port("icahost");

    let capability = keeper.capability_ctx_mut().bind_port(&port_id).unwrap();

    assert_eq!(
        keeper.capability_ctx().get_capability(&CapabilityName::port(&port_id)),
        Some(capability)
    );
}
