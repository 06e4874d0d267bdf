use ibc_app_interchain_accounts::context::{
    InterchainAccountExecutionContext, InterchainAccountValidationContext,
};
use ibc_app_interchain_accounts::genesis::{export_genesis, init_genesis};
use ibc_app_interchain_accounts::query::query_params;
use ibc_app_interchain_accounts::types::error::InterchainAccountError;
use ibc_app_interchain_accounts::types::genesis::{ActiveChannel, GenesisState, RegisteredAccount};
use ibc_app_interchain_accounts::types::params::{Params, QueryParamsRequest};
use ibc_app_interchain_accounts::types::{default_host_port_id, CapabilityName};
use ibc_core::host::types::identifiers::{ChannelId, PortId};
use ibc_core::primitives::Signer;
use ibc_testkit::fixtures::applications::interchain_accounts::{
    dummy_controller_port_id, dummy_ica_keeper, open_ica_channel, IcaChannelConfig,
};
use test_log::test;

fn dummy_genesis() -> GenesisState {
    let port_id = dummy_controller_port_id("owner");

    GenesisState {
        ports: vec![port_id.clone(), default_host_port_id()],
        active_channels: vec![ActiveChannel {
            port_id: port_id.clone(),
            channel_id: ChannelId::new(3),
        }],
        accounts: vec![RegisteredAccount {
            port_id,
            account_address: Signer::from(
                "cosmos1x54ltnyg88k0ejmk8ytwrhd3ltm84xehrnlslf".to_string(),
            ),
        }],
        params: Params::new(true, false),
    }
}

#[test]
fn test_init_genesis_binds_and_restores() {
    let mut keeper = dummy_ica_keeper();
    let genesis = dummy_genesis();

    init_genesis(&mut keeper, genesis.clone()).unwrap();

    for port_id in &genesis.ports {
        assert!(keeper.is_bound(port_id));
        assert!(keeper
            .capability_ctx()
            .is_claimed(&CapabilityName::port(port_id)));
    }
    assert_eq!(
        keeper.get_active_channel_id(&genesis.active_channels[0].port_id),
        Some(ChannelId::new(3))
    );
    assert_eq!(
        keeper.get_ica_address(&genesis.accounts[0].port_id),
        Some(genesis.accounts[0].account_address.clone())
    );
    assert_eq!(keeper.get_params().unwrap(), Params::new(true, false));
}

#[test]
fn test_genesis_round_trip() {
    let mut keeper = dummy_ica_keeper();
    let genesis = dummy_genesis();

    init_genesis(&mut keeper, genesis.clone()).unwrap();
    let exported = export_genesis(&keeper).unwrap();

    // the dummy ports are already listed in key order
    assert_eq!(exported, genesis);

    let mut restored = dummy_ica_keeper();
    init_genesis(&mut restored, exported.clone()).unwrap();
    assert_eq!(export_genesis(&restored).unwrap(), exported);
}

#[test]
fn test_init_genesis_skips_bound_ports() {
    let mut keeper = dummy_ica_keeper();
    let genesis = dummy_genesis();

    init_genesis(&mut keeper, genesis.clone()).unwrap();
    // claiming the port capabilities again would fail if bound ports were not skipped
    init_genesis(&mut keeper, genesis).unwrap();
}

#[test]
fn test_init_genesis_rejects_duplicate_ports() {
    let mut keeper = dummy_ica_keeper();
    let mut genesis = dummy_genesis();
    genesis.ports.push(default_host_port_id());

    let res = init_genesis(&mut keeper, genesis);

    assert!(matches!(res, Err(InterchainAccountError::DuplicatePort { .. })));
    assert_eq!(keeper.get_all_ports().count(), 0);
}

#[test]
fn test_init_genesis_rejects_invalid_account() {
    let mut keeper = dummy_ica_keeper();
    let mut genesis = dummy_genesis();
    genesis.accounts[0].account_address = Signer::from(String::new());

    let res = init_genesis(&mut keeper, genesis);

    assert!(matches!(
        res,
        Err(InterchainAccountError::InvalidAccountAddress { .. })
    ));
}

#[test]
fn test_export_after_handshake_includes_host_records() {
    let mut ctx_a = dummy_ica_keeper();
    let mut ctx_b = dummy_ica_keeper();
    let config = IcaChannelConfig::builder().build();

    open_ica_channel(&mut ctx_a, &mut ctx_b, &config).unwrap();

    let exported = export_genesis(&ctx_b).unwrap();

    assert_eq!(exported.ports, vec![default_host_port_id()]);
    assert_eq!(
        exported.active_channels,
        vec![ActiveChannel {
            port_id: config.port_id_on_a.clone(),
            channel_id: config.chan_id_on_b.clone(),
        }]
    );
    assert_eq!(exported.accounts.len(), 1);
    assert_eq!(exported.accounts[0].port_id, config.port_id_on_a);
    exported.validate().unwrap();
}

#[test]
fn test_query_params() {
    let mut keeper = dummy_ica_keeper();

    assert_eq!(
        query_params(&keeper, QueryParamsRequest).unwrap().params,
        Params::default()
    );

    keeper.store_params(Params::new(false, true)).unwrap();

    assert_eq!(
        query_params(&keeper, QueryParamsRequest).unwrap().params,
        Params::new(false, true)
    );
}

#[test]
fn test_export_skips_unparsable_keys() {
    use ibc_app_interchain_accounts::store::Store;

    let mut keeper = dummy_ica_keeper();
    let port_id: PortId = "icacontroller-owner".parse().unwrap();

    keeper.bind_port(&port_id).unwrap();
    keeper
        .store_mut()
        .set(b"port/x".to_vec(), vec![0x01])
        .unwrap();

    assert_eq!(keeper.get_all_ports().collect::<Vec<_>>(), vec![port_id]);
}
