//! Helpers shared by the interchain accounts integration tests.
use ibc_app_interchain_accounts::types::{generate_address, MODULE_ID_STR};
use ibc_core::host::types::identifiers::PortId;
use ibc_core::primitives::Signer;
use ibc_testkit::testapp::ibc::applications::interchain_accounts::{module_address, ACCOUNT_PREFIX};
use subtle_encoding::bech32;

/// Returns the interchain account address a testkit host chain assigns to the
/// controller port `port_id`.
pub fn expected_ica_address(port_id: &PortId) -> Signer {
    let raw = generate_address(&module_address(MODULE_ID_STR), port_id);

    bech32::encode(ACCOUNT_PREFIX, raw).into()
}
