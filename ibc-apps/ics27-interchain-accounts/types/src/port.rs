use ibc_core_host_types::identifiers::PortId;
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;

use crate::error::InterchainAccountError;

/// The port identifier a host chain binds to.
pub const HOST_PORT_ID_STR: &str = "icahost";

/// Prefix of every controller port identifier. The owner of the interchain
/// account follows it.
pub const CONTROLLER_PORT_PREFIX: &str = "icacontroller-";

/// Returns the port identifier of the host chain.
pub fn default_host_port_id() -> PortId {
    PortId::new(HOST_PORT_ID_STR.to_string()).expect("host port identifier is valid")
}

/// Builds the controller port identifier owned by `owner`, in the form
/// `icacontroller-{owner}`.
pub fn new_controller_port_id(owner: &Signer) -> Result<PortId, InterchainAccountError> {
    let owner = owner.as_ref().trim();

    if owner.is_empty() {
        return Err(InterchainAccountError::InvalidAccountAddress {
            address: owner.to_string(),
            description: "owner address cannot be blank".to_string(),
        });
    }

    Ok(PortId::new(format!("{CONTROLLER_PORT_PREFIX}{owner}"))?)
}

/// Checks that `port_id` carries the controller port prefix.
pub fn verify_controller_port_id_prefix(port_id: &PortId) -> Result<(), InterchainAccountError> {
    if !port_id.as_str().starts_with(CONTROLLER_PORT_PREFIX) {
        return Err(InterchainAccountError::InvalidControllerPort {
            port_id: port_id.clone(),
            expected_prefix: CONTROLLER_PORT_PREFIX.to_string(),
        });
    }

    Ok(())
}
