use ibc_core_host_types::identifiers::PortId;
use ibc_primitives::prelude::*;
use sha2::{Digest, Sha256};

use crate::error::InterchainAccountError;
use crate::VERSION_DELIMITER;

/// Maximum length of an interchain account address.
pub const MAX_ADDRESS_LENGTH: usize = 128;

/// Length of the raw account addresses produced by [`generate_address`].
pub const ADDRESS_BYTES_LENGTH: usize = 20;

/// Derives the raw interchain account address owned by `port_id` from the
/// module account address.
///
/// The address is the first 20 bytes of `sha256(module_address || port_id)`,
/// the truncated hash Cosmos SDK chains use for module-derived accounts. Hosts
/// with another address scheme supply their own derivation through the
/// account context instead.
pub fn generate_address(module_address: &[u8], port_id: &PortId) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(module_address);
    hasher.update(port_id.as_bytes());

    let mut hash = hasher.finalize().to_vec();
    hash.truncate(ADDRESS_BYTES_LENGTH);
    hash
}

/// Performs basic validation of an interchain account address.
///
/// The address must be non-empty, at most [`MAX_ADDRESS_LENGTH`] bytes, and
/// only made of alphanumerics or `_`, `+`, `-`. In particular it never
/// contains the [`VERSION_DELIMITER`], so it always fits in an application
/// version.
pub fn validate_account_address(address: &str) -> Result<(), InterchainAccountError> {
    let invalid = |description: &str| InterchainAccountError::InvalidAccountAddress {
        address: address.to_string(),
        description: description.to_string(),
    };

    if address.trim().is_empty() {
        return Err(invalid("address cannot be blank"));
    }

    if address.len() > MAX_ADDRESS_LENGTH {
        return Err(invalid("address exceeds the maximum length"));
    }

    if address.contains(VERSION_DELIMITER) {
        return Err(invalid("address contains the version delimiter"));
    }

    if !address
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-'))
    {
        return Err(invalid("address contains invalid characters"));
    }

    Ok(())
}
