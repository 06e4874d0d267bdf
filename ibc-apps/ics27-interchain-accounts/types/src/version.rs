use ibc_core_channel_types::Version;
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;

use crate::error::InterchainAccountError;
use crate::{validate_account_address, VERSION_DELIMITER, VERSION_PREFIX};

/// Returns the version every interchain accounts channel handshake starts
/// from.
pub fn version_prefix() -> Version {
    Version::new(VERSION_PREFIX.to_string())
}

/// Returns a complete application version string in the format
/// `{version_prefix}.{address}`.
pub fn new_app_version(version_prefix: &str, address: &Signer) -> Version {
    Version::new(format!(
        "{version_prefix}{VERSION_DELIMITER}{}",
        address.as_ref()
    ))
}

/// Fails unless `proposed` is byte for byte the supported version prefix.
pub fn verify_version_prefix(proposed: &Version) -> Result<(), InterchainAccountError> {
    if proposed.as_str() != VERSION_PREFIX {
        return Err(InterchainAccountError::MismatchedVersion {
            expected: VERSION_PREFIX.to_string(),
            actual: proposed.as_str().to_string(),
        });
    }

    Ok(())
}

/// Extracts the interchain account address from a complete application
/// version.
pub fn parse_address_from_version(version: &Version) -> Result<Signer, InterchainAccountError> {
    let (_, address) = split_version(version)?;

    Ok(Signer::from(address.to_string()))
}

/// Performs basic validation of a complete application version: it must be
/// made of the supported prefix and a valid account address.
pub fn validate_version(version: &Version) -> Result<(), InterchainAccountError> {
    let (prefix, address) = split_version(version)?;

    if prefix != VERSION_PREFIX {
        return Err(InterchainAccountError::MismatchedVersion {
            expected: VERSION_PREFIX.to_string(),
            actual: prefix.to_string(),
        });
    }

    validate_account_address(address)
}

fn split_version(version: &Version) -> Result<(&str, &str), InterchainAccountError> {
    let mut parts = version.as_str().split(VERSION_DELIMITER);

    match (parts.next(), parts.next(), parts.next()) {
        (Some(prefix), Some(address), None) => Ok((prefix, address)),
        _ => Err(InterchainAccountError::MalformedVersion {
            version: version.as_str().to_string(),
        }),
    }
}
