//! Defines the genesis state of the interchain accounts application
use alloc::collections::BTreeSet;
use core::str::FromStr;

use ibc_core_host_types::identifiers::{ChannelId, PortId};
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;

use crate::error::InterchainAccountError;
use crate::params::Params;
use crate::validate_account_address;

/// A channel recorded as active for a port.
#[cfg_attr(
    feature = "parity-scale-codec",
    derive(
        parity_scale_codec::Encode,
        parity_scale_codec::Decode,
        scale_info::TypeInfo
    )
)]
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveChannel {
    pub port_id: PortId,
    pub channel_id: ChannelId,
}

/// An interchain account address registered for a port.
#[cfg_attr(
    feature = "parity-scale-codec",
    derive(
        parity_scale_codec::Encode,
        parity_scale_codec::Decode,
        scale_info::TypeInfo
    )
)]
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisteredAccount {
    pub port_id: PortId,
    pub account_address: Signer,
}

/// Full exportable state of the interchain accounts application.
#[cfg_attr(
    feature = "parity-scale-codec",
    derive(
        parity_scale_codec::Encode,
        parity_scale_codec::Decode,
        scale_info::TypeInfo
    )
)]
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenesisState {
    pub ports: Vec<PortId>,
    pub active_channels: Vec<ActiveChannel>,
    pub accounts: Vec<RegisteredAccount>,
    pub params: Params,
}

impl GenesisState {
    /// Checks every identifier and address, and rejects ports listed twice.
    pub fn validate(&self) -> Result<(), InterchainAccountError> {
        let mut seen = BTreeSet::new();

        for port_id in &self.ports {
            port_id.validate()?;

            if !seen.insert(port_id) {
                return Err(InterchainAccountError::DuplicatePort {
                    port_id: port_id.clone(),
                });
            }
        }

        for ActiveChannel {
            port_id,
            channel_id,
        } in &self.active_channels
        {
            port_id.validate()?;
            ChannelId::from_str(channel_id.as_str())?;
        }

        for RegisteredAccount {
            port_id,
            account_address,
        } in &self.accounts
        {
            port_id.validate()?;
            validate_account_address(account_address.as_ref())?;
        }

        Ok(())
    }
}
