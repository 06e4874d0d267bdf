//! Defines the interchain accounts error types
use displaydoc::Display;
use ibc_core_channel_types::acknowledgement::StatusValue;
use ibc_core_channel_types::channel::Order;
use ibc_core_host_types::error::IdentifierError;
use ibc_core_host_types::identifiers::{ChannelId, PortId};
use ibc_primitives::prelude::*;

use crate::CapabilityName;

/// Errors raised by the capability collaborator. They reach callers unchanged.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum CapabilityError {
    /// capability is already claimed under name `{name}`
    AlreadyClaimed { name: CapabilityName },
    /// capability not found for name `{name}`
    NotFound { name: CapabilityName },
    /// capability keeper error: `{description}`
    Other { description: String },
}

#[derive(Display, Debug)]
pub enum InterchainAccountError {
    /// the interchain accounts module account `{module}` has not been set
    ModuleAccountNotSet { module: String },
    /// failed to negotiate app version: expected `{expected}`, got `{actual}`
    MismatchedVersion { expected: String, actual: String },
    /// malformed version `{version}`: expected format <app-version.account-address>
    MalformedVersion { version: String },
    /// invalid account address `{address}`: `{description}`
    InvalidAccountAddress { address: String, description: String },
    /// invalid identifier: `{0}`
    InvalidIdentifier(IdentifierError),
    /// invalid controller port `{port_id}`: expected prefix `{expected_prefix}`
    InvalidControllerPort {
        port_id: PortId,
        expected_prefix: String,
    },
    /// invalid port: `{port_id}`, expected `{expected_port_id}`
    InvalidPort {
        port_id: PortId,
        expected_port_id: PortId,
    },
    /// expected `{expected}` channel, got `{actual}`
    InvalidOrder { expected: Order, actual: Order },
    /// expected `{expected}` connection hops, got `{actual}`
    InvalidConnectionHopsLength { expected: u64, actual: u64 },
    /// capability error: `{0}`
    Capability(CapabilityError),
    /// capability does not authenticate for `{name}`
    UnauthorizedCapability { name: CapabilityName },
    /// channel `{active_channel_id}` is already active for port `{port_id}`
    ActiveChannelExists {
        port_id: PortId,
        active_channel_id: ChannelId,
    },
    /// no active channel for port `{port_id}`
    NoActiveChannel { port_id: PortId },
    /// channel `{actual}` is not the active channel `{expected}` for port `{port_id}`
    InactiveChannel {
        port_id: PortId,
        expected: ChannelId,
        actual: ChannelId,
    },
    /// port `{port_id}` is already associated with account `{address}`
    AccountAddressExists { port_id: PortId, address: String },
    /// duplicate port `{port_id}` in genesis state
    DuplicatePort { port_id: PortId },
    /// controller chain functionality is disabled
    ControllerDisabled,
    /// host chain functionality is disabled
    HostDisabled,
    /// channel cannot be closed
    CantCloseChannel,
    /// store error: `{description}`
    Store { description: String },
    /// failed to decode `{description}`
    FailedToDecode { description: String },
}

impl InterchainAccountError {
    pub fn store<E: core::fmt::Debug>(err: E) -> Self {
        Self::Store {
            description: format!("{err:?}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CapabilityError {}

#[cfg(feature = "std")]
impl std::error::Error for InterchainAccountError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::InvalidIdentifier(e) => Some(e),
            Self::Capability(e) => Some(e),
            _ => None,
        }
    }
}

impl From<IdentifierError> for InterchainAccountError {
    fn from(err: IdentifierError) -> Self {
        Self::InvalidIdentifier(err)
    }
}

impl From<CapabilityError> for InterchainAccountError {
    fn from(err: CapabilityError) -> Self {
        Self::Capability(err)
    }
}

impl From<InterchainAccountError> for StatusValue {
    fn from(err: InterchainAccountError) -> Self {
        StatusValue::new(err.to_string()).expect("error message must not be empty")
    }
}
