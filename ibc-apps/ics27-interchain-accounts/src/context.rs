//! Defines the main context traits and the collaborators the application
//! relies on

use ibc_app_interchain_accounts_types::error::{CapabilityError, InterchainAccountError};
use ibc_app_interchain_accounts_types::genesis::{ActiveChannel, RegisteredAccount};
use ibc_app_interchain_accounts_types::params::Params;
use ibc_app_interchain_accounts_types::{Capability, CapabilityName};
use ibc_core::host::types::identifiers::{ChannelId, PortId};
use ibc_core::primitives::prelude::*;
use ibc_core::primitives::Signer;

/// The host's port binding and capability subsystem.
pub trait CapabilityContext {
    /// Binds `port_id` and returns the capability scoped to its port path.
    fn bind_port(&mut self, port_id: &PortId) -> Result<Capability, CapabilityError>;

    /// Returns the capability owned under `name`, if any.
    fn get_capability(&self, name: &CapabilityName) -> Option<Capability>;

    /// Returns true iff `capability` is the one owned under `name`.
    fn authenticate_capability(&self, capability: &Capability, name: &CapabilityName) -> bool;

    /// Registers `name` as an owner of `capability`.
    fn claim_capability(
        &mut self,
        capability: Capability,
        name: CapabilityName,
    ) -> Result<(), CapabilityError>;
}

/// The host's account subsystem.
pub trait AccountContext {
    /// Returns the raw address of the module account named `module`.
    fn get_module_address(&self, module: &str) -> Option<Vec<u8>>;

    /// Deterministically derives an account address from `base_address` and
    /// the `seed` port. Must be a pure function of its inputs.
    fn derive_address(&self, base_address: &[u8], seed: &PortId) -> Signer;
}

/// Methods required in interchain accounts validation, to be implemented by
/// the host
pub trait InterchainAccountValidationContext {
    /// Returns true iff a capability exists for the port path of `port_id`.
    ///
    /// Boundness follows the live capability, not the stored port marker.
    fn is_bound(&self, port_id: &PortId) -> bool;

    /// Returns every port the module has bound, each once, in key order.
    /// Meant for state export only.
    fn get_all_ports(&self) -> impl Iterator<Item = PortId> + '_;

    /// Returns true iff `capability` is the one owned under `name`.
    fn authenticate_capability(&self, capability: &Capability, name: &CapabilityName) -> bool;

    /// Returns the channel currently active for `port_id`.
    fn get_active_channel_id(&self, port_id: &PortId) -> Option<ChannelId>;

    /// Returns true if a channel is active for `port_id`.
    fn is_active_channel(&self, port_id: &PortId) -> bool {
        self.get_active_channel_id(port_id).is_some()
    }

    /// Returns every recorded active channel, in port key order. Meant for
    /// state export only.
    fn get_all_active_channels(&self) -> impl Iterator<Item = ActiveChannel> + '_;

    /// Returns the interchain account address associated with `port_id`.
    fn get_ica_address(&self, port_id: &PortId) -> Option<Signer>;

    /// Returns every registered interchain account address, in port key
    /// order. Meant for state export only.
    fn get_all_ica_addresses(&self) -> impl Iterator<Item = RegisteredAccount> + '_;

    /// Returns the module parameters, or the defaults if none were stored.
    fn get_params(&self) -> Result<Params, InterchainAccountError>;

    /// Derives the interchain account address owned by the controller port
    /// `counterparty_port_id` from the module account address.
    fn generate_ica_address(&self, counterparty_port_id: &PortId) -> Signer;
}

/// Methods required in interchain accounts execution, to be implemented by
/// the host
pub trait InterchainAccountExecutionContext: InterchainAccountValidationContext {
    /// Marks `port_id` as claimed and binds it, returning the port capability.
    fn bind_port(&mut self, port_id: &PortId) -> Result<Capability, InterchainAccountError>;

    /// Registers `name` as an owner of `capability`.
    fn claim_capability(
        &mut self,
        capability: Capability,
        name: CapabilityName,
    ) -> Result<(), InterchainAccountError>;

    /// Stores `channel_id` as the active channel of `port_id`, replacing any
    /// previous one.
    fn store_active_channel_id(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<(), InterchainAccountError>;

    /// Removes the active channel of `port_id`.
    fn delete_active_channel_id(&mut self, port_id: &PortId) -> Result<(), InterchainAccountError>;

    /// Stores the interchain account address of `port_id`, replacing any
    /// previous one.
    fn store_ica_address(
        &mut self,
        port_id: &PortId,
        address: Signer,
    ) -> Result<(), InterchainAccountError>;

    /// Stores the module parameters.
    fn store_params(&mut self, params: Params) -> Result<(), InterchainAccountError>;
}
