//! Default implementation of the interchain accounts contexts over a
//! key-value store.
use core::str::FromStr;

use ibc_app_interchain_accounts_types::error::InterchainAccountError;
use ibc_app_interchain_accounts_types::genesis::{ActiveChannel, RegisteredAccount};
use ibc_app_interchain_accounts_types::keys::{
    active_channel_key_prefix, owner_key_prefix, parse_port_id_from_key, port_key_prefix,
    ActiveChannelKey, OwnerAccountKey, ParamsKey, PortKey, PORT_MARKER,
};
use ibc_app_interchain_accounts_types::params::Params;
use ibc_app_interchain_accounts_types::{Capability, CapabilityName, LOG_TARGET, MODULE_ID_STR};
use ibc_core::host::types::identifiers::{ChannelId, PortId};
use ibc_core::primitives::prelude::*;
use ibc_core::primitives::Signer;
use tracing::{debug, warn};

use crate::context::{
    AccountContext, CapabilityContext, InterchainAccountExecutionContext,
    InterchainAccountValidationContext,
};
use crate::store::Store;

/// The interchain accounts keeper.
///
/// Persists the port markers, active channels, account addresses and params
/// in `S`, and delegates capability and account concerns to `C` and `A`.
#[derive(Clone, Debug)]
pub struct InterchainAccountKeeper<S, C, A> {
    store: S,
    capability_ctx: C,
    account_ctx: A,
    module_address: Vec<u8>,
}

impl<S, C, A> InterchainAccountKeeper<S, C, A>
where
    S: Store,
    C: CapabilityContext,
    A: AccountContext,
{
    /// Creates a keeper.
    ///
    /// Fails with [`InterchainAccountError::ModuleAccountNotSet`] if the
    /// account context knows no interchain accounts module account: no port
    /// could ever be served without it, so hosts should abort initialization.
    pub fn new(store: S, capability_ctx: C, account_ctx: A) -> Result<Self, InterchainAccountError> {
        let module_address = account_ctx.get_module_address(MODULE_ID_STR).ok_or_else(|| {
            InterchainAccountError::ModuleAccountNotSet {
                module: MODULE_ID_STR.to_string(),
            }
        })?;

        Ok(Self {
            store,
            capability_ctx,
            account_ctx,
            module_address,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn capability_ctx(&self) -> &C {
        &self.capability_ctx
    }

    pub fn capability_ctx_mut(&mut self) -> &mut C {
        &mut self.capability_ctx
    }

    pub fn account_ctx(&self) -> &A {
        &self.account_ctx
    }

    pub fn module_address(&self) -> &[u8] {
        &self.module_address
    }

    /// Returns true if the port marker of `port_id` is stored. Unlike
    /// [`InterchainAccountValidationContext::is_bound`], this survives the
    /// revocation of the port capability.
    pub fn has_port(&self, port_id: &PortId) -> bool {
        self.store.has(&Vec::<u8>::from(PortKey(port_id.clone())))
    }

    /// Lists the ports of every key under `key_prefix`.
    fn scan_ports(&self, key_prefix: Vec<u8>) -> impl Iterator<Item = PortId> + '_ {
        self.store
            .get_keys(&key_prefix)
            .into_iter()
            .filter_map(|key| {
                let port_id = parse_port_id_from_key(&key);
                if port_id.is_none() {
                    warn!(target: LOG_TARGET, key = %String::from_utf8_lossy(&key), "skipping unparsable port key");
                }
                port_id
            })
    }

    fn read_string(&self, key: Vec<u8>) -> Option<String> {
        let value = self.store.get(&key)?;

        match String::from_utf8(value) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(target: LOG_TARGET, key = %String::from_utf8_lossy(&key), "non UTF-8 value: {e}");
                None
            }
        }
    }
}

impl<S, C, A> InterchainAccountValidationContext for InterchainAccountKeeper<S, C, A>
where
    S: Store,
    C: CapabilityContext,
    A: AccountContext,
{
    fn is_bound(&self, port_id: &PortId) -> bool {
        self.capability_ctx
            .get_capability(&CapabilityName::port(port_id))
            .is_some()
    }

    fn get_all_ports(&self) -> impl Iterator<Item = PortId> + '_ {
        self.scan_ports(port_key_prefix())
    }

    fn authenticate_capability(&self, capability: &Capability, name: &CapabilityName) -> bool {
        self.capability_ctx.authenticate_capability(capability, name)
    }

    fn get_active_channel_id(&self, port_id: &PortId) -> Option<ChannelId> {
        let channel_id = self.read_string(ActiveChannelKey(port_id.clone()).into())?;

        match ChannelId::from_str(&channel_id) {
            Ok(channel_id) => Some(channel_id),
            Err(e) => {
                warn!(target: LOG_TARGET, %port_id, "invalid active channel `{channel_id}`: {e}");
                None
            }
        }
    }

    fn get_all_active_channels(&self) -> impl Iterator<Item = ActiveChannel> + '_ {
        self.scan_ports(active_channel_key_prefix())
            .filter_map(move |port_id| {
                self.get_active_channel_id(&port_id)
                    .map(|channel_id| ActiveChannel {
                        port_id,
                        channel_id,
                    })
            })
    }

    fn get_ica_address(&self, port_id: &PortId) -> Option<Signer> {
        self.read_string(OwnerAccountKey(port_id.clone()).into())
            .map(Signer::from)
    }

    fn get_all_ica_addresses(&self) -> impl Iterator<Item = RegisteredAccount> + '_ {
        self.scan_ports(owner_key_prefix()).filter_map(move |port_id| {
            self.get_ica_address(&port_id)
                .map(|account_address| RegisteredAccount {
                    port_id,
                    account_address,
                })
        })
    }

    fn get_params(&self) -> Result<Params, InterchainAccountError> {
        match self.store.get(&Vec::<u8>::from(ParamsKey)) {
            Some(raw) => serde_json::from_slice(&raw).map_err(|e| {
                InterchainAccountError::FailedToDecode {
                    description: format!("params: {e}"),
                }
            }),
            None => Ok(Params::default()),
        }
    }

    fn generate_ica_address(&self, counterparty_port_id: &PortId) -> Signer {
        self.account_ctx
            .derive_address(&self.module_address, counterparty_port_id)
    }
}

impl<S, C, A> InterchainAccountExecutionContext for InterchainAccountKeeper<S, C, A>
where
    S: Store,
    C: CapabilityContext,
    A: AccountContext,
{
    fn bind_port(&mut self, port_id: &PortId) -> Result<Capability, InterchainAccountError> {
        self.store
            .set(PortKey(port_id.clone()).into(), PORT_MARKER.to_vec())
            .map_err(InterchainAccountError::store)?;

        let capability = self.capability_ctx.bind_port(port_id)?;

        debug!(target: LOG_TARGET, %port_id, "bound port");

        Ok(capability)
    }

    fn claim_capability(
        &mut self,
        capability: Capability,
        name: CapabilityName,
    ) -> Result<(), InterchainAccountError> {
        Ok(self.capability_ctx.claim_capability(capability, name)?)
    }

    fn store_active_channel_id(
        &mut self,
        port_id: &PortId,
        channel_id: &ChannelId,
    ) -> Result<(), InterchainAccountError> {
        self.store
            .set(
                ActiveChannelKey(port_id.clone()).into(),
                channel_id.as_bytes().to_vec(),
            )
            .map_err(InterchainAccountError::store)?;

        debug!(target: LOG_TARGET, %port_id, %channel_id, "stored active channel");

        Ok(())
    }

    fn delete_active_channel_id(&mut self, port_id: &PortId) -> Result<(), InterchainAccountError> {
        let removed = self
            .store
            .delete(&Vec::<u8>::from(ActiveChannelKey(port_id.clone())))
            .map_err(InterchainAccountError::store)?;

        if removed.is_some() {
            debug!(target: LOG_TARGET, %port_id, "deleted active channel");
        }

        Ok(())
    }

    fn store_ica_address(
        &mut self,
        port_id: &PortId,
        address: Signer,
    ) -> Result<(), InterchainAccountError> {
        self.store
            .set(
                OwnerAccountKey(port_id.clone()).into(),
                address.as_ref().as_bytes().to_vec(),
            )
            .map_err(InterchainAccountError::store)?;

        debug!(target: LOG_TARGET, %port_id, %address, "stored interchain account address");

        Ok(())
    }

    fn store_params(&mut self, params: Params) -> Result<(), InterchainAccountError> {
        let raw = serde_json::to_vec(&params).map_err(|e| InterchainAccountError::Store {
            description: format!("failed to encode params: {e}"),
        })?;

        self.store
            .set(ParamsKey.into(), raw)
            .map_err(InterchainAccountError::store)?;

        Ok(())
    }
}
