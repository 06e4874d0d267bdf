use alloc::collections::{BTreeMap, BTreeSet};

use ibc_app_interchain_accounts::context::CapabilityContext;
use ibc_app_interchain_accounts::types::error::CapabilityError;
use ibc_app_interchain_accounts::types::{Capability, CapabilityName};
use ibc_core::host::types::identifiers::{ChannelId, PortId};
use tracing::trace;

/// A mock of the host's capability keeper.
///
/// Keeps apart the capabilities issued by the core IBC handlers (port binding,
/// channel handshakes) and the ones the interchain accounts module claimed,
/// mirroring the scoped keepers of a Cosmos SDK chain.
#[derive(Clone, Debug, Default)]
pub struct MockCapabilityKeeper {
    next_index: u64,
    minted: BTreeSet<Capability>,
    issued: BTreeMap<CapabilityName, Capability>,
    claimed: BTreeMap<CapabilityName, Capability>,
}

impl MockCapabilityKeeper {
    fn mint(&mut self, name: CapabilityName) -> Capability {
        self.next_index += 1;
        let capability = Capability::new(self.next_index);

        trace!("minted capability {} for {name}", capability.index());

        self.minted.insert(capability.clone());
        self.issued.insert(name, capability.clone());
        capability
    }

    /// Issues the capability the channel handshake hands over to the
    /// application for `channel_id` on `port_id`.
    pub fn new_channel_capability(&mut self, port_id: &PortId, channel_id: &ChannelId) -> Capability {
        self.mint(CapabilityName::channel(port_id, channel_id))
    }

    /// Revokes every capability known under `name`, issued or claimed.
    pub fn revoke(&mut self, name: &CapabilityName) {
        for capability in [self.issued.remove(name), self.claimed.remove(name)]
            .into_iter()
            .flatten()
        {
            self.minted.remove(&capability);
        }
    }

    /// Returns true if the module claimed a capability under `name`.
    pub fn is_claimed(&self, name: &CapabilityName) -> bool {
        self.claimed.contains_key(name)
    }
}

impl CapabilityContext for MockCapabilityKeeper {
    fn bind_port(&mut self, port_id: &PortId) -> Result<Capability, CapabilityError> {
        let name = CapabilityName::port(port_id);

        // binding a port twice hands out the live capability again
        match self.issued.get(&name) {
            Some(capability) => Ok(capability.clone()),
            None => Ok(self.mint(name)),
        }
    }

    fn get_capability(&self, name: &CapabilityName) -> Option<Capability> {
        self.claimed
            .get(name)
            .or_else(|| self.issued.get(name))
            .cloned()
    }

    fn authenticate_capability(&self, capability: &Capability, name: &CapabilityName) -> bool {
        self.get_capability(name).as_ref() == Some(capability)
    }

    fn claim_capability(
        &mut self,
        capability: Capability,
        name: CapabilityName,
    ) -> Result<(), CapabilityError> {
        if !self.minted.contains(&capability) {
            return Err(CapabilityError::NotFound { name });
        }

        if self.claimed.contains_key(&name) {
            return Err(CapabilityError::AlreadyClaimed { name });
        }

        trace!("claimed capability {} as {name}", capability.index());

        self.claimed.insert(name, capability);
        Ok(())
    }
}
