use core::fmt::{Display, Error as FmtError, Formatter};

use ibc_core_host_types::identifiers::{ChannelId, PortId};
use ibc_core_host_types::path::PortPath;
use ibc_primitives::prelude::*;

/// Prefix of the names under which channel capabilities are claimed.
const CHANNEL_CAPABILITY_PREFIX: &str = "capabilities";

/// An opaque, unforgeable authorization handle.
///
/// Only the capability keeper hands these out; the interchain accounts
/// application never mints one, it only asks the keeper to claim or
/// authenticate them.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Capability {
    index: u64,
}

impl Capability {
    /// Meant to be called by capability keepers only.
    pub fn new(index: u64) -> Self {
        Self { index }
    }

    pub fn index(&self) -> u64 {
        self.index
    }
}

/// Resource name a [`Capability`] is owned under.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CapabilityName(String);

impl CapabilityName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Name of the capability over a port: `ports/{port_id}`.
    pub fn port(port_id: &PortId) -> Self {
        PortPath(port_id.clone()).into()
    }

    /// Name of the capability over a channel:
    /// `capabilities/ports/{port_id}/channels/{channel_id}`.
    pub fn channel(port_id: &PortId, channel_id: &ChannelId) -> Self {
        Self(format!(
            "{CHANNEL_CAPABILITY_PREFIX}/{}/channels/{channel_id}",
            PortPath(port_id.clone())
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PortPath> for CapabilityName {
    fn from(path: PortPath) -> Self {
        Self(path.to_string())
    }
}

impl Display for CapabilityName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CapabilityName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
