//! Store key layout of the interchain accounts application.
//!
//! Every key is a UTF-8 path `{prefix}/{port_id}`. Port identifiers cannot
//! contain `/`, so the port is always the second path segment.
use core::str::FromStr;

use derive_more::Display;
use ibc_core_host_types::identifiers::PortId;
use ibc_primitives::prelude::*;

pub const PORT_KEY_PREFIX: &str = "port";
pub const ACTIVE_CHANNEL_KEY_PREFIX: &str = "active_channel";
pub const OWNER_KEY_PREFIX: &str = "owner_account";
pub const PARAMS_KEY: &str = "params";

/// Value stored under a [`PortKey`] to mark the port as claimed.
pub const PORT_MARKER: &[u8] = &[0x01];

/// Key marking `port_id` as claimed by the module.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{PORT_KEY_PREFIX}/{_0}")]
pub struct PortKey(pub PortId);

/// Key of the channel currently active for `port_id`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{ACTIVE_CHANNEL_KEY_PREFIX}/{_0}")]
pub struct ActiveChannelKey(pub PortId);

/// Key of the interchain account address associated with `port_id`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{OWNER_KEY_PREFIX}/{_0}")]
pub struct OwnerAccountKey(pub PortId);

/// Key of the module parameters.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{PARAMS_KEY}")]
pub struct ParamsKey;

macro_rules! impl_into_key_bytes {
    ($($key:ty),+) => {
        $(
            impl From<$key> for Vec<u8> {
                fn from(key: $key) -> Self {
                    key.to_string().into_bytes()
                }
            }
        )+
    };
}

impl_into_key_bytes!(PortKey, ActiveChannelKey, OwnerAccountKey, ParamsKey);

/// Prefix shared by all the port keys, used to scan for bound ports.
pub fn port_key_prefix() -> Vec<u8> {
    format!("{PORT_KEY_PREFIX}/").into_bytes()
}

/// Prefix shared by all the active channel keys.
pub fn active_channel_key_prefix() -> Vec<u8> {
    format!("{ACTIVE_CHANNEL_KEY_PREFIX}/").into_bytes()
}

/// Prefix shared by all the interchain account address keys.
pub fn owner_key_prefix() -> Vec<u8> {
    format!("{OWNER_KEY_PREFIX}/").into_bytes()
}

/// Parses the port identifier out of a raw key of the form `{prefix}/{port_id}`.
///
/// Returns `None` if the key is not UTF-8, has no second segment, or the
/// segment is not a valid port identifier.
pub fn parse_port_id_from_key(key: &[u8]) -> Option<PortId> {
    let key = core::str::from_utf8(key).ok()?;
    let segment = key.split('/').nth(1)?;

    PortId::from_str(segment).ok()
}
