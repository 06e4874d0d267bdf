//! Defines all interchain accounts event types
use ibc_core_host_types::identifiers::{ChannelId, PortId};
use ibc_core_router_types::event::ModuleEvent;
use ibc_primitives::prelude::*;
use ibc_primitives::Signer;

use crate::MODULE_ID_STR;

const EVENT_TYPE_CHANNEL_ACTIVATED: &str = "interchain_account_channel_activated";
const EVENT_TYPE_CHANNEL_DEACTIVATED: &str = "interchain_account_channel_deactivated";

/// Contains all events variants that can be emitted from the interchain
/// accounts application
pub enum Event {
    ChannelActivated(ChannelActivatedEvent),
    ChannelDeactivated(ChannelDeactivatedEvent),
}

/// Event emitted once a channel becomes the active channel of a port
pub struct ChannelActivatedEvent {
    pub port_id: PortId,
    pub channel_id: ChannelId,
    pub account_address: Signer,
}

impl From<ChannelActivatedEvent> for ModuleEvent {
    fn from(ev: ChannelActivatedEvent) -> Self {
        let ChannelActivatedEvent {
            port_id,
            channel_id,
            account_address,
        } = ev;
        Self {
            kind: EVENT_TYPE_CHANNEL_ACTIVATED.to_string(),
            attributes: vec![
                ("module", MODULE_ID_STR).into(),
                ("port_id", port_id).into(),
                ("channel_id", channel_id).into(),
                ("account_address", account_address).into(),
            ],
        }
    }
}

/// Event emitted when a closed channel stops being the active channel of a port
pub struct ChannelDeactivatedEvent {
    pub port_id: PortId,
    pub channel_id: ChannelId,
}

impl From<ChannelDeactivatedEvent> for ModuleEvent {
    fn from(ev: ChannelDeactivatedEvent) -> Self {
        let ChannelDeactivatedEvent {
            port_id,
            channel_id,
        } = ev;
        Self {
            kind: EVENT_TYPE_CHANNEL_DEACTIVATED.to_string(),
            attributes: vec![
                ("module", MODULE_ID_STR).into(),
                ("port_id", port_id).into(),
                ("channel_id", channel_id).into(),
            ],
        }
    }
}

impl From<Event> for ModuleEvent {
    fn from(ev: Event) -> Self {
        match ev {
            Event::ChannelActivated(ev) => ev.into(),
            Event::ChannelDeactivated(ev) => ev.into(),
        }
    }
}
