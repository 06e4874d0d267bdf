//! Implements the processing logic shared by the module callbacks.
mod activate_channel;
mod authenticate_channel;
mod negotiate_app_version;
mod register_ica_address;

pub use activate_channel::*;
pub use authenticate_channel::*;
pub use negotiate_app_version::*;
pub use register_ica_address::*;
