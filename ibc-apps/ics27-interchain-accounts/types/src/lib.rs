//! Implementation of the IBC [interchain accounts](https://github.com/cosmos/ibc/blob/main/spec/app/ics-027-interchain-accounts/README.md)
//! (ICS-27) data structures.
//!
//! Naming follows the rest of ibc-rs:
//! + "chain A" runs as the controller chain of the interchain account,
//! + "chain B" runs as the host chain of the interchain account.
//!
//! In variable names, `_a` means "belongs to chain A" and `on_a` means
//! "stored on chain A".
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_casts, trivial_numeric_casts, rust_2018_idioms)]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod address;
mod capability;
mod port;
mod version;

pub use address::*;
pub use capability::*;
pub use port::*;
pub use version::*;
pub mod error;
pub mod events;
pub mod genesis;
pub mod keys;
pub mod params;

/// Module identifier for the ICS27 application.
pub const MODULE_ID_STR: &str = "interchainaccounts";

/// Target under which the application emits its `tracing` records.
pub const LOG_TARGET: &str = "x/ibc-interchainaccounts";

/// ICS27 application version prefix. It is the only version a chain accepts
/// during negotiation.
pub const VERSION_PREFIX: &str = "ics27-1";

/// Separates the version prefix from the account address in a complete
/// application version string.
pub const VERSION_DELIMITER: &str = ".";
