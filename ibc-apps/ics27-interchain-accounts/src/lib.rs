//! Implementation of the Interchain Accounts (ICS-27) authority logic.
//!
//! The application decides which ports it has claimed, which channel is
//! allowed to act for each port, which counterparty account each port
//! controls, and which version two chains settle on while opening a channel.
//!
//! Hosts plug in through the [`context`] traits. [`keeper::InterchainAccountKeeper`]
//! implements them on top of any ordered key-value [`store::Store`] plus the
//! host's capability and account collaborators.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_casts, trivial_numeric_casts, rust_2018_idioms)]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod context;
pub mod genesis;
pub mod handler;
pub mod keeper;
pub mod module;
pub mod query;
pub mod store;

/// Re-exports the implementation of the IBC interchain accounts data
/// structures.
pub mod types {
    #[doc(inline)]
    pub use ibc_app_interchain_accounts_types::*;
}
