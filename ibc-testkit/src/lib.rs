//! Test utilities for the interchain accounts application: in-memory stores,
//! mock host keepers and ready-made fixtures.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    rust_2018_idioms
)]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod fixtures;
pub mod store;
pub mod testapp;
