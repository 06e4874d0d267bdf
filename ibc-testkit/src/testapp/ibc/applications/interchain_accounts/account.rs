use ibc_app_interchain_accounts::context::AccountContext;
use ibc_app_interchain_accounts::types::{generate_address, MODULE_ID_STR};
use ibc_core::host::types::identifiers::PortId;
use ibc_core::primitives::prelude::*;
use ibc_core::primitives::Signer;
use sha2::{Digest, Sha256};
use subtle_encoding::bech32;

/// Human readable part of the addresses handed out by [`MockAccountKeeper`].
pub const ACCOUNT_PREFIX: &str = "cosmos";

/// Returns the address of a Cosmos SDK module account: the first 20 bytes of
/// the SHA-256 hash of the module name.
pub fn module_address(module: &str) -> Vec<u8> {
    let mut hash = Sha256::digest(module.as_bytes()).to_vec();
    hash.truncate(20);
    hash
}

/// A mock of the host's account keeper, deriving bech32 addresses.
#[derive(Clone, Debug)]
pub struct MockAccountKeeper {
    account_prefix: String,
    module_address: Option<Vec<u8>>,
}

impl MockAccountKeeper {
    pub fn new(account_prefix: impl Into<String>, module_address: Option<Vec<u8>>) -> Self {
        Self {
            account_prefix: account_prefix.into(),
            module_address,
        }
    }

    pub fn account_prefix(&self) -> &str {
        &self.account_prefix
    }
}

impl Default for MockAccountKeeper {
    fn default() -> Self {
        Self::new(ACCOUNT_PREFIX, Some(module_address(MODULE_ID_STR)))
    }
}

impl AccountContext for MockAccountKeeper {
    fn get_module_address(&self, module: &str) -> Option<Vec<u8>> {
        if module != MODULE_ID_STR {
            return None;
        }

        self.module_address.clone()
    }

    fn derive_address(&self, base_address: &[u8], seed: &PortId) -> Signer {
        bech32::encode(&self.account_prefix, generate_address(base_address, seed)).into()
    }
}
