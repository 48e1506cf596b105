//! Process-wide EVM chain ID configuration
//!
//! Thin wrappers around a global [`EvmChainIds`], for callers that configure the
//! supported networks once at startup and check them from anywhere afterwards.
//! Prefer passing an [`EvmChainIds`] value where possible.

use crate::config::EvmChainIds;

use alloy_primitives::U256;
use std::sync::{PoisonError, RwLock};

static SUPPORTED_CHAIN_IDS: RwLock<EvmChainIds> = RwLock::new(EvmChainIds::DEFAULT);

/// Overwrite the process-wide testnet and mainnet EVM chain IDs.
///
/// The values are not validated. Call once at startup, before any checks run.
pub fn configure_supported_chain_ids(testnet: u64, mainnet: u64) {
    let ids = EvmChainIds::new(testnet, mainnet);
    *SUPPORTED_CHAIN_IDS.write().unwrap_or_else(PoisonError::into_inner) = ids;
    tracing::info!(target: "chain_id", testnet, mainnet, "Configured supported EVM chain IDs");
}

/// Get the process-wide EVM chain IDs.
pub fn supported_chain_ids() -> EvmChainIds {
    *SUPPORTED_CHAIN_IDS.read().unwrap_or_else(PoisonError::into_inner)
}

/// Panics unless `chain_id` is one of the process-wide EVM chain IDs.
pub fn assert_supported_evm_chain_id(chain_id: U256) {
    supported_chain_ids().assert_supported_evm_chain_id(chain_id);
}

/// Returns whether the chain identifier belongs to the process-wide mainnet.
///
/// Panics if the chain identifier is malformed.
pub fn is_mainnet(chain_id: &str) -> bool {
    supported_chain_ids().is_mainnet(chain_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    /// Serializes tests that touch the global configuration
    static LOCK: Mutex<()> = Mutex::new(());

    fn lock_defaults() -> MutexGuard<'static, ()> {
        let guard = LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        configure_supported_chain_ids(9000, 9001);
        guard
    }

    #[test]
    fn test_default_configuration() {
        let _guard = lock_defaults();
        assert_eq!(supported_chain_ids(), EvmChainIds::DEFAULT);
        assert_supported_evm_chain_id(U256::from(9001));
        assert!(is_mainnet("evmos_9001-1"));
        assert!(!is_mainnet("evmos_9000-1"));
    }

    #[test]
    #[should_panic(expected = "EVM only supports chain identifiers")]
    fn test_assert_unsupported_panics() {
        let _guard = lock_defaults();
        assert_supported_evm_chain_id(U256::from(1));
    }

    #[test]
    #[should_panic(expected = "invalid chain-id")]
    fn test_is_mainnet_invalid_panics() {
        let _guard = lock_defaults();
        is_mainnet("not-a-valid-id");
    }

    #[test]
    fn test_configure_supported_chain_ids() {
        let _guard = lock_defaults();

        configure_supported_chain_ids(1, 2);
        assert_eq!(supported_chain_ids(), EvmChainIds::new(1, 2));
        assert_supported_evm_chain_id(U256::from(1));
        assert!(is_mainnet("evmos_2-1"));
        assert!(!is_mainnet("evmos_9001-1"));

        configure_supported_chain_ids(9000, 9001);
        assert_eq!(supported_chain_ids(), EvmChainIds::DEFAULT);
    }
}
