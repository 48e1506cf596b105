//! Supported EVM chain IDs

use crate::{
    chain_id::ChainId,
    constants::{
        DEFAULT_MAINNET_EVM_CHAIN_ID, DEFAULT_TESTNET_EVM_CHAIN_ID, MAINNET_CHAIN_ID_ENV,
        TESTNET_CHAIN_ID_ENV,
    },
    error::ChainIdError,
};

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::env;

/// The pair of EVM chain IDs the node accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EvmChainIds {
    /// Testnet EVM chain ID
    pub testnet: u64,
    /// Mainnet EVM chain ID
    pub mainnet: u64,
}

impl Default for EvmChainIds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl EvmChainIds {
    /// Testnet 9000, mainnet 9001
    pub const DEFAULT: Self = Self::new(DEFAULT_TESTNET_EVM_CHAIN_ID, DEFAULT_MAINNET_EVM_CHAIN_ID);

    /// Create a new pair. The values are not validated.
    pub const fn new(testnet: u64, mainnet: u64) -> Self {
        Self { testnet, mainnet }
    }

    /// Load from environment variables, falling back to the defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using the given variable lookup, falling back to the defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, default: u64| {
            let Some(value) = lookup(key) else { return default };
            match value.trim().parse() {
                Ok(id) => id,
                Err(e) => {
                    tracing::warn!(
                        target: "chain_id",
                        key,
                        value = %value,
                        error = %e,
                        "Ignoring unparseable EVM chain ID override"
                    );
                    default
                }
            }
        };

        Self {
            testnet: read(TESTNET_CHAIN_ID_ENV, DEFAULT_TESTNET_EVM_CHAIN_ID),
            mainnet: read(MAINNET_CHAIN_ID_ENV, DEFAULT_MAINNET_EVM_CHAIN_ID),
        }
    }

    /// Returns `true` if `chain_id` is the testnet or mainnet EVM chain ID.
    pub fn is_supported(&self, chain_id: U256) -> bool {
        chain_id == U256::from(self.testnet) || chain_id == U256::from(self.mainnet)
    }

    /// Check that `chain_id` is the testnet or mainnet EVM chain ID.
    pub fn check_evm_chain_id(&self, chain_id: U256) -> Result<(), ChainIdError> {
        if self.is_supported(chain_id) {
            Ok(())
        } else {
            Err(ChainIdError::UnsupportedEvmChainId {
                chain_id,
                testnet: self.testnet,
                mainnet: self.mainnet,
            })
        }
    }

    /// Panics unless `chain_id` is the testnet or mainnet EVM chain ID.
    ///
    /// Use [`Self::check_evm_chain_id`] to handle the error instead.
    pub fn assert_supported_evm_chain_id(&self, chain_id: U256) {
        if let Err(e) = self.check_evm_chain_id(chain_id) {
            fatal(&e)
        }
    }

    /// Returns whether the chain identifier belongs to the mainnet.
    ///
    /// The EVM chain ID of a chain identifier is its EIP155 number, so
    /// `evmos_9001-1` is mainnet under the default configuration.
    pub fn try_is_mainnet(&self, chain_id: &str) -> Result<bool, ChainIdError> {
        let chain_id = ChainId::parse(chain_id)?;
        Ok(chain_id.eip155() == U256::from(self.mainnet))
    }

    /// Same as [`Self::try_is_mainnet`], but panics if the identifier is malformed.
    pub fn is_mainnet(&self, chain_id: &str) -> bool {
        self.try_is_mainnet(chain_id).unwrap_or_else(|e| fatal(&e))
    }
}

#[cold]
#[track_caller]
fn fatal(err: &ChainIdError) -> ! {
    tracing::error!(target: "chain_id", error = %err, "Unsupported chain configuration");
    panic!("{err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_chain_ids() {
        let ids = EvmChainIds::default();
        assert_eq!(ids.testnet, 9000);
        assert_eq!(ids.mainnet, 9001);
        assert_eq!(ids, EvmChainIds::DEFAULT);
    }

    #[test]
    fn test_check_evm_chain_id() {
        let ids = EvmChainIds::default();
        assert!(ids.check_evm_chain_id(U256::from(9000)).is_ok());
        assert!(ids.check_evm_chain_id(U256::from(9001)).is_ok());
        assert_eq!(
            ids.check_evm_chain_id(U256::from(1)),
            Err(ChainIdError::UnsupportedEvmChainId {
                chain_id: U256::from(1),
                testnet: 9000,
                mainnet: 9001,
            })
        );
        assert!(!ids.is_supported(U256::MAX));
    }

    #[test]
    fn test_assert_supported_evm_chain_id() {
        EvmChainIds::default().assert_supported_evm_chain_id(U256::from(9001));
        EvmChainIds::default().assert_supported_evm_chain_id(U256::from(9000));
    }

    #[test]
    #[should_panic(expected = "EVM only supports chain identifiers (9000 or 9001)")]
    fn test_assert_unsupported_evm_chain_id() {
        EvmChainIds::default().assert_supported_evm_chain_id(U256::from(1));
    }

    #[test]
    fn test_custom_chain_ids() {
        let ids = EvmChainIds::new(1, 2);
        ids.assert_supported_evm_chain_id(U256::from(2));
        assert!(ids.check_evm_chain_id(U256::from(9001)).is_err());
        assert!(ids.is_mainnet("evmos_2-1"));
        assert!(!ids.is_mainnet("evmos_9001-1"));
    }

    #[test]
    fn test_is_mainnet() {
        let ids = EvmChainIds::default();
        assert!(ids.is_mainnet("evmos_9001-1"));
        assert!(ids.is_mainnet(" evmos_9001-3 "));
        assert!(!ids.is_mainnet("evmos_9000-1"));
        assert!(!ids.is_mainnet("evmos_1-9001"));
    }

    #[test]
    fn test_try_is_mainnet_invalid() {
        let err = EvmChainIds::default().try_is_mainnet("not-a-valid-id").unwrap_err();
        assert!(err.is_invalid_chain_id());
    }

    #[test]
    #[should_panic(expected = "invalid chain-id 'not-a-valid-id'")]
    fn test_is_mainnet_invalid_panics() {
        EvmChainIds::default().is_mainnet("not-a-valid-id");
    }

    #[test]
    fn test_from_lookup() {
        let vars = HashMap::from([
            (TESTNET_CHAIN_ID_ENV, "7000".to_string()),
            (MAINNET_CHAIN_ID_ENV, " 7001 ".to_string()),
        ]);
        let ids = EvmChainIds::from_lookup(|key| vars.get(key).cloned());
        assert_eq!(ids, EvmChainIds::new(7000, 7001));
    }

    #[test]
    fn test_from_lookup_fallback() {
        let ids = EvmChainIds::from_lookup(|_| None);
        assert_eq!(ids, EvmChainIds::DEFAULT);

        let vars = HashMap::from([(MAINNET_CHAIN_ID_ENV, "mainnet".to_string())]);
        let ids = EvmChainIds::from_lookup(|key| vars.get(key).cloned());
        assert_eq!(ids, EvmChainIds::DEFAULT);
    }

    #[test]
    fn test_deserialize_defaults() {
        let ids: EvmChainIds = serde_json::from_str(r#"{"mainnet": 42}"#).unwrap();
        assert_eq!(ids, EvmChainIds::new(9000, 42));

        let ids: EvmChainIds = serde_json::from_str("{}").unwrap();
        assert_eq!(ids, EvmChainIds::DEFAULT);
    }
}
