use crate::constants::MAX_CHAIN_ID_LEN;
use alloy_primitives::U256;

/// Errors returned when parsing or checking chain identifiers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainIdError {
    /// The chain identifier string is malformed
    #[error("invalid chain-id '{chain_id}': {reason}")]
    InvalidChainId {
        /// The offending chain identifier, after trimming
        chain_id: String,
        /// Why the identifier was rejected
        reason: InvalidReason,
    },

    /// The EVM chain ID is neither the configured testnet nor mainnet ID
    #[error("EVM only supports chain identifiers ({testnet} or {mainnet}), got {chain_id}")]
    UnsupportedEvmChainId {
        /// The rejected EVM chain ID
        chain_id: U256,
        /// Configured testnet EVM chain ID
        testnet: u64,
        /// Configured mainnet EVM chain ID
        mainnet: u64,
    },
}

impl ChainIdError {
    pub(crate) fn invalid(chain_id: &str, reason: InvalidReason) -> Self {
        Self::InvalidChainId { chain_id: chain_id.to_string(), reason }
    }

    /// Returns `true` if this is a recoverable parse failure.
    pub const fn is_invalid_chain_id(&self) -> bool {
        matches!(self, Self::InvalidChainId { .. })
    }
}

/// Reason a chain identifier string was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum InvalidReason {
    /// Longer than [`MAX_CHAIN_ID_LEN`] bytes
    #[error("cannot exceed {} chars", MAX_CHAIN_ID_LEN)]
    TooLong,
    /// Does not match `<name>_<eip155>-<epoch>`
    #[error("expected format <name>_<eip155>-<epoch>")]
    Malformed,
    /// A numeric component is not a base-10 integer
    #[error("epoch must be base-10 integer format")]
    NonDecimal,
}
