//! Cosmos EVM chain identifier parsing
//!
//! This crate validates `<name>_<eip155>-<epoch>` chain identifiers (e.g. `evmos_9001-2`)
//! and checks EVM chain IDs against the configured testnet and mainnet.

mod chain_id;
mod config;
mod constants;
mod error;
mod global;

pub use chain_id::{ChainId, is_valid_chain_id, parse_chain_id};
pub use config::EvmChainIds;
pub use constants::{DEFAULT_MAINNET_EVM_CHAIN_ID, DEFAULT_TESTNET_EVM_CHAIN_ID, MAX_CHAIN_ID_LEN};
pub use error::{ChainIdError, InvalidReason};
pub use global::{
    assert_supported_evm_chain_id, configure_supported_chain_ids, is_mainnet, supported_chain_ids,
};
