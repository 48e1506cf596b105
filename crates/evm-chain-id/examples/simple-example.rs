//! Simple example: Using evm-chain-id
//!
//! Run with:
//! ```bash
//! EVM_MAINNET_CHAIN_ID=9001 cargo run --example simple-example -- evmos_9001-2
//! ```

use evm_chain_id::{ChainId, EvmChainIds, configure_supported_chain_ids, is_mainnet};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("chain_id=debug".parse().unwrap()))
        .init();

    // Load the supported networks once at startup
    let ids = EvmChainIds::from_env();
    configure_supported_chain_ids(ids.testnet, ids.mainnet);
    println!("Supported EVM chain IDs: testnet {}, mainnet {}", ids.testnet, ids.mainnet);

    let chain_id = std::env::args().nth(1).unwrap_or_else(|| "evmos_9001-1".to_string());

    match chain_id.parse::<ChainId>() {
        Ok(parsed) => {
            println!("Chain name: {}", parsed.name());
            println!("EVM chain ID: {}", parsed.eip155());
            println!("Epoch: {}", parsed.epoch());

            if let Err(e) = ids.check_evm_chain_id(parsed.eip155()) {
                eprintln!("{e}");
                return;
            }
            println!("Mainnet: {}", is_mainnet(&chain_id));
        }
        Err(e) => eprintln!("{e}"),
    }
}
