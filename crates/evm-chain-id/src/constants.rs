/// Maximum length of a chain identifier, in bytes
pub const MAX_CHAIN_ID_LEN: usize = 48;

/// Default EVM chain ID of the testnet
pub const DEFAULT_TESTNET_EVM_CHAIN_ID: u64 = 9000;

/// Default EVM chain ID of the mainnet
pub const DEFAULT_MAINNET_EVM_CHAIN_ID: u64 = 9001;

/// Human readable chain name: one or more lowercase ASCII letters
pub(crate) const NAME_PATTERN: &str = "[a-z]+";

/// Decimal integer without a leading zero
pub(crate) const NUMBER_PATTERN: &str = "[1-9][0-9]*";

/// Separator between the chain name and the EIP155 number
pub(crate) const EIP155_SEPARATOR: char = '_';

/// Separator between the EIP155 number and the epoch
pub(crate) const EPOCH_SEPARATOR: char = '-';

/// Environment variable overriding the testnet EVM chain ID
pub(crate) const TESTNET_CHAIN_ID_ENV: &str = "EVM_TESTNET_CHAIN_ID";

/// Environment variable overriding the mainnet EVM chain ID
pub(crate) const MAINNET_CHAIN_ID_ENV: &str = "EVM_MAINNET_CHAIN_ID";
