//! Chain identifier parsing
//!
//! A chain identifier has the form `<name>_<eip155>-<epoch>`, e.g. `evmos_9001-2`.
//! The EIP155 number is the EVM chain ID used for replay protection, the epoch is
//! bumped on every chain upgrade.

use crate::{
    constants::{
        EIP155_SEPARATOR, EPOCH_SEPARATOR, MAX_CHAIN_ID_LEN, NAME_PATTERN, NUMBER_PATTERN,
    },
    error::{ChainIdError, InvalidReason},
};

use alloy_primitives::U256;
use regex::Regex;
use std::{fmt, str::FromStr, sync::LazyLock};

static CHAIN_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "^({NAME_PATTERN}){EIP155_SEPARATOR}({NUMBER_PATTERN}){EPOCH_SEPARATOR}({NUMBER_PATTERN})$"
    ))
    .expect("chain-id pattern is valid")
});

/// Returns `false` if the given chain identifier is incorrectly formatted.
///
/// Unlike [`parse_chain_id`], surrounding whitespace is not trimmed.
pub fn is_valid_chain_id(chain_id: &str) -> bool {
    if chain_id.len() > MAX_CHAIN_ID_LEN {
        return false;
    }

    CHAIN_ID_REGEX.is_match(chain_id)
}

/// Parses a chain identifier and returns its epoch.
///
/// Leading and trailing whitespace is ignored. Use [`ChainId::parse`] when the
/// EIP155 number is needed as well.
pub fn parse_chain_id(chain_id: &str) -> Result<U256, ChainIdError> {
    ChainId::parse(chain_id).map(|id| id.epoch())
}

/// A parsed `<name>_<eip155>-<epoch>` chain identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChainId {
    name: String,
    eip155: U256,
    epoch: U256,
}

impl ChainId {
    /// Parse a chain identifier, ignoring surrounding whitespace.
    pub fn parse(chain_id: &str) -> Result<Self, ChainIdError> {
        let chain_id = chain_id.trim();
        if chain_id.len() > MAX_CHAIN_ID_LEN {
            return Err(reject(chain_id, InvalidReason::TooLong));
        }

        let Some(captures) = CHAIN_ID_REGEX.captures(chain_id) else {
            return Err(reject(chain_id, InvalidReason::Malformed));
        };
        let (Some(name), Some(eip155), Some(epoch)) =
            (captures.get(1), captures.get(2), captures.get(3))
        else {
            return Err(reject(chain_id, InvalidReason::Malformed));
        };
        if name.is_empty() || eip155.is_empty() || epoch.is_empty() {
            return Err(reject(chain_id, InvalidReason::Malformed));
        }

        Ok(Self {
            name: name.as_str().to_string(),
            eip155: parse_decimal(chain_id, eip155.as_str())?,
            epoch: parse_decimal(chain_id, epoch.as_str())?,
        })
    }

    /// Returns the human readable chain name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the EIP155 number, i.e. the EVM chain ID.
    pub const fn eip155(&self) -> U256 {
        self.eip155
    }

    /// Returns the epoch.
    pub const fn epoch(&self) -> U256 {
        self.epoch
    }
}

impl FromStr for ChainId {
    type Err = ChainIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{EIP155_SEPARATOR}{}{EPOCH_SEPARATOR}{}", self.name, self.eip155, self.epoch)
    }
}

fn reject(chain_id: &str, reason: InvalidReason) -> ChainIdError {
    tracing::debug!(target: "chain_id", chain_id, %reason, "Rejected chain identifier");
    ChainIdError::invalid(chain_id, reason)
}

fn parse_decimal(chain_id: &str, digits: &str) -> Result<U256, ChainIdError> {
    U256::from_str_radix(digits, 10).map_err(|_| reject(chain_id, InvalidReason::NonDecimal))
}
