//! Network identity value object.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric network identifier, with names for the well-known public networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkId(u64);

impl NetworkId {
    /// Default local development network.
    pub const DEVELOPMENT: NetworkId = NetworkId(1337);

    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Human-readable network name. Unknown ids are treated as development
    /// networks.
    pub fn name(&self) -> &'static str {
        match self.0 {
            1 => "Main",
            3 => "Ropsten",
            4 => "Rinkeby",
            42 => "Kovan",
            _ => "development",
        }
    }
}

impl Default for NetworkId {
    fn default() -> Self {
        Self::DEVELOPMENT
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NetworkId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}
