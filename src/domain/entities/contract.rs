//! Contract specification entities.
//!
//! A `ContractSpec` is loaded once from a compiled artifact and never
//! mutated. Its bytecode is kept as hex text until linking time because
//! unresolved link placeholders are not valid hex.

use std::collections::BTreeSet;

use alloy_primitives::{Address, Bytes};

/// Total width of a link placeholder in hex characters.
///
/// The legacy format is `__` followed by the contract name (truncated to 36
/// characters) right-padded with `_` to exactly 40 characters - the width of
/// a hex-encoded address.
pub const PLACEHOLDER_LEN: usize = 40;

const PLACEHOLDER_NAME_LEN: usize = 36;

/// Compiled bytecode as hex text, possibly containing unresolved link
/// placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bytecode {
    hex: String,
}

impl Bytecode {
    /// Create from a hex string. A leading `0x` prefix is stripped.
    pub fn new(hex: impl Into<String>) -> Self {
        let hex: String = hex.into();
        let hex = hex.strip_prefix("0x").unwrap_or(&hex).to_string();
        Self { hex }
    }

    /// The placeholder symbol for a contract name. Truncation counts
    /// characters, never bytes, so multibyte names cannot split mid-char.
    pub fn placeholder(name: &str) -> String {
        let truncated: String = name.chars().take(PLACEHOLDER_NAME_LEN).collect();
        format!("__{truncated:_<38}")
    }

    /// Names of every placeholder embedded in this bytecode.
    ///
    /// Hex text never contains `_`, so any `__` run marks a placeholder.
    pub fn placeholders(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        let bytes = self.hex.as_bytes();
        let mut i = 0;
        while i + PLACEHOLDER_LEN <= bytes.len() {
            if bytes[i] == b'_' && bytes[i + 1] == b'_' {
                let symbol = &self.hex[i..i + PLACEHOLDER_LEN];
                let name = symbol[2..].trim_end_matches('_');
                if !name.is_empty() {
                    names.insert(name.to_string());
                }
                i += PLACEHOLDER_LEN;
            } else {
                i += 1;
            }
        }
        names
    }

    /// Replace every placeholder for `name` with the hex of `address`.
    pub fn link(&self, name: &str, address: Address) -> Bytecode {
        let symbol = Self::placeholder(name);
        let replacement = hex::encode(address.as_slice());
        Bytecode {
            hex: self.hex.replace(&symbol, &replacement),
        }
    }

    /// True when no placeholder remains.
    pub fn is_fully_linked(&self) -> bool {
        !self.hex.contains('_')
    }

    /// Decode to raw bytes. Fails if any placeholder remains or the hex is
    /// malformed.
    pub fn to_bytes(&self) -> Result<Bytes, hex::FromHexError> {
        hex::decode(&self.hex).map(Bytes::from)
    }

    pub fn as_str(&self) -> &str {
        &self.hex
    }
}

/// A contract to deploy: name, interface, bytecode, and the libraries it
/// must be linked against.
#[derive(Debug, Clone)]
pub struct ContractSpec {
    name: String,
    abi: serde_json::Value,
    bytecode: Bytecode,
    library_refs: BTreeSet<String>,
}

impl ContractSpec {
    /// Create a spec. Library references are scanned from the bytecode's
    /// placeholders.
    pub fn new(name: impl Into<String>, abi: serde_json::Value, bytecode: Bytecode) -> Self {
        let library_refs = bytecode.placeholders();
        Self {
            name: name.into(),
            abi,
            bytecode,
            library_refs,
        }
    }

    /// Merge explicitly declared library references (from the manifest) with
    /// the scanned ones.
    pub fn with_declared_libraries<I, S>(mut self, libraries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.library_refs
            .extend(libraries.into_iter().map(Into::into));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abi(&self) -> &serde_json::Value {
        &self.abi
    }

    pub fn bytecode(&self) -> &Bytecode {
        &self.bytecode
    }

    pub fn library_refs(&self) -> &BTreeSet<String> {
        &self.library_refs
    }
}
