//! In-process development chain.
//!
//! Implements the ChainClient port without any network: addresses are
//! derived deterministically from (network, nonce, bytecode), so a given
//! deployment sequence always lands on the same addresses. Used for local
//! development runs and the integration test suite; real RPC transport is
//! an external concern.
//!
//! Bytecode whose first byte is `0xfe` (the designated invalid opcode) is
//! accepted on submit but reverts on confirmation, which gives dev runs a
//! way to exercise failure paths.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use alloy_primitives::{keccak256, Address, Bytes, B256};

use crate::domain::entities::NetworkId;
use crate::domain::ports::{ChainClient, ChainError, ChainResult};

const INVALID_OPCODE: u8 = 0xfe;

/// Deterministic in-process chain client.
#[derive(Debug)]
pub struct DevChainClient {
    network: NetworkId,
    nonce: Cell<u64>,
    pending: RefCell<BTreeMap<B256, PendingDeploy>>,
}

#[derive(Debug, Clone)]
struct PendingDeploy {
    address: Address,
    reverts: bool,
}

impl DevChainClient {
    pub fn new(network: NetworkId) -> Self {
        Self {
            network,
            nonce: Cell::new(0),
            pending: RefCell::new(BTreeMap::new()),
        }
    }

    /// Number of submissions so far
    pub fn submissions(&self) -> u64 {
        self.nonce.get()
    }

    fn derive(&self, nonce: u64, bytecode: &Bytes) -> (B256, Address) {
        let mut seed = Vec::with_capacity(16 + bytecode.len());
        seed.extend_from_slice(&self.network.value().to_be_bytes());
        seed.extend_from_slice(&nonce.to_be_bytes());
        seed.extend_from_slice(bytecode);
        let tx = keccak256(&seed);
        let address = Address::from_slice(&keccak256(tx)[12..]);
        (tx, address)
    }
}

impl ChainClient for DevChainClient {
    fn network(&self) -> NetworkId {
        self.network
    }

    fn submit(&self, bytecode: &Bytes) -> ChainResult<B256> {
        if bytecode.is_empty() {
            return Err(ChainError::Rejected("empty bytecode".to_string()));
        }

        let nonce = self.nonce.get();
        self.nonce.set(nonce + 1);

        let (tx, address) = self.derive(nonce, bytecode);
        self.pending.borrow_mut().insert(
            tx,
            PendingDeploy {
                address,
                reverts: bytecode[0] == INVALID_OPCODE,
            },
        );
        Ok(tx)
    }

    fn confirm(&self, tx: B256) -> ChainResult<Address> {
        let Some(deploy) = self.pending.borrow_mut().remove(&tx) else {
            return Err(ChainError::Transport(format!("unknown transaction {tx}")));
        };
        if deploy.reverts {
            return Err(ChainError::Reverted { tx });
        }
        Ok(deploy.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(hex_text: &str) -> Bytes {
        Bytes::from(hex::decode(hex_text).unwrap())
    }

    #[test]
    fn deploys_are_deterministic_per_sequence() {
        let a = DevChainClient::new(NetworkId::new(1337));
        let b = DevChainClient::new(NetworkId::new(1337));

        let tx_a = a.submit(&code("6080")).unwrap();
        let tx_b = b.submit(&code("6080")).unwrap();

        assert_eq!(tx_a, tx_b);
        assert_eq!(a.confirm(tx_a).unwrap(), b.confirm(tx_b).unwrap());
    }

    #[test]
    fn nonce_distinguishes_identical_bytecode() {
        let chain = DevChainClient::new(NetworkId::new(1337));

        let first = chain.submit(&code("6080")).unwrap();
        let second = chain.submit(&code("6080")).unwrap();

        assert_ne!(first, second);
        assert_ne!(chain.confirm(first).unwrap(), chain.confirm(second).unwrap());
    }

    #[test]
    fn network_distinguishes_addresses() {
        let dev = DevChainClient::new(NetworkId::new(1337));
        let kovan = DevChainClient::new(NetworkId::new(42));

        let tx_dev = dev.submit(&code("6080")).unwrap();
        let tx_kovan = kovan.submit(&code("6080")).unwrap();

        assert_ne!(tx_dev, tx_kovan);
    }

    #[test]
    fn invalid_opcode_prefix_reverts_on_confirm() {
        let chain = DevChainClient::new(NetworkId::new(1337));

        let tx = chain.submit(&code("fe6080")).unwrap();
        let err = chain.confirm(tx).unwrap_err();

        assert!(matches!(err, ChainError::Reverted { .. }));
    }

    #[test]
    fn empty_bytecode_is_rejected() {
        let chain = DevChainClient::new(NetworkId::new(1337));
        let err = chain.submit(&Bytes::new()).unwrap_err();
        assert!(matches!(err, ChainError::Rejected(_)));
    }

    #[test]
    fn unknown_transaction_is_a_transport_error() {
        let chain = DevChainClient::new(NetworkId::new(1337));
        let err = chain.confirm(B256::ZERO).unwrap_err();
        assert!(matches!(err, ChainError::Transport(_)));
    }
}
