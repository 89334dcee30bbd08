//! Bytecode linking against the ledger.
//!
//! Linking is the last step before submission: every placeholder symbol in
//! a spec's bytecode is rewritten with the recorded address of the library
//! it names. Returning decoded bytes guarantees nothing unresolved reaches
//! the chain client.

use alloy_primitives::Bytes;

use crate::domain::entities::{ContractSpec, Ledger, NetworkId};
use crate::error::{StevedoreError, StevedoreResult};

/// Resolve every library reference of `spec` from the ledger and produce
/// submit-ready bytecode.
///
/// Fails with `MissingLink` if a required address is not recorded - the
/// plan guarantees dependencies deploy first, so a miss here means the
/// graph or the ledger is inconsistent.
pub fn link_for_deploy(
    spec: &ContractSpec,
    ledger: &Ledger,
    network: NetworkId,
) -> StevedoreResult<Bytes> {
    let mut code = spec.bytecode().clone();

    for library in spec.library_refs() {
        let address = ledger.address_of(network, library).ok_or_else(|| {
            StevedoreError::MissingLink {
                contract: spec.name().to_string(),
                library: library.clone(),
                network: network.value(),
            }
        })?;
        code = code.link(library, address);
    }

    if !code.is_fully_linked() {
        // A placeholder survived that names no declared or scanned ref;
        // placeholder scanning makes this unreachable for well-formed input.
        if let Some(leftover) = code.placeholders().into_iter().next() {
            return Err(StevedoreError::MissingLink {
                contract: spec.name().to_string(),
                library: leftover,
                network: network.value(),
            });
        }
    }

    code.to_bytes()
        .map_err(|e| StevedoreError::MalformedBytecode {
            name: spec.name().to_string(),
            message: e.to_string(),
        })
}
