//! Solidity function selectors and interface ids, computed at compile time.
use keccak_const::Keccak256;

/// Returns the first four bytes of the keccak-256 hash of a canonical
/// Solidity function `signature`, e.g. `"balanceOf(address,uint256)"`.
#[must_use]
pub const fn function_selector(signature: &str) -> [u8; 4] {
    let hash = Keccak256::new().update(signature.as_bytes()).finalize();
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Computes an [ERC-165] interface id as the XOR of the selectors of every
/// function in `signatures`.
///
/// [ERC-165]: https://eips.ethereum.org/EIPS/eip-165#how-interfaces-are-identified
#[must_use]
pub const fn interface_id(signatures: &[&str]) -> u32 {
    let mut id = 0;
    let mut i = 0;
    while i < signatures.len() {
        id ^= u32::from_be_bytes(function_selector(signatures[i]));
        i += 1;
    }
    id
}
