//! Interface detection per [ERC-165].
//!
//! [ERC-165]: https://eips.ethereum.org/EIPS/eip-165

use alloy_primitives::FixedBytes;

use crate::utils::selector::interface_id;

/// Answers whether a type implements a given interface id.
pub trait IErc165 {
    /// Id of `supportsInterface(bytes4)` itself, `0x01ffc9a7`.
    const INTERFACE_ID: u32 = interface_id(&["supportsInterface(bytes4)"]);

    /// Whether `interface_id`, the XOR of an interface's function selectors,
    /// is implemented.
    fn supports_interface(interface_id: FixedBytes<4>) -> bool;
}

/// Base answer: only ERC-165 itself.
///
/// Implementors check their own ids first and fall back to this one:
///
/// ```rust,ignore
/// <Self as IErc1155>::INTERFACE_ID == u32::from_be_bytes(*interface_id)
///     || Erc165::supports_interface(interface_id)
/// ```
pub struct Erc165;

impl IErc165 for Erc165 {
    fn supports_interface(interface_id: FixedBytes<4>) -> bool {
        <Self as IErc165>::INTERFACE_ID == u32::from_be_bytes(*interface_id)
    }
}
