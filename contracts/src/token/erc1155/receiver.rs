//! Interface an account must implement in order to accept ERC-1155 token
//! transfers through the safe transfer and mint functions.
use alloc::vec::Vec;

use alloy_primitives::{Address, Bytes, FixedBytes, U256};

use crate::utils::selector::{function_selector, interface_id};

/// Answer of [`IErc1155Receiver::on_erc1155_received`] that accepts.
pub const SINGLE_TRANSFER_FN_SELECTOR: FixedBytes<4> = FixedBytes(
    function_selector("onERC1155Received(address,address,uint256,uint256,bytes)"),
);

/// Answer of [`IErc1155Receiver::on_erc1155_batch_received`] that accepts.
pub const BATCH_TRANSFER_FN_SELECTOR: FixedBytes<4> = FixedBytes(
    function_selector(
        "onERC1155BatchReceived(address,address,uint256[],uint256[],bytes)",
    ),
);

/// ERC-165 id of [`IErc1155Receiver`], `0x4e2312e0`.
pub const RECEIVER_INTERFACE_ID: u32 = interface_id(&[
    "onERC1155Received(address,address,uint256,uint256,bytes)",
    "onERC1155BatchReceived(address,address,uint256[],uint256[],bytes)",
]);

/// [`super::Erc1155`] token receiver interface.
///
/// Registered for an account with [`super::Erc1155::register_receiver`].
/// Accounts without a registered receiver accept every transfer.
///
/// A hook either returns the selector that accepts the transfer, or fails
/// with revert data. Non-empty revert data is surfaced to the caller as
/// [`super::Error::InvalidReceiverWithReason`]; anything else that is not the
/// expected selector becomes [`super::Error::InvalidReceiver`].
pub trait IErc1155Receiver {
    /// Asked before `value` units of `id` are credited by a single transfer
    /// or mint that `operator` started. `from` is zero for mints, and `data`
    /// is the caller's payload, untouched.
    ///
    /// Accepts by returning [`SINGLE_TRANSFER_FN_SELECTOR`].
    ///
    /// # Errors
    ///
    /// Revert data explaining the refusal.
    fn on_erc1155_received(
        &mut self,
        operator: Address,
        from: Address,
        id: U256,
        value: U256,
        data: &Bytes,
    ) -> Result<FixedBytes<4>, Vec<u8>>;

    /// Batch counterpart of [`Self::on_erc1155_received`]; `ids[i]` is
    /// credited `values[i]` units.
    ///
    /// Accepts by returning [`BATCH_TRANSFER_FN_SELECTOR`].
    ///
    /// # Errors
    ///
    /// Revert data explaining the refusal.
    fn on_erc1155_batch_received(
        &mut self,
        operator: Address,
        from: Address,
        ids: &[U256],
        values: &[U256],
        data: &Bytes,
    ) -> Result<FixedBytes<4>, Vec<u8>>;
}
