//! Receiver that takes every ERC-1155 transfer.
use alloc::vec::Vec;

use alloy_primitives::{Address, Bytes, FixedBytes, U256};

use crate::{
    token::erc1155::{
        IErc1155Receiver, BATCH_TRANSFER_FN_SELECTOR, RECEIVER_INTERFACE_ID,
        SINGLE_TRANSFER_FN_SELECTOR,
    },
    utils::introspection::erc165::{Erc165, IErc165},
};

/// Register it for an account that should hold tokens without custom
/// acceptance logic.
#[derive(Clone, Copy, Debug, Default)]
pub struct Erc1155Holder;

impl IErc1155Receiver for Erc1155Holder {
    fn on_erc1155_received(
        &mut self,
        _operator: Address,
        _from: Address,
        _id: U256,
        _value: U256,
        _data: &Bytes,
    ) -> Result<FixedBytes<4>, Vec<u8>> {
        Ok(SINGLE_TRANSFER_FN_SELECTOR)
    }

    fn on_erc1155_batch_received(
        &mut self,
        _operator: Address,
        _from: Address,
        _ids: &[U256],
        _values: &[U256],
        _data: &Bytes,
    ) -> Result<FixedBytes<4>, Vec<u8>> {
        Ok(BATCH_TRANSFER_FN_SELECTOR)
    }
}

impl IErc165 for Erc1155Holder {
    fn supports_interface(interface_id: FixedBytes<4>) -> bool {
        RECEIVER_INTERFACE_ID == u32::from_be_bytes(*interface_id)
            || Erc165::supports_interface(interface_id)
    }
}
