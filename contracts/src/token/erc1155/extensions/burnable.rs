//! Lets holders and their operators destroy tokens.

use alloc::vec::Vec;

use alloy_primitives::{Address, U256};

use super::Erc1155Supply;
use crate::{
    token::erc1155::{Erc1155, Error},
    utils::Context,
};

/// Burning gated by ownership or operator approval, unlike the
/// administrative [`Erc1155::_burn`].
pub trait IErc1155Burnable {
    /// Error returned by the burn operations.
    type Error: Into<Vec<u8>>;

    /// Destroys `value` units of `token_id` held by `account`.
    ///
    /// # Errors
    ///
    /// * [`Error::MissingApprovalForAll`] - The caller is neither `account`
    ///   nor one of its operators.
    /// * [`Error::InvalidSender`] - `account` is the zero account.
    /// * [`Error::InsufficientBalance`] - `account` holds less than `value`.
    fn burn(
        &mut self,
        ctx: &Context,
        account: Address,
        token_id: U256,
        value: U256,
    ) -> Result<(), Self::Error>;

    /// [`IErc1155Burnable::burn`] over parallel arrays, all or nothing.
    ///
    /// # Errors
    ///
    /// As [`IErc1155Burnable::burn`], plus [`Error::InvalidArrayLength`]
    /// when `token_ids` and `values` differ in length.
    fn burn_batch(
        &mut self,
        ctx: &Context,
        account: Address,
        token_ids: Vec<U256>,
        values: Vec<U256>,
    ) -> Result<(), Self::Error>;
}

impl IErc1155Burnable for Erc1155 {
    type Error = Error;

    fn burn(
        &mut self,
        ctx: &Context,
        account: Address,
        token_id: U256,
        value: U256,
    ) -> Result<(), Self::Error> {
        self.authorize_transfer(ctx, account)?;
        self._burn(ctx, account, token_id, value)
    }

    fn burn_batch(
        &mut self,
        ctx: &Context,
        account: Address,
        token_ids: Vec<U256>,
        values: Vec<U256>,
    ) -> Result<(), Self::Error> {
        self.authorize_transfer(ctx, account)?;
        self._burn_batch(ctx, account, token_ids, values)
    }
}

impl IErc1155Burnable for Erc1155Supply {
    type Error = Error;

    fn burn(
        &mut self,
        ctx: &Context,
        account: Address,
        token_id: U256,
        value: U256,
    ) -> Result<(), Self::Error> {
        self.erc1155.authorize_transfer(ctx, account)?;
        self._burn(ctx, account, token_id, value)
    }

    fn burn_batch(
        &mut self,
        ctx: &Context,
        account: Address,
        token_ids: Vec<U256>,
        values: Vec<U256>,
    ) -> Result<(), Self::Error> {
        self.erc1155.authorize_transfer(ctx, account)?;
        self._burn_batch(ctx, account, token_ids, values)
    }
}
