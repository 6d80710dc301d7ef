//! Implementation of the ERC-1155 token standard.
use alloc::{boxed::Box, collections::BTreeMap, vec, vec::Vec};
use core::fmt;

use alloy_primitives::{Address, Bytes, FixedBytes, U256};
use alloy_sol_types::SolError;

use crate::utils::{
    introspection::erc165::{Erc165, IErc165},
    selector::interface_id,
    Context, EventLog,
};

pub mod extensions;
mod receiver;
pub mod utils;

pub use receiver::{
    IErc1155Receiver, BATCH_TRANSFER_FN_SELECTOR, RECEIVER_INTERFACE_ID,
    SINGLE_TRANSFER_FN_SELECTOR,
};
pub use sol::*;
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// `operator` moved `value` units of token `id` from `from` to `to`.
        /// Mints have a zero `from`, burns a zero `to`.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event TransferSingle(
            address indexed operator,
            address indexed from,
            address indexed to,
            uint256 id,
            uint256 value
        );

        /// Several ids moved in one call; `ids[i]` moved `values[i]` units.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event TransferBatch(
            address indexed operator,
            address indexed from,
            address indexed to,
            uint256[] ids,
            uint256[] values
        );

        /// `account` set the operator status of `operator` to `approved`.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event ApprovalForAll(
            address indexed account,
            address indexed operator,
            bool approved
        );
    }

    sol! {
        /// `sender` holds `balance` of `token_id` but `needed` was requested.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC1155InsufficientBalance(
            address sender,
            uint256 balance,
            uint256 needed,
            uint256 token_id
        );

        /// Tokens cannot leave `sender`.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC1155InvalidSender(address sender);

        /// Tokens cannot be delivered to `receiver`.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC1155InvalidReceiver(address receiver);

        /// `operator` may not move the tokens of `owner`.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC1155MissingApprovalForAll(address operator, address owner);

        /// `approver` cannot grant operator status.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC1155InvalidApprover(address approver);

        /// `operator` cannot be granted operator status.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC1155InvalidOperator(address operator);

        /// Parallel id and value arrays differ in length.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error ERC1155InvalidArrayLength(uint256 ids_length, uint256 values_length);
    }
}

/// Failure of an [`Erc1155`] operation, following the [ERC-6093] naming.
///
/// [ERC-6093]: https://eips.ethereum.org/EIPS/eip-6093
#[derive(Debug)]
pub enum Error {
    /// A debit exceeds the balance of the sender.
    InsufficientBalance(ERC1155InsufficientBalance),
    /// The sender of a transfer or burn is the zero account.
    InvalidSender(ERC1155InvalidSender),
    /// The recipient is the zero account, or its hook refused the tokens
    /// without saying why.
    InvalidReceiver(ERC1155InvalidReceiver),
    /// The recipient's [`IErc1155Receiver`] hook failed with this revert
    /// data.
    InvalidReceiverWithReason(Bytes),
    /// The caller is neither the owner nor one of its operators.
    MissingApprovalForAll(ERC1155MissingApprovalForAll),
    /// The zero account tried to appoint an operator.
    InvalidApprover(ERC1155InvalidApprover),
    /// The zero account cannot be an operator.
    InvalidOperator(ERC1155InvalidOperator),
    /// Id and value arrays have different lengths.
    InvalidArrayLength(ERC1155InvalidArrayLength),
}

impl From<Error> for Vec<u8> {
    fn from(value: Error) -> Vec<u8> {
        match value {
            Error::InsufficientBalance(e) => e.abi_encode(),
            Error::InvalidSender(e) => e.abi_encode(),
            Error::InvalidReceiver(e) => e.abi_encode(),
            Error::InvalidReceiverWithReason(reason) => reason.to_vec(),
            Error::MissingApprovalForAll(e) => e.abi_encode(),
            Error::InvalidApprover(e) => e.abi_encode(),
            Error::InvalidOperator(e) => e.abi_encode(),
            Error::InvalidArrayLength(e) => e.abi_encode(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InsufficientBalance(e) => write!(
                f,
                "insufficient balance of token {} for {}: have {}, need {}",
                e.token_id, e.sender, e.balance, e.needed
            ),
            Error::InvalidSender(e) => write!(f, "invalid sender {}", e.sender),
            Error::InvalidReceiver(e) => {
                write!(f, "invalid receiver {}", e.receiver)
            }
            Error::InvalidReceiverWithReason(reason) => {
                write!(f, "receiver rejected the transfer: {reason:?}")
            }
            Error::MissingApprovalForAll(e) => write!(
                f,
                "{} is not approved to operate on tokens of {}",
                e.operator, e.owner
            ),
            Error::InvalidApprover(e) => {
                write!(f, "invalid approver {}", e.approver)
            }
            Error::InvalidOperator(e) => {
                write!(f, "invalid operator {}", e.operator)
            }
            Error::InvalidArrayLength(e) => write!(
                f,
                "ids length {} != values length {}",
                e.ids_length, e.values_length
            ),
        }
    }
}

impl core::error::Error for Error {}

/// Multi-token ledger.
///
/// Owns every balance and operator approval. All mutation goes through the
/// methods below; an operation either completes or leaves the ledger as it
/// found it.
#[derive(Default)]
pub struct Erc1155 {
    /// Token id to holder to balance.
    pub(crate) balances: BTreeMap<U256, BTreeMap<Address, U256>>,
    /// Owner to operator to approval flag.
    pub(crate) operator_approvals: BTreeMap<Address, BTreeMap<Address, bool>>,
    receivers: BTreeMap<Address, Box<dyn IErc1155Receiver>>,
    log: EventLog,
}

/// Public surface of an ERC-1155 ledger.
pub trait IErc1155 {
    /// Error returned by the fallible operations.
    type Error: Into<Vec<u8>>;

    /// ERC-165 id of this interface, `0xd9b67a26`.
    const INTERFACE_ID: u32 = interface_id(&[
        "balanceOf(address,uint256)",
        "balanceOfBatch(address[],uint256[])",
        "setApprovalForAll(address,bool)",
        "isApprovedForAll(address,address)",
        "safeTransferFrom(address,address,uint256,uint256,bytes)",
        "safeBatchTransferFrom(address,address,uint256[],uint256[],bytes)",
    ]);

    /// Units of token `id` held by `account`; zero for pairs never seen.
    fn balance_of(&self, account: Address, id: U256) -> U256;

    /// `balance_of(accounts[i], ids[i])` for every `i`.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidArrayLength`] - `accounts` and `ids` differ in
    ///   length.
    fn balance_of_batch(
        &self,
        accounts: Vec<Address>,
        ids: Vec<U256>,
    ) -> Result<Vec<U256>, Self::Error>;

    /// Lets `operator` move every token of the caller, or revokes that right.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidApprover`] - The caller is the zero account.
    /// * [`Error::InvalidOperator`] - `operator` is the zero account.
    ///
    /// # Events
    ///
    /// * [`ApprovalForAll`].
    fn set_approval_for_all(
        &mut self,
        ctx: &Context,
        operator: Address,
        approved: bool,
    ) -> Result<(), Self::Error>;

    /// Whether `account` made `operator` one of its operators.
    fn is_approved_for_all(&self, account: Address, operator: Address) -> bool;

    /// Moves `value` units of token `id` from `from` to `to`, on behalf of
    /// the caller.
    ///
    /// `data` is handed untouched to the hook of `to`, if it registered one.
    ///
    /// # Errors
    ///
    /// Reported in this order:
    ///
    /// * [`Error::MissingApprovalForAll`] - The caller is not `from` and not
    ///   an operator of `from`.
    /// * [`Error::InvalidReceiver`] - `to` is the zero account.
    /// * [`Error::InvalidSender`] - `from` is the zero account.
    /// * [`Error::InsufficientBalance`] - `from` holds less than `value`.
    /// * [`Error::InvalidReceiver`], [`Error::InvalidReceiverWithReason`] -
    ///   The hook of `to` refused the tokens.
    ///
    /// # Events
    ///
    /// * [`TransferSingle`].
    ///
    /// # Panics
    ///
    /// * If the balance of `to` would exceed `U256::MAX`.
    fn safe_transfer_from(
        &mut self,
        ctx: &Context,
        from: Address,
        to: Address,
        id: U256,
        value: U256,
        data: &Bytes,
    ) -> Result<(), Self::Error>;

    /// Moves `values[i]` units of `ids[i]` for every `i`, all or nothing.
    ///
    /// Repeated ids draw on the same balance, in array order.
    ///
    /// # Errors
    ///
    /// Reported in this order:
    ///
    /// * [`Error::MissingApprovalForAll`] - The caller is not `from` and not
    ///   an operator of `from`.
    /// * [`Error::InvalidReceiver`] - `to` is the zero account.
    /// * [`Error::InvalidSender`] - `from` is the zero account.
    /// * [`Error::InvalidArrayLength`] - `ids` and `values` differ in length.
    /// * [`Error::InsufficientBalance`] - The first pair `from` cannot cover.
    /// * [`Error::InvalidReceiver`], [`Error::InvalidReceiverWithReason`] -
    ///   The hook of `to` refused the tokens.
    ///
    /// # Events
    ///
    /// * [`TransferSingle`] for a one-element batch, [`TransferBatch`]
    ///   otherwise.
    ///
    /// # Panics
    ///
    /// * If a balance of `to` would exceed `U256::MAX`.
    fn safe_batch_transfer_from(
        &mut self,
        ctx: &Context,
        from: Address,
        to: Address,
        ids: Vec<U256>,
        values: Vec<U256>,
        data: &Bytes,
    ) -> Result<(), Self::Error>;
}

impl IErc1155 for Erc1155 {
    type Error = Error;

    fn balance_of(&self, account: Address, id: U256) -> U256 {
        self.balances
            .get(&id)
            .and_then(|holders| holders.get(&account))
            .copied()
            .unwrap_or_default()
    }

    fn balance_of_batch(
        &self,
        accounts: Vec<Address>,
        ids: Vec<U256>,
    ) -> Result<Vec<U256>, Self::Error> {
        Self::require_equal_arrays_length(&ids, &accounts)?;
        Ok(accounts
            .into_iter()
            .zip(ids)
            .map(|(account, id)| self.balance_of(account, id))
            .collect())
    }

    fn set_approval_for_all(
        &mut self,
        ctx: &Context,
        operator: Address,
        approved: bool,
    ) -> Result<(), Self::Error> {
        self._set_approval_for_all(ctx.msg_sender(), operator, approved)
    }

    fn is_approved_for_all(&self, account: Address, operator: Address) -> bool {
        self.operator_approvals
            .get(&account)
            .and_then(|operators| operators.get(&operator))
            .copied()
            .unwrap_or_default()
    }

    fn safe_transfer_from(
        &mut self,
        ctx: &Context,
        from: Address,
        to: Address,
        id: U256,
        value: U256,
        data: &Bytes,
    ) -> Result<(), Self::Error> {
        self.authorize_transfer(ctx, from)?;
        self.do_safe_transfer_from(ctx, from, to, vec![id], vec![value], data)
    }

    fn safe_batch_transfer_from(
        &mut self,
        ctx: &Context,
        from: Address,
        to: Address,
        ids: Vec<U256>,
        values: Vec<U256>,
        data: &Bytes,
    ) -> Result<(), Self::Error> {
        self.authorize_transfer(ctx, from)?;
        self.do_safe_transfer_from(ctx, from, to, ids, values, data)
    }
}

impl IErc165 for Erc1155 {
    fn supports_interface(interface_id: FixedBytes<4>) -> bool {
        <Self as IErc1155>::INTERFACE_ID == u32::from_be_bytes(*interface_id)
            || Erc165::supports_interface(interface_id)
    }
}

impl Erc1155 {
    /// Whether `operator` may move the tokens of `owner`: it is `owner`, or
    /// `owner` approved it.
    #[must_use]
    pub fn is_approved_or_owner(&self, operator: Address, owner: Address) -> bool {
        operator == owner || self.is_approved_for_all(owner, operator)
    }

    /// Installs `receiver` as the acceptance hook of `account`, replacing any
    /// previous one.
    ///
    /// Safe transfers and mints to `account` then succeed only if the hook
    /// answers with the expected selector. Accounts without a hook accept
    /// everything.
    pub fn register_receiver(
        &mut self,
        account: Address,
        receiver: impl IErc1155Receiver + 'static,
    ) {
        self.receivers.insert(account, Box::new(receiver));
    }

    /// Whether `account` installed an acceptance hook.
    #[must_use]
    pub fn has_receiver(&self, account: Address) -> bool {
        self.receivers.contains_key(&account)
    }

    /// Events emitted so far.
    #[must_use]
    pub fn logs(&self) -> &EventLog {
        &self.log
    }

    /// Forgets every emitted event.
    pub fn clear_logs(&mut self) {
        self.log.clear();
    }

    /// Creates `value` units of token `id` for `to`.
    ///
    /// Administrative: no authorization is checked. The caller in `ctx` is
    /// only reported as operator.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidReceiver`] - `to` is the zero account, or its hook
    ///   refused the tokens without a reason.
    /// * [`Error::InvalidReceiverWithReason`] - The hook of `to` failed with a
    ///   reason.
    ///
    /// # Events
    ///
    /// * [`TransferSingle`] with a zero `from`.
    ///
    /// # Panics
    ///
    /// * If the balance of `to` would exceed `U256::MAX`.
    pub fn _mint(
        &mut self,
        ctx: &Context,
        to: Address,
        id: U256,
        value: U256,
        data: &Bytes,
    ) -> Result<(), Error> {
        self._do_mint(ctx, to, vec![id], vec![value], data)
    }

    /// Batched [`Self::_mint`].
    ///
    /// # Errors
    ///
    /// As [`Self::_mint`], plus [`Error::InvalidArrayLength`] when `ids` and
    /// `values` differ in length.
    ///
    /// # Panics
    ///
    /// * If a balance of `to` would exceed `U256::MAX`.
    pub fn _mint_batch(
        &mut self,
        ctx: &Context,
        to: Address,
        ids: Vec<U256>,
        values: Vec<U256>,
        data: &Bytes,
    ) -> Result<(), Error> {
        self._do_mint(ctx, to, ids, values, data)
    }

    /// Destroys `value` units of token `id` held by `from`, without checking
    /// who asks.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidSender`] - `from` is the zero account.
    /// * [`Error::InsufficientBalance`] - `from` holds less than `value`.
    ///
    /// # Events
    ///
    /// * [`TransferSingle`] with a zero `to`.
    pub fn _burn(
        &mut self,
        ctx: &Context,
        from: Address,
        id: U256,
        value: U256,
    ) -> Result<(), Error> {
        self._do_burn(ctx, from, vec![id], vec![value])
    }

    /// Batched [`Self::_burn`].
    ///
    /// # Errors
    ///
    /// As [`Self::_burn`], plus [`Error::InvalidArrayLength`] when `ids` and
    /// `values` differ in length.
    pub fn _burn_batch(
        &mut self,
        ctx: &Context,
        from: Address,
        ids: Vec<U256>,
        values: Vec<U256>,
    ) -> Result<(), Error> {
        self._do_burn(ctx, from, ids, values)
    }

    /// Sets whether `operator` may move the tokens of `owner`.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidApprover`] - `owner` is the zero account.
    /// * [`Error::InvalidOperator`] - `operator` is the zero account.
    ///
    /// # Events
    ///
    /// * [`ApprovalForAll`].
    pub fn _set_approval_for_all(
        &mut self,
        owner: Address,
        operator: Address,
        approved: bool,
    ) -> Result<(), Error> {
        if owner.is_zero() {
            return Err(Error::InvalidApprover(ERC1155InvalidApprover {
                approver: owner,
            }));
        }
        if operator.is_zero() {
            return Err(Error::InvalidOperator(ERC1155InvalidOperator {
                operator,
            }));
        }
        self.operator_approvals
            .entry(owner)
            .or_default()
            .insert(operator, approved);
        self.log.emit(&ApprovalForAll { account: owner, operator, approved });
        Ok(())
    }
}

impl Erc1155 {
    /// Moves `values` of `ids` from `from` to `to`. A zero `from` mints, a
    /// zero `to` burns.
    ///
    /// Nothing is written until the staged balances passed every check,
    /// including the hook of `to`. Events follow the commit.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidArrayLength`] - `ids` and `values` differ in length.
    /// * [`Error::InsufficientBalance`] - `from` cannot cover a pair.
    /// * [`Error::InvalidReceiver`], [`Error::InvalidReceiverWithReason`] -
    ///   The hook of `to` refused the tokens.
    ///
    /// # Panics
    ///
    /// * If a balance of `to` would exceed `U256::MAX`.
    pub(crate) fn _update_with_acceptance_check(
        &mut self,
        ctx: &Context,
        from: Address,
        to: Address,
        ids: Vec<U256>,
        values: Vec<U256>,
        data: &Bytes,
    ) -> Result<(), Error> {
        let pending = self.stage_update(from, to, &ids, &values)?;

        let operator = ctx.msg_sender();
        let details = Erc1155ReceiverData::new(ids, values);
        if !to.is_zero() {
            self._check_on_erc1155_received(operator, from, to, &details, data)?;
        }

        self.commit(pending);

        match details.transfer {
            Transfer::Single { id, value } => {
                self.log.emit(&TransferSingle { operator, from, to, id, value });
            }
            Transfer::Batch { ids, values } => {
                self.log.emit(&TransferBatch { operator, from, to, ids, values });
            }
        }

        Ok(())
    }

    /// Balances that applying the pairs in order would produce.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidArrayLength`] - `ids` and `values` differ in length.
    /// * [`Error::InsufficientBalance`] - `from` runs out partway through.
    ///
    /// # Panics
    ///
    /// * If a balance of `to` would exceed `U256::MAX`.
    fn stage_update(
        &self,
        from: Address,
        to: Address,
        ids: &[U256],
        values: &[U256],
    ) -> Result<PendingBalances, Error> {
        Self::require_equal_arrays_length(ids, values)?;

        let mut pending = PendingBalances::default();
        for (&token_id, &value) in ids.iter().zip(values) {
            if !from.is_zero() {
                let balance = pending.balance_of(self, from, token_id);
                let Some(left) = balance.checked_sub(value) else {
                    return Err(Error::InsufficientBalance(
                        ERC1155InsufficientBalance {
                            sender: from,
                            balance,
                            needed: value,
                            token_id,
                        },
                    ));
                };
                pending.set(from, token_id, left);
            }

            if !to.is_zero() {
                let credited = pending
                    .balance_of(self, to, token_id)
                    .checked_add(value)
                    .expect("should not exceed `U256::MAX` for `balances`");
                pending.set(to, token_id, credited);
            }
        }

        Ok(pending)
    }

    fn commit(&mut self, pending: PendingBalances) {
        for ((token_id, account), balance) in pending.balances {
            self.balances.entry(token_id).or_default().insert(account, balance);
        }
    }

    /// Asks the hook of `to`, if any, whether it takes the tokens.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidReceiverWithReason`] - The hook failed with revert
    ///   data.
    /// * [`Error::InvalidReceiver`] - The hook failed without data or
    ///   answered with the wrong selector.
    fn _check_on_erc1155_received(
        &mut self,
        operator: Address,
        from: Address,
        to: Address,
        details: &Erc1155ReceiverData,
        data: &Bytes,
    ) -> Result<(), Error> {
        let Some(receiver) = self.receivers.get_mut(&to) else {
            return Ok(());
        };

        let answer = match &details.transfer {
            Transfer::Single { id, value } => {
                receiver.on_erc1155_received(operator, from, *id, *value, data)
            }
            Transfer::Batch { ids, values } => receiver
                .on_erc1155_batch_received(operator, from, ids, values, data),
        };

        match answer {
            Ok(selector) if selector == details.receiver_fn_selector => Ok(()),
            Err(reason) if !reason.is_empty() => {
                Err(Error::InvalidReceiverWithReason(reason.into()))
            }
            _ => Err(Error::InvalidReceiver(ERC1155InvalidReceiver {
                receiver: to,
            })),
        }
    }

    fn _do_mint(
        &mut self,
        ctx: &Context,
        to: Address,
        ids: Vec<U256>,
        values: Vec<U256>,
        data: &Bytes,
    ) -> Result<(), Error> {
        Self::require_receiver(to)?;
        self._update_with_acceptance_check(ctx, Address::ZERO, to, ids, values, data)
    }

    fn _do_burn(
        &mut self,
        ctx: &Context,
        from: Address,
        ids: Vec<U256>,
        values: Vec<U256>,
    ) -> Result<(), Error> {
        Self::require_sender(from)?;
        let no_data = Bytes::new();
        self._update_with_acceptance_check(ctx, from, Address::ZERO, ids, values, &no_data)
    }

    fn do_safe_transfer_from(
        &mut self,
        ctx: &Context,
        from: Address,
        to: Address,
        ids: Vec<U256>,
        values: Vec<U256>,
        data: &Bytes,
    ) -> Result<(), Error> {
        Self::require_valid_endpoints(from, to)?;
        self._update_with_acceptance_check(ctx, from, to, ids, values, data)
    }

    /// Rejects a zero recipient first, then a zero sender.
    pub(crate) fn require_valid_endpoints(
        from: Address,
        to: Address,
    ) -> Result<(), Error> {
        Self::require_receiver(to)?;
        Self::require_sender(from)
    }

    pub(crate) fn require_receiver(to: Address) -> Result<(), Error> {
        if to.is_zero() {
            return Err(Error::InvalidReceiver(ERC1155InvalidReceiver {
                receiver: to,
            }));
        }
        Ok(())
    }

    pub(crate) fn require_sender(from: Address) -> Result<(), Error> {
        if from.is_zero() {
            return Err(Error::InvalidSender(ERC1155InvalidSender {
                sender: from,
            }));
        }
        Ok(())
    }

    pub(crate) fn require_equal_arrays_length<T, U>(
        ids: &[T],
        values: &[U],
    ) -> Result<(), Error> {
        if ids.len() == values.len() {
            return Ok(());
        }
        Err(Error::InvalidArrayLength(ERC1155InvalidArrayLength {
            ids_length: U256::from(ids.len()),
            values_length: U256::from(values.len()),
        }))
    }

    /// Fails with [`Error::MissingApprovalForAll`] unless the caller may move
    /// the tokens of `from`.
    pub(crate) fn authorize_transfer(
        &self,
        ctx: &Context,
        from: Address,
    ) -> Result<(), Error> {
        let operator = ctx.msg_sender();
        if self.is_approved_or_owner(operator, from) {
            return Ok(());
        }
        Err(Error::MissingApprovalForAll(ERC1155MissingApprovalForAll {
            operator,
            owner: from,
        }))
    }
}

/// Balances written by one update, keyed by `(token id, account)`.
#[derive(Default)]
struct PendingBalances {
    balances: BTreeMap<(U256, Address), U256>,
}

impl PendingBalances {
    /// Staged balance, falling back to the committed one.
    fn balance_of(&self, ledger: &Erc1155, account: Address, id: U256) -> U256 {
        self.balances
            .get(&(id, account))
            .copied()
            .unwrap_or_else(|| ledger.balance_of(account, id))
    }

    fn set(&mut self, account: Address, id: U256, balance: U256) {
        self.balances.insert((id, account), balance);
    }
}

/// What the hook of a recipient is asked about, and the selector it must
/// answer with.
struct Erc1155ReceiverData {
    receiver_fn_selector: FixedBytes<4>,
    transfer: Transfer,
}

impl Erc1155ReceiverData {
    /// One pair is a [`Transfer::Single`], anything else a
    /// [`Transfer::Batch`]. Lengths must already match.
    fn new(ids: Vec<U256>, values: Vec<U256>) -> Self {
        if let ([id], [value]) = (ids.as_slice(), values.as_slice()) {
            return Self {
                receiver_fn_selector: SINGLE_TRANSFER_FN_SELECTOR,
                transfer: Transfer::Single { id: *id, value: *value },
            };
        }
        Self {
            receiver_fn_selector: BATCH_TRANSFER_FN_SELECTOR,
            transfer: Transfer::Batch { ids, values },
        }
    }
}

#[derive(Debug, PartialEq)]
enum Transfer {
    Single { id: U256, value: U256 },
    Batch { ids: Vec<U256>, values: Vec<U256> },
}
