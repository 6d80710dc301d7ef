//! Ledger that also counts how many units of each token id exist.
//!
//! A supply of one hints at a non-fungible token, but nothing stops further
//! mints of the same id. The sum over all ids is itself a [`U256`], so every
//! id shares one global cap of `U256::MAX` units.

use alloc::{collections::BTreeMap, vec, vec::Vec};

use alloy_primitives::{Address, Bytes, FixedBytes, U256};

use crate::{
    token::erc1155::{self, Erc1155, IErc1155, IErc1155Receiver},
    utils::{
        introspection::erc165::IErc165, selector::interface_id, Context,
        EventLog,
    },
};

/// [`Erc1155`] ledger with per-id and global supply counters.
#[derive(Default)]
pub struct Erc1155Supply {
    /// Inner ledger. Only reachable through the supply-aware operations,
    /// so balances never move without the supply tables.
    pub(crate) erc1155: Erc1155,
    /// Units in circulation, per token id.
    pub(crate) total_supply: BTreeMap<U256, U256>,
    /// Units in circulation, all ids together.
    pub(crate) total_supply_all: U256,
}

/// Supply queries.
pub trait IErc1155Supply {
    /// ERC-165 id of the supply queries.
    const INTERFACE_ID: u32 = interface_id(&[
        "totalSupply(uint256)",
        "totalSupply()",
        "exists(uint256)",
    ]);

    /// Units of token `id` currently held by anyone.
    fn total_supply(&self, id: U256) -> U256;

    /// Units of every id currently held by anyone.
    fn total_supply_all(&self) -> U256;

    /// Whether at least one unit of `id` is in circulation.
    fn exists(&self, id: U256) -> bool;
}

impl IErc1155Supply for Erc1155Supply {
    fn total_supply(&self, id: U256) -> U256 {
        self.total_supply.get(&id).copied().unwrap_or_default()
    }

    fn total_supply_all(&self) -> U256 {
        self.total_supply_all
    }

    fn exists(&self, id: U256) -> bool {
        !self.total_supply(id).is_zero()
    }
}

impl IErc1155 for Erc1155Supply {
    type Error = erc1155::Error;

    fn balance_of(&self, account: Address, id: U256) -> U256 {
        self.erc1155.balance_of(account, id)
    }

    fn balance_of_batch(
        &self,
        accounts: Vec<Address>,
        ids: Vec<U256>,
    ) -> Result<Vec<U256>, Self::Error> {
        self.erc1155.balance_of_batch(accounts, ids)
    }

    fn set_approval_for_all(
        &mut self,
        ctx: &Context,
        operator: Address,
        approved: bool,
    ) -> Result<(), Self::Error> {
        self.erc1155.set_approval_for_all(ctx, operator, approved)
    }

    fn is_approved_for_all(&self, account: Address, operator: Address) -> bool {
        self.erc1155.is_approved_for_all(account, operator)
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
        self.erc1155.authorize_transfer(ctx, from)?;
        Erc1155::require_valid_endpoints(from, to)?;
        self.update(ctx, from, to, vec![id], vec![value], data)
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
        self.erc1155.authorize_transfer(ctx, from)?;
        Erc1155::require_valid_endpoints(from, to)?;
        self.update(ctx, from, to, ids, values, data)
    }
}

impl IErc165 for Erc1155Supply {
    fn supports_interface(interface_id: FixedBytes<4>) -> bool {
        <Self as IErc1155Supply>::INTERFACE_ID
            == u32::from_be_bytes(*interface_id)
            || Erc1155::supports_interface(interface_id)
    }
}

impl Erc1155Supply {
    /// See [`Erc1155::register_receiver`].
    pub fn register_receiver(
        &mut self,
        account: Address,
        receiver: impl IErc1155Receiver + 'static,
    ) {
        self.erc1155.register_receiver(account, receiver);
    }

    /// See [`Erc1155::has_receiver`].
    #[must_use]
    pub fn has_receiver(&self, account: Address) -> bool {
        self.erc1155.has_receiver(account)
    }

    /// See [`Erc1155::is_approved_or_owner`].
    #[must_use]
    pub fn is_approved_or_owner(&self, operator: Address, owner: Address) -> bool {
        self.erc1155.is_approved_or_owner(operator, owner)
    }

    /// Events emitted so far.
    #[must_use]
    pub fn logs(&self) -> &EventLog {
        self.erc1155.logs()
    }

    /// Forgets every emitted event.
    pub fn clear_logs(&mut self) {
        self.erc1155.clear_logs();
    }

    /// [`Erc1155::_mint`] that also raises the supply of `id`.
    ///
    /// # Errors
    ///
    /// As [`Erc1155::_mint`].
    ///
    /// # Panics
    ///
    /// * If the supply of `id` or the global supply would exceed
    ///   `U256::MAX`.
    pub fn _mint(
        &mut self,
        ctx: &Context,
        to: Address,
        id: U256,
        value: U256,
        data: &Bytes,
    ) -> Result<(), erc1155::Error> {
        self._mint_batch(ctx, to, vec![id], vec![value], data)
    }

    /// [`Erc1155::_mint_batch`] that also raises the supply of each id.
    ///
    /// # Errors
    ///
    /// As [`Erc1155::_mint_batch`].
    ///
    /// # Panics
    ///
    /// * If a per-id or the global supply would exceed `U256::MAX`.
    pub fn _mint_batch(
        &mut self,
        ctx: &Context,
        to: Address,
        ids: Vec<U256>,
        values: Vec<U256>,
        data: &Bytes,
    ) -> Result<(), erc1155::Error> {
        Erc1155::require_receiver(to)?;
        self.update(ctx, Address::ZERO, to, ids, values, data)
    }

    /// [`Erc1155::_burn`] that also lowers the supply of `id`.
    ///
    /// # Errors
    ///
    /// As [`Erc1155::_burn`].
    pub fn _burn(
        &mut self,
        ctx: &Context,
        from: Address,
        id: U256,
        value: U256,
    ) -> Result<(), erc1155::Error> {
        self._burn_batch(ctx, from, vec![id], vec![value])
    }

    /// [`Erc1155::_burn_batch`] that also lowers the supply of each id.
    ///
    /// # Errors
    ///
    /// As [`Erc1155::_burn_batch`].
    pub fn _burn_batch(
        &mut self,
        ctx: &Context,
        from: Address,
        ids: Vec<U256>,
        values: Vec<U256>,
    ) -> Result<(), erc1155::Error> {
        Erc1155::require_sender(from)?;
        self.update(ctx, from, Address::ZERO, ids, values, &Bytes::new())
    }
}

impl Erc1155Supply {
    /// Runs the inner update and keeps the counters in step with it.
    ///
    /// Mints are priced before any balance moves, so an overflow panics on
    /// an untouched ledger. Counters change only after the inner update
    /// succeeded.
    ///
    /// # Errors
    ///
    /// Whatever [`Erc1155::_update_with_acceptance_check`] reports.
    ///
    /// # Panics
    ///
    /// * If a balance, a per-id supply or the global supply would exceed
    ///   `U256::MAX`.
    fn update(
        &mut self,
        ctx: &Context,
        from: Address,
        to: Address,
        ids: Vec<U256>,
        values: Vec<U256>,
        data: &Bytes,
    ) -> Result<(), erc1155::Error> {
        Erc1155::require_equal_arrays_length(&ids, &values)?;

        let minted = (from.is_zero() && !to.is_zero())
            .then(|| self.stage_mint(&ids, &values));

        self.erc1155._update_with_acceptance_check(
            ctx,
            from,
            to,
            ids.clone(),
            values.clone(),
            data,
        )?;

        if let Some((supplies, total_supply_all)) = minted {
            self.total_supply.extend(supplies);
            self.total_supply_all = total_supply_all;
        }

        if to.is_zero() && !from.is_zero() {
            for (token_id, value) in ids.into_iter().zip(values) {
                // value <= balance_of(from, token_id) <= total_supply(token_id)
                *self.total_supply.entry(token_id).or_default() -= value;
                self.total_supply_all -= value;
            }
        }

        Ok(())
    }

    /// Supplies after minting `values` of `ids`, not yet written.
    ///
    /// # Panics
    ///
    /// * If a per-id or the global supply would exceed `U256::MAX`.
    fn stage_mint(
        &self,
        ids: &[U256],
        values: &[U256],
    ) -> (BTreeMap<U256, U256>, U256) {
        let mut supplies = BTreeMap::new();
        let mut total_supply_all = self.total_supply_all;
        for (&token_id, &value) in ids.iter().zip(values) {
            let supply = supplies
                .get(&token_id)
                .copied()
                .unwrap_or_else(|| self.total_supply(token_id))
                .checked_add(value)
                .expect("should not exceed `U256::MAX` for `total_supply`");
            supplies.insert(token_id, supply);

            total_supply_all = total_supply_all.checked_add(value).expect(
                "should not exceed `U256::MAX` for `total_supply_all`",
            );
        }
        (supplies, total_supply_all)
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{uint, Address, Bytes, U256};
    use proptest::prelude::*;

    use super::{Erc1155Supply, IErc1155Supply};
    use crate::{
        token::erc1155::{
            extensions::IErc1155Burnable,
            tests::{
                random_token_ids, random_values, FixedReceiver, ALICE, BOB,
                CHARLIE,
            },
            utils::Erc1155Holder,
            ERC1155InvalidReceiver, ERC1155InvalidSender, Error, IErc1155,
            TransferBatch,
        },
        utils::{introspection::erc165::IErc165, Context},
    };

    /// Mints `1..=size` units of ids `0..size` to `holder`.
    fn funded(holder: Address, size: usize) -> (Erc1155Supply, Vec<U256>, Vec<U256>) {
        let mut contract = Erc1155Supply::default();
        let ids = random_token_ids(size);
        let values = random_values(size);
        contract
            ._mint_batch(&Context::new(ALICE), holder, ids.clone(), values.clone(), &Bytes::new())
            .expect("should mint");
        (contract, ids, values)
    }

    #[test]
    fn unknown_id_has_no_supply() {
        let contract = Erc1155Supply::default();
        assert_eq!(U256::ZERO, contract.total_supply(uint!(9_U256)));
        assert_eq!(U256::ZERO, contract.total_supply_all());
        assert!(!contract.exists(uint!(9_U256)));
    }

    #[test]
    fn mint_raises_supply() {
        for size in [1, 4] {
            let (contract, ids, values) = funded(BOB, size);
            for (&id, &value) in ids.iter().zip(&values) {
                assert_eq!(value, contract.balance_of(BOB, id));
                assert_eq!(value, contract.total_supply(id));
                assert!(contract.exists(id));
            }
            let sum: U256 = values.iter().sum();
            assert_eq!(sum, contract.total_supply_all());
        }
    }

    #[test]
    fn refused_mint_leaves_supply_untouched() {
        let mut contract = Erc1155Supply::default();
        let alice = Context::new(ALICE);
        contract.register_receiver(CHARLIE, FixedReceiver(Err(Vec::new())));
        assert!(contract.has_receiver(CHARLIE));

        let err = contract
            ._mint(&alice, Address::ZERO, uint!(1_U256), uint!(5_U256), &Bytes::new())
            .expect_err("should not mint to the zero account");
        assert!(matches!(
            err,
            Error::InvalidReceiver(ERC1155InvalidReceiver { receiver })
                if receiver.is_zero()
        ));

        let err = contract
            ._mint(&alice, CHARLIE, uint!(1_U256), uint!(5_U256), &Bytes::new())
            .expect_err("should not mint to a refusing hook");
        assert!(matches!(err, Error::InvalidReceiver(_)));

        assert_eq!(U256::ZERO, contract.total_supply(uint!(1_U256)));
        assert_eq!(U256::ZERO, contract.total_supply_all());
    }

    #[test]
    #[should_panic = "should not exceed `U256::MAX` for `total_supply`"]
    fn mint_panics_on_total_supply_overflow() {
        let mut contract = Erc1155Supply::default();
        let ctx = Context::new(ALICE);
        let id = uint!(1_U256);
        let half = U256::MAX / uint!(2_U256);
        contract._mint(&ctx, ALICE, id, half, &Bytes::new()).expect("should mint to Alice");
        contract._mint(&ctx, BOB, id, half, &Bytes::new()).expect("should mint to Bob");
        _ = contract._mint(&ctx, ALICE, id, uint!(3_U256), &Bytes::new());
    }

    #[test]
    #[should_panic = "should not exceed `U256::MAX` for `total_supply_all`"]
    fn mint_panics_on_total_supply_all_overflow() {
        let mut contract = Erc1155Supply::default();
        let ctx = Context::new(ALICE);
        contract
            ._mint(&ctx, ALICE, uint!(1_U256), U256::MAX, &Bytes::new())
            .expect("should mint");
        _ = contract._mint(&ctx, ALICE, uint!(2_U256), uint!(1_U256), &Bytes::new());
    }

    #[test]
    fn burn_lowers_supply() {
        for size in [1, 4] {
            let (mut contract, ids, values) = funded(ALICE, size);
            contract
                ._burn_batch(&Context::new(ALICE), ALICE, ids.clone(), values)
                .expect("should burn");

            for &id in &ids {
                assert_eq!(U256::ZERO, contract.balance_of(ALICE, id));
                assert_eq!(U256::ZERO, contract.total_supply(id));
                assert!(!contract.exists(id));
            }
            assert_eq!(U256::ZERO, contract.total_supply_all());
        }
    }

    #[test]
    fn burn_from_zero_account_fails() {
        let (mut contract, ids, values) = funded(ALICE, 1);

        let err = contract
            ._burn(&Context::new(ALICE), Address::ZERO, ids[0], values[0])
            .expect_err("should not burn from the zero account");

        assert!(matches!(
            err,
            Error::InvalidSender(ERC1155InvalidSender { sender }) if sender.is_zero()
        ));
        assert_eq!(values[0], contract.total_supply(ids[0]));
    }

    fn assert_supply_matches_balances(contract: &Erc1155Supply, id: U256) {
        let held: U256 = [ALICE, BOB, CHARLIE]
            .iter()
            .map(|&holder| contract.balance_of(holder, id))
            .sum();
        assert_eq!(held, contract.total_supply(id));
        assert_eq!(held, contract.total_supply_all());
        assert_eq!(!held.is_zero(), contract.exists(id));
    }

    #[test]
    fn supply_follows_every_balance_change() {
        let mut contract = Erc1155Supply::default();
        let id = uint!(1_U256);
        let alice = Context::new(ALICE);
        contract.register_receiver(CHARLIE, Erc1155Holder);

        contract
            ._mint(&alice, ALICE, id, uint!(50_U256), &Bytes::new())
            .expect("should mint to Alice");
        assert_supply_matches_balances(&contract, id);

        contract
            .safe_transfer_from(
                &alice,
                ALICE,
                CHARLIE,
                id,
                uint!(20_U256),
                &Bytes::new(),
            )
            .expect("should transfer to Charlie");
        assert_supply_matches_balances(&contract, id);

        contract
            .burn(&alice, ALICE, id, uint!(30_U256))
            .expect("should burn Alice's tokens");
        assert_supply_matches_balances(&contract, id);

        contract
            ._mint(&alice, BOB, id, uint!(5_U256), &Bytes::new())
            .expect("should mint to Bob");
        contract
            .burn_batch(
                &Context::new(CHARLIE),
                CHARLIE,
                vec![id, id],
                vec![uint!(15_U256), uint!(5_U256)],
            )
            .expect("should burn Charlie's tokens");
        assert_supply_matches_balances(&contract, id);

        let err = contract
            ._burn(&alice, BOB, id, uint!(6_U256))
            .expect_err("should not burn more than Bob holds");
        assert!(matches!(err, Error::InsufficientBalance(_)));
        assert_supply_matches_balances(&contract, id);
        assert_eq!(uint!(5_U256), contract.total_supply(id));

        assert!(contract.logs().emits(&TransferBatch {
            operator: CHARLIE,
            from: CHARLIE,
            to: Address::ZERO,
            ids: vec![id, id],
            values: vec![uint!(15_U256), uint!(5_U256)],
        }));
        contract.clear_logs();
        assert!(contract.logs().is_empty());
    }

    #[test]
    fn transfer_keeps_supply() {
        let (mut contract, token_ids, values) = funded(ALICE, 2);

        contract
            .safe_batch_transfer_from(
                &Context::new(ALICE),
                ALICE,
                BOB,
                token_ids.clone(),
                values.clone(),
                &Bytes::new(),
            )
            .expect("should transfer tokens");

        for (&token_id, &value) in token_ids.iter().zip(values.iter()) {
            assert_eq!(value, contract.balance_of(BOB, token_id));
            assert_eq!(value, contract.total_supply(token_id));
        }
    }

    #[test]
    fn supports_interface() {
        assert!(Erc1155Supply::supports_interface(
            (<Erc1155Supply as IErc1155Supply>::INTERFACE_ID).into()
        ));
        assert!(Erc1155Supply::supports_interface(
            (<Erc1155Supply as IErc1155>::INTERFACE_ID).into()
        ));
        assert!(Erc1155Supply::supports_interface(
            (<Erc1155Supply as IErc165>::INTERFACE_ID).into()
        ));
        assert!(!Erc1155Supply::supports_interface(0x1234_5678_u32.into()));
    }

    /// One step of a random ledger history.
    #[derive(Debug, Clone)]
    enum Op {
        Mint { to: usize, id: u8, value: u64 },
        Burn { from: usize, id: u8, value: u64 },
        Transfer { from: usize, to: usize, id: u8, value: u64 },
    }

    const HOLDERS: [Address; 3] = [ALICE, BOB, CHARLIE];

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..3usize, 0..4u8, 0..1_000u64)
                .prop_map(|(to, id, value)| Op::Mint { to, id, value }),
            (0..3usize, 0..4u8, 0..1_000u64)
                .prop_map(|(from, id, value)| Op::Burn { from, id, value }),
            (0..3usize, 0..3usize, 0..4u8, 0..1_000u64).prop_map(
                |(from, to, id, value)| Op::Transfer { from, to, id, value }
            ),
        ]
    }

    fn apply(contract: &mut Erc1155Supply, op: &Op) {
        let _ = match *op {
            Op::Mint { to, id, value } => contract._mint(
                &Context::new(ALICE),
                HOLDERS[to],
                U256::from(id),
                U256::from(value),
                &Bytes::new(),
            ),
            Op::Burn { from, id, value } => contract._burn(
                &Context::new(HOLDERS[from]),
                HOLDERS[from],
                U256::from(id),
                U256::from(value),
            ),
            Op::Transfer { from, to, id, value } => contract
                .safe_transfer_from(
                    &Context::new(HOLDERS[from]),
                    HOLDERS[from],
                    HOLDERS[to],
                    U256::from(id),
                    U256::from(value),
                    &Bytes::new(),
                ),
        };
    }

    proptest! {
        #[test]
        fn supply_equals_sum_of_balances(
            ops in prop::collection::vec(op(), 0..40)
        ) {
            let mut contract = Erc1155Supply::default();
            for op in &ops {
                apply(&mut contract, op);
            }

            let mut total_supply_all = U256::ZERO;
            for id in 0..4u8 {
                let id = U256::from(id);
                let held: U256 = HOLDERS
                    .iter()
                    .map(|&holder| contract.balance_of(holder, id))
                    .sum();
                prop_assert_eq!(held, contract.total_supply(id));
                total_supply_all += held;
            }
            prop_assert_eq!(total_supply_all, contract.total_supply_all());
        }

        #[test]
        fn failed_batch_changes_nothing(
            minted in prop::collection::vec(1..1_000u64, 1..6),
            overdraw in 0..6usize
        ) {
            let mut contract = Erc1155Supply::default();
            let ids = random_token_ids(minted.len());
            let values: Vec<U256> =
                minted.iter().map(|&value| U256::from(value)).collect();
            contract
                ._mint_batch(
                    &Context::new(ALICE),
                    ALICE,
                    ids.clone(),
                    values.clone(),
                    &Bytes::new(),
                )
                .expect("should mint");

            let mut requested = values.clone();
            let overdrawn = overdraw % requested.len();
            requested[overdrawn] += U256::from(1);

            let result = contract.safe_batch_transfer_from(
                &Context::new(ALICE),
                ALICE,
                BOB,
                ids.clone(),
                requested,
                &Bytes::new(),
            );

            prop_assert!(
                matches!(result, Err(Error::InsufficientBalance(_)))
            );
            for (&id, &value) in ids.iter().zip(values.iter()) {
                prop_assert_eq!(value, contract.balance_of(ALICE, id));
                prop_assert_eq!(U256::ZERO, contract.balance_of(BOB, id));
                prop_assert_eq!(value, contract.total_supply(id));
            }
        }
    }
}
