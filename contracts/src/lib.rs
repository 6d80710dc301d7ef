/*!
# ERC-1155 Ledger

A host-agnostic implementation of the [ERC-1155] multi-token standard.
The ledger keeps balances per `(token id, account)`, operator approvals per
`(owner, operator)`, and enforces the standard's authorization, recipient and
batch-shape rules on every transfer.

State lives in an explicit [`token::erc1155::Erc1155`] value owned by the
caller, and the identity of the account performing a call is passed in a
[`utils::Context`]. Nothing depends on a particular chain runtime, so the
whole ledger can be exercised from plain unit tests.

## Usage

```rust
use alloy_primitives::{address, uint, Address, Bytes};
use erc1155_ledger::{
    token::erc1155::{Erc1155, IErc1155},
    utils::Context,
};

const OWNER: Address = address!("A11CEacF9aa32246d767FCCD72e02d6bCbcC375d");
const OPERATOR: Address = address!("F4EaCDAbEf3c8f1EdE91b6f2A6840bc2E4DD3526");
const RECIPIENT: Address = address!("0BB78F7e7132d1651B4Fd884B7624394e92156F1");

let mut ledger = Erc1155::default();
let id = uint!(1_U256);
let value = uint!(100_U256);

ledger._mint(&Context::new(OWNER), OWNER, id, value, &Bytes::new())?;
ledger.set_approval_for_all(&Context::new(OWNER), OPERATOR, true)?;
ledger.safe_transfer_from(
    &Context::new(OPERATOR),
    OWNER,
    RECIPIENT,
    id,
    value,
    &Bytes::new(),
)?;

assert_eq!(ledger.balance_of(RECIPIENT, id), value);
# Ok::<(), erc1155_ledger::token::erc1155::Error>(())
```

[ERC-1155]: https://eips.ethereum.org/EIPS/eip-1155
*/

#![allow(clippy::pub_underscore_fields, clippy::module_name_repetitions)]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(rustdoc::broken_intra_doc_links)]
extern crate alloc;

pub mod token;
pub mod utils;
