//! Utilities for implementing and testing ERC-1155 receivers.
pub mod holder;

pub use holder::Erc1155Holder;
