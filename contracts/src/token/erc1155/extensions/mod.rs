//! Common extensions to the ERC-1155 standard.
pub mod burnable;
pub mod supply;

pub use burnable::IErc1155Burnable;
pub use supply::{Erc1155Supply, IErc1155Supply};
