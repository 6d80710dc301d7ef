//! Token standards.
pub mod erc1155;
