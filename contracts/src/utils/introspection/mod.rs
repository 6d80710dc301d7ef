//! Standard interface detection.
pub mod erc165;
