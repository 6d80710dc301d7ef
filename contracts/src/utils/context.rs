//! Execution context of a call into the ledger.

use alloy_primitives::Address;

/// Information about the call currently being executed.
///
/// The ledger never reads the caller from ambient state. Every entry point
/// that needs to know who is calling receives a [`Context`] instead, which
/// plays the role of `msg.sender` on an EVM chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Context {
    msg_sender: Address,
}

impl Context {
    /// Creates a context for a call made by `msg_sender`.
    #[must_use]
    pub const fn new(msg_sender: Address) -> Self {
        Self { msg_sender }
    }

    /// Returns the address of the message sender.
    #[must_use]
    pub const fn msg_sender(&self) -> Address {
        self.msg_sender
    }
}

impl From<Address> for Context {
    fn from(msg_sender: Address) -> Self {
        Self::new(msg_sender)
    }
}
