//! Typed arguments crossing the ledger client boundary.

use alloy::primitives::{Address, U256};

/// A constructor or method argument. The contract surface this harness
/// touches only ever passes addresses and uint256 values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallArg {
    Address(Address),
    Uint(U256),
}
