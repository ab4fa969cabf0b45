//! # Services Module
//!
//! Core harness logic: price feed resolution, contract deployment, and the
//! typed FundMe contract handle, all sitting on top of the ledger client
//! abstraction.

mod deployer;
pub use deployer::*;

mod fund_me;
pub use fund_me::*;

mod ledger;
pub use ledger::*;

mod resolver;
pub use resolver::*;
