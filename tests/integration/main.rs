//! Integration tests for the deployment and funding flows, driven against
//! the in-memory simulated ledger.

mod common;
mod deploy;
mod fund_me;
