//! # Models Module
//!
//! Contains core data structures and type definitions for the harness.

mod call;
pub use call::*;

mod deployment;
pub use deployment::*;

mod error;
pub use error::*;

mod network;
pub use network::*;
