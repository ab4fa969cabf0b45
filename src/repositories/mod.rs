//! # Repository Module
//!
//! Storage for deployment records. The registry is threaded through the
//! deployment sequence as an explicit argument rather than living behind a
//! process-wide global.

mod deployment;
pub use deployment::*;
