//! Configuration system for the deployment harness.
//!
//! This module handles:
//! - Loading and parsing the networks config file
//! - Environment variable integration
//! - Configuration validation
//! - Type-safe config access

mod harness_config;
pub use harness_config::*;

mod config_file;
pub use config_file::*;

mod error;
pub use error::*;
