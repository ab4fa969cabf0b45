//! FundMe Deployment Harness Library
//!
//! This library provides the machinery for deploying the FundMe contract and
//! driving it through funding and withdrawal flows. It includes:
//!
//! - Configuration management through JSON files and environment variables
//! - Per-network price feed resolution (mock aggregator on development
//!   networks, statically configured feeds elsewhere)
//! - A ledger client abstraction over the external blockchain runtime, with
//!   an HTTP JSON-RPC implementation and an in-memory simulated ledger
//! - A deployment registry persisted per network
//!
//! # Module Structure
//!
//! - `config`: Configuration management
//! - `logging`: Logging setup
//! - `models`: Data structures for networks, deployments and errors
//! - `repositories`: Deployment registry storage
//! - `services`: Price feed resolution, contract deployment and interaction
//! - `utils`: ABI encoding and unit helpers

pub mod config;
pub mod constants;
pub mod logging;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;
