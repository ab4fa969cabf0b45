//! This module contains all the constant values used in the system
mod contracts;
pub use contracts::*;

mod price_feed;
pub use price_feed::*;
