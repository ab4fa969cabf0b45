pub mod abi;

mod units;
pub use units::*;
