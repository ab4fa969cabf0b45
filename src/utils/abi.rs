//! Minimal ABI encoding for the narrow call surface this harness touches.
//!
//! The FundMe contract only ever crosses this boundary with address and
//! uint256 arguments, so calldata is built by hand from the method signature
//! selector and 32-byte words instead of generating bindings for an external
//! ABI the harness does not own.

use alloy::primitives::{keccak256, Address, Bytes, U256};
use thiserror::Error;

use crate::models::CallArg;

#[derive(Error, Debug)]
pub enum AbiError {
    #[error("Return data too short: got {0} bytes, expected at least 32")]
    ShortReturnData(usize),
}

/// First four bytes of the keccak-256 hash of a canonical method signature,
/// e.g. `"fund()"` or `"s_funders(uint256)"`.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// ABI-encodes a single argument as a 32-byte word.
pub fn encode_word(arg: &CallArg) -> [u8; 32] {
    match arg {
        CallArg::Address(address) => {
            let mut word = [0u8; 32];
            word[12..].copy_from_slice(address.as_slice());
            word
        }
        CallArg::Uint(value) => value.to_be_bytes::<32>(),
    }
}

/// ABI-encodes an argument list without a selector, as appended to creation
/// bytecode for constructor arguments.
pub fn encode_args(args: &[CallArg]) -> Vec<u8> {
    let mut encoded = Vec::with_capacity(args.len() * 32);
    for arg in args {
        encoded.extend_from_slice(&encode_word(arg));
    }
    encoded
}

/// Builds full calldata for a method call: selector followed by the encoded
/// argument words.
pub fn encode_call(signature: &str, args: &[CallArg]) -> Bytes {
    let mut calldata = Vec::with_capacity(4 + args.len() * 32);
    calldata.extend_from_slice(&selector(signature));
    calldata.extend_from_slice(&encode_args(args));
    calldata.into()
}

/// Decodes a single address from the first return word.
pub fn decode_address(data: &[u8]) -> Result<Address, AbiError> {
    if data.len() < 32 {
        return Err(AbiError::ShortReturnData(data.len()));
    }
    Ok(Address::from_slice(&data[12..32]))
}

/// Decodes a single uint256 from the first return word.
pub fn decode_uint(data: &[u8]) -> Result<U256, AbiError> {
    if data.len() < 32 {
        return Err(AbiError::ShortReturnData(data.len()));
    }
    Ok(U256::from_be_slice(&data[..32]))
}
