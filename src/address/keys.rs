//! Account key types
//!
//! The two address spaces use distinct nominal types so a 20-byte EVM
//! address can never be passed where a 32-byte Substrate key is expected
//! without an explicit conversion.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Address errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Invalid hex string")]
    InvalidHex,
}

/// 32-byte account key in the chain's primary (Substrate) address space
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId32(pub [u8; 32]);

/// 20-byte account key in the Ethereum-compatible address space
///
/// Produced by truncating an [`AccountId32`] or supplied by the EVM side;
/// never synthesised any other way.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvmAddress(pub [u8; 20]);

impl AccountId32 {
    /// Key length in bytes
    pub const LEN: usize = 32;

    /// Create from a fixed byte array
    pub const fn new(bytes: [u8; 32]) -> Self {
        AccountId32(bytes)
    }

    /// Create from a byte slice, checking the length
    pub fn from_slice(bytes: &[u8]) -> Result<Self, AddressError> {
        if bytes.len() != Self::LEN {
            return Err(AddressError::InvalidLength {
                expected: Self::LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(bytes);
        Ok(AccountId32(arr))
    }

    /// Parse from a hex string, with or without a `0x` prefix
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        Self::from_slice(&decode_hex(s)?)
    }

    /// Convert to a `0x`-prefixed hex string
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Get as bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl EvmAddress {
    /// Address length in bytes
    pub const LEN: usize = 20;

    /// Create from a fixed byte array
    pub const fn new(bytes: [u8; 20]) -> Self {
        EvmAddress(bytes)
    }

    /// Create from a byte slice, checking the length
    pub fn from_slice(bytes: &[u8]) -> Result<Self, AddressError> {
        if bytes.len() != Self::LEN {
            return Err(AddressError::InvalidLength {
                expected: Self::LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 20];
        arr.copy_from_slice(bytes);
        Ok(EvmAddress(arr))
    }

    /// Parse from a hex string, with or without a `0x` prefix
    pub fn from_hex(s: &str) -> Result<Self, AddressError> {
        Self::from_slice(&decode_hex(s)?)
    }

    /// Convert to a `0x`-prefixed hex string
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Get as bytes
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl TryFrom<&[u8]> for AccountId32 {
    type Error = AddressError;

    fn try_from(bytes: &[u8]) -> Result<Self, AddressError> {
        Self::from_slice(bytes)
    }
}

impl TryFrom<&[u8]> for EvmAddress {
    type Error = AddressError;

    fn try_from(bytes: &[u8]) -> Result<Self, AddressError> {
        Self::from_slice(bytes)
    }
}

impl fmt::Debug for AccountId32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId32({})", self.to_hex())
    }
}

impl fmt::Display for AccountId32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EvmAddress({})", self.to_hex())
    }
}

impl fmt::Display for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Decode hex with an optional `0x` prefix. Odd-length input is rejected.
fn decode_hex(s: &str) -> Result<Vec<u8>, AddressError> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(s).map_err(|_| AddressError::InvalidHex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_exact_lengths() {
        assert!(AccountId32::from_slice(&[0u8; 32]).is_ok());
        assert!(EvmAddress::from_slice(&[0u8; 20]).is_ok());
    }

    #[test]
    fn test_from_slice_rejects_off_by_one() {
        for len in [31usize, 33] {
            let err = AccountId32::from_slice(&vec![0u8; len]).unwrap_err();
            assert_eq!(
                err,
                AddressError::InvalidLength {
                    expected: 32,
                    actual: len
                }
            );
        }
        for len in [19usize, 21] {
            let err = EvmAddress::from_slice(&vec![0u8; len]).unwrap_err();
            assert_eq!(
                err,
                AddressError::InvalidLength {
                    expected: 20,
                    actual: len
                }
            );
        }
    }

    #[test]
    fn test_hex_roundtrip() {
        let addr = EvmAddress::from_hex("0xd43593c715fdd31c61141abd04a99fd6822c8558").unwrap();
        assert_eq!(addr.to_hex(), "0xd43593c715fdd31c61141abd04a99fd6822c8558");

        // Prefix is optional on input
        let bare = EvmAddress::from_hex("d43593c715fdd31c61141abd04a99fd6822c8558").unwrap();
        assert_eq!(addr, bare);
    }

    #[test]
    fn test_hex_rejects_bad_input() {
        assert_eq!(
            EvmAddress::from_hex("0xzz3593c715fdd31c61141abd04a99fd6822c8558").unwrap_err(),
            AddressError::InvalidHex
        );
        // Odd number of digits
        assert_eq!(
            EvmAddress::from_hex("0xd43").unwrap_err(),
            AddressError::InvalidHex
        );
        // Valid hex, wrong width
        assert!(matches!(
            EvmAddress::from_hex("0xd435").unwrap_err(),
            AddressError::InvalidLength { expected: 20, actual: 2 }
        ));
    }
}
