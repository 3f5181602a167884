//! Substrate/EVM address mapping
//!
//! The two directions are deliberately asymmetric. Substrate -> EVM keeps
//! the first 20 bytes of the public key and discards the remaining 12.
//! EVM -> Substrate hashes `"evm:" ++ address` with BLAKE2b-256 so that
//! accounts native to the EVM side get a deterministic 32-byte identity
//! that cannot collide with a genuine Substrate key. Round-tripping does
//! NOT recover the original key in either direction.

use crate::address::{AccountId32, AddressError, EvmAddress};
use crate::constants::EVM_DOMAIN_TAG;
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

type Blake2b256 = Blake2b<U32>;

/// Truncate a 32-byte Substrate key to its 20-byte EVM address.
pub fn substrate_to_evm(account: &AccountId32) -> EvmAddress {
    let mut addr = [0u8; 20];
    addr.copy_from_slice(&account.as_bytes()[..20]);
    EvmAddress(addr)
}

/// Derive the 32-byte Substrate key for a 20-byte EVM address.
///
/// Computes `BLAKE2b-256("evm:" ++ address)`. One-way: there is no
/// function that recovers the address from the derived key.
pub fn evm_to_substrate(address: &EvmAddress) -> AccountId32 {
    let mut preimage = [0u8; 24];
    preimage[..4].copy_from_slice(EVM_DOMAIN_TAG);
    preimage[4..].copy_from_slice(address.as_bytes());

    let digest = Blake2b256::digest(preimage);
    let mut key = [0u8; 32];
    key.copy_from_slice(digest.as_slice());
    AccountId32(key)
}

/// [`substrate_to_evm`] over a raw byte slice.
///
/// Fails with [`AddressError::InvalidLength`] unless the slice is exactly
/// 32 bytes.
pub fn substrate_to_evm_slice(bytes: &[u8]) -> Result<EvmAddress, AddressError> {
    let account = AccountId32::from_slice(bytes)?;
    Ok(substrate_to_evm(&account))
}

/// [`evm_to_substrate`] over a raw byte slice.
///
/// Fails with [`AddressError::InvalidLength`] unless the slice is exactly
/// 20 bytes.
pub fn evm_to_substrate_slice(bytes: &[u8]) -> Result<AccountId32, AddressError> {
    let address = EvmAddress::from_slice(bytes)?;
    Ok(evm_to_substrate(&address))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncation_keeps_first_20_bytes() {
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        let account = AccountId32::new(bytes);
        let addr = substrate_to_evm(&account);
        assert_eq!(addr.as_bytes(), &bytes[..20]);
    }

    #[test]
    fn test_derivation_known_vector() {
        // BLAKE2b-256("evm:" ++ d43593...8558), checked against the
        // runtime's account mapping.
        let addr = EvmAddress::from_hex("d43593c715fdd31c61141abd04a99fd6822c8558").unwrap();
        let account = evm_to_substrate(&addr);
        assert_eq!(
            account.to_hex(),
            "0xa7839fbfca6da129ff9e2ff521115b7eb4213b215086fc3416c7a340e944cc49"
        );
    }

    #[test]
    fn test_derivation_deterministic() {
        let addr = EvmAddress::new([0xab; 20]);
        assert_eq!(evm_to_substrate(&addr), evm_to_substrate(&addr));
    }

    #[test]
    fn test_domain_tag_participates_in_hash() {
        // Same 20-byte suffix hashed under a different tag must give a
        // different key, otherwise the domain separation is dead weight.
        let addr = EvmAddress::from_hex("d43593c715fdd31c61141abd04a99fd6822c8558").unwrap();

        let mut preimage = [0u8; 24];
        preimage[..4].copy_from_slice(b"EVM:");
        preimage[4..].copy_from_slice(addr.as_bytes());
        let digest = Blake2b256::digest(preimage);

        assert_ne!(&evm_to_substrate(&addr).as_bytes()[..], digest.as_slice());
    }

    #[test]
    fn test_mapping_is_not_a_round_trip() {
        let addr = EvmAddress::new([0x11; 20]);
        let derived = evm_to_substrate(&addr);
        // The hash output's first 20 bytes bear no relation to the input.
        assert_ne!(substrate_to_evm(&derived), addr);
    }

    #[test]
    fn test_slice_entry_points_check_length() {
        assert!(substrate_to_evm_slice(&[0u8; 32]).is_ok());
        assert!(matches!(
            substrate_to_evm_slice(&[0u8; 31]),
            Err(AddressError::InvalidLength { expected: 32, actual: 31 })
        ));
        assert!(matches!(
            substrate_to_evm_slice(&[0u8; 33]),
            Err(AddressError::InvalidLength { expected: 32, actual: 33 })
        ));

        assert!(evm_to_substrate_slice(&[0u8; 20]).is_ok());
        assert!(matches!(
            evm_to_substrate_slice(&[0u8; 19]),
            Err(AddressError::InvalidLength { expected: 20, actual: 19 })
        ));
        assert!(matches!(
            evm_to_substrate_slice(&[0u8; 21]),
            Err(AddressError::InvalidLength { expected: 20, actual: 21 })
        ));
    }
}
