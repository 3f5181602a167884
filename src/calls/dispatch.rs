//! Dispatch call encoding
//!
//! Builds the SCALE payloads the dispatch precompile accepts as EVM
//! transaction data: `pallet_index ++ call_index ++ arguments`, with each
//! argument encoded per its declared shape. The call set is small and
//! closed, so every variant gets an explicit builder rather than a
//! generic schema system.

use crate::address::AccountId32;
use crate::codec::{push_bytes, push_compact, push_fixed, push_u128_le, push_u8};
use crate::constants::{
    DEMOCRACY_PALLET_INDEX, DEMOCRACY_VOTE_CALL_INDEX, SYSTEM_PALLET_INDEX,
    SYSTEM_REMARK_CALL_INDEX,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// High bit of the vote byte; set for an aye vote.
const AYE_BIT: u8 = 0x80;

/// Discriminant for a standard (not split) vote in the account-vote tuple.
const STANDARD_VOTE: u128 = 0;

/// Call encoding errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CallError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Lock multiplier carried in the low bits of the vote byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Conviction {
    /// No lock, 0.1x weight
    None,
    Locked1x,
    Locked2x,
    Locked3x,
    Locked4x,
    Locked5x,
    Locked6x,
}

impl Conviction {
    /// Wire value, occupying the low seven bits of the vote byte
    pub fn bits(self) -> u8 {
        match self {
            Conviction::None => 0,
            Conviction::Locked1x => 1,
            Conviction::Locked2x => 2,
            Conviction::Locked3x => 3,
            Conviction::Locked4x => 4,
            Conviction::Locked5x => 5,
            Conviction::Locked6x => 6,
        }
    }
}

/// Finished wire form of a dispatch call, ready to be embedded as the
/// `data` field of a transaction to [`crate::constants::DISPATCH_GATEWAY`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedCall(Vec<u8>);

impl EncodedCall {
    /// Get as bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume into the underlying bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Encoded length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length payload (never produced by the builders)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert to a `0x`-prefixed hex string
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.0))
    }
}

impl fmt::Display for EncodedCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// One dispatchable extrinsic, described before encoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchCall {
    /// System.remark - post an arbitrary note on chain
    Remark { text: String },
    /// Democracy.vote - standard vote on a referendum
    Vote {
        referendum_index: u32,
        aye: bool,
        conviction: Conviction,
        amount: u128,
    },
    /// Merit send - transfer to a 32-byte recipient
    Transfer {
        pallet_index: u8,
        call_index: u8,
        to: AccountId32,
        amount: u128,
    },
}

impl DispatchCall {
    /// Encode into the exact payload the precompile expects.
    pub fn encode(&self) -> EncodedCall {
        match self {
            DispatchCall::Remark { text } => encode_remark(text),
            DispatchCall::Vote {
                referendum_index,
                aye,
                conviction,
                amount,
            } => encode_vote(*referendum_index, *aye, *conviction, *amount),
            DispatchCall::Transfer {
                pallet_index,
                call_index,
                to,
                amount,
            } => encode_transfer(*pallet_index, *call_index, to, *amount),
        }
    }
}

/// Encode a System.remark call.
///
/// Layout: `0x00 0x00 ++ compact(len) ++ utf8 bytes`.
pub fn encode_remark(text: &str) -> EncodedCall {
    let mut buf = Vec::with_capacity(2 + 1 + text.len());
    push_u8(&mut buf, SYSTEM_PALLET_INDEX);
    push_u8(&mut buf, SYSTEM_REMARK_CALL_INDEX);
    push_bytes(&mut buf, text.as_bytes());
    EncodedCall(buf)
}

/// Encode a Democracy.vote call for a standard (not split) vote.
///
/// Layout: `0x0a 0x02 ++ compact(referendum_index) ++ compact(0) ++
/// vote_byte ++ u128 LE amount`. The vote byte packs the conviction into
/// the low bits with the aye flag in the high bit.
pub fn encode_vote(
    referendum_index: u32,
    aye: bool,
    conviction: Conviction,
    amount: u128,
) -> EncodedCall {
    let vote_byte = if aye {
        conviction.bits() | AYE_BIT
    } else {
        conviction.bits() & !AYE_BIT
    };

    let mut buf = Vec::with_capacity(2 + 5 + 1 + 1 + 16);
    push_u8(&mut buf, DEMOCRACY_PALLET_INDEX);
    push_u8(&mut buf, DEMOCRACY_VOTE_CALL_INDEX);
    push_compact(&mut buf, referendum_index as u128);
    push_compact(&mut buf, STANDARD_VOTE);
    push_u8(&mut buf, vote_byte);
    push_u128_le(&mut buf, amount);
    EncodedCall(buf)
}

/// Encode a fixed-recipient transfer call.
///
/// Layout: `pallet ++ call ++ 32 raw recipient bytes ++ u128 LE amount`.
/// The pallet and call indices are caller-supplied so any transfer with
/// this layout can reuse the builder; the merit-token send uses
/// ([`crate::constants::MERIT_PALLET_INDEX`],
/// [`crate::constants::MERIT_SEND_CALL_INDEX`]).
pub fn encode_transfer(
    pallet_index: u8,
    call_index: u8,
    to: &AccountId32,
    amount: u128,
) -> EncodedCall {
    let mut buf = Vec::with_capacity(2 + 32 + 16);
    push_u8(&mut buf, pallet_index);
    push_u8(&mut buf, call_index);
    push_fixed(&mut buf, to.as_bytes());
    push_u128_le(&mut buf, amount);
    EncodedCall(buf)
}

/// [`encode_transfer`] over a raw recipient slice.
///
/// Fails with [`CallError::InvalidArgument`] unless the recipient is
/// exactly 32 bytes.
pub fn encode_transfer_raw(
    pallet_index: u8,
    call_index: u8,
    to: &[u8],
    amount: u128,
) -> Result<EncodedCall, CallError> {
    let to = AccountId32::from_slice(to).map_err(|e| CallError::InvalidArgument(e.to_string()))?;
    Ok(encode_transfer(pallet_index, call_index, &to, amount))
}
