//! Substrate/EVM Bridge Core Library
//!
//! Pure helpers for a chain that exposes both a 32-byte Substrate account
//! model and a 20-byte Ethereum-compatible account model:
//!
//! - [`address`] maps between the two address spaces (truncation one way,
//!   a one-way BLAKE2b-256 derivation the other).
//! - [`codec`] implements the SCALE primitive encoders the runtime expects.
//! - [`calls`] builds the encoded extrinsic payloads accepted by the
//!   dispatch precompile on the EVM side.
//!
//! Everything here is deterministic and side-effect free. Wallet sessions,
//! transaction submission, and the SS58 text codec live outside this crate.

pub mod address;
pub mod calls;
pub mod codec;

/// Protocol constants - fixed by the runtime, never configurable
pub mod constants {
    use crate::address::EvmAddress;

    /// Precompile address that dispatches SCALE-encoded extrinsics
    /// submitted as EVM transaction data.
    pub const DISPATCH_GATEWAY: EvmAddress = EvmAddress([
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x06,
    ]);

    /// Domain-separation tag hashed in front of a 20-byte address when
    /// deriving its 32-byte Substrate identity. Keeps derived identities
    /// disjoint from keys chosen by any other means.
    pub const EVM_DOMAIN_TAG: &[u8; 4] = b"evm:";

    /// frame-system pallet index
    pub const SYSTEM_PALLET_INDEX: u8 = 0;

    /// `remark` call index within frame-system
    pub const SYSTEM_REMARK_CALL_INDEX: u8 = 0;

    /// pallet-democracy pallet index
    pub const DEMOCRACY_PALLET_INDEX: u8 = 10;

    /// `vote` call index within pallet-democracy
    pub const DEMOCRACY_VOTE_CALL_INDEX: u8 = 2;

    /// Merit-token pallet index
    pub const MERIT_PALLET_INDEX: u8 = 46;

    /// `send` call index within the merit-token pallet
    pub const MERIT_SEND_CALL_INDEX: u8 = 5;
}
