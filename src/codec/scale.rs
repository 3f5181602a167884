//! SCALE primitive encoders
//!
//! Hand-written encoders for the handful of SCALE shapes the dispatch
//! calls need: fixed-width little-endian integers, compact integers,
//! length-prefixed byte sequences, and raw fixed-size arrays. Encoding
//! only - the runtime decodes, this crate never does.

/// Append a `u8` as a single byte.
pub fn push_u8(buf: &mut Vec<u8>, value: u8) {
    buf.push(value);
}

/// Append a `u128` as 16 little-endian bytes.
pub fn push_u128_le(buf: &mut Vec<u8>, value: u128) {
    buf.extend_from_slice(&value.to_le_bytes());
}

/// Append a compact-encoded unsigned integer.
///
/// The four SCALE compact modes, selected by magnitude and tagged in the
/// low two bits of the first byte:
///
/// - `0b00`: single byte, value in the high six bits (`v < 2^6`)
/// - `0b01`: two bytes LE (`v < 2^14`)
/// - `0b10`: four bytes LE (`v < 2^30`)
/// - `0b11`: length-tagged, followed by the value's minimal LE bytes
pub fn push_compact(buf: &mut Vec<u8>, value: u128) {
    match value {
        0..=0x3F => buf.push((value as u8) << 2),
        0x40..=0x3FFF => {
            buf.extend_from_slice(&(((value as u16) << 2) | 0b01).to_le_bytes());
        }
        0x4000..=0x3FFF_FFFF => {
            buf.extend_from_slice(&(((value as u32) << 2) | 0b10).to_le_bytes());
        }
        _ => {
            let bytes = value.to_le_bytes();
            let len = 16 - (value.leading_zeros() / 8) as usize;
            buf.push(0b11 | (((len - 4) as u8) << 2));
            buf.extend_from_slice(&bytes[..len]);
        }
    }
}

/// Append a dynamic byte sequence: compact length prefix, then the bytes.
pub fn push_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    push_compact(buf, bytes.len() as u128);
    buf.extend_from_slice(bytes);
}

/// Append a fixed-size array as raw bytes, no length prefix.
///
/// Both sides know the length statically, so none is encoded.
pub fn push_fixed(buf: &mut Vec<u8>, bytes: &[u8]) {
    buf.extend_from_slice(bytes);
}
