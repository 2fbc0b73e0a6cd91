//! Variable-length integer codec.
//!
//! Spartancoin uses the CompactSize scheme: a one-byte discriminator
//! selects a total width of 1, 3, 5, or 9 bytes, and multi-byte payloads
//! are little-endian.
//!
//! | leading byte  | total width | value range        |
//! |---------------|-------------|--------------------|
//! | `0x00..=0xFC` | 1           | `0..=252`          |
//! | `0xFD`        | 3           | `0..=0xFFFF`       |
//! | `0xFE`        | 5           | `0..=0xFFFF_FFFF`  |
//! | `0xFF`        | 9           | `0..=u64::MAX`     |
//!
//! Two decode entry points exist on purpose and must not be collapsed.
//! [`read_varint`] is the streaming primitive used while parsing a larger
//! record: it consumes exactly one varint and reports how many bytes it
//! used, leaving the rest of the buffer to the caller. [`decode_varint`]
//! is the strict form for a buffer holding nothing but one varint: missing
//! *and* trailing bytes are both rejected.
//!
//! Decoding is width-driven only; a value written in a wider form than it
//! needs still decodes.

use crate::error::{DecodeError, EncodeError};

/// Encode `n` as a CompactSize varint.
///
/// The `u64` domain is exactly the legal range, so this cannot fail.
/// Callers holding signed or wider integers should go through
/// [`checked_encode_varint`].
pub fn encode_varint(n: u64) -> Vec<u8> {
    match n {
        0..=0xFC => vec![n as u8],
        0xFD..=0xFFFF => {
            let mut out = Vec::with_capacity(3);
            out.push(0xFD);
            out.extend_from_slice(&(n as u16).to_le_bytes());
            out
        }
        0x1_0000..=0xFFFF_FFFF => {
            let mut out = Vec::with_capacity(5);
            out.push(0xFE);
            out.extend_from_slice(&(n as u32).to_le_bytes());
            out
        }
        _ => {
            let mut out = Vec::with_capacity(9);
            out.push(0xFF);
            out.extend_from_slice(&n.to_le_bytes());
            out
        }
    }
}

/// Range-checked encode for integers of any width.
///
/// Negative values and values of 2^64 or more are rejected with
/// [`EncodeError::OutOfRange`] at the call site instead of being silently
/// truncated. No partial output is ever produced.
pub fn checked_encode_varint<T>(n: T) -> Result<Vec<u8>, EncodeError>
where
    T: TryInto<u64>,
{
    let n = n.try_into().map_err(|_| EncodeError::OutOfRange)?;
    Ok(encode_varint(n))
}

/// Read one varint from the front of `data`, returning the value and the
/// number of bytes consumed.
///
/// This is the streaming primitive: `data` may continue past the varint,
/// and the caller advances by the returned count. Fails with
/// [`DecodeError::InvalidVarint`] if the buffer ends before the width
/// implied by the discriminator byte.
pub fn read_varint(data: &[u8]) -> Result<(u64, usize), DecodeError> {
    let &first = data
        .first()
        .ok_or(DecodeError::InvalidVarint("empty buffer"))?;
    match first {
        0x00..=0xFC => Ok((u64::from(first), 1)),
        0xFD => {
            if data.len() < 3 {
                return Err(DecodeError::InvalidVarint("truncated 2-byte payload"));
            }
            Ok((u64::from(u16::from_le_bytes([data[1], data[2]])), 3))
        }
        0xFE => {
            if data.len() < 5 {
                return Err(DecodeError::InvalidVarint("truncated 4-byte payload"));
            }
            Ok((
                u64::from(u32::from_le_bytes([data[1], data[2], data[3], data[4]])),
                5,
            ))
        }
        0xFF => {
            if data.len() < 9 {
                return Err(DecodeError::InvalidVarint("truncated 8-byte payload"));
            }
            let mut payload = [0u8; 8];
            payload.copy_from_slice(&data[1..9]);
            Ok((u64::from_le_bytes(payload), 9))
        }
    }
}

/// Decode a buffer that must contain exactly one varint.
///
/// Built on [`read_varint`] plus an end-of-buffer check: the discriminator
/// byte's implied width must match the buffer length exactly.
pub fn decode_varint(data: &[u8]) -> Result<u64, DecodeError> {
    let (value, used) = read_varint(data)?;
    if used != data.len() {
        return Err(DecodeError::InvalidVarint("trailing bytes"));
    }
    Ok(value)
}
