//! # Transaction records
//!
//! The two wire records that make up a Spartancoin transaction, with
//! bit-exact binary encoding and strict decoding.
//!
//! ```text
//! sender.rs   — Sender: spend-input record (prev-tx hash, sequence,
//!               unlocking script, public key)
//! receiver.rs — Receiver: pay-to-key output record (amount, public key)
//! ```
//!
//! ## Wire layout
//!
//! Multi-byte integers are little-endian; variable-length fields carry a
//! CompactSize varint length prefix (see [`crate::varint`]).
//!
//! ```text
//! Sender:   [32B prev_tx_hash][4B sequence][varint|script][varint|DER key]
//! Receiver: [8B amount][varint|DER key]
//! ```
//!
//! ## Decoding contract
//!
//! `from_bytes` consumes the whole buffer or fails: a short fixed header, a
//! length prefix declaring more bytes than remain, trailing bytes after the
//! last field, and key bytes that fail to parse are all rejected with a
//! typed [`DecodeError`](crate::error::DecodeError). Decoders never return
//! a partially populated record, and decoded records own copies of every
//! byte field — nothing aliases the input buffer.

use crate::error::DecodeError;

pub mod receiver;
pub mod sender;

pub use receiver::Receiver;
pub use sender::{Sender, SEQUENCE_FINAL, TX_HASH_LEN};

/// Take `len` declared bytes from `data` at `*offset`, advancing the
/// offset on success. `short_msg` names the field in the error.
pub(crate) fn take_bytes<'a>(
    data: &'a [u8],
    offset: &mut usize,
    len: u64,
    short_msg: &'static str,
) -> Result<&'a [u8], DecodeError> {
    // Compare in u64: a hostile length prefix may not fit in usize.
    if len > (data.len() - *offset) as u64 {
        return Err(DecodeError::InvalidLength(short_msg));
    }
    let len = len as usize;
    let field = &data[*offset..*offset + len];
    *offset += len;
    Ok(field)
}
