//! The pay-to-key output record.

use std::fmt;

use k256::SecretKey;
use tracing::trace;

use super::take_bytes;
use crate::error::DecodeError;
use crate::keys::PublicKey;
use crate::varint::{encode_varint, read_varint};

/// Width of the amount field; no valid encoding is shorter than this.
const MIN_ENCODED_LEN: usize = 8;

/// A transaction output: an amount and the recipient's public key.
///
/// Immutable once built; equality is structural, so a decoded record
/// compares equal to the record that produced its encoding.
#[derive(Clone, PartialEq, Eq)]
pub struct Receiver {
    /// Amount transferred, in the smallest currency unit.
    pub amount: u64,
    /// The recipient's public key.
    pub public_key: PublicKey,
}

impl Receiver {
    /// Build a receiver from explicit fields.
    pub fn new(amount: u64, public_key: PublicKey) -> Self {
        Self { amount, public_key }
    }

    /// Build a receiver paying back to the holder of `private_key`.
    pub fn from_private_key(amount: u64, private_key: &SecretKey) -> Self {
        Self::new(amount, PublicKey::from_private_key(private_key))
    }

    /// Serialize to the wire layout: little-endian amount, then the
    /// varint-prefixed DER public key.
    pub fn encode(&self) -> Vec<u8> {
        let key = self.public_key.to_der();
        let key_len = encode_varint(key.len() as u64);

        let mut out = Vec::with_capacity(MIN_ENCODED_LEN + key_len.len() + key.len());
        out.extend_from_slice(&self.amount.to_le_bytes());
        out.extend_from_slice(&key_len);
        out.extend_from_slice(key);
        out
    }

    /// Parse a wire buffer produced by [`encode`](Self::encode).
    ///
    /// The whole buffer must be consumed: missing bytes and trailing
    /// bytes are both rejected.
    pub fn from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        if data.len() < MIN_ENCODED_LEN {
            trace!(len = data.len(), "receiver buffer shorter than amount");
            return Err(DecodeError::InvalidLength("buffer shorter than amount"));
        }
        let mut amount_bytes = [0u8; MIN_ENCODED_LEN];
        amount_bytes.copy_from_slice(&data[..MIN_ENCODED_LEN]);
        let amount = u64::from_le_bytes(amount_bytes);

        let mut offset = MIN_ENCODED_LEN;
        let (key_len, used) = read_varint(&data[offset..])?;
        offset += used;
        let key_bytes = take_bytes(
            data,
            &mut offset,
            key_len,
            "declared key length exceeds remaining bytes",
        )?;
        if offset != data.len() {
            trace!(extra = data.len() - offset, "trailing bytes after receiver");
            return Err(DecodeError::InvalidLength("trailing bytes after record"));
        }
        let public_key = PublicKey::from_der(key_bytes)
            .map_err(|_| DecodeError::InvalidLength("public key bytes failed to parse"))?;

        Ok(Self { amount, public_key })
    }
}

impl fmt::Debug for Receiver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Receiver")
            .field("amount", &self.amount)
            .field("public_key", &self.public_key)
            .finish()
    }
}
