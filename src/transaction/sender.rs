//! The spend-input record.

use std::fmt;

use k256::SecretKey;
use tracing::trace;

use super::take_bytes;
use crate::error::DecodeError;
use crate::keys::PublicKey;
use crate::varint::{encode_varint, read_varint};

/// Width of a previous-transaction hash on the wire.
pub const TX_HASH_LEN: usize = 32;

/// Sequence value marking an input as final. This is what the `-1`
/// sentinel becomes on the wire: `FF FF FF FF`.
pub const SEQUENCE_FINAL: u32 = u32::MAX;

/// Hash plus sequence; no valid encoding is shorter than this.
const MIN_ENCODED_LEN: usize = TX_HASH_LEN + 4;

/// A transaction input: a reference to a prior output, a sequence value,
/// an unlocking script, and the spender's public key.
///
/// Immutable once built; all byte fields are owned. Equality is
/// structural — byte-exact on the blobs, key-material-exact on the
/// public key — so a decoded record compares equal to the record that
/// produced its encoding.
#[derive(Clone, PartialEq, Eq)]
pub struct Sender {
    /// Hash of the transaction whose output this input spends.
    pub prev_tx_hash: [u8; TX_HASH_LEN],
    /// Sequence number, stored post-reduction mod 2^32.
    pub sequence: u32,
    /// The unlocking script. May be empty.
    pub script: Vec<u8>,
    /// The spender's public key.
    pub public_key: PublicKey,
}

impl Sender {
    /// Build a sender from explicit fields.
    ///
    /// `sequence` is reduced modulo 2^32: the `-1` sentinel becomes
    /// [`SEQUENCE_FINAL`], and any value already in `[0, 2^32)` passes
    /// through unchanged.
    pub fn new(
        prev_tx_hash: [u8; TX_HASH_LEN],
        sequence: i64,
        script: Vec<u8>,
        public_key: PublicKey,
    ) -> Self {
        Self {
            prev_tx_hash,
            sequence: sequence as u32,
            script,
            public_key,
        }
    }

    /// Build a sender directly from a private key, deriving the public
    /// key and defaulting the unlocking script to empty.
    pub fn from_private_key(
        prev_tx_hash: [u8; TX_HASH_LEN],
        sequence: i64,
        private_key: &SecretKey,
    ) -> Self {
        Self::new(
            prev_tx_hash,
            sequence,
            Vec::new(),
            PublicKey::from_private_key(private_key),
        )
    }

    /// Serialize to the wire layout: hash, little-endian sequence,
    /// varint-prefixed script, varint-prefixed DER public key.
    pub fn encode(&self) -> Vec<u8> {
        let key = self.public_key.to_der();
        let script_len = encode_varint(self.script.len() as u64);
        let key_len = encode_varint(key.len() as u64);

        let mut out = Vec::with_capacity(
            MIN_ENCODED_LEN + script_len.len() + self.script.len() + key_len.len() + key.len(),
        );
        out.extend_from_slice(&self.prev_tx_hash);
        out.extend_from_slice(&self.sequence.to_le_bytes());
        out.extend_from_slice(&script_len);
        out.extend_from_slice(&self.script);
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
            trace!(len = data.len(), "sender buffer shorter than fixed header");
            return Err(DecodeError::InvalidLength(
                "buffer shorter than hash + sequence",
            ));
        }
        let mut prev_tx_hash = [0u8; TX_HASH_LEN];
        prev_tx_hash.copy_from_slice(&data[..TX_HASH_LEN]);
        let sequence = u32::from_le_bytes([data[32], data[33], data[34], data[35]]);

        let mut offset = MIN_ENCODED_LEN;
        let (script_len, used) = read_varint(&data[offset..])?;
        offset += used;
        let script = take_bytes(
            data,
            &mut offset,
            script_len,
            "declared script length exceeds remaining bytes",
        )?
        .to_vec();

        let (key_len, used) = read_varint(&data[offset..])?;
        offset += used;
        let key_bytes = take_bytes(
            data,
            &mut offset,
            key_len,
            "declared key length exceeds remaining bytes",
        )?;
        if offset != data.len() {
            trace!(extra = data.len() - offset, "trailing bytes after sender");
            return Err(DecodeError::InvalidLength("trailing bytes after record"));
        }
        let public_key = PublicKey::from_der(key_bytes)
            .map_err(|_| DecodeError::InvalidLength("public key bytes failed to parse"))?;

        Ok(Self {
            prev_tx_hash,
            sequence,
            script,
            public_key,
        })
    }
}

impl fmt::Debug for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sender")
            .field("prev_tx_hash", &hex::encode(self.prev_tx_hash))
            .field("sequence", &self.sequence)
            .field("script", &hex::encode(&self.script))
            .field("public_key", &self.public_key)
            .finish()
    }
}
