//! # Spartancoin — transaction wire codec
//!
//! The binary encoding and decoding of Spartancoin's fundamental
//! transaction records: a self-describing variable-length integer
//! ([`varint`]), a spend-input descriptor ([`Sender`]), and a pay-to-key
//! output descriptor ([`Receiver`]).
//!
//! ## Architecture
//!
//! - **varint** — CompactSize integer codec, with separate streaming and
//!   strict-whole-buffer decode entry points.
//! - **keys** — secp256k1 public keys behind a small adapter: derivation,
//!   SubjectPublicKeyInfo DER serialization, key-material equality.
//! - **transaction** — the `Sender` and `Receiver` records with bit-exact
//!   `encode` / `from_bytes`.
//! - **error** — the shared [`DecodeError`] taxonomy.
//!
//! ## Design notes
//!
//! 1. Decoding is all-or-nothing: a buffer either yields a complete record
//!    or a typed error. Missing bytes, trailing bytes, and unparseable key
//!    material are all rejected.
//! 2. Records are owned value types. Inputs are copied at construction,
//!    so nothing in a record aliases a caller's buffer and every operation
//!    is freely parallel.
//! 3. Signing, chain validation, and networking live elsewhere; this crate
//!    is only the wire format.
//!
//! ## Example
//!
//! ```
//! use spartancoin::{generate_private_key, Receiver, Sender};
//!
//! let key = generate_private_key();
//! let sender = Sender::from_private_key([0u8; 32], -1, &key);
//! let receiver = Receiver::from_private_key(50, &key);
//!
//! assert_eq!(Sender::from_bytes(&sender.encode()).unwrap(), sender);
//! assert_eq!(Receiver::from_bytes(&receiver.encode()).unwrap(), receiver);
//! ```

pub mod error;
pub mod keys;
pub mod transaction;
pub mod varint;

pub use error::{DecodeError, EncodeError};
pub use keys::{generate_private_key, KeyError, PublicKey};
pub use transaction::{Receiver, Sender, SEQUENCE_FINAL, TX_HASH_LEN};
pub use varint::{checked_encode_varint, decode_varint, encode_varint, read_varint};
