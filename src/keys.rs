//! secp256k1 public-key handling.
//!
//! Wire records embed public keys in X.509 SubjectPublicKeyInfo DER form.
//! The rest of the crate treats keys through this adapter only — derive
//! from a private key, serialize to DER, parse from DER, compare by key
//! material — so swapping the curve or the encoding standard touches this
//! module and nothing else.
//!
//! Private keys are [`k256::SecretKey`] values owned by the caller; this
//! crate never stores, serializes, or logs secret material.

use k256::pkcs8::{DecodePublicKey, EncodePublicKey};
use k256::SecretKey;
use rand::rngs::OsRng;
use std::fmt;
use thiserror::Error;

/// Errors from public-key parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The bytes are not a valid SubjectPublicKeyInfo encoding of a
    /// secp256k1 point.
    #[error("invalid public key encoding")]
    InvalidEncoding,
}

/// An owned secp256k1 public key together with its DER serialization.
///
/// The DER bytes are computed once at construction, so encoding a record
/// is infallible and never re-enters the DER writer. Equality is defined
/// on key material: a key parsed back from the wire compares equal to the
/// key it was derived from.
#[derive(Clone)]
pub struct PublicKey {
    point: k256::PublicKey,
    der: Vec<u8>,
}

impl PublicKey {
    /// Derive the public key for `private_key`.
    pub fn from_private_key(private_key: &SecretKey) -> Self {
        Self::from_point(private_key.public_key())
    }

    /// Parse a SubjectPublicKeyInfo DER buffer.
    ///
    /// Rejects anything that is not a well-formed SPKI wrapper around a
    /// valid secp256k1 curve point. The stored serialization is the
    /// canonical re-encoding, not the caller's buffer.
    pub fn from_der(der: &[u8]) -> Result<Self, KeyError> {
        let point =
            k256::PublicKey::from_public_key_der(der).map_err(|_| KeyError::InvalidEncoding)?;
        Ok(Self::from_point(point))
    }

    fn from_point(point: k256::PublicKey) -> Self {
        let der = point
            .to_public_key_der()
            .expect("SPKI encoding of a valid secp256k1 key must not fail")
            .as_bytes()
            .to_vec();
        Self { point, der }
    }

    /// The serialized form embedded in wire records.
    pub fn to_der(&self) -> &[u8] {
        &self.der
    }
}

impl PartialEq for PublicKey {
    /// Key-material equality. The cached DER is derived from the point,
    /// so comparing the point alone is sufficient.
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl Eq for PublicKey {}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.der))
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({}…)", &hex::encode(&self.der)[..16])
    }
}

/// Generate a fresh private key from the OS cryptographic RNG.
pub fn generate_private_key() -> SecretKey {
    SecretKey::random(&mut OsRng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_serialize_parse_roundtrip() {
        let private_key = generate_private_key();
        let public_key = PublicKey::from_private_key(&private_key);
        let parsed = PublicKey::from_der(public_key.to_der()).unwrap();
        assert_eq!(public_key, parsed);
    }

    #[test]
    fn der_is_an_spki_sequence() {
        let public_key = PublicKey::from_private_key(&generate_private_key());
        let der = public_key.to_der();
        // DER SEQUENCE tag, and room for the algorithm identifier plus an
        // uncompressed 65-byte curve point.
        assert_eq!(der[0], 0x30);
        assert!(der.len() > 65);
    }

    #[test]
    fn distinct_keys_compare_unequal() {
        let a = PublicKey::from_private_key(&generate_private_key());
        let b = PublicKey::from_private_key(&generate_private_key());
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_der_is_rejected() {
        assert_eq!(PublicKey::from_der(&[]), Err(KeyError::InvalidEncoding));
        assert_eq!(
            PublicKey::from_der(&[0x30, 0x03, 0x01, 0x01, 0xFF]),
            Err(KeyError::InvalidEncoding)
        );

        // Right length, corrupted content.
        let mut der = PublicKey::from_private_key(&generate_private_key())
            .to_der()
            .to_vec();
        let last = der.len() - 1;
        der[last] ^= 0xFF;
        assert!(PublicKey::from_der(&der).is_err());
    }

    #[test]
    fn debug_and_display_are_hex() {
        let public_key = PublicKey::from_private_key(&generate_private_key());
        assert!(public_key.to_string().starts_with("30"));
        assert!(format!("{public_key:?}").starts_with("PublicKey(30"));
    }
}
