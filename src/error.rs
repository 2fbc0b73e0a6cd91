//! Error types shared by the wire-format codecs.
//!
//! Every decoder in this crate returns a [`DecodeError`] on rejection. The
//! taxonomy is deliberately coarse: two classes are enough to tell a
//! malformed varint prefix apart from every other way a buffer can be the
//! wrong size. All decode failures are deterministic and non-retryable —
//! the caller should treat the input as corrupt and discard it. No partial
//! record is ever produced.

use thiserror::Error;

/// Errors that can occur while decoding a wire-format buffer.
///
/// The embedded string is a short static reason for log output and test
/// assertions; the failure *class* is the variant itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A variable-length integer prefix is malformed: the buffer ends
    /// before the width implied by the discriminator byte is satisfied,
    /// or a standalone varint buffer carries leftover bytes.
    #[error("invalid varint: {0}")]
    InvalidVarint(&'static str),

    /// Any other length-related failure: a buffer shorter than a fixed
    /// header, a length-prefixed field declaring more bytes than remain,
    /// trailing bytes after a fully consumed record, or key bytes that
    /// fail to parse under their declared length.
    #[error("invalid length: {0}")]
    InvalidLength(&'static str),
}

/// Errors that can occur while encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The integer cannot be represented on the wire: varints cover
    /// exactly `[0, 2^64)`.
    #[error("varint out of range: value must be in [0, 2^64)")]
    OutOfRange,
}
