//! Error types shared by every transform, cipher and checksum crate.
//!
//! Errors are returned at the call site and never logged or swallowed.
//! Individual crates may define additional errors as needed.

use core::fmt;

/// Failure of a transform, cipher, padding or configuration operation.
///
/// The variants follow the taxonomy used across the workspace:
///
/// | Variant | Raised for |
/// |---------|------------|
/// | [`OutOfRange`](Error::OutOfRange) | widths, round counts, hash sizes, offset/count ranges |
/// | [`InvalidArgument`](Error::InvalidArgument) | misaligned buffers, short outputs, malformed tables or IVs |
/// | [`InvalidOperation`](Error::InvalidOperation) | calls made in the wrong transform state |
/// | [`UnexpectedOperation`](Error::UnexpectedOperation) | reconfiguring a one-shot transform |
/// | [`Disposed`](Error::Disposed) | any call after `dispose()` |
/// | [`InvalidPadding`](Error::InvalidPadding) | padding bytes that fail validation |
/// | [`InvalidHex`](Error::InvalidHex) | hex strings that do not decode |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
  /// A numeric argument or a buffer range lies outside its valid domain.
  #[error("{0} is out of range")]
  OutOfRange(&'static str),

  /// An argument is malformed.
  #[error("invalid argument: {0}")]
  InvalidArgument(&'static str),

  /// The call is not valid in the current state.
  #[error("operation is not valid in the current state: {0}")]
  InvalidOperation(&'static str),

  /// The call is never valid for this kind of transform once it has been used.
  #[error("unexpected operation: {0}")]
  UnexpectedOperation(&'static str),

  /// The object has been disposed.
  #[error("object has been disposed")]
  Disposed,

  /// Padding bytes are malformed.
  #[error("padding is invalid and cannot be removed")]
  InvalidPadding,

  /// A hex string could not be decoded.
  #[error("invalid hex string")]
  InvalidHex,
}

/// Convenience alias used throughout the workspace.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Verification failed.
///
/// Returned when MAC verification fails. Intentionally opaque to prevent
/// timing side-channels.
///
/// # Examples
///
/// ```
/// use traits::VerificationError;
///
/// fn verify(computed: &[u8; 16], expected: &[u8; 16]) -> Result<(), VerificationError> {
///   // Real code: use constant-time comparison
///   if computed == expected {
///     Ok(())
///   } else {
///     Err(VerificationError::new())
///   }
/// }
///
/// let a = [0u8; 16];
/// let b = [1u8; 16];
/// assert!(verify(&a, &b).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct VerificationError;

impl VerificationError {
  /// Create a new verification error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for VerificationError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for VerificationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("verification failed")
  }
}

impl core::error::Error for VerificationError {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn verification_display_message() {
    assert_eq!(VerificationError::new().to_string(), "verification failed");
  }

  #[test]
  fn verification_debug_impl() {
    let dbg = format!("{:?}", VerificationError::new());
    assert_eq!(dbg, "VerificationError");
  }

  #[test]
  fn verification_default_impl() {
    let err: VerificationError = Default::default();
    assert_eq!(err, VerificationError::new());
  }

  #[test]
  fn verification_size_is_zero() {
    assert_eq!(core::mem::size_of::<VerificationError>(), 0);
  }

  #[test]
  fn error_messages() {
    assert_eq!(Error::OutOfRange("width").to_string(), "width is out of range");
    assert_eq!(
      Error::InvalidArgument("input is not block aligned").to_string(),
      "invalid argument: input is not block aligned"
    );
    assert_eq!(
      Error::InvalidOperation("hash is not finalized").to_string(),
      "operation is not valid in the current state: hash is not finalized"
    );
    assert_eq!(Error::Disposed.to_string(), "object has been disposed");
    assert_eq!(Error::InvalidPadding.to_string(), "padding is invalid and cannot be removed");
  }

  #[test]
  fn error_is_distinct_per_kind() {
    assert_ne!(Error::InvalidOperation("x"), Error::UnexpectedOperation("x"));
    assert_ne!(Error::OutOfRange("x"), Error::InvalidArgument("x"));
  }

  #[test]
  fn trait_bounds() {
    fn assert_send_sync<T: Send + Sync + Copy + core::error::Error>() {}
    assert_send_sync::<Error>();
    assert_send_sync::<VerificationError>();
  }
}
