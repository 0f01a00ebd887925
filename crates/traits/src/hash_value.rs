//! Finalized digest values.

use alloc::{string::String, vec::Vec};
use core::{fmt, str::FromStr};

use zeroize::Zeroize;

use crate::error::Error;

/// A finalized, fixed-width digest.
///
/// The canonical textual form is uppercase hexadecimal without separators,
/// which round-trips through [`HashValue::from_hex`].
///
/// ```
/// use traits::HashValue;
///
/// let value = HashValue::new(vec![0xCB, 0xF4, 0x39, 0x26], 32);
/// assert_eq!(value.to_hex(), "CBF43926");
/// assert_eq!(HashValue::from_hex("cbf43926", 32)?, value);
/// # Ok::<(), traits::Error>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct HashValue {
  bytes: Vec<u8>,
  bits: usize,
}

impl HashValue {
  /// Wrap `bytes` as a digest of `bits` significant bits.
  #[must_use]
  pub fn new(bytes: Vec<u8>, bits: usize) -> Self {
    Self { bytes, bits }
  }

  /// Parse an uppercase or lowercase hex string.
  pub fn from_hex(hex: &str, bits: usize) -> Result<Self, Error> {
    let bytes = hex::decode(hex).map_err(|_| Error::InvalidHex)?;
    Ok(Self { bytes, bits })
  }

  /// Digest bytes.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    &self.bytes
  }

  /// Number of significant bits (may be less than `8 * len()` for odd CRC widths).
  #[inline]
  #[must_use]
  pub const fn bits(&self) -> usize {
    self.bits
  }

  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.bytes.len()
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.bytes.is_empty()
  }

  /// Uppercase hex rendering.
  #[must_use]
  pub fn to_hex(&self) -> String {
    hex::encode_upper(&self.bytes)
  }

  /// Interpret a digest of at most 8 bytes as a little-endian integer.
  #[must_use]
  pub fn to_u64_le(&self) -> Option<u64> {
    if self.bytes.len() > 8 {
      return None;
    }
    let mut buf = [0u8; 8];
    buf.get_mut(..self.bytes.len())?.copy_from_slice(&self.bytes);
    Some(u64::from_le_bytes(buf))
  }

  /// Interpret a digest of at most 16 bytes as a little-endian integer.
  #[must_use]
  pub fn to_u128_le(&self) -> Option<u128> {
    if self.bytes.len() > 16 {
      return None;
    }
    let mut buf = [0u8; 16];
    buf.get_mut(..self.bytes.len())?.copy_from_slice(&self.bytes);
    Some(u128::from_le_bytes(buf))
  }

  #[must_use]
  pub fn into_bytes(mut self) -> Vec<u8> {
    core::mem::take(&mut self.bytes)
  }
}

impl AsRef<[u8]> for HashValue {
  fn as_ref(&self) -> &[u8] {
    &self.bytes
  }
}

impl fmt::Display for HashValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.to_hex())
  }
}

impl fmt::Debug for HashValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "HashValue({}, {} bits)", self.to_hex(), self.bits)
  }
}

impl FromStr for HashValue {
  type Err = Error;

  /// Parses hex; the bit width is taken as `8 * bytes`.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let bytes = hex::decode(s).map_err(|_| Error::InvalidHex)?;
    let bits = bytes.len() * 8;
    Ok(Self { bytes, bits })
  }
}

impl Zeroize for HashValue {
  fn zeroize(&mut self) {
    self.bytes.zeroize();
    self.bits = 0;
  }
}
