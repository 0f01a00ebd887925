//! Bernstein (djb) multiplicative hashes.
//!
//! Both start from zero and multiply by 33 per byte; the modified variant
//! XORs the byte in instead of adding it.

/// `h = 33 * h + byte`
///
/// ```
/// use hashes::{HashTransform, fast::Bernstein};
///
/// let value = HashTransform::new(Bernstein::new()).compute_hash(b"abc")?;
/// assert_eq!(value.to_u64_le(), Some(108_966));
/// # Ok::<(), traits::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bernstein {
  state: u32,
}

impl Bernstein {
  #[must_use]
  pub const fn new() -> Self {
    Self { state: 0 }
  }

  #[inline]
  const fn initial(&self) -> u32 {
    0
  }

  #[inline]
  const fn step(&self, h: u32, byte: u8) -> u32 {
    h.wrapping_mul(33).wrapping_add(byte as u32)
  }
}

byte_hash32!(Bernstein);

/// `h = 33 * h ^ byte`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModifiedBernstein {
  state: u32,
}

impl ModifiedBernstein {
  #[must_use]
  pub const fn new() -> Self {
    Self { state: 0 }
  }

  #[inline]
  const fn initial(&self) -> u32 {
    0
  }

  #[inline]
  const fn step(&self, h: u32, byte: u8) -> u32 {
    h.wrapping_mul(33) ^ byte as u32
  }
}

byte_hash32!(ModifiedBernstein);

#[cfg(test)]
mod tests {
  use traits::HashTransform;

  use super::*;

  fn bernstein(data: &[u8]) -> u64 {
    HashTransform::new(Bernstein::new()).compute_hash(data).unwrap().to_u64_le().unwrap()
  }

  fn modified(data: &[u8]) -> u64 {
    HashTransform::new(ModifiedBernstein::new()).compute_hash(data).unwrap().to_u64_le().unwrap()
  }

  #[test]
  fn known_values() {
    assert_eq!(bernstein(b""), 0);
    assert_eq!(bernstein(b"a"), 97);
    assert_eq!(bernstein(b"abc"), 108_966);
    assert_eq!(modified(b"abc"), 108_832);
  }

  #[test]
  fn wraps_on_long_input() {
    let data = [0xFFu8; 64];
    let expected = data.iter().fold(0u32, |h, &b| h.wrapping_mul(33).wrapping_add(u32::from(b)));
    assert_eq!(bernstein(&data), u64::from(expected));
  }
}
