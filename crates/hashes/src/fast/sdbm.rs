//! SDBM database library hash.

/// `h = byte + (h << 6) + (h << 16) - h`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sdbm {
  state: u32,
}

impl Sdbm {
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
    (byte as u32).wrapping_add(h << 6).wrapping_add(h << 16).wrapping_sub(h)
  }
}

byte_hash32!(Sdbm);

#[cfg(test)]
mod tests {
  use traits::HashTransform;

  use super::*;

  #[test]
  fn known_values() {
    let mut t = HashTransform::new(Sdbm::new());
    assert_eq!(t.compute_hash(b"a").unwrap().to_u64_le(), Some(97));
    assert_eq!(t.compute_hash(b"ab").unwrap().to_u64_le(), Some(6_363_201));
  }

  #[test]
  fn matches_multiply_by_65599() {
    let data = b"the sdbm recurrence is h * 65599 + c";
    let expected = data.iter().fold(0u32, |h, &b| h.wrapping_mul(65_599).wrapping_add(u32::from(b)));
    let value = HashTransform::new(Sdbm::new()).compute_hash(data).unwrap();
    assert_eq!(value.to_u64_le(), Some(u64::from(expected)));
  }
}
