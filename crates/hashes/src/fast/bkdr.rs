//! BKDR (Kernighan & Ritchie) multiplicative string hash.

use traits::Result;

/// `h = h * seed + byte`, seed 131 by default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bkdr {
  seed: u32,
  state: u32,
}

impl Bkdr {
  pub const DEFAULT_SEED: u32 = 131;

  #[must_use]
  pub const fn with_seed(seed: u32) -> Self {
    Self { seed, state: 0 }
  }

  #[inline]
  #[must_use]
  pub const fn seed(&self) -> u32 {
    self.seed
  }

  pub fn set_seed(&mut self, seed: u32) -> Result<()> {
    *self = Self::with_seed(seed);
    Ok(())
  }

  #[inline]
  const fn initial(&self) -> u32 {
    0
  }

  #[inline]
  const fn step(&self, h: u32, byte: u8) -> u32 {
    h.wrapping_mul(self.seed).wrapping_add(byte as u32)
  }
}

impl Default for Bkdr {
  fn default() -> Self {
    Self::with_seed(Self::DEFAULT_SEED)
  }
}

byte_hash32!(Bkdr);

#[cfg(test)]
mod tests {
  use traits::HashTransform;

  use super::*;

  #[test]
  fn known_values() {
    let mut t = HashTransform::new(Bkdr::default());
    assert_eq!(t.compute_hash(b"ab").unwrap().to_u64_le(), Some(12_805));
    let mut t = HashTransform::new(Bkdr::with_seed(31));
    assert_eq!(t.compute_hash(b"ab").unwrap().to_u64_le(), Some(97 * 31 + 98));
  }
}
