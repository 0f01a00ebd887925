//! PJW / ELF object-file symbol hash, 32-bit and 64-bit.

use alloc::vec::Vec;

use traits::{BlockHash, Result, Reusable};
use zeroize::Zeroize;

/// ELF hash with a configurable starting value.
///
/// ```
/// use hashes::{HashTransform, fast::Elf};
///
/// let value = HashTransform::new(Elf::new()).compute_hash(b"abc")?;
/// assert_eq!(value.to_u64_le(), Some(26_499));
/// # Ok::<(), traits::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Elf {
  seed: u32,
  state: u32,
}

impl Elf {
  #[must_use]
  pub const fn new() -> Self {
    Self::with_seed(0)
  }

  #[must_use]
  pub const fn with_seed(seed: u32) -> Self {
    Self { seed, state: seed }
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
    self.seed
  }

  #[inline]
  const fn step(&self, h: u32, byte: u8) -> u32 {
    let h = (h << 4).wrapping_add(byte as u32);
    let high = h & 0xF000_0000;
    let h = if high != 0 { h ^ (high >> 24) } else { h };
    h & !high
  }
}

byte_hash32!(Elf);

/// 64-bit ELF hash: the top nibble is folded back in at bit 8 (`>> 56`).
///
/// ```
/// use hashes::{HashTransform, fast::Elf64};
///
/// let value = HashTransform::new(Elf64::new()).compute_hash(b"abcdefghijklmnopqrstuvwxyz")?;
/// assert_eq!(value.to_u64_le(), Some(0x0343_1F13_1712_EF2A));
/// # Ok::<(), traits::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Elf64 {
  seed: u64,
  state: u64,
}

impl Elf64 {
  const HIGH_NIBBLE: u64 = 0xF000_0000_0000_0000;

  #[must_use]
  pub const fn new() -> Self {
    Self::with_seed(0)
  }

  #[must_use]
  pub const fn with_seed(seed: u64) -> Self {
    Self { seed, state: seed }
  }

  #[inline]
  #[must_use]
  pub const fn seed(&self) -> u64 {
    self.seed
  }

  pub fn set_seed(&mut self, seed: u64) -> Result<()> {
    *self = Self::with_seed(seed);
    Ok(())
  }

  #[inline]
  const fn step(h: u64, byte: u8) -> u64 {
    let h = (h << 4).wrapping_add(byte as u64);
    let high = h & Self::HIGH_NIBBLE;
    let h = if high != 0 { h ^ (high >> 56) } else { h };
    h & !high
  }
}

impl Zeroize for Elf64 {
  fn zeroize(&mut self) {
    self.state.zeroize();
  }
}

impl BlockHash for Elf64 {
  fn block_size(&self) -> usize {
    1
  }

  fn hash_size(&self) -> usize {
    64
  }

  fn reset(&mut self) {
    self.state = self.seed;
  }

  fn process_block(&mut self, block: &[u8]) {
    self.state = block.iter().fold(self.state, |h, &b| Self::step(h, b));
  }

  fn process_blocks(&mut self, blocks: &[u8]) {
    self.process_block(blocks);
  }

  fn finalize(&mut self, remainder: &[u8], _total_len: u64) -> Vec<u8> {
    self.process_block(remainder);
    self.state.to_le_bytes().to_vec()
  }
}

impl Reusable for Elf64 {}

#[cfg(test)]
mod tests {
  use traits::{Error, HashTransform};

  use super::*;

  #[test]
  fn known_values() {
    let mut t = HashTransform::new(Elf::new());
    assert_eq!(t.compute_hash(b"").unwrap().to_u64_le(), Some(0));
    assert_eq!(t.compute_hash(b"abc").unwrap().to_u64_le(), Some(26_499));
  }

  #[test]
  fn high_nibble_is_folded_back() {
    // Eight bytes push bits into the top nibble.
    let value = HashTransform::new(Elf::new()).compute_hash(b"abcdefgh").unwrap();
    let h = value.to_u64_le().unwrap();
    assert_eq!(h & 0xF000_0000, 0);
  }

  #[test]
  fn seed_changes_digest_and_is_guarded() {
    let mut t = HashTransform::new(Elf::new());
    t.configure(|alg| alg.set_seed(0x0BAD_5EED)).unwrap();
    let seeded = t.compute_hash(b"abc").unwrap();
    assert_ne!(seeded, HashTransform::new(Elf::new()).compute_hash(b"abc").unwrap());
    assert_eq!(seeded, HashTransform::new(Elf::with_seed(0x0BAD_5EED)).compute_hash(b"abc").unwrap());

    t.initialize().unwrap();
    t.update(b"a").unwrap();
    assert!(matches!(t.configure(|alg| alg.set_seed(1)), Err(Error::InvalidOperation(_))));
    assert_eq!(t.algorithm().unwrap().seed(), 0x0BAD_5EED);
  }

  #[test]
  fn elf64_known_values() {
    let mut t = HashTransform::new(Elf64::new());
    assert_eq!(t.compute_hash(b"").unwrap().as_bytes(), &[0u8; 8]);
    assert_eq!(t.compute_hash(b"abc").unwrap().to_u64_le(), Some(26_499));
    let fox = t.compute_hash(b"The quick brown fox jumps over the lazy dog").unwrap();
    assert_eq!(fox.as_bytes(), &0x06CB_BC99_1206_6B07u64.to_le_bytes());
  }

  #[test]
  fn elf64_folds_into_bit_eight() {
    // The first byte reaches the top nibble after fifteen shifts.
    let value = HashTransform::new(Elf64::new()).compute_hash(b"abcdefghijklmnopq").unwrap();
    let h = value.to_u64_le().unwrap();
    assert_eq!(h & Elf64::HIGH_NIBBLE, 0);
    assert_ne!(h, HashTransform::new(Elf::new()).compute_hash(b"abcdefghijklmnopq").unwrap().to_u64_le().unwrap());
  }

  #[test]
  fn elf64_seed_is_guarded() {
    let mut t = HashTransform::new(Elf64::new());
    t.configure(|alg| alg.set_seed(0x0123_4567_89AB_CDEF)).unwrap();
    assert_eq!(t.compute_hash(b"abc").unwrap().to_u64_le(), Some(0x0456_789A_BCDF_45B3));

    t.initialize().unwrap();
    t.update(b"a").unwrap();
    assert!(matches!(t.configure(|alg| alg.set_seed(1)), Err(Error::InvalidOperation(_))));
    assert_eq!(t.algorithm().unwrap().seed(), 0x0123_4567_89AB_CDEF);
  }
}
