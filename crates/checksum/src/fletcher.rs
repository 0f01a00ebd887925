//! Fletcher checksums over 8-, 16- and 32-bit little-endian words.
//!
//! | Width | Word | Modulus | Digest |
//! |-------|------|---------|--------|
//! | 16 | `u8` | 255 | `u16` |
//! | 32 | `u16` | 65 535 | `u32` |
//! | 64 | `u32` | 4 294 967 295 | `u64` |
//!
//! A trailing partial word is zero-padded.

use traits::{BlockHash, Result, Reusable};
use zeroize::Zeroize;

/// Output width of a [`Fletcher`] checksum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FletcherWidth {
  Bits16,
  #[default]
  Bits32,
  Bits64,
}

impl FletcherWidth {
  /// Word size in bytes.
  #[inline]
  #[must_use]
  pub const fn word_len(self) -> usize {
    match self {
      Self::Bits16 => 1,
      Self::Bits32 => 2,
      Self::Bits64 => 4,
    }
  }

  #[inline]
  const fn modulus(self) -> u64 {
    match self {
      Self::Bits16 => 0xFF,
      Self::Bits32 => 0xFFFF,
      Self::Bits64 => 0xFFFF_FFFF,
    }
  }

  #[inline]
  #[must_use]
  pub const fn bits(self) -> usize {
    self.word_len() * 16
  }
}

/// Fletcher checksum strategy.
///
/// ```
/// use checksum::{Fletcher, FletcherWidth};
/// use traits::HashTransform;
///
/// let mut t = HashTransform::new(Fletcher::new(FletcherWidth::Bits32));
/// assert_eq!(t.compute_hash(b"abcde")?.to_u64_le(), Some(0xF04F_C729));
/// # Ok::<(), traits::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fletcher {
  width: FletcherWidth,
  sum1: u64,
  sum2: u64,
}

impl Fletcher {
  #[must_use]
  pub const fn new(width: FletcherWidth) -> Self {
    Self { width, sum1: 0, sum2: 0 }
  }

  #[inline]
  #[must_use]
  pub const fn width(&self) -> FletcherWidth {
    self.width
  }

  /// Change the width. Restarts the sums.
  pub fn set_width(&mut self, width: FletcherWidth) -> Result<()> {
    *self = Self::new(width);
    Ok(())
  }

  #[inline]
  fn add_word(&mut self, word: u64) {
    let modulus = self.width.modulus();
    self.sum1 = (self.sum1 + word) % modulus;
    self.sum2 = (self.sum2 + self.sum1) % modulus;
  }

  #[must_use]
  pub const fn value(&self) -> u64 {
    (self.sum2 << (self.width.word_len() * 8)) | self.sum1
  }
}

fn le_word(bytes: &[u8]) -> u64 {
  bytes.iter().rev().fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

impl Zeroize for Fletcher {
  fn zeroize(&mut self) {
    self.sum1.zeroize();
    self.sum2.zeroize();
  }
}

impl BlockHash for Fletcher {
  fn block_size(&self) -> usize {
    self.width.word_len()
  }

  fn hash_size(&self) -> usize {
    self.width.bits()
  }

  fn reset(&mut self) {
    self.sum1 = 0;
    self.sum2 = 0;
  }

  fn process_block(&mut self, block: &[u8]) {
    self.add_word(le_word(block));
  }

  fn finalize(&mut self, remainder: &[u8], _total_len: u64) -> Vec<u8> {
    if !remainder.is_empty() {
      self.add_word(le_word(remainder));
    }
    let len = self.width.bits() / 8;
    self.value().to_le_bytes().iter().take(len).copied().collect()
  }
}

impl Reusable for Fletcher {}
