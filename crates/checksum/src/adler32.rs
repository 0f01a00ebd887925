//! Adler-32 (RFC 1950).

use traits::{BlockHash, Reusable};
use zeroize::Zeroize;

const MOD_ADLER: u32 = 65_521;

/// Largest run of bytes whose sums cannot overflow `u32` before reduction.
const NMAX: usize = 5552;

/// Adler-32 strategy. Digest is `(b << 16) | a`, emitted little-endian.
///
/// ```
/// use checksum::Adler32;
/// use traits::HashTransform;
///
/// let value = HashTransform::new(Adler32::new()).compute_hash(b"Wikipedia")?;
/// assert_eq!(value.to_u64_le(), Some(0x11E6_0398));
/// # Ok::<(), traits::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Adler32 {
  a: u32,
  b: u32,
}

impl Adler32 {
  #[must_use]
  pub const fn new() -> Self {
    Self { a: 1, b: 0 }
  }

  pub fn update(&mut self, data: &[u8]) {
    for run in data.chunks(NMAX) {
      for &byte in run {
        self.a += u32::from(byte);
        self.b += self.a;
      }
      self.a %= MOD_ADLER;
      self.b %= MOD_ADLER;
    }
  }

  #[must_use]
  pub const fn value(&self) -> u32 {
    (self.b << 16) | self.a
  }
}

impl Default for Adler32 {
  fn default() -> Self {
    Self::new()
  }
}

impl Zeroize for Adler32 {
  fn zeroize(&mut self) {
    self.a.zeroize();
    self.b.zeroize();
  }
}

impl BlockHash for Adler32 {
  fn block_size(&self) -> usize {
    1
  }

  fn hash_size(&self) -> usize {
    32
  }

  fn reset(&mut self) {
    *self = Self::new();
  }

  fn process_block(&mut self, block: &[u8]) {
    self.update(block);
  }

  fn process_blocks(&mut self, blocks: &[u8]) {
    self.update(blocks);
  }

  fn finalize(&mut self, remainder: &[u8], _total_len: u64) -> Vec<u8> {
    self.update(remainder);
    self.value().to_le_bytes().to_vec()
  }
}

impl Reusable for Adler32 {}
