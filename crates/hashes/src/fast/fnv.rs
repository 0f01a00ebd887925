//! Fowler–Noll–Vo hashes (FNV-1 and FNV-1a) at 32, 64 and 128 bits.
//!
//! The state is kept in a `u128` for every width; multiplication wraps at
//! 128 bits and the result is truncated to the selected width, which equals
//! multiplication modulo `2^width`.

use alloc::vec::Vec;

use traits::{BlockHash, Result, Reusable};
use zeroize::Zeroize;

/// Order of XOR and multiply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FnvVariant {
  /// Multiply, then XOR the byte.
  Fnv1,
  /// XOR the byte, then multiply.
  #[default]
  Fnv1a,
}

/// Digest width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FnvWidth {
  Bits32,
  #[default]
  Bits64,
  Bits128,
}

impl FnvWidth {
  #[inline]
  #[must_use]
  pub const fn bits(self) -> usize {
    match self {
      Self::Bits32 => 32,
      Self::Bits64 => 64,
      Self::Bits128 => 128,
    }
  }

  const fn offset_basis(self) -> u128 {
    match self {
      Self::Bits32 => 0x811C_9DC5,
      Self::Bits64 => 0xCBF2_9CE4_8422_2325,
      Self::Bits128 => 0x6C62_272E_07BB_0142_62B8_2175_6295_C58D,
    }
  }

  const fn prime(self) -> u128 {
    match self {
      Self::Bits32 => 0x0100_0193,
      Self::Bits64 => 0x0000_0100_0000_01B3,
      Self::Bits128 => 0x0000_0000_0100_0000_0000_0000_0000_013B,
    }
  }

  const fn mask(self) -> u128 {
    match self {
      Self::Bits32 => u32::MAX as u128,
      Self::Bits64 => u64::MAX as u128,
      Self::Bits128 => u128::MAX,
    }
  }
}

/// FNV strategy.
///
/// ```
/// use hashes::{HashTransform, fast::{Fnv, FnvVariant, FnvWidth}};
///
/// let mut t = HashTransform::new(Fnv::new(FnvVariant::Fnv1a, FnvWidth::Bits32));
/// assert_eq!(t.compute_hash(b"foobar")?.to_u64_le(), Some(0xBF9C_F968));
/// # Ok::<(), traits::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fnv {
  variant: FnvVariant,
  width: FnvWidth,
  state: u128,
}

impl Fnv {
  #[must_use]
  pub const fn new(variant: FnvVariant, width: FnvWidth) -> Self {
    Self { variant, width, state: width.offset_basis() }
  }

  #[inline]
  #[must_use]
  pub const fn variant(&self) -> FnvVariant {
    self.variant
  }

  #[inline]
  #[must_use]
  pub const fn width(&self) -> FnvWidth {
    self.width
  }

  pub fn set_variant(&mut self, variant: FnvVariant) -> Result<()> {
    *self = Self::new(variant, self.width);
    Ok(())
  }

  pub fn set_width(&mut self, width: FnvWidth) -> Result<()> {
    *self = Self::new(self.variant, width);
    Ok(())
  }

  fn update(&mut self, data: &[u8]) {
    let prime = self.width.prime();
    let mask = self.width.mask();
    let mut h = self.state;
    match self.variant {
      FnvVariant::Fnv1 => {
        for &b in data {
          h = (h.wrapping_mul(prime) & mask) ^ u128::from(b);
        }
      }
      FnvVariant::Fnv1a => {
        for &b in data {
          h = (h ^ u128::from(b)).wrapping_mul(prime) & mask;
        }
      }
    }
    self.state = h;
  }
}

impl Default for Fnv {
  fn default() -> Self {
    Self::new(FnvVariant::default(), FnvWidth::default())
  }
}

impl Zeroize for Fnv {
  fn zeroize(&mut self) {
    self.state.zeroize();
  }
}

impl BlockHash for Fnv {
  fn block_size(&self) -> usize {
    1
  }

  fn hash_size(&self) -> usize {
    self.width.bits()
  }

  fn reset(&mut self) {
    self.state = self.width.offset_basis();
  }

  fn process_block(&mut self, block: &[u8]) {
    self.update(block);
  }

  fn process_blocks(&mut self, blocks: &[u8]) {
    self.update(blocks);
  }

  fn finalize(&mut self, remainder: &[u8], _total_len: u64) -> Vec<u8> {
    self.update(remainder);
    self.state.to_le_bytes().iter().take(self.width.bits() / 8).copied().collect()
  }
}

impl Reusable for Fnv {}
