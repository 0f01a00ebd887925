//! Tiger and Tiger2.
//!
//! Three 64-bit words of state, 64-byte blocks, and four 256-entry S-boxes.
//! Messages are padded Merkle-Damgard style: one marker byte, zeros to 56
//! mod 64, then the bit length as a little-endian `u64`. Tiger marks with
//! `0x01`, Tiger2 with `0x80`; nothing else differs. Shorter digests are
//! truncations of the 192-bit value.
//!
//! | Parameter | Range | Default |
//! |-----------|-------|---------|
//! | variant | [`TigerVariant`] | `Tiger` |
//! | digest bits | 128, 160, 192 | 192 |
//! | passes | 3..=5 | 3 |

// SAFETY: S-box lookups index `[u64; 256]` with a `u8`; word and byte indices
// address the fixed `[u64; 8]` schedule and a `[u8; 128]` padding buffer with
// `remainder.len() < BLOCK_SIZE`.
#![allow(clippy::indexing_slicing)]

use alloc::vec::Vec;

use traits::{BlockHash, Error, Result, Reusable};
use zeroize::Zeroize;

use crate::util::load_le_u64;

mod sboxes;

use sboxes::{T1, T2, T3, T4};

pub const BLOCK_SIZE: usize = 64;
pub const MIN_PASSES: usize = 3;
pub const MAX_PASSES: usize = 5;

const IV: [u64; 3] = [0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210, 0xF096_A5B4_C3B2_E187];

/// Padding marker; the only difference between the two variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TigerVariant {
  /// Original 1996 padding (`0x01`).
  #[default]
  Tiger,
  /// MD4-style padding (`0x80`).
  Tiger2,
}

impl TigerVariant {
  #[inline]
  const fn marker(self) -> u8 {
    match self {
      Self::Tiger => 0x01,
      Self::Tiger2 => 0x80,
    }
  }
}

#[inline(always)]
fn round(a: &mut u64, b: &mut u64, c: &mut u64, x: u64, mul: u64) {
  *c ^= x;
  let [c0, c1, c2, c3, c4, c5, c6, c7] = c.to_le_bytes().map(usize::from);
  *a = a.wrapping_sub(T1[c0] ^ T2[c2] ^ T3[c4] ^ T4[c6]);
  *b = b.wrapping_add(T4[c1] ^ T3[c3] ^ T2[c5] ^ T1[c7]);
  *b = b.wrapping_mul(mul);
}

#[inline(always)]
fn pass(a: &mut u64, b: &mut u64, c: &mut u64, x: &[u64; 8], mul: u64) {
  round(a, b, c, x[0], mul);
  round(b, c, a, x[1], mul);
  round(c, a, b, x[2], mul);
  round(a, b, c, x[3], mul);
  round(b, c, a, x[4], mul);
  round(c, a, b, x[5], mul);
  round(a, b, c, x[6], mul);
  round(b, c, a, x[7], mul);
}

#[inline(always)]
fn key_schedule(x: &mut [u64; 8]) {
  x[0] = x[0].wrapping_sub(x[7] ^ 0xA5A5_A5A5_A5A5_A5A5);
  x[1] ^= x[0];
  x[2] = x[2].wrapping_add(x[1]);
  x[3] = x[3].wrapping_sub(x[2] ^ (!x[1] << 19));
  x[4] ^= x[3];
  x[5] = x[5].wrapping_add(x[4]);
  x[6] = x[6].wrapping_sub(x[5] ^ (!x[4] >> 23));
  x[7] ^= x[6];
  x[0] = x[0].wrapping_add(x[7]);
  x[1] = x[1].wrapping_sub(x[0] ^ (!x[7] << 19));
  x[2] ^= x[1];
  x[3] = x[3].wrapping_add(x[2]);
  x[4] = x[4].wrapping_sub(x[3] ^ (!x[2] >> 23));
  x[5] ^= x[4];
  x[6] = x[6].wrapping_add(x[5]);
  x[7] = x[7].wrapping_sub(x[6] ^ 0x0123_4567_89AB_CDEF);
}

fn compress(state: &mut [u64; 3], block: &[u8], passes: usize) {
  let mut x = [0u64; 8];
  for (word, chunk) in x.iter_mut().zip(block.chunks_exact(8)) {
    *word = load_le_u64(chunk);
  }

  let [mut a, mut b, mut c] = *state;
  pass(&mut a, &mut b, &mut c, &x, 5);
  key_schedule(&mut x);
  pass(&mut c, &mut a, &mut b, &x, 7);
  key_schedule(&mut x);
  pass(&mut b, &mut c, &mut a, &x, 9);
  for _ in MIN_PASSES..passes {
    key_schedule(&mut x);
    pass(&mut a, &mut b, &mut c, &x, 9);
    (a, b, c) = (c, a, b);
  }
  x.zeroize();

  state[0] ^= a;
  state[1] = b.wrapping_sub(state[1]);
  state[2] = c.wrapping_add(state[2]);
}

/// Tiger / Tiger2 strategy.
///
/// ```
/// use hashes::{HashTransform, crypto::{Tiger, TigerVariant}};
///
/// let mut t = HashTransform::new(Tiger::new());
/// assert_eq!(t.compute_hash(b"abc")?.to_hex(), "2AAB1484E8C158F2BFB8C5FF41B57A525129131C957B5F93");
///
/// t.initialize()?;
/// t.configure(|alg| alg.set_variant(TigerVariant::Tiger2))?;
/// assert_eq!(t.compute_hash(b"abc")?.to_hex(), "F68D7BC5AF4B43A06E048D7829560D4A9415658BB0B1F3BF");
/// # Ok::<(), traits::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Tiger {
  variant: TigerVariant,
  hash_bits: usize,
  passes: usize,
  state: [u64; 3],
}

impl Tiger {
  /// Tiger/192 with three passes.
  #[must_use]
  pub const fn new() -> Self {
    Self::with_variant(TigerVariant::Tiger)
  }

  #[must_use]
  pub const fn with_variant(variant: TigerVariant) -> Self {
    Self { variant, hash_bits: 192, passes: MIN_PASSES, state: IV }
  }

  #[inline]
  #[must_use]
  pub const fn variant(&self) -> TigerVariant {
    self.variant
  }

  #[inline]
  #[must_use]
  pub const fn passes(&self) -> usize {
    self.passes
  }

  pub fn set_variant(&mut self, variant: TigerVariant) -> Result<()> {
    self.variant = variant;
    self.state = IV;
    Ok(())
  }

  /// # Errors
  ///
  /// [`Error::OutOfRange`] unless `hash_bits` is 128, 160 or 192.
  pub fn set_hash_bits(&mut self, hash_bits: usize) -> Result<()> {
    if !matches!(hash_bits, 128 | 160 | 192) {
      return Err(Error::OutOfRange("Tiger hash size"));
    }
    self.hash_bits = hash_bits;
    self.state = IV;
    Ok(())
  }

  /// # Errors
  ///
  /// [`Error::OutOfRange`] outside `MIN_PASSES..=MAX_PASSES`.
  pub fn set_passes(&mut self, passes: usize) -> Result<()> {
    if !(MIN_PASSES..=MAX_PASSES).contains(&passes) {
      return Err(Error::OutOfRange("Tiger passes"));
    }
    self.passes = passes;
    self.state = IV;
    Ok(())
  }
}

impl Default for Tiger {
  fn default() -> Self {
    Self::new()
  }
}

impl Zeroize for Tiger {
  fn zeroize(&mut self) {
    self.state.zeroize();
  }
}

impl BlockHash for Tiger {
  fn block_size(&self) -> usize {
    BLOCK_SIZE
  }

  fn hash_size(&self) -> usize {
    self.hash_bits
  }

  fn reset(&mut self) {
    self.state = IV;
  }

  fn process_block(&mut self, block: &[u8]) {
    compress(&mut self.state, block, self.passes);
  }

  fn finalize(&mut self, remainder: &[u8], total_len: u64) -> Vec<u8> {
    let mut last = [0u8; 2 * BLOCK_SIZE];
    last[..remainder.len()].copy_from_slice(remainder);
    last[remainder.len()] = self.variant.marker();
    let end = if remainder.len() < BLOCK_SIZE - 8 { BLOCK_SIZE } else { 2 * BLOCK_SIZE };
    last[end - 8..end].copy_from_slice(&total_len.wrapping_mul(8).to_le_bytes());
    for block in last[..end].chunks_exact(BLOCK_SIZE) {
      compress(&mut self.state, block, self.passes);
    }
    last.zeroize();

    self.state.iter().flat_map(|w| w.to_le_bytes()).take(self.hash_bits / 8).collect()
  }
}

impl Reusable for Tiger {}

#[cfg(test)]
mod tests {
  use traits::HashTransform;

  use super::*;

  fn tiger_hex(alg: Tiger, data: &[u8]) -> alloc::string::String {
    HashTransform::new(alg).compute_hash(data).unwrap().to_hex()
  }

  #[test]
  fn sbox_corners() {
    assert_eq!(T1[0], 0x02AA_B17C_F7E9_0C5E);
    assert_eq!(T1[1], 0xAC42_4B03_E243_A8EC);
    assert_eq!(T4[255], 0xC3A0_396F_7363_A51F);
  }

  #[test]
  fn known_answers() {
    assert_eq!(tiger_hex(Tiger::new(), b""), "3293AC630C13F0245F92BBB1766E16167A4E58492DDE73F3");
    assert_eq!(tiger_hex(Tiger::new(), b"abc"), "2AAB1484E8C158F2BFB8C5FF41B57A525129131C957B5F93");
    assert_eq!(
      tiger_hex(Tiger::new(), b"The quick brown fox jumps over the lazy dog"),
      "6D12A41E72E644F017B6F0E2F7B44C6285F06DD5D2C5B075"
    );
    let tiger2 = || Tiger::with_variant(TigerVariant::Tiger2);
    assert_eq!(tiger_hex(tiger2(), b""), "4441BE75F6018773C206C22745374B924AA8313FEF919F41");
    assert_eq!(tiger_hex(tiger2(), b"abc"), "F68D7BC5AF4B43A06E048D7829560D4A9415658BB0B1F3BF");
  }

  #[test]
  fn padding_boundaries() {
    // 55 bytes fit the length in the same block; 56 and 64 spill into a second.
    assert_eq!(tiger_hex(Tiger::new(), &[b'a'; 55]), "EC03564F7FF39BFBA848B5AB3ECDF21A1EA371549A7A62E3");
    assert_eq!(tiger_hex(Tiger::new(), &[b'a'; 56]), "45FDD791E96900F7EC26C2923A86F8109A67FB45E50C16C9");
    assert_eq!(tiger_hex(Tiger::new(), &[b'a'; 64]), "7503F313BBEA92EDDCA90C5D3FCC4368237457DF366FB76E");
  }

  #[test]
  fn extra_passes() {
    let mut four = Tiger::new();
    four.set_passes(4).unwrap();
    assert_eq!(tiger_hex(four, b"abc"), "538883C8FC5F28250299018E66BDF4FDB5EF7B65F2E91753");
    let mut five = Tiger::new();
    five.set_passes(5).unwrap();
    assert_eq!(tiger_hex(five, b"abc"), "686CF930396C8C02922D8005159F94A7864025ED8CC2E862");

    assert_eq!(Tiger::new().set_passes(2), Err(Error::OutOfRange("Tiger passes")));
    assert_eq!(Tiger::new().set_passes(6), Err(Error::OutOfRange("Tiger passes")));
  }

  #[test]
  fn shorter_digests_truncate() {
    let full = HashTransform::new(Tiger::new()).compute_hash(b"abc").unwrap().into_bytes();
    for bits in [128, 160] {
      let mut t = HashTransform::new(Tiger::new());
      t.configure(|alg| alg.set_hash_bits(bits)).unwrap();
      assert_eq!(t.hash_size(), Ok(bits));
      assert_eq!(t.compute_hash(b"abc").unwrap().as_bytes(), &full[..bits / 8]);
    }
    assert_eq!(Tiger::new().set_hash_bits(256), Err(Error::OutOfRange("Tiger hash size")));
  }

  #[test]
  fn variant_is_guarded_after_input() {
    let mut t = HashTransform::new(Tiger::new());
    t.update(b"partial").unwrap();
    assert!(matches!(t.configure(|alg| alg.set_variant(TigerVariant::Tiger2)), Err(Error::InvalidOperation(_))));
    assert_eq!(t.algorithm().unwrap().variant(), TigerVariant::Tiger);

    t.initialize().unwrap();
    t.configure(|alg| alg.set_variant(TigerVariant::Tiger2)).unwrap();
    assert_eq!(t.compute_hash(b"").unwrap().to_hex(), "4441BE75F6018773C206C22745374B924AA8313FEF919F41");
  }

  #[test]
  fn streaming_matches_one_shot() {
    let data: Vec<u8> = (0..300u32).map(|i| (i * 7 + 1) as u8).collect();
    let whole = HashTransform::new(Tiger::new()).compute_hash(&data).unwrap();
    for chunk in [1, 7, 63, 64, 65, 128] {
      let mut t = HashTransform::new(Tiger::new());
      for piece in data.chunks(chunk) {
        t.update(piece).unwrap();
      }
      assert_eq!(t.finalize().unwrap(), whole, "chunk {chunk}");
    }
  }
}
