//! SipHash-c-d (**NOT CRYPTO**).
//!
//! SipHash is a *keyed* hash designed to defend hash tables against collision
//! attacks on untrusted inputs. It is not a cryptographic MAC.
//!
//! The compression (`c`) and finalization (`d`) round counts are configurable;
//! SipHash-2-4 is the default and SipHash-1-3 is the other common choice.

use alloc::vec::Vec;

use traits::{BlockHash, Error, Result, Reusable};
use zeroize::Zeroize;

use crate::util::load_le_u64;

const C0: u64 = 0x736f_6d65_7073_6575;
const C1: u64 = 0x646f_7261_6e64_6f6d;
const C2: u64 = 0x6c79_6765_6e65_7261;
const C3: u64 = 0x7465_6462_7974_6573;

/// Largest accepted round count.
pub const MAX_ROUNDS: u8 = 32;

#[inline(always)]
fn sip_round(v: &mut [u64; 4]) {
  let [v0, v1, v2, v3] = v;
  *v0 = v0.wrapping_add(*v1);
  *v1 = v1.rotate_left(13);
  *v1 ^= *v0;
  *v0 = v0.rotate_left(32);

  *v2 = v2.wrapping_add(*v3);
  *v3 = v3.rotate_left(16);
  *v3 ^= *v2;

  *v0 = v0.wrapping_add(*v3);
  *v3 = v3.rotate_left(21);
  *v3 ^= *v0;

  *v2 = v2.wrapping_add(*v1);
  *v1 = v1.rotate_left(17);
  *v1 ^= *v2;
  *v2 = v2.rotate_left(32);
}

/// Keyed SipHash strategy with a 64-bit digest.
///
/// ```
/// use hashes::{HashTransform, fast::SipHash};
///
/// let key: [u8; 16] = core::array::from_fn(|i| i as u8);
/// let msg: Vec<u8> = (0u8..15).collect();
/// let value = HashTransform::new(SipHash::new(key)).compute_hash(&msg)?;
/// assert_eq!(value.to_u64_le(), Some(0xa129_ca61_49be_45e5));
/// # Ok::<(), traits::Error>(())
/// ```
#[derive(Clone)]
pub struct SipHash {
  key: [u8; 16],
  c_rounds: u8,
  d_rounds: u8,
  v: [u64; 4],
}

impl SipHash {
  /// SipHash-2-4 with `key`.
  #[must_use]
  pub fn new(key: [u8; 16]) -> Self {
    let mut sip = Self { key, c_rounds: 2, d_rounds: 4, v: [0; 4] };
    sip.reset_state();
    sip
  }

  /// SipHash-c-d with `key`.
  ///
  /// # Errors
  ///
  /// [`Error::OutOfRange`] unless both counts are in `1..=32`.
  pub fn with_key_and_rounds(key: [u8; 16], c_rounds: u8, d_rounds: u8) -> Result<Self> {
    let mut sip = Self::new(key);
    sip.set_rounds(c_rounds, d_rounds)?;
    Ok(sip)
  }

  #[inline]
  #[must_use]
  pub const fn key(&self) -> &[u8; 16] {
    &self.key
  }

  #[inline]
  #[must_use]
  pub const fn rounds(&self) -> (u8, u8) {
    (self.c_rounds, self.d_rounds)
  }

  pub fn set_key(&mut self, key: [u8; 16]) -> Result<()> {
    self.key.zeroize();
    self.key = key;
    self.reset_state();
    Ok(())
  }

  /// # Errors
  ///
  /// [`Error::OutOfRange`] unless both counts are in `1..=32`.
  pub fn set_rounds(&mut self, c_rounds: u8, d_rounds: u8) -> Result<()> {
    if !(1..=MAX_ROUNDS).contains(&c_rounds) {
      return Err(Error::OutOfRange("SipHash compression rounds"));
    }
    if !(1..=MAX_ROUNDS).contains(&d_rounds) {
      return Err(Error::OutOfRange("SipHash finalization rounds"));
    }
    self.c_rounds = c_rounds;
    self.d_rounds = d_rounds;
    self.reset_state();
    Ok(())
  }

  fn reset_state(&mut self) {
    let (lo, hi) = self.key.split_at(8);
    let k0 = load_le_u64(lo);
    let k1 = load_le_u64(hi);
    self.v = [C0 ^ k0, C1 ^ k1, C2 ^ k0, C3 ^ k1];
  }

  #[inline]
  fn compress(&mut self, m: u64) {
    self.v[3] ^= m;
    for _ in 0..self.c_rounds {
      sip_round(&mut self.v);
    }
    self.v[0] ^= m;
  }
}

impl Default for SipHash {
  /// All-zero key, SipHash-2-4.
  fn default() -> Self {
    Self::new([0; 16])
  }
}

impl core::fmt::Debug for SipHash {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("SipHash")
      .field("c_rounds", &self.c_rounds)
      .field("d_rounds", &self.d_rounds)
      .finish_non_exhaustive()
  }
}

impl Zeroize for SipHash {
  fn zeroize(&mut self) {
    self.key.zeroize();
    self.v.zeroize();
  }
}

impl BlockHash for SipHash {
  fn block_size(&self) -> usize {
    8
  }

  fn hash_size(&self) -> usize {
    64
  }

  fn reset(&mut self) {
    self.reset_state();
  }

  fn process_block(&mut self, block: &[u8]) {
    self.compress(load_le_u64(block));
  }

  fn finalize(&mut self, remainder: &[u8], total_len: u64) -> Vec<u8> {
    let b = (total_len << 56) | load_le_u64(remainder);
    self.compress(b);

    self.v[2] ^= 0xff;
    for _ in 0..self.d_rounds {
      sip_round(&mut self.v);
    }
    let [v0, v1, v2, v3] = self.v;
    (v0 ^ v1 ^ v2 ^ v3).to_le_bytes().to_vec()
  }
}

impl Reusable for SipHash {}
