//! Poly1305 one-time authenticator (RFC 8439).
//!
//! 26-bit limb arithmetic over `2^130 - 5` with 64-bit products. A key must
//! authenticate a single message, so the strategy opts out of transform reuse:
//! [`HashTransform::initialize`](traits::HashTransform::initialize) does not
//! exist for it and the key cannot change once bytes have been absorbed.

// SAFETY: Indexing reads fixed offsets of 16- and 32-byte arrays.
#![allow(clippy::indexing_slicing)]

use alloc::vec::Vec;

use subtle::ConstantTimeEq;
use traits::{BlockHash, Error, HashTransform, Result, VerificationError};
use zeroize::Zeroize;

use crate::util::load_le_u32;

pub const KEY_SIZE: usize = 32;
pub const TAG_SIZE: usize = 16;
const BLOCK_SIZE: usize = 16;

const MASK26: u32 = 0x03FF_FFFF;

/// Poly1305 strategy.
///
/// ```
/// use hashes::{HashTransform, crypto::Poly1305};
///
/// let key = [0x42u8; 32];
/// let tag = HashTransform::new(Poly1305::new(&key)).compute_hash(b"message")?;
/// assert!(Poly1305::verify(&key, b"message", tag.as_bytes()).is_ok());
/// assert!(Poly1305::verify(&key, b"massage", tag.as_bytes()).is_err());
/// # Ok::<(), traits::Error>(())
/// ```
#[derive(Clone)]
pub struct Poly1305 {
  r: [u32; 5],
  s: [u32; 4],
  pad: [u32; 4],
  h: [u32; 5],
}

impl Poly1305 {
  #[must_use]
  pub fn new(key: &[u8; KEY_SIZE]) -> Self {
    let mut poly = Self { r: [0; 5], s: [0; 4], pad: [0; 4], h: [0; 5] };
    poly.load_key(key);
    poly
  }

  /// # Errors
  ///
  /// [`Error::InvalidArgument`] unless `key` is exactly 32 bytes.
  pub fn from_slice(key: &[u8]) -> Result<Self> {
    let key: &[u8; KEY_SIZE] = key.try_into().map_err(|_| Error::InvalidArgument("Poly1305 key must be 32 bytes"))?;
    Ok(Self::new(key))
  }

  /// Replace the key. Only reachable through the transform's configuration
  /// guard, which rejects it once bytes have been absorbed.
  pub fn set_key(&mut self, key: &[u8; KEY_SIZE]) -> Result<()> {
    self.zeroize();
    self.load_key(key);
    Ok(())
  }

  /// Compute the tag of `message` and compare it with `tag` in constant time.
  pub fn verify(key: &[u8; KEY_SIZE], message: &[u8], tag: &[u8]) -> Result<(), VerificationError> {
    let mut transform = HashTransform::new(Self::new(key));
    let computed = transform.compute_hash(message).map_err(|_| VerificationError::new())?;
    let ok = computed.as_bytes().ct_eq(tag);
    transform.dispose();
    if bool::from(ok) { Ok(()) } else { Err(VerificationError::new()) }
  }

  fn load_key(&mut self, key: &[u8; KEY_SIZE]) {
    // r &= 0x0ffffffc0ffffffc0ffffffc0fffffff
    self.r = [
      load_le_u32(&key[0..4]) & 0x03FF_FFFF,
      (load_le_u32(&key[3..7]) >> 2) & 0x03FF_FF03,
      (load_le_u32(&key[6..10]) >> 4) & 0x03FF_C0FF,
      (load_le_u32(&key[9..13]) >> 6) & 0x03F0_3FFF,
      (load_le_u32(&key[12..16]) >> 8) & 0x000F_FFFF,
    ];
    self.s = [self.r[1] * 5, self.r[2] * 5, self.r[3] * 5, self.r[4] * 5];
    self.pad = [
      load_le_u32(&key[16..20]),
      load_le_u32(&key[20..24]),
      load_le_u32(&key[24..28]),
      load_le_u32(&key[28..32]),
    ];
    self.h = [0; 5];
  }

  /// Absorb one 16-byte block; `hibit` is `1 << 24` for full message blocks.
  fn block(&mut self, m: &[u8], hibit: u32) {
    let [r0, r1, r2, r3, r4] = self.r.map(u64::from);
    let [s1, s2, s3, s4] = self.s.map(u64::from);

    let h0 = u64::from(self.h[0] + (load_le_u32(&m[0..4]) & MASK26));
    let h1 = u64::from(self.h[1] + ((load_le_u32(&m[3..7]) >> 2) & MASK26));
    let h2 = u64::from(self.h[2] + ((load_le_u32(&m[6..10]) >> 4) & MASK26));
    let h3 = u64::from(self.h[3] + ((load_le_u32(&m[9..13]) >> 6) & MASK26));
    let h4 = u64::from(self.h[4] + ((load_le_u32(&m[12..16]) >> 8) | hibit));

    let d0 = h0 * r0 + h1 * s4 + h2 * s3 + h3 * s2 + h4 * s1;
    let mut d1 = h0 * r1 + h1 * r0 + h2 * s4 + h3 * s3 + h4 * s2;
    let mut d2 = h0 * r2 + h1 * r1 + h2 * r0 + h3 * s4 + h4 * s3;
    let mut d3 = h0 * r3 + h1 * r2 + h2 * r1 + h3 * r0 + h4 * s4;
    let mut d4 = h0 * r4 + h1 * r3 + h2 * r2 + h3 * r1 + h4 * r0;

    // Partial carry propagation.
    let mut c = d0 >> 26;
    let mut h0 = (d0 as u32) & MASK26;
    d1 += c;
    c = d1 >> 26;
    let h1 = (d1 as u32) & MASK26;
    d2 += c;
    c = d2 >> 26;
    let h2 = (d2 as u32) & MASK26;
    d3 += c;
    c = d3 >> 26;
    let h3 = (d3 as u32) & MASK26;
    d4 += c;
    c = d4 >> 26;
    let h4 = (d4 as u32) & MASK26;
    h0 += (c as u32) * 5;
    let carry = h0 >> 26;
    h0 &= MASK26;

    self.h = [h0, h1 + carry, h2, h3, h4];
  }

  fn tag(&mut self) -> [u8; TAG_SIZE] {
    let [mut h0, mut h1, mut h2, mut h3, mut h4] = self.h;

    // Full carry.
    let mut c = h1 >> 26;
    h1 &= MASK26;
    h2 += c;
    c = h2 >> 26;
    h2 &= MASK26;
    h3 += c;
    c = h3 >> 26;
    h3 &= MASK26;
    h4 += c;
    c = h4 >> 26;
    h4 &= MASK26;
    h0 += c * 5;
    c = h0 >> 26;
    h0 &= MASK26;
    h1 += c;

    // g = h + -p
    let mut g0 = h0.wrapping_add(5);
    c = g0 >> 26;
    g0 &= MASK26;
    let mut g1 = h1.wrapping_add(c);
    c = g1 >> 26;
    g1 &= MASK26;
    let mut g2 = h2.wrapping_add(c);
    c = g2 >> 26;
    g2 &= MASK26;
    let mut g3 = h3.wrapping_add(c);
    c = g3 >> 26;
    g3 &= MASK26;
    let g4 = h4.wrapping_add(c).wrapping_sub(1 << 26);

    // Select h if h < p, else g, without branching.
    let mask = (g4 >> 31).wrapping_sub(1);
    let keep = !mask;
    h0 = (h0 & keep) | (g0 & mask);
    h1 = (h1 & keep) | (g1 & mask);
    h2 = (h2 & keep) | (g2 & mask);
    h3 = (h3 & keep) | (g3 & mask);
    h4 = (h4 & keep) | (g4 & mask);

    // h %= 2^128
    let w0 = h0 | (h1 << 26);
    let w1 = (h1 >> 6) | (h2 << 20);
    let w2 = (h2 >> 12) | (h3 << 14);
    let w3 = (h3 >> 18) | (h4 << 8);

    // tag = (h + pad) % 2^128
    let mut f = u64::from(w0) + u64::from(self.pad[0]);
    let t0 = f as u32;
    f = u64::from(w1) + u64::from(self.pad[1]) + (f >> 32);
    let t1 = f as u32;
    f = u64::from(w2) + u64::from(self.pad[2]) + (f >> 32);
    let t2 = f as u32;
    f = u64::from(w3) + u64::from(self.pad[3]) + (f >> 32);
    let t3 = f as u32;

    let mut out = [0u8; TAG_SIZE];
    for (chunk, word) in out.chunks_exact_mut(4).zip([t0, t1, t2, t3]) {
      chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
  }
}

impl core::fmt::Debug for Poly1305 {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Poly1305").finish_non_exhaustive()
  }
}

impl Zeroize for Poly1305 {
  fn zeroize(&mut self) {
    self.r.zeroize();
    self.s.zeroize();
    self.pad.zeroize();
    self.h.zeroize();
  }
}

impl BlockHash for Poly1305 {
  const CAN_REUSE_TRANSFORM: bool = false;

  fn block_size(&self) -> usize {
    BLOCK_SIZE
  }

  fn hash_size(&self) -> usize {
    TAG_SIZE * 8
  }

  fn reset(&mut self) {
    self.h = [0; 5];
  }

  fn process_block(&mut self, block: &[u8]) {
    self.block(block, 1 << 24);
  }

  fn finalize(&mut self, remainder: &[u8], _total_len: u64) -> Vec<u8> {
    if !remainder.is_empty() {
      let mut last = [0u8; BLOCK_SIZE];
      last[..remainder.len()].copy_from_slice(remainder);
      last[remainder.len()] = 1;
      self.block(&last, 0);
      last.zeroize();
    }
    self.tag().to_vec()
  }
}
