//! Threefish tweakable block cipher (Skein 1.3) in its 256, 512 and 1024-bit variants.
//!
//! All three share one key schedule and round function, parameterized by the
//! number of 64-bit words, the round count, the rotation table and the word
//! permutation.

// SAFETY: Indexing uses word indices below W and subkey indices below ROUNDS / 4 + 1,
// both fixed per variant.
#![allow(clippy::indexing_slicing)]

use traits::{BlockCipher, Error, Result};
use zeroize::Zeroize;

/// Key schedule parity constant.
const C240: u64 = 0x1BD1_1BDA_A9FC_1A22;

/// Tweak size in bytes, shared by every variant.
pub const TWEAK_SIZE: usize = 16;

struct Params<const W: usize> {
  rounds: usize,
  /// `rotations[(d % 8) * W / 2 + j]` for round `d`, word pair `j`.
  rotations: &'static [u32],
  permutation: [usize; W],
}

const PARAMS_256: Params<4> = Params {
  rounds: 72,
  rotations: &[14, 16, 52, 57, 23, 40, 5, 37, 25, 33, 46, 12, 58, 22, 32, 32],
  permutation: [0, 3, 2, 1],
};

const PARAMS_512: Params<8> = Params {
  rounds: 72,
  rotations: &[
    46, 36, 19, 37, 33, 27, 14, 42, 17, 49, 36, 39, 44, 9, 54, 56, 39, 30, 34, 24, 13, 50, 10, 17, 25, 29, 39, 43, 8,
    35, 56, 22,
  ],
  permutation: [2, 1, 4, 7, 6, 5, 0, 3],
};

const PARAMS_1024: Params<16> = Params {
  rounds: 80,
  rotations: &[
    24, 13, 8, 47, 8, 17, 22, 37, 38, 19, 10, 55, 49, 18, 23, 52, 33, 4, 51, 13, 34, 41, 59, 17, 5, 20, 48, 41, 47, 28,
    16, 25, 41, 9, 37, 31, 12, 47, 44, 30, 16, 34, 56, 51, 4, 53, 42, 41, 31, 44, 47, 46, 19, 42, 44, 25, 9, 48, 35,
    52, 23, 31, 37, 20,
  ],
  permutation: [0, 9, 2, 13, 6, 11, 4, 15, 10, 7, 12, 3, 14, 5, 8, 1],
};

/// Expanded subkeys for one (key, tweak) pair.
struct Schedule<const W: usize> {
  params: &'static Params<W>,
  subkeys: Vec<[u64; W]>,
}

impl<const W: usize> Schedule<W> {
  fn new(params: &'static Params<W>, key: &[u8], tweak: &[u8; TWEAK_SIZE]) -> Self {
    let mut k: Vec<u64> = Vec::with_capacity(W + 1);
    k.extend(key.chunks_exact(8).map(load_u64));
    k.push(k.iter().fold(C240, |acc, &w| acc ^ w));

    let t0 = load_u64(&tweak[..8]);
    let t1 = load_u64(&tweak[8..]);
    let t = [t0, t1, t0 ^ t1];

    let subkeys = (0..=params.rounds / 4)
      .map(|s| {
        let mut sk = [0u64; W];
        for (i, word) in sk.iter_mut().enumerate() {
          *word = k[(s + i) % (W + 1)];
        }
        sk[W - 3] = sk[W - 3].wrapping_add(t[s % 3]);
        sk[W - 2] = sk[W - 2].wrapping_add(t[(s + 1) % 3]);
        sk[W - 1] = sk[W - 1].wrapping_add(s as u64);
        sk
      })
      .collect();
    k.zeroize();
    Self { params, subkeys }
  }

  fn rotations(&self, d: usize) -> &[u32] {
    let half = W / 2;
    &self.params.rotations[(d % 8) * half..(d % 8 + 1) * half]
  }

  fn encrypt(&self, v: &mut [u64; W]) {
    let rounds = self.params.rounds;
    for d in 0..rounds {
      if d % 4 == 0 {
        add_subkey(v, &self.subkeys[d / 4]);
      }
      for (j, &r) in self.rotations(d).iter().enumerate() {
        let (x0, x1) = (v[2 * j], v[2 * j + 1]);
        let y0 = x0.wrapping_add(x1);
        v[2 * j] = y0;
        v[2 * j + 1] = x1.rotate_left(r) ^ y0;
      }
      let mixed = *v;
      for (word, &from) in v.iter_mut().zip(self.params.permutation.iter()) {
        *word = mixed[from];
      }
    }
    add_subkey(v, &self.subkeys[rounds / 4]);
  }

  fn decrypt(&self, v: &mut [u64; W]) {
    let rounds = self.params.rounds;
    sub_subkey(v, &self.subkeys[rounds / 4]);
    for d in (0..rounds).rev() {
      let permuted = *v;
      for (&word, &to) in permuted.iter().zip(self.params.permutation.iter()) {
        v[to] = word;
      }
      for (j, &r) in self.rotations(d).iter().enumerate() {
        let (y0, y1) = (v[2 * j], v[2 * j + 1]);
        let x1 = (y1 ^ y0).rotate_right(r);
        v[2 * j] = y0.wrapping_sub(x1);
        v[2 * j + 1] = x1;
      }
      if d % 4 == 0 {
        sub_subkey(v, &self.subkeys[d / 4]);
      }
    }
  }
}

impl<const W: usize> Drop for Schedule<W> {
  fn drop(&mut self) {
    self.subkeys.zeroize();
  }
}

#[inline]
fn add_subkey<const W: usize>(v: &mut [u64; W], subkey: &[u64; W]) {
  for (word, k) in v.iter_mut().zip(subkey) {
    *word = word.wrapping_add(*k);
  }
}

#[inline]
fn sub_subkey<const W: usize>(v: &mut [u64; W], subkey: &[u64; W]) {
  for (word, k) in v.iter_mut().zip(subkey) {
    *word = word.wrapping_sub(*k);
  }
}

#[inline]
fn load_u64(bytes: &[u8]) -> u64 {
  let mut word = [0u8; 8];
  word.copy_from_slice(bytes);
  u64::from_le_bytes(word)
}

fn load_block<const W: usize>(block: &[u8]) -> [u64; W] {
  let mut v = [0u64; W];
  for (word, chunk) in v.iter_mut().zip(block.chunks_exact(8)) {
    *word = load_u64(chunk);
  }
  v
}

fn store_block<const W: usize>(mut v: [u64; W], block: &mut [u8]) {
  for (chunk, word) in block.chunks_exact_mut(8).zip(v.iter()) {
    chunk.copy_from_slice(&word.to_le_bytes());
  }
  v.zeroize();
}

macro_rules! threefish {
  ($(#[$meta:meta])* $name:ident, words: $words:literal, params: $params:ident) => {
    $(#[$meta])*
    pub struct $name {
      schedule: Schedule<$words>,
    }

    impl $name {
      /// Key and block size in bytes.
      pub const BLOCK_SIZE: usize = $words * 8;
      pub const KEY_SIZE: usize = $words * 8;
      pub const ROUNDS: usize = $params.rounds;

      #[must_use]
      pub fn new(key: &[u8; $words * 8], tweak: &[u8; TWEAK_SIZE]) -> Self {
        Self { schedule: Schedule::new(&$params, key, tweak) }
      }

      /// Construct from unsized slices.
      ///
      /// # Errors
      ///
      /// [`Error::InvalidArgument`] when the key or tweak length is wrong.
      pub fn from_slices(key: &[u8], tweak: &[u8]) -> Result<Self> {
        let key: &[u8; $words * 8] = key
          .try_into()
          .map_err(|_| Error::InvalidArgument(concat!(stringify!($name), " key has the wrong length")))?;
        let tweak: &[u8; TWEAK_SIZE] =
          tweak.try_into().map_err(|_| Error::InvalidArgument("Threefish tweak must be 16 bytes"))?;
        Ok(Self::new(key, tweak))
      }
    }

    impl BlockCipher for $name {
      #[inline]
      fn block_size(&self) -> usize {
        Self::BLOCK_SIZE
      }

      fn encrypt_block(&self, block: &mut [u8]) {
        let mut v = load_block::<$words>(block);
        self.schedule.encrypt(&mut v);
        store_block(v, block);
      }

      fn decrypt_block(&self, block: &mut [u8]) {
        let mut v = load_block::<$words>(block);
        self.schedule.decrypt(&mut v);
        store_block(v, block);
      }
    }

    impl core::fmt::Debug for $name {
      fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct(stringify!($name)).finish_non_exhaustive()
      }
    }
  };
}

threefish! {
  /// Threefish-256: 32-byte blocks and key, 72 rounds.
  Threefish256, words: 4, params: PARAMS_256
}

threefish! {
  /// Threefish-512: 64-byte blocks and key, 72 rounds.
  Threefish512, words: 8, params: PARAMS_512
}

threefish! {
  /// Threefish-1024: 128-byte blocks and key, 80 rounds.
  Threefish1024, words: 16, params: PARAMS_1024
}
