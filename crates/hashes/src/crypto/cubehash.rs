//! CubeHash `i+r/b+f-h`.
//!
//! State is 32 little-endian `u32` words (1024 bits). Each `b`-byte block is
//! XORed into the front of the state and followed by `r` rounds. Padding is a
//! single `0x80` byte then zeros to the block boundary; finalization flips the
//! low bit of word 31 and runs `f` rounds. The digest is the first `h/8`
//! state bytes.
//!
//! | Parameter | Range | Default |
//! |-----------|-------|---------|
//! | `r` rounds per block | 1..=64 | 16 |
//! | `b` block bytes | 1..=128 | 32 |
//! | `h` digest bits | 8..=512, multiple of 8 | 512 |
//! | `i` initialization rounds | fixed | 16 |
//! | `f` finalization rounds | fixed | 32 |

// SAFETY: All indexing targets the fixed `[u32; 32]` state with loop indices
// bounded by 16 or 32, or with byte offsets below `block_size <= 128`.
#![allow(clippy::indexing_slicing)]

use alloc::vec::Vec;

use traits::{BlockHash, Error, Result, Reusable};
use zeroize::Zeroize;

pub const INIT_ROUNDS: usize = 16;
pub const FINAL_ROUNDS: usize = 32;

pub const MAX_ROUNDS: usize = 64;
pub const MAX_BLOCK_SIZE: usize = 128;
pub const MAX_HASH_BITS: usize = 512;

fn round(x: &mut [u32; 32]) {
  for j in 0..16 {
    x[j + 16] = x[j + 16].wrapping_add(x[j]);
  }
  for j in 0..16 {
    x[j] = x[j].rotate_left(7);
  }
  for j in 0..8 {
    x.swap(j, j + 8);
  }
  for j in 0..16 {
    x[j] ^= x[j + 16];
  }
  // swap x[1jk0m] with x[1jk1m]
  for base in [16, 20, 24, 28] {
    x.swap(base, base + 2);
    x.swap(base + 1, base + 3);
  }
  for j in 0..16 {
    x[j + 16] = x[j + 16].wrapping_add(x[j]);
  }
  for j in 0..16 {
    x[j] = x[j].rotate_left(11);
  }
  // swap x[0j0km] with x[0j1km]
  for base in [0, 8] {
    for j in 0..4 {
      x.swap(base + j, base + j + 4);
    }
  }
  for j in 0..16 {
    x[j] ^= x[j + 16];
  }
  // swap x[1jkm0] with x[1jkm1]
  for j in (16..32).step_by(2) {
    x.swap(j, j + 1);
  }
}

/// CubeHash strategy.
///
/// ```
/// use hashes::{HashTransform, crypto::CubeHash};
///
/// let mut t = HashTransform::new(CubeHash::new(16, 32, 256)?);
/// let digest = t.compute_hash(b"Hello")?;
/// assert_eq!(digest.len(), 32);
/// # Ok::<(), traits::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct CubeHash {
  rounds: usize,
  block_size: usize,
  hash_bits: usize,
  state: [u32; 32],
}

impl CubeHash {
  /// # Errors
  ///
  /// [`Error::OutOfRange`] if a parameter is outside the table in the module docs.
  pub fn new(rounds: usize, block_size: usize, hash_bits: usize) -> Result<Self> {
    check_rounds(rounds)?;
    check_block_size(block_size)?;
    check_hash_bits(hash_bits)?;
    let mut cube = Self { rounds, block_size, hash_bits, state: [0; 32] };
    cube.initialize_state();
    Ok(cube)
  }

  #[inline]
  #[must_use]
  pub const fn rounds(&self) -> usize {
    self.rounds
  }

  pub fn set_rounds(&mut self, rounds: usize) -> Result<()> {
    check_rounds(rounds)?;
    self.rounds = rounds;
    self.initialize_state();
    Ok(())
  }

  pub fn set_block_size(&mut self, block_size: usize) -> Result<()> {
    check_block_size(block_size)?;
    self.block_size = block_size;
    self.initialize_state();
    Ok(())
  }

  pub fn set_hash_bits(&mut self, hash_bits: usize) -> Result<()> {
    check_hash_bits(hash_bits)?;
    self.hash_bits = hash_bits;
    self.initialize_state();
    Ok(())
  }

  fn initialize_state(&mut self) {
    self.state = [0; 32];
    self.state[0] = (self.hash_bits / 8) as u32;
    self.state[1] = self.block_size as u32;
    self.state[2] = self.rounds as u32;
    for _ in 0..INIT_ROUNDS {
      round(&mut self.state);
    }
  }

  fn absorb(&mut self, block: &[u8]) {
    for (i, &byte) in block.iter().enumerate() {
      self.state[i / 4] ^= u32::from(byte) << (8 * (i % 4));
    }
    for _ in 0..self.rounds {
      round(&mut self.state);
    }
  }
}

impl Default for CubeHash {
  /// CubeHash16+16/32+32-512.
  fn default() -> Self {
    let mut cube = Self { rounds: 16, block_size: 32, hash_bits: 512, state: [0; 32] };
    cube.initialize_state();
    cube
  }
}

fn check_rounds(rounds: usize) -> Result<()> {
  if rounds == 0 || rounds > MAX_ROUNDS {
    return Err(Error::OutOfRange("CubeHash rounds"));
  }
  Ok(())
}

fn check_block_size(block_size: usize) -> Result<()> {
  if block_size == 0 || block_size > MAX_BLOCK_SIZE {
    return Err(Error::OutOfRange("CubeHash block size"));
  }
  Ok(())
}

fn check_hash_bits(hash_bits: usize) -> Result<()> {
  if hash_bits == 0 || hash_bits > MAX_HASH_BITS || hash_bits % 8 != 0 {
    return Err(Error::OutOfRange("CubeHash hash size"));
  }
  Ok(())
}

impl Zeroize for CubeHash {
  fn zeroize(&mut self) {
    self.state.zeroize();
  }
}

impl BlockHash for CubeHash {
  fn block_size(&self) -> usize {
    self.block_size
  }

  fn hash_size(&self) -> usize {
    self.hash_bits
  }

  fn reset(&mut self) {
    self.initialize_state();
  }

  fn process_block(&mut self, block: &[u8]) {
    self.absorb(block);
  }

  fn finalize(&mut self, remainder: &[u8], _total_len: u64) -> Vec<u8> {
    let mut last = [0u8; MAX_BLOCK_SIZE];
    last[..remainder.len()].copy_from_slice(remainder);
    last[remainder.len()] = 0x80;
    self.absorb(&last[..self.block_size]);
    last.zeroize();

    self.state[31] ^= 1;
    for _ in 0..FINAL_ROUNDS {
      round(&mut self.state);
    }

    self.state.iter().flat_map(|w| w.to_le_bytes()).take(self.hash_bits / 8).collect()
  }
}

impl Reusable for CubeHash {}
