//! Pearson hashing with a configurable permutation table and digest length.
//!
//! Output byte `j` runs its own lane: it starts at `j` and absorbs every
//! input byte as `lane = T[lane ^ byte]`.

// SAFETY: Table lookups index a `[u8; 256]` with a `u8`; lane indexing is
// bounded by `hash_len <= MAX_HASH_LEN`, enforced by every constructor and setter.
#![allow(clippy::indexing_slicing)]

use alloc::vec::Vec;

use traits::{BlockHash, Error, Result, Reusable};
use zeroize::Zeroize;

/// Largest supported digest, in bytes.
pub const MAX_HASH_LEN: usize = 64;

/// A permutation of `0..=255`.
#[derive(Clone, PartialEq, Eq)]
pub struct PearsonTable([u8; 256]);

impl PearsonTable {
  /// Validate that `table` is a permutation.
  ///
  /// # Errors
  ///
  /// [`Error::InvalidArgument`] if any value repeats.
  pub fn new(table: [u8; 256]) -> Result<Self> {
    let mut seen = [false; 256];
    for &v in &table {
      if seen[v as usize] {
        return Err(Error::InvalidArgument("Pearson table must be a permutation of 0..=255"));
      }
      seen[v as usize] = true;
    }
    Ok(Self(table))
  }

  /// `T[i] = i`. Degenerates to XOR folding; useful for tests.
  #[must_use]
  pub const fn identity() -> Self {
    let mut t = [0u8; 256];
    let mut i = 0;
    while i < 256 {
      t[i] = i as u8;
      i += 1;
    }
    Self(t)
  }

  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; 256] {
    &self.0
  }

  #[inline]
  const fn lookup(&self, index: u8) -> u8 {
    self.0[index as usize]
  }
}

impl Default for PearsonTable {
  /// A fixed pseudo-random permutation (Fisher-Yates driven by SplitMix64).
  fn default() -> Self {
    Self(DEFAULT_TABLE)
  }
}

impl core::fmt::Debug for PearsonTable {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("PearsonTable").field(&&self.0[..8]).finish_non_exhaustive()
  }
}

const DEFAULT_TABLE: [u8; 256] = shuffled_table(0x5045_4152_534F_4E21);

const fn shuffled_table(seed: u64) -> [u8; 256] {
  let mut t = PearsonTable::identity().0;
  let mut x = seed;
  let mut i = 255usize;
  while i > 0 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    let j = (z % (i as u64 + 1)) as usize;
    let tmp = t[i];
    t[i] = t[j];
    t[j] = tmp;
    i -= 1;
  }
  t
}

/// Pearson strategy.
///
/// ```
/// use hashes::{HashTransform, fast::{Pearson, PearsonTable}};
///
/// let pearson = Pearson::new(PearsonTable::identity(), 2)?;
/// let value = HashTransform::new(pearson).compute_hash(&[0x0F, 0xF0])?;
/// assert_eq!(value.as_bytes(), &[0xFF, 0xFE]);
/// # Ok::<(), traits::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Pearson {
  table: PearsonTable,
  hash_len: usize,
  lanes: [u8; MAX_HASH_LEN],
}

impl Pearson {
  /// # Errors
  ///
  /// [`Error::OutOfRange`] unless `hash_len` is in `1..=64`.
  pub fn new(table: PearsonTable, hash_len: usize) -> Result<Self> {
    check_hash_len(hash_len)?;
    Ok(Self { table, hash_len, lanes: initial_lanes() })
  }

  #[inline]
  #[must_use]
  pub const fn table(&self) -> &PearsonTable {
    &self.table
  }

  /// Digest length in bytes.
  #[inline]
  #[must_use]
  pub const fn hash_len(&self) -> usize {
    self.hash_len
  }

  pub fn set_table(&mut self, table: PearsonTable) -> Result<()> {
    self.table = table;
    self.lanes = initial_lanes();
    Ok(())
  }

  pub fn set_hash_len(&mut self, hash_len: usize) -> Result<()> {
    check_hash_len(hash_len)?;
    self.hash_len = hash_len;
    self.lanes = initial_lanes();
    Ok(())
  }

  fn update(&mut self, data: &[u8]) {
    let table = &self.table;
    for lane in &mut self.lanes[..self.hash_len] {
      *lane = data.iter().fold(*lane, |h, &b| table.lookup(h ^ b));
    }
  }
}

impl Default for Pearson {
  /// Default table, 8-byte digest.
  fn default() -> Self {
    Self { table: PearsonTable::default(), hash_len: 8, lanes: initial_lanes() }
  }
}

const fn check_hash_len(hash_len: usize) -> Result<()> {
  if hash_len == 0 || hash_len > MAX_HASH_LEN {
    return Err(Error::OutOfRange("Pearson hash length"));
  }
  Ok(())
}

const fn initial_lanes() -> [u8; MAX_HASH_LEN] {
  let mut lanes = [0u8; MAX_HASH_LEN];
  let mut j = 0;
  while j < MAX_HASH_LEN {
    lanes[j] = j as u8;
    j += 1;
  }
  lanes
}

impl Zeroize for Pearson {
  fn zeroize(&mut self) {
    self.lanes.zeroize();
  }
}

impl BlockHash for Pearson {
  fn block_size(&self) -> usize {
    1
  }

  fn hash_size(&self) -> usize {
    self.hash_len * 8
  }

  fn reset(&mut self) {
    self.lanes = initial_lanes();
  }

  fn process_block(&mut self, block: &[u8]) {
    self.update(block);
  }

  fn process_blocks(&mut self, blocks: &[u8]) {
    self.update(blocks);
  }

  fn finalize(&mut self, remainder: &[u8], _total_len: u64) -> Vec<u8> {
    self.update(remainder);
    self.lanes[..self.hash_len].to_vec()
  }
}

impl Reusable for Pearson {}

#[cfg(test)]
mod tests {
  use traits::HashTransform;

  use super::*;

  #[test]
  fn default_table_is_a_permutation() {
    assert!(PearsonTable::new(*PearsonTable::default().as_bytes()).is_ok());
    assert_ne!(PearsonTable::default(), PearsonTable::identity());
  }

  #[test]
  fn non_permutations_are_rejected() {
    let mut table = *PearsonTable::identity().as_bytes();
    table[10] = 11;
    assert!(matches!(PearsonTable::new(table), Err(Error::InvalidArgument(_))));
  }

  #[test]
  fn identity_table_xors_lane_index_with_input() {
    let data = b"pearson";
    let folded = data.iter().fold(0u8, |acc, &b| acc ^ b);
    let value = HashTransform::new(Pearson::new(PearsonTable::identity(), 64).unwrap()).compute_hash(data).unwrap();
    for (j, &byte) in value.as_bytes().iter().enumerate() {
      assert_eq!(byte, j as u8 ^ folded);
    }
  }

  #[test]
  fn empty_input_yields_lane_indices() {
    let value = HashTransform::new(Pearson::default()).compute_hash(b"").unwrap();
    assert_eq!(value.as_bytes(), &[0, 1, 2, 3, 4, 5, 6, 7]);
  }

  #[test]
  fn hash_len_bounds() {
    assert!(Pearson::new(PearsonTable::default(), 0).is_err());
    assert!(Pearson::new(PearsonTable::default(), 65).is_err());
    let mut p = Pearson::default();
    assert_eq!(p.set_hash_len(0), Err(Error::OutOfRange("Pearson hash length")));
    assert_eq!(p.hash_len(), 8);
    for len in [1, 16, 64] {
      let value = HashTransform::new(Pearson::new(PearsonTable::default(), len).unwrap()).compute_hash(b"x").unwrap();
      assert_eq!(value.len(), len);
      assert_eq!(value.bits(), len * 8);
    }
  }

  #[test]
  fn table_is_guarded_by_transform_state() {
    let mut t = HashTransform::new(Pearson::default());
    t.update(b"abc").unwrap();
    assert!(t.configure(|alg| alg.set_table(PearsonTable::identity())).is_err());
    t.initialize().unwrap();
    t.configure(|alg| alg.set_table(PearsonTable::identity())).unwrap();
    assert_eq!(t.algorithm().unwrap().table(), &PearsonTable::identity());
  }

  #[test]
  fn single_byte_change_changes_digest() {
    let mut t = HashTransform::new(Pearson::default());
    let a = t.compute_hash(b"hello world").unwrap();
    let b = t.compute_hash(b"hello worle").unwrap();
    assert_ne!(a, b);
  }
}
