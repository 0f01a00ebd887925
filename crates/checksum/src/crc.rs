//! Table-driven Rocksoft-model CRC over any [`CrcParams`].
//!
//! # Register Domain
//!
//! For `reflect_in` CRCs the register is kept bit-reversed, so each byte is
//! folded in LSB-first with a right shift (the classic zlib loop). Otherwise
//! the register is kept in natural order and bytes enter at the top.
//!
//! Widths below 8 split each byte into `width`-bit chunks (one table lookup
//! each) and finish the `8 mod width` leftover bits one at a time.

// SAFETY: Every table index is masked to the table length (`0xFF` for
// 256-entry tables, `width_mask(width)` for `2^width`-entry tables).
#![allow(clippy::indexing_slicing)]

use traits::{BlockHash, Result, Reusable};
use zeroize::Zeroize;

use crate::{
  bits::{reflect_bits, width_mask},
  cache::{CrcTable, TableCache},
  params::CrcParams,
};

/// Generic CRC strategy for [`HashTransform`](traits::HashTransform).
///
/// # Example
///
/// ```
/// use checksum::{Crc, CrcParams};
/// use traits::HashTransform;
///
/// let mut crc = HashTransform::new(Crc::new(CrcParams::CRC32_ISO_HDLC)?);
/// crc.update(b"1234")?;
/// crc.update(b"56789")?;
/// assert_eq!(crc.finalize()?.to_u64_le(), Some(0xCBF4_3926));
///
/// // Switch standards while the transform is Ready.
/// crc.initialize()?;
/// crc.configure(|alg| alg.set_params(CrcParams::CRC64_XZ))?;
/// assert_eq!(crc.compute_hash(b"123456789")?.to_u64_le(), Some(0x995D_C9BB_DF19_39FA));
/// # Ok::<(), traits::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Crc {
  params: CrcParams,
  table: CrcTable,
  reg: u64,
}

impl Crc {
  /// Validate `params` and fetch the lookup table from the global cache.
  pub fn new(params: CrcParams) -> Result<Self> {
    params.validate()?;
    let table = TableCache::global().get_lookup_table(params.width, params.polynomial, params.reflect_in)?;
    Ok(Self { reg: initial_register(&params), params, table })
  }

  /// One-shot CRC of `data`.
  pub fn checksum(params: CrcParams, data: &[u8]) -> Result<u64> {
    let mut crc = Self::new(params)?;
    crc.update(data);
    Ok(crc.value())
  }

  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    &self.params
  }

  /// The shared lookup table in use.
  #[inline]
  #[must_use]
  pub fn table(&self) -> &CrcTable {
    &self.table
  }

  /// Replace the parameters and restart from the new initial value.
  ///
  /// On error `self` is left unchanged.
  pub fn set_params(&mut self, params: CrcParams) -> Result<()> {
    *self = Self::new(params)?;
    Ok(())
  }

  /// Fold `data` into the register.
  pub fn update(&mut self, data: &[u8]) {
    let width = self.params.width;
    self.reg = match (self.params.reflect_in, width >= 8) {
      (true, true) => update_reflected(self.reg, &self.table, data),
      (false, true) => update_normal(self.reg, &self.table, width, data),
      (true, false) => update_reflected_narrow(self.reg, &self.table, width, self.params.polynomial, data),
      (false, false) => update_normal_narrow(self.reg, &self.table, width, self.params.polynomial, data),
    };
  }

  /// Current CRC value (output reflection and `xor_out` applied).
  #[must_use]
  pub fn value(&self) -> u64 {
    let CrcParams { width, reflect_in, reflect_out, xor_out, .. } = self.params;
    // A reflected register already holds the reflected output.
    let out = if reflect_in == reflect_out { self.reg } else { reflect_bits(self.reg, width) };
    (out ^ xor_out) & width_mask(width)
  }
}

#[inline]
fn initial_register(params: &CrcParams) -> u64 {
  if params.reflect_in { reflect_bits(params.initial, params.width) } else { params.initial & width_mask(params.width) }
}

fn update_reflected(mut crc: u64, table: &[u64], data: &[u8]) -> u64 {
  for &b in data {
    crc = table[((crc ^ u64::from(b)) & 0xFF) as usize] ^ (crc >> 8);
  }
  crc
}

fn update_normal(mut crc: u64, table: &[u64], width: u8, data: &[u8]) -> u64 {
  let mask = width_mask(width);
  let shift = width - 8;
  for &b in data {
    crc = table[(((crc >> shift) ^ u64::from(b)) & 0xFF) as usize] ^ ((crc << 8) & mask);
  }
  crc
}

fn update_reflected_narrow(mut crc: u64, table: &[u64], width: u8, polynomial: u64, data: &[u8]) -> u64 {
  let mask = width_mask(width);
  let poly = reflect_bits(polynomial, width);
  let chunks = 8 / width;
  let rem = 8 % width;
  for &b in data {
    let mut byte = u64::from(b);
    for _ in 0..chunks {
      crc = table[((crc ^ byte) & mask) as usize];
      byte >>= width;
    }
    crc ^= byte;
    for _ in 0..rem {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
    }
  }
  crc
}

fn update_normal_narrow(mut crc: u64, table: &[u64], width: u8, polynomial: u64, data: &[u8]) -> u64 {
  let mask = width_mask(width);
  let top = 1u64 << (width - 1);
  let chunks = 8 / width;
  let rem = 8 % width;
  for &b in data {
    let byte = u64::from(b);
    for j in 1..=chunks {
      let chunk = (byte >> (8 - width * j)) & mask;
      crc = table[((crc ^ chunk) & mask) as usize];
    }
    crc ^= (byte & ((1 << rem) - 1)) << (width - rem);
    for _ in 0..rem {
      crc = if crc & top != 0 { ((crc << 1) ^ polynomial) & mask } else { (crc << 1) & mask };
    }
  }
  crc
}

impl Zeroize for Crc {
  fn zeroize(&mut self) {
    self.reg.zeroize();
  }
}

impl BlockHash for Crc {
  fn block_size(&self) -> usize {
    1
  }

  fn hash_size(&self) -> usize {
    usize::from(self.params.width)
  }

  fn reset(&mut self) {
    self.reg = initial_register(&self.params);
  }

  fn process_block(&mut self, block: &[u8]) {
    self.update(block);
  }

  fn process_blocks(&mut self, blocks: &[u8]) {
    self.update(blocks);
  }

  fn finalize(&mut self, remainder: &[u8], _total_len: u64) -> Vec<u8> {
    self.update(remainder);
    let len = self.params.output_len();
    self.value().to_le_bytes().iter().take(len).copied().collect()
  }
}

impl Reusable for Crc {}
