//! CRC lookup table generation for any width in `1..=64`.
//!
//! # Table Shape
//!
//! | Width | Index bits | Entries |
//! |-------|------------|---------|
//! | 1..=7 | `width` | `2^width` |
//! | 8..=64 | 8 | 256 |
//!
//! Entries are stored in `u64` regardless of width; only the low `width`
//! bits are ever set.
//!
//! Narrow CRCs consume each byte in `width`-bit chunks through the table, so
//! the table is indexed by exactly one chunk.

use traits::{Error, Result};

use crate::bits::{reflect_bits, width_mask};

/// Number of input bits consumed per table lookup.
#[inline]
#[must_use]
pub(crate) const fn index_bits(width: u8) -> u8 {
  if width < 8 { width } else { 8 }
}

/// Compute one table entry for `index`.
///
/// The index (bit-reversed over the index width for reflected tables) is
/// aligned to the top of the register and divided MSB-first, one bit per
/// index bit, masking to `width` after every step.
#[must_use]
fn table_entry(width: u8, polynomial: u64, reflect: bool, index: u64) -> u64 {
  let mask = width_mask(width);
  let k = index_bits(width);
  let top = 1u64 << (width - 1);

  let aligned = if reflect { reflect_bits(index, k) } else { index };
  let mut reg = (aligned << (width - k)) & mask;
  for _ in 0..k {
    reg = if reg & top != 0 { ((reg << 1) ^ polynomial) & mask } else { (reg << 1) & mask };
  }

  if reflect { reflect_bits(reg, width) } else { reg }
}

/// Build the lookup table for a `width`-bit CRC.
///
/// Polynomial bits above `width` are ignored; a zero polynomial yields an
/// all-zero table.
///
/// # Errors
///
/// [`Error::OutOfRange`] if `width` is not in `1..=64`.
///
/// ```
/// use checksum::build_table;
///
/// let table = build_table(32, 0x04C1_1DB7, true)?;
/// assert_eq!(table.len(), 256);
/// assert_eq!(table[1], 0x7707_3096);
/// # Ok::<(), traits::Error>(())
/// ```
pub fn build_table(width: u8, polynomial: u64, reflect: bool) -> Result<Vec<u64>> {
  if width == 0 || width > 64 {
    return Err(Error::OutOfRange("CRC width"));
  }
  let polynomial = polynomial & width_mask(width);
  let entries = 1u64 << index_bits(width);
  Ok((0..entries).map(|i| table_entry(width, polynomial, reflect, i)).collect())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn widths_outside_range_are_rejected() {
    assert_eq!(build_table(0, 0x07, false), Err(Error::OutOfRange("CRC width")));
    assert_eq!(build_table(65, 0x07, false), Err(Error::OutOfRange("CRC width")));
  }

  #[test]
  fn crc32_reflected_table_matches_zlib() {
    let table = build_table(32, 0x04C1_1DB7, true).unwrap();
    assert_eq!(table.len(), 256);
    assert_eq!(table[0], 0);
    assert_eq!(table[1], 0x7707_3096);
    assert_eq!(table[128], 0xEDB8_8320);
    assert_eq!(table[255], 0x2D02_EF8D);
    assert!(table.iter().all(|&e| e <= u64::from(u32::MAX)));
  }

  #[test]
  fn crc32_normal_table_matches_mpeg2() {
    let table = build_table(32, 0x04C1_1DB7, false).unwrap();
    assert_eq!(table[1], 0x04C1_1DB7);
    assert_eq!(table[255], 0xB1F7_40B4);
  }

  #[test]
  fn crc16_tables() {
    // CRC-16/ARC (reflected 0xA001)
    let arc = build_table(16, 0x8005, true).unwrap();
    assert_eq!(arc[1], 0xC0C1);
    assert_eq!(arc[128], 0xA001);
    // CRC-16/XMODEM
    let xmodem = build_table(16, 0x1021, false).unwrap();
    assert_eq!(xmodem[1], 0x1021);
    assert_eq!(xmodem[2], 0x2042);
  }

  #[test]
  fn crc8_table() {
    let smbus = build_table(8, 0x07, false).unwrap();
    assert_eq!(smbus[1], 0x07);
    assert_eq!(smbus[0x80], 0x89);
  }

  #[test]
  fn narrow_widths_have_small_tables() {
    for width in 1..8u8 {
      let table = build_table(width, 0x3, true).unwrap();
      assert_eq!(table.len(), 1 << width, "width {width}");
      assert!(table.iter().all(|&e| e < (1 << width)));
    }
  }

  #[test]
  fn polynomial_high_bits_are_ignored() {
    assert_eq!(build_table(16, 0xFFFF_1021, false), build_table(16, 0x1021, false));
  }

  #[test]
  fn zero_polynomial_yields_zero_table() {
    for width in [3u8, 8, 16, 64] {
      for reflect in [false, true] {
        assert!(build_table(width, 0, reflect).unwrap().iter().all(|&e| e == 0));
      }
    }
  }

  #[test]
  fn deterministic() {
    assert_eq!(build_table(64, 0x42F0_E1EB_A9EA_3693, true), build_table(64, 0x42F0_E1EB_A9EA_3693, true));
  }
}
