//! Bit reflection helpers.
//!
//! "Reflected" means bit-reversed: for LSB-first CRCs the register, the
//! polynomial and every input byte are processed in bit-reversed order.

/// Reflect (bit-reverse) the lower `width` bits of `value`.
///
/// Bits above `width` are discarded; `width == 0` yields 0.
///
/// ```
/// use checksum::reflect_bits;
///
/// assert_eq!(reflect_bits(0x04C1_1DB7, 32), 0xEDB8_8320);
/// assert_eq!(reflect_bits(0b011, 3), 0b110);
/// ```
#[inline]
#[must_use]
pub const fn reflect_bits(value: u64, width: u8) -> u64 {
  if width == 0 {
    return 0;
  }
  let width = if width > 64 { 64 } else { width };
  value.reverse_bits() >> (64 - width as u32)
}

/// Reflect all eight bits of `byte`.
#[inline]
#[must_use]
pub const fn reflect_byte(byte: u8) -> u8 {
  byte.reverse_bits()
}

/// All-ones mask of `width` bits (`width` in `1..=64`).
#[inline]
#[must_use]
pub(crate) const fn width_mask(width: u8) -> u64 {
  if width >= 64 { u64::MAX } else { (1u64 << width) - 1 }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reflect_known_polynomials() {
    // CRC32-C polynomial 0x1EDC6F41 reflected is 0x82F63B78
    assert_eq!(reflect_bits(0x1EDC_6F41, 32), 0x82F6_3B78);
    // CRC-64/XZ
    assert_eq!(reflect_bits(0x42F0_E1EB_A9EA_3693, 64), 0xC96C_5795_D787_0F42);
    // CRC-16/ARC
    assert_eq!(reflect_bits(0x8005, 16), 0xA001);
  }

  #[test]
  fn reflect_small_widths() {
    assert_eq!(reflect_bits(0b1010, 4), 0b0101);
    assert_eq!(reflect_bits(0b1100, 4), 0b0011);
    assert_eq!(reflect_bits(0xFF, 8), 0xFF);
    assert_eq!(reflect_bits(0x80, 8), 0x01);
    assert_eq!(reflect_bits(1, 1), 1);
    assert_eq!(reflect_bits(0xFFFF, 0), 0);
  }

  #[test]
  fn reflect_discards_high_bits() {
    assert_eq!(reflect_bits(0xF0, 4), 0);
    assert_eq!(reflect_bits(0x1F1, 4), 0b1000);
  }

  #[test]
  fn reflect_byte_matches_reflect_bits() {
    for b in 0..=255u8 {
      assert_eq!(u64::from(reflect_byte(b)), reflect_bits(u64::from(b), 8));
      assert_eq!(reflect_byte(reflect_byte(b)), b);
    }
  }

  #[test]
  fn masks() {
    assert_eq!(width_mask(1), 1);
    assert_eq!(width_mask(24), 0x00FF_FFFF);
    assert_eq!(width_mask(64), u64::MAX);
  }
}
