/// Little-endian load of up to 8 bytes; missing high bytes are zero.
#[inline]
pub(crate) fn load_le_u64(bytes: &[u8]) -> u64 {
  bytes.iter().rev().fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

/// Little-endian load of up to 4 bytes; missing high bytes are zero.
#[inline]
pub(crate) fn load_le_u32(bytes: &[u8]) -> u32 {
  bytes.iter().rev().fold(0u32, |acc, &b| (acc << 8) | u32::from(b))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn loads_are_little_endian() {
    assert_eq!(load_le_u64(&[1, 2, 3, 4, 5, 6, 7, 8]), 0x0807_0605_0403_0201);
    assert_eq!(load_le_u64(&[0xAA]), 0xAA);
    assert_eq!(load_le_u64(&[]), 0);
    assert_eq!(load_le_u32(&[1, 2, 3, 4]), 0x0403_0201);
    assert_eq!(load_le_u32(&[1, 2]), 0x0201);
  }
}
