use checksum::{Crc, CrcParams, build_table, reflect_bits};
use proptest::prelude::*;
use traits::HashTransform;

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed | 1;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

/// Bit-at-a-time Rocksoft model: the definition every table-driven path must match.
fn crc_bitwise(params: &CrcParams, data: &[u8]) -> u64 {
  let width = u32::from(params.width);
  let mask = if width >= 64 { u64::MAX } else { (1u64 << width) - 1 };
  let top = 1u64 << (width - 1);

  let mut crc = params.initial & mask;
  for &byte in data {
    let byte = if params.reflect_in { byte.reverse_bits() } else { byte };
    for bit in (0..8).rev() {
      let incoming = u64::from((byte >> bit) & 1);
      let feedback = ((crc & top) != 0) as u64 ^ incoming;
      crc = (crc << 1) & mask;
      if feedback != 0 {
        crc ^= params.polynomial;
      }
    }
  }
  if params.reflect_out {
    crc = reflect_bits(crc, params.width);
  }
  (crc ^ params.xor_out) & mask
}

#[test]
fn bitwise_oracle_agrees_with_check_values() {
  assert_eq!(crc_bitwise(&CrcParams::CRC32_ISO_HDLC, b"123456789"), 0xCBF4_3926);
  assert_eq!(crc_bitwise(&CrcParams::CRC5_USB, b"123456789"), 0x19);
  assert_eq!(crc_bitwise(&CrcParams::CRC7_MMC, b"123456789"), 0x75);
}

#[test]
fn catalogue_matches_bitwise_reference() {
  let lengths = [0usize, 1, 2, 3, 4, 7, 8, 15, 16, 31, 32, 63, 64, 255, 256, 1024];
  let seeds = [0u64, 1, 0x0123_4567_89ab_cdef, 0xd1b5_4a32_d192_ed03];

  for params in CrcParams::CATALOGUE {
    for &len in &lengths {
      for &seed in &seeds {
        let data = gen_bytes(len, seed ^ len as u64);
        let ours = Crc::checksum(*params, &data).unwrap();
        assert_eq!(ours, crc_bitwise(params, &data), "{} mismatch at len={len}", params.name);
      }
    }
  }
}

#[test]
fn every_width_matches_bitwise_reference() {
  let data = gen_bytes(97, 42);
  for width in 1..=64u8 {
    let mask = if width == 64 { u64::MAX } else { (1u64 << width) - 1 };
    for (reflect_in, reflect_out) in [(false, false), (true, true), (true, false), (false, true)] {
      let params = CrcParams {
        name: "custom",
        width,
        polynomial: 0x9E37_79B9_7F4A_7C15 & mask | 1,
        initial: 0xA5A5_A5A5_A5A5_A5A5 & mask,
        reflect_in,
        reflect_out,
        xor_out: 0x0F0F_0F0F_0F0F_0F0F & mask,
      };
      assert_eq!(
        Crc::checksum(params, &data).unwrap(),
        crc_bitwise(&params, &data),
        "width={width} refin={reflect_in} refout={reflect_out}"
      );
    }
  }
}

#[test]
fn crc32_table_shape() {
  let table = build_table(32, CrcParams::CRC32_ISO_HDLC.polynomial, true).unwrap();
  assert_eq!(table.len(), 256);
  assert!(table.iter().all(|&e| e >> 32 == 0));
}

#[test]
fn transform_splits_match_one_shot() {
  let data = gen_bytes(513, 7);
  for params in [CrcParams::CRC3_ROHC, CrcParams::CRC16_KERMIT, CrcParams::CRC24_OPENPGP, CrcParams::CRC64_NVME] {
    let expected = HashTransform::new(Crc::new(params).unwrap()).compute_hash(&data).unwrap();
    for &split in &[0usize, 1, 256, 512, 513] {
      let mut t = HashTransform::new(Crc::new(params).unwrap());
      t.transform_block(&data, 0, split).unwrap();
      let got = t.transform_final_block(&data, split, data.len() - split).unwrap();
      assert_eq!(got, expected, "{} split={split}", params.name);
    }
  }
}

fn any_params() -> impl Strategy<Value = CrcParams> {
  (1u8..=64, any::<u64>(), any::<u64>(), any::<bool>(), any::<bool>(), any::<u64>()).prop_map(
    |(width, poly, init, refin, refout, xorout)| {
      let mask = if width == 64 { u64::MAX } else { (1u64 << width) - 1 };
      CrcParams {
        name: "arbitrary",
        width,
        polynomial: poly & mask,
        initial: init & mask,
        reflect_in: refin,
        reflect_out: refout,
        xor_out: xorout & mask,
      }
    },
  )
}

proptest! {
  #[test]
  fn arbitrary_params_match_bitwise(params in any_params(), data in proptest::collection::vec(any::<u8>(), 0..=256)) {
    prop_assert_eq!(Crc::checksum(params, &data).unwrap(), crc_bitwise(&params, &data));
  }

  #[test]
  fn streaming_matches_oneshot(
    params in any_params(),
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
    chunk in 1usize..=67,
  ) {
    let expected = HashTransform::new(Crc::new(params).unwrap()).compute_hash(&data).unwrap();
    let mut t = HashTransform::new(Crc::new(params).unwrap());
    for part in data.chunks(chunk) {
      t.update(part).unwrap();
    }
    prop_assert_eq!(t.finalize().unwrap(), expected);
  }

  #[test]
  fn table_entries_fit_width(width in 1u8..=64, poly in any::<u64>(), reflect in any::<bool>()) {
    let table = build_table(width, poly, reflect).unwrap();
    let mask = if width == 64 { u64::MAX } else { (1u64 << width) - 1 };
    prop_assert_eq!(table.len(), 1usize << width.min(8));
    prop_assert!(table.iter().all(|&e| e & !mask == 0));
    prop_assert_eq!(table[0], 0);
  }
}
