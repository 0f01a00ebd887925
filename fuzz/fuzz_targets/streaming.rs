//! Fuzz target for the streaming transform.
//!
//! Arbitrary chunkings of the same input must produce the one-shot digest.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Adler32, Crc, CrcParams, Fletcher, FletcherWidth};
use hashes::{
  crypto::{CubeHash, Tiger},
  fast::{Elf64, Fnv, Pearson, SipHash},
};
use libfuzzer_sys::fuzz_target;
use traits::{HashTransform, Reusable};

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
  /// Index into the CRC catalogue
  crc: u8,
}

fuzz_target!(|input: Input| {
  let params = CrcParams::CATALOGUE[usize::from(input.crc) % CrcParams::CATALOGUE.len()];
  check(|| Crc::new(params).unwrap(), &input);
  check(Adler32::new, &input);
  check(|| Fletcher::new(FletcherWidth::Bits32), &input);
  check(Fnv::default, &input);
  check(Pearson::default, &input);
  check(|| SipHash::new([0x0F; 16]), &input);
  check(|| CubeHash::new(8, 32, 256).unwrap(), &input);
  check(Tiger::new, &input);
  check(Elf64::new, &input);
});

fn check<A: Reusable>(make: impl Fn() -> A, input: &Input) {
  let data = &input.data;
  let expected = HashTransform::new(make()).compute_hash(data).unwrap();

  let mut t = HashTransform::new(make());
  let mut offset = 0;
  let mut chunk_idx = 0;
  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      (input.chunk_sizes[chunk_idx % input.chunk_sizes.len()] % 256).max(1)
    };
    let end = (offset + chunk_size).min(data.len());
    t.transform_block(data, offset, end - offset).unwrap();
    offset = end;
    chunk_idx += 1;
  }
  assert_eq!(t.finalize().unwrap(), expected, "streaming mismatch");

  // Re-initialized transforms start over.
  t.initialize().unwrap();
  assert_eq!(t.compute_hash(data).unwrap(), expected, "reuse mismatch");
}
