//! Differential fuzzing against reference implementations.

#![no_main]

use checksum::{Crc, CrcParams};
use crc_fast::CrcAlgorithm;
use hashes::{HashTransform, fast::SipHash};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  for (params, algorithm) in [
    (CrcParams::CRC32_ISO_HDLC, CrcAlgorithm::Crc32IsoHdlc),
    (CrcParams::CRC32C, CrcAlgorithm::Crc32Iscsi),
    (CrcParams::CRC64_XZ, CrcAlgorithm::Crc64Xz),
    (CrcParams::CRC64_NVME, CrcAlgorithm::Crc64Nvme),
  ] {
    let ours = Crc::checksum(params, data).unwrap();
    let reference = crc_fast::checksum(algorithm, data);
    assert_eq!(
      ours, reference,
      "{} differential mismatch: ours={:#018x}, reference={:#018x}, len={}",
      params.name, ours, reference, data.len()
    );
  }

  let ours = HashTransform::new(SipHash::new([0; 16])).compute_hash(data).unwrap().to_u64_le().unwrap();
  let reference = {
    use core::hash::Hasher as _;
    let mut h = siphasher::sip::SipHasher24::new_with_keys(0, 0);
    h.write(data);
    h.finish()
  };
  assert_eq!(ours, reference, "SipHash-2-4 differential mismatch, len={}", data.len());
});
