use hashes::{HashTransform, fast::SipHash};
use proptest::prelude::*;

fn key_bytes(key: [u64; 2]) -> [u8; 16] {
  let mut out = [0u8; 16];
  out[..8].copy_from_slice(&key[0].to_le_bytes());
  out[8..].copy_from_slice(&key[1].to_le_bytes());
  out
}

fn siphasher13_ref(key: [u64; 2], data: &[u8]) -> u64 {
  use core::hash::Hasher as _;
  let mut h = siphasher::sip::SipHasher13::new_with_keys(key[0], key[1]);
  h.write(data);
  h.finish()
}

fn siphasher24_ref(key: [u64; 2], data: &[u8]) -> u64 {
  use core::hash::Hasher as _;
  let mut h = siphasher::sip::SipHasher24::new_with_keys(key[0], key[1]);
  h.write(data);
  h.finish()
}

fn ours(key: [u64; 2], c: u8, d: u8, data: &[u8]) -> u64 {
  let sip = SipHash::with_key_and_rounds(key_bytes(key), c, d).unwrap();
  HashTransform::new(sip).compute_hash(data).unwrap().to_u64_le().unwrap()
}

proptest! {
  #[test]
  fn siphash13_matches_siphasher(key in any::<[u64; 2]>(), data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    prop_assert_eq!(ours(key, 1, 3, &data), siphasher13_ref(key, &data));
  }

  #[test]
  fn siphash24_matches_siphasher(key in any::<[u64; 2]>(), data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    prop_assert_eq!(ours(key, 2, 4, &data), siphasher24_ref(key, &data));
  }

  #[test]
  fn siphash24_streaming_matches_siphasher(
    key in any::<[u64; 2]>(),
    data in proptest::collection::vec(any::<u8>(), 0..1024),
    split in 0usize..1024,
  ) {
    let split = split.min(data.len());
    let mut t = HashTransform::new(SipHash::new(key_bytes(key)));
    t.update(&data[..split]).unwrap();
    t.update(&data[split..]).unwrap();
    let value = t.finalize().unwrap().to_u64_le().unwrap();
    prop_assert_eq!(value, siphasher24_ref(key, &data));
  }
}
