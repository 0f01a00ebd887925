//! Cross-library validation against RustCrypto `tiger`.
#![cfg(not(miri))]

use hashes::{
  HashTransform,
  crypto::{Tiger, TigerVariant},
};
use proptest::prelude::*;
use tiger::Digest as _;

fn ours(variant: TigerVariant, data: &[u8], chunk: usize) -> Vec<u8> {
  let mut t = HashTransform::new(Tiger::with_variant(variant));
  for part in data.chunks(chunk) {
    t.update(part).unwrap();
  }
  t.finalize().unwrap().into_bytes()
}

proptest! {
  #[test]
  fn tiger_matches_rustcrypto(data in proptest::collection::vec(any::<u8>(), 0..=2048), chunk in 1usize..=129) {
    let reference = tiger::Tiger::digest(&data);
    prop_assert_eq!(ours(TigerVariant::Tiger, &data, chunk), reference.as_slice());
  }

  #[test]
  fn tiger2_matches_rustcrypto(data in proptest::collection::vec(any::<u8>(), 0..=2048), chunk in 1usize..=129) {
    let reference = tiger::Tiger2::digest(&data);
    prop_assert_eq!(ours(TigerVariant::Tiger2, &data, chunk), reference.as_slice());
  }
}

#[test]
fn padding_edges_match_rustcrypto() {
  for len in [0usize, 1, 55, 56, 57, 63, 64, 65, 119, 120, 128] {
    let data = vec![0x5Au8; len];
    assert_eq!(ours(TigerVariant::Tiger, &data, 64), tiger::Tiger::digest(&data).as_slice(), "len {len}");
    assert_eq!(ours(TigerVariant::Tiger2, &data, 64), tiger::Tiger2::digest(&data).as_slice(), "len {len}");
  }
}
