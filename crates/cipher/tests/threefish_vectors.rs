//! Threefish known answers and cross-library validation against RustCrypto `threefish`.

use cipher::{BlockCipher, Threefish1024, Threefish256, Threefish512};

const TWEAK: [u8; 16] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];

fn ascending<const N: usize>(start: u8) -> [u8; N] {
  core::array::from_fn(|i| start.wrapping_add(i as u8))
}

fn descending<const N: usize>() -> [u8; N] {
  core::array::from_fn(|i| 0xFF - i as u8)
}

fn assert_encrypts<C: BlockCipher>(cipher: &C, plain: &[u8], expected_hex: &str) {
  let expected = hex::decode(expected_hex).unwrap();
  let mut block = plain.to_vec();
  cipher.encrypt_block(&mut block);
  assert_eq!(block, expected);
  cipher.decrypt_block(&mut block);
  assert_eq!(block, plain);
}

#[test]
fn threefish256_known_answers() {
  assert_encrypts(
    &Threefish256::new(&[0; 32], &[0; 16]),
    &[0; 32],
    "84DA2A1F8BEAEE947066AE3E3103F1AD536DB1F4A1192495116B9F3CE6133FD8",
  );
  assert_encrypts(
    &Threefish256::new(&ascending(0x10), &TWEAK),
    &descending::<32>(),
    "E0D091FF0EEA8FDFC98192E62ED80AD59D865D08588DF476657056B5955E97DF",
  );
}

#[test]
fn threefish512_known_answers() {
  assert_encrypts(
    &Threefish512::new(&[0; 64], &[0; 16]),
    &[0; 64],
    "B1A2BBC6EF6025BC40EB3822161F36E375D1BB0AEE3186FBD19E47C5D479947B\
     7BC2F8586E35F0CFF7E7F03084B0B7B1F1AB3961A580A3E97EB41EA14A6D7BBE",
  );
  assert_encrypts(
    &Threefish512::new(&ascending(0x10), &TWEAK),
    &descending::<64>(),
    "E304439626D45A2CB401CAD8D636249A6338330EB06D45DD8B36B90E97254779\
     272A0A8D99463504784420EA18C9A725AF11DFFEA10162348927673D5C1CAF3D",
  );
}

#[test]
fn threefish1024_known_answers() {
  assert_encrypts(
    &Threefish1024::new(&[0; 128], &[0; 16]),
    &[0; 128],
    "F05C3D0A3D05B304F785DDC7D1E036015C8AA76E2F217B06C6E1544C0BC1A90D\
     F0ACCB9473C24E0FD54FEA68057F43329CB454761D6DF5CF7B2E9B3614FBD5A2\
     0B2E4760B40603540D82EABC5482C171C832AFBE68406BC39500367A592943FA\
     9A5B4A43286CA3C4CF46104B443143D560A4B230488311DF4FEEF7E1DFE8391E",
  );
  assert_encrypts(
    &Threefish1024::new(&ascending(0x10), &TWEAK),
    &descending::<128>(),
    "A6654DDBD73CC3B05DD777105AA849BCE49372EAAFFC5568D254771BAB85531C\
     94F780E7FFAAE430D5D8AF8C70EEBBE1760F3B42B737A89CB363490D670314BD\
     8AA41EE63C2E1F45FBD477922F8360B388D6125EA6C7AF0AD7056D01796E90C8\
     3313F4150A5716B30ED5F569288AE974CE2B4347926FCE57DE44512177DD7CDE",
  );
}

// Proptest uses getcwd() which fails under Miri isolation.
#[cfg(not(miri))]
mod differential {
  use proptest::prelude::*;

  use super::*;

  fn words<const W: usize>(bytes: &[u8]) -> [u64; W] {
    core::array::from_fn(|i| u64::from_le_bytes(bytes[i * 8..i * 8 + 8].try_into().unwrap()))
  }

  fn to_bytes(words: &[u64]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
  }

  fn ours<C: BlockCipher>(cipher: &C, plain: &[u8]) -> Vec<u8> {
    let mut block = plain.to_vec();
    cipher.encrypt_block(&mut block);
    block
  }

  proptest! {
    #[test]
    fn threefish256_matches_rustcrypto(
      key in any::<[u8; 32]>(),
      tweak in any::<[u8; 16]>(),
      plain in any::<[u8; 32]>(),
    ) {
      let mut reference = words::<4>(&plain);
      threefish::Threefish256::new_with_tweak(&key, &tweak).encrypt_block_u64(&mut reference);
      prop_assert_eq!(ours(&Threefish256::new(&key, &tweak), &plain), to_bytes(&reference));
    }

    #[test]
    fn threefish512_matches_rustcrypto(
      key in proptest::collection::vec(any::<u8>(), 64),
      tweak in any::<[u8; 16]>(),
      plain in proptest::collection::vec(any::<u8>(), 64),
    ) {
      let key: [u8; 64] = key.try_into().unwrap();
      let mut reference = words::<8>(&plain);
      threefish::Threefish512::new_with_tweak(&key, &tweak).encrypt_block_u64(&mut reference);
      prop_assert_eq!(ours(&Threefish512::new(&key, &tweak), &plain), to_bytes(&reference));
    }

    #[test]
    fn threefish1024_matches_rustcrypto(
      key in proptest::collection::vec(any::<u8>(), 128),
      tweak in any::<[u8; 16]>(),
      plain in proptest::collection::vec(any::<u8>(), 128),
    ) {
      let key: [u8; 128] = key.try_into().unwrap();
      let mut reference = words::<16>(&plain);
      threefish::Threefish1024::new_with_tweak(&key, &tweak).encrypt_block_u64(&mut reference);
      prop_assert_eq!(ours(&Threefish1024::new(&key, &tweak), &plain), to_bytes(&reference));
    }
  }
}
