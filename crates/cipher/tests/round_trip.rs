//! Property tests: every mode, padding and chunking decrypts back to the message.
#![cfg(not(miri))]

use cipher::{
  BlockCipher, CipherMode, CryptoTransform, ModeTransform, Padding, PaddingMode, Threefish256, Threefish512,
};
use proptest::prelude::*;

fn modes() -> impl Strategy<Value = CipherMode> {
  prop_oneof![Just(CipherMode::Ecb), Just(CipherMode::Cbc)]
}

fn lossless_paddings() -> impl Strategy<Value = PaddingMode> {
  prop_oneof![Just(PaddingMode::Pkcs7), Just(PaddingMode::AnsiX923), Just(PaddingMode::Iso10126)]
}

fn stream<C: BlockCipher>(t: &mut CryptoTransform<'_, C>, data: &[u8], chunk: usize) -> Vec<u8> {
  let mut out = Vec::new();
  for piece in data.chunks(chunk) {
    out.extend(t.transform_block(piece).unwrap());
  }
  out.extend(t.transform_final_block(&[]).unwrap());
  out
}

proptest! {
  #[test]
  fn stream_round_trip(
    key in any::<[u8; 32]>(),
    iv in any::<[u8; 32]>(),
    mode in modes(),
    padding in lossless_paddings(),
    message in proptest::collection::vec(any::<u8>(), 0..300),
    enc_chunk in 1usize..64,
    dec_chunk in 1usize..64,
  ) {
    let cipher = Threefish256::new(&key, &[0; 16]);
    let padding = Padding::new(padding, 32).unwrap();

    let mut enc = CryptoTransform::encryptor(ModeTransform::new(&cipher, mode, &iv).unwrap(), padding).unwrap();
    let ct = stream(&mut enc, &message, enc_chunk);
    prop_assert_eq!(ct.len() % 32, 0);
    prop_assert!(ct.len() > message.len());

    let mut dec = CryptoTransform::decryptor(ModeTransform::new(&cipher, mode, &iv).unwrap(), padding).unwrap();
    prop_assert_eq!(stream(&mut dec, &ct, dec_chunk), message);
  }

  #[test]
  fn zeros_round_trip_with_nonzero_tail(
    mut message in proptest::collection::vec(any::<u8>(), 1..200),
    last in 1u8..=255,
  ) {
    if let Some(tail) = message.last_mut() {
      *tail = last;
    }
    let cipher = Threefish512::new(&[3; 64], &[1; 16]);
    let padding = Padding::new(PaddingMode::Zeros, 64).unwrap();
    let mode = || ModeTransform::new(&cipher, CipherMode::Cbc, &[5; 64]).unwrap();
    let mut enc = CryptoTransform::encryptor(mode(), padding).unwrap();
    let ct = enc.transform_final_block(&message).unwrap();
    let mut dec = CryptoTransform::decryptor(mode(), padding).unwrap();
    prop_assert_eq!(dec.transform_final_block(&ct).unwrap(), message);
  }

  #[test]
  fn padding_round_trip_any_block_size(
    block_size in 1usize..=255,
    padding in lossless_paddings(),
    message in proptest::collection::vec(any::<u8>(), 0..600),
  ) {
    let p = Padding::new(padding, block_size).unwrap();
    let padded = p.pad(&message).unwrap();
    prop_assert_eq!(padded.len() % block_size, 0);
    prop_assert_eq!(p.depad(&padded).unwrap(), message);
  }

  #[test]
  fn mode_in_place_matches_out_of_place(
    mode in modes(),
    blocks in 0usize..6,
    seed in any::<u8>(),
    encrypt in any::<bool>(),
  ) {
    let cipher = Threefish256::new(&[seed; 32], &[seed; 16]);
    let input: Vec<u8> = (0..blocks * 32).map(|i| (i as u8) ^ seed).collect();
    let iv = [seed.wrapping_add(1); 32];

    let mut out = vec![0u8; input.len()];
    ModeTransform::new(&cipher, mode, &iv).unwrap().transform(&input, &mut out, encrypt).unwrap();
    let mut in_place = input.clone();
    ModeTransform::new(&cipher, mode, &iv).unwrap().transform_in_place(&mut in_place, encrypt).unwrap();
    prop_assert_eq!(out, in_place);
  }
}
