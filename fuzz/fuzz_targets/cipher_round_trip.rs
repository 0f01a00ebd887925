//! Encrypt-then-decrypt through the streaming cipher transform.

#![no_main]

use arbitrary::Arbitrary;
use cipher::{CipherMode, CryptoTransform, ModeTransform, Padding, PaddingMode, Threefish256};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  key: [u8; 32],
  tweak: [u8; 16],
  iv: [u8; 32],
  cbc: bool,
  padding: u8,
  chunk: u8,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let mode = if input.cbc { CipherMode::Cbc } else { CipherMode::Ecb };
  let padding = match input.padding % 3 {
    0 => PaddingMode::Pkcs7,
    1 => PaddingMode::AnsiX923,
    _ => PaddingMode::Iso10126,
  };
  let padding = Padding::new(padding, 32).unwrap();
  let cipher = Threefish256::new(&input.key, &input.tweak);
  let chunk = usize::from(input.chunk).max(1);

  let mut enc = CryptoTransform::encryptor(ModeTransform::new(&cipher, mode, &input.iv).unwrap(), padding).unwrap();
  let mut ct = Vec::new();
  for piece in input.data.chunks(chunk) {
    ct.extend(enc.transform_block(piece).unwrap());
  }
  ct.extend(enc.transform_final_block(&[]).unwrap());
  assert_eq!(ct.len() % 32, 0);

  let mut dec = CryptoTransform::decryptor(ModeTransform::new(&cipher, mode, &input.iv).unwrap(), padding).unwrap();
  let mut plain = Vec::new();
  for piece in ct.chunks(chunk) {
    plain.extend(dec.transform_block(piece).unwrap());
  }
  plain.extend(dec.transform_final_block(&[]).unwrap());
  assert_eq!(plain, input.data);
});
