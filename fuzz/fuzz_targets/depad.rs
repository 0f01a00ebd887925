//! Depadding arbitrary bytes never panics, and accepted input re-pads to itself.

#![no_main]

use arbitrary::Arbitrary;
use cipher::{Padding, PaddingMode};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  block_size: u8,
  mode: u8,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let mode = match input.mode % 5 {
    0 => PaddingMode::None,
    1 => PaddingMode::Zeros,
    2 => PaddingMode::Pkcs7,
    3 => PaddingMode::AnsiX923,
    _ => PaddingMode::Iso10126,
  };
  let Ok(padding) = Padding::new(mode, usize::from(input.block_size)) else {
    return;
  };
  let Ok(stripped) = padding.depad(&input.data) else {
    return;
  };
  assert!(stripped.len() <= input.data.len());
  if matches!(mode, PaddingMode::Pkcs7 | PaddingMode::AnsiX923) {
    assert_eq!(padding.pad(&stripped).unwrap(), input.data);
  }
});
