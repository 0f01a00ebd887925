//! Block-alignment padding schemes.

use rand::Rng;
use traits::{Error, Result};

/// Padding scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaddingMode {
  /// No padding; input must already be block-aligned.
  None,
  /// Zero bytes up to alignment. Aligned input is left as is, so data ending
  /// in zero bytes cannot be recovered exactly.
  Zeros,
  /// `N` bytes of value `N`; an aligned input gains a full block.
  #[default]
  Pkcs7,
  /// `N - 1` zero bytes followed by `N`.
  AnsiX923,
  /// `N - 1` random bytes followed by `N`.
  Iso10126,
}

impl PaddingMode {
  /// Whether the last byte of padded data is a pad count.
  #[inline]
  #[must_use]
  pub const fn is_counted(self) -> bool {
    matches!(self, Self::Pkcs7 | Self::AnsiX923 | Self::Iso10126)
  }
}

/// A padding mode bound to a block size.
///
/// ```
/// use cipher::{Padding, PaddingMode};
///
/// let pkcs7 = Padding::new(PaddingMode::Pkcs7, 8)?;
/// assert_eq!(pkcs7.pad(b"")?, [8u8; 8]);
/// assert_eq!(pkcs7.depad(&[8u8; 8])?, b"");
/// # Ok::<(), traits::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Padding {
  mode: PaddingMode,
  block_size: usize,
}

impl Padding {
  /// Largest block size a single count byte can describe.
  pub const MAX_BLOCK_SIZE: usize = 255;

  /// # Errors
  ///
  /// [`Error::OutOfRange`] unless `block_size` is in `1..=255`.
  pub const fn new(mode: PaddingMode, block_size: usize) -> Result<Self> {
    if block_size == 0 || block_size > Self::MAX_BLOCK_SIZE {
      return Err(Error::OutOfRange("padding block size must be in 1..=255"));
    }
    Ok(Self { mode, block_size })
  }

  #[inline]
  #[must_use]
  pub const fn mode(&self) -> PaddingMode {
    self.mode
  }

  #[inline]
  #[must_use]
  pub const fn block_size(&self) -> usize {
    self.block_size
  }

  /// Number of bytes [`pad`](Self::pad) appends to `len` input bytes.
  #[must_use]
  pub const fn pad_len(&self, len: usize) -> usize {
    let rem = len % self.block_size;
    match self.mode {
      PaddingMode::None => 0,
      PaddingMode::Zeros if rem == 0 => 0,
      PaddingMode::Zeros => self.block_size - rem,
      PaddingMode::Pkcs7 | PaddingMode::AnsiX923 | PaddingMode::Iso10126 => self.block_size - rem,
    }
  }

  /// Return `input` extended to a multiple of the block size.
  ///
  /// # Errors
  ///
  /// [`Error::InvalidArgument`] for [`PaddingMode::None`] with misaligned input.
  pub fn pad(&self, input: &[u8]) -> Result<Vec<u8>> {
    if self.mode == PaddingMode::None && input.len() % self.block_size != 0 {
      return Err(Error::InvalidArgument("input must be block-aligned when padding is disabled"));
    }
    let n = self.pad_len(input.len());
    let mut out = Vec::with_capacity(input.len() + n);
    out.extend_from_slice(input);
    out.resize(input.len() + n, 0);
    if n == 0 {
      return Ok(out);
    }

    let tail_start = out.len() - n;
    let tail = out.get_mut(tail_start..).unwrap_or_default();
    // n <= block_size <= 255
    let count = n as u8;
    match self.mode {
      PaddingMode::None | PaddingMode::Zeros => {}
      PaddingMode::Pkcs7 => tail.fill(count),
      PaddingMode::AnsiX923 => {
        if let Some(last) = tail.last_mut() {
          *last = count;
        }
      }
      PaddingMode::Iso10126 => {
        rand::thread_rng().fill(&mut *tail);
        if let Some(last) = tail.last_mut() {
          *last = count;
        }
      }
    }
    Ok(out)
  }

  /// Strip padding from block-aligned `input`.
  ///
  /// # Errors
  ///
  /// - [`Error::InvalidArgument`] if `input` is not block-aligned.
  /// - [`Error::InvalidPadding`] if a counted mode finds no input, a count
  ///   outside `1..=block_size`, or pad bytes of the wrong form.
  pub fn depad(&self, input: &[u8]) -> Result<Vec<u8>> {
    if input.len() % self.block_size != 0 {
      return Err(Error::InvalidArgument("padded input must be block-aligned"));
    }
    match self.mode {
      PaddingMode::None => Ok(input.to_vec()),
      PaddingMode::Zeros => {
        let block_start = input.len().saturating_sub(self.block_size);
        let last_block = input.get(block_start..).unwrap_or_default();
        let zeros = last_block.iter().rev().take_while(|&&b| b == 0).count();
        Ok(input.get(..input.len() - zeros).unwrap_or_default().to_vec())
      }
      PaddingMode::Pkcs7 | PaddingMode::AnsiX923 | PaddingMode::Iso10126 => {
        let n = usize::from(*input.last().ok_or(Error::InvalidPadding)?);
        if n == 0 || n > self.block_size {
          return Err(Error::InvalidPadding);
        }
        let (data, pad) = input.split_at(input.len() - n);
        let filler = pad.get(..n - 1).unwrap_or_default();
        let valid = match self.mode {
          PaddingMode::Pkcs7 => filler.iter().all(|&b| usize::from(b) == n),
          PaddingMode::AnsiX923 => filler.iter().all(|&b| b == 0),
          _ => true,
        };
        if valid { Ok(data.to_vec()) } else { Err(Error::InvalidPadding) }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn padding(mode: PaddingMode, block_size: usize) -> Padding {
    Padding::new(mode, block_size).unwrap()
  }

  #[test]
  fn block_size_bounds() {
    assert!(matches!(Padding::new(PaddingMode::Pkcs7, 0), Err(Error::OutOfRange(_))));
    assert!(matches!(Padding::new(PaddingMode::Zeros, 256), Err(Error::OutOfRange(_))));
    assert!(Padding::new(PaddingMode::None, 1).is_ok());
    assert!(Padding::new(PaddingMode::Iso10126, 255).is_ok());
  }

  #[test]
  fn pkcs7_empty_input_gives_full_block() {
    let p = padding(PaddingMode::Pkcs7, 8);
    let padded = p.pad(&[]).unwrap();
    assert_eq!(padded, [0x08; 8]);
    assert_eq!(p.depad(&padded).unwrap(), Vec::<u8>::new());
  }

  #[test]
  fn pkcs7_partial_and_aligned() {
    let p = padding(PaddingMode::Pkcs7, 4);
    assert_eq!(p.pad(&[1, 2, 3]).unwrap(), [1, 2, 3, 1]);
    assert_eq!(p.pad(&[1, 2, 3, 4]).unwrap(), [1, 2, 3, 4, 4, 4, 4, 4]);
  }

  #[test]
  fn pkcs7_rejects_bad_padding() {
    let p = padding(PaddingMode::Pkcs7, 4);
    assert_eq!(p.depad(&[1, 2, 3, 0]), Err(Error::InvalidPadding));
    assert_eq!(p.depad(&[1, 2, 3, 5]), Err(Error::InvalidPadding));
    assert_eq!(p.depad(&[1, 2, 3, 2]), Err(Error::InvalidPadding));
    assert_eq!(p.depad(&[]), Err(Error::InvalidPadding));
    assert!(matches!(p.depad(&[1, 2, 2]), Err(Error::InvalidArgument(_))));
  }

  #[test]
  fn ansi_x923_layout() {
    let p = padding(PaddingMode::AnsiX923, 8);
    let padded = p.pad(b"abc").unwrap();
    assert_eq!(padded, [b'a', b'b', b'c', 0, 0, 0, 0, 5]);
    assert_eq!(p.depad(&padded).unwrap(), b"abc");
    assert_eq!(p.depad(&[b'a', b'b', b'c', 0, 1, 0, 0, 5]), Err(Error::InvalidPadding));
  }

  #[test]
  fn iso10126_checks_only_the_count() {
    let p = padding(PaddingMode::Iso10126, 16);
    let padded = p.pad(b"hello").unwrap();
    assert_eq!(padded.len(), 16);
    assert_eq!(padded[15], 11);
    assert_eq!(p.depad(&padded).unwrap(), b"hello");

    let mut forged = [0xEEu8; 16];
    forged[15] = 3;
    assert_eq!(p.depad(&forged).unwrap(), [0xEE; 13]);
    forged[15] = 17;
    assert_eq!(p.depad(&forged), Err(Error::InvalidPadding));
  }

  #[test]
  fn zeros_round_trips_nonzero_tail() {
    let p = padding(PaddingMode::Zeros, 8);
    let padded = p.pad(b"abcde").unwrap();
    assert_eq!(padded, *b"abcde\0\0\0");
    assert_eq!(p.depad(&padded).unwrap(), b"abcde");
    assert_eq!(p.pad(b"abcdefgh").unwrap(), b"abcdefgh");
    assert_eq!(p.pad(&[]).unwrap(), Vec::<u8>::new());
  }

  #[test]
  fn zeros_is_lossy_for_trailing_zero_data() {
    let p = padding(PaddingMode::Zeros, 4);
    let padded = p.pad(&[1, 0]).unwrap();
    assert_eq!(p.depad(&padded).unwrap(), [1]);
  }

  #[test]
  fn zeros_strips_only_within_the_final_block() {
    let p = padding(PaddingMode::Zeros, 2);
    assert_eq!(p.depad(&[7, 0, 0, 0]).unwrap(), [7, 0]);
  }

  #[test]
  fn none_requires_alignment() {
    let p = padding(PaddingMode::None, 4);
    assert!(matches!(p.pad(&[1, 2, 3]), Err(Error::InvalidArgument(_))));
    assert_eq!(p.pad(&[1, 2, 3, 4]).unwrap(), [1, 2, 3, 4]);
    assert_eq!(p.depad(&[1, 2, 3, 4]).unwrap(), [1, 2, 3, 4]);
    assert!(matches!(p.depad(&[1]), Err(Error::InvalidArgument(_))));
  }

  #[test]
  fn pad_len_matches_pad() {
    let modes = [
      PaddingMode::None,
      PaddingMode::Zeros,
      PaddingMode::Pkcs7,
      PaddingMode::AnsiX923,
      PaddingMode::Iso10126,
    ];
    for mode in modes {
      let p = padding(mode, 5);
      for len in 0..12 {
        if let Ok(padded) = p.pad(&vec![1u8; len]) {
          assert_eq!(padded.len(), len + p.pad_len(len), "{mode:?} len {len}");
          assert_eq!(padded.len() % 5, 0);
        }
      }
    }
  }

  #[test]
  fn block_size_one() {
    let p = padding(PaddingMode::Pkcs7, 1);
    assert_eq!(p.pad(b"xy").unwrap(), [b'x', b'y', 1]);
    assert_eq!(p.depad(&[b'x', b'y', 1]).unwrap(), b"xy");
  }
}
