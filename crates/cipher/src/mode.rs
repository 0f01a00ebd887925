//! ECB and CBC over any [`BlockCipher`].

use traits::{BlockCipher, Error, Result};
use zeroize::Zeroize;

/// Block chaining mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CipherMode {
  /// Electronic codebook: blocks are independent, identical plaintext blocks
  /// give identical ciphertext blocks.
  Ecb,
  /// Cipher block chaining with an IV of one block.
  #[default]
  Cbc,
}

/// A chaining-mode session over a borrowed cipher.
///
/// The IV is copied on construction; the caller's buffer is never written.
/// The chaining value carries over between calls, so a message may be
/// processed in several block-aligned pieces. [`reset`](Self::reset) starts a
/// new message from the IV.
pub struct ModeTransform<'c, C: BlockCipher + ?Sized> {
  cipher: &'c C,
  mode: CipherMode,
  block_size: usize,
  iv: Vec<u8>,
  chain: Vec<u8>,
}

impl<'c, C: BlockCipher + ?Sized> ModeTransform<'c, C> {
  /// # Errors
  ///
  /// - [`Error::InvalidArgument`] if the cipher reports a zero block size.
  /// - [`Error::InvalidArgument`] if `mode` is CBC and `iv` is not exactly one block.
  ///
  /// ECB ignores `iv`.
  pub fn new(cipher: &'c C, mode: CipherMode, iv: &[u8]) -> Result<Self> {
    let block_size = cipher.block_size();
    if block_size == 0 {
      return Err(Error::InvalidArgument("cipher block size must be non-zero"));
    }
    let iv = match mode {
      CipherMode::Ecb => Vec::new(),
      CipherMode::Cbc if iv.len() == block_size => iv.to_vec(),
      CipherMode::Cbc => return Err(Error::InvalidArgument("IV length must equal the cipher block size")),
    };
    let chain = iv.clone();
    Ok(Self { cipher, mode, block_size, iv, chain })
  }

  /// ECB session; no IV.
  pub fn ecb(cipher: &'c C) -> Result<Self> {
    Self::new(cipher, CipherMode::Ecb, &[])
  }

  #[inline]
  #[must_use]
  pub const fn block_size(&self) -> usize {
    self.block_size
  }

  #[inline]
  #[must_use]
  pub const fn mode(&self) -> CipherMode {
    self.mode
  }

  #[inline]
  #[must_use]
  pub fn cipher(&self) -> &'c C {
    self.cipher
  }

  /// Restore the chaining value from the IV.
  pub fn reset(&mut self) {
    self.chain.copy_from_slice(&self.iv);
  }

  /// Encrypt or decrypt `input` into the front of `output`.
  ///
  /// Lengths are validated before anything is written. Empty input is a no-op.
  ///
  /// # Errors
  ///
  /// [`Error::InvalidArgument`] if `input` is not block-aligned or `output` is
  /// shorter than `input`.
  pub fn transform(&mut self, input: &[u8], output: &mut [u8], encrypt: bool) -> Result<()> {
    self.check_aligned(input.len())?;
    let out = output
      .get_mut(..input.len())
      .ok_or(Error::InvalidArgument("output buffer is shorter than the input"))?;
    out.copy_from_slice(input);
    self.apply(out, encrypt);
    Ok(())
  }

  /// Encrypt or decrypt `buffer` in place.
  ///
  /// # Errors
  ///
  /// [`Error::InvalidArgument`] if `buffer` is not block-aligned.
  pub fn transform_in_place(&mut self, buffer: &mut [u8], encrypt: bool) -> Result<()> {
    self.check_aligned(buffer.len())?;
    self.apply(buffer, encrypt);
    Ok(())
  }

  fn check_aligned(&self, len: usize) -> Result<()> {
    if len % self.block_size == 0 {
      Ok(())
    } else {
      Err(Error::InvalidArgument("input length must be a multiple of the block size"))
    }
  }

  fn apply(&mut self, buffer: &mut [u8], encrypt: bool) {
    let blocks = buffer.chunks_exact_mut(self.block_size);
    match (self.mode, encrypt) {
      (CipherMode::Ecb, true) => blocks.for_each(|block| self.cipher.encrypt_block(block)),
      (CipherMode::Ecb, false) => blocks.for_each(|block| self.cipher.decrypt_block(block)),
      (CipherMode::Cbc, true) => {
        for block in blocks {
          xor_into(block, &self.chain);
          self.cipher.encrypt_block(block);
          self.chain.copy_from_slice(block);
        }
      }
      (CipherMode::Cbc, false) => {
        // Holds the ciphertext block, which becomes the next chaining value.
        let mut saved = vec![0u8; self.block_size];
        for block in blocks {
          saved.copy_from_slice(block);
          self.cipher.decrypt_block(block);
          xor_into(block, &self.chain);
          core::mem::swap(&mut self.chain, &mut saved);
        }
        saved.zeroize();
      }
    }
  }
}

impl<C: BlockCipher + ?Sized> Drop for ModeTransform<'_, C> {
  fn drop(&mut self) {
    self.chain.zeroize();
    self.iv.zeroize();
  }
}

impl<C: BlockCipher + ?Sized> core::fmt::Debug for ModeTransform<'_, C> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ModeTransform")
      .field("mode", &self.mode)
      .field("block_size", &self.block_size)
      .finish_non_exhaustive()
  }
}

#[inline]
fn xor_into(block: &mut [u8], chain: &[u8]) {
  for (b, c) in block.iter_mut().zip(chain) {
    *b ^= c;
  }
}
