//! Streaming encryptor / decryptor on top of [`ModeTransform`] and [`Padding`].

use log::trace;
use traits::{BlockCipher, Error, Result};
use zeroize::Zeroize;

use crate::{ModeTransform, Padding, PaddingMode};

/// Feeds arbitrary-sized input through a chaining mode, padding on the final block.
///
/// [`transform_block`](Self::transform_block) emits only whole blocks and
/// buffers the rest. A decryptor whose padding carries data also holds back
/// the last complete block, since it may contain padding that
/// [`transform_final_block`](Self::transform_final_block) must remove.
/// After the final block the chaining value is reset, so the same transform
/// can process another message with the same IV.
pub struct CryptoTransform<'c, C: BlockCipher + ?Sized> {
  mode: ModeTransform<'c, C>,
  padding: Padding,
  encrypt: bool,
  pending: Vec<u8>,
}

impl<'c, C: BlockCipher + ?Sized> CryptoTransform<'c, C> {
  /// # Errors
  ///
  /// [`Error::InvalidArgument`] if the padding block size differs from the cipher's.
  pub fn encryptor(mode: ModeTransform<'c, C>, padding: Padding) -> Result<Self> {
    Self::new(mode, padding, true)
  }

  /// # Errors
  ///
  /// [`Error::InvalidArgument`] if the padding block size differs from the cipher's.
  pub fn decryptor(mode: ModeTransform<'c, C>, padding: Padding) -> Result<Self> {
    Self::new(mode, padding, false)
  }

  fn new(mode: ModeTransform<'c, C>, padding: Padding, encrypt: bool) -> Result<Self> {
    if padding.block_size() != mode.block_size() {
      return Err(Error::InvalidArgument("padding block size must equal the cipher block size"));
    }
    Ok(Self { mode, padding, encrypt, pending: Vec::new() })
  }

  #[inline]
  #[must_use]
  pub const fn is_encryptor(&self) -> bool {
    self.encrypt
  }

  #[inline]
  #[must_use]
  pub const fn block_size(&self) -> usize {
    self.mode.block_size()
  }

  /// Bytes buffered and not yet emitted.
  #[inline]
  #[must_use]
  pub fn pending_len(&self) -> usize {
    self.pending.len()
  }

  /// Absorb `input` and return every block that is ready.
  pub fn transform_block(&mut self, input: &[u8]) -> Result<Vec<u8>> {
    self.pending.extend_from_slice(input);
    let bs = self.block_size();
    let mut ready = self.pending.len() - self.pending.len() % bs;
    if !self.encrypt && self.padding.mode() != PaddingMode::None && ready == self.pending.len() {
      ready = ready.saturating_sub(bs);
    }
    let mut out: Vec<u8> = self.pending.drain(..ready).collect();
    self.mode.transform_in_place(&mut out, self.encrypt)?;
    trace!("cipher stream: {} bytes out, {} pending", out.len(), self.pending.len());
    Ok(out)
  }

  /// Absorb `input`, apply or strip padding and return the remaining output.
  ///
  /// # Errors
  ///
  /// - Padding errors from [`Padding::pad`] / [`Padding::depad`].
  /// - [`Error::InvalidArgument`] when a decryptor's total input is not block-aligned.
  ///
  /// The transform is reset on success and on failure.
  pub fn transform_final_block(&mut self, input: &[u8]) -> Result<Vec<u8>> {
    self.pending.extend_from_slice(input);
    let mut data = core::mem::take(&mut self.pending);
    let result = self.finish(&data);
    data.zeroize();
    self.reset();
    result
  }

  /// Drop buffered input and restart the chaining value from the IV.
  pub fn reset(&mut self) {
    self.pending.zeroize();
    self.mode.reset();
  }

  fn finish(&mut self, data: &[u8]) -> Result<Vec<u8>> {
    if self.encrypt {
      let mut padded = self.padding.pad(data)?;
      self.mode.transform_in_place(&mut padded, true)?;
      Ok(padded)
    } else {
      let mut plain = data.to_vec();
      self.mode.transform_in_place(&mut plain, false)?;
      let result = self.padding.depad(&plain);
      plain.zeroize();
      result
    }
  }
}

impl<C: BlockCipher + ?Sized> Drop for CryptoTransform<'_, C> {
  fn drop(&mut self) {
    self.pending.zeroize();
  }
}

impl<C: BlockCipher + ?Sized> core::fmt::Debug for CryptoTransform<'_, C> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("CryptoTransform")
      .field("mode", &self.mode)
      .field("padding", &self.padding)
      .field("encrypt", &self.encrypt)
      .field("pending", &self.pending.len())
      .finish()
  }
}
