//! Fixed-block-size cipher contract consumed by the chaining modes.

/// A keyed block cipher operating on blocks of exactly [`block_size`](Self::block_size) bytes.
///
/// Both operations work in place and take `&self`: a cipher instance holds
/// only its expanded key, so it can be shared by several mode transforms.
///
/// Callers guarantee `block.len() == self.block_size()`; the chaining modes
/// validate lengths before any block reaches the cipher.
pub trait BlockCipher {
  /// Block size in bytes.
  fn block_size(&self) -> usize;

  /// Encrypt one block in place.
  fn encrypt_block(&self, block: &mut [u8]);

  /// Decrypt one block in place.
  fn decrypt_block(&self, block: &mut [u8]);
}

impl<C: BlockCipher + ?Sized> BlockCipher for &C {
  #[inline]
  fn block_size(&self) -> usize {
    (**self).block_size()
  }

  #[inline]
  fn encrypt_block(&self, block: &mut [u8]) {
    (**self).encrypt_block(block);
  }

  #[inline]
  fn decrypt_block(&self, block: &mut [u8]) {
    (**self).decrypt_block(block);
  }
}
