//! The per-algorithm mixing strategy plugged into [`HashTransform`](crate::HashTransform).
//!
//! A strategy owns the running accumulator and any configuration (keys, seeds,
//! round counts). It never sees partial blocks: the transform buffers input
//! and only hands over whole native blocks, then passes the leftover bytes and
//! the total length to [`BlockHash::finalize`].

use alloc::vec::Vec;

use zeroize::Zeroize;

/// Incremental block mixing function.
///
/// # Implementor Requirements
///
/// - [`process_blocks`](Self::process_blocks) only ever receives a whole number
///   of blocks of [`block_size`](Self::block_size) bytes.
/// - [`finalize`](Self::finalize) receives fewer than `block_size` bytes.
/// - [`reset`](Self::reset) restores the initial accumulator but keeps
///   configuration and key material.
/// - [`Zeroize::zeroize`] wipes the accumulator *and* key material.
pub trait BlockHash: Zeroize {
  /// Whether the owning transform may be re-initialized after finalization.
  ///
  /// Strategies that set this to `false` must not implement [`Reusable`].
  const CAN_REUSE_TRANSFORM: bool = true;

  /// Native block size in bytes (1 for byte-at-a-time algorithms).
  fn block_size(&self) -> usize;

  /// Digest size in bits.
  fn hash_size(&self) -> usize;

  /// Restore the initial accumulator.
  fn reset(&mut self);

  /// Mix one block of exactly `block_size()` bytes.
  fn process_block(&mut self, block: &[u8]);

  /// Mix `blocks.len() / block_size()` consecutive blocks.
  #[inline]
  fn process_blocks(&mut self, blocks: &[u8]) {
    let block_size = self.block_size();
    for block in blocks.chunks_exact(block_size) {
      self.process_block(block);
    }
  }

  /// Consume the trailing partial block and produce the digest bytes.
  ///
  /// `total_len` counts every byte fed to the transform, including `remainder`.
  fn finalize(&mut self, remainder: &[u8], total_len: u64) -> Vec<u8>;
}

/// Marker for strategies whose transform may be re-initialized and reused.
///
/// One-shot MACs do not implement it, which removes
/// [`HashTransform::initialize`](crate::HashTransform::initialize) at compile time.
pub trait Reusable: BlockHash {}
