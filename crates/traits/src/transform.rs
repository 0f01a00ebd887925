//! The streaming transform state machine shared by every hash algorithm.
//!
//! ```text
//!            transform_block            transform_final_block
//!   Ready ───────────────────▶ Accumulating ───────────────────▶ Finalized
//!     ▲                                                              │
//!     └──────────────────────────── initialize ──────────────────────┘
//!
//!   any state ── dispose ──▶ Disposed (terminal)
//! ```
//!
//! The transform owns the partial-block buffer and the byte counter; the
//! per-algorithm strategy ([`BlockHash`]) owns the accumulator and config.

use alloc::vec::Vec;

use zeroize::Zeroize;

use crate::{
  block_hash::{BlockHash, Reusable},
  error::{Error, Result},
  hash_value::HashValue,
};

/// Lifecycle state of a [`HashTransform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformState {
  /// Freshly created or re-initialized; configuration may change.
  Ready,
  /// At least one non-empty block has been absorbed.
  Accumulating,
  /// The digest has been produced and can be read.
  Finalized,
  /// Buffers were wiped; every operation fails.
  Disposed,
}

/// Incremental hash transform over a [`BlockHash`] strategy.
///
/// # Example
///
/// ```
/// use traits::{BlockHash, HashTransform, Reusable};
/// # use zeroize::Zeroize;
/// # #[derive(Default)]
/// # struct Sum(u32);
/// # impl Zeroize for Sum { fn zeroize(&mut self) { self.0 = 0; } }
/// # impl BlockHash for Sum {
/// #   fn block_size(&self) -> usize { 1 }
/// #   fn hash_size(&self) -> usize { 32 }
/// #   fn reset(&mut self) { self.0 = 0; }
/// #   fn process_block(&mut self, block: &[u8]) {
/// #     self.0 = block.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
/// #   }
/// #   fn finalize(&mut self, _: &[u8], _: u64) -> Vec<u8> { self.0.to_le_bytes().to_vec() }
/// # }
/// # impl Reusable for Sum {}
///
/// let mut transform = HashTransform::new(Sum::default());
/// transform.transform_block(b"hello world", 0, 5)?;
/// transform.transform_final_block(b"hello world", 5, 6)?;
/// let one_shot = HashTransform::new(Sum::default()).compute_hash(b"hello world")?;
/// assert_eq!(transform.hash()?, &one_shot);
/// # Ok::<(), traits::Error>(())
/// ```
pub struct HashTransform<A: BlockHash> {
  algorithm: A,
  buffer: Vec<u8>,
  total_len: u64,
  hash: Option<HashValue>,
  state: TransformState,
}

impl<A: BlockHash> HashTransform<A> {
  /// Wrap a configured strategy. The transform starts in [`TransformState::Ready`].
  #[must_use]
  pub fn new(algorithm: A) -> Self {
    let block_size = algorithm.block_size();
    Self {
      algorithm,
      buffer: Vec::with_capacity(block_size),
      total_len: 0,
      hash: None,
      state: TransformState::Ready,
    }
  }

  #[inline]
  #[must_use]
  pub const fn state(&self) -> TransformState {
    self.state
  }

  /// `false` for one-shot strategies that require a fresh instance per message.
  #[inline]
  #[must_use]
  pub const fn can_reuse_transform(&self) -> bool {
    A::CAN_REUSE_TRANSFORM
  }

  /// Digest size in bits.
  pub fn hash_size(&self) -> Result<usize> {
    Ok(self.algorithm()?.hash_size())
  }

  /// Native block size of the strategy in bytes.
  pub fn input_block_size(&self) -> Result<usize> {
    Ok(self.algorithm()?.block_size())
  }

  /// Read-only access to the strategy (e.g. its configuration).
  pub fn algorithm(&self) -> Result<&A> {
    self.ensure_not_disposed()?;
    Ok(&self.algorithm)
  }

  /// Mutate the strategy's configuration.
  ///
  /// Only allowed while [`TransformState::Ready`]: once bytes were absorbed
  /// the configuration is frozen until [`initialize`](Self::initialize).
  /// Errors returned by `f` propagate unchanged.
  pub fn configure<T>(&mut self, f: impl FnOnce(&mut A) -> Result<T>) -> Result<T> {
    match self.state {
      TransformState::Ready => {}
      TransformState::Disposed => return Err(Error::Disposed),
      TransformState::Accumulating | TransformState::Finalized if !A::CAN_REUSE_TRANSFORM => {
        return Err(Error::UnexpectedOperation("one-shot transform cannot be reconfigured after use"));
      }
      TransformState::Accumulating | TransformState::Finalized => {
        return Err(Error::InvalidOperation("configuration cannot change after hashing has started"));
      }
    }
    let result = f(&mut self.algorithm)?;
    // Block size may have changed.
    self.buffer = Vec::with_capacity(self.algorithm.block_size());
    Ok(result)
  }

  /// Absorb `input[offset..offset + count]`.
  ///
  /// Returns the number of bytes consumed. A zero `count` is a no-op.
  pub fn transform_block(&mut self, input: &[u8], offset: usize, count: usize) -> Result<usize> {
    match self.state {
      TransformState::Ready | TransformState::Accumulating => {}
      TransformState::Finalized => {
        return Err(Error::InvalidOperation("transform is finalized; call initialize first"));
      }
      TransformState::Disposed => return Err(Error::Disposed),
    }
    let data = checked_range(input, offset, count)?;
    if data.is_empty() {
      return Ok(0);
    }
    self.absorb(data);
    self.state = TransformState::Accumulating;
    Ok(count)
  }

  /// Absorb the whole of `data`.
  #[inline]
  pub fn update(&mut self, data: &[u8]) -> Result<()> {
    self.transform_block(data, 0, data.len()).map(|_| ())
  }

  /// Absorb `input[offset..offset + count]`, finalize and return the digest.
  ///
  /// Once finalized, calling this again with `count == 0` returns the same
  /// digest; supplying more bytes fails.
  pub fn transform_final_block(&mut self, input: &[u8], offset: usize, count: usize) -> Result<HashValue> {
    match self.state {
      TransformState::Ready | TransformState::Accumulating => {}
      TransformState::Finalized => {
        checked_range(input, offset, count)?;
        if count != 0 {
          return Err(Error::InvalidOperation("transform is finalized; call initialize first"));
        }
        return self.hash().cloned();
      }
      TransformState::Disposed => return Err(Error::Disposed),
    }
    let data = checked_range(input, offset, count)?;
    self.absorb(data);

    let bytes = self.algorithm.finalize(&self.buffer, self.total_len);
    let value = HashValue::new(bytes, self.algorithm.hash_size());
    self.buffer.zeroize();
    self.hash = Some(value.clone());
    self.state = TransformState::Finalized;
    Ok(value)
  }

  /// Finalize without further input.
  #[inline]
  pub fn finalize(&mut self) -> Result<HashValue> {
    self.transform_final_block(&[], 0, 0)
  }

  /// The digest; only available once finalized.
  pub fn hash(&self) -> Result<&HashValue> {
    match (self.state, &self.hash) {
      (TransformState::Finalized, Some(hash)) => Ok(hash),
      (TransformState::Disposed, _) => Err(Error::Disposed),
      _ => Err(Error::InvalidOperation("hash must be finalized before the value is read")),
    }
  }

  /// Hash `data` in one shot.
  ///
  /// A reusable transform in any non-disposed state is re-initialized first.
  /// A one-shot transform must still be [`TransformState::Ready`].
  pub fn compute_hash(&mut self, data: &[u8]) -> Result<HashValue> {
    self.begin()?;
    self.transform_final_block(data, 0, data.len())
  }

  /// Wipe the accumulator, key material, buffered bytes and digest.
  pub fn dispose(&mut self) {
    self.wipe();
    self.state = TransformState::Disposed;
  }

  /// Prepare for a fresh message; shared by one-shot helpers and stream hashing.
  pub(crate) fn begin(&mut self) -> Result<()> {
    match self.state {
      TransformState::Ready => Ok(()),
      TransformState::Disposed => Err(Error::Disposed),
      _ if A::CAN_REUSE_TRANSFORM => {
        self.reset_state();
        Ok(())
      }
      _ => Err(Error::InvalidOperation("one-shot transform cannot be reused")),
    }
  }

  #[inline]
  fn ensure_not_disposed(&self) -> Result<()> {
    if self.state == TransformState::Disposed {
      Err(Error::Disposed)
    } else {
      Ok(())
    }
  }

  fn absorb(&mut self, mut data: &[u8]) {
    self.total_len = self.total_len.wrapping_add(data.len() as u64);
    let block_size = self.algorithm.block_size();

    if !self.buffer.is_empty() {
      let take = core::cmp::min(block_size - self.buffer.len(), data.len());
      let (head, rest) = data.split_at(take);
      self.buffer.extend_from_slice(head);
      data = rest;
      if self.buffer.len() == block_size {
        self.algorithm.process_blocks(&self.buffer);
        self.buffer.zeroize();
      }
    }

    let full = data.len() - data.len() % block_size;
    let (blocks, tail) = data.split_at(full);
    if !blocks.is_empty() {
      self.algorithm.process_blocks(blocks);
    }
    self.buffer.extend_from_slice(tail);
  }

  fn reset_state(&mut self) {
    self.algorithm.reset();
    self.buffer.zeroize();
    self.total_len = 0;
    if let Some(hash) = self.hash.as_mut() {
      hash.zeroize();
    }
    self.hash = None;
    self.state = TransformState::Ready;
  }

  fn wipe(&mut self) {
    self.algorithm.zeroize();
    self.buffer.zeroize();
    self.total_len = 0;
    if let Some(hash) = self.hash.as_mut() {
      hash.zeroize();
    }
    self.hash = None;
  }
}

impl<A: Reusable> HashTransform<A> {
  /// Return to [`TransformState::Ready`], keeping configuration and keys.
  pub fn initialize(&mut self) -> Result<()> {
    self.ensure_not_disposed()?;
    self.reset_state();
    Ok(())
  }
}

impl<A: BlockHash> Drop for HashTransform<A> {
  fn drop(&mut self) {
    self.wipe();
  }
}

impl<A: BlockHash + core::fmt::Debug> core::fmt::Debug for HashTransform<A> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("HashTransform")
      .field("algorithm", &self.algorithm)
      .field("state", &self.state)
      .field("buffered", &self.buffer.len())
      .field("total_len", &self.total_len)
      .finish()
  }
}

/// Bounds-checked `input[offset..offset + count]`.
pub(crate) fn checked_range(input: &[u8], offset: usize, count: usize) -> Result<&[u8]> {
  let end = offset.checked_add(count).ok_or(Error::OutOfRange("offset + count"))?;
  input.get(offset..end).ok_or(Error::OutOfRange("offset + count"))
}
