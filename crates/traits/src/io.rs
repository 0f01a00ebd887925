//! Stream hashing and I/O adapters for [`HashTransform`].
//!
//! - [`HashTransform::compute_hash_from_reader`] drains a [`Read`](std::io::Read)
//!   in fixed-size chunks.
//! - [`HashTransform::compute_hash_async`] (feature `tokio`) does the same for
//!   an `AsyncRead`, checking a cancellation token between chunks.
//! - [`HashingReader`] / [`HashingWriter`] hash transparently while data
//!   passes through.
//!
//! Only bytes actually transferred are hashed (short reads and writes are
//! handled).
//!
//! # Example
//!
//! ```rust
//! # use traits::{BlockHash, HashTransform, Reusable};
//! # use zeroize::Zeroize;
//! # #[derive(Default)]
//! # struct Sum(u32);
//! # impl Zeroize for Sum { fn zeroize(&mut self) { self.0 = 0; } }
//! # impl BlockHash for Sum {
//! #   fn block_size(&self) -> usize { 1 }
//! #   fn hash_size(&self) -> usize { 32 }
//! #   fn reset(&mut self) { self.0 = 0; }
//! #   fn process_block(&mut self, block: &[u8]) {
//! #     self.0 = block.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
//! #   }
//! #   fn finalize(&mut self, _: &[u8], _: u64) -> Vec<u8> { self.0.to_le_bytes().to_vec() }
//! # }
//! # impl Reusable for Sum {}
//! use std::io::Cursor;
//!
//! let mut transform = HashTransform::new(Sum::default());
//! let value = transform.compute_hash_from_reader(Cursor::new(b"abc".to_vec()))?;
//! assert_eq!(value.to_u64_le(), Some(u64::from(b'a') + u64::from(b'b') + u64::from(b'c')));
//! # Ok::<(), traits::StreamError>(())
//! ```

use std::vec;

use zeroize::Zeroize;

use crate::{block_hash::BlockHash, error::Error, hash_value::HashValue, transform::HashTransform};

/// Default chunk size for stream hashing.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Failure while hashing a stream.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StreamError {
  /// The underlying reader failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// The transform rejected the call.
  #[error(transparent)]
  Transform(#[from] Error),

  /// The cancellation token fired between two chunks.
  #[error("stream hashing was cancelled")]
  Cancelled,
}

/// Tunables for stream hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamOptions {
  chunk_size: usize,
}

impl StreamOptions {
  /// Read `chunk_size` bytes per transform call.
  pub const fn new(chunk_size: usize) -> Result<Self, Error> {
    if chunk_size == 0 {
      return Err(Error::OutOfRange("chunk size"));
    }
    Ok(Self { chunk_size })
  }

  #[inline]
  #[must_use]
  pub const fn chunk_size(&self) -> usize {
    self.chunk_size
  }
}

impl Default for StreamOptions {
  fn default() -> Self {
    Self { chunk_size: DEFAULT_CHUNK_SIZE }
  }
}

impl<A: BlockHash> HashTransform<A> {
  /// Hash everything `reader` yields, using [`DEFAULT_CHUNK_SIZE`] reads.
  ///
  /// Re-initializes a reusable transform first, like [`compute_hash`](Self::compute_hash).
  pub fn compute_hash_from_reader<R: std::io::Read>(&mut self, reader: R) -> Result<HashValue, StreamError> {
    self.compute_hash_from_reader_with(reader, StreamOptions::default())
  }

  pub fn compute_hash_from_reader_with<R: std::io::Read>(
    &mut self,
    mut reader: R,
    options: StreamOptions,
  ) -> Result<HashValue, StreamError> {
    self.begin()?;
    let mut chunk = vec![0u8; options.chunk_size()];
    let result = loop {
      let n = match reader.read(&mut chunk) {
        Ok(0) => break Ok(()),
        Ok(n) => n,
        Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
        Err(err) => break Err(StreamError::Io(err)),
      };
      log::trace!("hashing {n} byte chunk");
      if let Err(err) = self.transform_block(&chunk, 0, n) {
        break Err(err.into());
      }
    };
    chunk.zeroize();
    result?;
    Ok(self.finalize()?)
  }

  /// Hash everything `reader` yields, stopping early if `cancel` fires.
  ///
  /// The token is checked before every read and again before every
  /// `transform_block`. Chunks absorbed before cancellation are not rolled
  /// back; the transform stays in [`Accumulating`](crate::TransformState::Accumulating).
  #[cfg(feature = "tokio")]
  pub async fn compute_hash_async<R>(
    &mut self,
    reader: R,
    cancel: &tokio_util::sync::CancellationToken,
  ) -> Result<HashValue, StreamError>
  where
    R: tokio::io::AsyncRead + Unpin,
  {
    self.compute_hash_async_with(reader, cancel, StreamOptions::default()).await
  }

  #[cfg(feature = "tokio")]
  pub async fn compute_hash_async_with<R>(
    &mut self,
    mut reader: R,
    cancel: &tokio_util::sync::CancellationToken,
    options: StreamOptions,
  ) -> Result<HashValue, StreamError>
  where
    R: tokio::io::AsyncRead + Unpin,
  {
    use tokio::io::AsyncReadExt as _;

    self.begin()?;
    let mut chunk = vec![0u8; options.chunk_size()];
    let result = loop {
      if cancel.is_cancelled() {
        log::trace!("stream hashing cancelled before read");
        break Err(StreamError::Cancelled);
      }
      let n = match reader.read(&mut chunk).await {
        Ok(0) => break Ok(()),
        Ok(n) => n,
        Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
        Err(err) => break Err(StreamError::Io(err)),
      };
      if cancel.is_cancelled() {
        log::trace!("stream hashing cancelled with {n} unread bytes pending");
        break Err(StreamError::Cancelled);
      }
      log::trace!("hashing {n} byte chunk");
      if let Err(err) = self.transform_block(&chunk, 0, n) {
        break Err(err.into());
      }
    };
    chunk.zeroize();
    result?;
    Ok(self.finalize()?)
  }
}

fn to_io_error(err: Error) -> std::io::Error {
  std::io::Error::other(err)
}

/// Wraps a [`Read`](std::io::Read) and hashes every byte read through it.
pub struct HashingReader<R, A: BlockHash> {
  inner: R,
  transform: HashTransform<A>,
}

impl<R, A: BlockHash> HashingReader<R, A> {
  #[must_use]
  pub fn new(inner: R, algorithm: A) -> Self {
    Self { inner, transform: HashTransform::new(algorithm) }
  }

  /// Finalize, returning the inner reader and the digest.
  pub fn finish(mut self) -> Result<(R, HashValue), Error> {
    let hash = self.transform.finalize()?;
    Ok((self.inner, hash))
  }

  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }

  #[inline]
  pub fn inner_mut(&mut self) -> &mut R {
    &mut self.inner
  }
}

impl<R: std::io::Read, A: BlockHash> std::io::Read for HashingReader<R, A> {
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    let n = self.inner.read(buf)?;
    self.transform.transform_block(buf, 0, n).map_err(to_io_error)?;
    Ok(n)
  }
}

/// Wraps a [`Write`](std::io::Write) and hashes every byte accepted by the inner writer.
pub struct HashingWriter<W, A: BlockHash> {
  inner: W,
  transform: HashTransform<A>,
}

impl<W, A: BlockHash> HashingWriter<W, A> {
  #[must_use]
  pub fn new(inner: W, algorithm: A) -> Self {
    Self { inner, transform: HashTransform::new(algorithm) }
  }

  /// Finalize, returning the inner writer and the digest.
  pub fn finish(mut self) -> Result<(W, HashValue), Error> {
    let hash = self.transform.finalize()?;
    Ok((self.inner, hash))
  }

  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }
}

impl<W: std::io::Write, A: BlockHash> std::io::Write for HashingWriter<W, A> {
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    let n = self.inner.write(buf)?;
    self.transform.transform_block(buf, 0, n).map_err(to_io_error)?;
    Ok(n)
  }

  fn flush(&mut self) -> std::io::Result<()> {
    self.inner.flush()
  }
}
