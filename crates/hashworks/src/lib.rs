//! Streaming hashes, checksums and block-cipher modes.
//!
//! Every algorithm is a strategy driven by one state machine,
//! [`HashTransform`]: feed bytes with [`transform_block`](HashTransform::transform_block)
//! or [`update`](HashTransform::update), finish with
//! [`transform_final_block`](HashTransform::transform_final_block), read the
//! [`HashValue`].
//!
//! # Quick Start
//!
//! ```
//! # #[cfg(feature = "checksums")] {
//! use hashworks::{Crc, CrcParams, HashTransform};
//!
//! // One-shot computation
//! let crc = Crc::checksum(CrcParams::CRC32C, b"hello world")?;
//! assert_eq!(crc, 0xC99465AA);
//!
//! // Streaming computation
//! let mut hasher = HashTransform::new(Crc::new(CrcParams::CRC32C)?);
//! hasher.update(b"hello ")?;
//! hasher.update(b"world")?;
//! assert_eq!(hasher.finalize()?.to_u64_le(), Some(crc));
//! # }
//! # Ok::<(), hashworks::Error>(())
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Reader/writer adapters and stream hashing |
//! | `tokio` | Yes | Async stream hashing with cancellation |
//! | `checksums` | Yes | CRC (any width), Adler-32, Fletcher |
//! | `hashes` | Yes | FNV, Bernstein, ELF, BKDR, SDBM, Pearson, SipHash, CubeHash, Tiger, Poly1305 |
//! | `ciphers` | Yes | Threefish, ECB/CBC, padding |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! hashworks = { version = "0.1", default-features = false, features = ["hashes"] }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

pub use traits::{
  BlockCipher, BlockHash, Error, HashTransform, HashValue, Result, Reusable, TransformState, VerificationError,
};
#[cfg(feature = "std")]
pub use traits::{HashingReader, HashingWriter, StreamError, StreamOptions};

// =============================================================================
// Checksums
// =============================================================================

#[cfg(feature = "checksums")]
pub use checksum::{Adler32, Crc, CrcParams, CrcTable, CrcTableKey, Fletcher, FletcherWidth, TableCache};

#[cfg(feature = "checksums")]
pub mod crc {
  pub use checksum::{build_table, reflect_bits, reflect_byte};
}

// =============================================================================
// Hashes
// =============================================================================

#[cfg(feature = "hashes")]
pub mod hashes {
  pub use ::hashes::{crypto, fast};
}

#[cfg(feature = "hashes")]
pub use ::hashes::{
  crypto::{CubeHash, Poly1305, Tiger, TigerVariant},
  fast::{
    Bernstein, Bkdr, Elf, Elf64, Fnv, FnvVariant, FnvWidth, ModifiedBernstein, Pearson, PearsonTable, Sdbm, SipHash,
  },
};

// =============================================================================
// Ciphers
// =============================================================================

#[cfg(feature = "ciphers")]
pub use cipher::{
  CipherMode, CryptoTransform, ModeTransform, Padding, PaddingMode, Threefish256, Threefish512, Threefish1024,
};
