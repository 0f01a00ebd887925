//! Table-driven CRC and classic checksums as [`HashTransform`](traits::HashTransform) strategies.
//!
//! # Supported Algorithms
//!
//! | Type | Output | Notes |
//! |------|--------|-------|
//! | [`Crc`] | `ceil(width / 8)` bytes | Any Rocksoft-model CRC of width 1..=64 |
//! | [`Adler32`] | 4 bytes | RFC 1950 |
//! | [`Fletcher`] | 2 / 4 / 8 bytes | [`FletcherWidth`] |
//!
//! Integer digests are emitted little-endian.
//!
//! # CRC Tables
//!
//! [`build_table`] computes a lookup table from `(width, polynomial, reflect)`.
//! [`TableCache`] shares built tables process-wide; every [`Crc`] fetches its
//! table from [`TableCache::global`], so instances with the same polynomial
//! share one allocation.
//!
//! # Example
//!
//! ```rust
//! use checksum::{Crc, CrcParams};
//! use traits::HashTransform;
//!
//! // One-shot computation
//! let crc = Crc::checksum(CrcParams::CRC32_ISO_HDLC, b"123456789")?;
//! assert_eq!(crc, 0xCBF4_3926);
//!
//! // Streaming computation
//! let mut hasher = HashTransform::new(Crc::new(CrcParams::CRC32_ISO_HDLC)?);
//! hasher.update(b"1234")?;
//! hasher.update(b"56789")?;
//! assert_eq!(hasher.finalize()?.to_hex(), "2639F4CB");
//! # Ok::<(), traits::Error>(())
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]

mod adler32;
mod bits;
mod cache;
mod crc;
mod fletcher;
mod params;
mod tables;

pub use adler32::Adler32;
pub use bits::{reflect_bits, reflect_byte};
pub use cache::{CrcTable, CrcTableKey, TableCache};
pub use crc::Crc;
pub use fletcher::{Fletcher, FletcherWidth};
pub use params::CrcParams;
pub use tables::build_table;
