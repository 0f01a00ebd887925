//! Core transform traits for hashworks.
//!
//! Every hash, checksum and MAC in the workspace is a [`BlockHash`] strategy
//! driven by the generic [`HashTransform`] state machine, which owns buffering,
//! the byte counter, lifecycle state and zeroization. Block ciphers implement
//! [`BlockCipher`] and are driven by the chaining modes in the `cipher` crate.
//!
//! # Trait Hierarchy
//!
//! | Item | Purpose | Examples |
//! |------|---------|----------|
//! | [`BlockHash`] | Per-algorithm mixing strategy | CRC, FNV, SipHash, CubeHash |
//! | [`Reusable`] | Marker: transform may be re-initialized | everything except Poly1305 |
//! | [`HashTransform`] | Streaming state machine | `HashTransform<Crc>` |
//! | [`BlockCipher`] | Fixed-size block permutation | Threefish |
//!
//! # Error Types
//!
//! - [`Error`] - The workspace-wide failure taxonomy
//! - [`VerificationError`] - Opaque error for MAC verification
//! - [`StreamError`] - Stream hashing failures (feature `std`)
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod block_hash;
mod cipher;
pub mod error;
mod hash_value;
#[cfg(feature = "std")]
pub mod io;
mod transform;

pub use block_hash::{BlockHash, Reusable};
pub use cipher::BlockCipher;
pub use error::{Error, Result, VerificationError};
pub use hash_value::HashValue;
#[cfg(feature = "std")]
pub use io::{HashingReader, HashingWriter, StreamError, StreamOptions};
pub use transform::{HashTransform, TransformState};
