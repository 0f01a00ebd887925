//! Hash and MAC strategies for [`HashTransform`](traits::HashTransform).
//!
//! This crate is `no_std` compatible (it needs `alloc`). Dev-only
//! dependencies are used for oracle testing and benchmarking.
//!
//! # Modules
//!
//! - [`crypto`] - CubeHash, Tiger and the Poly1305 one-time authenticator.
//! - [`fast`] - Non-cryptographic hashes (**NOT CRYPTO**).
//!
//! Integer digests are emitted little-endian.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod crypto;
pub mod fast;

mod util;

pub use traits::{BlockHash, HashTransform, HashValue, Reusable};
