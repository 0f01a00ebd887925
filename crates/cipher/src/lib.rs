//! Block ciphers, chaining modes and padding for the hashworks workspace.
//!
//! # Layers
//!
//! | Item | Role |
//! |------|------|
//! | [`Threefish256`], [`Threefish512`], [`Threefish1024`] | Tweakable block ciphers implementing [`BlockCipher`] |
//! | [`ModeTransform`] | ECB / CBC over any [`BlockCipher`], block-aligned buffers only |
//! | [`Padding`] | None, Zeros, PKCS7, ANSI X9.23, ISO 10126 |
//! | [`CryptoTransform`] | Streaming encryptor / decryptor combining a mode with padding |
//!
//! # Example
//!
//! ```rust
//! use cipher::{CipherMode, CryptoTransform, ModeTransform, Padding, PaddingMode, Threefish256};
//!
//! let cipher = Threefish256::new(&[7; 32], &[0; 16]);
//! let iv = [0x10u8; 32];
//! let padding = Padding::new(PaddingMode::Pkcs7, 32)?;
//!
//! let mut enc = CryptoTransform::encryptor(ModeTransform::new(&cipher, CipherMode::Cbc, &iv)?, padding)?;
//! let ciphertext = enc.transform_final_block(b"attack at dawn")?;
//! assert_eq!(ciphertext.len(), 32);
//!
//! let mut dec = CryptoTransform::decryptor(ModeTransform::new(&cipher, CipherMode::Cbc, &iv)?, padding)?;
//! assert_eq!(dec.transform_final_block(&ciphertext)?, b"attack at dawn");
//! # Ok::<(), traits::Error>(())
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]

mod mode;
mod padding;
mod stream;
pub mod threefish;

pub use mode::{CipherMode, ModeTransform};
pub use padding::{Padding, PaddingMode};
pub use stream::CryptoTransform;
pub use threefish::{Threefish1024, Threefish256, Threefish512};
pub use traits::{BlockCipher, Error, Result};
