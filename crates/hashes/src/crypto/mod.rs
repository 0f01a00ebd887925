//! Cryptographic hash and MAC strategies.
//!
//! - [`CubeHash`] - parameterized sponge hash (rounds / block / digest size).
//! - [`Tiger`] - Tiger and Tiger2 with 128/160/192-bit digests.
//! - [`Poly1305`] - one-time authenticator; one key per message, so its
//!   transform cannot be re-initialized.

pub mod cubehash;
pub mod poly1305;
pub mod tiger;

pub use cubehash::CubeHash;
pub use poly1305::Poly1305;
pub use tiger::{Tiger, TigerVariant};
