//! Fast non-cryptographic hashes (**NOT CRYPTO**).
//!
//! This module intentionally requires explicit opt-in. Do not use these hashes
//! for signatures, MACs, key derivation, or anything requiring cryptographic
//! security.
//!
//! | Type | Digest | Configuration |
//! |------|--------|---------------|
//! | [`Fnv`] | 4 / 8 / 16 bytes | [`FnvVariant`], [`FnvWidth`] |
//! | [`Bernstein`] | 4 bytes | - |
//! | [`ModifiedBernstein`] | 4 bytes | - |
//! | [`Elf`] | 4 bytes | seed |
//! | [`Elf64`] | 8 bytes | seed |
//! | [`Bkdr`] | 4 bytes | multiplier |
//! | [`Sdbm`] | 4 bytes | - |
//! | [`Pearson`] | 1..=64 bytes | [`PearsonTable`], hash size |
//! | [`SipHash`] | 8 bytes | key, round counts |

/// Implement [`BlockHash`](traits::BlockHash) for a byte-at-a-time 32-bit hash.
///
/// The type needs a `state: u32` field plus inherent `initial(&self) -> u32`
/// and `step(&self, state: u32, byte: u8) -> u32` methods.
macro_rules! byte_hash32 {
  ($ty:ty) => {
    impl zeroize::Zeroize for $ty {
      fn zeroize(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.state);
      }
    }

    impl traits::BlockHash for $ty {
      fn block_size(&self) -> usize {
        1
      }

      fn hash_size(&self) -> usize {
        32
      }

      fn reset(&mut self) {
        self.state = self.initial();
      }

      fn process_block(&mut self, block: &[u8]) {
        self.state = block.iter().fold(self.state, |h, &b| self.step(h, b));
      }

      fn process_blocks(&mut self, blocks: &[u8]) {
        self.process_block(blocks);
      }

      fn finalize(&mut self, remainder: &[u8], _total_len: u64) -> alloc::vec::Vec<u8> {
        self.process_block(remainder);
        self.state.to_le_bytes().to_vec()
      }
    }

    impl traits::Reusable for $ty {}
  };
}

pub mod bernstein;
pub mod bkdr;
pub mod elf;
pub mod fnv;
pub mod pearson;
pub mod sdbm;
pub mod siphash;

pub use bernstein::{Bernstein, ModifiedBernstein};
pub use bkdr::Bkdr;
pub use elf::{Elf, Elf64};
pub use fnv::{Fnv, FnvVariant, FnvWidth};
pub use pearson::{Pearson, PearsonTable};
pub use sdbm::Sdbm;
pub use siphash::SipHash;
