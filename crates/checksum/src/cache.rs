//! Process-wide cache of CRC lookup tables.
//!
//! Tables are keyed by `(width, polynomial, reflect_in)`. Readers take a
//! shared lock; a miss builds the table outside any lock and then inserts it
//! with first-insert-wins semantics, so every caller sees a complete table and
//! all callers for one key share the same allocation once the race settles.
//!
//! # Caching Strategy
//!
//! - **Lookup**: `parking_lot::RwLock` read guard over a `HashMap`
//! - **Global instance**: `std::sync::OnceLock`, initialized on first use
//! - **Sharing**: tables are handed out as `Arc<[u64]>`; callers can only read

use std::{collections::HashMap, ops::Deref, sync::Arc, sync::OnceLock};

use parking_lot::RwLock;
use traits::{Error, Result};

use crate::{bits::width_mask, tables::build_table};

/// Identity of a cached table.
///
/// `reflect_out`, `initial` and `xor_out` do not affect the table and are not
/// part of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CrcTableKey {
  pub width: u8,
  pub polynomial: u64,
  pub reflect_in: bool,
}

/// Immutable, shared CRC lookup table.
///
/// Dereferences to `[u64]`. Use `to_vec()` for a private, mutable copy.
#[derive(Clone, PartialEq, Eq)]
pub struct CrcTable(Arc<[u64]>);

impl CrcTable {
  /// Whether both handles point at the same cached allocation.
  #[inline]
  #[must_use]
  pub fn ptr_eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }
}

impl Deref for CrcTable {
  type Target = [u64];

  #[inline]
  fn deref(&self) -> &[u64] {
    &self.0
  }
}

impl AsRef<[u64]> for CrcTable {
  #[inline]
  fn as_ref(&self) -> &[u64] {
    &self.0
  }
}

impl core::fmt::Debug for CrcTable {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("CrcTable").field("entries", &self.0.len()).finish()
  }
}

/// Thread-safe map from [`CrcTableKey`] to [`CrcTable`].
///
/// # Example
///
/// ```
/// use checksum::TableCache;
///
/// let cache = TableCache::new();
/// let a = cache.get_lookup_table(32, 0x04C1_1DB7, true)?;
/// let b = cache.get_lookup_table(32, 0x04C1_1DB7, true)?;
/// assert!(a.ptr_eq(&b));
/// assert_eq!(cache.len(), 1);
/// # Ok::<(), traits::Error>(())
/// ```
#[derive(Default)]
pub struct TableCache {
  tables: RwLock<HashMap<CrcTableKey, CrcTable>>,
}

impl TableCache {
  /// Create an empty cache.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// The process-wide cache used by [`Crc`](crate::Crc).
  pub fn global() -> &'static Self {
    static GLOBAL: OnceLock<TableCache> = OnceLock::new();
    GLOBAL.get_or_init(Self::new)
  }

  /// Fetch the table for `(width, polynomial, reflect_in)`, building it on a miss.
  ///
  /// # Errors
  ///
  /// [`Error::OutOfRange`] if `width` is not in `1..=64`. The cache is not
  /// touched in that case.
  pub fn get_lookup_table(&self, width: u8, polynomial: u64, reflect_in: bool) -> Result<CrcTable> {
    if width == 0 || width > 64 {
      return Err(Error::OutOfRange("CRC width"));
    }
    let key = CrcTableKey { width, polynomial: polynomial & width_mask(width), reflect_in };

    if let Some(table) = self.tables.read().get(&key) {
      return Ok(table.clone());
    }

    let built = CrcTable(Arc::from(build_table(width, polynomial, reflect_in)?));
    let mut tables = self.tables.write();
    let table = tables.entry(key).or_insert_with(|| {
      log::debug!(
        "built CRC table: width={} poly={:#x} reflect_in={} entries={}",
        key.width,
        key.polynomial,
        key.reflect_in,
        built.len()
      );
      built
    });
    Ok(table.clone())
  }

  /// Number of cached tables.
  #[must_use]
  pub fn len(&self) -> usize {
    self.tables.read().len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.tables.read().is_empty()
  }

  /// Drop every cached table. Handles already given out stay valid.
  pub fn clear(&self) {
    self.tables.write().clear();
  }
}

impl core::fmt::Debug for TableCache {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("TableCache").field("tables", &self.len()).finish()
  }
}
