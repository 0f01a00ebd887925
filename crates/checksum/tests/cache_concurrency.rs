//! The table cache under concurrent first use.

use std::{
  sync::{Arc, Barrier},
  thread,
};

use checksum::{Crc, CrcParams, TableCache, build_table};

#[test]
fn hundred_threads_see_identical_tables() {
  const THREADS: usize = 100;
  let cache = Arc::new(TableCache::new());
  let barrier = Arc::new(Barrier::new(THREADS));

  let handles: Vec<_> = (0..THREADS)
    .map(|_| {
      let cache = Arc::clone(&cache);
      let barrier = Arc::clone(&barrier);
      thread::spawn(move || {
        barrier.wait();
        cache.get_lookup_table(32, 0x04C1_1DB7, true).unwrap()
      })
    })
    .collect();

  let tables: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
  let expected = build_table(32, 0x04C1_1DB7, true).unwrap();
  for table in &tables {
    assert_eq!(&**table, expected.as_slice());
  }
  assert_eq!(cache.len(), 1);

  // Once the race settles, every later lookup shares one allocation.
  let settled = cache.get_lookup_table(32, 0x04C1_1DB7, true).unwrap();
  assert!(settled.ptr_eq(&cache.get_lookup_table(32, 0x04C1_1DB7, true).unwrap()));
}

#[test]
fn concurrent_mixed_keys() {
  let cache = Arc::new(TableCache::new());
  let keys: Vec<(u8, u64, bool)> =
    CrcParams::CATALOGUE.iter().map(|p| (p.width, p.polynomial, p.reflect_in)).collect();

  thread::scope(|s| {
    for t in 0..16 {
      let cache = &cache;
      let keys = &keys;
      s.spawn(move || {
        for i in 0..keys.len() {
          let (width, poly, refin) = keys[(i + t) % keys.len()];
          let table = cache.get_lookup_table(width, poly, refin).unwrap();
          assert_eq!(&*table, build_table(width, poly, refin).unwrap().as_slice());
        }
      });
    }
  });

  let mut distinct = keys.clone();
  distinct.sort_unstable();
  distinct.dedup();
  assert_eq!(cache.len(), distinct.len());
}

#[test]
fn crc_instances_across_threads_agree() {
  let handles: Vec<_> = (0..8)
    .map(|_| thread::spawn(|| Crc::checksum(CrcParams::CRC64_XZ, b"123456789").unwrap()))
    .collect();
  for h in handles {
    assert_eq!(h.join().unwrap(), 0x995D_C9BB_DF19_39FA);
  }
}
