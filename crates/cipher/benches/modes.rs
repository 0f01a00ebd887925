//! Threefish block throughput through ECB and CBC.
//!
//! Run: `cargo bench -p cipher`

use cipher::{BlockCipher, CipherMode, ModeTransform, Threefish1024, Threefish256, Threefish512};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const SIZES: [usize; 3] = [1024, 16 * 1024, 256 * 1024];

fn bench_cipher<C: BlockCipher>(c: &mut Criterion, name: &str, cipher: &C) {
  let iv = vec![0x10u8; cipher.block_size()];
  let mut group = c.benchmark_group(format!("cipher/{name}"));
  for size in SIZES {
    let mut buf = vec![0x5Au8; size];
    group.throughput(Throughput::Bytes(size as u64));
    for mode in [CipherMode::Ecb, CipherMode::Cbc] {
      group.bench_function(BenchmarkId::new(format!("{mode:?}-encrypt"), size), |b| {
        let mut m = ModeTransform::new(cipher, mode, &iv).unwrap();
        b.iter(|| m.transform_in_place(core::hint::black_box(&mut buf), true).unwrap());
      });
    }
  }
  group.finish();
}

fn modes(c: &mut Criterion) {
  bench_cipher(c, "threefish256", &Threefish256::new(&[1; 32], &[0; 16]));
  bench_cipher(c, "threefish512", &Threefish512::new(&[1; 64], &[0; 16]));
  bench_cipher(c, "threefish1024", &Threefish1024::new(&[1; 128], &[0; 16]));
}

criterion_group!(benches, modes);
criterion_main!(benches);
