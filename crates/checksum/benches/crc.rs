//! CRC, Adler-32 and Fletcher throughput.
//!
//! Run: `cargo bench -p checksum`

use checksum::{Adler32, Crc, CrcParams, Fletcher, FletcherWidth};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use traits::HashTransform;

/// Standard benchmark sizes.
const SIZES: [usize; 5] = [64, 1024, 4096, 65536, 1048576];

fn bench_crc(c: &mut Criterion) {
  for params in [CrcParams::CRC5_USB, CrcParams::CRC16_XMODEM, CrcParams::CRC32_ISO_HDLC, CrcParams::CRC64_XZ] {
    let mut group = c.benchmark_group(format!("crc/{}", params.name));
    for size in SIZES {
      let data = vec![0xA5u8; size];
      group.throughput(Throughput::Bytes(size as u64));
      group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
        let mut t = HashTransform::new(Crc::new(params).unwrap());
        b.iter(|| core::hint::black_box(t.compute_hash(data).unwrap()));
      });
    }
    group.finish();
  }
}

/// Table lookups hit the warm global cache after the first instance.
fn bench_crc_construction(c: &mut Criterion) {
  c.bench_function("crc/new (cached table)", |b| {
    b.iter(|| core::hint::black_box(Crc::new(CrcParams::CRC32C).unwrap()));
  });
}

fn bench_simple_checksums(c: &mut Criterion) {
  let mut group = c.benchmark_group("checksum");
  for size in SIZES {
    let data = vec![0x5Au8; size];
    group.throughput(Throughput::Bytes(size as u64));
    group.bench_with_input(BenchmarkId::new("adler32", size), &data, |b, data| {
      let mut t = HashTransform::new(Adler32::new());
      b.iter(|| core::hint::black_box(t.compute_hash(data).unwrap()));
    });
    group.bench_with_input(BenchmarkId::new("fletcher64", size), &data, |b, data| {
      let mut t = HashTransform::new(Fletcher::new(FletcherWidth::Bits64));
      b.iter(|| core::hint::black_box(t.compute_hash(data).unwrap()));
    });
  }
  group.finish();
}

criterion_group!(benches, bench_crc, bench_crc_construction, bench_simple_checksums);
criterion_main!(benches);
