use core::hint::black_box;

/// xorshift64*; only used to avoid all-zero benchmark inputs.
#[inline]
fn xorshift64star(state: &mut u64) -> u64 {
  let mut x = *state;
  x ^= x >> 12;
  x ^= x << 25;
  x ^= x >> 27;
  *state = x;
  x.wrapping_mul(0x2545F4914F6CDD1D)
}

pub fn pseudo_random_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut state = seed ^ (len as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
  let out: Vec<u8> = (0..len).map(|_| (xorshift64star(&mut state) >> 56) as u8).collect();
  black_box(&out);
  out
}

/// Byte-at-a-time strategies dominate the cost, so sizes stop at 64 KiB.
pub fn sized_inputs() -> Vec<(usize, Vec<u8>)> {
  [0usize, 1, 7, 8, 15, 16, 31, 32, 64, 127, 128, 1024, 4 * 1024, 64 * 1024]
    .into_iter()
    .map(|len| (len, pseudo_random_bytes(len, 0x5EED_CAFE_F00D_0001)))
    .collect()
}

pub fn set_throughput(group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>, len: usize) {
  if len == 0 {
    group.throughput(criterion::Throughput::Elements(1));
  } else {
    group.throughput(criterion::Throughput::Bytes(len as u64));
  }
}
