//! Basic checksum usage: catalogue CRCs, custom CRCs and the shared table cache.
//!
//! Run with: `RUST_LOG=debug cargo run --example basic -p checksum`

use checksum::{Adler32, Crc, CrcParams, Fletcher, FletcherWidth, TableCache};
use traits::HashTransform;

fn main() -> Result<(), traits::Error> {
  env_logger::init();
  println!("=== Checksum Basic Examples ===\n");

  catalogue_examples()?;
  custom_crc_example()?;
  streaming_examples()?;
  Ok(())
}

/// Every named standard over the catalogue check string.
fn catalogue_examples() -> Result<(), traits::Error> {
  println!("--- Catalogue ---\n");

  for params in CrcParams::CATALOGUE {
    let crc = Crc::checksum(*params, b"123456789")?;
    let digits = params.output_len() * 2;
    println!("{:<18} 0x{crc:0digits$X}", params.name);
  }
  println!("\ncached tables: {}\n", TableCache::global().len());
  Ok(())
}

/// A CRC that is not in the catalogue.
fn custom_crc_example() -> Result<(), traits::Error> {
  println!("--- Custom CRC ---\n");

  let params = CrcParams::new("CRC-12/DECT", 12, 0x80F, 0, false, false, 0)?;
  let crc = Crc::checksum(params, b"123456789")?;
  println!("{}: 0x{crc:03X}", params.name);
  assert_eq!(crc, 0xF5B);
  println!();
  Ok(())
}

/// Streaming through the transform, one chunk at a time.
fn streaming_examples() -> Result<(), traits::Error> {
  println!("--- Streaming ---\n");

  let data = b"The quick brown fox jumps over the lazy dog";

  let mut crc = HashTransform::new(Crc::new(CrcParams::CRC32_ISO_HDLC)?);
  for chunk in data.chunks(5) {
    crc.update(chunk)?;
  }
  println!("CRC-32:      {}", crc.finalize()?);

  let adler = HashTransform::new(Adler32::new()).compute_hash(data)?;
  println!("Adler-32:    {adler}");

  let fletcher = HashTransform::new(Fletcher::new(FletcherWidth::Bits32)).compute_hash(data)?;
  println!("Fletcher-32: {fletcher}");
  Ok(())
}
