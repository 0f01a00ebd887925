//! CRC algorithm parameters.
//!
//! This module defines the parameters for CRC algorithms following the
//! Rocksoft model and the naming of the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).

use traits::{Error, Result};

use crate::bits::{reflect_bits, width_mask};

/// CRC algorithm parameters.
///
/// # Parameters
///
/// - `name`: Catalogue name (e.g. `"CRC-32/ISO-HDLC"`)
/// - `width`: Number of bits in the CRC (1..=64)
/// - `polynomial`: The generator polynomial (without the implicit high bit)
/// - `initial`: Initial value for the CRC register
/// - `reflect_in`: If true, reflect each input byte before processing
/// - `reflect_out`: If true, reflect the final CRC before XOR
/// - `xor_out`: Value to XOR with the final CRC
///
/// Equality and hashing cover all seven fields.
///
/// # Reflection
///
/// "Reflected" means bit-reversed. Most common CRCs (CRC32, CRC32C) use
/// reflected input and output, which maps to LSB-first processing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcParams {
  /// Catalogue name.
  pub name: &'static str,
  /// Width in bits (1..=64).
  pub width: u8,
  /// Generator polynomial (without implicit high bit).
  pub polynomial: u64,
  /// Initial value for the CRC register.
  pub initial: u64,
  /// Reflect input bytes before processing.
  pub reflect_in: bool,
  /// Reflect final CRC before XOR.
  pub reflect_out: bool,
  /// XOR value applied to final CRC.
  pub xor_out: u64,
}

macro_rules! catalogue {
  ($(
    $(#[$doc:meta])*
    $ident:ident = $name:literal {
      width: $width:literal,
      poly: $poly:literal,
      init: $init:literal,
      refin: $refin:literal,
      refout: $refout:literal,
      xorout: $xorout:literal $(,)?
    }
  )*) => {
    impl CrcParams {
      $(
        $(#[$doc])*
        pub const $ident: Self = Self {
          name: $name,
          width: $width,
          polynomial: $poly,
          initial: $init,
          reflect_in: $refin,
          reflect_out: $refout,
          xor_out: $xorout,
        };
      )*

      /// Every named standard, narrowest first.
      pub const CATALOGUE: &'static [Self] = &[$(Self::$ident),*];
    }
  };
}

catalogue! {
  /// CRC-3/ROHC - Robust Header Compression (RFC 3095)
  CRC3_ROHC = "CRC-3/ROHC" { width: 3, poly: 0x3, init: 0x7, refin: true, refout: true, xorout: 0x0 }

  /// CRC-4/G-704 - ITU-T G.704 framing
  CRC4_G704 = "CRC-4/G-704" { width: 4, poly: 0x3, init: 0x0, refin: true, refout: true, xorout: 0x0 }

  /// CRC-5/USB - USB token packets
  CRC5_USB = "CRC-5/USB" { width: 5, poly: 0x05, init: 0x1F, refin: true, refout: true, xorout: 0x1F }

  /// CRC-7/MMC - MultiMediaCard and SD command frames
  CRC7_MMC = "CRC-7/MMC" { width: 7, poly: 0x09, init: 0x00, refin: false, refout: false, xorout: 0x00 }

  /// CRC-8/SMBUS - System Management Bus packet error code
  CRC8_SMBUS = "CRC-8/SMBUS" { width: 8, poly: 0x07, init: 0x00, refin: false, refout: false, xorout: 0x00 }

  /// CRC-8/MAXIM-DOW - 1-Wire, iButton, sensor networks
  CRC8_MAXIM = "CRC-8/MAXIM-DOW" { width: 8, poly: 0x31, init: 0x00, refin: true, refout: true, xorout: 0x00 }

  /// CRC-16/ARC - Modbus, USB, many legacy protocols
  CRC16_ARC = "CRC-16/ARC" { width: 16, poly: 0x8005, init: 0x0000, refin: true, refout: true, xorout: 0x0000 }

  /// CRC-16/IBM-3740 - often called CRC-16/CCITT-FALSE
  CRC16_IBM_3740 = "CRC-16/IBM-3740" {
    width: 16, poly: 0x1021, init: 0xFFFF, refin: false, refout: false, xorout: 0x0000
  }

  /// CRC-16/XMODEM - XMODEM, ZMODEM, Bluetooth
  CRC16_XMODEM = "CRC-16/XMODEM" { width: 16, poly: 0x1021, init: 0x0000, refin: false, refout: false, xorout: 0x0000 }

  /// CRC-16/KERMIT - Kermit protocol, often called CRC-16/CCITT
  CRC16_KERMIT = "CRC-16/KERMIT" { width: 16, poly: 0x1021, init: 0x0000, refin: true, refout: true, xorout: 0x0000 }

  /// CRC-24/OPENPGP - OpenPGP armor checksum (RFC 4880)
  CRC24_OPENPGP = "CRC-24/OPENPGP" {
    width: 24, poly: 0x86_4CFB, init: 0xB7_04CE, refin: false, refout: false, xorout: 0x00_0000
  }

  /// CRC-32/ISO-HDLC - Ethernet, gzip, PNG, zip, SATA
  CRC32_ISO_HDLC = "CRC-32/ISO-HDLC" {
    width: 32, poly: 0x04C1_1DB7, init: 0xFFFF_FFFF, refin: true, refout: true, xorout: 0xFFFF_FFFF
  }

  /// CRC-32/ISCSI (CRC-32C, Castagnoli) - iSCSI, SCTP, Btrfs, ext4
  CRC32C = "CRC-32/ISCSI" {
    width: 32, poly: 0x1EDC_6F41, init: 0xFFFF_FFFF, refin: true, refout: true, xorout: 0xFFFF_FFFF
  }

  /// CRC-32/BZIP2 - bzip2, AAL5
  CRC32_BZIP2 = "CRC-32/BZIP2" {
    width: 32, poly: 0x04C1_1DB7, init: 0xFFFF_FFFF, refin: false, refout: false, xorout: 0xFFFF_FFFF
  }

  /// CRC-32/MPEG-2 - MPEG transport streams
  CRC32_MPEG2 = "CRC-32/MPEG-2" {
    width: 32, poly: 0x04C1_1DB7, init: 0xFFFF_FFFF, refin: false, refout: false, xorout: 0x0000_0000
  }

  /// CRC-64/ECMA-182 - ECMA-182 (DLT-1 tapes)
  CRC64_ECMA_182 = "CRC-64/ECMA-182" {
    width: 64, poly: 0x42F0_E1EB_A9EA_3693, init: 0x0, refin: false, refout: false, xorout: 0x0
  }

  /// CRC-64/GO-ISO - Go `hash/crc64` ISO table
  CRC64_GO_ISO = "CRC-64/GO-ISO" {
    width: 64,
    poly: 0x0000_0000_0000_001B,
    init: 0xFFFF_FFFF_FFFF_FFFF,
    refin: true,
    refout: true,
    xorout: 0xFFFF_FFFF_FFFF_FFFF,
  }

  /// CRC-64/XZ - XZ compression, 7-Zip
  CRC64_XZ = "CRC-64/XZ" {
    width: 64,
    poly: 0x42F0_E1EB_A9EA_3693,
    init: 0xFFFF_FFFF_FFFF_FFFF,
    refin: true,
    refout: true,
    xorout: 0xFFFF_FFFF_FFFF_FFFF,
  }

  /// CRC-64/NVME - NVMe storage specification
  CRC64_NVME = "CRC-64/NVME" {
    width: 64,
    poly: 0xAD93_D235_94C9_3659,
    init: 0xFFFF_FFFF_FFFF_FFFF,
    refin: true,
    refout: true,
    xorout: 0xFFFF_FFFF_FFFF_FFFF,
  }
}

impl CrcParams {
  /// Validated constructor for custom CRCs.
  ///
  /// # Errors
  ///
  /// - [`Error::OutOfRange`] if `width` is not in `1..=64`
  /// - [`Error::InvalidArgument`] if `polynomial`, `initial` or `xor_out`
  ///   has bits set above `width`
  pub const fn new(
    name: &'static str,
    width: u8,
    polynomial: u64,
    initial: u64,
    reflect_in: bool,
    reflect_out: bool,
    xor_out: u64,
  ) -> Result<Self> {
    let params = Self { name, width, polynomial, initial, reflect_in, reflect_out, xor_out };
    match params.validate() {
      Ok(()) => Ok(params),
      Err(err) => Err(err),
    }
  }

  /// Check the invariants [`new`](Self::new) enforces.
  pub const fn validate(&self) -> Result<()> {
    if self.width == 0 || self.width > 64 {
      return Err(Error::OutOfRange("CRC width"));
    }
    let mask = width_mask(self.width);
    if self.polynomial & !mask != 0 {
      return Err(Error::InvalidArgument("polynomial wider than the CRC"));
    }
    if self.initial & !mask != 0 {
      return Err(Error::InvalidArgument("initial value wider than the CRC"));
    }
    if self.xor_out & !mask != 0 {
      return Err(Error::InvalidArgument("xor_out wider than the CRC"));
    }
    Ok(())
  }

  /// Look up a catalogue entry by name (case-insensitive).
  #[must_use]
  pub fn by_name(name: &str) -> Option<Self> {
    Self::CATALOGUE.iter().find(|p| p.name.eq_ignore_ascii_case(name)).copied()
  }

  /// Returns the reflected polynomial (bit-reversed).
  ///
  /// For reflected CRCs, the polynomial is processed in bit-reversed form.
  #[must_use]
  pub const fn polynomial_reflected(&self) -> u64 {
    reflect_bits(self.polynomial, self.width)
  }

  /// Digest size in bytes (`ceil(width / 8)`).
  #[inline]
  #[must_use]
  pub const fn output_len(&self) -> usize {
    (self.width as usize).div_ceil(8)
  }
}
