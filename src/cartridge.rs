//! Cartridge loading: ROM bytes, the 0x50-byte header at 0x100 and the
//! memory bank controller type derived from it.

use std::fs;
use std::path::Path;

use log::info;

use crate::error::EmulatorError;

/// Offset of the header structure inside the ROM image.
const HEADER_OFFSET: usize = 0x100;
/// The header covers 0x100..0x150.
const HEADER_SIZE: usize = 0x50;
/// Range summed by the header checksum, inclusive.
const CHECKSUM_RANGE: std::ops::RangeInclusive<usize> = 0x134..=0x14C;

/// The memory bank controllers the core emulates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MbcKind {
    /// Plain 32 KiB ROM, no banking hardware.
    None,
    Mbc1,
    Mbc2,
}

/// The parsed cartridge header (0x100..0x150 in the ROM image).
#[derive(Clone, Debug)]
pub struct CartridgeHeader {
    /// Entry point, usually "NOP; JP 0150h".
    pub entry: [u8; 4],
    /// Uppercase game title, padded with 0.
    pub title: [u8; 16],
    /// Publisher code used by newer games.
    pub publisher: [u8; 2],
    /// A value of 3 indicates SGB support.
    pub sgb: u8,
    /// MBC type/extras byte.
    pub cartridge_type: u8,
    /// ROM size code: the ROM is `0x8000 << rom_size` bytes.
    pub rom_size: u8,
    /// External RAM size code.
    pub ram_size: u8,
    /// 0 for the Japanese market, 1 otherwise.
    pub destination: u8,
    /// Publisher code used by older games.
    pub old_publisher: u8,
    /// Version of the game, usually 0.
    pub version: u8,
    /// Checked against the sum over 0x134..=0x14C.
    pub header_checksum: u8,
    /// Simple summation over the whole ROM, not checked.
    pub global_checksum: u16,
}

impl CartridgeHeader {
    fn parse(rom: &[u8]) -> CartridgeHeader {
        let h = &rom[HEADER_OFFSET..HEADER_OFFSET + HEADER_SIZE];
        let mut entry = [0u8; 4];
        entry.copy_from_slice(&h[0x00..0x04]);
        let mut title = [0u8; 16];
        title.copy_from_slice(&h[0x34..0x44]);
        CartridgeHeader {
            entry,
            title,
            publisher: [h[0x44], h[0x45]],
            sgb: h[0x46],
            cartridge_type: h[0x47],
            rom_size: h[0x48],
            ram_size: h[0x49],
            destination: h[0x4A],
            old_publisher: h[0x4B],
            version: h[0x4C],
            header_checksum: h[0x4D],
            global_checksum: ((h[0x4E] as u16) << 8) | (h[0x4F] as u16),
        }
    }
}

/// An immutable, validated cartridge image.
pub struct Cartridge {
    rom: Vec<u8>,
    header: CartridgeHeader,
    mbc: MbcKind,
}

impl Cartridge {
    /// Load and validate a cartridge from a ROM file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Cartridge, EmulatorError> {
        let data = fs::read(path)?;
        Cartridge::from_bytes(data)
    }

    /// Build a cartridge from an in-memory ROM image.
    ///
    /// The ROM buffer is grown (with 0xFF filler) to the size the header
    /// declares, so banked reads never index past the end.
    pub fn from_bytes(mut data: Vec<u8>) -> Result<Cartridge, EmulatorError> {
        if data.len() < HEADER_OFFSET + HEADER_SIZE {
            return Err(EmulatorError::ShortRom(data.len()));
        }
        let header = CartridgeHeader::parse(&data);
        Cartridge::verify_checksum(&data, header.header_checksum)?;
        let mbc = Cartridge::detect_mbc(header.cartridge_type)?;

        let rom_size = 0x8000usize << header.rom_size;
        data.resize(rom_size.max(data.len()), 0xFF);

        info!(
            "cartridge: loaded '{}' ({:?}, {} KiB ROM)",
            String::from_utf8_lossy(&header.title)
                .trim_end_matches('\0')
                .trim_end(),
            mbc,
            rom_size / 1024,
        );

        Ok(Cartridge {
            rom: data,
            header,
            mbc,
        })
    }

    /// The negative one's-complement-style sum over 0x134..=0x14C must
    /// match the checksum byte at 0x14D.
    fn verify_checksum(rom: &[u8], header_checksum: u8) -> Result<(), EmulatorError> {
        let mut sum = 0i32;
        for i in CHECKSUM_RANGE {
            sum = sum - rom[i] as i32 - 1;
        }
        let computed = (sum & 0xFF) as u8;
        if computed != header_checksum {
            return Err(EmulatorError::BadChecksum {
                header: header_checksum,
                computed,
            });
        }
        Ok(())
    }

    fn detect_mbc(type_byte: u8) -> Result<MbcKind, EmulatorError> {
        match type_byte {
            0x00 => Ok(MbcKind::None),
            0x01..=0x03 => Ok(MbcKind::Mbc1),
            0x05..=0x06 => Ok(MbcKind::Mbc2),
            other => Err(EmulatorError::UnsupportedMapper(other)),
        }
    }

    /// Read the ROM byte at the given linear offset. Bank resolution is the
    /// MMU's business; offsets past the image answer 0xFF like an open bus.
    pub fn read(&self, offset: usize) -> u8 {
        self.rom.get(offset).copied().unwrap_or(0xFF)
    }

    /// Total size of the (padded) ROM image in bytes.
    pub fn rom_len(&self) -> usize {
        self.rom.len()
    }

    pub fn header(&self) -> &CartridgeHeader {
        &self.header
    }

    /// The raw 16-byte game title from the header.
    pub fn title(&self) -> &[u8; 16] {
        &self.header.title
    }

    pub fn mbc(&self) -> MbcKind {
        self.mbc
    }
}

#[cfg(test)]
mod test {
    use super::{Cartridge, MbcKind};
    use crate::error::EmulatorError;

    /// Build a minimal 32 KiB ROM image with a valid header.
    pub fn test_rom(cartridge_type: u8) -> Vec<u8> {
        let mut rom = vec![0x00; 0x8000];
        rom[0x147] = cartridge_type;
        let title = b"TESTROM";
        rom[0x134..0x134 + title.len()].copy_from_slice(title);
        let mut sum = 0i32;
        for i in 0x134..=0x14C {
            sum = sum - rom[i] as i32 - 1;
        }
        rom[0x14D] = (sum & 0xFF) as u8;
        rom
    }

    #[test]
    fn test_load_plain_rom() {
        let cartridge = Cartridge::from_bytes(test_rom(0x00)).unwrap();
        assert_eq!(cartridge.mbc(), MbcKind::None);
        assert_eq!(&cartridge.title()[..7], b"TESTROM");
        assert_eq!(cartridge.rom_len(), 0x8000);
    }

    #[test]
    fn test_mbc_detection() {
        for t in 0x01..=0x03 {
            assert_eq!(Cartridge::from_bytes(test_rom(t)).unwrap().mbc(), MbcKind::Mbc1);
        }
        for t in 0x05..=0x06 {
            assert_eq!(Cartridge::from_bytes(test_rom(t)).unwrap().mbc(), MbcKind::Mbc2);
        }
    }

    #[test]
    fn test_unsupported_mapper_rejected() {
        let rom = test_rom(0x13); // MBC3+RAM+BATTERY
        match Cartridge::from_bytes(rom) {
            Err(EmulatorError::UnsupportedMapper(0x13)) => {}
            other => panic!("expected UnsupportedMapper, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_bad_checksum_rejected() {
        let mut rom = test_rom(0x00);
        rom[0x14D] = rom[0x14D].wrapping_add(1);
        assert!(matches!(
            Cartridge::from_bytes(rom),
            Err(EmulatorError::BadChecksum { .. })
        ));
    }

    #[test]
    fn test_short_rom_rejected() {
        assert!(matches!(
            Cartridge::from_bytes(vec![0x00; 0x100]),
            Err(EmulatorError::ShortRom(0x100))
        ));
    }

    #[test]
    fn test_rom_grown_to_declared_size() {
        let mut rom = test_rom(0x01);
        rom[0x148] = 0x01; // 64 KiB declared
        let mut sum = 0i32;
        for i in 0x134..=0x14C {
            sum = sum - rom[i] as i32 - 1;
        }
        rom[0x14D] = (sum & 0xFF) as u8;
        let cartridge = Cartridge::from_bytes(rom).unwrap();
        assert_eq!(cartridge.rom_len(), 0x10000);
        assert_eq!(cartridge.read(0xFFFF), 0xFF); // filler
    }
}
