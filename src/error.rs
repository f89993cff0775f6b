//! Error kinds surfaced to the host. None of them are swallowed by the
//! core; anything fatal bubbles up through `Result` returns.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmulatorError {
    /// The cartridge file could not be opened or read.
    #[error("could not read the cartridge file: {0}")]
    NotReadable(#[from] io::Error),
    /// The cartridge image is too small to hold the 0x150-byte header area.
    #[error("cartridge image too short ({0} bytes) to hold a header")]
    ShortRom(usize),
    /// The header checksum over 0x134..=0x14C does not match byte 0x14D.
    #[error("cartridge header checksum mismatch (header {header:#04X}, computed {computed:#04X})")]
    BadChecksum { header: u8, computed: u8 },
    /// The cartridge type byte names a mapper the core does not emulate.
    #[error("unsupported cartridge mapper byte {0:#04X}")]
    UnsupportedMapper(u8),
    /// The CPU fetched one of the LR35902's unused opcodes.
    #[error("invalid opcode {opcode:#04X} at {pc:#06X} (cb prefix: {cb})")]
    InvalidOpcode { opcode: u8, pc: u16, cb: bool },
    /// Color scheme selector outside 0..=9.
    #[error("color scheme index {0} out of range (0..=9)")]
    BadColorScheme(usize),
}
