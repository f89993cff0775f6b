//! A cycle-driven emulator core for the classic Game Boy (DMG): LR35902
//! CPU interpreter, MMU with MBC1/MBC2 bank switching, scanline LCD
//! renderer and the interrupt and timer plumbing between them. Hosts
//! drive it through the `emulator::Emulator` façade.

mod bios;
pub mod cartridge;
pub mod cpu;
pub mod emulator;
pub mod error;
pub mod gpu;
pub mod irq;
pub mod joypad;
pub mod memory;
pub mod mmu;
pub mod registers;

pub use crate::emulator::Emulator;
pub use crate::error::EmulatorError;
pub use crate::joypad::JoypadKey;
