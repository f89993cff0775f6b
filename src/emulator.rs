//! The façade binding cartridge, MMU, CPU and GPU into a host-driven
//! frame loop.

use std::path::Path;

use crate::cartridge::Cartridge;
use crate::cpu::Cpu;
use crate::error::EmulatorError;
use crate::gpu::{Gpu, ScreenData};
use crate::irq::{Interrupt, InterruptController};
use crate::joypad::JoypadKey;
use crate::memory::Memory;
use crate::mmu::{Mmu, P1};

/// The whole machine. The host drives it by calling `frame` once per
/// display refresh (the frame loop targets 60 Hz) and presenting the
/// framebuffer afterwards.
pub struct Emulator {
    cpu: Cpu<Mmu>,
    mmu: Mmu,
    gpu: Gpu,
    skip_bios: bool,
}

impl Emulator {
    /// Load a cartridge from the given ROM file and power the machine on.
    pub fn power_on<P: AsRef<Path>>(rom_path: P, skip_bios: bool) -> Result<Emulator, EmulatorError> {
        Ok(Emulator::with_cartridge(Cartridge::load(rom_path)?, skip_bios))
    }

    /// Power on with an already-loaded cartridge.
    pub fn with_cartridge(cartridge: Cartridge, skip_bios: bool) -> Emulator {
        let mut emulator = Emulator {
            cpu: Cpu::new(),
            mmu: Mmu::new(cartridge),
            gpu: Gpu::new(),
            skip_bios,
        };
        emulator.reset();
        emulator
    }

    /// Back to the power-on state, keeping the loaded cartridge and the
    /// selected color scheme.
    pub fn reset(&mut self) {
        self.mmu.reset(self.skip_bios);
        self.gpu.reset();
        self.cpu.reset(if self.skip_bios { 0x0100 } else { 0x0000 });
    }

    /// Run the machine for one frame's worth of cycles, rendering into the
    /// framebuffer. Cycle overshoot carries into the next frame.
    pub fn frame(&mut self) -> Result<(), EmulatorError> {
        while self.cpu.can_execute() {
            let cycles = self.cpu.step(&mut self.mmu)?;
            self.mmu.step(cycles);
            self.gpu.update_graphics(cycles, &mut self.mmu);
            if self.mmu.in_bios() && self.cpu.regs.pc >= 0x0100 {
                self.mmu.leave_bios();
            }
        }
        Ok(())
    }

    /// Notification that the host saw the given key go down. May raise the
    /// joypad interrupt when the key's matrix row is selected.
    pub fn key_pressed(&mut self, key: JoypadKey) {
        let was_up = self.mmu.joypad_state() & (1 << key.bit()) != 0;
        self.mmu.clear_joypad_state(key);

        // the P1 read folds the select bits in; directions are selected
        // when bit 4 reads high, buttons when bit 5 reads low
        let p1 = self.mmu.read_byte(P1);
        let row_selected = if key.is_directional() {
            p1 & (1 << 4) != 0
        } else {
            p1 & (1 << 5) == 0
        };
        if row_selected && was_up {
            self.mmu.request_interrupt(Interrupt::Joypad);
        }
    }

    /// Notification that the host saw the given key go up.
    pub fn key_released(&mut self, key: JoypadKey) {
        self.mmu.set_joypad_state(key);
    }

    /// Select one of the 10 built-in color schemes.
    pub fn use_color_scheme(&mut self, scheme: usize) -> Result<(), EmulatorError> {
        self.gpu.use_color_scheme(scheme)
    }

    /// Read-only view of the 160x144 RGB framebuffer, row-major from the
    /// top-left corner.
    pub fn screen(&self) -> &ScreenData {
        self.gpu.screen_data()
    }

    pub fn cartridge(&self) -> &Cartridge {
        self.mmu.cartridge()
    }

    pub fn cpu(&self) -> &Cpu<Mmu> {
        &self.cpu
    }

    pub fn mmu(&mut self) -> &mut Mmu {
        &mut self.mmu
    }
}
