#![allow(non_snake_case)]

use super::test_cpu;
use crate::registers::{C_FLAG, H_FLAG, N_FLAG, Z_FLAG};

// ADD HL,rr : Z is untouched, H carries from bit 11, C from bit 15
macro_rules! test_ADD_HL_rr {
    ($ ( $name: ident : ($instr: expr, $set: ident), )* ) => {
    $(
        #[test]
        fn $name() {
            {
                let machine = test_cpu(&[$instr], |cpu, _| {
                    cpu.regs.f = Z_FLAG | N_FLAG;
                    cpu.regs.set_hl(0x0FFF);
                    cpu.regs.$set(0x0001);
                });
                assert_eq!(machine.clock_cycles(), 8);
                assert_eq!(machine.cpu.regs.hl(), 0x1000);
                assert_eq!(machine.cpu.regs.f, Z_FLAG | H_FLAG);
            }
            {
                let machine = test_cpu(&[$instr], |cpu, _| {
                    cpu.regs.set_hl(0x8000);
                    cpu.regs.$set(0x8000);
                });
                assert_eq!(machine.cpu.regs.hl(), 0x0000);
                assert_eq!(machine.cpu.regs.f, C_FLAG);
            }
        }
    )*
    }
}
test_ADD_HL_rr! {
    test_ADD_HL_BC: (0x09, set_bc),
    test_ADD_HL_DE: (0x19, set_de),
}

#[test]
fn test_ADD_HL_HL() {
    let machine = test_cpu(&[0x29], |cpu, _| {
        cpu.regs.set_hl(0x0800);
    });
    assert_eq!(machine.cpu.regs.hl(), 0x1000);
    assert_eq!(machine.cpu.regs.f, H_FLAG);
}

#[test]
fn test_ADD_HL_SP() {
    let machine = test_cpu(&[0x39], |cpu, _| {
        cpu.regs.set_hl(0x1234);
        cpu.regs.sp = 0x0111;
    });
    assert_eq!(machine.cpu.regs.hl(), 0x1345);
    assert_eq!(machine.cpu.regs.f, 0);
}

// 16-bit INC/DEC touch no flags at all
macro_rules! test_INC16 {
    ($ ( $name: ident : ($instr: expr, $get: ident, $set: ident), )* ) => {
    $(
        #[test]
        fn $name() {
            let machine = test_cpu(&[$instr], |cpu, _| {
                cpu.regs.f = Z_FLAG | N_FLAG | H_FLAG | C_FLAG;
                cpu.regs.$set(0xFFFF);
            });
            assert_eq!(machine.clock_cycles(), 8);
            assert_eq!(machine.cpu.regs.$get(), 0x0000);
            assert_eq!(machine.cpu.regs.f, Z_FLAG | N_FLAG | H_FLAG | C_FLAG);
        }
    )*
    }
}
test_INC16! {
    test_INC_BC: (0x03, bc, set_bc),
    test_INC_DE: (0x13, de, set_de),
    test_INC_HL: (0x23, hl, set_hl),
}

macro_rules! test_DEC16 {
    ($ ( $name: ident : ($instr: expr, $get: ident, $set: ident), )* ) => {
    $(
        #[test]
        fn $name() {
            let machine = test_cpu(&[$instr], |cpu, _| {
                cpu.regs.$set(0x0000);
            });
            assert_eq!(machine.cpu.regs.$get(), 0xFFFF);
            assert_eq!(machine.cpu.regs.f, 0);
        }
    )*
    }
}
test_DEC16! {
    test_DEC_BC: (0x0B, bc, set_bc),
    test_DEC_DE: (0x1B, de, set_de),
    test_DEC_HL: (0x2B, hl, set_hl),
}

#[test]
fn test_INC_DEC_SP() {
    let machine = test_cpu(&[0x33], |cpu, _| {
        cpu.regs.sp = 0xFFFE;
    });
    assert_eq!(machine.cpu.regs.sp, 0xFFFF);

    let machine = test_cpu(&[0x3B], |cpu, _| {
        cpu.regs.sp = 0x0000;
    });
    assert_eq!(machine.cpu.regs.sp, 0xFFFF);
}

// ADD SP,n : Z and N cleared, H and C computed on the low byte
#[test]
fn test_ADD_SP_n() {
    {
        let machine = test_cpu(&[0xE8, 0x05], |cpu, _| {
            cpu.regs.f = Z_FLAG | N_FLAG;
            cpu.regs.sp = 0xFFF8;
        });
        assert_eq!(machine.clock_cycles(), 16);
        assert_eq!(machine.cpu.regs.sp, 0xFFFD);
        assert_eq!(machine.cpu.regs.f, 0);
    }
    {
        // negative offset; flags still from the unsigned low byte
        let machine = test_cpu(&[0xE8, 0xFF], |cpu, _| {
            cpu.regs.sp = 0x0001;
        });
        assert_eq!(machine.cpu.regs.sp, 0x0000);
        assert_eq!(machine.cpu.regs.f, H_FLAG | C_FLAG);
    }
}

#[test]
fn test_LDHL_SP_n() {
    let machine = test_cpu(&[0xF8, 0x02], |cpu, _| {
        cpu.regs.sp = 0xFFF8;
    });
    assert_eq!(machine.clock_cycles(), 12);
    assert_eq!(machine.cpu.regs.hl(), 0xFFFA);
    assert_eq!(machine.cpu.regs.sp, 0xFFF8);
    assert_eq!(machine.cpu.regs.f, 0);
}
