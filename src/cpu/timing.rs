//! Per-opcode clock-cycle tables and the DAA lookup table.

use super::CycleType;

/// Clock cycles for the primary opcodes. Conditional branches are listed
/// at their taken cost; the handlers return the not-taken cost themselves
/// when the condition fails. Unused opcodes are 0 (they fault before the
/// cost matters), and 0xCB is charged from the CB table instead.
pub const OPCODE_CYCLES: [CycleType; 256] = [
    // 0x00
    4, 12, 8, 8, 4, 4, 8, 4, 20, 8, 8, 8, 4, 4, 8, 4,
    // 0x10
    4, 12, 8, 8, 4, 4, 8, 4, 12, 8, 8, 8, 4, 4, 8, 4,
    // 0x20
    12, 12, 8, 8, 4, 4, 8, 4, 12, 8, 8, 8, 4, 4, 8, 4,
    // 0x30
    12, 12, 8, 8, 12, 12, 12, 4, 12, 8, 8, 8, 4, 4, 8, 4,
    // 0x40
    4, 4, 4, 4, 4, 4, 8, 4, 4, 4, 4, 4, 4, 4, 8, 4,
    // 0x50
    4, 4, 4, 4, 4, 4, 8, 4, 4, 4, 4, 4, 4, 4, 8, 4,
    // 0x60
    4, 4, 4, 4, 4, 4, 8, 4, 4, 4, 4, 4, 4, 4, 8, 4,
    // 0x70
    8, 8, 8, 8, 8, 8, 4, 8, 4, 4, 4, 4, 4, 4, 8, 4,
    // 0x80
    4, 4, 4, 4, 4, 4, 8, 4, 4, 4, 4, 4, 4, 4, 8, 4,
    // 0x90
    4, 4, 4, 4, 4, 4, 8, 4, 4, 4, 4, 4, 4, 4, 8, 4,
    // 0xA0
    4, 4, 4, 4, 4, 4, 8, 4, 4, 4, 4, 4, 4, 4, 8, 4,
    // 0xB0
    4, 4, 4, 4, 4, 4, 8, 4, 4, 4, 4, 4, 4, 4, 8, 4,
    // 0xC0
    20, 12, 16, 16, 24, 16, 8, 16, 20, 16, 16, 0, 24, 24, 8, 16,
    // 0xD0
    20, 12, 16, 0, 24, 16, 8, 16, 20, 16, 16, 0, 24, 0, 8, 16,
    // 0xE0
    12, 12, 8, 0, 0, 16, 8, 16, 16, 4, 16, 0, 0, 0, 8, 16,
    // 0xF0
    12, 12, 8, 4, 0, 16, 8, 16, 12, 8, 16, 4, 0, 0, 8, 16,
];

/// Clock cycles for the CB-prefixed opcodes, prefix fetch included:
/// 8 for register operands, 16 for (HL) operands, except BIT n,(HL)
/// which only reads and costs 12.
pub const CB_OPCODE_CYCLES: [CycleType; 256] = {
    let mut table = [8; 256];
    let mut op = 0x06;
    while op < 0x100 {
        table[op] = if op >= 0x40 && op < 0x80 { 12 } else { 16 };
        op += 8;
    }
    table
};

/// Not-taken costs for the conditional control-flow opcodes.
pub const JR_NOT_TAKEN_CYCLES: CycleType = 8;
pub const JP_NOT_TAKEN_CYCLES: CycleType = 12;
pub const CALL_NOT_TAKEN_CYCLES: CycleType = 12;
pub const RET_NOT_TAKEN_CYCLES: CycleType = 8;

/// The DAA table, indexed by `A | c << 8 | h << 9 | n << 10`. The high
/// byte of an entry is the adjusted accumulator, the low byte the new F.
pub static DAA_TABLE: [u16; 2048] = build_daa_table();

const Z: u16 = 0b_1000_0000;
const N: u16 = 0b_0100_0000;
const C: u16 = 0b_0001_0000;

const fn build_daa_table() -> [u16; 2048] {
    let mut table = [0u16; 2048];
    let mut index = 0usize;
    while index < 2048 {
        let a = (index & 0xFF) as u16;
        let c = index & 0x100 != 0;
        let h = index & 0x200 != 0;
        let n = index & 0x400 != 0;

        let mut result = a;
        let mut carry = c;
        if n {
            if c {
                result = result.wrapping_sub(0x60);
            }
            if h {
                result = result.wrapping_sub(0x06);
            }
        } else {
            if c || a > 0x99 {
                result = result.wrapping_add(0x60);
                carry = true;
            }
            if h || a & 0x0F > 0x09 {
                result = result.wrapping_add(0x06);
            }
        }
        result &= 0xFF;

        let mut flags = 0u16;
        if result == 0 {
            flags |= Z;
        }
        if n {
            flags |= N;
        }
        if carry {
            flags |= C;
        }
        // the half-carry flag always comes out cleared

        table[index] = (result << 8) | flags;
        index += 1;
    }
    table
}

#[cfg(test)]
mod test {
    use super::{CB_OPCODE_CYCLES, DAA_TABLE, OPCODE_CYCLES};

    #[test]
    fn test_primary_cycle_spot_checks() {
        assert_eq!(OPCODE_CYCLES[0x00], 4); // NOP
        assert_eq!(OPCODE_CYCLES[0x08], 20); // LD (nn),SP
        assert_eq!(OPCODE_CYCLES[0x18], 12); // JR n
        assert_eq!(OPCODE_CYCLES[0x36], 12); // LD (HL),n
        assert_eq!(OPCODE_CYCLES[0x76], 4); // HALT
        assert_eq!(OPCODE_CYCLES[0x86], 8); // ADD A,(HL)
        assert_eq!(OPCODE_CYCLES[0xC4], 24); // CALL NZ,nn (taken)
        assert_eq!(OPCODE_CYCLES[0xC9], 16); // RET
        assert_eq!(OPCODE_CYCLES[0xE8], 16); // ADD SP,n
        assert_eq!(OPCODE_CYCLES[0xF8], 12); // LD HL,SP+n
    }

    #[test]
    fn test_cb_cycle_spot_checks() {
        assert_eq!(CB_OPCODE_CYCLES[0x00], 8); // RLC B
        assert_eq!(CB_OPCODE_CYCLES[0x06], 16); // RLC (HL)
        assert_eq!(CB_OPCODE_CYCLES[0x46], 12); // BIT 0,(HL)
        assert_eq!(CB_OPCODE_CYCLES[0x7E], 12); // BIT 7,(HL)
        assert_eq!(CB_OPCODE_CYCLES[0x86], 16); // RES 0,(HL)
        assert_eq!(CB_OPCODE_CYCLES[0xFF], 8); // SET 7,A
    }

    #[test]
    fn test_daa_after_bcd_addition() {
        // 0x15 + 0x27 = 0x3C, DAA adjusts to 0x42
        let entry = DAA_TABLE[0x3C];
        assert_eq!(entry >> 8, 0x42);
        assert_eq!(entry & 0xFF, 0x00);
        // 0x90 + 0x90 = 0x20 with carry, DAA adjusts to 0x80 carry kept
        let entry = DAA_TABLE[0x20 | 0x100];
        assert_eq!(entry >> 8, 0x80);
        assert_eq!(entry & 0xFF, super::C as u16);
    }

    #[test]
    fn test_daa_after_bcd_subtraction() {
        // 0x42 - 0x15 = 0x2D with half-borrow, DAA adjusts to 0x27
        let entry = DAA_TABLE[0x2D | 0x200 | 0x400];
        assert_eq!(entry >> 8, 0x27);
        assert_eq!(entry & 0xFF, super::N as u16);
    }

    #[test]
    fn test_daa_zero_sets_z() {
        // 0x99 + 0x01 = 0x9A, adjusts to 0x00 with carry
        let entry = DAA_TABLE[0x9A];
        assert_eq!(entry >> 8, 0x00);
        assert_eq!(entry & 0xFF, (super::Z | super::C) as u16);
    }
}
