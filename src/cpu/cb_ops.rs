//! The CB-prefixed opcode implementations: rotates, shifts, SWAP and the
//! single-bit test/reset/set grids.

use super::{Cpu, CycleType};
use crate::memory::Memory;

// --- Implementation macros ---

macro_rules! impl_rot_r_x {
    ($( $name:ident : ($alu:ident, $x:ident), )*) => {$(
        pub fn $name(&mut self, _mem: &mut M) -> CycleType {
            let v = self.regs.$x;
            self.regs.$x = self.$alu(v);
            self.cb_op_cycles()
        }
    )*}
}

macro_rules! impl_rot_HLm {
    ($( $name:ident : $alu:ident, )*) => {$(
        pub fn $name(&mut self, mem: &mut M) -> CycleType {
            let hl = self.regs.hl();
            let v = mem.read_byte(hl);
            let v = self.$alu(v);
            mem.write_byte(hl, v);
            self.cb_op_cycles()
        }
    )*}
}

macro_rules! impl_BIT_b_r_x {
    ($( $name:ident : ($bit:expr, $x:ident), )*) => {$(
        pub fn $name(&mut self, _mem: &mut M) -> CycleType {
            let v = self.regs.$x;
            self.alu_bit(v, $bit);
            self.cb_op_cycles()
        }
    )*}
}

macro_rules! impl_BIT_b_HLm {
    ($( $name:ident : $bit:expr, )*) => {$(
        pub fn $name(&mut self, mem: &mut M) -> CycleType {
            let v = mem.read_byte(self.regs.hl());
            self.alu_bit(v, $bit);
            self.cb_op_cycles()
        }
    )*}
}

macro_rules! impl_RES_b_r_x {
    ($( $name:ident : ($bit:expr, $x:ident), )*) => {$(
        pub fn $name(&mut self, _mem: &mut M) -> CycleType {
            self.regs.$x &= !(1 << $bit);
            self.cb_op_cycles()
        }
    )*}
}

macro_rules! impl_RES_b_HLm {
    ($( $name:ident : $bit:expr, )*) => {$(
        pub fn $name(&mut self, mem: &mut M) -> CycleType {
            let hl = self.regs.hl();
            let v = mem.read_byte(hl) & !(1 << $bit);
            mem.write_byte(hl, v);
            self.cb_op_cycles()
        }
    )*}
}

macro_rules! impl_SET_b_r_x {
    ($( $name:ident : ($bit:expr, $x:ident), )*) => {$(
        pub fn $name(&mut self, _mem: &mut M) -> CycleType {
            self.regs.$x |= 1 << $bit;
            self.cb_op_cycles()
        }
    )*}
}

macro_rules! impl_SET_b_HLm {
    ($( $name:ident : $bit:expr, )*) => {$(
        pub fn $name(&mut self, mem: &mut M) -> CycleType {
            let hl = self.regs.hl();
            let v = mem.read_byte(hl) | (1 << $bit);
            mem.write_byte(hl, v);
            self.cb_op_cycles()
        }
    )*}
}

#[allow(non_snake_case)]
impl<M: Memory> Cpu<M> {
    //
    // --- Rotates and shifts ---
    //

    impl_rot_r_x! {
        RLC_r_b: (alu_rlc, b), RLC_r_c: (alu_rlc, c), RLC_r_d: (alu_rlc, d),
        RLC_r_e: (alu_rlc, e), RLC_r_h: (alu_rlc, h), RLC_r_l: (alu_rlc, l),
        RLC_r_a: (alu_rlc, a),
        RRC_r_b: (alu_rrc, b), RRC_r_c: (alu_rrc, c), RRC_r_d: (alu_rrc, d),
        RRC_r_e: (alu_rrc, e), RRC_r_h: (alu_rrc, h), RRC_r_l: (alu_rrc, l),
        RRC_r_a: (alu_rrc, a),
        RL_r_b: (alu_rl, b), RL_r_c: (alu_rl, c), RL_r_d: (alu_rl, d),
        RL_r_e: (alu_rl, e), RL_r_h: (alu_rl, h), RL_r_l: (alu_rl, l),
        RL_r_a: (alu_rl, a),
        RR_r_b: (alu_rr, b), RR_r_c: (alu_rr, c), RR_r_d: (alu_rr, d),
        RR_r_e: (alu_rr, e), RR_r_h: (alu_rr, h), RR_r_l: (alu_rr, l),
        RR_r_a: (alu_rr, a),
        SLA_r_b: (alu_sla, b), SLA_r_c: (alu_sla, c), SLA_r_d: (alu_sla, d),
        SLA_r_e: (alu_sla, e), SLA_r_h: (alu_sla, h), SLA_r_l: (alu_sla, l),
        SLA_r_a: (alu_sla, a),
        SRA_r_b: (alu_sra, b), SRA_r_c: (alu_sra, c), SRA_r_d: (alu_sra, d),
        SRA_r_e: (alu_sra, e), SRA_r_h: (alu_sra, h), SRA_r_l: (alu_sra, l),
        SRA_r_a: (alu_sra, a),
        SWAP_r_b: (alu_swap, b), SWAP_r_c: (alu_swap, c), SWAP_r_d: (alu_swap, d),
        SWAP_r_e: (alu_swap, e), SWAP_r_h: (alu_swap, h), SWAP_r_l: (alu_swap, l),
        SWAP_r_a: (alu_swap, a),
        SRL_r_b: (alu_srl, b), SRL_r_c: (alu_srl, c), SRL_r_d: (alu_srl, d),
        SRL_r_e: (alu_srl, e), SRL_r_h: (alu_srl, h), SRL_r_l: (alu_srl, l),
        SRL_r_a: (alu_srl, a),
    }

    impl_rot_HLm! {
        RLC_HLm: alu_rlc, RRC_HLm: alu_rrc, RL_HLm: alu_rl, RR_HLm: alu_rr,
        SLA_HLm: alu_sla, SRA_HLm: alu_sra, SWAP_HLm: alu_swap, SRL_HLm: alu_srl,
    }

    //
    // --- BIT ---
    //

    impl_BIT_b_r_x! {
        BIT_0_r_b: (0, b), BIT_0_r_c: (0, c), BIT_0_r_d: (0, d), BIT_0_r_e: (0, e),
        BIT_0_r_h: (0, h), BIT_0_r_l: (0, l), BIT_0_r_a: (0, a),
        BIT_1_r_b: (1, b), BIT_1_r_c: (1, c), BIT_1_r_d: (1, d), BIT_1_r_e: (1, e),
        BIT_1_r_h: (1, h), BIT_1_r_l: (1, l), BIT_1_r_a: (1, a),
        BIT_2_r_b: (2, b), BIT_2_r_c: (2, c), BIT_2_r_d: (2, d), BIT_2_r_e: (2, e),
        BIT_2_r_h: (2, h), BIT_2_r_l: (2, l), BIT_2_r_a: (2, a),
        BIT_3_r_b: (3, b), BIT_3_r_c: (3, c), BIT_3_r_d: (3, d), BIT_3_r_e: (3, e),
        BIT_3_r_h: (3, h), BIT_3_r_l: (3, l), BIT_3_r_a: (3, a),
        BIT_4_r_b: (4, b), BIT_4_r_c: (4, c), BIT_4_r_d: (4, d), BIT_4_r_e: (4, e),
        BIT_4_r_h: (4, h), BIT_4_r_l: (4, l), BIT_4_r_a: (4, a),
        BIT_5_r_b: (5, b), BIT_5_r_c: (5, c), BIT_5_r_d: (5, d), BIT_5_r_e: (5, e),
        BIT_5_r_h: (5, h), BIT_5_r_l: (5, l), BIT_5_r_a: (5, a),
        BIT_6_r_b: (6, b), BIT_6_r_c: (6, c), BIT_6_r_d: (6, d), BIT_6_r_e: (6, e),
        BIT_6_r_h: (6, h), BIT_6_r_l: (6, l), BIT_6_r_a: (6, a),
        BIT_7_r_b: (7, b), BIT_7_r_c: (7, c), BIT_7_r_d: (7, d), BIT_7_r_e: (7, e),
        BIT_7_r_h: (7, h), BIT_7_r_l: (7, l), BIT_7_r_a: (7, a),
    }

    impl_BIT_b_HLm! {
        BIT_0_HLm: 0, BIT_1_HLm: 1, BIT_2_HLm: 2, BIT_3_HLm: 3,
        BIT_4_HLm: 4, BIT_5_HLm: 5, BIT_6_HLm: 6, BIT_7_HLm: 7,
    }

    //
    // --- RES ---
    //

    impl_RES_b_r_x! {
        RES_0_r_b: (0, b), RES_0_r_c: (0, c), RES_0_r_d: (0, d), RES_0_r_e: (0, e),
        RES_0_r_h: (0, h), RES_0_r_l: (0, l), RES_0_r_a: (0, a),
        RES_1_r_b: (1, b), RES_1_r_c: (1, c), RES_1_r_d: (1, d), RES_1_r_e: (1, e),
        RES_1_r_h: (1, h), RES_1_r_l: (1, l), RES_1_r_a: (1, a),
        RES_2_r_b: (2, b), RES_2_r_c: (2, c), RES_2_r_d: (2, d), RES_2_r_e: (2, e),
        RES_2_r_h: (2, h), RES_2_r_l: (2, l), RES_2_r_a: (2, a),
        RES_3_r_b: (3, b), RES_3_r_c: (3, c), RES_3_r_d: (3, d), RES_3_r_e: (3, e),
        RES_3_r_h: (3, h), RES_3_r_l: (3, l), RES_3_r_a: (3, a),
        RES_4_r_b: (4, b), RES_4_r_c: (4, c), RES_4_r_d: (4, d), RES_4_r_e: (4, e),
        RES_4_r_h: (4, h), RES_4_r_l: (4, l), RES_4_r_a: (4, a),
        RES_5_r_b: (5, b), RES_5_r_c: (5, c), RES_5_r_d: (5, d), RES_5_r_e: (5, e),
        RES_5_r_h: (5, h), RES_5_r_l: (5, l), RES_5_r_a: (5, a),
        RES_6_r_b: (6, b), RES_6_r_c: (6, c), RES_6_r_d: (6, d), RES_6_r_e: (6, e),
        RES_6_r_h: (6, h), RES_6_r_l: (6, l), RES_6_r_a: (6, a),
        RES_7_r_b: (7, b), RES_7_r_c: (7, c), RES_7_r_d: (7, d), RES_7_r_e: (7, e),
        RES_7_r_h: (7, h), RES_7_r_l: (7, l), RES_7_r_a: (7, a),
    }

    impl_RES_b_HLm! {
        RES_0_HLm: 0, RES_1_HLm: 1, RES_2_HLm: 2, RES_3_HLm: 3,
        RES_4_HLm: 4, RES_5_HLm: 5, RES_6_HLm: 6, RES_7_HLm: 7,
    }

    //
    // --- SET ---
    //

    impl_SET_b_r_x! {
        SET_0_r_b: (0, b), SET_0_r_c: (0, c), SET_0_r_d: (0, d), SET_0_r_e: (0, e),
        SET_0_r_h: (0, h), SET_0_r_l: (0, l), SET_0_r_a: (0, a),
        SET_1_r_b: (1, b), SET_1_r_c: (1, c), SET_1_r_d: (1, d), SET_1_r_e: (1, e),
        SET_1_r_h: (1, h), SET_1_r_l: (1, l), SET_1_r_a: (1, a),
        SET_2_r_b: (2, b), SET_2_r_c: (2, c), SET_2_r_d: (2, d), SET_2_r_e: (2, e),
        SET_2_r_h: (2, h), SET_2_r_l: (2, l), SET_2_r_a: (2, a),
        SET_3_r_b: (3, b), SET_3_r_c: (3, c), SET_3_r_d: (3, d), SET_3_r_e: (3, e),
        SET_3_r_h: (3, h), SET_3_r_l: (3, l), SET_3_r_a: (3, a),
        SET_4_r_b: (4, b), SET_4_r_c: (4, c), SET_4_r_d: (4, d), SET_4_r_e: (4, e),
        SET_4_r_h: (4, h), SET_4_r_l: (4, l), SET_4_r_a: (4, a),
        SET_5_r_b: (5, b), SET_5_r_c: (5, c), SET_5_r_d: (5, d), SET_5_r_e: (5, e),
        SET_5_r_h: (5, h), SET_5_r_l: (5, l), SET_5_r_a: (5, a),
        SET_6_r_b: (6, b), SET_6_r_c: (6, c), SET_6_r_d: (6, d), SET_6_r_e: (6, e),
        SET_6_r_h: (6, h), SET_6_r_l: (6, l), SET_6_r_a: (6, a),
        SET_7_r_b: (7, b), SET_7_r_c: (7, c), SET_7_r_d: (7, d), SET_7_r_e: (7, e),
        SET_7_r_h: (7, h), SET_7_r_l: (7, l), SET_7_r_a: (7, a),
    }

    impl_SET_b_HLm! {
        SET_0_HLm: 0, SET_1_HLm: 1, SET_2_HLm: 2, SET_3_HLm: 3,
        SET_4_HLm: 4, SET_5_HLm: 5, SET_6_HLm: 6, SET_7_HLm: 7,
    }
}
