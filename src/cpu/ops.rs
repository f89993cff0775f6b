//! The primary (non-CB) opcode implementations. Cycle costs come from
//! `timing::OPCODE_CYCLES`; conditional control flow returns its
//! documented not-taken cost when the condition fails.

use log::warn;

use super::timing::{
    CALL_NOT_TAKEN_CYCLES, JP_NOT_TAKEN_CYCLES, JR_NOT_TAKEN_CYCLES, RET_NOT_TAKEN_CYCLES,
};
use super::{Cpu, CycleType};
use crate::memory::Memory;
use crate::registers::{C_FLAG, H_FLAG, N_FLAG, Z_FLAG};

// --- Implementation macros ---
// generate the register-to-register grids instead of spelling out every
// combination by hand

macro_rules! impl_LD_rr_xy {
    ($( $name:ident : ($x:ident, $y:ident), )*) => {$(
        pub fn $name(&mut self, _mem: &mut M) -> CycleType {
            self.regs.$x = self.regs.$y;
            self.op_cycles()
        }
    )*}
}

macro_rules! impl_LD_r_n_x {
    ($( $name:ident : $x:ident, )*) => {$(
        pub fn $name(&mut self, mem: &mut M) -> CycleType {
            self.regs.$x = self.fetch_byte(mem);
            self.op_cycles()
        }
    )*}
}

macro_rules! impl_LD_r_HLm_x {
    ($( $name:ident : $x:ident, )*) => {$(
        pub fn $name(&mut self, mem: &mut M) -> CycleType {
            self.regs.$x = mem.read_byte(self.regs.hl());
            self.op_cycles()
        }
    )*}
}

macro_rules! impl_LD_HLm_r_x {
    ($( $name:ident : $x:ident, )*) => {$(
        pub fn $name(&mut self, mem: &mut M) -> CycleType {
            mem.write_byte(self.regs.hl(), self.regs.$x);
            self.op_cycles()
        }
    )*}
}

macro_rules! impl_alu_r_x {
    ($( $name:ident : ($alu:ident, $x:ident $(, $extra:expr)?), )*) => {$(
        pub fn $name(&mut self, _mem: &mut M) -> CycleType {
            let v = self.regs.$x;
            self.$alu(v $(, $extra)?);
            self.op_cycles()
        }
    )*}
}

macro_rules! impl_alu_HLm {
    ($( $name:ident : ($alu:ident $(, $extra:expr)?), )*) => {$(
        pub fn $name(&mut self, mem: &mut M) -> CycleType {
            let v = mem.read_byte(self.regs.hl());
            self.$alu(v $(, $extra)?);
            self.op_cycles()
        }
    )*}
}

macro_rules! impl_alu_n {
    ($( $name:ident : ($alu:ident $(, $extra:expr)?), )*) => {$(
        pub fn $name(&mut self, mem: &mut M) -> CycleType {
            let v = self.fetch_byte(mem);
            self.$alu(v $(, $extra)?);
            self.op_cycles()
        }
    )*}
}

macro_rules! impl_INC_r_x {
    ($( $name:ident : $x:ident, )*) => {$(
        pub fn $name(&mut self, _mem: &mut M) -> CycleType {
            let v = self.regs.$x;
            self.regs.$x = self.alu_inc(v);
            self.op_cycles()
        }
    )*}
}

macro_rules! impl_DEC_r_x {
    ($( $name:ident : $x:ident, )*) => {$(
        pub fn $name(&mut self, _mem: &mut M) -> CycleType {
            let v = self.regs.$x;
            self.regs.$x = self.alu_dec(v);
            self.op_cycles()
        }
    )*}
}

macro_rules! impl_INC16 {
    ($( $name:ident : ($get:ident, $set:ident), )*) => {$(
        pub fn $name(&mut self, _mem: &mut M) -> CycleType {
            let v = self.regs.$get().wrapping_add(1);
            self.regs.$set(v);
            self.op_cycles()
        }
    )*}
}

macro_rules! impl_DEC16 {
    ($( $name:ident : ($get:ident, $set:ident), )*) => {$(
        pub fn $name(&mut self, _mem: &mut M) -> CycleType {
            let v = self.regs.$get().wrapping_sub(1);
            self.regs.$set(v);
            self.op_cycles()
        }
    )*}
}

macro_rules! impl_ADD_HL_rr {
    ($( $name:ident : $get:ident, )*) => {$(
        pub fn $name(&mut self, _mem: &mut M) -> CycleType {
            let (hl, rr) = (self.regs.hl(), self.regs.$get());
            let r = self.alu_add16(hl, rr);
            self.regs.set_hl(r);
            self.op_cycles()
        }
    )*}
}

macro_rules! impl_LD_rr_nn {
    ($( $name:ident : $set:ident, )*) => {$(
        pub fn $name(&mut self, mem: &mut M) -> CycleType {
            let v = self.fetch_word(mem);
            self.regs.$set(v);
            self.op_cycles()
        }
    )*}
}

macro_rules! impl_PUSH_rr {
    ($( $name:ident : $get:ident, )*) => {$(
        pub fn $name(&mut self, mem: &mut M) -> CycleType {
            let v = self.regs.$get();
            self.stack_push(mem, v);
            self.op_cycles()
        }
    )*}
}

macro_rules! impl_POP_rr {
    ($( $name:ident : $set:ident, )*) => {$(
        pub fn $name(&mut self, mem: &mut M) -> CycleType {
            let v = self.stack_pop(mem);
            self.regs.$set(v);
            self.op_cycles()
        }
    )*}
}

macro_rules! impl_RST {
    ($( $name:ident : $vector:expr, )*) => {$(
        pub fn $name(&mut self, mem: &mut M) -> CycleType {
            let pc = self.regs.pc;
            self.stack_push(mem, pc);
            self.regs.pc = $vector;
            self.op_cycles()
        }
    )*}
}

macro_rules! impl_JR_cond_n {
    ($( $name:ident : ($flag:expr, $expected:expr), )*) => {$(
        pub fn $name(&mut self, mem: &mut M) -> CycleType {
            let offset = self.fetch_byte(mem);
            if self.regs.flag($flag) == $expected {
                self.cpu_jr(offset);
                self.op_cycles()
            } else {
                JR_NOT_TAKEN_CYCLES
            }
        }
    )*}
}

macro_rules! impl_JP_cond_nn {
    ($( $name:ident : ($flag:expr, $expected:expr), )*) => {$(
        pub fn $name(&mut self, mem: &mut M) -> CycleType {
            let address = self.fetch_word(mem);
            if self.regs.flag($flag) == $expected {
                self.regs.pc = address;
                self.op_cycles()
            } else {
                JP_NOT_TAKEN_CYCLES
            }
        }
    )*}
}

macro_rules! impl_CALL_cond_nn {
    ($( $name:ident : ($flag:expr, $expected:expr), )*) => {$(
        pub fn $name(&mut self, mem: &mut M) -> CycleType {
            let address = self.fetch_word(mem);
            if self.regs.flag($flag) == $expected {
                self.cpu_call(mem, address);
                self.op_cycles()
            } else {
                CALL_NOT_TAKEN_CYCLES
            }
        }
    )*}
}

macro_rules! impl_RET_cond {
    ($( $name:ident : ($flag:expr, $expected:expr), )*) => {$(
        pub fn $name(&mut self, mem: &mut M) -> CycleType {
            if self.regs.flag($flag) == $expected {
                self.regs.pc = self.stack_pop(mem);
                self.op_cycles()
            } else {
                RET_NOT_TAKEN_CYCLES
            }
        }
    )*}
}

// The opcodes are implemented here for better clarity in the code.
// Notations used :
// - (X) means the value stored in memory at the X address
#[allow(non_snake_case)]
impl<M: Memory> Cpu<M> {
    //
    // --- Misc/control instructions ---
    //

    pub fn NOP(&mut self, _mem: &mut M) -> CycleType {
        self.op_cycles()
    }

    /// STOP consumes its padding byte; the low-power mode itself is not
    /// emulated.
    pub fn STOP(&mut self, mem: &mut M) -> CycleType {
        let _ = self.fetch_byte(mem);
        warn!("cpu: STOP executed, treated as NOP");
        self.op_cycles()
    }

    pub fn HALT(&mut self, _mem: &mut M) -> CycleType {
        if self.ime {
            self.halted = true;
        }
        self.op_cycles()
    }

    // DI : disable interrupts after the next instruction
    pub fn DI(&mut self, _mem: &mut M) -> CycleType {
        self.pending_di = true;
        self.op_cycles()
    }

    // EI : enable interrupts after the next instruction
    pub fn EI(&mut self, _mem: &mut M) -> CycleType {
        self.pending_ei = true;
        self.op_cycles()
    }

    // SCF : set the carry flag and also clear the N and H flags.
    pub fn SCF(&mut self, _mem: &mut M) -> CycleType {
        self.regs.set_flag(C_FLAG, true);
        self.regs.set_flag(N_FLAG | H_FLAG, false);
        self.op_cycles()
    }

    // CCF : toggle the carry flag and also clear the N and H flags.
    pub fn CCF(&mut self, _mem: &mut M) -> CycleType {
        let c = self.regs.flag(C_FLAG);
        self.regs.set_flag(C_FLAG, !c);
        self.regs.set_flag(N_FLAG | H_FLAG, false);
        self.op_cycles()
    }

    // CPL : complement register A.
    pub fn CPL(&mut self, _mem: &mut M) -> CycleType {
        self.regs.a = !self.regs.a;
        self.regs.set_flag(N_FLAG | H_FLAG, true);
        self.op_cycles()
    }

    // DAA : decimal-adjust register A.
    pub fn DAA(&mut self, _mem: &mut M) -> CycleType {
        self.alu_daa();
        self.op_cycles()
    }

    //
    // --- Load/store/move instructions ---
    //

    impl_LD_rr_xy! {
        LD_rr_bb: (b, b), LD_rr_bc: (b, c), LD_rr_bd: (b, d), LD_rr_be: (b, e),
        LD_rr_bh: (b, h), LD_rr_bl: (b, l), LD_rr_ba: (b, a),
        LD_rr_cb: (c, b), LD_rr_cc: (c, c), LD_rr_cd: (c, d), LD_rr_ce: (c, e),
        LD_rr_ch: (c, h), LD_rr_cl: (c, l), LD_rr_ca: (c, a),
        LD_rr_db: (d, b), LD_rr_dc: (d, c), LD_rr_dd: (d, d), LD_rr_de: (d, e),
        LD_rr_dh: (d, h), LD_rr_dl: (d, l), LD_rr_da: (d, a),
        LD_rr_eb: (e, b), LD_rr_ec: (e, c), LD_rr_ed: (e, d), LD_rr_ee: (e, e),
        LD_rr_eh: (e, h), LD_rr_el: (e, l), LD_rr_ea: (e, a),
        LD_rr_hb: (h, b), LD_rr_hc: (h, c), LD_rr_hd: (h, d), LD_rr_he: (h, e),
        LD_rr_hh: (h, h), LD_rr_hl: (h, l), LD_rr_ha: (h, a),
        LD_rr_lb: (l, b), LD_rr_lc: (l, c), LD_rr_ld: (l, d), LD_rr_le: (l, e),
        LD_rr_lh: (l, h), LD_rr_ll: (l, l), LD_rr_la: (l, a),
        LD_rr_ab: (a, b), LD_rr_ac: (a, c), LD_rr_ad: (a, d), LD_rr_ae: (a, e),
        LD_rr_ah: (a, h), LD_rr_al: (a, l), LD_rr_aa: (a, a),
    }

    impl_LD_r_n_x! {
        LD_r_n_b: b, LD_r_n_c: c, LD_r_n_d: d, LD_r_n_e: e,
        LD_r_n_h: h, LD_r_n_l: l, LD_r_n_a: a,
    }

    impl_LD_r_HLm_x! {
        LD_r_HLm_b: b, LD_r_HLm_c: c, LD_r_HLm_d: d, LD_r_HLm_e: e,
        LD_r_HLm_h: h, LD_r_HLm_l: l, LD_r_HLm_a: a,
    }

    impl_LD_HLm_r_x! {
        LD_HLm_r_b: b, LD_HLm_r_c: c, LD_HLm_r_d: d, LD_HLm_r_e: e,
        LD_HLm_r_h: h, LD_HLm_r_l: l, LD_HLm_r_a: a,
    }

    // LD (HL),n : store the immediate byte at (HL)
    pub fn LD_HLm_n(&mut self, mem: &mut M) -> CycleType {
        let n = self.fetch_byte(mem);
        mem.write_byte(self.regs.hl(), n);
        self.op_cycles()
    }

    // LD A,(BC) / LD A,(DE) and their stores
    pub fn LD_A_BCm(&mut self, mem: &mut M) -> CycleType {
        self.regs.a = mem.read_byte(self.regs.bc());
        self.op_cycles()
    }
    pub fn LD_A_DEm(&mut self, mem: &mut M) -> CycleType {
        self.regs.a = mem.read_byte(self.regs.de());
        self.op_cycles()
    }
    pub fn LD_BCm_A(&mut self, mem: &mut M) -> CycleType {
        mem.write_byte(self.regs.bc(), self.regs.a);
        self.op_cycles()
    }
    pub fn LD_DEm_A(&mut self, mem: &mut M) -> CycleType {
        mem.write_byte(self.regs.de(), self.regs.a);
        self.op_cycles()
    }

    // LD A,(nn) / LD (nn),A
    pub fn LD_A_NNm(&mut self, mem: &mut M) -> CycleType {
        let address = self.fetch_word(mem);
        self.regs.a = mem.read_byte(address);
        self.op_cycles()
    }
    pub fn LD_NNm_A(&mut self, mem: &mut M) -> CycleType {
        let address = self.fetch_word(mem);
        mem.write_byte(address, self.regs.a);
        self.op_cycles()
    }

    // LDI/LDD : load/store through (HL) with post-increment/decrement
    pub fn LDI_HLm_A(&mut self, mem: &mut M) -> CycleType {
        let hl = self.regs.hl();
        mem.write_byte(hl, self.regs.a);
        self.regs.set_hl(hl.wrapping_add(1));
        self.op_cycles()
    }
    pub fn LDI_A_HLm(&mut self, mem: &mut M) -> CycleType {
        let hl = self.regs.hl();
        self.regs.a = mem.read_byte(hl);
        self.regs.set_hl(hl.wrapping_add(1));
        self.op_cycles()
    }
    pub fn LDD_HLm_A(&mut self, mem: &mut M) -> CycleType {
        let hl = self.regs.hl();
        mem.write_byte(hl, self.regs.a);
        self.regs.set_hl(hl.wrapping_sub(1));
        self.op_cycles()
    }
    pub fn LDD_A_HLm(&mut self, mem: &mut M) -> CycleType {
        let hl = self.regs.hl();
        self.regs.a = mem.read_byte(hl);
        self.regs.set_hl(hl.wrapping_sub(1));
        self.op_cycles()
    }

    // LDH : loads/stores in the 0xFF00 page
    pub fn LDH_n_A(&mut self, mem: &mut M) -> CycleType {
        let offset = self.fetch_byte(mem);
        mem.writehi(offset, self.regs.a);
        self.op_cycles()
    }
    pub fn LDH_A_n(&mut self, mem: &mut M) -> CycleType {
        let offset = self.fetch_byte(mem);
        self.regs.a = mem.readhi(offset);
        self.op_cycles()
    }
    pub fn LDH_C_A(&mut self, mem: &mut M) -> CycleType {
        mem.writehi(self.regs.c, self.regs.a);
        self.op_cycles()
    }
    pub fn LDH_A_C(&mut self, mem: &mut M) -> CycleType {
        self.regs.a = mem.readhi(self.regs.c);
        self.op_cycles()
    }

    //
    // --- 16-bit loads ---
    //

    impl_LD_rr_nn! {
        LD_BC_nn: set_bc, LD_DE_nn: set_de, LD_HL_nn: set_hl,
    }

    pub fn LD_SP_nn(&mut self, mem: &mut M) -> CycleType {
        self.regs.sp = self.fetch_word(mem);
        self.op_cycles()
    }

    // LD (nn),SP : store the stack pointer at the immediate address
    pub fn LD_NNm_SP(&mut self, mem: &mut M) -> CycleType {
        let address = self.fetch_word(mem);
        mem.write_word(address, self.regs.sp);
        self.op_cycles()
    }

    pub fn LD_SP_HL(&mut self, _mem: &mut M) -> CycleType {
        self.regs.sp = self.regs.hl();
        self.op_cycles()
    }

    // LD HL,SP+n : signed offset, flags on the low byte
    pub fn LDHL_SP_n(&mut self, mem: &mut M) -> CycleType {
        let v = self.alu_add_sp(mem);
        self.regs.set_hl(v);
        self.op_cycles()
    }

    impl_PUSH_rr! {
        PUSH_BC: bc, PUSH_DE: de, PUSH_HL: hl, PUSH_AF: af,
    }

    impl_POP_rr! {
        POP_BC: set_bc, POP_DE: set_de, POP_HL: set_hl, POP_AF: set_af,
    }

    //
    // --- 8-bit ALU ---
    //

    impl_alu_r_x! {
        ADD_r_b: (alu_add, b, false), ADD_r_c: (alu_add, c, false),
        ADD_r_d: (alu_add, d, false), ADD_r_e: (alu_add, e, false),
        ADD_r_h: (alu_add, h, false), ADD_r_l: (alu_add, l, false),
        ADD_r_a: (alu_add, a, false),
        ADC_r_b: (alu_add, b, true), ADC_r_c: (alu_add, c, true),
        ADC_r_d: (alu_add, d, true), ADC_r_e: (alu_add, e, true),
        ADC_r_h: (alu_add, h, true), ADC_r_l: (alu_add, l, true),
        ADC_r_a: (alu_add, a, true),
        SUB_r_b: (alu_sub, b, false), SUB_r_c: (alu_sub, c, false),
        SUB_r_d: (alu_sub, d, false), SUB_r_e: (alu_sub, e, false),
        SUB_r_h: (alu_sub, h, false), SUB_r_l: (alu_sub, l, false),
        SUB_r_a: (alu_sub, a, false),
        SBC_r_b: (alu_sub, b, true), SBC_r_c: (alu_sub, c, true),
        SBC_r_d: (alu_sub, d, true), SBC_r_e: (alu_sub, e, true),
        SBC_r_h: (alu_sub, h, true), SBC_r_l: (alu_sub, l, true),
        SBC_r_a: (alu_sub, a, true),
        AND_r_b: (alu_and, b), AND_r_c: (alu_and, c), AND_r_d: (alu_and, d),
        AND_r_e: (alu_and, e), AND_r_h: (alu_and, h), AND_r_l: (alu_and, l),
        AND_r_a: (alu_and, a),
        XOR_r_b: (alu_xor, b), XOR_r_c: (alu_xor, c), XOR_r_d: (alu_xor, d),
        XOR_r_e: (alu_xor, e), XOR_r_h: (alu_xor, h), XOR_r_l: (alu_xor, l),
        XOR_r_a: (alu_xor, a),
        OR_r_b: (alu_or, b), OR_r_c: (alu_or, c), OR_r_d: (alu_or, d),
        OR_r_e: (alu_or, e), OR_r_h: (alu_or, h), OR_r_l: (alu_or, l),
        OR_r_a: (alu_or, a),
        CP_r_b: (alu_cp, b), CP_r_c: (alu_cp, c), CP_r_d: (alu_cp, d),
        CP_r_e: (alu_cp, e), CP_r_h: (alu_cp, h), CP_r_l: (alu_cp, l),
        CP_r_a: (alu_cp, a),
    }

    impl_alu_HLm! {
        ADD_HLm: (alu_add, false), ADC_HLm: (alu_add, true),
        SUB_HLm: (alu_sub, false), SBC_HLm: (alu_sub, true),
        AND_HLm: (alu_and), XOR_HLm: (alu_xor), OR_HLm: (alu_or),
        CP_HLm: (alu_cp),
    }

    impl_alu_n! {
        ADD_n: (alu_add, false), ADC_n: (alu_add, true),
        SUB_n: (alu_sub, false), SBC_n: (alu_sub, true),
        AND_n: (alu_and), XOR_n: (alu_xor), OR_n: (alu_or),
        CP_n: (alu_cp),
    }

    impl_INC_r_x! {
        INC_r_b: b, INC_r_c: c, INC_r_d: d, INC_r_e: e,
        INC_r_h: h, INC_r_l: l, INC_r_a: a,
    }

    impl_DEC_r_x! {
        DEC_r_b: b, DEC_r_c: c, DEC_r_d: d, DEC_r_e: e,
        DEC_r_h: h, DEC_r_l: l, DEC_r_a: a,
    }

    pub fn INC_HLm(&mut self, mem: &mut M) -> CycleType {
        let hl = self.regs.hl();
        let v = mem.read_byte(hl);
        let v = self.alu_inc(v);
        mem.write_byte(hl, v);
        self.op_cycles()
    }

    pub fn DEC_HLm(&mut self, mem: &mut M) -> CycleType {
        let hl = self.regs.hl();
        let v = mem.read_byte(hl);
        let v = self.alu_dec(v);
        mem.write_byte(hl, v);
        self.op_cycles()
    }

    //
    // --- 16-bit ALU ---
    //

    impl_INC16! {
        INC_BC: (bc, set_bc), INC_DE: (de, set_de), INC_HL: (hl, set_hl),
    }

    impl_DEC16! {
        DEC_BC: (bc, set_bc), DEC_DE: (de, set_de), DEC_HL: (hl, set_hl),
    }

    pub fn INC_SP(&mut self, _mem: &mut M) -> CycleType {
        self.regs.sp = self.regs.sp.wrapping_add(1);
        self.op_cycles()
    }

    pub fn DEC_SP(&mut self, _mem: &mut M) -> CycleType {
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.op_cycles()
    }

    impl_ADD_HL_rr! {
        ADD_HL_BC: bc, ADD_HL_DE: de, ADD_HL_HL: hl,
    }

    pub fn ADD_HL_SP(&mut self, _mem: &mut M) -> CycleType {
        let (hl, sp) = (self.regs.hl(), self.regs.sp);
        let r = self.alu_add16(hl, sp);
        self.regs.set_hl(r);
        self.op_cycles()
    }

    // ADD SP,n : signed offset, Z cleared, flags on the low byte
    pub fn ADD_SP_n(&mut self, mem: &mut M) -> CycleType {
        self.regs.sp = self.alu_add_sp(mem);
        self.op_cycles()
    }

    //
    // --- Rotates on A (Z always cleared) ---
    //

    pub fn RLCA(&mut self, _mem: &mut M) -> CycleType {
        let a = self.regs.a;
        self.regs.a = self.alu_rlc(a);
        self.regs.set_flag(Z_FLAG, false);
        self.op_cycles()
    }
    pub fn RLA(&mut self, _mem: &mut M) -> CycleType {
        let a = self.regs.a;
        self.regs.a = self.alu_rl(a);
        self.regs.set_flag(Z_FLAG, false);
        self.op_cycles()
    }
    pub fn RRCA(&mut self, _mem: &mut M) -> CycleType {
        let a = self.regs.a;
        self.regs.a = self.alu_rrc(a);
        self.regs.set_flag(Z_FLAG, false);
        self.op_cycles()
    }
    pub fn RRA(&mut self, _mem: &mut M) -> CycleType {
        let a = self.regs.a;
        self.regs.a = self.alu_rr(a);
        self.regs.set_flag(Z_FLAG, false);
        self.op_cycles()
    }

    //
    // --- Jumps, calls, returns ---
    //

    pub fn JR_n(&mut self, mem: &mut M) -> CycleType {
        let offset = self.fetch_byte(mem);
        self.cpu_jr(offset);
        self.op_cycles()
    }

    impl_JR_cond_n! {
        JR_NZ_n: (Z_FLAG, false), JR_Z_n: (Z_FLAG, true),
        JR_NC_n: (C_FLAG, false), JR_C_n: (C_FLAG, true),
    }

    pub fn JP_nn(&mut self, mem: &mut M) -> CycleType {
        self.regs.pc = self.fetch_word(mem);
        self.op_cycles()
    }

    impl_JP_cond_nn! {
        JP_NZ_nn: (Z_FLAG, false), JP_Z_nn: (Z_FLAG, true),
        JP_NC_nn: (C_FLAG, false), JP_C_nn: (C_FLAG, true),
    }

    // JP (HL) : no memory access, the jump target is HL itself
    pub fn JP_HLm(&mut self, _mem: &mut M) -> CycleType {
        self.regs.pc = self.regs.hl();
        self.op_cycles()
    }

    pub fn CALL_nn(&mut self, mem: &mut M) -> CycleType {
        let address = self.fetch_word(mem);
        self.cpu_call(mem, address);
        self.op_cycles()
    }

    impl_CALL_cond_nn! {
        CALL_NZ_nn: (Z_FLAG, false), CALL_Z_nn: (Z_FLAG, true),
        CALL_NC_nn: (C_FLAG, false), CALL_C_nn: (C_FLAG, true),
    }

    pub fn RET(&mut self, mem: &mut M) -> CycleType {
        self.regs.pc = self.stack_pop(mem);
        self.op_cycles()
    }

    impl_RET_cond! {
        RET_NZ: (Z_FLAG, false), RET_Z: (Z_FLAG, true),
        RET_NC: (C_FLAG, false), RET_C: (C_FLAG, true),
    }

    // RETI : return and enable interrupts immediately
    pub fn RETI(&mut self, mem: &mut M) -> CycleType {
        self.regs.pc = self.stack_pop(mem);
        self.ime = true;
        self.pending_ei = false;
        self.pending_di = false;
        self.op_cycles()
    }

    impl_RST! {
        RST_00H: 0x00, RST_08H: 0x08, RST_10H: 0x10, RST_18H: 0x18,
        RST_20H: 0x20, RST_28H: 0x28, RST_30H: 0x30, RST_38H: 0x38,
    }
}
