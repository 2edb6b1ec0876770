use crate::{
    flags::{FlagSetting, FlagSettings},
    target::Target,
    types::{ConditionalJumpType, Register16, Register16A, Register16B, Register8},
};

use super::{
    impl_helper::{cost, AluOp},
    InstructionTable,
};

impl<'a, T: Target> InstructionTable<'a, T> {
    // 000xx010: LD (BC/DE), A and LD A, (BC/DE)
    pub(super) fn ld_a_indirect(&mut self, opcode: u8) {
        self.no_operands();

        let reg = if opcode & 0x10 == 0 {
            Register16::BC
        } else {
            Register16::DE
        };
        let addr = self.target.get_r16(reg);
        if opcode & 0x08 != 0 {
            let value = self.target.load_mem8(addr);
            self.target.write_r8(Register8::A, value);
        } else {
            let a = self.target.get_r8(Register8::A);
            self.target.store_mem8(addr, a);
        }

        self.target.take_time(8);
    }

    // 000xx111: RLCA, RRCA, RLA, RRA
    pub(super) fn rotate_a(&mut self, opcode: u8) {
        self.no_operands();

        let left = opcode & 0x08 == 0;
        let through_carry = opcode & 0x10 != 0;

        let a = self.target.get_r8(Register8::A);
        let carry = self.target.get_bit(a.clone(), if left { 7 } else { 0 });
        let result = self.target.rotate8(a, left, through_carry);
        self.target.write_r8(Register8::A, result);
        self.target.set_flags(FlagSettings::new(
            FlagSetting::Reset,
            FlagSetting::Reset,
            FlagSetting::Reset,
            FlagSetting::IfNonZero(carry),
        ));

        self.target.take_time(4);
    }

    // 00xxx011: INC rr, DEC rr
    pub(super) fn inc_dec_r16(&mut self, opcode: u8) {
        self.no_operands();

        let reg = Register16::from(Register16A::from_bits(opcode >> 4));
        let value = self.target.get_r16(reg);
        let result = if opcode & 0x08 == 0 {
            self.target.plus_1(value)
        } else {
            self.target.minus_1(value)
        };
        self.target.write_r16(reg, result);

        self.target.take_time(8);
    }

    // 00xx0001: LD rr, d16
    pub(super) fn ld_r16_imm(&mut self, opcode: u8) {
        let value = self.fetch16();
        let reg = Register16::from(Register16A::from_bits(opcode >> 4));
        self.target.write_r16(reg, value);

        self.target.take_time(12);
    }

    // 00xxx110: LD r, d8
    pub(super) fn ld_r8_imm(&mut self, opcode: u8) {
        let value = self.fetch8();
        let reg = Register8::from_bits(opcode >> 3);
        self.write_operand(reg, value);

        self.target.take_time(cost(reg, 8, 12));
    }

    // 00xx1001: ADD HL, rr
    pub(super) fn add_hl_r16(&mut self, opcode: u8) {
        self.no_operands();

        let reg = Register16::from(Register16A::from_bits(opcode >> 4));
        let hl = self.target.get_r16(Register16::HL);
        let value = self.target.get_r16(reg);
        let result = self.target.add16_using_carry_modulo_16(hl, value);
        self.target.write_r16(Register16::HL, result.value);
        self.target.set_flags(FlagSettings::new(
            FlagSetting::Keep,
            FlagSetting::Reset,
            FlagSetting::from_carry(result.half_carry),
            FlagSetting::from_carry(result.carry),
        ));

        self.target.take_time(8);
    }

    // 00xxx10x: INC r, DEC r
    pub(super) fn inc_dec_r8(&mut self, opcode: u8) {
        self.no_operands();

        let decrement = opcode & 0x01 != 0;
        let reg = Register8::from_bits(opcode >> 3);
        let value = self.read_operand(reg);
        let one = self.target.get_imm_value(1);
        let result = if decrement {
            self.target.sub8(value, one)
        } else {
            self.target.add8(value, one)
        };
        self.write_operand(reg, result.value.clone());
        self.arithmetic_flags(&result, decrement, Some(FlagSetting::Keep));

        self.target.take_time(cost(reg, 4, 12));
    }

    // 001xx010: LD (HL+), A / LD A, (HL+) / LD (HL-), A / LD A, (HL-)
    pub(super) fn ld_hl_inc_dec(&mut self, opcode: u8) {
        self.no_operands();

        let hl = self.target.get_r16(Register16::HL);
        if opcode & 0x08 != 0 {
            let value = self.target.load_mem8(hl.clone());
            self.target.write_r8(Register8::A, value);
        } else {
            let a = self.target.get_r8(Register8::A);
            self.target.store_mem8(hl.clone(), a);
        }
        let hl = if opcode & 0x10 == 0 {
            self.target.plus_1(hl)
        } else {
            self.target.minus_1(hl)
        };
        self.target.write_r16(Register16::HL, hl);

        self.target.take_time(8);
    }

    // 01xxxxxx except HALT: LD r, r'
    pub(super) fn ld_r8_r8(&mut self, opcode: u8) {
        self.no_operands();

        let dst = Register8::from_bits(opcode >> 3);
        let src = Register8::from_bits(opcode);
        if dst == src {
            self.target.noop();
            self.target.take_time(4);
            return;
        }

        let value = self.read_operand(src);
        self.write_operand(dst, value);

        let memory = dst.is_memory() || src.is_memory();
        self.target.take_time(if memory { 8 } else { 4 });
    }

    // 10xxxxxx and 11xxx110: ADD, ADC, SUB, SBC, AND, XOR, OR, CP
    pub(super) fn alu(&mut self, opcode: u8) {
        let op = AluOp::from_bits(opcode >> 3);
        let (operand, cycles) = if opcode & 0x40 != 0 {
            (self.fetch8(), 8)
        } else {
            self.no_operands();
            let reg = Register8::from_bits(opcode);
            (self.read_operand(reg), cost(reg, 4, 8))
        };

        let a = self.target.get_r8(Register8::A);
        match op {
            AluOp::Add | AluOp::AddWithCarry | AluOp::Sub | AluOp::SubWithCarry => {
                let result = match op {
                    AluOp::Add => self.target.add8(a, operand),
                    AluOp::AddWithCarry => self.target.add8_carry(a, operand),
                    AluOp::Sub => self.target.sub8(a, operand),
                    _ => self.target.sub8_carry(a, operand),
                };
                self.target.write_r8(Register8::A, result.value.clone());
                let subtract = matches!(op, AluOp::Sub | AluOp::SubWithCarry);
                self.arithmetic_flags(&result, subtract, None);
            }
            AluOp::Compare => {
                let result = self.target.cmp8(a, operand);
                self.arithmetic_flags(&result, true, None);
            }
            AluOp::And => {
                let result = self.target.and8(a, operand);
                self.target.write_r8(Register8::A, result.clone());
                self.logic_flags(result, true);
            }
            AluOp::Xor => {
                let result = self.target.xor8(a, operand);
                self.target.write_r8(Register8::A, result.clone());
                self.logic_flags(result, false);
            }
            AluOp::Or => {
                let result = self.target.or8(a, operand);
                self.target.write_r8(Register8::A, result.clone());
                self.logic_flags(result, false);
            }
        }

        self.target.take_time(cycles);
    }

    // 11xx0x01: PUSH rr, POP rr
    pub(super) fn push_pop(&mut self, opcode: u8) {
        self.no_operands();

        let reg = Register16::from(Register16B::from_bits(opcode >> 4));
        if opcode & 0x04 != 0 {
            self.push(reg);
            self.target.take_time(16);
        } else {
            self.pop(reg);
            self.target.take_time(12);
        }
    }

    // 11xxx111: RST n
    pub(super) fn rst(&mut self, opcode: u8) {
        self.no_operands();

        self.target.push_pc();
        let addr = self.target.get_imm_value(u16::from(opcode & 0x38));
        self.target.write_r16(Register16::PC, addr);

        self.target.take_time(16);
    }

    /// Ends the instruction after `cycles` unless the condition in bits 4..3 holds.
    fn unless_condition(&mut self, opcode: u8, cycles: u8) {
        let cond = ConditionalJumpType::from_bits(opcode >> 3);
        let cond = self.target.condition_to_value(cond);
        self.target.do_nothing_if(cond, cycles, true);
    }

    // 110xx000: RET cc
    pub(super) fn ret_cc(&mut self, opcode: u8) {
        self.no_operands();

        self.unless_condition(opcode, 8);
        self.pop(Register16::PC);

        self.target.take_time(20);
    }

    // 110xx010: JP cc, a16
    pub(super) fn jp_cc(&mut self, opcode: u8) {
        let addr = self.fetch16();

        self.unless_condition(opcode, 12);
        self.target.write_r16(Register16::PC, addr);

        self.target.take_time(16);
    }

    // 001xx000: JR cc, e8
    pub(super) fn jr_cc(&mut self, opcode: u8) {
        let offset = self.fetch8();

        self.unless_condition(opcode, 8);
        self.jump_relative(offset);

        self.target.take_time(12);
    }

    // 110xx100: CALL cc, a16
    pub(super) fn call_cc(&mut self, opcode: u8) {
        let addr = self.fetch16();

        self.unless_condition(opcode, 12);
        self.target.push_pc();
        self.target.write_r16(Register16::PC, addr);

        self.target.take_time(24);
    }

    // 111x00x0: LDH (a8), A / LDH A, (a8) / LD (C), A / LD A, (C)
    pub(super) fn ld_io(&mut self, opcode: u8) {
        let (port, cycles) = if opcode & 0x02 != 0 {
            self.no_operands();
            (self.target.get_r8(Register8::C), 8)
        } else {
            (self.fetch8(), 12)
        };

        if opcode & 0x10 != 0 {
            let value = self.target.load_io(port);
            self.target.write_r8(Register8::A, value);
        } else {
            let a = self.target.get_r8(Register8::A);
            self.target.store_io(port, a);
        }

        self.target.take_time(cycles);
    }
}
