use crate::{
    flags::{FlagSetting, FlagSettings},
    target::{Carried, Target},
    types::{Register16, Register8},
};

use super::InstructionTable;

/// Which ALU operation an `ALU A, x` opcode performs (bits 5..3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum AluOp {
    Add,
    AddWithCarry,
    Sub,
    SubWithCarry,
    And,
    Xor,
    Or,
    Compare,
}

impl AluOp {
    pub(super) const fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0 => AluOp::Add,
            1 => AluOp::AddWithCarry,
            2 => AluOp::Sub,
            3 => AluOp::SubWithCarry,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Compare,
        }
    }
}

/// Register-form cost, or the (HL) cost when the operand lives in memory.
pub(super) const fn cost(reg: Register8, register_cycles: u8, memory_cycles: u8) -> u8 {
    if reg.is_memory() {
        memory_cycles
    } else {
        register_cycles
    }
}

impl<'a, T: Target> InstructionTable<'a, T> {
    pub(super) fn no_operands(&mut self) {
        self.target.opcode_ends(0);
    }

    pub(super) fn fetch8(&mut self) -> T::Value {
        let value = self.target.load_pc8();
        self.target.opcode_ends(1);
        value
    }

    pub(super) fn fetch16(&mut self) -> T::Value {
        let value = self.target.load_pc16();
        self.target.opcode_ends(2);
        value
    }

    /// Reads an 8-bit operand, going to memory for `Register8::None`.
    pub(super) fn read_operand(&mut self, reg: Register8) -> T::Value {
        if reg.is_memory() {
            self.target.load_hl8()
        } else {
            self.target.get_r8(reg)
        }
    }

    pub(super) fn write_operand(&mut self, reg: Register8, value: T::Value) {
        if reg.is_memory() {
            self.target.store_hl8(value)
        } else {
            self.target.write_r8(reg, value)
        }
    }

    /// Flags shared by every add/sub shaped ALU result.
    pub(super) fn arithmetic_flags(
        &mut self,
        result: &Carried<T::Value>,
        subtract: bool,
        carry: Option<FlagSetting<T::Value>>,
    ) {
        let carry = carry.unwrap_or_else(|| FlagSetting::from_carry(result.carry.clone()));
        self.target.set_flags(FlagSettings::new(
            FlagSetting::IfZero(result.value.clone()),
            subtract.into(),
            FlagSetting::from_carry(result.half_carry.clone()),
            carry,
        ));
    }

    /// Flags of the logical ALU operations: only zero depends on the result.
    pub(super) fn logic_flags(&mut self, result: T::Value, half_carry: bool) {
        self.target.set_flags(FlagSettings::new(
            FlagSetting::IfZero(result),
            FlagSetting::Reset,
            half_carry.into(),
            FlagSetting::Reset,
        ));
    }

    /// PC += sign extended `offset`.
    pub(super) fn jump_relative(&mut self, offset: T::Value) {
        let pc = self.target.get_r16(Register16::PC);
        let offset = self.target.sign_extend8(offset);
        let target = self.target.add16(pc, offset);
        self.target.write_r16(Register16::PC, target.value);
    }

    pub(super) fn pop(&mut self, reg: Register16) {
        let sp = self.target.get_r16(Register16::SP);
        let value = self.target.load_mem16(sp.clone());
        self.target.write_r16(reg, value);
        self.target.inc2_sp(sp);
    }

    pub(super) fn push(&mut self, reg: Register16) {
        let sp = self.target.dec2_sp();
        let value = self.target.get_r16(reg);
        self.target.store_mem16(sp, value);
    }

    /// SP plus a signed immediate, with the low-byte carries of `ADD SP, e8`.
    pub(super) fn sp_plus_offset(&mut self) -> T::Value {
        let offset = self.fetch8();
        let sp = self.target.get_r16(Register16::SP);
        let offset = self.target.sign_extend8(offset);
        let result = self.target.add16(sp, offset);
        self.target.set_flags(FlagSettings::new(
            FlagSetting::Reset,
            FlagSetting::Reset,
            FlagSetting::from_carry(result.half_carry),
            FlagSetting::from_carry(result.carry),
        ));
        result.value
    }
}
