use crate::{
    flags::{FlagSetting, FlagSettings},
    target::Target,
    types::{BitfieldOps, BitwiseOps, Register8},
};

use super::{impl_helper::cost, InstructionTable};

impl<'a, T: Target> InstructionTable<'a, T> {
    /// Emits the semantics of the prefixed opcode `first second`. Every `second`
    /// is defined.
    pub fn secondary(&mut self, _first: u8, second: u8) {
        let reg = Register8::from_bits(second);
        match BitfieldOps::from_bits(second >> 6) {
            None => self.bitwise(BitwiseOps::from_bits(second >> 3), reg),
            Some(op) => self.bitfield(op, (second >> 3) & 0b111, reg),
        }
    }

    fn bitwise(&mut self, op: BitwiseOps, reg: Register8) {
        let value = self.read_operand(reg);

        let carry_bit = match op {
            BitwiseOps::RotateLeft
            | BitwiseOps::RotateLeftThroughCarry
            | BitwiseOps::ShiftLeft => Some(7),
            BitwiseOps::RotateRight
            | BitwiseOps::RotateRightThroughCarry
            | BitwiseOps::ArithmeticShiftRight
            | BitwiseOps::ShiftRight => Some(0),
            BitwiseOps::SwapNibbles => None,
        };
        let carry = match carry_bit {
            Some(bit) => FlagSetting::IfNonZero(self.target.get_bit(value.clone(), bit)),
            None => FlagSetting::Reset,
        };

        let result = match op {
            BitwiseOps::RotateLeft => self.target.rotate8(value, true, false),
            BitwiseOps::RotateRight => self.target.rotate8(value, false, false),
            BitwiseOps::RotateLeftThroughCarry => self.target.rotate8(value, true, true),
            BitwiseOps::RotateRightThroughCarry => self.target.rotate8(value, false, true),
            BitwiseOps::ShiftLeft => self.target.shift8_left(value),
            BitwiseOps::ArithmeticShiftRight => self.target.arithmetic_shift_right(value),
            BitwiseOps::SwapNibbles => self.target.swap_nibbles(value),
            BitwiseOps::ShiftRight => self.target.bitwise_shift_right(value),
        };
        self.write_operand(reg, result.clone());
        self.target.set_flags(FlagSettings::new(
            FlagSetting::IfZero(result),
            FlagSetting::Reset,
            FlagSetting::Reset,
            carry,
        ));

        self.target.take_time(cost(reg, 8, 16));
    }

    fn bitfield(&mut self, op: BitfieldOps, bit: u8, reg: Register8) {
        let value = self.read_operand(reg);

        match op {
            BitfieldOps::BitCheck => {
                let bit = self.target.get_bit(value, bit);
                self.target.set_flags(FlagSettings::new(
                    FlagSetting::IfZero(bit),
                    FlagSetting::Reset,
                    FlagSetting::Set,
                    FlagSetting::Keep,
                ));
                self.target.take_time(cost(reg, 8, 12));
            }
            BitfieldOps::BitReset | BitfieldOps::BitSet => {
                let on = op == BitfieldOps::BitSet;
                let result = self.target.set_bit(value, bit, on);
                self.write_operand(reg, result);
                self.target.take_time(cost(reg, 8, 16));
            }
        }
    }
}
