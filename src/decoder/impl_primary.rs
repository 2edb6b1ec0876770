use crate::{
    errors::OpcodeSlot,
    flags::{FlagSetting, FlagSettings},
    target::Target,
    types::{Register16, Register8},
    Error, Result,
};

use super::{patterns::*, InstructionTable, CB_PREFIX};

impl<'a, T: Target> InstructionTable<'a, T> {
    /// Emits the semantics of one primary opcode.
    pub fn primary(&mut self, opcode: u8) -> Result<()> {
        match opcode {
            0x00 => {
                self.no_operands();
                self.target.noop();
                self.target.take_time(4);
            }
            // LD (a16), SP
            0x08 => {
                let addr = self.fetch16();
                let sp = self.target.get_r16(Register16::SP);
                self.target.store_mem16(addr, sp);
                self.target.take_time(20);
            }
            // STOP, followed by a byte that must be zero
            0x10 => {
                let byte = self.fetch8();
                let zero = self.target.get_imm_value(0);
                self.target.require_equals(byte, zero);
                self.target.stop();
                self.target.take_time(4);
            }
            // JR e8
            0x18 => {
                let offset = self.fetch8();
                self.jump_relative(offset);
                self.target.take_time(12);
            }
            // DAA
            0x27 => {
                self.no_operands();
                let a = self.target.get_r8(Register8::A);
                let (result, carry) = self.target.perform_decimal_adjustment(a);
                self.target.write_r8(Register8::A, result.clone());
                self.target.set_flags(FlagSettings::new(
                    FlagSetting::IfZero(result),
                    FlagSetting::Keep,
                    FlagSetting::Reset,
                    FlagSetting::IfNonZero(carry),
                ));
                self.target.take_time(4);
            }
            // CPL
            0x2F => {
                self.no_operands();
                let a = self.target.get_r8(Register8::A);
                let result = self.target.bitwise_not(a);
                self.target.write_r8(Register8::A, result);
                self.target.set_flags(FlagSettings::new(
                    FlagSetting::Keep,
                    FlagSetting::Set,
                    FlagSetting::Set,
                    FlagSetting::Keep,
                ));
                self.target.take_time(4);
            }
            // SCF
            0x37 => {
                self.no_operands();
                self.target.set_flags(FlagSettings::new(
                    FlagSetting::Keep,
                    FlagSetting::Reset,
                    FlagSetting::Reset,
                    FlagSetting::Set,
                ));
                self.target.take_time(4);
            }
            // CCF
            0x3F => {
                self.no_operands();
                self.target.set_flags(FlagSettings::new(
                    FlagSetting::Keep,
                    FlagSetting::Reset,
                    FlagSetting::Reset,
                    FlagSetting::Flip,
                ));
                self.target.take_time(4);
            }
            0x76 => {
                self.no_operands();
                self.target.halt();
                self.target.take_time(4);
            }
            // JP a16
            0xC3 => {
                let addr = self.fetch16();
                self.target.write_r16(Register16::PC, addr);
                self.target.take_time(16);
            }
            // RET
            0xC9 => {
                self.no_operands();
                self.pop(Register16::PC);
                self.target.take_time(16);
            }
            // RETI
            0xD9 => {
                self.no_operands();
                self.pop(Register16::PC);
                self.target.enable_interrupts();
                self.target.take_time(16);
            }
            CB_PREFIX => {
                self.no_operands();
                self.double_opcode(opcode);
            }
            // CALL a16
            0xCD => {
                let addr = self.fetch16();
                self.target.push_pc();
                self.target.write_r16(Register16::PC, addr);
                self.target.take_time(24);
            }
            // ADD SP, e8
            0xE8 => {
                let sp = self.sp_plus_offset();
                self.target.write_r16(Register16::SP, sp);
                self.target.take_time(16);
            }
            // JP HL
            0xE9 => {
                self.no_operands();
                let hl = self.target.get_r16(Register16::HL);
                self.target.write_r16(Register16::PC, hl);
                self.target.take_time(4);
            }
            // LD (a16), A
            0xEA => {
                let addr = self.fetch16();
                let a = self.target.get_r8(Register8::A);
                self.target.store_mem8(addr, a);
                self.target.take_time(16);
            }
            // DI
            0xF3 => {
                self.no_operands();
                self.target.disable_interrupts();
                self.target.take_time(4);
            }
            // LD HL, SP + e8
            0xF8 => {
                let result = self.sp_plus_offset();
                self.target.write_r16(Register16::HL, result);
                self.target.take_time(12);
            }
            // LD SP, HL
            0xF9 => {
                self.no_operands();
                let hl = self.target.get_r16(Register16::HL);
                self.target.write_r16(Register16::SP, hl);
                self.target.take_time(8);
            }
            // LD A, (a16)
            0xFA => {
                let addr = self.fetch16();
                let value = self.target.load_mem8(addr);
                self.target.write_r8(Register8::A, value);
                self.target.take_time(16);
            }
            // EI
            0xFB => {
                self.no_operands();
                self.target.schedule_interrupt_enable();
                self.target.take_time(4);
            }
            _ if UNDEFINED_OPCODES.contains(&opcode) => {
                self.no_operands();
                self.target.abort();
            }
            _ => return self.primary_family(opcode),
        }

        Ok(())
    }

    fn primary_family(&mut self, opcode: u8) -> Result<()> {
        if LD_A_INDIRECT.matches(opcode) {
            self.ld_a_indirect(opcode);
        } else if ROTATE_A.matches(opcode) {
            self.rotate_a(opcode);
        } else if INC_DEC_R16.matches(opcode) {
            self.inc_dec_r16(opcode);
        } else if LD_R16_IMM.matches(opcode) {
            self.ld_r16_imm(opcode);
        } else if LD_R8_IMM.matches(opcode) {
            self.ld_r8_imm(opcode);
        } else if ADD_HL_R16.matches(opcode) {
            self.add_hl_r16(opcode);
        } else if INC_DEC_R8.matches(opcode) {
            self.inc_dec_r8(opcode);
        } else if LD_HL_INC_DEC.matches(opcode) {
            self.ld_hl_inc_dec(opcode);
        } else if LD_R8_R8.matches(opcode) {
            self.ld_r8_r8(opcode);
        } else if ALU_R8.matches(opcode) || ALU_IMM.matches(opcode) {
            self.alu(opcode);
        } else if PUSH_POP.matches(opcode) {
            self.push_pop(opcode);
        } else if RST.matches(opcode) {
            self.rst(opcode);
        } else if RET_CC.matches(opcode) {
            self.ret_cc(opcode);
        } else if JP_CC.matches(opcode) {
            self.jp_cc(opcode);
        } else if JR_CC.matches(opcode) {
            self.jr_cc(opcode);
        } else if CALL_CC.matches(opcode) {
            self.call_cc(opcode);
        } else if LD_IO.matches(opcode) {
            self.ld_io(opcode);
        } else {
            return Err(Error::DecodeCoverage(OpcodeSlot::Primary(opcode)));
        }

        Ok(())
    }
}
